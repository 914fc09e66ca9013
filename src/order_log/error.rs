use thiserror::Error;

use crate::domain::OrderId;

/// Errors that can occur when storing or looking up orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Order {id} is out of sequence: last recorded order is {last}")]
    OutOfSequence { id: OrderId, last: OrderId },
}
