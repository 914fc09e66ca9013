use thiserror::Error;

use crate::cart::CartError;
use crate::order_log::OrderError;

/// Errors surfaced to callers of the shop service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
