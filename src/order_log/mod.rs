//! Finalized orders in checkout order, plus the counter that numbers them.

mod error;

pub use error::*;

use tracing::{debug, info};

use crate::domain::{Order, OrderId, OrderIdSource};

#[derive(Debug)]
pub struct OrderLog {
    orders: Vec<Order>,
    next_id: OrderId,
}

impl Default for OrderLog {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLog {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Stores a finished order and returns its id.
    ///
    /// # Errors
    /// Returns `OutOfSequence` if `order` does not carry an id greater than
    /// every id already stored.
    pub fn append(&mut self, order: Order) -> Result<OrderId, OrderError> {
        if let Some(last) = self.orders.last() {
            if order.id() <= last.id() {
                return Err(OrderError::OutOfSequence {
                    id: order.id(),
                    last: last.id(),
                });
            }
        }
        let id = order.id();
        // Keep the counter ahead of anything stored, even ids issued elsewhere.
        self.next_id = self.next_id.max(id + 1);
        self.orders.push(order);
        info!(order_id = id, orders = self.orders.len(), "Order recorded");
        Ok(id)
    }

    pub fn find_by_id(&self, id: OrderId) -> Result<&Order, OrderError> {
        self.orders
            .iter()
            .find(|o| o.id() == id)
            .ok_or(OrderError::NotFound(id))
    }

    /// All orders, oldest first.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderIdSource for OrderLog {
    fn next_order_id(&mut self) -> OrderId {
        let id = self.next_id;
        self.next_id += 1;
        debug!(order_id = id, "Issued order id");
        id
    }
}
