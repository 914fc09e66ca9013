//! Pending line items for the single shopper, with merge-on-add and checkout.

mod error;

pub use error::*;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::catalog::Catalog;
use crate::domain::{Clock, LineItem, Order, OrderIdSource};

/// At most one line per product id, and every line has a positive quantity.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reserves `quantity` units of `product_id` and records them in the cart.
    ///
    /// Re-adding a product already in the cart grows its line instead of
    /// adding a second one. The reservation is the only fallible step and it
    /// happens before the cart is touched, so a failed add leaves both the
    /// cart and the stock as they were.
    ///
    /// # Errors
    /// - `InvalidQuantity` if `quantity` is zero
    /// - `ProductNotFound` if the catalog has no such product
    /// - `InsufficientStock` if the catalog cannot cover `quantity`
    #[instrument(skip(self, catalog))]
    pub fn add_item(
        &mut self,
        catalog: &mut Catalog,
        product_id: &str,
        quantity: u32,
    ) -> Result<&LineItem, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let product = catalog.reserve_stock(product_id, quantity)?;

        let index = match self.lines.iter().position(|l| l.product_id == product_id) {
            Some(index) => {
                self.lines[index].quantity += quantity;
                debug!(quantity = self.lines[index].quantity, "Merged into existing line");
                index
            }
            None => {
                self.lines.push(LineItem::snapshot(product, quantity));
                debug!("Created new line");
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[index])
    }

    /// Sum of `unit_price * quantity` over the lines, using captured prices.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Discards every line. Reserved stock is not returned to the catalog.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Turns the cart into a completed order and empties it.
    ///
    /// The cart's lines are moved into the order, so the order total is
    /// always computed from exactly the lines it carries. No id is drawn
    /// from `ids` when the cart is empty.
    #[instrument(skip_all)]
    pub fn checkout(
        &mut self,
        clock: &dyn Clock,
        ids: &mut dyn OrderIdSource,
    ) -> Result<Order, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let id = ids.next_order_id();
        let lines = std::mem::take(&mut self.lines);
        let order = Order::completed(id, clock.today(), lines);

        info!(order_id = order.id(), total = %order.total(), "Cart checked out");
        Ok(order)
    }
}
