//! The catalog, the cart and the order log for one shopper, tied together.

use tracing::instrument;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::domain::{Clock, LineItem, Order, OrderId, Product};
use crate::order_log::OrderLog;
use crate::error::ShopError;

#[derive(Debug)]
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    orders: OrderLog,
}

impl Shop {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            orders: OrderLog::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    #[allow(dead_code)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product_id: &str, quantity: u32) -> Result<LineItem, ShopError> {
        let line = self.cart.add_item(&mut self.catalog, product_id, quantity)?;
        Ok(line.clone())
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Checks the cart out and records the order in one step.
    #[instrument(skip_all)]
    pub fn checkout(&mut self, clock: &dyn Clock) -> Result<Order, ShopError> {
        let order = self.cart.checkout(clock, &mut self.orders)?;
        self.orders.append(order.clone())?;
        Ok(order)
    }

    pub fn order(&self, id: OrderId) -> Result<&Order, ShopError> {
        Ok(self.orders.find_by_id(id)?)
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartError;
    use crate::domain::FixedClock;
    use crate::order_log::OrderError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 11, 3).unwrap())
    }

    #[test]
    fn walkthrough_add_merge_checkout() {
        let mut shop = Shop::new(Catalog::mers_clothing_line());

        shop.add_to_cart("XL001", 5).unwrap();
        assert_eq!(shop.cart().total(), dec!(995.00));
        let line = shop.add_to_cart("XL001", 3).unwrap();
        assert_eq!(line.quantity, 8);
        assert_eq!(shop.cart().total(), dec!(1592.00));

        let order = shop.checkout(&clock()).unwrap();
        assert_eq!(order.id(), 1);
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].product_id, "XL001");
        assert_eq!(order.lines()[0].quantity, 8);
        assert_eq!(order.lines()[0].unit_price, dec!(199.00));
        assert_eq!(order.total(), dec!(1592.00));
        assert!(shop.cart().is_empty());
        assert_eq!(shop.catalog().find_by_id("XL001").unwrap().stock, 12);
        assert_eq!(shop.order(1).unwrap(), &order);
    }

    #[test]
    fn empty_checkout_creates_no_order() {
        let mut shop = Shop::new(Catalog::mers_clothing_line());
        assert_eq!(
            shop.checkout(&clock()).unwrap_err(),
            ShopError::Cart(CartError::EmptyCart)
        );
        assert!(shop.orders().is_empty());

        shop.add_to_cart("HL002", 1).unwrap();
        // The failed checkout did not burn id 1.
        assert_eq!(shop.checkout(&clock()).unwrap().id(), 1);
    }

    #[test]
    fn successive_orders_get_increasing_ids() {
        let mut shop = Shop::new(Catalog::mers_clothing_line());
        for expected in 1..=3 {
            shop.add_to_cart("CP001", 1).unwrap();
            assert_eq!(shop.checkout(&clock()).unwrap().id(), expected);
        }
        let ids: Vec<OrderId> = shop.orders().iter().map(Order::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            shop.order(4).unwrap_err(),
            ShopError::Order(OrderError::NotFound(4))
        );
    }
}
