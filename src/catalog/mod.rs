//! The fixed set of purchasable products and their stock levels.

mod error;

pub use error::*;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::domain::Product;

/// Products in display order. Stock is the only field that changes after
/// startup, apart from explicit repricing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids.
    #[allow(dead_code)]
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// The MERS Clothing Line catalog the shop opens with.
    pub fn mers_clothing_line() -> Self {
        Self {
            products: vec![
                Product::new("XL001", "White T-Shirt S", dec!(199), 20),
                Product::new("XL002", "White T-Shirt M", dec!(199), 50),
                Product::new("XL003", "White T-Shirt L", dec!(199), 40),
                Product::new("XL004", "White T-Shirt XL", dec!(199), 15),
                Product::new("HL001", "Black Hoodie M", dec!(499), 30),
                Product::new("HL002", "Black Hoodie L", dec!(499), 20),
                Product::new("HL003", "Black Hoodie XL", dec!(499), 60),
                Product::new("CP001", "White Premium Cap", dec!(299), 50),
                Product::new("CP002", "Black Premium Cap", dec!(299), 60),
                Product::new("CP003", "Red Premium Cap", dec!(299), 20),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: &str) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Product, CatalogError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Checks that `quantity` units are in stock and takes them in one step.
    ///
    /// On success returns the product as it is after the decrement. On
    /// failure the stock is left untouched.
    pub fn reserve_stock(&mut self, id: &str, quantity: u32) -> Result<&Product, CatalogError> {
        let product = self.find_mut(id)?;
        if let Err(e) = product.reserve(quantity) {
            warn!(product_id = %id, error = %e, "Stock reservation rejected");
            return Err(e);
        }
        debug!(product_id = %id, quantity, remaining = product.stock, "Stock reserved");
        Ok(&*product)
    }

    /// Changes the catalog price. Lines already in a cart or an order keep
    /// the price they were captured with.
    #[allow(dead_code)]
    pub fn reprice(&mut self, id: &str, price: Decimal) -> Result<(), CatalogError> {
        let product = self.find_mut(id)?;
        debug!(product_id = %id, old = %product.price, new = %price, "Product repriced");
        product.price = price;
        Ok(())
    }
}
