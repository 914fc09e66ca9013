use rust_decimal::Decimal;

use crate::catalog::CatalogError;

pub type ProductId = String;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Takes `quantity` units out of stock.
    ///
    /// # Errors
    /// Returns `InsufficientStock` and leaves the stock untouched if fewer than
    /// `quantity` units are available.
    pub fn reserve(&mut self, quantity: u32) -> Result<(), CatalogError> {
        if self.stock >= quantity {
            self.stock -= quantity;
            Ok(())
        } else {
            Err(CatalogError::InsufficientStock {
                requested: quantity,
                available: self.stock,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reserve_decrements_stock() {
        let mut product = Product::new("XL001", "White T-Shirt S", dec!(199), 20);
        product.reserve(5).unwrap();
        assert_eq!(product.stock, 15);
        product.reserve(15).unwrap();
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn reserve_more_than_available_leaves_stock() {
        let mut product = Product::new("XL004", "White T-Shirt XL", dec!(199), 15);
        let err = product.reserve(100).unwrap_err();
        assert_eq!(err, CatalogError::InsufficientStock { requested: 100, available: 15 });
        assert_eq!(product.stock, 15);
    }
}
