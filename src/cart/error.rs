use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur while filling or checking out a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Shopping cart is empty")]
    EmptyCart,
    #[error("Catalog error: {0}")]
    Catalog(CatalogError),
}

impl From<CatalogError> for CartError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => CartError::ProductNotFound(id),
            CatalogError::InsufficientStock { requested, available } => {
                CartError::InsufficientStock { requested, available }
            }
            other => CartError::Catalog(other),
        }
    }
}
