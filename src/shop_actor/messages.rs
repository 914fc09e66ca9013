use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::domain::{LineItem, Order, OrderId, Product};
use crate::error::ShopError;

pub type ServiceResult<T> = std::result::Result<T, ShopError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Cart contents as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<LineItem>,
    pub total: Decimal,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Typed messages for the shop actor. Each variant carries its parameters and
/// a oneshot channel for the reply.
#[derive(Debug)]
pub enum ShopRequest {
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>>,
    },
    AddToCart {
        product_id: String,
        quantity: u32,
        respond_to: ServiceResponse<LineItem>,
    },
    ViewCart {
        respond_to: ServiceResponse<CartSummary>,
    },
    Checkout {
        respond_to: ServiceResponse<Order>,
    },
    ClearCart {
        respond_to: ServiceResponse<()>,
    },
    GetOrder {
        id: OrderId,
        respond_to: ServiceResponse<Order>,
    },
    ListOrders {
        respond_to: ServiceResponse<Vec<Order>>,
    },
    Shutdown,
}
