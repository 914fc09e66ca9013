use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{LineItem, Order, OrderId, Product};
use crate::error::ShopError;
use crate::shop_actor::{CartSummary, ShopRequest};

/// Handle for talking to the `ShopService`. Cheap to clone.
#[derive(Clone)]
pub struct ShopClient {
    sender: mpsc::Sender<ShopRequest>,
}

impl ShopClient {
    pub fn new(sender: mpsc::Sender<ShopRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. Requests already queued are dropped.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ShopError> {
        debug!("Sending shutdown");
        self.sender
            .send(ShopRequest::Shutdown)
            .await
            .map_err(|_| ShopError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(ShopClient => fn list_products() -> Vec<Product> as ShopRequest::ListProducts);
client_method!(ShopClient => fn add_to_cart(product_id: String, quantity: u32) -> LineItem as ShopRequest::AddToCart);
client_method!(ShopClient => fn view_cart() -> CartSummary as ShopRequest::ViewCart);
client_method!(ShopClient => fn checkout() -> Order as ShopRequest::Checkout);
client_method!(ShopClient => fn clear_cart() -> () as ShopRequest::ClearCart);
client_method!(ShopClient => fn get_order(id: OrderId) -> Order as ShopRequest::GetOrder);
client_method!(ShopClient => fn list_orders() -> Vec<Order> as ShopRequest::ListOrders);
