use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::ShopClient;
use crate::domain::{Clock, LineItem, Order, OrderId};
use crate::shop::Shop;

use super::messages::{CartSummary, ServiceResponse, ShopRequest};

/// Sole owner of the shop state. Requests are handled one at a time, so a
/// stock check and its decrement can never interleave with another request.
pub struct ShopService {
    receiver: mpsc::Receiver<ShopRequest>,
    shop: Shop,
    clock: Box<dyn Clock + Send>,
}

impl ShopService {
    pub fn new(buffer_size: usize, shop: Shop, clock: Box<dyn Clock + Send>) -> (Self, ShopClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            shop,
            clock,
        };
        let client = ShopClient::new(sender);
        (service, client)
    }

    #[instrument(name = "shop_service", skip(self))]
    pub async fn run(mut self) {
        info!("ShopService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ShopRequest::ListProducts { respond_to } => {
                    let _ = respond_to.send(Ok(self.shop.products().to_vec()));
                }
                ShopRequest::AddToCart {
                    product_id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_add_to_cart(product_id, quantity, respond_to);
                }
                ShopRequest::ViewCart { respond_to } => {
                    self.handle_view_cart(respond_to);
                }
                ShopRequest::Checkout { respond_to } => {
                    self.handle_checkout(respond_to);
                }
                ShopRequest::ClearCart { respond_to } => {
                    info!(lines = self.shop.cart().lines().len(), "Clearing cart");
                    self.shop.clear_cart();
                    let _ = respond_to.send(Ok(()));
                }
                ShopRequest::GetOrder { id, respond_to } => {
                    self.handle_get_order(id, respond_to);
                }
                ShopRequest::ListOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.shop.orders().to_vec()));
                }
                ShopRequest::Shutdown => {
                    info!("ShopService shutting down");
                    break;
                }
            }
        }

        info!("ShopService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_add_to_cart(
        &mut self,
        product_id: String,
        quantity: u32,
        respond_to: ServiceResponse<LineItem>,
    ) {
        debug!("Processing add_to_cart request");

        let result = self.shop.add_to_cart(&product_id, quantity);
        match &result {
            Ok(line) => info!(line_quantity = line.quantity, "Added to cart"),
            Err(e) => warn!(error = %e, "Add to cart rejected"),
        }

        let _ = respond_to.send(result);
    }

    fn handle_view_cart(&self, respond_to: ServiceResponse<CartSummary>) {
        let cart = self.shop.cart();
        let summary = CartSummary {
            lines: cart.lines().to_vec(),
            total: cart.total(),
        };
        let _ = respond_to.send(Ok(summary));
    }

    #[instrument(skip_all)]
    fn handle_checkout(&mut self, respond_to: ServiceResponse<Order>) {
        debug!("Processing checkout request");

        let result = self.shop.checkout(self.clock.as_ref());
        match &result {
            Ok(order) => info!(order_id = order.id(), total = %order.total(), "Order placed"),
            Err(e) => warn!(error = %e, "Checkout rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_get_order(&self, id: OrderId, respond_to: ServiceResponse<Order>) {
        debug!("Processing get_order request");
        let result = self.shop.order(id).cloned();
        if result.is_err() {
            debug!("Order not found");
        }
        let _ = respond_to.send(result);
    }
}
