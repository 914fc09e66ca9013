//! # Mock Framework
//!
//! Utilities for testing `ShopClient` without a running `ShopService`.
//!
//! [`create_mock_client`] returns a client wired to a receiver the test
//! controls. The `expect_*` helpers pull the next request off that receiver
//! and hand back its parameters and responder, so the test decides what the
//! "service" answers.

use tokio::sync::mpsc;

use crate::clients::ShopClient;
use crate::domain::{LineItem, Order};
use crate::shop_actor::{ServiceResponse, ShopRequest};

pub fn create_mock_client(buffer_size: usize) -> (ShopClient, mpsc::Receiver<ShopRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ShopClient::new(sender), receiver)
}

/// Next message must be an AddToCart request.
pub async fn expect_add_to_cart(
    receiver: &mut mpsc::Receiver<ShopRequest>,
) -> Option<(String, u32, ServiceResponse<LineItem>)> {
    match receiver.recv().await {
        Some(ShopRequest::AddToCart {
            product_id,
            quantity,
            respond_to,
        }) => Some((product_id, quantity, respond_to)),
        _ => None,
    }
}

/// Next message must be a Checkout request.
pub async fn expect_checkout(
    receiver: &mut mpsc::Receiver<ShopRequest>,
) -> Option<ServiceResponse<Order>> {
    match receiver.recv().await {
        Some(ShopRequest::Checkout { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartError;
    use crate::error::ShopError;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_add_to_cart_round_trip() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.add_to_cart("XL001".to_string(), 5).await });

        let (product_id, quantity, responder) = expect_add_to_cart(&mut receiver)
            .await
            .expect("Expected AddToCart request");
        assert_eq!(product_id, "XL001");
        assert_eq!(quantity, 5);
        let line = LineItem {
            product_id,
            name: "White T-Shirt S".to_string(),
            unit_price: dec!(199),
            quantity,
        };
        responder.send(Ok(line.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(line));
    }

    #[tokio::test]
    async fn test_service_errors_pass_through() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.checkout().await });

        let responder = expect_checkout(&mut receiver).await.expect("Expected Checkout request");
        responder.send(Err(ShopError::Cart(CartError::EmptyCart))).unwrap();

        assert_eq!(task.await.unwrap(), Err(ShopError::Cart(CartError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.checkout().await });

        let responder = expect_checkout(&mut receiver).await.expect("Expected Checkout request");
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(ShopError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_service_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(
            client.list_orders().await,
            Err(ShopError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
