use tracing::{error, info, instrument};

use crate::catalog::Catalog;
use crate::clients::ShopClient;
use crate::domain::Clock;
use crate::error::ShopError;
use crate::shop::Shop;
use crate::shop_actor::ShopService;

/// Starts the shop actor and owns its task handle.
pub struct ShopSystem {
    pub shop_client: ShopClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    /// Spawns a `ShopService` over `catalog`. Must be called inside a tokio
    /// runtime.
    #[instrument(name = "shop_system", skip(catalog, clock))]
    pub fn new(catalog: Catalog, clock: Box<dyn Clock + Send>, buffer_size: usize) -> Self {
        info!(products = catalog.products().len(), "Starting shop system");

        let (service, shop_client) = ShopService::new(buffer_size, Shop::new(catalog), clock);
        let handle = tokio::spawn(service.run());

        info!("Shop system started");
        Self { shop_client, handle }
    }

    /// Stops the service and waits for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), ShopError> {
        info!("Shutting down shop system");

        // The service may already have stopped if every client was dropped.
        let _ = self.shop_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(ShopError::ActorCommunicationError(format!("Service task failed: {}", e)));
        }

        info!("Shop system shutdown complete");
        Ok(())
    }
}
