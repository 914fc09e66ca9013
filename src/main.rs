mod app_system;
mod cart;
mod catalog;
mod cli;
mod clients;
mod config;
mod domain;
mod error;
mod order_log;
mod shop;
mod shop_actor;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, ShopSystem};
use crate::catalog::Catalog;
use crate::cli::{Args, ShopCli};
use crate::config::Config;
use crate::domain::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?.with_args(&args);

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);
    info!(?config, "Starting MERS shop");

    let system = ShopSystem::new(
        Catalog::mers_clothing_line(),
        Box::new(SystemClock),
        config.channel_buffer,
    );

    let app = ShopCli::new(system.shop_client.clone(), config);
    let result = app.run().await;
    if let Err(e) = &result {
        error!(error = %e, "Shopping session failed");
    }
    drop(app);

    system.shutdown().await?;

    info!("Application completed successfully");
    result
}
