//! Shop Ships binary - wires configuration, logging, and the data manager,
//! then reports store statistics. Presentation layers (web, terminal) sit on
//! top of the library; this entry point is infrastructure wiring only.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shop_ships::adapters::JsonFileStorage;
use shop_ships::application::DataManager;
use shop_ships::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!(data_dir = %config.storage.data_dir.display(), "starting shop-ships");

    let storage = Arc::new(JsonFileStorage::new(&config.storage.data_dir));
    let manager = DataManager::new(storage);

    let stats = manager.statistics();
    info!(
        total_products = stats.total_products,
        available_products = stats.available_products,
        total_orders = stats.total_orders,
        total_revenue = stats.total_revenue,
        average_order_value = stats.average_order_value,
        "store statistics"
    );

    Ok(())
}
