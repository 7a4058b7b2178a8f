use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tripcost::{CostEstimator, RateTable, TripCostConfig, web};

fn init_tracing(config: &TripCostConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripCostConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    let rates = RateTable::from_csv_path(&config.dataset.path)
        .with_context(|| format!("Failed to load rate dataset from {}", config.dataset.path))?;
    let estimator = Arc::new(CostEstimator::new(Arc::new(rates)));

    web::run(config.server.port, estimator).await
}
