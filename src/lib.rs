//! `TripCost` - Interactive travel cost estimation
//!
//! This library provides the core functionality for per-city cost lookup,
//! trip cost estimation with a fixed uncertainty band, currency conversion,
//! and cost-breakdown visualization.

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod estimator;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use config::TripCostConfig;
pub use dataset::RateTable;
pub use error::TripCostError;
pub use estimator::{CostEstimator, EstimateRequest};
pub use models::{CityListing, CityRate, CostEstimate, Currency, TransportMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripCostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
