//! Data models for the TripCost application
//!
//! This module contains the core domain models organized by concern:
//! - `CityRate`: One immutable dataset row of per-city baseline costs
//! - Transport: Transport mode selection and fare resolution
//! - Estimate: Computed cost breakdowns, ranges, and currencies

pub mod city_rate;
pub mod estimate;
pub mod transport;

// Re-export all public types for convenient access
pub use city_rate::{CityListing, CityRate};
pub use estimate::{COST_VARIATION, CostEstimate, Currency, INR_PER_USD};
pub use transport::TransportMode;
