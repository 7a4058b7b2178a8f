//! Cost estimation core
//!
//! `CostEstimator` is the one piece of business logic in the service: given a
//! lookup key (country, city, transport mode, stay duration, currency) it
//! resolves baseline rates from the immutable `RateTable` and produces a
//! categorical breakdown plus a ±10% total range. It is a pure function of
//! its inputs and the table, so handlers may call it concurrently without
//! locking.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::dataset::RateTable;
use crate::error::TripCostError;
use crate::models::{CityListing, CostEstimate, Currency, TransportMode};

/// One cost calculation request, carrying the raw form values.
///
/// `transport_mode` and `stay_duration` stay as strings here: the duration is
/// validated by the estimator, and unrecognized transport modes are priced as
/// zero rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub country: String,
    pub city: String,
    pub transport_mode: String,
    pub stay_duration: String,
    #[serde(default)]
    pub currency: Currency,
}

/// Cost estimator over an injected, read-only rate table.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    rates: Arc<RateTable>,
}

impl CostEstimator {
    #[must_use]
    pub fn new(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    /// Distinct countries in the dataset, for the country picker
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        self.rates.countries()
    }

    /// Cities of a country, for the city picker; empty if the country is unknown
    #[must_use]
    pub fn cities(&self, country: &str) -> Vec<CityListing> {
        self.rates.cities(country)
    }

    /// Calculate the cost estimate for a request.
    ///
    /// Fails with `InvalidInput` when the stay duration is not a non-negative
    /// integer, and with `NotFound` when no dataset row matches the
    /// (country, city) pair. Both are recoverable; the boundary re-prompts.
    pub fn calculate(&self, request: &EstimateRequest) -> Result<CostEstimate, TripCostError> {
        let nights = parse_stay_duration(&request.stay_duration)?;

        let rate = self
            .rates
            .lookup(&request.country, &request.city)
            .ok_or_else(|| TripCostError::not_found(&request.country, &request.city))?;

        // Unrecognized modes contribute no transport cost, matching the
        // original form handling.
        let transport_cost = TransportMode::from_form(&request.transport_mode)
            .map_or(0.0, |mode| mode.fare(rate));
        let hotel_cost = rate.hotel_per_night * nights as f64;
        let food_cost = rate.food_per_day * nights as f64;

        let estimate = CostEstimate::from_breakdown(transport_cost, hotel_cost, food_cost)
            .in_currency(request.currency);

        debug!(
            country = %request.country,
            city = %request.city,
            nights,
            transport = estimate.transport_cost,
            hotel = estimate.hotel_cost,
            food = estimate.food_cost,
            "calculated cost estimate"
        );
        Ok(estimate)
    }
}

/// Parse a raw stay-duration form value into a night count.
///
/// Only plain digit strings count as valid: signs (`+3`, `-1`) and anything
/// non-numeric are rejected, not just values `u32` cannot hold.
fn parse_stay_duration(raw: &str) -> Result<u32, TripCostError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TripCostError::invalid_input("stay duration is required"));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TripCostError::invalid_input(format!(
            "stay duration must be a non-negative whole number, got '{trimmed}'"
        )));
    }
    trimmed.parse::<u32>().map_err(|_| {
        TripCostError::invalid_input(format!("stay duration is too large: '{trimmed}'"))
    })
}
