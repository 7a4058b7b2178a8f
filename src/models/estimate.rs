//! Computed cost estimates: breakdowns, uncertainty ranges, currencies

use serde::{Deserialize, Serialize};

/// Fixed uncertainty applied to the total: the range is total × (1 ∓ 0.10).
pub const COST_VARIATION: f64 = 0.10;

/// Fixed INR → USD conversion rate. No live exchange-rate lookup.
pub const INR_PER_USD: f64 = 75.0;

/// Currency an estimate is expressed in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Inr,
    #[default]
    Usd,
}

/// A per-request cost estimate: categorical breakdown plus total range.
///
/// Ephemeral by design; constructed by the estimator, rendered, and dropped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CostEstimate {
    pub transport_cost: f64,
    pub hotel_cost: f64,
    pub food_cost: f64,
    pub total_min: f64,
    pub total_max: f64,
    pub currency: Currency,
}

impl CostEstimate {
    /// Build an estimate in INR from a breakdown, deriving the ±10% range
    #[must_use]
    pub fn from_breakdown(transport_cost: f64, hotel_cost: f64, food_cost: f64) -> Self {
        let total = transport_cost + hotel_cost + food_cost;
        Self {
            transport_cost,
            hotel_cost,
            food_cost,
            total_min: total * (1.0 - COST_VARIATION),
            total_max: total * (1.0 + COST_VARIATION),
            currency: Currency::Inr,
        }
    }

    /// Convert every monetary field into the target currency.
    ///
    /// INR → INR is the identity; INR → USD divides by the fixed rate.
    #[must_use]
    pub fn in_currency(self, currency: Currency) -> Self {
        match (self.currency, currency) {
            (Currency::Inr, Currency::Usd) => Self {
                transport_cost: self.transport_cost / INR_PER_USD,
                hotel_cost: self.hotel_cost / INR_PER_USD,
                food_cost: self.food_cost / INR_PER_USD,
                total_min: self.total_min / INR_PER_USD,
                total_max: self.total_max / INR_PER_USD,
                currency: Currency::Usd,
            },
            _ => self,
        }
    }

    /// Sum of the categorical breakdown
    #[must_use]
    pub fn breakdown_total(&self) -> f64 {
        self.transport_cost + self.hotel_cost + self.food_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_range_derivation() {
        let estimate = CostEstimate::from_breakdown(5000.0, 6000.0, 1500.0);
        assert!((estimate.total_min - 11250.0).abs() < EPSILON);
        assert!((estimate.total_max - 13750.0).abs() < EPSILON);
        assert_eq!(estimate.currency, Currency::Inr);
    }

    #[test]
    fn test_range_ratio_is_currency_independent() {
        let inr = CostEstimate::from_breakdown(1234.0, 567.0, 89.0);
        let usd = inr.clone().in_currency(Currency::Usd);
        let expected = 1.10 / 0.90;
        assert!((inr.total_max / inr.total_min - expected).abs() < EPSILON);
        assert!((usd.total_max / usd.total_min - expected).abs() < EPSILON);
    }

    #[test]
    fn test_usd_conversion_is_linear() {
        let inr = CostEstimate::from_breakdown(5000.0, 6000.0, 1500.0);
        let usd = inr.clone().in_currency(Currency::Usd);
        assert!((usd.transport_cost - inr.transport_cost / 75.0).abs() < EPSILON);
        assert!((usd.hotel_cost - inr.hotel_cost / 75.0).abs() < EPSILON);
        assert!((usd.food_cost - inr.food_cost / 75.0).abs() < EPSILON);
        assert!((usd.total_min - inr.total_min / 75.0).abs() < EPSILON);
        assert!((usd.total_max - inr.total_max / 75.0).abs() < EPSILON);
    }

    #[test]
    fn test_inr_conversion_is_identity() {
        let inr = CostEstimate::from_breakdown(100.0, 200.0, 300.0);
        assert_eq!(inr.clone().in_currency(Currency::Inr), inr);
    }

    #[test]
    fn test_currency_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"usd\"");
        assert_eq!(
            serde_json::from_str::<Currency>("\"inr\"").unwrap(),
            Currency::Inr
        );
    }
}
