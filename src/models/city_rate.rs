//! Per-city baseline cost rows loaded from the rate dataset

use serde::{Deserialize, Serialize};

/// One dataset row describing baseline transport/hotel/food costs for a city.
///
/// Serde renames mirror the dataset's column headers so rows deserialize
/// straight out of the CSV. All monetary fields are in INR.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityRate {
    /// Country the city belongs to
    #[serde(rename = "Country")]
    pub country: String,
    /// City name
    #[serde(rename = "City")]
    pub city: String,
    /// Distance in kilometers; shown in the city picker, unused by the cost arithmetic
    #[serde(rename = "Distance")]
    pub distance_km: f64,
    /// One-way airfare
    #[serde(rename = "Airfare_INR")]
    pub airfare: f64,
    /// One-way train fare
    #[serde(rename = "Train_Fare_INR")]
    pub train_fare: f64,
    /// One-way bus fare
    #[serde(rename = "Bus_Fare_INR")]
    pub bus_fare: f64,
    /// Hotel cost per night
    #[serde(rename = "Hotel_Cost_per_night_INR")]
    pub hotel_per_night: f64,
    /// Food cost per day
    #[serde(rename = "Food_Cost_per_day_INR")]
    pub food_per_day: f64,
}

impl CityRate {
    /// Whether this row matches a (country, city) lookup key
    #[must_use]
    pub fn matches(&self, country: &str, city: &str) -> bool {
        self.country == country && self.city == city
    }
}

/// The city projection returned to the city picker: name plus distance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityListing {
    pub city: String,
    pub distance_km: f64,
}

impl From<&CityRate> for CityListing {
    fn from(rate: &CityRate) -> Self {
        Self {
            city: rate.city.clone(),
            distance_km: rate.distance_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> CityRate {
        CityRate {
            country: "India".to_string(),
            city: "Delhi".to_string(),
            distance_km: 1500.0,
            airfare: 5000.0,
            train_fare: 1200.0,
            bus_fare: 800.0,
            hotel_per_night: 2000.0,
            food_per_day: 500.0,
        }
    }

    #[test]
    fn test_matches_is_exact() {
        let rate = delhi();
        assert!(rate.matches("India", "Delhi"));
        assert!(!rate.matches("India", "delhi"));
        assert!(!rate.matches("Nepal", "Delhi"));
    }

    #[test]
    fn test_listing_projection() {
        let listing = CityListing::from(&delhi());
        assert_eq!(listing.city, "Delhi");
        assert_eq!(listing.distance_km, 1500.0);
    }
}
