//! Transport mode selection and fare resolution

use serde::{Deserialize, Serialize};

use super::CityRate;

/// Transport modes the dataset carries a fare column for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Airfare,
    Train,
    Bus,
}

impl TransportMode {
    /// Parse the form value submitted by the UI.
    ///
    /// Matching is exact; any other string yields `None`, which the estimator
    /// prices as zero transport cost rather than rejecting the request.
    #[must_use]
    pub fn from_form(value: &str) -> Option<Self> {
        match value {
            "Airfare" => Some(Self::Airfare),
            "Train" => Some(Self::Train),
            "Bus" => Some(Self::Bus),
            _ => None,
        }
    }

    /// Select the fare column this mode corresponds to
    #[must_use]
    pub fn fare(&self, rate: &CityRate) -> f64 {
        match self {
            Self::Airfare => rate.airfare,
            Self::Train => rate.train_fare,
            Self::Bus => rate.bus_fare,
        }
    }

    /// All selectable modes, in the order the UI presents them
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Airfare, Self::Train, Self::Bus]
    }
}
