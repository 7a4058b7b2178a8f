//! Error types and handling for the `TripCost` application

use thiserror::Error;

/// Main error type for the `TripCost` application
#[derive(Error, Debug)]
pub enum TripCostError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Dataset loading errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// No dataset row matches the requested (country, city) pair
    #[error("No rates found for {city}, {country}")]
    NotFound { country: String, city: String },

    /// Chart rendering errors
    #[error("Chart error: {message}")]
    Chart { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripCostError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    /// Create a new input validation error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a (country, city) pair
    pub fn not_found<S: Into<String>>(country: S, city: S) -> Self {
        Self::NotFound {
            country: country.into(),
            city: city.into(),
        }
    }

    /// Create a new chart error
    pub fn chart<S: Into<String>>(message: S) -> Self {
        Self::Chart {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripCostError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripCostError::Dataset { .. } => {
                "The rate dataset could not be loaded. Please check the dataset file.".to_string()
            }
            TripCostError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            TripCostError::NotFound { country, city } => {
                format!("No cost data available for {city}, {country}. Please pick another city.")
            }
            TripCostError::Chart { .. } => "Chart rendering failed.".to_string(),
            TripCostError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripCostError::General { message } => message.clone(),
        }
    }
}
