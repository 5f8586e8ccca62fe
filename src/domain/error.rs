//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent invalid inputs to the funds-flow and funding logic.
/// They are independent of the web/infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Observation window must cover at least one day
    #[error("Invalid window size: {0} days (must be at least 1)")]
    InvalidWindow(u32),

    /// Unix timestamp cannot be represented as a calendar date
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Date label format contains unsupported strftime items
    #[error("Invalid date label format: {0}")]
    InvalidLabelFormat(String),

    /// Currency code is not a three-letter ISO code
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    /// No bank transfer rail exists for the country
    #[error("Unsupported country for funding instructions: {0}")]
    UnsupportedCountry(String),
}

impl DomainError {
    /// Create an unsupported country error
    pub fn unsupported_country(country: impl Into<String>) -> Self {
        Self::UnsupportedCountry(country.into())
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWindow(_)
                | Self::InvalidLabelFormat(_)
                | Self::InvalidCurrency(_)
                | Self::UnsupportedCountry(_)
        )
    }
}
