//! Query and command definitions
//!
//! Inputs and outputs of the request handlers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Currency;

// =========================================================================
// Funds flow
// =========================================================================

/// Query for the funds flow chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsFlowQuery {
    /// Most recent day included in the window
    pub window_end: NaiveDate,
}

impl FundsFlowQuery {
    pub fn new(window_end: NaiveDate) -> Self {
        Self { window_end }
    }

    /// Window ending today (UTC)
    pub fn today() -> Self {
        Self::new(chrono::Utc::now().date_naive())
    }
}

// =========================================================================
// Funding instructions
// =========================================================================

/// Command to obtain bank details for funding the issuing balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingInstructionsCommand {
    /// Two-letter country code of the platform account
    pub country: String,
}

impl FundingInstructionsCommand {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

// =========================================================================
// Balance
// =========================================================================

/// Amount in major units for one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    pub currency: Currency,
    pub amount: Decimal,
}

/// Result of a balance lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub available: Vec<MoneyAmount>,
    pub pending: Vec<MoneyAmount>,
    pub issuing_available: Vec<MoneyAmount>,
    pub livemode: bool,
}
