//! Wire types for the payment platform API

use serde::{Deserialize, Serialize};

use super::BankTransferType;
use crate::domain::Currency;

/// A page from one of the platform's list endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

/// Filter for `GET /v1/balance_transactions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceTransactionQuery {
    /// Inclusive lower bound on `created`, Unix seconds
    pub created_gte: i64,
    /// Inclusive upper bound on `created`, Unix seconds
    pub created_lte: i64,
    pub limit: u8,
    /// Cursor: ID of the last transaction of the previous page
    pub starting_after: Option<String>,
}

impl BalanceTransactionQuery {
    pub fn new(created_gte: i64, created_lte: i64, limit: u8) -> Self {
        Self {
            created_gte,
            created_lte,
            limit,
            starting_after: None,
        }
    }

    pub fn starting_after(mut self, cursor: impl Into<String>) -> Self {
        self.starting_after = Some(cursor.into());
        self
    }

    /// Query string parameters in the platform's bracket notation
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("created[gte]", self.created_gte.to_string()),
            ("created[lte]", self.created_lte.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(ref cursor) = self.starting_after {
            params.push(("starting_after", cursor.clone()));
        }
        params
    }
}

/// `{amount, currency}` pair in minor units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAmount {
    pub amount: i64,
    pub currency: String,
}

/// Funds available to the issuing product
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssuingBalance {
    #[serde(default)]
    pub available: Vec<BalanceAmount>,
}

/// Response of `GET /v1/balance`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformBalance {
    #[serde(default)]
    pub available: Vec<BalanceAmount>,
    #[serde(default)]
    pub pending: Vec<BalanceAmount>,
    #[serde(default)]
    pub issuing: Option<IssuingBalance>,
    #[serde(default)]
    pub livemode: bool,
}

/// Body of `POST /v1/issuing/funding_instructions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingInstructionsRequest {
    pub currency: Currency,
    pub bank_transfer_type: BankTransferType,
}

impl FundingInstructionsRequest {
    pub fn new(currency: Currency, bank_transfer_type: BankTransferType) -> Self {
        Self {
            currency,
            bank_transfer_type,
        }
    }

    /// Form-encoded fields in the platform's bracket notation
    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency", self.currency.code().to_string()),
            ("funding_type", "bank_transfer".to_string()),
            ("bank_transfer[type]", self.bank_transfer_type.as_str().to_string()),
        ]
    }
}

/// Bank details to send money to in order to fund the issuing balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingInstructions {
    pub currency: String,
    pub funding_type: String,
    #[serde(default)]
    pub livemode: bool,
    /// Rail-specific account details (financial addresses), passed through as-is
    #[serde(default)]
    pub bank_transfer: serde_json::Value,
}
