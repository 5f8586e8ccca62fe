//! Balance transaction
//!
//! Read-only view over a ledger entry reported by the payment platform.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

/// Kind of balance transaction.
///
/// Only the variants the application reasons about are named; every other
/// platform type is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    IssuingAuthorizationHold,
    IssuingAuthorizationRelease,
    IssuingTransaction,
    Topup,
    Payout,
    Charge,
    Refund,
    StripeFee,
    Adjustment,
    Other(String),
}

impl TransactionType {
    /// Platform spelling of this type
    pub fn as_str(&self) -> &str {
        match self {
            Self::IssuingAuthorizationHold => "issuing_authorization_hold",
            Self::IssuingAuthorizationRelease => "issuing_authorization_release",
            Self::IssuingTransaction => "issuing_transaction",
            Self::Topup => "topup",
            Self::Payout => "payout",
            Self::Charge => "charge",
            Self::Refund => "refund",
            Self::StripeFee => "stripe_fee",
            Self::Adjustment => "adjustment",
            Self::Other(other) => other,
        }
    }

    /// Provisional reservation of funds, settled later by another transaction
    pub fn is_authorization_hold_or_release(&self) -> bool {
        matches!(
            self,
            Self::IssuingAuthorizationHold | Self::IssuingAuthorizationRelease
        )
    }
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "issuing_authorization_hold" => Self::IssuingAuthorizationHold,
            "issuing_authorization_release" => Self::IssuingAuthorizationRelease,
            "issuing_transaction" => Self::IssuingTransaction,
            "topup" => Self::Topup,
            "payout" => Self::Payout,
            "charge" => Self::Charge,
            "refund" => Self::Refund,
            "stripe_fee" => Self::StripeFee,
            "adjustment" => Self::Adjustment,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A balance transaction as listed by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub id: String,
    /// Unix timestamp, seconds
    pub created: i64,
    /// Signed amount in the currency's minor unit
    pub amount: i64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
}

impl BalanceTransaction {
    /// Calendar date (UTC) on which this transaction was created.
    ///
    /// # Errors
    /// - `DomainError::InvalidTimestamp` if `created` is outside chrono's range
    pub fn created_date(&self) -> Result<NaiveDate, DomainError> {
        DateTime::<Utc>::from_timestamp(self.created, 0)
            .map(|dt| dt.date_naive())
            .ok_or(DomainError::InvalidTimestamp(self.created))
    }
}
