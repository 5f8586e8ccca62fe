//! Funding instruction lookup
//!
//! Maps the account's country to the bank transfer rail and currency used to
//! top up the issuing balance.

use serde::{Deserialize, Serialize};

use crate::domain::{Currency, DomainError};

/// Euro-area countries served by SEPA transfers
const EURO_AREA_COUNTRIES: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "HR", "IE", "IT", "LT", "LU", "LV",
    "MT", "NL", "PT", "SI", "SK",
];

/// Bank transfer rail for funding the issuing balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankTransferType {
    UsBankTransfer,
    GbBankTransfer,
    EuBankTransfer,
}

impl BankTransferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankTransferType::UsBankTransfer => "us_bank_transfer",
            BankTransferType::GbBankTransfer => "gb_bank_transfer",
            BankTransferType::EuBankTransfer => "eu_bank_transfer",
        }
    }
}

/// Resolve the transfer rail and currency for a two-letter country code.
///
/// # Errors
/// - `DomainError::UnsupportedCountry` if no rail serves the country
pub fn funding_for_country(country: &str) -> Result<(BankTransferType, Currency), DomainError> {
    let country = country.trim().to_ascii_uppercase();
    let (rail, code) = match country.as_str() {
        "US" => (BankTransferType::UsBankTransfer, "usd"),
        "GB" => (BankTransferType::GbBankTransfer, "gbp"),
        c if EURO_AREA_COUNTRIES.contains(&c) => (BankTransferType::EuBankTransfer, "eur"),
        _ => return Err(DomainError::unsupported_country(country)),
    };
    Ok((rail, Currency::new(code)?))
}
