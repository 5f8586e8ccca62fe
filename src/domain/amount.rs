//! Currency and amount conversion
//!
//! The platform reports every amount as a signed integer in the currency's
//! minor unit. `Currency` knows how many decimal places its minor unit has and
//! converts to major units without going through floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Currencies whose minor unit equals the major unit
const ZERO_DECIMAL_CURRENCIES: &[&str] = &[
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];

/// Currencies with a thousandth minor unit
const THREE_DECIMAL_CURRENCIES: &[&str] = &["bhd", "jod", "kwd", "omr", "tnd"];

/// Default number of decimal places in a minor unit
const DEFAULT_EXPONENT: u32 = 2;

/// A validated, lowercase ISO 4217 currency code.
///
/// # Example
/// ```
/// use expense_desk::domain::Currency;
/// use rust_decimal::Decimal;
///
/// let usd: Currency = "USD".parse().unwrap();
/// assert_eq!(usd.code(), "usd");
/// assert_eq!(usd.to_major_units(1050), Decimal::new(1050, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a currency from a three-letter code (case-insensitive).
    ///
    /// # Errors
    /// - `DomainError::InvalidCurrency` if the code is not three ASCII letters
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrency(code.to_string()));
        }
        Ok(Self(code.to_ascii_lowercase()))
    }

    /// Lowercase currency code as the platform spells it
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Number of decimal places in this currency's minor unit
    pub fn minor_unit_exponent(&self) -> u32 {
        let code = self.0.as_str();
        if ZERO_DECIMAL_CURRENCIES.contains(&code) {
            0
        } else if THREE_DECIMAL_CURRENCIES.contains(&code) {
            3
        } else {
            DEFAULT_EXPONENT
        }
    }

    /// Convert a signed minor-unit amount to major units, keeping the sign.
    pub fn to_major_units(&self, minor: i64) -> Decimal {
        Decimal::new(minor, self.minor_unit_exponent())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}
