//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::{
    Currency, DateLabelFormat, DEFAULT_LABEL_FORMAT, DEFAULT_WINDOW_SIZE_DAYS,
};

/// Largest page the platform's list endpoints accept
pub const MAX_PAGE_LIMIT: u8 = 100;

/// Longest funds flow window, in days
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret API key for the payment platform
    pub platform_secret_key: String,

    /// Base URL of the payment platform API
    pub platform_api_base: String,

    /// Timeout for a single upstream request
    pub http_timeout: Duration,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Currency used to label and scale the funds flow chart
    pub display_currency: Currency,

    /// Number of days in the funds flow window
    pub funds_flow_window_days: u32,

    /// Page size for balance transaction listing
    pub funds_flow_page_limit: u8,

    /// Upper bound on pages fetched per funds flow request
    pub funds_flow_max_pages: u32,

    /// strftime pattern for chart date labels
    pub date_label_format: DateLabelFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform_secret_key = lookup("STRIPE_SECRET_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingEnv("STRIPE_SECRET_KEY"))?;

        let platform_api_base = lookup("STRIPE_API_BASE")
            .unwrap_or_else(|| "https://api.stripe.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let http_timeout_secs: u64 = parse_or(&lookup, "HTTP_TIMEOUT_SECS", 30)?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = parse_or(&lookup, "PORT", 3000)?;

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let display_currency = Currency::new(
            &lookup("DISPLAY_CURRENCY").unwrap_or_else(|| "usd".to_string()),
        )
        .map_err(|_| ConfigError::InvalidValue("DISPLAY_CURRENCY"))?;

        let funds_flow_window_days =
            parse_or(&lookup, "FUNDS_FLOW_WINDOW_DAYS", DEFAULT_WINDOW_SIZE_DAYS)?;
        if funds_flow_window_days == 0 || funds_flow_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue("FUNDS_FLOW_WINDOW_DAYS"));
        }

        let funds_flow_page_limit = parse_or(&lookup, "FUNDS_FLOW_PAGE_LIMIT", MAX_PAGE_LIMIT)?;
        if funds_flow_page_limit == 0 || funds_flow_page_limit > MAX_PAGE_LIMIT {
            return Err(ConfigError::InvalidValue("FUNDS_FLOW_PAGE_LIMIT"));
        }

        let funds_flow_max_pages = parse_or(&lookup, "FUNDS_FLOW_MAX_PAGES", 1)?;
        if funds_flow_max_pages == 0 {
            return Err(ConfigError::InvalidValue("FUNDS_FLOW_MAX_PAGES"));
        }

        let date_label_format = DateLabelFormat::new(
            lookup("DATE_LABEL_FORMAT").unwrap_or_else(|| DEFAULT_LABEL_FORMAT.to_string()),
        )
        .map_err(|_| ConfigError::InvalidValue("DATE_LABEL_FORMAT"))?;

        Ok(Self {
            platform_secret_key,
            platform_api_base,
            http_timeout: Duration::from_secs(http_timeout_secs),
            host,
            port,
            environment,
            display_currency,
            funds_flow_window_days,
            funds_flow_page_limit,
            funds_flow_max_pages,
            date_label_format,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether the configured key targets live mode
    pub fn is_live_key(&self) -> bool {
        self.platform_secret_key.starts_with("sk_live_")
            || self.platform_secret_key.starts_with("rk_live_")
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue(key)),
        None => Ok(default),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("STRIPE_SECRET_KEY", "sk_test_123")]))
            .unwrap();

        assert_eq!(config.platform_api_base, "https://api.stripe.com");
        assert_eq!(config.port, 3000);
        assert_eq!(config.display_currency.code(), "usd");
        assert_eq!(config.funds_flow_window_days, 10);
        assert_eq!(config.funds_flow_page_limit, 100);
        assert_eq!(config.funds_flow_max_pages, 1);
        assert_eq!(config.date_label_format.pattern(), "%b %d");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(!config.is_production());
        assert!(!config.is_live_key());
    }

    #[test]
    fn test_missing_secret_key() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::MissingEnv("STRIPE_SECRET_KEY"))));

        let result = Config::from_lookup(lookup_from(&[("STRIPE_SECRET_KEY", "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingEnv(_))));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("STRIPE_SECRET_KEY", "sk_live_abc"),
            ("STRIPE_API_BASE", "http://localhost:12111/"),
            ("PORT", "8080"),
            ("ENVIRONMENT", "production"),
            ("DISPLAY_CURRENCY", "EUR"),
            ("FUNDS_FLOW_WINDOW_DAYS", "30"),
            ("FUNDS_FLOW_MAX_PAGES", "5"),
            ("DATE_LABEL_FORMAT", "%d/%m"),
        ]))
        .unwrap();

        assert_eq!(config.platform_api_base, "http://localhost:12111");
        assert_eq!(config.port, 8080);
        assert!(config.is_production());
        assert!(config.is_live_key());
        assert_eq!(config.display_currency.code(), "eur");
        assert_eq!(config.funds_flow_window_days, 30);
        assert_eq!(config.funds_flow_max_pages, 5);
    }

    #[test]
    fn test_window_upper_bound_accepted() {
        let config = Config::from_lookup(lookup_from(&[
            ("STRIPE_SECRET_KEY", "sk_test_123"),
            ("FUNDS_FLOW_WINDOW_DAYS", "366"),
        ]))
        .unwrap();
        assert_eq!(config.funds_flow_window_days, MAX_WINDOW_DAYS);
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            ("PORT", "not-a-port", "PORT"),
            ("DISPLAY_CURRENCY", "dollars", "DISPLAY_CURRENCY"),
            ("FUNDS_FLOW_WINDOW_DAYS", "0", "FUNDS_FLOW_WINDOW_DAYS"),
            ("FUNDS_FLOW_WINDOW_DAYS", "367", "FUNDS_FLOW_WINDOW_DAYS"),
            ("FUNDS_FLOW_WINDOW_DAYS", "4294967295", "FUNDS_FLOW_WINDOW_DAYS"),
            ("FUNDS_FLOW_PAGE_LIMIT", "101", "FUNDS_FLOW_PAGE_LIMIT"),
            ("FUNDS_FLOW_MAX_PAGES", "0", "FUNDS_FLOW_MAX_PAGES"),
            ("DATE_LABEL_FORMAT", "%H", "DATE_LABEL_FORMAT"),
        ];

        for (key, value, expected) in cases {
            let result = Config::from_lookup(lookup_from(&[
                ("STRIPE_SECRET_KEY", "sk_test_123"),
                (key, value),
            ]));
            match result {
                Err(ConfigError::InvalidValue(name)) => assert_eq!(name, expected),
                other => panic!("expected invalid {key}, got {other:?}"),
            }
        }
    }
}
