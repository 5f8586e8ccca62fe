//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::platform::PlatformError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Upstream errors (502)
    #[error("Payment platform error: {0}")]
    Platform(#[from] PlatformError),

    // Server errors (5xx)
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Status code and machine-readable code for this error
    fn classify(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }

            AppError::Domain(domain_err) => match domain_err {
                DomainError::InvalidWindow(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_window", Some(domain_err.to_string()))
                }
                DomainError::InvalidLabelFormat(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_label_format", Some(domain_err.to_string()))
                }
                DomainError::InvalidCurrency(code) => {
                    (StatusCode::BAD_REQUEST, "invalid_currency", Some(code.clone()))
                }
                DomainError::UnsupportedCountry(country) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "unsupported_country",
                    Some(country.clone()),
                ),
                // Timestamps come from the platform, not the caller
                DomainError::InvalidTimestamp(_) => {
                    tracing::error!("Upstream data error: {}", domain_err);
                    (StatusCode::BAD_GATEWAY, "invalid_upstream_data", Some(domain_err.to_string()))
                }
            },

            // 502 Bad Gateway
            AppError::Platform(e) => {
                tracing::error!("Payment platform error: {:?}", e);
                let code = if e.is_authentication_error() {
                    "upstream_authentication_failed"
                } else {
                    "upstream_error"
                };
                (StatusCode::BAD_GATEWAY, code, None)
            }

            // 500 Internal Server Error
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error", None)
            }
        }
    }

    /// Message shown to API clients. Server-side failures get a fixed text;
    /// the full error only goes to the log.
    fn public_message(&self) -> String {
        match self {
            AppError::Platform(_) => "Payment platform request failed".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::Config(_) => "Server configuration error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = self.classify();

        let body = ErrorResponse {
            error: self.public_message(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
