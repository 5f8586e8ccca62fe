//! Platform Errors
//!
//! Error types for calls to the payment platform API.

use serde::Deserialize;

/// Errors that can occur talking to the payment platform
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status returned by the platform
    #[error("Platform API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode platform response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PlatformError {
    /// HTTP status reported by the platform, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            PlatformError::Api { status, .. } => Some(*status),
            PlatformError::Http(e) => e.status().map(|s| s.as_u16()),
            PlatformError::Decode(_) => None,
        }
    }

    /// Check if the platform rejected our credentials
    pub fn is_authentication_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Build an API error from a status and raw error body
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => PlatformError::Api {
                status,
                code: envelope.error.code,
                message: envelope
                    .error
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            },
            Err(_) => PlatformError::Api {
                status,
                code: None,
                message: body.chars().take(200).collect(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}
