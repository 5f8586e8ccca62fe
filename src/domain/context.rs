//! Request Context
//!
//! Per-request metadata carried through handlers for log correlation.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use uuid::Uuid;

/// Header carrying the correlation ID in and out of the service
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Context for a single API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationContext {
    /// Correlation ID for request tracing
    pub correlation_id: Uuid,

    /// Client IP address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<IpAddr>,
}

impl OperationContext {
    /// Create a context with a freshly generated correlation ID
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            client_ip: None,
        }
    }

    /// Reuse a caller-supplied correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = correlation_id;
        self
    }

    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    /// Build a context from an optional raw header value.
    /// Unparseable values are replaced rather than rejected.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.and_then(|s| Uuid::parse_str(s.trim()).ok()) {
            Some(id) => Self::new().with_correlation_id(id),
            None => Self::new(),
        }
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::new()
    }
}
