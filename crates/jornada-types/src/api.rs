//! JSON payloads of the HTTP interface.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Successful calculation: the resulting instant as an ISO-8601 UTC string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDateResponse {
    pub date: String,
}

impl WorkingDateResponse {
    /// Render `instant` with millisecond precision and a `Z` suffix
    /// (`2025-01-13T14:00:00.000Z`).
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            date: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Error payload: a machine-readable kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}
