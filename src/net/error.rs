//! Tagged error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies are separate
//! variants so views can tell "the network is down" from "the server said
//! no". No variant triggers a retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered outside the 2xx range.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A 2xx body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling the optional `detail` from the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: detail_from_body(body) }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's detail when it sent one.
    pub fn user_message(&self) -> String {
        self.detail().map_or_else(|| self.to_string(), str::to_owned)
    }
}

/// Extract a human-readable `detail` from an error body.
///
/// Accepts `{"detail": "..."}` and validation lists of the form
/// `{"detail": [{"msg": "..."}]}`; anything else yields `None`.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}
