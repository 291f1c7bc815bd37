//! Failure taxonomy for calls against the object-hierarchy service.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every [`crate::ObjectSource`] call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Missing, expired, or insufficient credential (HTTP 401/403).
    #[error("unauthorized")]
    Unauthorized,
    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl SourceError {
    /// Classify a non-success HTTP status for `path`.
    #[must_use]
    pub fn from_status(status: u16, path: &str, body: &str) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound(path.to_owned()),
            _ => Self::Status { status, message: status_message(body) },
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Prefer the backend's `{"message": ...}` field, falling back to the raw body.
fn status_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}
