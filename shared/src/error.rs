use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown to the user whenever a fetch fails, whatever the cause.
pub const FAILED_MESSAGE: &str = "Failed to fetch analysis results";

/// Failures at the fetch boundary of the analytics view.
///
/// The variants exist for logging; the view collapses all of them into a single
/// failed state carrying [`FAILED_MESSAGE`].
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// Connection refused, DNS failure, aborted request or timeout.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {status}")]
    Server { status: u16 },

    /// Body was not JSON, not an object, or did not match the payload schema.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn timeout(after_ms: u32) -> Self {
        Self::Network(format!("request timed out after {}ms", after_ms))
    }

    pub fn user_message(&self) -> &'static str {
        FAILED_MESSAGE
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Malformed(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(FetchError::Network("connection refused".to_string()) ; "network")]
    #[test_case(FetchError::timeout(15000) ; "timeout")]
    #[test_case(FetchError::Server { status: 500 } ; "server")]
    #[test_case(FetchError::Malformed("expected value".to_string()) ; "malformed")]
    fn test_every_cause_collapses_to_one_message(error: FetchError) {
        assert_eq!(error.user_message(), FAILED_MESSAGE);
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_json_error_becomes_malformed() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: FetchError = parse_error.into();

        assert!(matches!(error, FetchError::Malformed(_)));
    }

    #[test]
    fn test_timeout_is_network_failure() {
        match FetchError::timeout(250) {
            FetchError::Network(message) => assert!(message.contains("250ms")),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
