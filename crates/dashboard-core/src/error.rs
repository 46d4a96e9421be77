//! Error types shared by the core and the UI's API layer.

use thiserror::Error;

/// Failure of one outbound request.
///
/// The `Display` text is what ends up in a fetcher's `error` field, so it is
/// written for the person looking at the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no session token is stored; please sign in again")]
    MissingToken,
    #[error("the session is no longer authorized (HTTP 401)")]
    Unauthorized,
    #[error("request failed with HTTP status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("could not read server response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Map a non-2xx status code to its error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => FetchError::Unauthorized,
            other => FetchError::Status(other),
        }
    }

    /// Whether the stored credential should be dropped after this failure
    pub fn invalidates_session(&self) -> bool {
        matches!(self, FetchError::Unauthorized | FetchError::MissingToken)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(FetchError::from_status(401), FetchError::Unauthorized);
        assert_eq!(FetchError::from_status(500), FetchError::Status(500));
        assert!(FetchError::Unauthorized.invalidates_session());
        assert!(!FetchError::Status(503).invalidates_session());
    }

    #[test]
    fn test_messages_are_not_empty() {
        let errors = [
            FetchError::MissingToken,
            FetchError::Unauthorized,
            FetchError::Status(404),
            FetchError::Transport("offline".into()),
            FetchError::Decode("eof".into()),
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
