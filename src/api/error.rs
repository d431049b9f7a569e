//! Error types for the remote persistence endpoint.

use std::fmt;

/// Errors surfaced by the job-plan endpoint client.
///
/// Transport failures (including timeouts) and non-2xx responses get the
/// same treatment upstream: the message is shown and the draft is left
/// untouched so the user can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network or timeout error before a response arrived
    Network { message: String },
    /// Non-2xx application response
    Http { status: u16, message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    /// True when no response was received at all.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network { message } => {
                write!(f, "Network error - {message}")
            }
            ApiError::Http { status, message } => {
                write!(f, "HTTP {status} - {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_network() {
        assert!(ApiError::network("connection refused").is_network());
        assert!(!ApiError::http(500, "boom").is_network());
    }

    #[test]
    fn test_display() {
        let err = ApiError::http(502, "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP 502 - Bad Gateway");

        let err = ApiError::network("request timed out");
        assert_eq!(err.to_string(), "Network error - request timed out");
    }
}
