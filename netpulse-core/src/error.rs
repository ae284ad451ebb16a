//! Error types for the measurement engine

use thiserror::Error;

/// Failures of a single probe request.
///
/// These never escape a probe cycle: the engine logs them and
/// substitutes a fallback value for the failed attempt.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never completed (DNS, connect, timeout, or a failure
    /// mid-body)
    #[error("Request failed: {reason}")]
    Request {
        /// Reason for the transport failure
        reason: String,
    },

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status: {code}")]
    Status {
        /// HTTP status code
        code: u16,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::Status {
                code: status.as_u16(),
            },
            None => TransportError::Request {
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = TransportError::Request {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = TransportError::Status { code: 503 };
        assert!(err.to_string().contains("503"));
    }
}
