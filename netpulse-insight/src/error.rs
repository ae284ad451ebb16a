//! Error types for the analysis client

use thiserror::Error;

/// Failures reaching or decoding the analysis service.
///
/// The monitor never propagates these; any failure degrades to the
/// fixed "unable to connect" assessment.
#[derive(Error, Debug)]
pub enum InsightError {
    /// The request never completed
    #[error("Analysis request failed: {reason}")]
    Request {
        /// Reason for the transport failure
        reason: String,
    },

    /// The service answered with a non-success status
    #[error("Analysis service returned status {code}")]
    Status {
        /// HTTP status code
        code: u16,
    },

    /// The service answered with a body that is not a valid assessment
    #[error("Analysis response was malformed: {reason}")]
    Malformed {
        /// Decoding failure detail
        reason: String,
    },
}

impl From<reqwest::Error> for InsightError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            InsightError::Status {
                code: status.as_u16(),
            }
        } else if err.is_decode() {
            InsightError::Malformed {
                reason: err.to_string(),
            }
        } else {
            InsightError::Request {
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = InsightError::Status { code: 502 };
        assert!(err.to_string().contains("502"));

        let err = InsightError::Malformed {
            reason: "missing field `status`".to_string(),
        };
        assert!(err.to_string().contains("missing field"));
    }
}
