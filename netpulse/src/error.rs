//! Error types for the monitor

use thiserror::Error;

/// Monitor startup failures
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The monitor could not be assembled
    #[error("Initialization failed: {reason}")]
    Initialization {
        /// Reason for the failure
        reason: String,
    },
}

/// Failures loading or persisting the measurement history.
///
/// These never stop the monitor: an unreadable history starts the
/// monitor empty, and a failed save leaves the in-memory history
/// authoritative until the next cycle tries again.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("History file I/O failed: {source}")]
    Io {
        /// Underlying error
        #[from]
        source: std::io::Error,
    },

    /// The stored payload could not be encoded or decoded
    #[error("History data is malformed: {reason}")]
    Format {
        /// Parsing or encoding detail
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = StorageError::from(io);
        assert!(err.to_string().contains("read-only"));
    }
}
