//! Probe endpoint configuration

use std::time::Duration;

/// Endpoints and client settings for the measurement engine.
///
/// The defaults point at public, highly available endpoints sized so a
/// full cycle finishes promptly even on slow connections.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Endpoint answering the minimal latency round trips
    pub latency_url: String,
    /// Moderately sized resource fetched by each download attempt
    pub download_url: String,
    /// Echo-style endpoint accepting the upload payload
    pub upload_url: String,
    /// Per-request deadline enforced by the HTTP client
    pub request_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            latency_url: "https://www.gstatic.com/generate_204".to_string(),
            download_url: "https://speed.cloudflare.com/__down?bytes=524288".to_string(),
            upload_url: "https://speed.cloudflare.com/__up".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
