//! HTTP transport for the three probe request kinds

use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use std::time::{Duration, Instant};

/// Byte count and wall time of one completed transfer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transfer {
    /// Bytes moved over the wire
    pub bytes: usize,
    /// Wall time from request issue to body completion
    pub elapsed: Duration,
}

impl Transfer {
    /// Throughput in Mbps, where one megabit is 1,048,576 bits.
    ///
    /// A zero-duration transfer reports `0.0` rather than infinity.
    pub fn mbps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        (self.bytes as f64 * 8.0) / 1_048_576.0 / secs
    }
}

/// Transport seam for probe requests.
///
/// Implementations time each request themselves, so the engine's
/// aggregation logic stays independent of any real network or client.
#[async_trait]
pub trait ProbeTransport: Send + Sync + fmt::Debug {
    /// Minimal round trip against `url`. The response body and status
    /// are ignored; only transport-level failures count as errors.
    async fn ping(&self, url: &str) -> Result<Duration, TransportError>;

    /// Full-body GET of `url`. Non-success statuses are failures.
    async fn download(&self, url: &str) -> Result<Transfer, TransportError>;

    /// POST `payload` to `url`, timed to response completion.
    /// Non-success statuses are failures.
    async fn upload(&self, url: &str, payload: Bytes) -> Result<Duration, TransportError>;
}

/// Probe transport backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpProbeTransport {
    client: reqwest::Client,
}

impl HttpProbeTransport {
    /// Create a transport whose requests share `timeout` as their deadline
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ProbeTransport for HttpProbeTransport {
    async fn ping(&self, url: &str) -> Result<Duration, TransportError> {
        let start = Instant::now();
        // An error status still completed a round trip, so it is not a
        // failed attempt here.
        let _ = self.client.get(url).send().await?;
        Ok(start.elapsed())
    }

    async fn download(&self, url: &str) -> Result<Transfer, TransportError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(Transfer {
            bytes: body.len(),
            elapsed: start.elapsed(),
        })
    }

    async fn upload(&self, url: &str, payload: Bytes) -> Result<Duration, TransportError> {
        let start = Instant::now();
        let response = self.client.post(url).body(payload).send().await?;
        let elapsed = start.elapsed();
        response.error_for_status()?;
        Ok(elapsed)
    }
}
