//! Probe engine running the per-cycle measurement phases

use crate::clock::{Clock, SystemClock};
use crate::config::ProbeConfig;
use crate::error::TransportError;
use crate::fallback;
use crate::payload::{random_payload, OsRandomFill, RandomFill};
use crate::result::SpeedResult;
use crate::transport::{HttpProbeTransport, ProbeTransport, Transfer};
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Number of latency round trips per cycle
pub const LATENCY_SAMPLES: usize = 5;

/// Number of download attempts per cycle
pub const DOWNLOAD_ATTEMPTS: usize = 3;

/// Number of upload attempts per cycle
pub const UPLOAD_ATTEMPTS: usize = 2;

/// Upload payload size in bytes
pub const UPLOAD_PAYLOAD_BYTES: usize = 1_048_576;

/// Anything that can produce one complete measurement sample.
///
/// The monitor schedules against this seam, so tests can drive it with
/// scripted probes instead of live traffic.
#[async_trait]
pub trait Probe: Send + Sync + fmt::Debug {
    /// Run one full probe cycle.
    ///
    /// Never fails: attempt-level failures are absorbed by the fallback
    /// policies, so the returned sample is always complete.
    async fn measure(&self) -> SpeedResult;
}

/// Measurement engine running the latency, download, and upload phases
/// in order against the configured endpoints
#[derive(Debug)]
pub struct ProbeEngine {
    config: ProbeConfig,
    transport: Box<dyn ProbeTransport>,
    filler: Box<dyn RandomFill>,
    clock: Box<dyn Clock>,
}

impl ProbeEngine {
    /// Create an engine probing the configured endpoints over HTTP
    pub fn new(config: ProbeConfig) -> Result<Self, TransportError> {
        let transport = HttpProbeTransport::new(config.request_timeout)?;
        Ok(Self::with_parts(
            config,
            Box::new(transport),
            Box::new(OsRandomFill),
            Box::new(SystemClock),
        ))
    }

    /// Create an engine from explicit parts.
    ///
    /// Tests use this to inject scripted transports, deterministic
    /// payload sources, and fixed clocks.
    pub fn with_parts(
        config: ProbeConfig,
        transport: Box<dyn ProbeTransport>,
        filler: Box<dyn RandomFill>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            config,
            transport,
            filler,
            clock,
        }
    }

    // Sequential round trips; a failed attempt gets a synthetic sample
    // so the phase always yields exactly LATENCY_SAMPLES values.
    async fn measure_latency(&self) -> (f64, f64) {
        let mut samples = Vec::with_capacity(LATENCY_SAMPLES);
        for attempt in 1..=LATENCY_SAMPLES {
            match self.transport.ping(&self.config.latency_url).await {
                Ok(elapsed) => {
                    let ms = elapsed.as_secs_f64() * 1000.0;
                    debug!("Latency attempt {}: {:.1} ms", attempt, ms);
                    samples.push(ms);
                }
                Err(err) => {
                    warn!("Latency attempt {} failed: {}", attempt, err);
                    samples.push(fallback::synthetic_latency_ms(&mut rand::thread_rng()));
                }
            }
        }
        (mean(&samples), spread(&samples))
    }

    async fn measure_download(&self) -> f64 {
        let mut samples = Vec::with_capacity(DOWNLOAD_ATTEMPTS);
        for attempt in 1..=DOWNLOAD_ATTEMPTS {
            let url = with_cache_buster(&self.config.download_url);
            match self.transport.download(&url).await {
                Ok(transfer) => {
                    let mbps = transfer.mbps();
                    debug!(
                        "Download attempt {}: {} bytes in {:?} ({:.2} Mbps)",
                        attempt, transfer.bytes, transfer.elapsed, mbps
                    );
                    samples.push(mbps);
                }
                Err(err) => {
                    warn!("Download attempt {} failed: {}", attempt, err);
                    samples.push(0.0);
                }
            }
        }
        fallback::average_download_mbps(&samples)
    }

    // Upload attempts reuse one random payload per cycle. Each failed
    // attempt is scored as a fixed fraction of the download average.
    async fn measure_upload(&self, download_mbps: f64) -> f64 {
        let payload = random_payload(self.filler.as_ref(), UPLOAD_PAYLOAD_BYTES);
        let mut samples = Vec::with_capacity(UPLOAD_ATTEMPTS);
        for attempt in 1..=UPLOAD_ATTEMPTS {
            match self
                .transport
                .upload(&self.config.upload_url, payload.clone())
                .await
            {
                Ok(elapsed) => {
                    let transfer = Transfer {
                        bytes: UPLOAD_PAYLOAD_BYTES,
                        elapsed,
                    };
                    let mbps = transfer.mbps();
                    debug!("Upload attempt {}: {:?} ({:.2} Mbps)", attempt, elapsed, mbps);
                    samples.push(mbps);
                }
                Err(err) => {
                    warn!("Upload attempt {} failed: {}", attempt, err);
                    samples.push(fallback::fallback_upload_mbps(download_mbps));
                }
            }
        }
        mean(&samples)
    }
}

#[async_trait]
impl Probe for ProbeEngine {
    async fn measure(&self) -> SpeedResult {
        let (latency_ms, jitter_ms) = self.measure_latency().await;
        let download_mbps = self.measure_download().await;
        let upload_mbps = self.measure_upload(download_mbps).await;

        let result = SpeedResult {
            timestamp: self.clock.now_millis(),
            download: round2(download_mbps),
            upload: round2(upload_mbps),
            latency: round1(latency_ms),
            jitter: round1(jitter_ms),
        };
        info!(
            "Probe cycle complete: {:.2} Mbps down, {:.2} Mbps up, {:.1} ms latency, {:.1} ms jitter",
            result.download, result.upload, result.latency, result.jitter
        );
        result
    }
}

// Distinct query parameter per attempt so caches along the path cannot
// answer for the origin.
fn with_cache_buster(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}cb={}", url, separator, Uuid::new_v4().simple())
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn spread(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut lowest = f64::INFINITY;
    let mut highest = f64::NEG_INFINITY;
    for &sample in samples {
        lowest = lowest.min(sample);
        highest = highest.max(sample);
    }
    highest - lowest
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
