//! # NetPulse Core
//!
//! Measurement engine for the NetPulse connection monitor. One probe
//! cycle runs three phases in order against configurable HTTP
//! endpoints: minimal round trips for latency and jitter, cache-busted
//! downloads for download throughput, and random-payload uploads for
//! upload throughput. The phases reduce to a single [`SpeedResult`].
//!
//! Attempt-level failures never surface as errors. Fixed fallback
//! policies substitute values for failed attempts, so a cycle run
//! during a total outage still yields a complete sample.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod payload;
pub mod result;
pub mod transport;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use config::ProbeConfig;
pub use engine::{
    Probe, ProbeEngine, DOWNLOAD_ATTEMPTS, LATENCY_SAMPLES, UPLOAD_ATTEMPTS, UPLOAD_PAYLOAD_BYTES,
};
pub use error::TransportError;
pub use fallback::{
    average_download_mbps, fallback_upload_mbps, synthetic_latency_ms, SYNTHETIC_LATENCY_MAX_MS,
    SYNTHETIC_LATENCY_MIN_MS, UPLOAD_FALLBACK_RATIO,
};
pub use payload::{random_payload, OsRandomFill, RandomFill, MAX_FILL_CHUNK};
pub use result::SpeedResult;
pub use transport::{HttpProbeTransport, ProbeTransport, Transfer};
