//! # NetPulse - Continuous Connection Monitoring
//!
//! NetPulse keeps a rolling picture of an internet connection. Every
//! ten minutes, and on demand, it measures download and upload
//! throughput, round-trip latency, and jitter, retains the most recent
//! hundred samples across restarts, and asks an analysis service for a
//! plain-language assessment of the connection.
//!
//! ## Key Features
//!
//! - **Total measurements**: a probe cycle always yields a complete
//!   sample; failed attempts are absorbed by fixed fallback policies
//! - **Single-flight scheduling**: a countdown fires cycles on an
//!   interval, and triggers arriving while one runs are ignored
//! - **Bounded, durable history**: the most recent samples survive
//!   restarts through a pluggable storage seam
//! - **Assessments built in**: each cycle refreshes a status, summary,
//!   and recommendations, with fixed answers when the analysis service
//!   is unreachable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use netpulse::Monitor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Probes immediately, then every ten minutes
//!     let monitor = Monitor::builder().start().await?;
//!
//!     // Watch cycles complete
//!     let mut events = monitor.events();
//!     while let Some(event) = events.next().await {
//!         println!("Monitor event: {:?}", event);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export measurement types
pub use netpulse_core::{
    Clock, HttpProbeTransport, OsRandomFill, Probe, ProbeConfig, ProbeEngine, ProbeTransport,
    RandomFill, SpeedResult, SystemClock, Transfer, TransportError, DOWNLOAD_ATTEMPTS,
    LATENCY_SAMPLES, MAX_FILL_CHUNK, UPLOAD_ATTEMPTS, UPLOAD_PAYLOAD_BYTES,
};

// Re-export assessment types
pub use netpulse_insight::{
    ConnectionInsight, HttpInsightProvider, InsightError, InsightProvider, InsightRequest,
    InsightStatus,
};

// Public API modules
pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod monitor;
pub mod storage;

// Re-export main types
pub use config::MonitorConfig;
pub use error::{MonitorError, StorageError};
pub use event::{EventStream, MonitorEvent, TriggerSource};
pub use history::HistoryLog;
pub use monitor::{Monitor, MonitorBuilder, MonitorSnapshot};
pub use storage::{HistoryStorage, JsonFileStorage, HISTORY_FILE_NAME};
