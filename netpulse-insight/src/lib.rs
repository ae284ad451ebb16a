//! # NetPulse Insight
//!
//! Client for the external analysis service that turns measurement
//! history into a human-readable connection assessment. The monitor
//! hands over the recent history window after each probe cycle; the
//! service answers with a status, a summary, and recommendations.
//!
//! Service failures never propagate as errors to the monitor's
//! consumers: callers degrade to the fixed default assessments in
//! [`ConnectionInsight`].

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod provider;
pub mod report;

// Re-export main types
pub use error::InsightError;
pub use provider::{HttpInsightProvider, InsightProvider, InsightRequest, DEFAULT_ANALYZE_TIMEOUT};
pub use report::{ConnectionInsight, InsightStatus};
