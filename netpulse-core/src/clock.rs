//! Wall-clock seam so sample timestamps stay testable

use chrono::Utc;
use std::fmt;

/// Source of wall-clock timestamps for completed samples
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time as milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// System wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
