//! Monitor configuration and defaults

use std::time::Duration;

/// Scheduling and retention settings for a monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between scheduled probe cycles
    pub probe_interval: Duration,
    /// Cadence of the countdown refreshing the time-remaining display
    pub tick_interval: Duration,
    /// Maximum number of samples retained in history
    pub history_limit: usize,
    /// Number of recent samples handed to the analysis service
    pub insight_window: usize,
}

impl MonitorConfig {
    /// Fast cadence for demos and manual verification
    pub fn rapid() -> Self {
        Self {
            probe_interval: Duration::from_secs(30),
            ..Self::default()
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            probe_interval: Duration::from_secs(600),
            tick_interval: Duration::from_secs(1),
            history_limit: 100,
            insight_window: 20,
        }
    }
}
