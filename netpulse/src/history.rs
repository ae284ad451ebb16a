//! Bounded measurement history

use netpulse_core::SpeedResult;
use std::collections::VecDeque;

/// Rolling log of completed samples, oldest first, bounded to a cap.
///
/// Once the cap is reached the oldest sample is evicted for each new
/// one, so memory use stays constant however long the monitor runs.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<SpeedResult>,
    limit: usize,
}

impl HistoryLog {
    /// Create an empty log retaining at most `limit` samples
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Rebuild a log from persisted entries, keeping only the most
    /// recent `limit` of them
    pub fn from_entries(entries: Vec<SpeedResult>, limit: usize) -> Self {
        let mut log = Self {
            entries: VecDeque::from(entries),
            limit,
        };
        log.trim();
        log
    }

    /// Append a completed sample, evicting the oldest when over the cap
    pub fn push(&mut self, result: SpeedResult) {
        self.entries.push_back(result);
        self.trim();
    }

    fn trim(&mut self) {
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// All retained samples, oldest first
    pub fn entries(&self) -> Vec<SpeedResult> {
        self.entries.iter().cloned().collect()
    }

    /// The most recent `count` samples, oldest first
    pub fn recent(&self, count: usize) -> Vec<SpeedResult> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<&SpeedResult> {
        self.entries.back()
    }

    /// Number of retained samples
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no samples
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retention cap
    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_result(timestamp: i64) -> SpeedResult {
        SpeedResult {
            timestamp,
            download: 50.0,
            upload: 10.0,
            latency: 25.0,
            jitter: 3.0,
        }
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut log = HistoryLog::new(10);
        for ts in 1..=3 {
            log.push(create_test_result(ts));
        }

        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].timestamp, 1);
        assert_eq!(entries[2].timestamp, 3);
        assert_eq!(log.latest().unwrap().timestamp, 3);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = HistoryLog::new(100);
        for ts in 0..101 {
            log.push(create_test_result(ts));
        }

        assert_eq!(log.len(), 100);
        assert_eq!(log.entries()[0].timestamp, 1);
        assert_eq!(log.latest().unwrap().timestamp, 100);
    }

    #[test]
    fn test_from_entries_trims_to_most_recent() {
        let entries: Vec<_> = (0..7).map(create_test_result).collect();
        let log = HistoryLog::from_entries(entries, 5);

        assert_eq!(log.len(), 5);
        assert_eq!(log.entries()[0].timestamp, 2);
        assert_eq!(log.latest().unwrap().timestamp, 6);
    }

    #[test]
    fn test_recent_returns_newest_window() {
        let mut log = HistoryLog::new(10);
        for ts in 0..10 {
            log.push(create_test_result(ts));
        }

        let window = log.recent(3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].timestamp, 7);
        assert_eq!(window[2].timestamp, 9);

        // A window wider than the log returns everything
        assert_eq!(log.recent(50).len(), 10);
    }

    #[test]
    fn test_empty_log() {
        let log = HistoryLog::new(10);
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert!(log.recent(5).is_empty());
    }
}
