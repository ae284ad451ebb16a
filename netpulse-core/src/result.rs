//! Measurement sample produced by each probe cycle

use serde::{Deserialize, Serialize};

/// One complete connection measurement.
///
/// Every probe cycle yields exactly one of these. All metric fields are
/// finite: attempt-level failures are substituted by fallback policies
/// before the sample is assembled, so a cycle run during a total outage
/// still produces a well-formed (if pessimistic) sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedResult {
    /// Milliseconds since the Unix epoch when the cycle completed
    pub timestamp: i64,
    /// Download throughput in Mbps, rounded to two decimal places
    pub download: f64,
    /// Upload throughput in Mbps, rounded to two decimal places
    pub upload: f64,
    /// Mean round-trip time in milliseconds, rounded to one decimal place
    pub latency: f64,
    /// Spread (max minus min) of the round-trip samples in milliseconds,
    /// rounded to one decimal place
    pub jitter: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_result() -> SpeedResult {
        SpeedResult {
            timestamp: 1_700_000_000_000,
            download: 94.25,
            upload: 18.6,
            latency: 23.4,
            jitter: 4.1,
        }
    }

    #[test]
    fn test_serializes_with_stable_field_names() {
        let value = serde_json::to_value(create_test_result()).unwrap();
        assert_eq!(value["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(value["download"], 94.25);
        assert_eq!(value["upload"], 18.6);
        assert_eq!(value["latency"], 23.4);
        assert_eq!(value["jitter"], 4.1);
    }

    #[test]
    fn test_roundtrips_through_json() {
        let result = create_test_result();
        let raw = serde_json::to_string(&result).unwrap();
        let parsed: SpeedResult = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, result);
    }
}
