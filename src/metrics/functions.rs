// Standard library
use std::time::Duration;

// Current module imports
use super::constants::{FIXED_BUCKETS, LINEAR_BUCKET_START, LINEAR_BUCKET_STEP};

/// Histogram buckets for the given lookup timeout: the fixed low-latency set,
/// then 0.5s steps from 1s up to `timeout + 1s` so lookups finishing right at
/// the timeout still land in a finite bucket.
pub fn latency_buckets(timeout: Duration) -> Vec<f64> {
    let timeout: f64 = timeout.as_secs_f64();
    let linear: usize =
        ((timeout + 1.0 - LINEAR_BUCKET_START) / LINEAR_BUCKET_STEP).ceil() as usize + 1;

    let mut buckets: Vec<f64> = FIXED_BUCKETS.to_vec();
    buckets.extend((0..linear).map(|i| LINEAR_BUCKET_START + LINEAR_BUCKET_STEP * i as f64));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_linear(timeout: f64) -> usize {
        ((timeout + 1.0 - 1.0) / 0.5).ceil() as usize + 1
    }

    #[test]
    fn five_second_timeout() {
        let buckets = latency_buckets(Duration::from_secs(5));
        assert_eq!(
            buckets,
            vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5,
                5.0, 5.5, 6.0
            ]
        );
    }

    #[test]
    fn bucket_count_and_ordering_hold_for_many_timeouts() {
        for millis in [1, 250, 500, 999, 1000, 1500, 2200, 5000, 30_000] {
            let timeout = Duration::from_millis(millis);
            let buckets = latency_buckets(timeout);

            assert_eq!(
                buckets.len(),
                FIXED_BUCKETS.len() + expected_linear(timeout.as_secs_f64()),
                "timeout {:?}",
                timeout
            );
            assert!(
                buckets.windows(2).all(|w| w[0] < w[1]),
                "buckets not strictly increasing for {:?}: {:?}",
                timeout,
                buckets
            );
            assert!(*buckets.last().unwrap() >= timeout.as_secs_f64() + 1.0);
        }
    }
}
