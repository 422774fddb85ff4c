//! Derived form statistics.

use serde::{Deserialize, Serialize};

/// Visit and submission statistics for one form.
///
/// Pure derivation from the stored counters; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormStats {
    pub visits: u64,
    pub submissions: u64,
    /// Percentage of visits that ended in a completed submission.
    pub submission_rate: f64,
    /// Complement of the submission rate.
    pub bounce_rate: f64,
}

impl FormStats {
    pub fn from_counts(visits: u64, submissions: u64) -> Self {
        let submission_rate = if visits > 0 {
            submissions as f64 / visits as f64 * 100.0
        } else {
            0.0
        };
        Self {
            visits,
            submissions,
            submission_rate,
            bounce_rate: 100.0 - submission_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_visits_has_no_rate() {
        let stats = FormStats::from_counts(0, 0);
        assert_eq!(stats.submission_rate, 0.0);
        assert_eq!(stats.bounce_rate, 100.0);
    }

    #[test]
    fn test_rates_sum_to_one_hundred() {
        for (visits, submissions) in [(1u64, 0u64), (4, 1), (10, 10), (200, 37)] {
            let stats = FormStats::from_counts(visits, submissions);
            assert!((stats.submission_rate + stats.bounce_rate - 100.0).abs() < 1e-9);
            assert!(
                (stats.submission_rate - 100.0 * submissions as f64 / visits as f64).abs() < 1e-9
            );
        }
    }
}
