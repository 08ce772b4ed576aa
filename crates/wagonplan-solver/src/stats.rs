//! Search statistics.
//!
//! Stack-allocated counters for one optimization run.

use std::time::{Duration, Instant};

/// Statistics of a single-locomotive optimization.
///
/// # Example
///
/// ```
/// use wagonplan_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_candidates(24);
/// stats.record_candidates(6);
/// stats.finish();
///
/// assert_eq!(stats.candidates_evaluated, 30);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchStats {
    #[cfg_attr(feature = "serde", serde(skip))]
    start_time: Option<Instant>,
    /// Candidate orders whose cost was evaluated.
    pub candidates_evaluated: u64,
    /// Independent search branches that were run.
    pub branches: usize,
    /// Wall-clock time of the run, set by [`finish`](Self::finish).
    pub elapsed: Duration,
}

impl SearchStats {
    /// Marks the start of the run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.elapsed = self.start_time.map(|t| t.elapsed()).unwrap_or_default();
    }

    pub fn record_candidates(&mut self, count: u64) {
        self.candidates_evaluated += count;
    }

    /// Returns the candidates per second rate.
    pub fn candidates_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.candidates_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_without_elapsed_time() {
        let stats = SearchStats {
            candidates_evaluated: 100,
            ..SearchStats::default()
        };
        assert_eq!(stats.candidates_per_second(), 0.0);
    }

    #[test]
    fn test_rate() {
        let stats = SearchStats {
            candidates_evaluated: 500,
            elapsed: Duration::from_millis(250),
            ..SearchStats::default()
        };
        assert!((stats.candidates_per_second() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_finish_without_start() {
        let mut stats = SearchStats::default();
        stats.finish();
        assert_eq!(stats.elapsed, Duration::ZERO);
    }
}
