//! Combinatorial size estimation.
//!
//! The exhaustive search space over path-grouped orders has
//! `K = (#paths)! × Π_p |p|!` candidates. `K` grows factorially, so it is
//! computed with overflow-checked `u128` arithmetic; an overflow is reported
//! as `None` and exceeds every threshold.

use std::time::Duration;

/// Exact candidate count and projected exhaustive-search time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeEstimate {
    /// Number of candidate orders, `None` if it does not fit in `u128`.
    pub combinations: Option<u128>,
    /// `combinations / calibration_constant`, infinite on overflow.
    pub projected_seconds: f64,
}

impl SizeEstimate {
    fn new(combinations: Option<u128>, calibration_constant: f64) -> Self {
        let projected_seconds = match combinations {
            Some(k) => k as f64 / calibration_constant,
            None => f64::INFINITY,
        };
        Self {
            combinations,
            projected_seconds,
        }
    }

    /// Returns true if exhaustive search over this space is not allowed
    /// under `threshold`.
    pub fn exceeds(&self, threshold: u64) -> bool {
        match self.combinations {
            Some(k) => k > u128::from(threshold),
            None => true,
        }
    }

    /// Candidate count as `u64`, if it fits.
    pub fn combinations_u64(&self) -> Option<u64> {
        self.combinations.and_then(|k| u64::try_from(k).ok())
    }

    /// Projected time as a `Duration`, `None` when it is not representable.
    pub fn projected_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.projected_seconds).ok()
    }
}

/// `n!`, or `None` on `u128` overflow (n > 34).
pub fn factorial(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Estimates the path-grouped exhaustive search over `paths`.
///
/// `calibration_constant` is the number of candidate orders evaluated per
/// second on the deployment hardware.
///
/// # Example
///
/// ```
/// use wagonplan_solver::estimate;
///
/// let paths = vec![vec![0, 1], vec![2, 3, 4]];
/// let estimate = estimate(&paths, 12.0);
///
/// assert_eq!(estimate.combinations, Some(24));
/// assert_eq!(estimate.projected_seconds, 2.0);
/// ```
pub fn estimate<P: AsRef<[usize]>>(paths: &[P], calibration_constant: f64) -> SizeEstimate {
    SizeEstimate::new(grouped_combinations(paths), calibration_constant)
}

fn grouped_combinations<P: AsRef<[usize]>>(paths: &[P]) -> Option<u128> {
    paths.iter().try_fold(factorial(paths.len())?, |acc, path| {
        acc.checked_mul(factorial(path.as_ref().len())?)
    })
}

/// Estimates the unconstrained exhaustive search over `front_count` fronts.
pub fn estimate_unconstrained(front_count: usize, calibration_constant: f64) -> SizeEstimate {
    SizeEstimate::new(factorial(front_count), calibration_constant)
}
