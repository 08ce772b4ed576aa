//! Exhaustive search over an order space.
//!
//! The rank range of the [`OrderSpace`] is split into contiguous branches.
//! Each branch folds its own best candidate; the results are then reduced in
//! branch order keeping the first strict minimum, so the answer equals that
//! of a sequential scan no matter how many threads ran the branches.
//!
//! A caller-owned `AtomicBool` can stop the search between batches. The best
//! candidate found so far is then returned with [`SearchStatus::Partial`].

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::trace;
use wagonplan_core::Station;

use crate::cost::order_cost;
use crate::plan::SearchStatus;
use crate::space::OrderSpace;
use crate::stats::SearchStats;

/// Branches created per rayon thread, to balance uneven branch costs.
const BRANCHES_PER_THREAD: u64 = 4;

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best order and its cost; `None` if cancelled before any candidate.
    pub best: Option<(Vec<usize>, f64)>,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

/// Exhaustive search configured for one order space.
///
/// # Example
///
/// ```
/// use wagonplan_core::{FrontSpec, Station};
/// use wagonplan_solver::{ExhaustiveSearch, OrderSpace};
///
/// let station = Station::single_path(vec![
///     FrontSpec::new(10, 1.0),
///     FrontSpec::new(5, 2.0),
/// ]).unwrap();
///
/// let space = OrderSpace::flat(station.all_indices());
/// let outcome = ExhaustiveSearch::new(&space).run(&station);
///
/// assert_eq!(outcome.best, Some((vec![1, 0], 25.0)));
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch<'a> {
    space: &'a OrderSpace,
    batch_size: u64,
    parallel: bool,
    terminate: Option<&'a AtomicBool>,
}

impl<'a> ExhaustiveSearch<'a> {
    pub fn new(space: &'a OrderSpace) -> Self {
        Self {
            space,
            batch_size: 4096,
            parallel: false,
            terminate: None,
        }
    }

    /// Candidates evaluated between cancellation checks.
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Runs branches on the current rayon pool.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Stops the search when `flag` becomes true.
    pub fn with_termination(mut self, flag: &'a AtomicBool) -> Self {
        self.terminate = Some(flag);
        self
    }

    pub(crate) fn with_optional_termination(mut self, flag: Option<&'a AtomicBool>) -> Self {
        self.terminate = flag;
        self
    }

    /// Evaluates the space and returns the first minimum-cost candidate.
    pub fn run(&self, station: &Station) -> SearchOutcome {
        let mut stats = SearchStats::default();
        stats.start();

        let ranges = self.branch_ranges();
        stats.branches = ranges.len();

        let branches: Vec<Branch> = if self.parallel && ranges.len() > 1 {
            ranges
                .into_par_iter()
                .map(|range| self.run_branch(station, range))
                .collect()
        } else {
            ranges
                .into_iter()
                .map(|range| self.run_branch(station, range))
                .collect()
        };

        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut status = SearchStatus::Complete;
        for branch in branches {
            stats.record_candidates(branch.evaluated);
            if branch.cancelled {
                status = SearchStatus::Partial;
            }
            if let Some((order, cost)) = branch.best {
                if best.as_ref().map_or(true, |(_, best_cost)| cost < *best_cost) {
                    best = Some((order, cost));
                }
            }
        }

        stats.finish();
        SearchOutcome {
            best,
            status,
            stats,
        }
    }

    /// Contiguous rank ranges `(start, len)`; `len` is `None` for a single
    /// unbounded branch over a space too large to rank.
    fn branch_ranges(&self) -> Vec<(u64, Option<u64>)> {
        let Some(size) = self.space.size() else {
            return vec![(0, None)];
        };
        let wanted = if self.parallel {
            rayon::current_num_threads() as u64 * BRANCHES_PER_THREAD
        } else {
            1
        };
        let count = wanted.clamp(1, size);
        let base = size / count;
        let extra = size % count;

        let mut start = 0;
        (0..count)
            .map(|i| {
                let len = base + u64::from(i < extra);
                let range = (start, Some(len));
                start += len;
                range
            })
            .collect()
    }

    fn run_branch(&self, station: &Station, (start, len): (u64, Option<u64>)) -> Branch {
        let mut cursor = if start == 0 {
            self.space.first()
        } else {
            self.space.cursor_at(start)
        };
        let mut candidate = Vec::with_capacity(self.space.front_count());
        let mut branch = Branch::default();

        loop {
            if branch.evaluated % self.batch_size == 0 && self.is_terminated() {
                branch.cancelled = true;
                trace!(start, evaluated = branch.evaluated, "Branch cancelled");
                break;
            }

            self.space.write(&cursor, &mut candidate);
            let cost = order_cost(&candidate, station);
            if branch.best.as_ref().map_or(true, |(_, best)| cost < *best) {
                branch.best = Some((candidate.clone(), cost));
            }
            branch.evaluated += 1;

            if len.is_some_and(|len| branch.evaluated >= len) || !cursor.advance() {
                break;
            }
        }

        trace!(start, evaluated = branch.evaluated, "Branch finished");
        branch
    }

    fn is_terminated(&self) -> bool {
        self.terminate.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[derive(Default)]
struct Branch {
    best: Option<(Vec<usize>, f64)>,
    evaluated: u64,
    cancelled: bool,
}

/// Returns the minimum-cost order of `indices` and its cost.
///
/// With `enforce_path_grouping` the fronts of each path stay contiguous.
/// Runs sequentially and in factorial time; callers gate it with
/// [`estimate`](crate::estimate()).
pub fn optimal_order(
    indices: &[usize],
    station: &Station,
    enforce_path_grouping: bool,
) -> (Vec<usize>, f64) {
    let space = if enforce_path_grouping {
        OrderSpace::grouped(station.groups_for(indices))
    } else {
        OrderSpace::flat(indices.to_vec())
    };
    ExhaustiveSearch::new(&space)
        .run(station)
        .best
        .unwrap_or_default()
}
