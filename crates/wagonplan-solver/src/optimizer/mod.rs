//! Single-locomotive optimizer.
//!
//! For a set of fronts the optimizer estimates the size of the exhaustive
//! order space. Within the configured threshold (and the per-group front
//! limit) it runs [`ExhaustiveSearch`]; otherwise it falls back to the ratio
//! rule. The [`ServicePlan`] records which strategy produced the order.

mod fallback;

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};
use wagonplan_config::{OptimizerConfig, ThreadCount};
use wagonplan_core::{Result, Station, WagonPlanError};

use crate::estimate::{estimate, SizeEstimate};
use crate::exhaustive::ExhaustiveSearch;
use crate::plan::{SearchStatus, ServicePlan, Strategy};
use crate::space::OrderSpace;
use crate::stats::SearchStats;

use fallback::ratio_fallback;

/// Entry point of the engine.
///
/// Holds the configuration, an optional cancellation flag and, for
/// `ThreadCount::Count`, a dedicated thread pool.
///
/// # Example
///
/// ```
/// use wagonplan_config::OptimizerConfig;
/// use wagonplan_core::{FrontSpec, Station};
/// use wagonplan_solver::{Optimizer, Strategy};
///
/// let station = Station::single_path(vec![
///     FrontSpec::new(10, 1.0),
///     FrontSpec::new(5, 2.0),
/// ]).unwrap();
///
/// let optimizer = Optimizer::new(OptimizerConfig::default()).unwrap();
/// let plan = optimizer.optimize_single(&station, &station.all_indices()).unwrap();
///
/// assert_eq!(plan.order, vec![1, 0]);
/// assert_eq!(plan.cost, 25.0);
/// assert_eq!(plan.strategy, Strategy::Exhaustive);
/// ```
pub struct Optimizer<'a> {
    config: OptimizerConfig,
    terminate: Option<&'a AtomicBool>,
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for Optimizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optimizer")
            .field("config", &self.config)
            .field("terminate", &self.terminate)
            .finish()
    }
}

impl<'a> Optimizer<'a> {
    /// Creates an optimizer.
    ///
    /// # Errors
    ///
    /// Returns [`WagonPlanError::Config`] if the configuration is invalid or
    /// its thread pool cannot be built.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        let pool = match config.thread_count {
            ThreadCount::Count(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("wagonplan-{i}"))
                    .build()
                    .map_err(|e| WagonPlanError::Config(e.to_string()))?,
            ),
            ThreadCount::Auto | ThreadCount::None => None,
        };
        Ok(Self {
            config,
            terminate: None,
            pool,
        })
    }

    /// Stops running searches when `flag` becomes true.
    pub fn with_termination(mut self, flag: &'a AtomicBool) -> Self {
        self.terminate = Some(flag);
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Size estimate of the path-grouped exhaustive search over `paths`.
    pub fn estimate<P: AsRef<[usize]>>(&self, paths: &[P]) -> SizeEstimate {
        estimate(paths, self.config.calibration_constant)
    }

    /// Finds the best visiting order of `front_indices` for one locomotive.
    ///
    /// # Errors
    ///
    /// Returns [`WagonPlanError::InvalidInput`] if `front_indices` is empty,
    /// repeats a front, or names a front unknown to `station`.
    pub fn optimize_single(&self, station: &Station, front_indices: &[usize]) -> Result<ServicePlan> {
        station.check_subset(front_indices)?;

        info!(
            event = "optimize_start",
            front_count = front_indices.len(),
            path_count = station.groups_for(front_indices).len(),
            path_grouping = self.config.enforce_path_grouping,
        );
        let plan = self.install(|| self.plan_fronts(station, front_indices));
        info!(
            event = "optimize_end",
            cost = plan.cost,
            strategy = %plan.strategy,
            status = %plan.status,
            candidates = plan.stats.candidates_evaluated,
            duration_ms = plan.stats.elapsed.as_millis() as u64,
        );
        Ok(plan)
    }

    /// Plans an already validated, possibly empty, set of fronts.
    pub(crate) fn plan_fronts(&self, station: &Station, indices: &[usize]) -> ServicePlan {
        if indices.is_empty() {
            return ServicePlan::idle();
        }

        let mut stats = SearchStats::default();
        stats.start();

        let space = if self.config.enforce_path_grouping {
            OrderSpace::grouped(station.groups_for(indices))
        } else {
            OrderSpace::flat(indices.to_vec())
        };
        let estimate = space.estimate(self.config.calibration_constant);
        let exhaustive = !estimate.exceeds(self.config.threshold)
            && indices.len() <= self.config.exact_search_limit_per_group;

        debug!(
            event = "strategy",
            front_count = indices.len(),
            combinations = estimate.combinations_u64(),
            projected_seconds = estimate.projected_seconds,
            exhaustive,
        );

        let mut status = SearchStatus::Complete;
        if exhaustive {
            let outcome = ExhaustiveSearch::new(&space)
                .with_batch_size(self.config.batch_size)
                .with_parallelism(self.is_parallel())
                .with_optional_termination(self.terminate)
                .run(station);
            stats.branches = outcome.stats.branches;
            stats.record_candidates(outcome.stats.candidates_evaluated);
            status = outcome.status;

            if status == SearchStatus::Partial {
                warn!(
                    event = "search_cancelled",
                    candidates = outcome.stats.candidates_evaluated,
                );
            }
            if let Some((order, cost)) = outcome.best {
                stats.finish();
                return ServicePlan {
                    order,
                    cost,
                    strategy: Strategy::Exhaustive,
                    status,
                    estimate,
                    stats,
                };
            }
        }

        let fallback = ratio_fallback(space.groups(), station, self.config.path_permutation_limit);
        stats.record_candidates(fallback.evaluated);
        stats.finish();
        ServicePlan {
            order: fallback.order,
            cost: fallback.cost,
            strategy: Strategy::Heuristic,
            status,
            estimate,
            stats,
        }
    }

    pub(crate) fn is_parallel(&self) -> bool {
        self.config.thread_count != ThreadCount::None
    }

    /// Runs `op` inside the dedicated pool, if any.
    pub(crate) fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

/// Wall-clock helper for log fields.
pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests;
