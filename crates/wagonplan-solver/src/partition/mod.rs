//! Multi-locomotive partitioning.
//!
//! Fronts are ranked by the ratio rule and dealt to the locomotives
//! round-robin, so every locomotive gets a share of both high- and
//! low-priority fronts. Each locomotive's fronts are then optimized on their
//! own; path grouping still applies inside a locomotive's share, but a path
//! may be split between locomotives. The groups are independent and run in
//! parallel.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};
use wagonplan_core::{Result, Station, WagonPlanError};

use crate::optimizer::{elapsed_ms, Optimizer};
use crate::plan::{FleetPlan, ServicePlan};
use crate::ratio::ratio_order;

/// Deals `ranked` into `resource_count` groups: rank `r` goes to group
/// `r % resource_count`.
///
/// ```
/// use wagonplan_solver::round_robin;
///
/// let groups = round_robin(&[4, 0, 3, 1, 2], 2);
/// assert_eq!(groups, vec![vec![4, 3, 2], vec![0, 1]]);
/// ```
pub fn round_robin(ranked: &[usize], resource_count: usize) -> Vec<Vec<usize>> {
    let mut groups = vec![Vec::new(); resource_count];
    if resource_count == 0 {
        return groups;
    }
    for (rank, &front) in ranked.iter().enumerate() {
        groups[rank % resource_count].push(front);
    }
    groups
}

impl Optimizer<'_> {
    /// Splits `front_indices` across `resource_count` locomotives.
    ///
    /// The single-locomotive baseline over all fronts is always computed;
    /// `savings` compares the fleet against it. With one locomotive the
    /// baseline is returned as the only assignment and savings are zero.
    ///
    /// # Errors
    ///
    /// Returns [`WagonPlanError::InvalidInput`] if `resource_count` is zero
    /// or too large to hold one plan per locomotive, or if `front_indices`
    /// is not a valid subset of `station`.
    ///
    /// # Example
    ///
    /// ```
    /// use wagonplan_config::OptimizerConfig;
    /// use wagonplan_core::{FrontSpec, Station};
    /// use wagonplan_solver::Optimizer;
    ///
    /// let station = Station::separate_paths(vec![
    ///     FrontSpec::new(4, 1.0),
    ///     FrontSpec::new(2, 1.0),
    ///     FrontSpec::new(6, 3.0),
    /// ]).unwrap();
    ///
    /// let optimizer = Optimizer::new(OptimizerConfig::default()).unwrap();
    /// let fleet = optimizer.partition(&station, &[0, 1, 2], 2).unwrap();
    ///
    /// assert_eq!(fleet.assignments.len(), 2);
    /// assert!(fleet.total_cost <= fleet.baseline.cost);
    /// ```
    pub fn partition(
        &self,
        station: &Station,
        front_indices: &[usize],
        resource_count: usize,
    ) -> Result<FleetPlan> {
        if resource_count < 1 {
            return Err(WagonPlanError::InvalidInput(
                "at least one locomotive is required".into(),
            ));
        }
        station.check_subset(front_indices)?;

        let mut assignments = Vec::new();
        assignments.try_reserve_exact(resource_count).map_err(|_| {
            WagonPlanError::InvalidInput(format!(
                "cannot plan for {resource_count} locomotives"
            ))
        })?;

        let start = Instant::now();
        info!(
            event = "partition_start",
            front_count = front_indices.len(),
            resource_count,
        );
        let fleet = self.install(|| self.plan_fleet(station, front_indices, resource_count, assignments));
        info!(
            event = "partition_end",
            baseline_cost = fleet.baseline.cost,
            total_cost = fleet.total_cost,
            savings = fleet.savings,
            exact = fleet.is_exact(),
            duration_ms = elapsed_ms(start),
        );
        Ok(fleet)
    }

    /// `assignments` is empty with room reserved for `resource_count` plans.
    fn plan_fleet(
        &self,
        station: &Station,
        indices: &[usize],
        resource_count: usize,
        mut assignments: Vec<ServicePlan>,
    ) -> FleetPlan {
        let baseline = self.plan_fronts(station, indices);
        debug!(
            event = "baseline",
            cost = baseline.cost,
            strategy = %baseline.strategy,
        );

        if resource_count == 1 {
            assignments.push(baseline.clone());
            return FleetPlan {
                assignments,
                total_cost: baseline.cost,
                savings: 0.0,
                baseline,
            };
        }

        let groups = round_robin(&ratio_order(indices, station), resource_count);
        if self.is_parallel() {
            assignments.par_extend(
                groups
                    .par_iter()
                    .map(|group| self.plan_fronts(station, group)),
            );
        } else {
            assignments.extend(groups.iter().map(|group| self.plan_fronts(station, group)));
        }

        for (resource, plan) in assignments.iter().enumerate() {
            debug!(
                event = "assignment",
                resource,
                front_count = plan.order.len(),
                cost = plan.cost,
                strategy = %plan.strategy,
            );
        }

        let total_cost: f64 = assignments.iter().map(|plan| plan.cost).sum();
        FleetPlan {
            savings: baseline.cost - total_cost,
            baseline,
            assignments,
            total_cost,
        }
    }
}
