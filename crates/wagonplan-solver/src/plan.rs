//! Optimization results.

use std::fmt;

use crate::estimate::SizeEstimate;
use crate::stats::SearchStats;

/// How an order was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Every candidate of the order space was considered.
    Exhaustive,
    /// Ratio-rule approximation, used when the space exceeds the threshold.
    Heuristic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exhaustive => write!(f, "exhaustive"),
            Strategy::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Whether the search ran to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStatus {
    #[default]
    Complete,
    /// Cancelled; the order is the best found before cancellation.
    Partial,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Complete => write!(f, "complete"),
            SearchStatus::Partial => write!(f, "partial"),
        }
    }
}

/// Visiting order of one locomotive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ServicePlan {
    /// Front indices in visiting order.
    pub order: Vec<usize>,
    /// Wagon-hours of `order`, full precision.
    pub cost: f64,
    pub strategy: Strategy,
    pub status: SearchStatus,
    /// Size of the exhaustive space for these fronts.
    pub estimate: SizeEstimate,
    pub stats: SearchStats,
}

impl ServicePlan {
    /// Plan of a locomotive with nothing to do.
    pub fn idle() -> Self {
        Self {
            order: Vec::new(),
            cost: 0.0,
            strategy: Strategy::Exhaustive,
            status: SearchStatus::Complete,
            estimate: SizeEstimate {
                combinations: Some(1),
                projected_seconds: 0.0,
            },
            stats: SearchStats::default(),
        }
    }

    /// True if `order` is a proven optimum.
    pub fn is_exact(&self) -> bool {
        self.strategy == Strategy::Exhaustive && self.status == SearchStatus::Complete
    }

    pub fn is_idle(&self) -> bool {
        self.order.is_empty()
    }
}

/// Assignment of fronts to several locomotives.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FleetPlan {
    /// All fronts serviced by a single locomotive.
    pub baseline: ServicePlan,
    /// One plan per locomotive; idle locomotives have empty plans.
    pub assignments: Vec<ServicePlan>,
    /// Sum of assignment costs.
    pub total_cost: f64,
    /// `baseline.cost - total_cost`.
    pub savings: f64,
}

impl FleetPlan {
    pub fn resource_count(&self) -> usize {
        self.assignments.len()
    }

    /// True if the baseline and every assignment are proven optima.
    pub fn is_exact(&self) -> bool {
        self.baseline.is_exact() && self.assignments.iter().all(ServicePlan::is_exact)
    }

    /// True if any search was cancelled.
    pub fn is_partial(&self) -> bool {
        std::iter::once(&self.baseline)
            .chain(&self.assignments)
            .any(|plan| plan.status == SearchStatus::Partial)
    }

    /// Projected exhaustive-search time of the baseline and all assignments.
    pub fn projected_seconds(&self) -> f64 {
        std::iter::once(&self.baseline)
            .chain(&self.assignments)
            .filter(|plan| plan.strategy == Strategy::Exhaustive)
            .map(|plan| plan.estimate.projected_seconds)
            .sum()
    }
}
