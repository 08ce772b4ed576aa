//! Ratio-rule fallback for order spaces too large to search exhaustively.
//!
//! Inside each group the fronts follow the ratio order, read in both
//! directions. Without grouping that yields two candidates. With grouping
//! the group order is either enumerated completely, when the number of group
//! permutations is within the limit, or taken from the aggregate ratio of
//! each group (again in both directions). Every candidate is costed and the
//! first minimum is kept.

use wagonplan_core::Station;

use crate::cost::order_cost;
use crate::estimate::factorial;
use crate::ratio::{group_ratio, ratio_order};
use crate::space::next_permutation;

/// Best fallback order, its cost, and the number of candidates costed.
pub(crate) struct Fallback {
    pub order: Vec<usize>,
    pub cost: f64,
    pub evaluated: u64,
}

pub(crate) fn ratio_fallback(
    groups: &[Vec<usize>],
    station: &Station,
    path_permutation_limit: u64,
) -> Fallback {
    let ascending: Vec<Vec<usize>> = groups.iter().map(|g| ratio_order(g, station)).collect();
    let descending: Vec<Vec<usize>> = ascending
        .iter()
        .map(|g| g.iter().rev().copied().collect())
        .collect();

    let mut best = Fallback {
        order: Vec::new(),
        cost: f64::INFINITY,
        evaluated: 0,
    };
    let mut candidate = Vec::with_capacity(groups.iter().map(Vec::len).sum());

    for_each_group_order(groups, station, path_permutation_limit, |group_order| {
        for locals in [&ascending, &descending] {
            candidate.clear();
            for &g in group_order {
                candidate.extend_from_slice(&locals[g]);
            }
            let cost = order_cost(&candidate, station);
            best.evaluated += 1;
            if cost < best.cost {
                best.order.clone_from(&candidate);
                best.cost = cost;
            }
        }
    });

    if best.order.is_empty() {
        best.cost = 0.0;
    }
    best
}

/// Visits the group orders to try: all permutations within the limit, one
/// at a time, otherwise the aggregate-ratio order and its reverse.
fn for_each_group_order<F>(groups: &[Vec<usize>], station: &Station, limit: u64, mut visit: F)
where
    F: FnMut(&[usize]),
{
    let count = groups.len();
    if factorial(count).is_some_and(|k| k <= u128::from(limit)) {
        let mut order: Vec<usize> = (0..count).collect();
        loop {
            visit(&order);
            if !next_permutation(&mut order) {
                return;
            }
        }
    }

    let ratios: Vec<f64> = groups.iter().map(|g| group_ratio(g, station)).collect();
    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by(|&a, &b| ratios[a].total_cmp(&ratios[b]).then(a.cmp(&b)));
    visit(&order);
    order.reverse();
    visit(&order);
}
