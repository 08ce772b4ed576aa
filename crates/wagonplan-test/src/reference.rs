//! Naive reference implementations used as test oracles.
//!
//! These follow the cost definition literally and enumerate permutations by
//! recursion, independent of the solver's rank-based enumeration.

use wagonplan_core::Station;

/// Wagon-hours of `order`, computed term by term in O(t²).
pub fn naive_cost(order: &[usize], station: &Station) -> f64 {
    (0..order.len())
        .map(|k| {
            let waiting: f64 = order[k..]
                .iter()
                .map(|&j| station.front(j).travel_time())
                .sum();
            f64::from(station.front(order[k]).wagon_count()) * waiting
        })
        .sum()
}

/// All permutations of `items`.
pub fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            result.push(tail);
        }
    }
    result
}

/// Minimum-cost order of `indices` over all permutations.
pub fn brute_force(indices: &[usize], station: &Station) -> (Vec<usize>, f64) {
    best_of(permutations(indices), station)
}

/// Minimum-cost order that keeps every group contiguous.
pub fn brute_force_grouped(groups: &[Vec<usize>], station: &Station) -> (Vec<usize>, f64) {
    let positions: Vec<usize> = (0..groups.len()).collect();
    let local: Vec<Vec<Vec<usize>>> = groups.iter().map(|g| permutations(g)).collect();

    let mut candidates = Vec::new();
    for group_order in permutations(&positions) {
        let mut partial: Vec<Vec<usize>> = vec![Vec::new()];
        for &g in &group_order {
            partial = partial
                .into_iter()
                .flat_map(|prefix| {
                    local[g].iter().map(move |perm| {
                        let mut next = prefix.clone();
                        next.extend_from_slice(perm);
                        next
                    })
                })
                .collect();
        }
        candidates.extend(partial);
    }
    best_of(candidates, station)
}

fn best_of(candidates: Vec<Vec<usize>>, station: &Station) -> (Vec<usize>, f64) {
    candidates
        .into_iter()
        .map(|order| {
            let cost = naive_cost(&order, station);
            (order, cost)
        })
        .fold((Vec::new(), f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        })
}

/// Asserts that `order` is a permutation of `indices`.
pub fn assert_permutation(order: &[usize], indices: &[usize]) {
    let mut got = order.to_vec();
    let mut want = indices.to_vec();
    got.sort_unstable();
    want.sort_unstable();
    assert_eq!(got, want, "{order:?} is not a permutation of {indices:?}");
}

/// Asserts that `groups` split `indices` with no front lost or repeated.
pub fn assert_partition(groups: &[Vec<usize>], indices: &[usize]) {
    let all: Vec<usize> = groups.iter().flatten().copied().collect();
    assert_permutation(&all, indices);
}
