//! Wagon-hour cost of a visiting order.
//!
//! For an order `o` of length `t` the cost is
//! `B = Σ_k n[o[k]] * Σ_{j≥k} τ[o[j]]`: the wagons of every front wait for
//! the locomotive to travel to that front and to every front visited after it.

use wagonplan_core::{Front, Station};

/// Returns the wagon-hours of visiting `order` in sequence.
///
/// Runs in O(t) with a running suffix sum. Every index must be a valid
/// front index of `station`.
///
/// # Example
///
/// ```
/// use wagonplan_core::{FrontSpec, Station};
/// use wagonplan_solver::order_cost;
///
/// let station = Station::single_path(vec![
///     FrontSpec::new(10, 1.0),
///     FrontSpec::new(5, 2.0),
/// ]).unwrap();
///
/// assert_eq!(order_cost(&[0, 1], &station), 40.0);
/// assert_eq!(order_cost(&[1, 0], &station), 25.0);
/// ```
pub fn order_cost(order: &[usize], station: &Station) -> f64 {
    let mut suffix_time = 0.0;
    let mut total = 0.0;
    for &index in order.iter().rev() {
        let front = station.front(index);
        suffix_time += front.travel_time();
        total += f64::from(front.wagon_count()) * suffix_time;
    }
    total
}

/// Cost of a front serviced on its own.
pub fn front_cost(front: &Front) -> f64 {
    front.wagon_hours()
}
