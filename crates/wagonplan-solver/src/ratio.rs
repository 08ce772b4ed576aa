//! Ratio rule: order fronts by travel time per wagon.

use wagonplan_core::Station;

/// Returns `indices` sorted ascending by `(travel_time / wagon_count, index)`.
///
/// The index tie-break makes the result a pure function of the input. This
/// order is the splitting key of the partitioner; read backwards it is the
/// exchange-optimal order for the wagon-hour cost when no path grouping
/// applies.
///
/// ```
/// use wagonplan_core::{FrontSpec, Station};
/// use wagonplan_solver::ratio_order;
///
/// let station = Station::single_path(vec![
///     FrontSpec::new(4, 1.0),
///     FrontSpec::new(2, 1.0),
///     FrontSpec::new(6, 3.0),
/// ]).unwrap();
///
/// assert_eq!(ratio_order(&[2, 1, 0], &station), vec![0, 1, 2]);
/// ```
pub fn ratio_order(indices: &[usize], station: &Station) -> Vec<usize> {
    let mut order = indices.to_vec();
    order.sort_by(|&a, &b| {
        station
            .front(a)
            .ratio()
            .total_cmp(&station.front(b).ratio())
            .then(a.cmp(&b))
    });
    order
}

/// Aggregate ratio of a group: total travel time per wagon.
pub(crate) fn group_ratio(group: &[usize], station: &Station) -> f64 {
    let (time, wagons) = group.iter().fold((0.0, 0.0), |(time, wagons), &i| {
        let front = station.front(i);
        (
            time + front.travel_time(),
            wagons + f64::from(front.wagon_count()),
        )
    });
    time / wagons
}

#[cfg(test)]
mod tests {
    use super::*;
    use wagonplan_core::FrontSpec;
    use wagonplan_test::fixtures::three_fronts;

    #[test]
    fn test_ties_break_by_index() {
        // fronts 1 and 2 share ratio 0.5
        let station = three_fronts();
        assert_eq!(ratio_order(&[2, 1, 0], &station), vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_travel_time_first() {
        let station = Station::separate_paths(vec![
            FrontSpec::new(1, 2.0),
            FrontSpec::new(3, 0.0),
            FrontSpec::new(2, 0.0),
        ])
        .unwrap();
        assert_eq!(ratio_order(&[0, 1, 2], &station), vec![1, 2, 0]);
    }

    #[test]
    fn test_is_repeatable() {
        let station = three_fronts();
        let first = ratio_order(&[1, 2, 0], &station);
        let second = ratio_order(&[0, 2, 1], &station);
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_ratio() {
        let station = three_fronts();
        // (1 + 3) / (4 + 6)
        assert!((group_ratio(&[0, 2], &station) - 0.4).abs() < 1e-12);
    }
}
