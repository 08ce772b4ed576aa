//! Tests for domain types (fronts, paths, station validation).

use super::*;
use crate::error::WagonPlanError;

fn specs(data: &[(u32, f64)]) -> Vec<FrontSpec> {
    data.iter().copied().map(FrontSpec::from).collect()
}

// ============================================================================
// Front Tests
// ============================================================================

#[test]
fn test_front_ratio_and_wagon_hours() {
    let station = Station::single_path(specs(&[(4, 2.0), (5, 0.0)])).unwrap();

    let front = station.front(0);
    assert_eq!(front.id(), 0);
    assert_eq!(front.wagon_count(), 4);
    assert!((front.ratio() - 0.5).abs() < f64::EPSILON);
    assert!((front.wagon_hours() - 8.0).abs() < f64::EPSILON);

    assert_eq!(station.front(1).ratio(), 0.0);
}

#[test]
fn test_front_path_placement() {
    let station = Station::new(specs(&[(1, 1.0), (2, 1.0), (3, 1.0)]), vec![vec![2, 0], vec![1]])
        .unwrap();

    assert_eq!(station.front(2).path_id(), 0);
    assert_eq!(station.front(2).local_index(), 0);
    assert_eq!(station.front(0).local_index(), 1);
    assert_eq!(station.front(1).path_id(), 1);
}

// ============================================================================
// Station Validation Tests
// ============================================================================

#[test]
fn test_empty_station_rejected() {
    let err = Station::new(Vec::new(), Vec::new()).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_zero_wagons_rejected() {
    let err = Station::single_path(specs(&[(3, 1.0), (0, 1.0)])).unwrap_err();
    assert!(matches!(err, WagonPlanError::InvalidInput(ref msg) if msg.contains("front 2")));
}

#[test]
fn test_negative_travel_time_rejected() {
    let err = Station::single_path(specs(&[(3, -0.5)])).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_non_finite_travel_time_rejected() {
    let err = Station::single_path(specs(&[(3, f64::NAN)])).unwrap_err();
    assert!(err.is_invalid_input());

    let err = Station::single_path(specs(&[(3, f64::INFINITY)])).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_zero_travel_time_accepted() {
    let station = Station::single_path(specs(&[(3, 0.0)])).unwrap();
    assert_eq!(station.front_count(), 1);
}

#[test]
fn test_unknown_front_in_path_rejected() {
    let err = Station::new(specs(&[(1, 1.0)]), vec![vec![0, 3]]).unwrap_err();
    assert!(matches!(err, WagonPlanError::InvalidInput(ref msg) if msg.contains("unknown front 4")));
}

#[test]
fn test_overlapping_paths_rejected() {
    let err = Station::new(specs(&[(1, 1.0), (1, 1.0)]), vec![vec![0, 1], vec![1]]).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_uncovered_front_rejected() {
    let err = Station::new(specs(&[(1, 1.0), (1, 1.0)]), vec![vec![0]]).unwrap_err();
    assert!(matches!(err, WagonPlanError::InvalidInput(ref msg) if msg.contains("not on any path")));
}

#[test]
fn test_empty_path_rejected() {
    let err = Station::new(specs(&[(1, 1.0)]), vec![vec![0], vec![]]).unwrap_err();
    assert!(err.is_invalid_input());
}

// ============================================================================
// Subset Tests
// ============================================================================

#[test]
fn test_check_subset() {
    let station = Station::separate_paths(specs(&[(1, 1.0), (2, 1.0), (3, 1.0)])).unwrap();

    assert!(station.check_subset(&[2, 0]).is_ok());
    assert!(station.check_subset(&[]).unwrap_err().is_invalid_input());
    assert!(station.check_subset(&[0, 5]).unwrap_err().is_invalid_input());
    assert!(station.check_subset(&[1, 1]).unwrap_err().is_invalid_input());
}

#[test]
fn test_groups_for_keeps_path_and_local_order() {
    let station = StationBuilder::new()
        .path([(1, 1.0), (2, 1.0), (3, 1.0)])
        .path([(4, 1.0)])
        .path([(5, 1.0), (6, 1.0)])
        .build()
        .unwrap();

    assert_eq!(
        station.groups_for(&station.all_indices()),
        vec![vec![0, 1, 2], vec![3], vec![4, 5]]
    );
    assert_eq!(station.groups_for(&[5, 2, 0]), vec![vec![0, 2], vec![5]]);
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_from_layout_assigns_ids_across_paths() {
    let layout = StationLayout::new(vec![
        PathLayout {
            fronts: specs(&[(10, 1.0), (5, 2.0)]),
        },
        PathLayout {
            fronts: specs(&[(3, 0.5)]),
        },
    ]);

    assert_eq!(layout.front_count(), 3);
    let station = Station::from_layout(&layout).unwrap();
    assert_eq!(station.paths()[0].fronts(), &[0, 1]);
    assert_eq!(station.paths()[1].fronts(), &[2]);
    assert_eq!(station.front(2).wagon_count(), 3);
}

#[test]
fn test_from_layout_rejects_empty_path() {
    let layout = StationLayout::new(vec![PathLayout::default()]);
    assert!(Station::from_layout(&layout).unwrap_err().is_invalid_input());
}

#[cfg(feature = "serde")]
#[test]
fn test_layout_from_toml() {
    let toml = r#"
        [[paths]]
        fronts = [
            { wagon_count = 10, travel_time = 1.0 },
            { wagon_count = 5, travel_time = 2.0 },
        ]

        [[paths]]
        fronts = [{ wagon_count = 3, travel_time = 0.5 }]
    "#;
    let layout: StationLayout = toml::from_str(toml).unwrap();
    assert_eq!(layout.front_count(), 3);

    let station = Station::from_layout(&layout).unwrap();
    assert_eq!(station.paths().len(), 2);
    assert_eq!(station.paths()[1].fronts(), &[2]);
    assert_eq!(station.front(1).travel_time(), 2.0);
}

#[cfg(feature = "serde")]
#[test]
fn test_layout_missing_fronts_is_empty_path() {
    let layout: StationLayout = toml::from_str("[[paths]]").unwrap();
    assert_eq!(layout.paths, vec![PathLayout::default()]);
    assert!(Station::from_layout(&layout).unwrap_err().is_invalid_input());
}
