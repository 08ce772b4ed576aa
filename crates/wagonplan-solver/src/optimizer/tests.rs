//! Tests for the single-locomotive optimizer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::*;
use wagonplan_core::FrontSpec;
use wagonplan_test::fixtures::{
    large_station, mixed_station, three_fronts, two_and_three_paths, two_fronts, uniform_ratio,
};
use wagonplan_test::reference::{assert_permutation, brute_force, brute_force_grouped};

use crate::cost::order_cost;
use crate::estimate::factorial;

fn optimizer(config: OptimizerConfig) -> Optimizer<'static> {
    Optimizer::new(config).unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn test_single_front() {
    let station = Station::single_path(vec![FrontSpec::new(7, 1.5)]).unwrap();
    let plan = optimizer(OptimizerConfig::default())
        .optimize_single(&station, &[0])
        .unwrap();

    assert_eq!(plan.order, vec![0]);
    assert_close(plan.cost, 10.5);
    assert!(plan.is_exact());
}

#[test]
fn test_two_fronts_scenario() {
    let station = two_fronts();
    let plan = optimizer(OptimizerConfig::default())
        .optimize_single(&station, &[0, 1])
        .unwrap();

    assert_eq!(plan.order, vec![1, 0]);
    assert_close(plan.cost, 25.0);
    assert_eq!(plan.estimate.combinations, Some(2));
    assert_eq!(plan.stats.candidates_evaluated, 2);
}

#[test]
fn test_exchange_condition_for_two_fronts() {
    // n_A τ_B ≤ n_B τ_A  =>  [A, B] is no worse than [B, A]
    let station = Station::separate_paths(vec![FrontSpec::new(2, 4.0), FrontSpec::new(8, 1.0)])
        .unwrap();
    let plan = optimizer(OptimizerConfig::default())
        .optimize_single(&station, &[0, 1])
        .unwrap();

    assert_eq!(plan.order, vec![0, 1]);
    assert!(plan.cost <= crate::order_cost(&[1, 0], &station));
}

#[test]
fn test_exhaustive_matches_brute_force() {
    let station = mixed_station();
    let indices = station.all_indices();

    let free = optimizer(OptimizerConfig::default().with_path_grouping(false))
        .optimize_single(&station, &indices)
        .unwrap();
    assert_eq!(free.strategy, Strategy::Exhaustive);
    assert_close(free.cost, brute_force(&indices, &station).1);
    assert_permutation(&free.order, &indices);

    let grouped = optimizer(OptimizerConfig::default())
        .optimize_single(&station, &indices)
        .unwrap();
    assert_eq!(grouped.strategy, Strategy::Exhaustive);
    assert_close(
        grouped.cost,
        brute_force_grouped(&station.groups_for(&indices), &station).1,
    );
}

#[test]
fn test_grouped_order_keeps_paths_contiguous() {
    let station = two_and_three_paths();
    let plan = optimizer(OptimizerConfig::default())
        .optimize_single(&station, &station.all_indices())
        .unwrap();

    let first_path = station.front(plan.order[0]).path_id();
    let switch = plan
        .order
        .iter()
        .position(|&i| station.front(i).path_id() != first_path)
        .unwrap();
    assert!(plan.order[switch..]
        .iter()
        .all(|&i| station.front(i).path_id() != first_path));
}

#[test]
fn test_threshold_selects_heuristic() {
    let station = two_and_three_paths();
    let plan = optimizer(OptimizerConfig::default().with_threshold(23))
        .optimize_single(&station, &station.all_indices())
        .unwrap();

    assert_eq!(plan.strategy, Strategy::Heuristic);
    assert_eq!(plan.status, SearchStatus::Complete);
    assert!(!plan.is_exact());
    assert_eq!(plan.estimate.combinations, Some(24));
    assert_permutation(&plan.order, &station.all_indices());
}

#[test]
fn test_exact_search_limit_selects_heuristic() {
    let station = three_fronts();
    let plan = optimizer(OptimizerConfig::default().with_exact_search_limit(2))
        .optimize_single(&station, &[0, 1, 2])
        .unwrap();
    assert_eq!(plan.strategy, Strategy::Heuristic);
}

#[test]
fn test_heuristic_agrees_with_exhaustive_on_uniform_ratio() {
    let station = uniform_ratio(6);
    let indices = station.all_indices();

    for grouping in [true, false] {
        let exact = optimizer(OptimizerConfig::default().with_path_grouping(grouping))
            .optimize_single(&station, &indices)
            .unwrap();
        let approx = optimizer(
            OptimizerConfig::default()
                .with_path_grouping(grouping)
                .with_threshold(0),
        )
        .optimize_single(&station, &indices)
        .unwrap();

        assert_eq!(exact.strategy, Strategy::Exhaustive);
        assert_eq!(approx.strategy, Strategy::Heuristic);
        assert_close(exact.cost, approx.cost);
    }
}

#[test]
fn test_heuristic_scales_past_factorial_range() {
    let station = large_station(60);
    let plan = optimizer(OptimizerConfig::default())
        .optimize_single(&station, &station.all_indices())
        .unwrap();

    assert_eq!(plan.strategy, Strategy::Heuristic);
    assert_eq!(plan.estimate.combinations, None);
    assert_permutation(&plan.order, &station.all_indices());
    assert_close(plan.cost, crate::order_cost(&plan.order, &station));
}

#[test]
fn test_subset_only_touches_requested_fronts() {
    let station = mixed_station();
    let plan = optimizer(OptimizerConfig::default())
        .optimize_single(&station, &[6, 2, 4])
        .unwrap();
    assert_permutation(&plan.order, &[2, 4, 6]);
}

#[test]
fn test_invalid_subsets_rejected() {
    let station = three_fronts();
    let opt = optimizer(OptimizerConfig::default());

    assert!(opt.optimize_single(&station, &[]).unwrap_err().is_invalid_input());
    assert!(opt.optimize_single(&station, &[0, 9]).unwrap_err().is_invalid_input());
    assert!(opt.optimize_single(&station, &[1, 1]).unwrap_err().is_invalid_input());
}

#[test]
fn test_invalid_config_rejected() {
    let err = Optimizer::new(OptimizerConfig::default().with_batch_size(0)).unwrap_err();
    assert!(matches!(err, WagonPlanError::Config(_)));
}

#[test]
fn test_cancelled_search_returns_partial_plan() {
    let station = mixed_station();
    let flag = AtomicBool::new(true);
    let plan = Optimizer::new(OptimizerConfig::default())
        .unwrap()
        .with_termination(&flag)
        .optimize_single(&station, &station.all_indices())
        .unwrap();

    assert_eq!(plan.status, SearchStatus::Partial);
    assert_eq!(plan.strategy, Strategy::Heuristic);
    assert_permutation(&plan.order, &station.all_indices());
    assert!(!plan.is_exact());
}

#[test]
fn test_cancelled_mid_search_keeps_best_so_far() {
    // 12! candidates, far more than can be evaluated before the flag is set
    let station = large_station(12);
    let indices = station.all_indices();
    let flag = AtomicBool::new(false);
    let opt = Optimizer::new(
        OptimizerConfig::default()
            .with_threshold(u64::MAX)
            .with_exact_search_limit(20)
            .with_batch_size(64),
    )
    .unwrap()
    .with_termination(&flag);

    let plan = thread::scope(|s| {
        s.spawn(|| {
            thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::Relaxed);
        });
        opt.optimize_single(&station, &indices).unwrap()
    });

    assert_eq!(plan.strategy, Strategy::Exhaustive);
    assert_eq!(plan.status, SearchStatus::Partial);
    assert!(plan.stats.candidates_evaluated > 0);
    assert!(u128::from(plan.stats.candidates_evaluated) < factorial(12).unwrap());
    assert_permutation(&plan.order, &indices);
    assert_close(plan.cost, order_cost(&plan.order, &station));
}

#[test]
fn test_thread_count_variants_agree() {
    let station = mixed_station();
    let indices = station.all_indices();
    let config = OptimizerConfig::default().with_path_grouping(false);

    let auto = optimizer(config.clone()).optimize_single(&station, &indices).unwrap();
    let none = optimizer(config.clone().with_thread_count(ThreadCount::None))
        .optimize_single(&station, &indices)
        .unwrap();
    let two = optimizer(config.with_thread_count(ThreadCount::Count(2)))
        .optimize_single(&station, &indices)
        .unwrap();

    assert_eq!(auto.order, none.order);
    assert_eq!(none.order, two.order);
    assert_eq!(none.stats.branches, 1);
}

#[test]
fn test_estimate_uses_calibration() {
    let station = two_and_three_paths();
    let opt = optimizer(OptimizerConfig::default().with_calibration_constant(8.0));
    let estimate = opt.estimate(station.paths());
    assert_eq!(estimate.combinations, Some(24));
    assert_eq!(estimate.projected_seconds, 3.0);
}
