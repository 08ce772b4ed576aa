//! Plain-text rendering of a fleet plan.
//!
//! Front numbers are 1-based and costs are rounded to three decimals here;
//! the plans themselves keep full precision.

use std::fmt::Write;

use wagonplan_core::Station;
use wagonplan_solver::{FleetPlan, SearchStatus, ServicePlan};

/// Renders `fleet` for `station` as a multi-line report.
pub fn render(station: &Station, fleet: &FleetPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Fronts:");
    for front in station.fronts() {
        let _ = writeln!(
            out,
            "  Front {}: n={}, τ={} (path {})",
            front.id() + 1,
            front.wagon_count(),
            front.travel_time(),
            front.path_id() + 1,
        );
    }

    let _ = writeln!(
        out,
        "Single locomotive: order {}, B = {:.3} ({})",
        format_order(&fleet.baseline.order),
        fleet.baseline.cost,
        describe(&fleet.baseline),
    );

    if fleet.resource_count() == 1 {
        let _ = writeln!(
            out,
            "All fronts serviced by one locomotive, total wagon-hours: {:.3}",
            fleet.total_cost
        );
    } else {
        for (resource, plan) in fleet.assignments.iter().enumerate() {
            if plan.is_idle() {
                let _ = writeln!(out, "Locomotive {}: idle", resource + 1);
                continue;
            }
            let _ = writeln!(
                out,
                "Locomotive {}: fronts {}, B = {:.3} ({})",
                resource + 1,
                format_order(&plan.order),
                plan.cost,
                describe(plan),
            );
        }
        let _ = writeln!(out, "Total wagon-hours (B): {:.3}", fleet.total_cost);
        let _ = writeln!(
            out,
            "Savings versus one locomotive: {:.3}",
            fleet.savings
        );
    }

    let _ = writeln!(
        out,
        "Projected exhaustive-search time: {:.3} s",
        fleet.projected_seconds()
    );
    out
}

fn format_order(order: &[usize]) -> String {
    let numbers: Vec<String> = order.iter().map(|i| (i + 1).to_string()).collect();
    format!("[{}]", numbers.join(", "))
}

fn describe(plan: &ServicePlan) -> String {
    match plan.status {
        SearchStatus::Complete => plan.strategy.to_string(),
        SearchStatus::Partial => format!("{}, cancelled", plan.strategy),
    }
}
