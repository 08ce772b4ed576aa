//! Colorful console output for planning events.
//!
//! Provides a `tracing` layer that formats the optimizer's structured events.
//! Initialized by [`plan_station`](crate::plan_station) when the `console`
//! feature is enabled.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. Does nothing
/// if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wagonplan_solver=info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlanConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that prints optimizer events with colors.
pub struct PlanConsoleLayer;

impl<S: Subscriber> Layer<S> for PlanConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("wagonplan_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    front_count: Option<u64>,
    path_count: Option<u64>,
    resource_count: Option<u64>,
    candidates: Option<u64>,
    duration_ms: Option<u64>,
    cost: Option<f64>,
    baseline_cost: Option<f64>,
    total_cost: Option<f64>,
    savings: Option<f64>,
    strategy: Option<String>,
    status: Option<String>,
    exact: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "front_count" => self.front_count = Some(value),
            "path_count" => self.path_count = Some(value),
            "resource_count" => self.resource_count = Some(value),
            "candidates" => self.candidates = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "cost" => self.cost = Some(value),
            "baseline_cost" => self.baseline_cost = Some(value),
            "total_cost" => self.total_cost = Some(value),
            "savings" => self.savings = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "exact" {
            self.exact = Some(value);
        }
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "strategy" => self.strategy = Some(value),
            "status" => self.status = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "optimize_start" => format_optimize_start(v),
        "optimize_end" => format_optimize_end(v),
        "partition_start" => format_partition_start(v),
        "partition_end" => format_partition_end(v),
        "search_cancelled" => format_search_cancelled(v),
        _ => String::new(),
    }
}

fn prefix(tag: &str) -> String {
    format!(
        "{} {} {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", tag).bright_cyan()
    )
}

fn format_optimize_start(v: &EventVisitor) -> String {
    format!(
        "{} Planning {} fronts on {} paths",
        prefix("Optimizer"),
        v.front_count.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.path_count.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_optimize_end(v: &EventVisitor) -> String {
    format!(
        "{} Planning ended: cost ({}), strategy ({}), status ({}), candidates ({}), time spent ({})",
        prefix("Optimizer"),
        format_cost(v.cost.unwrap_or(0.0)),
        v.strategy.as_deref().unwrap_or("N/A").white().bold(),
        format_status(v.status.as_deref().unwrap_or("N/A")),
        v.candidates
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_partition_start(v: &EventVisitor) -> String {
    format!(
        "{} Splitting {} fronts across {} locomotives",
        prefix("Fleet"),
        v.front_count.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.resource_count.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_partition_end(v: &EventVisitor) -> String {
    let exact = v.exact.unwrap_or(false);
    let mut output = format!(
        "{} Fleet planned: time spent ({})",
        prefix("Fleet"),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    );

    let status_text = if exact {
        "OPTIMAL ORDERS FOUND"
    } else {
        "APPROXIMATE ORDERS"
    };
    let status_colored = if exact {
        format!("  {}  ", status_text).bright_green().bold().to_string()
    } else {
        format!("  {}  ", status_text).bright_yellow().bold().to_string()
    };
    let status_padding = 56 - status_text.len() - 4;
    let left_pad = status_padding / 2;
    let right_pad = status_padding - left_pad;

    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&"╠══════════════════════════════════════════════════════════╣".bright_cyan().to_string());
    output.push('\n');
    for (label, value) in [
        ("Single locomotive:", v.baseline_cost),
        ("Fleet total:", v.total_cost),
        ("Savings:", v.savings),
    ] {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            format!("{:.3}", value.unwrap_or(0.0)),
            "║".bright_cyan()
        ));
        output.push('\n');
    }
    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_search_cancelled(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Search cancelled after {} candidates",
        timestamp().bright_black(),
        "WARN".bright_red(),
        "[Optimizer]".bright_cyan(),
        v.candidates.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_cost(cost: f64) -> String {
    format!("{:.3}", cost).bright_white().bold().to_string()
}

fn format_status(status: &str) -> String {
    if status == "partial" {
        status.bright_red().to_string()
    } else {
        status.bright_green().to_string()
    }
}
