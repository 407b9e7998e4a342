//! Colorful console output for search progress.
//!
//! Provides a `tracing` layer that formats `branchbound_solver` events with
//! colors. Enabled by the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Directive used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "branchbound_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Set
/// `RUST_LOG=branchbound_solver=debug` to also see each improved solution.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("branchbound_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_search_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    reason: Option<String>,
    cost: Option<String>,
    best_cost: Option<String>,
    start_cost: Option<String>,
    pruning: Option<bool>,
    seeded: Option<bool>,
    optimal: Option<bool>,
    nodes_explored: Option<u64>,
    solutions_considered: Option<u64>,
    peak_queue_size: Option<u64>,
    pruned: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}").trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "reason" => self.reason = Some(s),
            "cost" => self.cost = Some(s),
            "best_cost" => self.best_cost = Some(s),
            "start_cost" => self.start_cost = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "pruning" => self.pruning = Some(value),
            "seeded" => self.seeded = Some(value),
            "optimal" => self.optimal = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "nodes_explored" => self.nodes_explored = Some(value),
            "solutions_considered" => self.solutions_considered = Some(value),
            "peak_queue_size" => self.peak_queue_size = Some(value),
            "pruned" => self.pruned = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }
}

fn format_search_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("search_start") => format_search_start(v),
        Some("best_improved") => format_best_improved(v),
        Some("search_end") => format_search_end(v),
        _ => String::new(),
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Search started: start cost ({}), pruning ({}), seeded ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        v.start_cost.as_deref().unwrap_or("N/A").bright_yellow(),
        on_off(v.pruning.unwrap_or(false)),
        on_off(v.seeded.unwrap_or(false)),
    )
}

fn format_best_improved(v: &EventVisitor) -> String {
    format!(
        "    {} Node {:>9} | cost {}",
        "->".bright_blue(),
        count(v.nodes_explored).white(),
        v.cost.as_deref().unwrap_or("N/A").bright_green(),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let optimal = v.optimal.unwrap_or(false);
    let best_cost = format_best_cost(v.best_cost.as_deref());
    let status = if optimal {
        "OPTIMAL".bright_green().bold().to_string()
    } else {
        "STOPPED EARLY".bright_yellow().bold().to_string()
    };

    format!(
        "{} {} {} Search ended ({}): {} best cost ({}), time spent ({}), nodes explored ({}), \
         solutions considered ({}), peak queue ({}), pruned ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        v.reason.as_deref().unwrap_or("Unknown").white(),
        status,
        best_cost,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes_explored).bright_magenta().bold(),
        count(v.solutions_considered).white(),
        count(v.peak_queue_size).white(),
        count(v.pruned).white(),
    )
}

fn format_best_cost(debug: Option<&str>) -> String {
    match debug {
        Some(s) if s.starts_with("Some(") => s
            .trim_start_matches("Some(")
            .trim_end_matches(')')
            .bright_green()
            .to_string(),
        _ => "none".bright_red().to_string(),
    }
}

fn on_off(value: bool) -> String {
    if value {
        "on".green().to_string()
    } else {
        "off".bright_black().to_string()
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}
