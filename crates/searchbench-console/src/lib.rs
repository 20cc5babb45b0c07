//! Colourful console output for benchmark events.
//!
//! Provides a custom `tracing` layer that formats benchmark events with colours.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark start/end, one line per measurement)
//! - **DEBUG**: Dataset preparation (size and chosen target)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static BENCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Targets whose events this layer renders.
const TARGET_PREFIX: &str = "searchbench";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing; `RUST_LOG` overrides the
/// default `info` level.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

// Marks the start of a benchmark for elapsed time tracking.
fn mark_bench_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    BENCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since benchmark start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = BENCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ___                  _    ___              _
/ __| ___  __ _  _ _ | |_ | _ ) ___  _ _  __| |_
\__ \/ -_)/ _` || '_|| ' \| _ \/ -_)| ' \/ _| ' \
|___/\___|\__,_||_|  |_||_|___/\___||_||_\__|_||_|
"#;

    let version_line = format!("             v{} - Linear vs Binary Search\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats benchmark events with colours.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(TARGET_PREFIX) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    algorithm: Option<String>,
    size: Option<u64>,
    target: Option<i64>,
    size_count: Option<u64>,
    algorithm_count: Option<u64>,
    repetitions: Option<u64>,
    duration_ms: Option<u64>,
    avg_ms: Option<f64>,
    found: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "bench" => self.name = Some(s),
            "algorithm" => self.algorithm = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "size_count" => self.size_count = Some(value),
            "algorithm_count" => self.algorithm_count = Some(value),
            "repetitions" => self.repetitions = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "value" => self.target = i64::try_from(value).ok(),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "value" => self.target = Some(value),
            _ => {
                if let Ok(value) = u64::try_from(value) {
                    self.record_u64(field, value);
                }
            }
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "avg_ms" {
            self.avg_ms = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "found" {
            self.found = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "bench" => self.name = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "bench_start" => format_bench_start(v),
        "bench_end" => format_bench_end(v),
        "size_start" => format_size_start(v, level),
        "measurement" => format_measurement(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_bench_start(v: &EventVisitor) -> String {
    mark_bench_start();
    let name = v.name.as_deref().unwrap_or("Benchmark");
    let sizes = v.size_count.unwrap_or(0);
    let algorithms = v.algorithm_count.unwrap_or(0);
    let repetitions = v.repetitions.unwrap_or(0);

    format!(
        "{} {} {} │ {} sizes │ {} algorithms │ {} runs each",
        format_elapsed(),
        "▶".bright_green().bold(),
        name.white().bold(),
        sizes.to_formatted_string(&Locale::en).bright_yellow(),
        algorithms.to_formatted_string(&Locale::en).bright_yellow(),
        repetitions.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_bench_end(v: &EventVisitor) -> String {
    let name = v.name.as_deref().unwrap_or("Benchmark");
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} complete │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        name.white().bold(),
        format_duration_ms(duration).yellow(),
    )
}

fn format_size_start(v: &EventVisitor, level: Level) -> String {
    if level < Level::DEBUG {
        return String::new();
    }

    let size = v.size.unwrap_or(0);
    let target = v
        .target
        .map(|t| t.to_string())
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{} {} n = {} │ target {}",
        format_elapsed(),
        "·".bright_black(),
        size.to_formatted_string(&Locale::en).white(),
        target.bright_black(),
    )
}

fn format_measurement(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("?");
    let size = v.size.unwrap_or(0);
    let avg = v.avg_ms.unwrap_or(0.0);

    let status = match v.found {
        Some(true) => "✓".bright_green().to_string(),
        Some(false) => "✗".bright_red().to_string(),
        None => " ".to_string(),
    };

    format!(
        "{} {} {:<8} │ n = {:>10} │ {} avg",
        format_elapsed(),
        status,
        algorithm.white().bold(),
        size.to_formatted_string(&Locale::en).bright_yellow(),
        format_avg_ms(avg).bright_magenta().bold(),
    )
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

fn format_avg_ms(ms: f64) -> String {
    if ms < 0.001 {
        format!("{:.1}ns", ms * 1_000_000.0)
    } else if ms < 1.0 {
        format!("{:.2}µs", ms * 1000.0)
    } else {
        format!("{:.3}ms", ms)
    }
}
