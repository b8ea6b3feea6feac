//! Console output for annealing runs.
//!
//! Provides a `tracing` layer that prints, with colors, the structured events emitted by
//! `annealforge-solver` and by search loops built on it.
//!
//! ## Log Levels
//!
//! - **INFO**: Component construction and run start/end
//! - **DEBUG**: Reheats and periodic progress
//! - **TRACE**: Individual acceptance decisions
//!
//! The default filter is `annealforge_solver=info`; set `RUST_LOG` to
//! override it, e.g. `RUST_LOG=annealforge_solver=trace`.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "annealforge_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes console output, falling back to `default_filter` when
/// `RUST_LOG` is unset or unparsable.
pub fn init_with_filter(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AnnealConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats annealing events as single lines.
pub struct AnnealConsoleLayer;

impl<S: Subscriber> Layer<S> for AnnealConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *event.metadata().level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    /// Remaining fields in recording order.
    fields: Vec<(&'static str, String)>,
}

impl EventVisitor {
    fn push(&mut self, field: &Field, value: String) {
        self.fields.push((field.name(), value));
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            _ => self.push(field, s),
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, format_float(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, format_count(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => self.push(field, value.to_string()),
        }
    }
}

fn format_float(value: f64) -> String {
    if value != 0.0 && (value.abs() < 1e-3 || value.abs() >= 1e6) {
        format!("{value:.4e}")
    } else {
        format!("{value:.4}")
    }
}

// Iteration counts, reheats and other tallies.
fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

fn format_level(level: Level) -> String {
    let padded = format!("{:>5}", level.to_string());
    match level {
        Level::ERROR => padded.bright_red().bold().to_string(),
        Level::WARN => padded.bright_yellow().bold().to_string(),
        Level::INFO => padded.bright_green().to_string(),
        Level::DEBUG => padded.bright_blue().to_string(),
        _ => padded.bright_black().to_string(),
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let label = match v.event.as_deref() {
        Some("cooling_schedule_created") => "schedule",
        Some("acceptance_criterion_created") => "criterion",
        Some("reheat") => "reheat",
        Some("accept") => "accept",
        Some(other) => other,
        None => match v.message.as_deref() {
            Some(message) => return format!("{} {}", format_level(level), message),
            None => return String::new(),
        },
    };

    let mut line = format!(
        "{} {}",
        format_level(level),
        format!("{:<10}", label).bright_cyan().bold()
    );
    if let Some(message) = &v.message {
        let _ = write!(line, " {}", message);
    }
    for (name, value) in &v.fields {
        let _ = write!(line, " {}={}", name.bright_black(), value.bright_yellow());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_format_named_event() {
        let visitor = EventVisitor {
            event: Some("reheat".to_string()),
            message: None,
            fields: vec![("automatic", "true".to_string()), ("iterations", "500".to_string())],
        };
        let line = format_event(&visitor, Level::DEBUG);
        assert!(line.contains('\x1b'));

        let plain = strip_ansi(&line);
        assert!(plain.starts_with("DEBUG reheat"));
        assert!(plain.ends_with("automatic=true iterations=500"));
    }

    #[test]
    fn test_format_plain_message() {
        let visitor = EventVisitor {
            event: None,
            message: Some("loaded annealing.toml".to_string()),
            fields: Vec::new(),
        };
        assert_eq!(
            strip_ansi(&format_event(&visitor, Level::INFO)),
            " INFO loaded annealing.toml"
        );
    }

    #[test]
    fn test_empty_event_is_skipped() {
        assert!(format_event(&EventVisitor::default(), Level::TRACE).is_empty());
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.5), "0.5000");
        assert_eq!(format_float(0.0), "0.0000");
        assert_eq!(format_float(1e-5), "1.0000e-5");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(20_000), "20,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_level_keeps_width() {
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
            assert_eq!(strip_ansi(&format_level(level)).len(), 5);
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_filter("annealforge_solver=trace");
        tracing::info!(event = "cooling_schedule_created", max_iter = 10u64);
    }
}
