use curator_core::{Budget, Error};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

use crate::bytes::format_bytes;

/// Output format of the log sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, for log collectors
    #[default]
    Json,
    /// Compact single-line human output
    Pretty,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(Error::configuration(format!(
                "Unknown log format: {other} (expected json or pretty)"
            ))),
        }
    }
}

/// Initialize the tracing system
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Both formats write
/// to stderr so stdout stays free for command output such as `plan --json`.
pub fn init(format: LogFormat) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(false)
                .with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(is_tty())
                .compact()
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}

fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering one evaluation run
pub fn run_span(dry_run: bool, prefixes: usize) -> Span {
    span!(Level::INFO, "run", dry_run = %dry_run, prefixes = %prefixes)
}

/// Emit a structured event for an index kept by the size walk
pub fn index_retained(index: &str, usage: u128, limit: &Budget) {
    info!(
        index = %index,
        usage = usage,
        limit = limit.as_f64(),
        usage_human = %format_bytes(usage),
        limit_human = %format_bytes(limit.whole_bytes()),
        "retained index"
    );
}

/// Emit a structured event for an index added to the deletion plan
pub fn index_marked(index: &str, usage: u128, limit: &Budget) {
    info!(
        index = %index,
        usage = usage,
        limit = limit.as_f64(),
        usage_human = %format_bytes(usage),
        limit_human = %format_bytes(limit.whole_bytes()),
        "marked index for deletion"
    );
}

/// Emit a structured event for an index past the retention window
pub fn index_expired(index: &str, creation_timestamp: i64, cutoff: i64) {
    info!(
        index = %index,
        creation_timestamp = creation_timestamp,
        cutoff = cutoff,
        "marked expired index for deletion"
    );
}

/// Emit a structured event for a finished delete request
pub fn deletion_outcome(index: &str, result: Result<(), &Error>) {
    match result {
        Ok(()) => info!(index = %index, "deleted index"),
        Err(err) => error!(index = %index, error = %err, "error deleting index"),
    }
}
