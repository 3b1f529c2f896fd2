use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt};

/// Keeps the non-blocking telemetry writer alive for the process lifetime.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Install the global subscriber. With a telemetry path, decision logs go
/// to that file as JSON lines; otherwise human-readable output lands on
/// stderr. `RUST_LOG` overrides the default `info` filter either way.
pub fn init_logging(telemetry_path: Option<&Path>) -> Result<Option<LoggingGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match telemetry_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating telemetry file at {}", path.display()))?;
            let (writer, guard) = non_blocking::NonBlockingBuilder::default()
                .lossy(false)
                .finish(file);
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .json()
                .with_writer(writer)
                .finish();
            // Ignore the error if a subscriber is already set (e.g. tests).
            let _ = tracing::subscriber::set_global_default(subscriber);
            Ok(Some(LoggingGuard { _guard: guard }))
        }
        None => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
            Ok(None)
        }
    }
}
