//! Tracing subscriber setup
//!
//! The terminal belongs to the viewer while it runs, so all diagnostics go
//! to a log file.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber writing to the given file.
///
/// Returns false if the file could not be created or a subscriber was
/// already installed; the viewer then runs without logging.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file).try_init().is_ok()
}

/// Build a subscriber with file logging.
///
/// Filtering follows RUST_LOG, with DEBUG as the default level.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
