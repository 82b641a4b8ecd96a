//! Tracing subscriber setup
//!
//! The terminal UI owns stdout and stderr while it runs, so log output goes to
//! a file. Without a file no subscriber is installed and the `tracing` macros
//! in the engine compile down to cheap no-ops.
//!
//! # Filter priority (highest to lowest)
//!
//! 1. `ALGOSCOPE_LOG` env var
//! 2. `RUST_LOG` env var
//! 3. `--log-level` / `log_level` from the config file

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "ALGOSCOPE_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the filter from the environment, falling back to `level`
pub fn build_env_filter(level: &str) -> EnvFilter {
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var) {
            if let Ok(filter) = EnvFilter::try_new(&directives) {
                return filter;
            }
        }
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_file`, if one is given
///
/// Returns `Ok(false)` when logging stays disabled.
pub fn init(log_file: Option<&Path>, level: &str) -> Result<bool, LoggingError> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(true)
}
