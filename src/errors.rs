//! Top-level error type for the binary
//!
//! The engine itself has no error paths; these are the failures that can
//! happen around it: reading configuration, validating the initial input,
//! installing logging and driving the terminal.

use crate::config::ConfigError;
use crate::input::InputError;
use crate::logging::LoggingError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("unknown algorithm '{id}' (try --list)")]
    UnknownAlgorithm { id: String },

    #[error("unknown language '{id}' (try --list)")]
    UnknownLanguage { id: String },
}

impl AppError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Logging(_) => 1,
            Self::Config(_)
            | Self::Input(_)
            | Self::UnknownAlgorithm { .. }
            | Self::UnknownLanguage { .. } => 2,
        }
    }
}
