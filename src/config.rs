//! TOML configuration
//!
//! Every field has a default, so an empty or partial file is valid. Command
//! line flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "algoscope.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Algorithm id, e.g. `contains-duplicate`
    pub algorithm: String,
    /// Language id, e.g. `python`
    pub language: String,
    /// Comma-separated input numbers
    pub input: String,
    /// Target for pair-sum
    pub target: i64,
    pub speed: f64,
    /// Start playing as soon as the trace is shown
    pub autoplay: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            algorithm: "contains-duplicate".to_string(),
            language: "python".to_string(),
            input: "1, 2, 3, 1".to_string(),
            target: 9,
            speed: 1.0,
            autoplay: false,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Configuration for one run
    ///
    /// A file named on the command line must exist and parse. Without one,
    /// [`DEFAULT_CONFIG_PATH`] is optional and falls back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH))),
        }
    }

    /// Load `path`, using defaults when the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "using default configuration");
                eprintln!("Warning: {}. Using defaults.", err);
                Self::default()
            }
        }
    }
}
