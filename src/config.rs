//! Construction-time options for a log session
//!
//! Loaded from `config/catanlog.json` when present. Every key is optional and
//! falls back to the defaults below. Command-line flags override the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{LogError, Result};

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/catanlog.json";

/// Default directory for .catan files
pub const DEFAULT_LOG_DIR: &str = "log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Flush to the destination after every record
    pub auto_flush: bool,
    /// Directory the session file is written to
    pub log_dir: PathBuf,
    /// Write to stdout instead of a file
    pub use_stdout: bool,
    /// Append `after Ns` to end-turn records
    pub turn_timing: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            auto_flush: true,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            use_stdout: false,
            turn_timing: true,
        }
    }
}

impl LogConfig {
    /// In-memory only: nothing is flushed unless asked for
    pub fn buffered() -> Self {
        Self {
            auto_flush: false,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LogError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| LogError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from the default file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            info!("No {} found, using defaults", SETTINGS_FILE);
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                info!("Loaded settings from {}", SETTINGS_FILE);
                config
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Apply command-line overrides. Returns the arguments that were not recognized.
    ///
    /// `--settings <path>` replaces the whole config before the other flags apply.
    pub fn apply_args(&mut self, args: &[String]) -> Vec<String> {
        let mut i = 0;
        while i < args.len() {
            if args[i] == "--settings" && i + 1 < args.len() {
                match Self::from_file(&args[i + 1]) {
                    Ok(loaded) => *self = loaded,
                    Err(e) => warn!("{}", e),
                }
                break;
            }
            i += 1;
        }

        let mut rest = Vec::new();
        i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--settings" => {
                    // Already handled above
                    i += 1;
                }
                "--log-dir" => {
                    if i + 1 < args.len() {
                        self.log_dir = PathBuf::from(&args[i + 1]);
                        i += 1;
                    }
                }
                "--stdout" => self.use_stdout = true,
                "--no-auto-flush" => self.auto_flush = false,
                "--no-turn-timing" => self.turn_timing = false,
                other => rest.push(other.to_string()),
            }
            i += 1;
        }
        rest
    }
}
