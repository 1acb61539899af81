//! Error types for catanlog

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the log session and its configuration
#[derive(Error, Debug)]
pub enum LogError {
    /// Log directory could not be created
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Session file could not be opened or appended to
    #[error("Failed to append to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard output rejected the write
    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    /// Settings file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for `LogConfig`
    #[error("Failed to parse {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LogError>;
