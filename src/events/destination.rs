//! Where flushed log text goes
//!
//! File mode opens the session file in append mode, writes, and closes it on
//! every flush. No handle is held between flushes, so the file may be rotated
//! or removed between records.

use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::LogConfig;
use crate::error::{LogError, Result};
use crate::model::Player;

/// Extension of session files
pub const LOG_EXTENSION: &str = "catan";

/// Timestamp format for the header line and file names
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Append to `<log_dir>/<timestamp>-<names>.catan`
    File { log_dir: PathBuf },
    /// Process standard output
    Stdout,
}

impl Destination {
    pub fn from_config(config: &LogConfig) -> Self {
        if config.use_stdout {
            Destination::Stdout
        } else {
            Destination::File {
                log_dir: config.log_dir.clone(),
            }
        }
    }

    /// Write `text` verbatim. `path` is the session file in file mode.
    pub fn write(&self, path: &Path, text: &str) -> Result<()> {
        match self {
            Destination::File { log_dir } => append_to_file(log_dir, path, text),
            Destination::Stdout => write_stdout(text),
        }
    }
}

/// Format a session timestamp
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `<log_dir>/<timestamp>-<name1-name2-...>.catan`
pub fn session_path(log_dir: &Path, game_start: &NaiveDateTime, players: &[Player]) -> PathBuf {
    let names = players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join("-");
    let filename = format!(
        "{}-{}.{}",
        format_timestamp(game_start),
        names,
        LOG_EXTENSION
    );
    log_dir.join(filename)
}

fn append_to_file(log_dir: &Path, path: &Path, text: &str) -> Result<()> {
    fs::create_dir_all(log_dir).map_err(|source| LogError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let write_err = |source| LogError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes()).map_err(LogError::Stdout)?;
    out.flush().map_err(LogError::Stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 7, 18)
            .unwrap()
            .and_hms_opt(12, 0, 5)
            .unwrap()
    }

    #[test]
    fn test_session_path_joins_names() {
        let players = vec![Player::new(1, "ross", "red"), Player::new(2, "zach", "orange")];
        let path = session_path(Path::new("log"), &noon(), &players);
        assert_eq!(
            path,
            PathBuf::from("log").join("2016-07-18 12:00:05-ross-zach.catan")
        );
    }

    #[test]
    fn test_session_path_without_players() {
        let path = session_path(Path::new("log"), &noon(), &[]);
        assert_eq!(path, PathBuf::from("log").join("2016-07-18 12:00:05-.catan"));
    }

    #[test]
    fn test_from_config_picks_mode() {
        let stdout = LogConfig {
            use_stdout: true,
            ..LogConfig::default()
        };
        assert_eq!(Destination::from_config(&stdout), Destination::Stdout);
        assert_eq!(
            Destination::from_config(&LogConfig::default()),
            Destination::File {
                log_dir: PathBuf::from("log")
            }
        );
    }

    #[test]
    fn test_stdout_write_ignores_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("unused.catan");
        Destination::Stdout.write(&path, "red wins\n").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_mode_creates_directory_and_appends() {
        let tmp = tempfile::tempdir().unwrap();
        let log_dir = tmp.path().join("nested").join("log");
        let dest = Destination::File {
            log_dir: log_dir.clone(),
        };
        let path = log_dir.join("game.catan");

        dest.write(&path, "red rolls 6\n").unwrap();
        dest.write(&path, "red wins\n").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "red rolls 6\nred wins\n"
        );
    }

    #[test]
    fn test_file_mode_reports_unwritable_directory() {
        let tmp = tempfile::tempdir().unwrap();
        // a regular file where the directory should be
        let blocker = tmp.path().join("log");
        fs::write(&blocker, "").unwrap();
        let dest = Destination::File {
            log_dir: blocker.clone(),
        };
        let err = dest.write(&blocker.join("game.catan"), "x\n").unwrap_err();
        assert!(matches!(err, LogError::CreateDir { .. }));
    }
}
