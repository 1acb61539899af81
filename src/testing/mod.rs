//! Scenario testing for the .catan format
//!
//! A scenario is a TOML file describing a game start and a list of records,
//! plus the log text they must produce. Scenarios run against an in-memory
//! `CatanLog` with a fixed clock, so timestamps are deterministic.

pub mod assertions;
pub mod parser;
pub mod runner;

use std::fs;
use std::path::{Path, PathBuf};

pub use assertions::{AssertionError, check_expectations};
pub use parser::{GameSetup, ScenarioDefinition, ScenarioExpectations, parse_scenario_file};
pub use runner::{ScenarioResult, replay, run_scenario, run_scenarios_parallel};

/// Default path for scenario files
pub const SCENARIOS_DIR: &str = "tests/scenarios";

/// Find `.toml` scenarios under `base`, sorted. `filter` matches the relative path.
pub fn discover_scenarios(base: &Path, filter: Option<&str>) -> Vec<PathBuf> {
    let mut found = Vec::new();
    discover_recursive(base, base, filter, &mut found);
    found.sort();
    found
}

fn discover_recursive(base: &Path, current: &Path, filter: Option<&str>, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(current) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            discover_recursive(base, &path, filter, found);
        } else if path.extension().map(|e| e == "toml").unwrap_or(false) {
            if let Some(f) = filter {
                let rel = path.strip_prefix(base).unwrap_or(&path).to_string_lossy();
                if !rel.contains(f) {
                    continue;
                }
            }
            found.push(path);
        }
    }
}
