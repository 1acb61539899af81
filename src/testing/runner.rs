//! Scenario execution

use chrono::NaiveDateTime;
use rayon::prelude::*;

use super::assertions::{AssertionError, check_expectations};
use super::parser::ScenarioDefinition;
use crate::clock::FixedClock;
use crate::config::LogConfig;
use crate::events::{CatanLog, GameLog, TIMESTAMP_FORMAT};

/// Result of running a scenario
#[derive(Debug)]
pub enum ScenarioResult {
    Pass { lines: usize },
    Fail { error: AssertionError },
    Error { message: String },
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        matches!(self, ScenarioResult::Pass { .. })
    }
}

/// Feed a scenario's header and records into any log
pub fn replay<L: GameLog>(scenario: &ScenarioDefinition, log: &mut L) -> crate::error::Result<()> {
    if let Some(setup) = &scenario.setup {
        log.start_game(&setup.players, &setup.terrain, &setup.numbers, &setup.ports)?;
    }
    for event in &scenario.events {
        log.log_event(event.clone())?;
    }
    Ok(())
}

fn parse_start(start: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(start, TIMESTAMP_FORMAT)
        .map_err(|e| format!("Invalid start time '{}': {}", start, e))
}

/// Run a single scenario in memory and check its expectations
pub fn run_scenario(scenario: &ScenarioDefinition) -> ScenarioResult {
    let start = match parse_start(&scenario.start) {
        Ok(start) => start,
        Err(message) => return ScenarioResult::Error { message },
    };

    let config = LogConfig {
        turn_timing: scenario.turn_timing,
        ..LogConfig::buffered()
    };
    let mut log = CatanLog::with_clock(config, FixedClock::new(start));

    if let Err(e) = replay(scenario, &mut log) {
        return ScenarioResult::Error {
            message: e.to_string(),
        };
    }

    let lines: Vec<&str> = log.dump().lines().collect();
    match check_expectations(&scenario.expect, &lines) {
        Ok(()) => ScenarioResult::Pass { lines: lines.len() },
        Err(error) => ScenarioResult::Fail { error },
    }
}

/// Run scenarios concurrently. Results come back in input order.
pub fn run_scenarios_parallel(scenarios: &[ScenarioDefinition]) -> Vec<ScenarioResult> {
    scenarios.par_iter().map(run_scenario).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(toml: &str) -> ScenarioDefinition {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_single_player_header_scenario() {
        let def = scenario(
            r#"
name = "Header"
[setup]
terrain = ["wood"]
numbers = [6]
[[setup.players]]
seat = 1
name = "ross"
color = "red"
[expect]
output = [
    "catanlog v0.9.1",
    "timestamp: 2016-07-18 12:00:00",
    "players: 1",
    "name: ross, color: red, seat: 1",
    "terrain: wood",
    "numbers: 6",
    "ports: ",
    "...CATAN!",
]
"#,
        );
        let result = run_scenario(&def);
        assert!(result.passed(), "{:?}", result);
    }

    #[test]
    fn test_failing_expectation() {
        let def = scenario(
            r#"
name = "Wrong"
[[events]]
type = "win"
color = "green"
[expect]
last = ["green loses"]
"#,
        );
        assert!(matches!(run_scenario(&def), ScenarioResult::Fail { .. }));
    }

    #[test]
    fn test_bad_start_time_is_an_error() {
        let def = scenario(
            r#"
name = "Clock"
start = "yesterday"
"#,
        );
        assert!(matches!(run_scenario(&def), ScenarioResult::Error { .. }));
    }

    #[test]
    fn test_parallel_keeps_order() {
        let defs: Vec<ScenarioDefinition> = (2..=12)
            .map(|roll| {
                scenario(&format!(
                    "name = \"r{roll}\"\n[[events]]\ntype = \"roll\"\ncolor = \"red\"\nroll = {roll}\n[expect]\nline_count = 1\n"
                ))
            })
            .collect();
        let results = run_scenarios_parallel(&defs);
        assert_eq!(results.len(), 11);
        assert!(results.iter().all(ScenarioResult::passed));
    }
}
