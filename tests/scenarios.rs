//! Runs every scenario under tests/scenarios against the library

use std::path::Path;

use catanlog::testing::{
    SCENARIOS_DIR, ScenarioResult, discover_scenarios, parse_scenario_file, run_scenario,
};

#[test]
fn all_scenarios_pass() {
    let paths = discover_scenarios(Path::new(SCENARIOS_DIR), None);
    assert!(!paths.is_empty(), "no scenarios found in {}", SCENARIOS_DIR);

    let mut failures = Vec::new();
    for path in &paths {
        let result = match parse_scenario_file(path) {
            Ok(def) => run_scenario(&def),
            Err(message) => ScenarioResult::Error { message },
        };
        match result {
            ScenarioResult::Pass { .. } => {}
            ScenarioResult::Fail { error } => failures.push(format!("{}: {}", path.display(), error)),
            ScenarioResult::Error { message } => failures.push(format!("{}: {}", path.display(), message)),
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn category_filter_selects_subdirectory() {
    let paths = discover_scenarios(Path::new(SCENARIOS_DIR), Some("header/"));
    assert!(!paths.is_empty());
    assert!(paths.iter().all(|p| p.to_string_lossy().contains("header")));
}
