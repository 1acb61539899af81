//! catanlog - write a scenario's game to a .catan log
//!
//! Usage:
//!   cargo run -- tests/scenarios/game/full_turns.toml
//!   cargo run -- game.toml --stdout
//!   cargo run -- game.toml --log-dir out --no-turn-timing
//!   cargo run -- game.toml --settings config/catanlog.json
//!
//! The game is replayed through a live session, so the header timestamp and
//! turn durations are the real ones.

use std::path::Path;

use catanlog::testing::{parse_scenario_file, replay};
use catanlog::{CatanLog, LogConfig, init_tracing};
use tracing::info;

fn main() {
    init_tracing("catanlog=info");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = LogConfig::load();
    let rest = config.apply_args(&args);

    let Some(scenario_path) = rest.iter().find(|a| !a.starts_with('-')) else {
        eprintln!("Usage: catanlog <scenario.toml> [--settings <file>] [--log-dir <dir>] [--stdout] [--no-auto-flush] [--no-turn-timing]");
        std::process::exit(1);
    };

    let scenario = match parse_scenario_file(Path::new(scenario_path)) {
        Ok(def) => def,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut log = CatanLog::new(config);
    let result = replay(&scenario, &mut log).and_then(|()| log.flush());
    if let Err(e) = result {
        eprintln!("Failed to write log: {}", e);
        std::process::exit(1);
    }

    if !log.config().use_stdout {
        info!(
            "Wrote {} records to {}",
            scenario.events.len(),
            log.log_path().display()
        );
    }
}
