//! Scenario test runner CLI
//!
//! Usage:
//!   cargo run --bin test-scenarios              # Run all scenarios
//!   cargo run --bin test-scenarios -- header/   # Run category
//!   cargo run --bin test-scenarios -- body/trades  # Run single scenario
//!   cargo run --bin test-scenarios -- --verbose # Show descriptions and failure details

use std::env;
use std::path::Path;

use catanlog::init_tracing;
use catanlog::testing::{
    SCENARIOS_DIR, ScenarioResult, discover_scenarios, parse_scenario_file, run_scenarios_parallel,
};

fn main() {
    init_tracing("warn");

    let args: Vec<String> = env::args().collect();

    let mut verbose = false;
    let mut filter: Option<String> = None;

    for arg in &args[1..] {
        if arg == "--verbose" || arg == "-v" {
            verbose = true;
        } else if !arg.starts_with('-') {
            filter = Some(arg.clone());
        }
    }

    println!("Scenario Tests");
    println!("==============\n");

    let scenarios_path = Path::new(SCENARIOS_DIR);
    if !scenarios_path.exists() {
        println!("No scenarios directory found at {}", SCENARIOS_DIR);
        println!("Create scenario files in tests/scenarios/");
        std::process::exit(1);
    }

    let paths = discover_scenarios(scenarios_path, filter.as_deref());

    if paths.is_empty() {
        println!("No scenario files found.");
        if let Some(f) = filter {
            println!("Filter: {}", f);
        }
        std::process::exit(1);
    }

    // Parse everything first, run the parsable ones in parallel
    let mut parsed = Vec::new();
    let mut parse_errors = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        match parse_scenario_file(path) {
            Ok(def) => parsed.push((i, def)),
            Err(e) => parse_errors.push((i, e)),
        }
    }
    let (indices, scenarios): (Vec<usize>, Vec<_>) = parsed.into_iter().unzip();
    let run = run_scenarios_parallel(&scenarios);

    let mut descriptions: Vec<Option<String>> = paths.iter().map(|_| None).collect();
    for (i, def) in indices.iter().zip(&scenarios) {
        descriptions[*i] = def.description.clone();
    }

    let mut results: Vec<Option<ScenarioResult>> = paths.iter().map(|_| None).collect();
    for (i, result) in indices.into_iter().zip(run) {
        results[i] = Some(result);
    }
    for (i, message) in parse_errors {
        results[i] = Some(ScenarioResult::Error { message });
    }

    let mut passed = 0;
    let mut failed = 0;
    let mut errors = 0;
    let mut current_category = String::new();

    for ((path, result), description) in paths.iter().zip(results).zip(&descriptions) {
        let Some(result) = result else { continue };
        let rel_path = path.strip_prefix(scenarios_path).unwrap_or(path);

        // Print category header
        if let Some(parent) = rel_path.parent() {
            let category = parent.to_string_lossy().to_string();
            if category != current_category && !category.is_empty() {
                if !current_category.is_empty() {
                    println!();
                }
                println!("{}/", category);
                current_category = category;
            }
        }

        let name = rel_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        match &result {
            ScenarioResult::Pass { .. } => passed += 1,
            ScenarioResult::Fail { .. } => failed += 1,
            ScenarioResult::Error { .. } => errors += 1,
        }

        print_result(&name, description.as_deref(), &result, verbose);
    }

    println!("\n==============");
    println!(
        "Results: {} passed, {} failed, {} errors",
        passed, failed, errors
    );

    if failed > 0 || errors > 0 {
        std::process::exit(1);
    }
}

fn print_result(name: &str, description: Option<&str>, result: &ScenarioResult, verbose: bool) {
    let dots = ".".repeat(40 - name.len().min(39));

    match result {
        ScenarioResult::Pass { lines } => {
            println!("  {} {} PASS ({} lines)", name, dots, lines);
            if verbose {
                if let Some(description) = description {
                    println!("    {}", description);
                }
            }
        }
        ScenarioResult::Fail { error } => {
            println!("  {} {} FAIL", name, dots);
            if verbose {
                if let Some(description) = description {
                    println!("    {}", description);
                }
                println!("    {}", error);
            } else {
                println!("    {}", error.message);
            }
        }
        ScenarioResult::Error { message } => {
            println!("  {} {} ERROR", name, dots);
            println!("    {}", message);
        }
    }
}
