//! Implementation of `cuke search`.

use std::process::ExitCode;

use cuke_report::Scenario;
use serde::Serialize;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{dim, scenario_table},
};

/// JSON output for `cuke search --json`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as searched.
    query: String,
    /// Matching scenarios.
    results: Vec<&'a Scenario>,
    /// Total matches returned.
    total_matches: usize,
}

/// Searches the report's scenarios and prints the matches.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let index = ctx.build_index();
    let query = cmd.query.join(" ");

    let mut results: Vec<&Scenario> = index.search(&query).into_iter().copied().collect();
    // The index returns matches in arbitrary order; sort for display.
    results.sort_by(|a, b| {
        (a.uri.as_deref(), a.line, a.name.as_str()).cmp(&(b.uri.as_deref(), b.line, b.name.as_str()))
    });

    if cmd.output.json {
        let output = JsonSearchOutput {
            total_matches: results.len(),
            results,
            query,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize results: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if results.is_empty() {
        println!("{}", dim(&format!("No scenarios match '{query}'.")));
        return ExitCode::SUCCESS;
    }

    println!("{}", scenario_table(&results, cmd.output.long));
    println!(
        "{}",
        dim(&format!(
            "{} of {} scenarios match '{query}'",
            results.len(),
            ctx.report.scenarios.len()
        ))
    );

    ExitCode::SUCCESS
}
