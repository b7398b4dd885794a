//! Implementation of `cuke ls`.

use std::process::ExitCode;

use cuke_report::Scenario;
use serde::Serialize;

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{dim, scenario_table},
};

/// JSON output for `cuke ls --json`.
#[derive(Serialize)]
struct JsonLsOutput<'a> {
    /// Every scenario, in report order.
    scenarios: Vec<&'a Scenario>,
    /// Total scenario count.
    total: usize,
}

/// Lists every scenario in the report, in report order.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let scenarios: Vec<&Scenario> = ctx.report.scenarios.iter().collect();

    if cmd.output.json {
        let output = JsonLsOutput {
            total: scenarios.len(),
            scenarios,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize scenarios: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if scenarios.is_empty() {
        println!("{}", dim("The report contains no scenarios."));
        return ExitCode::SUCCESS;
    }

    println!("{}", scenario_table(&scenarios, cmd.output.long));
    println!("{}", dim(&format!("{} scenarios", scenarios.len())));

    ExitCode::SUCCESS
}
