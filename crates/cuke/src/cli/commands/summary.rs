//! Implementation of `cuke summary`.

use std::{
    process::ExitCode,
    time::{SystemTime, UNIX_EPOCH},
};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use cuke_report::{ExecutionSummary, Status, format_age, format_duration};
use serde::Serialize;

use crate::cli::{
    args::SummaryCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// JSON output for `cuke summary --json`.
#[derive(Serialize)]
struct JsonSummaryOutput {
    /// Total scenario count.
    total: usize,
    /// Counts for every status, including zeroes.
    counts: Vec<JsonStatusCount>,
    /// Passed scenarios as a whole percentage.
    passed_percent: u32,
    /// Run duration in seconds, when the report carried both timestamps.
    duration_seconds: Option<f64>,
    /// Whether the run succeeded, when the report says.
    success: Option<bool>,
    /// Producer label.
    implementation: Option<String>,
}

/// One status row of the JSON summary.
#[derive(Serialize)]
struct JsonStatusCount {
    /// Status name, lowercase.
    status: String,
    /// Scenario count.
    count: usize,
}

/// Prints execution statistics for the loaded report.
pub fn run(ctx: &CommandContext, cmd: &SummaryCommand) -> ExitCode {
    let summary = ExecutionSummary::of(&ctx.report);

    if cmd.json {
        let output = JsonSummaryOutput {
            total: summary.total,
            counts: Status::ALL
                .iter()
                .map(|&status| JsonStatusCount {
                    status: status.to_string(),
                    count: summary.count(status),
                })
                .collect(),
            passed_percent: summary.passed_percent(),
            duration_seconds: summary.duration.map(|d| d.as_secs_f64()),
            success: summary.success,
            implementation: summary.implementation,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize summary: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Run: {}", ctx.report_path.display())));
    println!(
        "  {} executed, {}% passed",
        summary.total,
        summary.passed_percent()
    );
    if let Some(duration) = summary.duration {
        println!("  duration: {}", format_duration(duration));
    }
    if let Some(age) = age_of(&summary) {
        println!("  last run: {age}");
    }
    if let Some(implementation) = &summary.implementation {
        println!("  implementation: {implementation}");
    }
    if let Some(success) = summary.success {
        let verdict = if success { "passed" } else { "failed" };
        println!("  result: {verdict}");
    }
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Status", "Scenarios"]);
    let mut any = false;
    for status in Status::ALL {
        let count = summary.count(status);
        if count > 0 {
            table.add_row(vec![Cell::new(status.to_string()), Cell::new(count)]);
            any = true;
        }
    }
    if any {
        println!("{table}");
    } else {
        println!("{}", dim("The report contains no scenarios."));
    }

    ExitCode::SUCCESS
}

/// How long ago the run started, relative to now.
fn age_of(summary: &ExecutionSummary) -> Option<String> {
    let started = summary.started?.as_epoch();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let elapsed = now.checked_sub(started)?;
    Some(format_age(elapsed))
}
