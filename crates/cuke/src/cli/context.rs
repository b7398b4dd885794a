//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use cuke_report::{Report, Scenario};
use cuke_search::ScenarioSearch;

/// Environment variable consulted when `--report` is not given.
pub const REPORT_ENV_VAR: &str = "CUKE_REPORT";

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Path the report was loaded from.
    pub report_path: PathBuf,
    /// The loaded report.
    pub report: Report,
}

impl CommandContext {
    /// Resolves the report path and loads the report.
    pub fn load(flag: Option<PathBuf>) -> Result<Self, ExitCode> {
        let report_path = resolve_report_path(flag)?;
        let report = match Report::load(&report_path) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        Ok(Self {
            report_path,
            report,
        })
    }

    /// Builds the search index over the loaded scenarios.
    ///
    /// The index borrows the report and lives for one invocation; it is
    /// rebuilt from scratch on the next run, never persisted.
    pub fn build_index(&self) -> ScenarioSearch<&Scenario> {
        let mut index = ScenarioSearch::new();
        for scenario in &self.report.scenarios {
            index.add(scenario);
        }
        index
    }
}

/// Picks the report path from the flag or the environment.
fn resolve_report_path(flag: Option<PathBuf>) -> Result<PathBuf, ExitCode> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = env::var_os(REPORT_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    eprintln!("error: no report given; pass --report or set {REPORT_ENV_VAR}");
    Err(ExitCode::FAILURE)
}
