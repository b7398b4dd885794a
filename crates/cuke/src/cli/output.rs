//! Rendering helpers for CLI output.

use comfy_table::{Cell, Color, Table, presets::UTF8_FULL_CONDENSED};
use cuke_report::{Scenario, Status};

/// ANSI color and style escape codes for terminal output.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Builds the scenario listing table shared by `search` and `ls`.
pub fn scenario_table(scenarios: &[&Scenario], long: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    if long {
        table.set_header(vec!["Scenario", "Keyword", "Status", "Location", "Id"]);
    } else {
        table.set_header(vec!["Scenario", "Status", "Location"]);
    }

    for scenario in scenarios {
        let mut row = vec![Cell::new(&scenario.name)];
        if long {
            row.push(Cell::new(&scenario.keyword));
        }
        row.push(status_cell(scenario.status));
        row.push(Cell::new(location(scenario)));
        if long {
            row.push(Cell::new(&scenario.id));
        }
        table.add_row(row);
    }

    table
}

/// A status cell colored by severity.
fn status_cell(status: Status) -> Cell {
    let color = match status {
        Status::Passed => Color::Green,
        Status::Failed | Status::Ambiguous => Color::Red,
        Status::Undefined | Status::Pending => Color::Yellow,
        Status::Skipped => Color::Cyan,
        Status::Unknown => Color::DarkGrey,
    };
    Cell::new(status.to_string()).fg(color)
}

/// "uri:line" for display, or "-" when the report carried neither.
fn location(scenario: &Scenario) -> String {
    match (&scenario.uri, scenario.line) {
        (Some(uri), Some(line)) => format!("{uri}:{line}"),
        (Some(uri), None) => uri.clone(),
        (None, _) => "-".into(),
    }
}
