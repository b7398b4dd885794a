//! Execution statistics derived from a loaded report.

use std::{collections::HashMap, time::Duration};

use crate::{
    build::Report,
    messages::{Status, Timestamp},
};

/// Aggregate statistics for one test run.
#[derive(Debug)]
pub struct ExecutionSummary {
    /// Total scenario count.
    pub total: usize,
    /// Scenario count per status. Absent statuses count zero.
    counts: HashMap<Status, usize>,
    /// Wall-clock run duration, when both run timestamps are present.
    pub duration: Option<Duration>,
    /// When the run started.
    pub started: Option<Timestamp>,
    /// Whether the run succeeded, when the report says.
    pub success: Option<bool>,
    /// Producer label, e.g. "cucumber-js 10.3.1".
    pub implementation: Option<String>,
}

impl ExecutionSummary {
    /// Computes the summary of a report.
    pub fn of(report: &Report) -> Self {
        let mut counts: HashMap<Status, usize> = HashMap::new();
        for scenario in &report.scenarios {
            *counts.entry(scenario.status).or_default() += 1;
        }

        let duration = match (&report.started, &report.finished) {
            (Some(started), Some(finished)) => finished.duration_since(started),
            _ => None,
        };

        Self {
            total: report.scenarios.len(),
            counts,
            duration,
            started: report.started,
            success: report.success,
            implementation: report.implementation.clone(),
        }
    }

    /// Number of scenarios with the given status.
    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Passed scenarios as a whole percentage of the total, rounded.
    /// An empty run is 0%.
    pub fn passed_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let ratio = self.count(Status::Passed) as f64 / self.total as f64;
        (ratio * 100.0).round() as u32
    }
}

/// Renders a run duration as prose, e.g. "1 hour 45 minutes 23 seconds".
///
/// Durations under ten seconds keep two decimals ("9.88 seconds"); longer
/// ones round to whole units, omitting zero components.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs_f64();
    if total < 10.0 {
        return format!("{total:.2} seconds");
    }

    let whole = total.round() as u64;
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let seconds = whole % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(pluralize(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(pluralize(seconds, "second"));
    }
    parts.join(" ")
}

/// Renders how long ago an instant was, floored to the largest whole unit:
/// "just now", "5 minutes ago", "3 hours ago", "15 days ago".
pub fn format_age(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 60 {
        return "just now".into();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return format!("{} ago", pluralize(minutes, "minute"));
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} ago", pluralize(hours, "hour"));
    }
    format!("{} ago", pluralize(hours / 24, "day"))
}

/// "1 hour", "2 hours".
fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Scenario;

    fn scenario(name: &str, status: Status) -> Scenario {
        Scenario {
            id: name.into(),
            name: name.into(),
            keyword: "Scenario".into(),
            uri: None,
            line: None,
            status,
        }
    }

    fn report_with(statuses: &[Status]) -> Report {
        Report {
            scenarios: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| scenario(&format!("scenario {i}"), *s))
                .collect(),
            ..Report::default()
        }
    }

    #[test]
    fn counts_by_status() {
        let report = report_with(&[
            Status::Passed,
            Status::Passed,
            Status::Failed,
            Status::Undefined,
        ]);
        let summary = ExecutionSummary::of(&report);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(Status::Passed), 2);
        assert_eq!(summary.count(Status::Failed), 1);
        assert_eq!(summary.count(Status::Undefined), 1);
        assert_eq!(summary.count(Status::Skipped), 0);
    }

    #[test]
    fn passed_percent_rounds() {
        let cases: [(usize, usize, u32); 5] = [
            (13, 45, 29),
            (5, 45, 11),
            (45, 45, 100),
            (0, 45, 0),
            (0, 0, 0),
        ];
        for (passed, total, expected) in cases {
            let mut statuses = vec![Status::Passed; passed];
            statuses.resize(total, Status::Failed);
            let summary = ExecutionSummary::of(&report_with(&statuses));
            assert_eq!(summary.passed_percent(), expected, "{passed}/{total}");
        }
    }

    #[test]
    fn duration_from_run_timestamps() {
        let report = Report {
            started: Some(Timestamp {
                seconds: 1_639_753_096,
                nanos: 0,
            }),
            finished: Some(Timestamp {
                seconds: 1_639_753_197,
                nanos: 0,
            }),
            ..Report::default()
        };
        let summary = ExecutionSummary::of(&report);
        assert_eq!(summary.duration, Some(Duration::from_secs(101)));
    }

    #[test]
    fn duration_prose_long_forms() {
        let cases = [
            (Duration::from_secs(3600 + 45 * 60 + 23), "1 hour 45 minutes 23 seconds"),
            (Duration::from_secs(12 * 60 + 15), "12 minutes 15 seconds"),
            (Duration::from_secs(2 * 3600), "2 hours"),
            (Duration::from_secs(60), "1 minute"),
        ];
        for (duration, expected) in cases {
            assert_eq!(format_duration(duration), expected);
        }
    }

    #[test]
    fn duration_prose_short_forms() {
        assert_eq!(format_duration(Duration::from_millis(10_010)), "10 seconds");
        assert_eq!(format_duration(Duration::from_millis(9_876)), "9.88 seconds");
        assert_eq!(format_duration(Duration::from_millis(6_543)), "6.54 seconds");
        assert_eq!(format_duration(Duration::ZERO), "0.00 seconds");
    }

    #[test]
    fn age_prose() {
        let cases = [
            (Duration::from_secs(30), "just now"),
            (Duration::from_secs(5 * 60), "5 minutes ago"),
            (Duration::from_secs(3600), "1 hour ago"),
            (Duration::from_secs(3 * 3600 + 24 * 60 + 18), "3 hours ago"),
            (Duration::from_secs(27 * 3600 + 24 * 60), "1 day ago"),
            (Duration::from_secs(15 * 24 * 3600), "15 days ago"),
        ];
        for (elapsed, expected) in cases {
            assert_eq!(format_age(elapsed), expected);
        }
    }
}
