//! The subset of the Cucumber message protocol the viewer consumes.
//!
//! One envelope per NDJSON line, camelCase keys. Every field is optional on
//! the wire; unknown envelope kinds and unknown fields are ignored so that
//! reports from newer producers still load.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// One line of the report stream. Exactly one of the fields is normally
/// present, but nothing enforces that; empty envelopes are skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    /// Parsed feature file with scenario declarations.
    pub gherkin_document: Option<GherkinDocument>,
    /// A compiled scenario (one per example row for outlines).
    pub pickle: Option<Pickle>,
    /// A test case bound to a pickle.
    pub test_case: Option<TestCase>,
    /// A test case execution starting.
    pub test_case_started: Option<TestCaseStarted>,
    /// A step of a running test case finishing.
    pub test_step_finished: Option<TestStepFinished>,
    /// The whole run starting.
    pub test_run_started: Option<TestRunStarted>,
    /// The whole run finishing.
    pub test_run_finished: Option<TestRunFinished>,
    /// Producer metadata.
    pub meta: Option<Meta>,
}

/// A parsed feature file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GherkinDocument {
    /// Source file the document was parsed from.
    pub uri: Option<String>,
    /// The feature, absent for empty files.
    pub feature: Option<Feature>,
}

/// A feature with its scenario declarations.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    /// Scenarios, backgrounds and rules in declaration order.
    pub children: Vec<FeatureChild>,
}

/// One child of a feature or rule body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureChild {
    /// A scenario or scenario outline declaration.
    pub scenario: Option<ScenarioDeclaration>,
    /// A rule grouping further children.
    pub rule: Option<Rule>,
}

/// A rule block nesting scenarios one level deeper.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    /// Children of the rule body.
    pub children: Vec<FeatureChild>,
}

/// A scenario as declared in the feature source.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioDeclaration {
    /// AST node id, referenced by pickles.
    pub id: String,
    /// Declared name, possibly with outline placeholders.
    pub name: String,
    /// Keyword as written ("Scenario", "Scenario Outline", ...).
    pub keyword: String,
    /// Position in the source file.
    pub location: Option<Location>,
}

/// A position in a feature source file.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
}

/// A compiled, runnable scenario.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pickle {
    /// Pickle id, referenced by test cases.
    pub id: String,
    /// Display name with outline placeholders substituted.
    pub name: String,
    /// Source file the pickle came from.
    pub uri: Option<String>,
    /// AST ids this pickle was compiled from; the scenario declaration is
    /// among them (outline pickles also reference their example row).
    pub ast_node_ids: Vec<String>,
}

/// Binding of a test case to the pickle it executes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCase {
    /// Test case id, referenced by execution envelopes.
    pub id: String,
    /// The pickle being executed.
    pub pickle_id: String,
}

/// A test case execution starting.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCaseStarted {
    /// Execution id, referenced by step envelopes.
    pub id: String,
    /// The test case being started.
    pub test_case_id: String,
}

/// A step of a running test case finishing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestStepFinished {
    /// The execution this step belongs to.
    pub test_case_started_id: String,
    /// Outcome of the step.
    pub test_step_result: TestStepResult,
}

/// Outcome of a single step.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestStepResult {
    /// Step status.
    pub status: Status,
}

/// The run starting.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestRunStarted {
    /// When the run started.
    pub timestamp: Option<Timestamp>,
}

/// The run finishing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestRunFinished {
    /// When the run finished.
    pub timestamp: Option<Timestamp>,
    /// Whether the run as a whole succeeded.
    pub success: bool,
}

/// Producer metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    /// The Cucumber implementation that produced the report.
    pub implementation: Option<Product>,
}

/// A named, versioned product in the meta envelope.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Product name, e.g. "cucumber-js".
    pub name: String,
    /// Product version, when reported.
    pub version: Option<String>,
}

/// A point in time as seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timestamp {
    /// Whole seconds since the epoch.
    pub seconds: i64,
    /// Nanosecond remainder.
    pub nanos: u32,
}

impl Timestamp {
    /// Elapsed time from `earlier` to `self`, or `None` if `self` is not
    /// actually later.
    pub fn duration_since(&self, earlier: &Self) -> Option<Duration> {
        let this = self.as_epoch();
        let that = earlier.as_epoch();
        this.checked_sub(that)
    }

    /// This instant as a duration since the Unix epoch. Pre-epoch
    /// timestamps clamp to zero.
    pub fn as_epoch(&self) -> Duration {
        let seconds = u64::try_from(self.seconds).unwrap_or(0);
        Duration::new(seconds, self.nanos)
    }
}

/// Outcome of a step or scenario.
///
/// Variants are declared in increasing severity, so the derived ordering
/// makes the worst outcome the maximum. A scenario's status is the worst
/// status over its finished steps.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// No result reported (e.g. the scenario never ran).
    #[default]
    Unknown,
    /// The step or scenario passed.
    Passed,
    /// Skipped by the runner.
    Skipped,
    /// A step definition marked the step pending.
    Pending,
    /// No step definition matched.
    Undefined,
    /// More than one step definition matched.
    Ambiguous,
    /// The step or scenario failed.
    Failed,
}

impl Status {
    /// All statuses, in severity order. Used to render summary tables with
    /// a stable row order.
    pub const ALL: [Self; 7] = [
        Self::Unknown,
        Self::Passed,
        Self::Skipped,
        Self::Pending,
        Self::Undefined,
        Self::Ambiguous,
        Self::Failed,
    ];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unknown => "unknown",
            Self::Passed => "passed",
            Self::Skipped => "skipped",
            Self::Pending => "pending",
            Self::Undefined => "undefined",
            Self::Ambiguous => "ambiguous",
            Self::Failed => "failed",
        };
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_ignores_unknown_kinds() {
        let envelope: Envelope = serde_json::from_str(r#"{"attachment":{"body":"..."}}"#).unwrap();
        assert!(envelope.gherkin_document.is_none());
        assert!(envelope.pickle.is_none());
    }

    #[test]
    fn status_parses_wire_names() {
        let status: Status = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(status, Status::Failed);
        let status: Status = serde_json::from_str("\"PASSED\"").unwrap();
        assert_eq!(status, Status::Passed);
    }

    #[test]
    fn worst_status_is_the_maximum() {
        let steps = [Status::Passed, Status::Failed, Status::Skipped];
        assert_eq!(steps.iter().max(), Some(&Status::Failed));

        let steps = [Status::Passed, Status::Undefined];
        assert_eq!(steps.iter().max(), Some(&Status::Undefined));

        assert!(Status::Failed > Status::Ambiguous);
        assert!(Status::Ambiguous > Status::Undefined);
        assert!(Status::Undefined > Status::Pending);
        assert!(Status::Pending > Status::Skipped);
        assert!(Status::Skipped > Status::Passed);
        assert!(Status::Passed > Status::Unknown);
    }

    #[test]
    fn timestamp_duration_since() {
        let start = Timestamp {
            seconds: 100,
            nanos: 500_000_000,
        };
        let finish = Timestamp {
            seconds: 103,
            nanos: 0,
        };
        let elapsed = finish.duration_since(&start).unwrap();
        assert_eq!(elapsed, Duration::from_millis(2500));

        // Reversed order is not a duration.
        assert!(start.duration_since(&finish).is_none());
    }

    #[test]
    fn timestamp_parses_wire_form() {
        let ts: Timestamp = serde_json::from_str(r#"{"seconds":1639753096,"nanos":5}"#).unwrap();
        assert_eq!(ts.seconds, 1_639_753_096);
        assert_eq!(ts.nanos, 5);
    }
}
