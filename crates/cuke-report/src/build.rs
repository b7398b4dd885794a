//! Assembling scenario records from a report stream.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use cuke_search::Searchable;
use serde::Serialize;

use crate::{
    error::ReportError,
    messages::{Envelope, FeatureChild, Status, Timestamp},
};

/// One scenario of a loaded report.
///
/// These are the records fed to the search index and rendered by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    /// Pickle id (or declaration id when the report has no pickles).
    pub id: String,
    /// Display name, with outline placeholders substituted when the report
    /// contains pickles.
    pub name: String,
    /// Declaration keyword ("Scenario", "Scenario Outline", ...).
    pub keyword: String,
    /// Feature file the scenario came from.
    pub uri: Option<String>,
    /// Line of the declaration in the feature file.
    pub line: Option<u32>,
    /// Worst status over the scenario's finished steps.
    pub status: Status,
}

impl Searchable for Scenario {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A loaded test-run report.
#[derive(Debug, Default)]
pub struct Report {
    /// Scenarios in pickle order (declaration order when there are no
    /// pickles).
    pub scenarios: Vec<Scenario>,
    /// When the run started.
    pub started: Option<Timestamp>,
    /// When the run finished.
    pub finished: Option<Timestamp>,
    /// Whether the run succeeded, when the report says.
    pub success: Option<bool>,
    /// Producer label, e.g. "cucumber-js 8.0.0".
    pub implementation: Option<String>,
}

impl Report {
    /// Loads a report from an NDJSON file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|source| ReportError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ndjson(BufReader::new(file))
    }

    /// Reads a report from a stream of NDJSON message envelopes.
    ///
    /// Blank lines are skipped; a line that is not valid JSON fails the
    /// load with its line number. Envelope kinds outside the recognized
    /// subset are ignored.
    pub fn from_ndjson<R: BufRead>(reader: R) -> Result<Self, ReportError> {
        let mut builder = Builder::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(ReportError::ReadStream)?;
            if line.trim().is_empty() {
                continue;
            }
            let envelope: Envelope =
                serde_json::from_str(&line).map_err(|source| ReportError::Malformed {
                    line: number + 1,
                    source,
                })?;
            builder.absorb(envelope);
        }

        Ok(builder.finish())
    }
}

/// A scenario declaration, flattened out of its gherkin document.
#[derive(Debug)]
struct Declaration {
    /// Declared name.
    name: String,
    /// Declaration keyword.
    keyword: String,
    /// Feature file uri.
    uri: Option<String>,
    /// Declaration line.
    line: Option<u32>,
}

/// Raw pickle data kept until the whole stream has been read.
#[derive(Debug)]
struct PickleRecord {
    /// Pickle id.
    id: String,
    /// Pickle display name.
    name: String,
    /// Pickle uri.
    uri: Option<String>,
    /// AST ids linking back to the declaration.
    ast_node_ids: Vec<String>,
}

/// Accumulates envelopes, then resolves the cross-references in `finish`.
///
/// Cucumber emits envelopes in dependency order, but resolution is deferred
/// anyway so a reordered or truncated stream degrades to `Unknown` statuses
/// instead of failing.
#[derive(Debug, Default)]
struct Builder {
    /// Declaration id -> declaration, from gherkin documents.
    declarations: HashMap<String, Declaration>,
    /// Declaration ids in document order, for pickle-less reports.
    declaration_order: Vec<String>,
    /// Pickles in stream order.
    pickles: Vec<PickleRecord>,
    /// Test case id -> pickle id.
    case_to_pickle: HashMap<String, String>,
    /// Execution id -> test case id.
    started_to_case: HashMap<String, String>,
    /// Execution id -> worst step status seen so far.
    worst_by_execution: HashMap<String, Status>,
    /// Run start timestamp.
    started: Option<Timestamp>,
    /// Run finish timestamp.
    finished: Option<Timestamp>,
    /// Run success flag.
    success: Option<bool>,
    /// Producer label.
    implementation: Option<String>,
}

impl Builder {
    /// Folds one envelope into the accumulated state.
    fn absorb(&mut self, envelope: Envelope) {
        if let Some(doc) = envelope.gherkin_document
            && let Some(feature) = doc.feature
        {
            self.absorb_children(feature.children, doc.uri.as_deref());
        }
        if let Some(pickle) = envelope.pickle {
            self.pickles.push(PickleRecord {
                id: pickle.id,
                name: pickle.name,
                uri: pickle.uri,
                ast_node_ids: pickle.ast_node_ids,
            });
        }
        if let Some(case) = envelope.test_case {
            self.case_to_pickle.insert(case.id, case.pickle_id);
        }
        if let Some(started) = envelope.test_case_started {
            self.started_to_case.insert(started.id, started.test_case_id);
        }
        if let Some(step) = envelope.test_step_finished {
            let worst = self
                .worst_by_execution
                .entry(step.test_case_started_id)
                .or_default();
            *worst = (*worst).max(step.test_step_result.status);
        }
        if let Some(run) = envelope.test_run_started {
            self.started = run.timestamp;
        }
        if let Some(run) = envelope.test_run_finished {
            self.finished = run.timestamp;
            self.success = Some(run.success);
        }
        if let Some(meta) = envelope.meta
            && let Some(product) = meta.implementation
        {
            self.implementation = Some(match product.version {
                Some(version) => format!("{} {version}", product.name),
                None => product.name,
            });
        }
    }

    /// Collects scenario declarations from feature or rule children.
    fn absorb_children(&mut self, children: Vec<FeatureChild>, uri: Option<&str>) {
        for child in children {
            if let Some(scenario) = child.scenario {
                self.declaration_order.push(scenario.id.clone());
                self.declarations.insert(
                    scenario.id,
                    Declaration {
                        name: scenario.name,
                        keyword: scenario.keyword,
                        uri: uri.map(str::to_owned),
                        line: scenario.location.map(|l| l.line),
                    },
                );
            }
            if let Some(rule) = child.rule {
                self.absorb_children(rule.children, uri);
            }
        }
    }

    /// Resolves cross-references into the final report.
    fn finish(self) -> Report {
        // Worst status per pickle, resolved through execution -> case.
        let mut worst_by_pickle: HashMap<&str, Status> = HashMap::new();
        for (execution, status) in &self.worst_by_execution {
            let Some(case) = self.started_to_case.get(execution) else {
                continue;
            };
            let Some(pickle) = self.case_to_pickle.get(case) else {
                continue;
            };
            let worst = worst_by_pickle.entry(pickle.as_str()).or_default();
            *worst = (*worst).max(*status);
        }

        let scenarios = if self.pickles.is_empty() {
            // Parse-only stream: surface the declarations themselves.
            self.declaration_order
                .iter()
                .filter_map(|id| {
                    let decl = self.declarations.get(id)?;
                    Some(Scenario {
                        id: id.clone(),
                        name: decl.name.clone(),
                        keyword: decl.keyword.clone(),
                        uri: decl.uri.clone(),
                        line: decl.line,
                        status: Status::Unknown,
                    })
                })
                .collect()
        } else {
            self.pickles
                .iter()
                .map(|pickle| {
                    let decl = pickle
                        .ast_node_ids
                        .iter()
                        .find_map(|id| self.declarations.get(id));
                    let name = if pickle.name.is_empty() {
                        decl.map(|d| d.name.clone()).unwrap_or_default()
                    } else {
                        pickle.name.clone()
                    };
                    Scenario {
                        id: pickle.id.clone(),
                        name,
                        keyword: decl.map(|d| d.keyword.clone()).unwrap_or_default(),
                        uri: pickle
                            .uri
                            .clone()
                            .or_else(|| decl.and_then(|d| d.uri.clone())),
                        line: decl.and_then(|d| d.line),
                        status: worst_by_pickle
                            .get(pickle.id.as_str())
                            .copied()
                            .unwrap_or_default(),
                    }
                })
                .collect()
        };

        Report {
            scenarios,
            started: self.started,
            finished: self.finished,
            success: self.success,
            implementation: self.implementation,
        }
    }
}
