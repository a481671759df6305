//! Parser for the text report of `dotnet list package --outdated`
//!
//! The report is a flat stream of lines. Each line is classified by
//! [`LineKind::classify`] and folded into a [`ParseState`] that tracks which
//! project is currently being filled in. Unknown lines are ignored, so the
//! parser never fails.

mod line;

pub use line::{LineKind, PackageRow};

use crate::domain::{PackageData, Project};
use crate::lock::LockTable;
use crate::output::{Notice, Reporter};
use std::collections::BTreeMap;

/// Projects reconstructed from a report, plus the update counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReport {
    /// Projects keyed by name
    pub projects: BTreeMap<String, Project>,
    /// Number of updates counted while reading package rows
    pub update_count: usize,
}

impl ParsedReport {
    /// Looks up a project by name
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    /// Consume the report and return the projects
    pub fn into_projects(self) -> Vec<Project> {
        self.projects.into_values().collect()
    }
}

/// In-progress parse: finished projects plus the one being filled in
#[derive(Debug, Default)]
struct ParseState {
    report: ParsedReport,
    current: Option<Project>,
}

impl ParseState {
    /// Store the active project, replacing any earlier project with the same name
    fn flush(&mut self) {
        if let Some(project) = self.current.take() {
            self.report.projects.insert(project.name.clone(), project);
        }
    }

    fn finish(mut self) -> ParsedReport {
        self.flush();
        self.report
    }
}

/// Line-oriented report parser
pub struct ReportParser<'a> {
    locks: &'a LockTable,
}

impl<'a> ReportParser<'a> {
    /// Create a parser that applies the given pins to package rows
    pub fn new(locks: &'a LockTable) -> Self {
        Self { locks }
    }

    /// Parse a full report
    pub fn parse(&self, report: &str, reporter: &mut dyn Reporter) -> ParsedReport {
        let mut state = ParseState::default();
        for line in report.lines() {
            state = self.apply(state, LineKind::classify(line), reporter);
        }
        state.finish()
    }

    fn apply(
        &self,
        mut state: ParseState,
        kind: LineKind<'_>,
        reporter: &mut dyn Reporter,
    ) -> ParseState {
        match kind {
            LineKind::ProjectHeader(name) => {
                tracing::debug!(project = name, "found project header");
                state.flush();
                state.current = Some(Project::new(name));
                reporter.notify(Notice::CheckingProject(name.to_string()));
            }
            LineKind::FrameworkHeader(framework) => match state.current.as_mut() {
                Some(project) => project.start_framework(framework),
                None => tracing::warn!(framework, "framework header before any project, skipping"),
            },
            LineKind::TableHeader | LineKind::Ignorable => {}
            LineKind::PackageRow(row) => {
                let Some(project) = state.current.as_mut() else {
                    tracing::warn!(package = row.name, "package row before any project, skipping");
                    return state;
                };

                let package = match self.locks.get(row.name) {
                    Some(pinned) => {
                        state.report.update_count += 1;
                        PackageData::locked(row.name, pinned)
                    }
                    None => PackageData::new(row.name, row.requested, row.resolved, row.latest),
                };
                project.version.insert(package);

                // counted on the scraped values, so a locked row can count twice
                if row.requested != row.latest {
                    state.report.update_count += 1;
                }
            }
        }
        state
    }
}
