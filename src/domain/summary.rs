//! Summary of a complete run

use super::{PlanEntry, Project};
use serde::{Deserialize, Serialize};

/// An upgrade together with the project it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedUpgrade {
    pub project: String,
    #[serde(flatten)]
    pub entry: PlanEntry,
}

impl AppliedUpgrade {
    pub fn new(project: impl Into<String>, entry: PlanEntry) -> Self {
        Self {
            project: project.into(),
            entry,
        }
    }
}

/// Outcome of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Update counter accumulated while parsing the report
    pub update_count: usize,
    /// Parsed projects
    pub projects: Vec<Project>,
    /// Every plan entry
    pub planned: Vec<AppliedUpgrade>,
    /// Entries actually installed (empty in dry-run)
    pub applied: Vec<AppliedUpgrade>,
}
