//! Upgrade plan types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A package that should be moved to a new version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Package id
    pub package: String,
    /// Currently requested version
    pub from: String,
    /// Version to install
    pub to: String,
}

impl PlanEntry {
    pub fn new(package: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.package, self.from, self.to)
    }
}

/// Planned upgrades for a single project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    /// Project name, as passed to `dotnet add`
    pub project: String,
    /// Upgrades for this project, possibly none
    pub entries: Vec<PlanEntry>,
}

impl ProjectPlan {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            entries: Vec::new(),
        }
    }
}

/// Upgrade plan for every project in a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePlan {
    /// One plan per parsed project
    pub projects: Vec<ProjectPlan>,
}

impl UpgradePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project plan
    pub fn add_project(&mut self, plan: ProjectPlan) {
        self.projects.push(plan);
    }

    /// Returns the total number of planned upgrades
    pub fn total_entries(&self) -> usize {
        self.projects.iter().map(|p| p.entries.len()).sum()
    }

    /// Iterates over (project, entry) pairs
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PlanEntry)> {
        self.projects
            .iter()
            .flat_map(|p| p.entries.iter().map(move |e| (p.project.as_str(), e)))
    }
}
