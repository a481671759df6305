//! Upgrade planning over a parsed report

use crate::domain::{PlanEntry, Project, ProjectPlan, UpgradePlan};

/// Decides which packages should be upgraded
#[derive(Debug, Default)]
pub struct UpgradePlanner;

impl UpgradePlanner {
    pub fn new() -> Self {
        Self
    }

    /// Build a plan with one section per project.
    ///
    /// A package is planned when its stored requested version differs from
    /// its stored latest version. Locked packages were stored with identical
    /// versions and therefore never appear.
    pub fn plan<'a>(&self, projects: impl IntoIterator<Item = &'a Project>) -> UpgradePlan {
        let mut plan = UpgradePlan::new();
        for project in projects {
            let mut project_plan = ProjectPlan::new(&project.name);
            project_plan.entries = project
                .packages()
                .filter(|pkg| pkg.needs_upgrade())
                .map(|pkg| PlanEntry::new(&pkg.name, &pkg.requested, &pkg.latest))
                .collect();
            plan.add_project(project_plan);
        }
        plan
    }
}
