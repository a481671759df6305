//! Execution of planned upgrades

use crate::domain::{AppliedUpgrade, UpgradePlan};
use crate::error::CommandError;
use crate::output::{Notice, Reporter};
use crate::package_manager::PackageManager;

/// Runs `dotnet add package` for each planned upgrade
#[derive(Debug, Clone, Copy)]
pub struct UpgradeExecutor {
    dry_run: bool,
}

impl UpgradeExecutor {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Announce and apply every entry of the plan, one command per package.
    ///
    /// In dry-run mode nothing is invoked. Otherwise the first failing
    /// command stops the run; upgrades applied before it are kept.
    pub fn execute<P: PackageManager + ?Sized>(
        &self,
        plan: &UpgradePlan,
        package_manager: &P,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<AppliedUpgrade>, CommandError> {
        let mut applied = Vec::new();

        for project_plan in &plan.projects {
            reporter.notify(Notice::ProjectSection(project_plan.project.clone()));

            for entry in &project_plan.entries {
                reporter.notify(Notice::WillUpdate {
                    package: entry.package.clone(),
                    from: entry.from.clone(),
                    to: entry.to.clone(),
                });

                if self.dry_run {
                    continue;
                }

                let output = package_manager
                    .add_package(&project_plan.project, &entry.package, &entry.to)?
                    .into_success()?;
                reporter.notify(Notice::CommandOutput(output.output));

                applied.push(AppliedUpgrade::new(&project_plan.project, entry.clone()));
            }
        }

        Ok(applied)
    }
}
