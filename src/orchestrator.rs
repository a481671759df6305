//! Update orchestrator for coordinating the entire update workflow
//!
//! Workflow: list outdated → parse (with locks) → plan → apply.

use crate::cli::UpdateArgs;
use crate::domain::{AppliedUpgrade, RunSummary};
use crate::error::CommandError;
use crate::lock::LockTable;
use crate::output::{Notice, Reporter};
use crate::package_manager::{PackageManager, UpgradeScope};
use crate::parser::ReportParser;
use crate::progress::ListingSpinner;
use crate::update::{UpgradeExecutor, UpgradePlanner};

/// Options for one update run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// How far the listing may look for newer versions
    pub scope: UpgradeScope,
    /// Only announce upgrades
    pub dry_run: bool,
    /// Whether to draw a spinner while the report is collected
    pub show_progress: bool,
}

impl RunOptions {
    /// Create options from the `update` subcommand arguments
    pub fn from_args(args: &UpdateArgs) -> Self {
        Self {
            scope: UpgradeScope::from_flags(args.major, args.patch),
            dry_run: args.dry_run,
            show_progress: true,
        }
    }
}

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator {
    options: RunOptions,
    locks: LockTable,
}

impl Orchestrator {
    /// Create a new orchestrator. Locks are parsed by the caller so that a
    /// malformed lock is reported before anything else happens.
    pub fn new(options: RunOptions, locks: LockTable) -> Self {
        Self { options, locks }
    }

    /// Run the update workflow
    pub fn run<P: PackageManager + ?Sized>(
        &self,
        package_manager: &P,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary, CommandError> {
        if self.options.scope == UpgradeScope::Major {
            reporter.notify(Notice::MajorUpgrades);
        }
        if self.options.dry_run {
            reporter.notify(Notice::DryRun);
        }

        // Step 1: Collect the report
        let spinner =
            ListingSpinner::start(self.options.show_progress, "Collecting outdated packages...");
        let report = package_manager.list_outdated(self.options.scope);
        spinner.stop();
        let report = report?.into_success()?;

        // Step 2: Parse it, applying locks
        if !self.locks.is_empty() {
            tracing::debug!(pins = self.locks.len(), "applying version locks");
        }
        let parsed = ReportParser::new(&self.locks).parse(&report.output, reporter);
        reporter.notify(Notice::UpdatesFound(parsed.update_count));

        // Step 3: Decide what to upgrade
        let plan = UpgradePlanner::new().plan(parsed.projects.values());
        tracing::debug!(entries = plan.total_entries(), "upgrade plan ready");

        // Step 4: Apply
        let applied = UpgradeExecutor::new(self.options.dry_run).execute(
            &plan,
            package_manager,
            reporter,
        )?;

        let planned = plan
            .entries()
            .map(|(project, entry)| AppliedUpgrade::new(project, entry.clone()))
            .collect();

        Ok(RunSummary {
            dry_run: self.options.dry_run,
            update_count: parsed.update_count,
            projects: parsed.into_projects(),
            planned,
            applied,
        })
    }
}
