//! Output for progress notices and run summaries
//!
//! This module provides:
//! - Typed progress notices emitted by the parser and the executor
//! - The `Reporter` sink those notices are sent to
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::ConsoleReporter;

use std::fmt;

/// Progress events emitted while a run is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// `--major` was requested
    MajorUpgrades,
    /// Dry-run mode is active
    DryRun,
    /// A project header was found in the report
    CheckingProject(String),
    /// Parsing finished with this many updates counted
    UpdatesFound(usize),
    /// The executor starts working on a project
    ProjectSection(String),
    /// A package is about to be upgraded (or would be, in dry-run)
    WillUpdate {
        package: String,
        from: String,
        to: String,
    },
    /// Captured output of a successful `dotnet add package`
    CommandOutput(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MajorUpgrades => write!(f, "Will do major upgrades!"),
            Notice::DryRun => write!(f, "No changes will be made, dry run enabled"),
            Notice::CheckingProject(name) => write!(f, "Checking for updates in {}", name),
            Notice::UpdatesFound(count) => write!(f, "{} updates found", count),
            Notice::ProjectSection(name) => write!(f, "{}", name),
            Notice::WillUpdate { package, from, to } => {
                write!(f, "{} will be updated from {} to {}", package, from, to)
            }
            Notice::CommandOutput(output) => write!(f, "{}", output),
        }
    }
}

/// Sink for progress notices
pub trait Reporter {
    /// Emit a notice
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in memory
impl Reporter for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}
