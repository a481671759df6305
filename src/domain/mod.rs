//! Core domain models for nugoget
//!
//! This module contains the model rebuilt from each outdated-package report:
//! - Package state scraped from a single report row
//! - Projects and the target framework section they currently hold
//! - Upgrade plan entries derived from the parsed model
//! - The summary returned from a full run

mod package;
mod plan;
mod project;
mod summary;

pub use package::PackageData;
pub use plan::{PlanEntry, ProjectPlan, UpgradePlan};
pub use project::{FrameworkVersion, Project};
pub use summary::{AppliedUpgrade, RunSummary};
