//! Upgrade decision and execution
//!
//! This module provides:
//! - The planner that decides which parsed packages need an upgrade
//! - The executor that runs `dotnet add package` for each planned upgrade

mod executor;
mod planner;

pub use executor::UpgradeExecutor;
pub use planner::UpgradePlanner;
