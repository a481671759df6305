//! nugoget - update the NuGet dependencies of .NET projects
//!
//! This library reads the report of `dotnet list package --outdated`,
//! applies user supplied version locks, plans the upgrades and runs
//! `dotnet add package` for each of them.

pub mod cli;
pub mod domain;
pub mod error;
pub mod lock;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod parser;
pub mod progress;
pub mod update;
