//! CLI argument parsing module for nugoget

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Update the NuGet dependencies of .NET projects
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nugoget",
    version,
    about = "Update dependencies of a dotnet project",
    long_about = "This program is designed to help with updating dependencies"
)]
pub struct Cli {
    /// Output debug data (executed commands, parser decisions)
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Updates the dependencies of each project found
    Update(UpdateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Directory to run dotnet in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Update to the latest major version. This can break your project!
    #[arg(short = 'M', long)]
    pub major: bool,

    /// Update to the latest patch version only
    #[arg(short = 'P', long)]
    pub patch: bool,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'D', long = "dry-run", visible_alias = "dryrun")]
    pub dry_run: bool,

    /// Lock a package to a version, in the format <name>#<version>
    /// (can be specified multiple times)
    #[arg(short, long = "lock", value_name = "NAME#VERSION", action = ArgAction::Append)]
    pub locks: Vec<String>,

    /// Print a JSON summary on stdout; progress goes to stderr
    #[arg(long)]
    pub json: bool,
}
