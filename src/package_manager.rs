//! Integration with the `dotnet` CLI
//!
//! This module provides:
//! - Discovery of the `dotnet` executable on PATH
//! - Execution of `dotnet list package --outdated` and `dotnet add package`
//! - A trait seam so the engine can run against a fake package manager

use crate::error::CommandError;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Name of the executable looked up on PATH
pub const DOTNET_PROGRAM: &str = "dotnet";

/// How far `dotnet list package --outdated` may look for newer versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpgradeScope {
    /// Any newer version, including major bumps
    Major,
    /// Newest version with the same major number
    #[default]
    Minor,
    /// Newest version with the same major and minor numbers
    Patch,
}

impl UpgradeScope {
    /// Resolve the scope from CLI flags; `--major` wins over `--patch`
    pub fn from_flags(major: bool, patch: bool) -> Self {
        if major {
            UpgradeScope::Major
        } else if patch {
            UpgradeScope::Patch
        } else {
            UpgradeScope::Minor
        }
    }

    /// Arguments for the outdated-package listing
    pub fn list_args(&self) -> Vec<&'static str> {
        let mut args = vec!["list", "package", "--outdated"];
        match self {
            UpgradeScope::Major => {}
            UpgradeScope::Minor => args.push("--highest-minor"),
            UpgradeScope::Patch => args.push("--highest-patch"),
        }
        args
    }
}

/// Captured result of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// The command line that was executed
    pub command: String,
    /// Exit code, if the process exited normally
    pub status: Option<i32>,
    /// Whether the command succeeded
    pub success: bool,
    /// Standard output followed by standard error
    pub output: String,
}

impl CommandOutput {
    /// Create a successful command output
    pub fn success(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            status: Some(0),
            success: true,
            output: output.into(),
        }
    }

    /// Create a failed command output
    pub fn failure(command: impl Into<String>, status: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            status,
            success: false,
            output: output.into(),
        }
    }

    fn from_process(command: String, output: Output) -> Self {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Self {
            command,
            status: output.status.code(),
            success: output.status.success(),
            output: combined,
        }
    }

    /// Turn a failed command into an error
    pub fn into_success(self) -> Result<Self, CommandError> {
        if self.success {
            Ok(self)
        } else {
            Err(CommandError::failed(self.command, self.status, self.output))
        }
    }
}

/// Trait for running package manager commands
pub trait PackageManager {
    /// Run the outdated-package listing and capture its report
    fn list_outdated(&self, scope: UpgradeScope) -> Result<CommandOutput, CommandError>;

    /// Add (or upgrade) a package reference in a project
    fn add_package(
        &self,
        project: &str,
        package: &str,
        version: &str,
    ) -> Result<CommandOutput, CommandError>;
}

/// Package manager backed by the real `dotnet` executable
#[derive(Debug, Clone)]
pub struct DotnetCli {
    /// Resolved path to the executable
    program: PathBuf,
    /// Directory the commands run in
    working_dir: PathBuf,
}

impl DotnetCli {
    /// Create a runner for an explicit executable path
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Locate `dotnet` on PATH
    pub fn locate(working_dir: impl Into<PathBuf>) -> Result<Self, CommandError> {
        let program = which::which(DOTNET_PROGRAM)
            .map_err(|e| CommandError::not_found(DOTNET_PROGRAM, e))?;
        tracing::debug!(program = %program.display(), "found dotnet");
        Ok(Self::new(program, working_dir))
    }

    /// Run a command and capture output
    fn run_command(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let command_str = format!("{} {}", self.program.display(), args.join(" "));
        tracing::debug!("Executing: {}", command_str);

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| CommandError::spawn(command_str.clone(), e))?;

        let result = CommandOutput::from_process(command_str, output);
        tracing::debug!(status = ?result.status, "command finished");
        Ok(result)
    }
}

impl PackageManager for DotnetCli {
    fn list_outdated(&self, scope: UpgradeScope) -> Result<CommandOutput, CommandError> {
        self.run_command(&scope.list_args())
    }

    fn add_package(
        &self,
        project: &str,
        package: &str,
        version: &str,
    ) -> Result<CommandOutput, CommandError> {
        self.run_command(&add_package_args(project, package, version))
    }
}

/// Arguments for `dotnet add <project> package <package> -v <version>`
fn add_package_args<'a>(project: &'a str, package: &'a str, version: &'a str) -> Vec<&'a str> {
    vec!["add", project, "package", package, "-v", version]
}
