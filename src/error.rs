//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LockError: Issues with user supplied `--lock` pins
//! - CommandError: Issues locating or running the `dotnet` CLI
//!
//! Each top-level error maps to a stable process exit status.

use thiserror::Error;

/// Exit status for a malformed `--lock` entry
pub const EXIT_MALFORMED_LOCK: u8 = 3;

/// Exit status when an external `dotnet` invocation fails or cannot be started
pub const EXIT_COMMAND_FAILED: u8 = 4;

/// Exit status for any other failure
pub const EXIT_FAILURE: u8 = 1;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Lock specification errors
    #[error(transparent)]
    Lock(#[from] LockError),

    /// External command errors
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl AppError {
    /// Returns the process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Lock(_) => EXIT_MALFORMED_LOCK,
            AppError::Command(_) => EXIT_COMMAND_FAILED,
        }
    }
}

/// Errors related to `--lock` pins
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LockError {
    /// Lock is missing the `#` separator
    #[error("invalid lock '{spec}': expected format <name>#<version>")]
    Malformed { spec: String },
}

impl LockError {
    /// Creates a new Malformed error
    pub fn malformed(spec: impl Into<String>) -> Self {
        LockError::Malformed { spec: spec.into() }
    }
}

/// Errors related to running the package manager
#[derive(Error, Debug)]
pub enum CommandError {
    /// Binary could not be found on PATH
    #[error("could not find '{program}' on PATH; install the .NET SDK and make sure it is in your PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// Process could not be started
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a failure status
    #[error("'{command}' failed with {}{}", describe_status(*status), describe_output(output))]
    Failed {
        command: String,
        status: Option<i32>,
        output: String,
    },
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_output(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

impl CommandError {
    /// Creates a new NotFound error
    pub fn not_found(program: impl Into<String>, source: which::Error) -> Self {
        CommandError::NotFound {
            program: program.into(),
            source,
        }
    }

    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Failed error
    pub fn failed(
        command: impl Into<String>,
        status: Option<i32>,
        output: impl Into<String>,
    ) -> Self {
        CommandError::Failed {
            command: command.into(),
            status,
            output: output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_error_malformed() {
        let err = LockError::malformed("BadLock");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid lock 'BadLock'"));
        assert!(msg.contains("<name>#<version>"));
    }

    #[test]
    fn test_command_error_spawn() {
        let err = CommandError::spawn(
            "dotnet list package",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to execute 'dotnet list package'"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_command_error_failed_with_output() {
        let err = CommandError::failed("dotnet add App package Foo -v 2.0.0", Some(1), "boom\n");
        let msg = format!("{}", err);
        assert!(msg.contains("exit code 1"));
        assert!(msg.ends_with(":\nboom"));
    }

    #[test]
    fn test_command_error_failed_without_output() {
        let err = CommandError::failed("dotnet list package", None, "  ");
        let msg = format!("{}", err);
        assert!(msg.contains("terminated by signal"));
        assert!(!msg.contains(':'));
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_ne!(EXIT_MALFORMED_LOCK, 0);
        assert_ne!(EXIT_COMMAND_FAILED, 0);
        assert_ne!(EXIT_MALFORMED_LOCK, EXIT_COMMAND_FAILED);
        assert_ne!(EXIT_FAILURE, EXIT_MALFORMED_LOCK);
        assert_ne!(EXIT_FAILURE, EXIT_COMMAND_FAILED);
    }

    #[test]
    fn test_app_error_exit_code() {
        let err: AppError = LockError::malformed("x").into();
        assert_eq!(err.exit_code(), EXIT_MALFORMED_LOCK);

        let err: AppError = CommandError::failed("dotnet", Some(1), "").into();
        assert_eq!(err.exit_code(), EXIT_COMMAND_FAILED);
    }

    #[test]
    fn test_app_error_from_lock_error_is_transparent() {
        let app_err: AppError = LockError::malformed("pkg").into();
        assert!(app_err.to_string().contains("invalid lock 'pkg'"));
    }
}
