//! Package state as reported by `dotnet list package --outdated`

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one top-level package in a framework section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageData {
    /// Package id
    pub name: String,
    /// Version constraint currently referenced by the project
    pub requested: String,
    /// Version actually selected by restore
    pub resolved: String,
    /// Newest version the tool reported as available
    pub latest: String,
}

impl PackageData {
    /// Creates a new package record
    pub fn new(
        name: impl Into<String>,
        requested: impl Into<String>,
        resolved: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            requested: requested.into(),
            resolved: resolved.into(),
            latest: latest.into(),
        }
    }

    /// Creates a record with every version field set to the pinned version
    pub fn locked(name: impl Into<String>, version: &str) -> Self {
        Self::new(name, version, version, version)
    }

    /// Returns true if the requested version differs from the latest one
    pub fn needs_upgrade(&self) -> bool {
        self.requested != self.latest
    }
}

impl fmt::Display for PackageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (resolved {}, latest {})",
            self.name, self.requested, self.resolved, self.latest
        )
    }
}
