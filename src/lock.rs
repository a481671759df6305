//! Version pins supplied with `--lock <name>#<version>`

use crate::error::LockError;
use std::collections::HashMap;

/// Separator between package name and pinned version
const LOCK_SEPARATOR: char = '#';

/// Mapping from package name to the version it is pinned to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockTable {
    pins: HashMap<String, String>,
}

impl LockTable {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lock table from `name#version` strings.
    ///
    /// The first entry without a `#` aborts the build. The name is the text
    /// before the first `#` and the version the text up to the next `#`, so
    /// `Foo#1.0#beta` pins `1.0`. A later pin for the same package replaces
    /// an earlier one.
    pub fn from_specs<I, S>(specs: I) -> Result<Self, LockError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for spec in specs {
            let spec = spec.as_ref();
            let mut parts = spec.split(LOCK_SEPARATOR);
            match (parts.next(), parts.next()) {
                (Some(name), Some(version)) => table.pin(name, version),
                _ => return Err(LockError::malformed(spec)),
            }
        }
        Ok(table)
    }

    /// Pin a package to a version
    pub fn pin(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.pins.insert(name.into(), version.into());
    }

    /// Returns the pinned version for a package, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pins.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
