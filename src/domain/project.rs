//! Projects and their target framework sections

use super::PackageData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Packages listed under one target framework heading (e.g. `[net6.0]:`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkVersion {
    /// Target framework moniker, empty until a framework heading is seen
    pub name: String,
    /// Packages keyed by package id
    pub packages: BTreeMap<String, PackageData>,
}

impl FrameworkVersion {
    /// Creates an empty framework section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: BTreeMap::new(),
        }
    }

    /// Inserts a package, replacing any previous row with the same name
    pub fn insert(&mut self, package: PackageData) {
        self.packages.insert(package.name.clone(), package);
    }

    /// Looks up a package by name
    pub fn get(&self, name: &str) -> Option<&PackageData> {
        self.packages.get(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// A project found in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name as printed by the report
    pub name: String,
    /// The most recent framework section seen for this project
    pub version: FrameworkVersion,
}

impl Project {
    /// Creates a project holding an empty, unnamed framework section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: FrameworkVersion::default(),
        }
    }

    /// Starts a new framework section, discarding the packages of the previous one
    pub fn start_framework(&mut self, framework: impl Into<String>) {
        self.version = FrameworkVersion::new(framework);
    }

    /// Returns the packages of the current framework section
    pub fn packages(&self) -> impl Iterator<Item = &PackageData> {
        self.version.packages.values()
    }
}
