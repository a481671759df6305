//! Classification of single report lines
//!
//! Line shapes produced by `dotnet list package --outdated`:
//! - Project header: ``Project `Api` has the following updates to its packages``
//! - No-update header: ``The given project `Api` has no updates given the current sources.``
//! - Framework header: `   [net6.0]: `
//! - Table header: `   Top-level Package      Requested   Resolved   Latest`
//! - Package row: `   > Newtonsoft.Json      12.0.1      12.0.1     13.0.3`

use regex::Regex;
use std::sync::LazyLock;

// Word and space classes are ASCII only: `\w` is `[0-9A-Za-z_]`, `\s` is `[\t\n\f\r ]`.
static PROJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:The given )?[Pp]roject `([0-9A-Za-z_.]+)`").unwrap());

static FRAMEWORK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\t\n\f\r ]+\[([0-9A-Za-z_.]+)\]:").unwrap());

static TABLE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\t\n\f\r ]+Top-level Package[\t\n\f\r ]+Requested[\t\n\f\r ]+Resolved[\t\n\f\r ]+Latest",
    )
    .unwrap()
});

static PACKAGE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[\t\n\f\r ]+>[\t\n\f\r ]+([0-9A-Za-z_.-]+)",
        r"[\t\n\f\r ]+([0-9A-Za-z_.-]+)",
        r"[\t\n\f\r ]+([0-9A-Za-z_.-]+)",
        r"[\t\n\f\r ]+([0-9A-Za-z_.-]+)",
    ))
    .unwrap()
});

/// A package row exactly as scraped from the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRow<'a> {
    pub name: &'a str,
    pub requested: &'a str,
    pub resolved: &'a str,
    pub latest: &'a str,
}

/// What a report line means to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Start of a project's section, carrying the project name
    ProjectHeader(&'a str),
    /// Start of a target framework section, carrying the moniker
    FrameworkHeader(&'a str),
    /// Column header row of the package table
    TableHeader,
    /// One top-level package
    PackageRow(PackageRow<'a>),
    /// Blank lines, sources listings and anything else
    Ignorable,
}

impl<'a> LineKind<'a> {
    /// Classify a line. Patterns are tried in a fixed order and the first match wins.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = PROJECT_RE.captures(line) {
            if let Some(name) = caps.get(1) {
                return LineKind::ProjectHeader(name.as_str());
            }
        }

        if let Some(caps) = FRAMEWORK_RE.captures(line) {
            if let Some(framework) = caps.get(1) {
                return LineKind::FrameworkHeader(framework.as_str());
            }
        }

        if TABLE_HEADER_RE.is_match(line) {
            return LineKind::TableHeader;
        }

        if let Some(caps) = PACKAGE_ROW_RE.captures(line) {
            if let (Some(name), Some(requested), Some(resolved), Some(latest)) =
                (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
            {
                return LineKind::PackageRow(PackageRow {
                    name: name.as_str(),
                    requested: requested.as_str(),
                    resolved: resolved.as_str(),
                    latest: latest.as_str(),
                });
            }
        }

        LineKind::Ignorable
    }
}
