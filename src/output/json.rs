//! JSON output formatter for machine processing

use crate::domain::{AppliedUpgrade, PackageData, RunSummary};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    dry_run: bool,
    summary: JsonSummary,
    projects: Vec<JsonProject<'a>>,
    planned: &'a [AppliedUpgrade],
    applied: &'a [AppliedUpgrade],
}

#[derive(Serialize)]
struct JsonSummary {
    /// Update counter from the report
    updates_found: usize,
    planned: usize,
    applied: usize,
}

#[derive(Serialize)]
struct JsonProject<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    framework: &'a str,
    packages: Vec<&'a PackageData>,
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Write the summary as pretty-printed JSON followed by a newline
    pub fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: summary.dry_run,
            summary: JsonSummary {
                updates_found: summary.update_count,
                planned: summary.planned.len(),
                applied: summary.applied.len(),
            },
            projects: summary
                .projects
                .iter()
                .map(|p| JsonProject {
                    name: &p.name,
                    framework: &p.version.name,
                    packages: p.packages().collect(),
                })
                .collect(),
            planned: &summary.planned,
            applied: &summary.applied,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
