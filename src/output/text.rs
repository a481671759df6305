//! Human-readable console output for progress notices

use crate::output::{Notice, Reporter};
use colored::Colorize;
use std::io::Write;

/// Writes notices as colored text
pub struct ConsoleReporter<W: Write> {
    writer: W,
    /// Whether to use colors
    color: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a new console reporter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: true,
        }
    }

    /// Create a new console reporter with color option
    pub fn with_color(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    fn render(&self, notice: &Notice) -> String {
        if !self.color {
            return match notice {
                Notice::ProjectSection(name) => format!("\n\n{}", name),
                other => other.to_string(),
            };
        }

        match notice {
            Notice::MajorUpgrades => notice.to_string().yellow().bold().to_string(),
            Notice::DryRun => notice.to_string().cyan().to_string(),
            Notice::CheckingProject(name) => {
                format!("{} {}", "Checking for updates in".dimmed(), name.cyan())
            }
            Notice::UpdatesFound(count) => {
                format!("{} updates found", count.to_string().yellow().bold())
            }
            Notice::ProjectSection(name) => format!("\n\n{}", name.bold().underline()),
            Notice::WillUpdate { package, from, to } => format!(
                "{} will be updated from {} to {}",
                package.white().bold(),
                from.dimmed(),
                to.green().bold()
            ),
            Notice::CommandOutput(output) => output.clone(),
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn notify(&mut self, notice: Notice) {
        let line = self.render(&notice);
        let _ = writeln!(self.writer, "{}", line);
    }
}
