//! Spinner drawn while `dotnet` restores and lists packages
//!
//! The listing can take a while on a cold NuGet cache. indicatif draws on
//! stderr and stays silent when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Spinner covering one blocking `dotnet list package` call
pub struct ListingSpinner {
    bar: ProgressBar,
}

impl ListingSpinner {
    /// Start the spinner; when `visible` is false a hidden bar is used
    pub fn start(visible: bool, message: &str) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        if visible {
            bar.enable_steady_tick(TICK);
        }
        Self { bar }
    }

    /// Remove the spinner line
    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}
