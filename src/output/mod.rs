mod json;
mod style;
mod text;

pub use json::JsonReporter;
pub use style::{AnsiStyler, ColorMode, PlainStyler, Styler, styler_for};
pub use text::TextReporter;

use crate::error::Result;
use crate::validator::{Outcome, Summary};

/// Receives the events of one validation pass.
///
/// `record` is called once per configured path, in list order, right after
/// that path has been checked.
pub trait Reporter {
    /// Called once before the first file is checked.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn begin(&mut self) -> Result<()>;

    /// Report the outcome for `path`.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn record(&mut self, path: &str, outcome: &Outcome) -> Result<()>;

    /// Called once after the last file with the final counters.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written or serialized.
    fn finish(&mut self, summary: &Summary) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report, streamed per file
    #[default]
    Text,
    /// Single JSON document written after all files are checked
    Json,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
