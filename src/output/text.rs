use std::io::Write;

use crate::error::Result;
use crate::validator::{Outcome, Summary, Verdict};

use super::{Reporter, Styler};

const TITLE: &str = "🔍 YAML Configuration Validator";
const SEPARATOR_WIDTH: usize = 50;

/// Streams the human-readable report, one line per file as it is checked.
pub struct TextReporter<W: Write> {
    out: W,
    styler: Box<dyn Styler>,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub fn new(out: W, styler: Box<dyn Styler>) -> Self {
        Self { out, styler }
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn begin(&mut self) -> Result<()> {
        writeln!(self.out, "{TITLE}")?;
        self.separator()?;
        writeln!(self.out)?;
        Ok(())
    }

    fn record(&mut self, path: &str, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Missing => {
                writeln!(self.out, "{} Missing: {path}", self.styler.warn("⚠"))?;
            }
            Outcome::Valid => {
                writeln!(self.out, "{} Valid: {path}", self.styler.success("✓"))?;
            }
            Outcome::Invalid(message) => {
                writeln!(self.out, "{} Invalid: {path}", self.styler.error("✗"))?;
                writeln!(self.out, "  Error: {message}")?;
            }
        }
        // Each line must be visible before the next file is read.
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.out)?;
        self.separator()?;
        writeln!(self.out)?;

        match summary.verdict() {
            Verdict::AllValid => {
                let banner = self.styler.success("✅ All YAML files are valid!");
                writeln!(self.out, "{banner}")?;
                writeln!(self.out, "Validated {} files successfully.", summary.valid)?;
            }
            Verdict::ValidWithMissing => {
                let warnings = self.styler.warn(&format!("⚠  Warnings: {}", summary.missing));
                let validated = self.styler.success(&format!("✓ Validated: {}", summary.valid));
                writeln!(self.out, "{warnings}")?;
                writeln!(self.out, "{validated}")?;
                writeln!(self.out)?;
                writeln!(self.out, "All existing YAML files are valid.")?;
            }
            Verdict::HasErrors => {
                let errors = self.styler.error(&format!("✗ Errors: {}", summary.invalid));
                let warnings = self.styler.warn(&format!("⚠ Warnings: {}", summary.missing));
                let valid = self.styler.success(&format!("✓ Valid: {}", summary.valid));
                writeln!(self.out, "{errors}")?;
                writeln!(self.out, "{warnings}")?;
                writeln!(self.out, "{valid}")?;
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "Some YAML files have syntax errors. Please fix them."
                )?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
