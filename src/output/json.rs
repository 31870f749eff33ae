use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::validator::{Outcome, Summary};

use super::Reporter;

/// Collects outcomes and writes one JSON document when the pass finishes.
pub struct JsonReporter<W: Write> {
    out: W,
    results: Vec<FileResult>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: JsonSummary,
    results: &'a [FileResult],
}

#[derive(Serialize)]
struct JsonSummary {
    total_files: usize,
    valid: usize,
    missing: usize,
    invalid: usize,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            results: Vec::new(),
        }
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin(&mut self) -> Result<()> {
        self.results.clear();
        Ok(())
    }

    fn record(&mut self, path: &str, outcome: &Outcome) -> Result<()> {
        self.results.push(FileResult {
            path: path.to_string(),
            status: outcome.as_str(),
            error: outcome.message().map(str::to_string),
        });
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let output = JsonOutput {
            summary: JsonSummary {
                total_files: summary.total(),
                valid: summary.valid,
                missing: summary.missing,
                invalid: summary.invalid,
            },
            results: &self.results,
        };

        let json = serde_json::to_string_pretty(&output)?;
        writeln!(self.out, "{json}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
