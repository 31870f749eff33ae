mod outcome;
mod parse;

pub use outcome::{Outcome, Summary, Verdict};

use std::path::Path;

use crate::error::{ReadError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::Reporter;

use parse::parse_yaml;

/// Checks an ordered list of YAML files for syntax errors.
///
/// Paths are resolved relative to the process working directory. Each path
/// is checked independently and in list order; duplicates are checked once
/// per occurrence.
pub struct Validator<F: FileSystem = RealFileSystem> {
    files: Vec<String>,
    fs: F,
}

impl Validator<RealFileSystem> {
    #[must_use]
    pub const fn new(files: Vec<String>) -> Self {
        Self::with_fs(files, RealFileSystem)
    }
}

impl<F: FileSystem> Validator<F> {
    #[must_use]
    pub const fn with_fs(files: Vec<String>, fs: F) -> Self {
        Self { files, fs }
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Classify a single file. Never fails: every problem becomes an [`Outcome`].
    pub fn check_file(&self, path: &str) -> Outcome {
        let file_path = Path::new(path);
        if !self.fs.exists(file_path) {
            return Outcome::Missing;
        }

        match self.read_file(file_path) {
            Ok(content) => parse_yaml(&content),
            // Removed between the existence check and the read.
            Err(ReadError::NotFound) => Outcome::Missing,
            Err(err) => Outcome::Invalid(format!("Error reading file: {err}")),
        }
    }

    fn read_file(&self, path: &Path) -> std::result::Result<String, ReadError> {
        Ok(self.fs.read_to_string(path)?)
    }

    /// Check every configured file in order, reporting each outcome before the
    /// next file is read.
    ///
    /// # Errors
    /// Returns an error only if the reporter fails to write its output.
    pub fn run<R: Reporter>(&self, reporter: &mut R) -> Result<Summary> {
        let mut summary = Summary::new();

        reporter.begin()?;
        for path in &self.files {
            let outcome = self.check_file(path);
            reporter.record(path, &outcome)?;
            summary.record(&outcome);
        }
        reporter.finish(&summary)?;

        Ok(summary)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
