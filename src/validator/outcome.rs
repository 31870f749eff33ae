use crate::{EXIT_INVALID_YAML, EXIT_SUCCESS};

/// Result of checking a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file exists and parses as YAML.
    Valid,
    /// Nothing exists at the path. Tolerated.
    Missing,
    /// Parse or read failure, with a human-readable message.
    Invalid(String),
}

impl Outcome {
    /// Error message for invalid files.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message.as_str()),
            Self::Valid | Self::Missing => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Missing => "missing",
            Self::Invalid(_) => "invalid",
        }
    }
}

/// Which summary block a finished run ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every configured file exists and parses.
    AllValid,
    /// No syntax errors, but some files are missing.
    ValidWithMissing,
    /// At least one file failed to read or parse.
    HasErrors,
}

/// Per-outcome counters for one pass over the file list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub valid: usize,
    pub missing: usize,
    pub invalid: usize,
}

impl Summary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            valid: 0,
            missing: 0,
            invalid: 0,
        }
    }

    pub const fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Valid => self.valid += 1,
            Outcome::Missing => self.missing += 1,
            Outcome::Invalid(_) => self.invalid += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.valid + self.missing + self.invalid
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.invalid > 0 {
            Verdict::HasErrors
        } else if self.missing > 0 {
            Verdict::ValidWithMissing
        } else {
            Verdict::AllValid
        }
    }

    /// Missing files never fail the run; only invalid ones do.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.invalid > 0 {
            EXIT_INVALID_YAML
        } else {
            EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
