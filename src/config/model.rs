use serde::{Deserialize, Serialize};

/// File list checked when neither the command line nor a config file
/// provides one.
pub const DEFAULT_FILES: &[&str] = &[
    "melos.yaml",
    "pubspec.yaml",
    "apps/skwark/pubspec.yaml",
    "apps/skwark/analysis_options.yaml",
    ".github/workflows/build.yml",
    ".github/workflows/quick-check.yml",
];

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// YAML files to check, relative to the working directory. Report order
    /// follows list order.
    #[serde(default = "default_files")]
    pub files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: default_files(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
