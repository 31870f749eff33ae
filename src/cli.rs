use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "yaml-guard")]
#[command(author, version, about = "Check project YAML files for syntax errors")]
#[command(long_about = "Parses each configured YAML file and reports which are valid, \
    missing, or invalid.\n\n\
    Missing files are reported as warnings and never fail the run.\n\n\
    Exit codes:\n  \
    0 - No syntax errors (missing files allowed)\n  \
    1 - At least one file failed to read or parse\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// YAML files to check (overrides the configured file list)
    pub files: Vec<String>,

    /// Path to configuration file (default: .yaml-guard.toml if present)
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
