use std::io::Write;

use crate::cli::Cli;
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::output::{ColorMode, JsonReporter, OutputFormat, TextReporter, styler_for};
use crate::validator::{Summary, Validator};
use crate::{EXIT_CONFIG_ERROR, Result};

#[must_use]
pub fn run_validate(cli: &Cli) -> i32 {
    let stdout = std::io::stdout();
    match run_validate_impl(cli, stdout.lock()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            if cli.verbose > 0 {
                eprintln!("[{}]", e.error_type());
            }
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Resolve the file list, check every file and write the report to `out`.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the report
/// cannot be written. Problems with the YAML files themselves are reported,
/// not returned.
pub fn run_validate_impl<W: Write>(cli: &Cli, out: W) -> Result<i32> {
    let files = resolve_files(cli, &FileConfigLoader::new())?;
    let validator = Validator::new(files);

    let summary = run_with_format(&validator, cli, out)?;

    if cli.verbose > 0 {
        eprintln!(
            "Checked {} file(s): {} valid, {} missing, {} invalid",
            summary.total(),
            summary.valid,
            summary.missing,
            summary.invalid
        );
    }

    Ok(summary.exit_code())
}

fn run_with_format<W: Write>(validator: &Validator, cli: &Cli, out: W) -> Result<Summary> {
    match cli.format {
        OutputFormat::Text => {
            let styler = styler_for(ColorMode::from(cli.color));
            validator.run(&mut TextReporter::new(out, styler))
        }
        OutputFormat::Json => validator.run(&mut JsonReporter::new(out)),
    }
}

/// Pick the file list: command-line files, then the config file, then the
/// built-in list.
///
/// # Errors
/// Returns an error if a config file is requested or present but invalid.
pub fn resolve_files<L: ConfigLoader>(cli: &Cli, loader: &L) -> Result<Vec<String>> {
    if !cli.files.is_empty() {
        if cli.verbose > 0 {
            eprintln!("Using {} file(s) from the command line", cli.files.len());
        }
        return Ok(cli.files.clone());
    }

    if cli.no_config {
        if cli.verbose > 0 {
            eprintln!("Configuration skipped, using built-in file list");
        }
        return Ok(crate::config::Config::default().files);
    }

    let loaded = match cli.config.as_deref() {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };

    if cli.verbose > 0 {
        match &loaded.source {
            Some(path) => eprintln!("Loaded configuration from {}", path.display()),
            None => eprintln!("No configuration file found, using built-in file list"),
        }
    }
    if cli.verbose > 1 {
        for file in &loaded.config.files {
            eprintln!("  {file}");
        }
    }

    Ok(loaded.config.files)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
