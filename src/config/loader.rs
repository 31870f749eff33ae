use std::path::{Path, PathBuf};

use crate::error::{Result, YamlGuardError};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::Config;

/// Result of loading a configuration, containing both the config and where it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Config file that was read, or `None` when the built-in defaults apply.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".yaml-guard.toml";

/// Loads configuration from the filesystem.
///
/// Looks for `.yaml-guard.toml` in the current directory and falls back to
/// `Config::default()` when it is absent.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn read_config(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| YamlGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Config = toml::from_str(&content)?;
        validate_config(&config)?;

        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => self.read_config(&path),
            _ => Ok(LoadResult {
                config: Config::default(),
                source: None,
            }),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        if !self.fs.exists(path) {
            return Err(YamlGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        self.read_config(path)
    }
}

/// Semantic checks that TOML deserialization cannot express.
///
/// # Errors
/// Returns an error naming the first blank entry in `files`.
pub fn validate_config(config: &Config) -> Result<()> {
    for (i, file) in config.files.iter().enumerate() {
        if file.trim().is_empty() {
            return Err(YamlGuardError::Config(format!(
                "files[{i}] cannot be empty"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
