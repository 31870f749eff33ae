pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod output;
pub mod validator;

pub use error::{ReadError, Result, YamlGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_YAML: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
