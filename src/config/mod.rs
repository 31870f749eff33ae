mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, validate_config};
pub use model::{Config, DEFAULT_FILES};
