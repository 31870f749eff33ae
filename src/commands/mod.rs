pub mod validate;

pub use validate::{resolve_files, run_validate, run_validate_impl};
