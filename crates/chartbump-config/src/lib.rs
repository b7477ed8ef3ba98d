//! Configuration management for chartbump.
//!
//! This crate handles loading and validating the `chartbump.toml` configuration
//! file, which carries the branch-line version rules of a chart repository.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, load_config};
pub use schema::{BranchConfig, Config, PathsConfig, VersionRule};
