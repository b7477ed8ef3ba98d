//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// The `[branch]` prefix is empty, so no branch can be told apart.
    #[error("invalid configuration: branch prefix is empty")]
    EmptyBranchPrefix,

    /// A `[version_rules."<line>"]` entry cannot be used.
    #[error("invalid version rule {line}: {reason}")]
    InvalidRule { line: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
