use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for harvest operations.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file or value issue.
    #[error("{0}")]
    Config(String),

    /// Git execution failed (subprocess or libgit2).
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },

    /// HTTP transport failure while probing or fetching a mirror.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Existing catalog unreadable, or the atomic write could not complete.
    #[error("Catalog I/O failure at {path}: {details}")]
    CatalogIo { path: PathBuf, details: String },

    /// Catalog file exists but does not deserialize.
    #[error("Malformed catalog at {path}: {details}")]
    CatalogFormat { path: PathBuf, details: String },

    /// TOML parsing error in the run configuration.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl HarvestError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        HarvestError::Config(message.into())
    }
}
