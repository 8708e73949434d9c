//! Error types for chainconf.
//!
//! Every failure while loading, validating or persisting a configuration
//! document surfaces as a [`ConfigError`]. The variants only distinguish the
//! cause; callers treat all of them as fatal for the current call.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The backing document could not be found and it was required.
    #[error("Could not open files of the name {0}")]
    Missing(String),

    /// Reading the backing document failed.
    #[error("Unable to load {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not well-formed or has the wrong root element.
    #[error("Malformed configuration document: {0}")]
    Malformed(String),

    /// The document declares a public identifier with no registered grammar.
    #[error("Unsupported configuration document version: {0}")]
    UnsupportedVersion(String),

    /// A structural rule of the grammar was violated.
    #[error("{0}")]
    Invalid(String),

    /// Rendering or writing the document back to storage failed.
    #[error("Unable to persist configuration: {0}")]
    Persist(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Invalid`].
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid(message.into())
    }

    /// Returns the CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Missing(_) => exit_codes::USER_ERROR,
            ConfigError::Malformed(_)
            | ConfigError::UnsupportedVersion(_)
            | ConfigError::Invalid(_) => exit_codes::CONFIG_ERROR,
            ConfigError::Io { .. } | ConfigError::Persist(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
