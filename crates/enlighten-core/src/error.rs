//! Error types for enlighten

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enlighten
#[derive(Debug, Error)]
pub enum EnlightenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// No format registered under the requested name
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Recorded snapshot does not have a recognized shape
    #[error("Malformed snapshot at '{path}': {reason}")]
    MalformedSnapshot { path: String, reason: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EnlightenError>,
    },
}

impl EnlightenError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EnlightenError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        EnlightenError::MalformedSnapshot {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for EnlightenError {
    fn from(err: toml::de::Error) -> Self {
        EnlightenError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for EnlightenError {
    fn from(err: toml::ser::Error) -> Self {
        EnlightenError::Toml(err.to_string())
    }
}

/// Result type alias for enlighten
pub type Result<T> = std::result::Result<T, EnlightenError>;
