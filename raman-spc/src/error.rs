//! Error types for SPC import

use crate::decoder::DecodeError;
use std::path::PathBuf;

/// Error type for SPC parsing operations
#[derive(Debug, thiserror::Error)]
pub enum SpcError {
    /// Missing or malformed base identifier; raised before any I/O
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The staged copy of the input could not be written
    #[error("Staging error at {path}: {source}")]
    StagingIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The attribute tree decoder failed or returned an unexpected shape
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An embedded date token does not match `dd.MM.yyyy HH:mm`
    #[error("Invalid date '{value}': {reason}")]
    DateFormat { value: String, reason: String },

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse config file {path}: {detail}")]
    Config { path: PathBuf, detail: String },
}

/// Result type for SPC operations
pub type Result<T> = std::result::Result<T, SpcError>;

impl SpcError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn date_format(value: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::DateFormat {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn staging(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StagingIo {
            path: path.into(),
            source,
        }
    }
}
