//! SPC attribute tree decoding
//!
//! Binary SPC decoding is delegated. The parser only sees the
//! [`SpcDecoder`] trait; [`RscriptEngine`] is the bundled implementation.

mod rscript;

pub use rscript::RscriptEngine;

use crate::attribute::AttributeList;
use std::path::{Path, PathBuf};

/// Flags forwarded to the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Copy header fields into the data section
    pub hdr2data: bool,
    /// Copy log block fields into the data section
    pub log2data: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            hdr2data: true,
            log2data: true,
        }
    }
}

/// Decoder failures; the parser logs them and keeps the partial graph
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The decoder process could not be started
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    /// The decoder ran and reported a failure
    #[error("Decoder exited with {status}: {stderr}")]
    Engine { status: String, stderr: String },

    /// Decoder output is not an attribute tree
    #[error("Unexpected decoder output: {0}")]
    Shape(String),

    /// A required R package is missing
    #[error("Package '{package}' is not available: {detail}")]
    Unavailable { package: String, detail: String },

    /// The engine was shut down
    #[error("Decoder engine has been shut down")]
    EngineClosed,
}

/// Turns a staged SPC file into its attribute tree
pub trait SpcDecoder: Send + Sync {
    fn decode(&self, path: &Path, options: DecodeOptions) -> Result<AttributeList, DecodeError>;
}

impl<T: SpcDecoder + ?Sized> SpcDecoder for std::sync::Arc<T> {
    fn decode(&self, path: &Path, options: DecodeOptions) -> Result<AttributeList, DecodeError> {
        (**self).decode(path, options)
    }
}
