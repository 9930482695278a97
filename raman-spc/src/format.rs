//! Format descriptor and parser factory
//!
//! Hosts that pick an importer by MIME type or file extension look the
//! format up here and ask the factory for a parser.

use crate::config::{BuilderKind, SpcConfig};
use crate::decoder::{RscriptEngine, SpcDecoder};
use crate::parser::SpcParser;
use raman_vocab::media_type;
use std::path::Path;
use std::sync::Arc;

/// Static description of an importable format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub name: &'static str,
    /// First entry is the canonical type
    pub mime_types: &'static [&'static str],
    pub extensions: &'static [&'static str],
    /// Binary formats are never read line by line
    pub binary: bool,
}

impl FormatDescriptor {
    pub fn default_mime_type(&self) -> &'static str {
        self.mime_types[0]
    }

    /// Case-insensitive match ignoring parameters (`; charset=...`)
    pub fn matches_mime(&self, mime: &str) -> bool {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        self.mime_types
            .iter()
            .any(|m| m.eq_ignore_ascii_case(essence))
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// The SPC Raman spectrometer format
pub const SPC_FORMAT: FormatDescriptor = FormatDescriptor {
    name: "SPC",
    mime_types: &[media_type::SPC],
    extensions: &["spc"],
    binary: true,
};

/// Builds [`SpcParser`]s sharing one decoder
#[derive(Clone)]
pub struct SpcParserFactory {
    config: SpcConfig,
    decoder: Arc<dyn SpcDecoder>,
}

impl std::fmt::Debug for SpcParserFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpcParserFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SpcParserFactory {
    pub fn new(config: SpcConfig, decoder: Arc<dyn SpcDecoder>) -> Self {
        Self { config, decoder }
    }

    /// Factory backed by one shared [`RscriptEngine`]
    pub fn from_config(config: SpcConfig) -> Self {
        let engine = Arc::new(RscriptEngine::new(config.engine.clone()));
        Self::new(config, engine)
    }

    pub fn format(&self) -> &'static FormatDescriptor {
        &SPC_FORMAT
    }

    /// A parser using the configured builder (compact unless overridden)
    pub fn parser(&self) -> SpcParser {
        SpcParser::with_decoder(self.config.clone(), Arc::clone(&self.decoder))
    }

    /// A parser using `kind` regardless of configuration
    pub fn parser_with(&self, kind: BuilderKind) -> SpcParser {
        let mut config = self.config.clone();
        config.builder = kind;
        SpcParser::with_decoder(config, Arc::clone(&self.decoder))
    }
}
