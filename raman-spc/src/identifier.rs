//! Base identifier handling
//!
//! The host hands the importer an identifier such as
//! `http://host/marmotta/resource/201502203V12_J1_T_m3.spc`. Everything up to
//! the configured marker plus a fixed offset is the namespace prefix; the rest
//! is the file name. The marker/offset pair matches the identifiers existing
//! graphs use, which is why it is kept instead of a URL parse.

use crate::config::IdentifierConfig;
use crate::error::{Result, SpcError};

/// A base identifier split into namespace prefix and file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseIdentifier {
    prefix: String,
    file_name: String,
}

impl BaseIdentifier {
    /// Split `base` at `marker` + `offset`.
    ///
    /// Fails when the identifier is empty, the marker is missing, the split
    /// point falls outside the identifier, or the file name is empty or
    /// contains a path separator.
    pub fn split(base: &str, config: &IdentifierConfig) -> Result<Self> {
        if base.trim().is_empty() {
            return Err(SpcError::invalid_input("base identifier is empty"));
        }

        let start = base.find(&config.marker).ok_or_else(|| {
            SpcError::invalid_input(format!(
                "base identifier '{base}' does not contain marker '{}'",
                config.marker
            ))
        })?;

        let index = start + config.offset;
        if index > base.len() || !base.is_char_boundary(index) {
            return Err(SpcError::invalid_input(format!(
                "base identifier '{base}' is too short for marker offset {}",
                config.offset
            )));
        }

        let (prefix, file_name) = base.split_at(index);
        if file_name.is_empty() {
            return Err(SpcError::invalid_input(format!(
                "base identifier '{base}' has no file name"
            )));
        }
        if file_name.contains(['/', '\\']) {
            return Err(SpcError::invalid_input(format!(
                "file name '{file_name}' contains a path separator"
            )));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// Namespace prefix relative names are resolved against
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Resolve a local name against the prefix
    pub fn resolve(&self, local: &str) -> String {
        format!("{}{}", self.prefix, local)
    }

    /// IRI of the graph root: the file name resolved against the prefix
    pub fn root_iri(&self) -> String {
        self.resolve(&self.file_name)
    }
}
