//! Importer configuration
//!
//! Loaded from TOML (or JSON, by extension). Every field has a default, so an
//! empty file, or no file at all, gives the behaviour existing graphs were
//! produced with.
//!
//! ```toml
//! builder = "verbose"
//!
//! [identifier]
//! marker = "resource"
//! offset = 9
//!
//! [staging]
//! dir = "/var/tmp/raman"
//!
//! [engine]
//! program = "Rscript"
//! ```

use crate::error::{Result, SpcError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default marker locating the file name inside a base identifier
pub const DEFAULT_MARKER: &str = "resource";

/// Default distance from the marker start to the file name (`"resource/"`)
pub const DEFAULT_MARKER_OFFSET: usize = 9;

/// Default prefix of keys whose value is an acquisition mini-record
pub const DEFAULT_ACQUISITION_MARKER: &str = "acq..time..s.";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpcConfig {
    /// Which statement builder the parser uses
    pub builder: BuilderKind,
    pub identifier: IdentifierConfig,
    pub walk: WalkConfig,
    pub staging: StagingConfig,
    pub engine: EngineConfig,
}

/// Statement builder selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderKind {
    /// Properties written directly on the root
    #[default]
    Compact,
    /// One intermediate property node per value
    Verbose,
}

impl std::str::FromStr for BuilderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(BuilderKind::Compact),
            "verbose" => Ok(BuilderKind::Verbose),
            other => Err(format!(
                "unknown builder '{other}' (expected 'compact' or 'verbose')"
            )),
        }
    }
}

/// `[identifier]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    pub marker: String,
    pub offset: usize,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            offset: DEFAULT_MARKER_OFFSET,
        }
    }
}

/// `[walk]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Keys starting with this marker hold `name=value` records
    pub acquisition_marker: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            acquisition_marker: DEFAULT_ACQUISITION_MARKER.to_string(),
        }
    }
}

/// `[staging]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Directory for staged copies; the OS temp directory when unset
    pub dir: Option<PathBuf>,
}

impl StagingConfig {
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// `[engine]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// R front end to launch
    pub program: PathBuf,
    /// Arguments placed before the script
    pub args: Vec<String>,
    /// Package that must load for the engine to start
    pub package: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("Rscript"),
            args: vec!["--vanilla".to_string()],
            package: "hyperSpec".to_string(),
        }
    }
}

/// Load a config file. Detects format by extension: `.json` → JSON,
/// everything else → TOML. An empty file yields the defaults.
pub fn load_config(path: &Path) -> Result<SpcConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SpcError::ConfigIo {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Ok(SpcConfig::default());
    }

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|detail| SpcError::Config {
        path: path.to_path_buf(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SpcConfig::default();
        assert_eq!(config.builder, BuilderKind::Compact);
        assert_eq!(config.identifier.marker, "resource");
        assert_eq!(config.identifier.offset, 9);
        assert_eq!(config.walk.acquisition_marker, "acq..time..s.");
        assert_eq!(config.engine.program, PathBuf::from("Rscript"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SpcConfig = toml::from_str(
            r#"
            builder = "verbose"

            [staging]
            dir = "/var/tmp/raman"
            "#,
        )
        .unwrap();
        assert_eq!(config.builder, BuilderKind::Verbose);
        assert_eq!(config.staging.dir, Some(PathBuf::from("/var/tmp/raman")));
        assert_eq!(config.identifier, IdentifierConfig::default());
    }

    #[test]
    fn test_load_config_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("spc.toml");
        std::fs::write(&toml_path, "[identifier]\nmarker = \"files\"\noffset = 6\n").unwrap();
        let config = load_config(&toml_path).unwrap();
        assert_eq!(config.identifier.marker, "files");
        assert_eq!(config.identifier.offset, 6);

        let json_path = dir.path().join("spc.json");
        std::fs::write(&json_path, r#"{"engine": {"program": "/opt/R/bin/Rscript"}}"#).unwrap();
        let config = load_config(&json_path).unwrap();
        assert_eq!(config.engine.program, PathBuf::from("/opt/R/bin/Rscript"));
        assert_eq!(config.engine.package, "hyperSpec");

        let empty = dir.path().join("empty.toml");
        std::fs::write(&empty, "   \n").unwrap();
        assert_eq!(load_config(&empty).unwrap(), SpcConfig::default());
    }

    #[test]
    fn test_load_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            load_config(&missing),
            Err(SpcError::ConfigIo { .. })
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "builder = \"sideways\"\n").unwrap();
        assert!(matches!(load_config(&bad), Err(SpcError::Config { .. })));
    }

    #[test]
    fn test_builder_kind_from_str() {
        assert_eq!("Verbose".parse::<BuilderKind>(), Ok(BuilderKind::Verbose));
        assert!("other".parse::<BuilderKind>().is_err());
    }
}
