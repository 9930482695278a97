//! Effective importer settings for one invocation.
//!
//! Precedence: command-line flags and their environment variables, then the
//! config file, then built-in defaults.

use crate::cli::{BuilderArg, EngineArgs};
use crate::error::{CliError, CliResult};
use raman_spc::config::IdentifierConfig;
use raman_spc::{load_config, BaseIdentifier, SpcConfig};
use std::path::Path;

/// Scheme of the base built when no `--base` is given
pub const DEFAULT_BASE_SCHEME: &str = "urn:raman:";

/// Load the config file (if any) and apply command-line overrides.
pub fn resolve(
    config_path: Option<&Path>,
    engine: &EngineArgs,
    builder: Option<BuilderArg>,
) -> CliResult<SpcConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => SpcConfig::default(),
    };

    if let Some(dir) = &engine.staging_dir {
        config.staging.dir = Some(dir.clone());
    }
    if let Some(program) = &engine.rscript {
        config.engine.program = program.clone();
    }
    if let Some(builder) = builder {
        config.builder = builder.into();
    }

    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

/// Base identifier for `file`: the explicit one, or one built from the
/// configured marker so that it splits back to the file name.
pub fn base_identifier(
    file: &Path,
    explicit: Option<&str>,
    identifier: &IdentifierConfig,
) -> CliResult<String> {
    if let Some(base) = explicit {
        return Ok(base.to_string());
    }
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::Usage(format!("cannot name {}: pass --base", file.display())))?;

    let unfit = || {
        CliError::Usage(format!(
            "identifier marker '{}' with offset {} cannot name {name}: pass --base",
            identifier.marker, identifier.offset
        ))
    };
    let gap = identifier
        .offset
        .checked_sub(identifier.marker.len())
        .filter(|gap| *gap > 0)
        .ok_or_else(unfit)?;
    let base = format!(
        "{DEFAULT_BASE_SCHEME}{}{}{name}",
        identifier.marker,
        "/".repeat(gap)
    );

    match BaseIdentifier::split(&base, identifier) {
        Ok(split) if split.file_name() == name => Ok(base),
        _ => Err(unfit()),
    }
}
