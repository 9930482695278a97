use crate::error::{CliError, CliResult};
use raman_spc::staging::StagedFile;
use raman_spc::{DecodeOptions, RscriptEngine, SpcConfig, SpcDecoder};
use std::fs::File;
use std::path::Path;

pub fn run(file: &Path, config: &SpcConfig) -> CliResult<()> {
    let input = File::open(file)
        .map_err(|e| CliError::Input(format!("cannot open {}: {e}", file.display())))?;
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::Usage(format!("not a file: {}", file.display())))?;

    let staged = StagedFile::stage(input, &config.staging.resolved_dir(), name)?;
    let engine = RscriptEngine::new(config.engine.clone());
    let tree = engine.decode(staged.path(), DecodeOptions::default())?;
    engine.shutdown();

    println!("{}", tree.to_json_pretty()?);
    Ok(())
}
