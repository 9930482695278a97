use crate::error::{CliError, CliResult};
use colored::Colorize;
use raman_graph_ir::NTriplesSink;
use raman_spc::{BaseIdentifier, ParseReport, SpcConfig, SpcParser};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn run(
    file: &Path,
    base: &str,
    output: Option<&Path>,
    config: SpcConfig,
    quiet: bool,
) -> CliResult<()> {
    // A bad base must fail before the output file is touched.
    BaseIdentifier::split(base, &config.identifier)?;

    let input = File::open(file)
        .map_err(|e| CliError::Input(format!("cannot open {}: {e}", file.display())))?;
    let parser = SpcParser::from_config(config);

    let (written, report) = match output {
        Some(path) => {
            // Statements go to a sibling temp file that replaces `path` only
            // once the conversion has succeeded.
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut staged = NamedTempFile::new_in(dir)
                .map_err(|e| CliError::Input(format!("cannot create {}: {e}", path.display())))?;
            let result = write_statements(&parser, input, base, staged.as_file_mut())?;
            staged.persist(path).map_err(|e| {
                CliError::Input(format!("cannot write {}: {}", path.display(), e.error))
            })?;
            result
        }
        None => write_statements(&parser, input, base, io::stdout().lock())?,
    };

    if !quiet {
        eprintln!(
            "{} {} statements for {}",
            "wrote".green().bold(),
            written,
            report.file_name
        );
        if !report.tree_emitted {
            eprintln!(
                "  {} attribute tree could not be decoded; only file-level statements were written",
                "warning:".yellow().bold()
            );
        }
        for skipped in &report.skipped {
            eprintln!(
                "  {} skipped {}: {}",
                "warning:".yellow().bold(),
                skipped.key,
                skipped.error
            );
        }
    }
    Ok(())
}

fn write_statements<W: Write>(
    parser: &SpcParser,
    input: File,
    base: &str,
    writer: W,
) -> CliResult<(usize, ParseReport)> {
    let mut sink = NTriplesSink::new(BufWriter::new(writer));
    let report = parser.parse(BufReader::new(input), base, &mut sink)?;
    let written = sink.written();
    sink.finish()?.flush()?;
    Ok((written, report))
}
