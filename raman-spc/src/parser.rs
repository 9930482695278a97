//! SPC import entry point

use crate::builder::{builder_for, Property, PropertyValue, StatementBuilder};
use crate::config::SpcConfig;
use crate::decoder::{DecodeOptions, RscriptEngine, SpcDecoder};
use crate::error::{Result, SpcError};
use crate::filename::FilenameExtractor;
use crate::identifier::BaseIdentifier;
use crate::staging::StagedFile;
use crate::walk::{SkippedProperty, TreeWalker};
use raman_graph_ir::{Datatype, GraphSink, TermId};
use raman_vocab::{invivo, media_type, rdf};
use std::io::{BufRead, Read};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const MIME_KEY: &str = "mimeType";
const MIME_DESCRIPTION: &str = "Mime Type";
const FILENAME_KEY: &str = "filename";
const FILENAME_DESCRIPTION: &str = "Raman SPC's filename";

/// Outcome of one [`SpcParser::parse`] call
#[derive(Debug)]
pub struct ParseReport {
    /// IRI of the graph root
    pub root: String,
    pub file_name: String,
    /// False when the decoder failed and only file-level statements exist
    pub tree_emitted: bool,
    /// Top-level attributes the decoder returned
    pub attributes: usize,
    /// Properties built from the attribute tree
    pub properties: usize,
    /// Properties taken from the file name
    pub filename_facts: usize,
    /// Properties dropped because their embedded data was malformed
    pub skipped: Vec<SkippedProperty>,
}

/// Converts SPC Raman acquisitions into graph statements
///
/// The parser owns no per-file state; one instance can serve any number of
/// sequential parses.
pub struct SpcParser {
    config: SpcConfig,
    decoder: Arc<dyn SpcDecoder>,
    builder: Box<dyn StatementBuilder>,
}

impl std::fmt::Debug for SpcParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpcParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SpcParser {
    pub fn new(
        config: SpcConfig,
        decoder: Arc<dyn SpcDecoder>,
        builder: Box<dyn StatementBuilder>,
    ) -> Self {
        Self {
            config,
            decoder,
            builder,
        }
    }

    /// Parser with the builder named in `config`
    pub fn with_decoder(config: SpcConfig, decoder: Arc<dyn SpcDecoder>) -> Self {
        let builder = builder_for(config.builder);
        Self::new(config, decoder, builder)
    }

    /// Parser backed by an [`RscriptEngine`] built from `config.engine`
    pub fn from_config(config: SpcConfig) -> Self {
        let engine = Arc::new(RscriptEngine::new(config.engine.clone()));
        Self::with_decoder(config, engine)
    }

    pub fn config(&self) -> &SpcConfig {
        &self.config
    }

    /// Parse one SPC file read from `input` into `sink`
    ///
    /// `base` names the file, e.g. `http://host/resource/201502203V12_J1_T_m3.spc`.
    /// Decoder failures are logged and leave a graph with only the
    /// file-level statements; see [`ParseReport::tree_emitted`].
    ///
    /// # Errors
    ///
    /// [`SpcError::InvalidInput`] for an unusable `base` (nothing is read or
    /// emitted) and [`SpcError::StagingIo`] when the input cannot be copied.
    pub fn parse(
        &self,
        input: impl Read,
        base: &str,
        sink: &mut dyn GraphSink,
    ) -> Result<ParseReport> {
        let identifier = BaseIdentifier::split(base, &self.config.identifier)?;
        let file_name = identifier.file_name();
        info!(file = file_name, "Parsing SPC file");

        let decoded = {
            let staged = StagedFile::stage(
                input,
                &self.config.staging.resolved_dir(),
                file_name,
            )?;
            if staged.is_empty() {
                warn!(file = file_name, "SPC input is empty");
            }
            self.decoder.decode(staged.path(), DecodeOptions::default())
        };

        sink.on_base(identifier.prefix());
        let root = sink.term_iri(&identifier.root_iri());
        self.emit_file_statements(sink, root, file_name);

        let mut report = ParseReport {
            root: identifier.root_iri(),
            file_name: file_name.to_string(),
            tree_emitted: false,
            attributes: 0,
            properties: 0,
            filename_facts: 0,
            skipped: Vec::new(),
        };

        match decoded {
            Ok(tree) => {
                debug!(
                    attributes = tree.len(),
                    leaves = tree.leaf_count(),
                    "Decoded attribute tree"
                );
                let summary = TreeWalker::new(
                    self.builder.as_ref(),
                    &mut *sink,
                    root,
                    &self.config.walk.acquisition_marker,
                )
                .run(&tree);

                report.tree_emitted = true;
                report.attributes = tree.len();
                report.properties = summary.emitted;
                report.skipped = summary.skipped;
            }
            Err(e) => {
                let e = SpcError::from(e);
                error!(file = file_name, error = %e, "Failed to decode SPC file");
            }
        }

        report.filename_facts =
            FilenameExtractor.emit(self.builder.as_ref(), sink, root, file_name);

        info!(
            file = file_name,
            tree = report.tree_emitted,
            properties = report.properties,
            skipped = report.skipped.len(),
            "Parsed SPC file"
        );
        Ok(report)
    }

    /// Line-oriented entry point; SPC is binary so nothing is extracted
    pub fn parse_text(&self, _reader: impl BufRead, base: &str) -> Result<()> {
        if base.trim().is_empty() {
            return Err(SpcError::invalid_input("base identifier is empty"));
        }
        debug!(base, "Text input is not supported for SPC; nothing extracted");
        Ok(())
    }

    fn emit_file_statements(&self, sink: &mut dyn GraphSink, root: TermId, file_name: &str) {
        let rdf_type = sink.term_iri(rdf::TYPE);
        for class in invivo::ROOT_CLASSES {
            let class = sink.term_iri(class);
            sink.emit_triple(root, rdf_type, class);
        }

        self.builder
            .emit_mime_type(sink, root, MIME_KEY, media_type::SPC, MIME_DESCRIPTION);

        let property = Property::new(
            FILENAME_KEY,
            PropertyValue::text(file_name),
            FILENAME_DESCRIPTION,
            Some(Datatype::xsd_string()),
        );
        self.builder.emit_property(sink, root, &property);
    }
}
