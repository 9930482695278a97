//! SPC Raman spectrometer importer
//!
//! Reads one SPC acquisition file, decodes its attribute tree with an
//! [`SpcDecoder`] and emits an RDF description of it into a
//! `raman_graph_ir::GraphSink`: the file's classes and media type, every
//! decoded header/log value, and the metadata encoded in the file name.
//!
//! # Example
//!
//! ```no_run
//! use raman_graph_ir::GraphCollectorSink;
//! use raman_spc::{SpcConfig, SpcParser};
//! use std::fs::File;
//!
//! let parser = SpcParser::from_config(SpcConfig::default());
//! let input = File::open("201502203V12_J1_T_m3.spc").unwrap();
//!
//! let mut sink = GraphCollectorSink::new();
//! let report = parser
//!     .parse(input, "http://host/resource/201502203V12_J1_T_m3.spc", &mut sink)
//!     .unwrap();
//! assert!(report.tree_emitted);
//! ```

pub mod acquisition;
pub mod attribute;
pub mod builder;
pub mod config;
pub mod decoder;
pub mod error;
pub mod filename;
pub mod format;
pub mod identifier;
pub mod lexical;
pub mod parser;
pub mod staging;
pub mod walk;

pub use attribute::{AttributeList, AttributeNode, AttributeValue};
pub use builder::{
    builder_for, CompactBuilder, Property, PropertyValue, StatementBuilder, VerboseBuilder,
};
pub use config::{load_config, BuilderKind, SpcConfig};
pub use decoder::{DecodeError, DecodeOptions, RscriptEngine, SpcDecoder};
pub use error::{Result, SpcError};
pub use format::{FormatDescriptor, SpcParserFactory, SPC_FORMAT};
pub use identifier::BaseIdentifier;
pub use parser::{ParseReport, SpcParser};
pub use walk::{SkippedProperty, TreeWalker, WalkSummary};
