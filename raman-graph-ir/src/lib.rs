//! RDF graph intermediate representation for the SPC importer
//!
//! Producers (the SPC parser) emit statements into a [`GraphSink`] without
//! knowing where they end up; consumers pick a sink.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - IRIs are stored fully expanded.
//!
//! 2. **Explicit datatypes** - Every literal has a datatype; plain literals
//!    are `xsd:string`.
//!
//! 3. **Append-only** - Sinks receive statements once and never retract them.
//!
//! 4. **Deterministic output** - Call [`Graph::sort`] for SPO ordering.
//!
//! # Example
//!
//! ```
//! use raman_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("http://example.org/resource/a.spc"),
//!     Term::iri("http://www.w3.org/ns/dcat#mediaType"),
//!     Term::string("application/x-pkcs7-certificates"),
//! );
//! graph.sort();
//! ```

pub mod datatype;
mod graph;
mod ntriples;
mod sink;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use ntriples::NTriplesSink;
pub use sink::{GraphCollectorSink, GraphSink, TermId};
pub use term::{escape_literal, BlankId, Term};
pub use triple::Triple;
