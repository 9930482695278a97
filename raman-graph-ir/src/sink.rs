//! GraphSink trait for event-driven graph construction
//!
//! Producers call `term_iri()`, `term_literal()` and friends to obtain term
//! handles, then `emit_triple()` once per statement. The sink decides what a
//! statement becomes:
//! - `GraphCollectorSink`: collects statements into a `Graph`
//! - `NTriplesSink`: writes each statement as one N-Triples line
//!
//! Sinks are append-only. Nothing is ever retracted once emitted.

use crate::{Datatype, Graph, Term, Triple};
use std::collections::HashMap;

/// Opaque term identifier, valid within a single sink session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(pub(crate) u32);

/// Event-driven interface for RDF graph construction
///
/// # Example
///
/// ```
/// use raman_graph_ir::{Datatype, GraphCollectorSink, GraphSink};
///
/// let mut sink = GraphCollectorSink::new();
/// let file = sink.term_iri("http://example.org/resource/a.spc");
/// let name = sink.term_iri("http://modalmi.u-psud.fr/2015/invivo#filename");
/// let value = sink.term_literal("a.spc", Datatype::xsd_string());
/// sink.emit_triple(file, name, value);
///
/// assert_eq!(sink.finish().len(), 1);
/// ```
pub trait GraphSink {
    /// Called when the producer resolves identifiers against a base IRI
    fn on_base(&mut self, base_iri: &str);

    /// Called when a prefix is declared
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Create an IRI term (fully expanded) and return its ID
    fn term_iri(&mut self, iri: &str) -> TermId;

    /// Create a blank node term
    ///
    /// `Some(label)` returns the same node for the same label; `None` always
    /// allocates a fresh node.
    fn term_blank(&mut self, label: Option<&str>) -> TermId;

    /// Create a literal term from its lexical form
    fn term_literal(&mut self, value: &str, datatype: Datatype) -> TermId;

    /// Handle one statement built from previously created term IDs
    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId);
}

/// Term table shared by the bundled sinks
#[derive(Debug, Default)]
pub(crate) struct TermTable {
    terms: Vec<Term>,
    blank_counter: u32,
    blank_labels: HashMap<String, TermId>,
}

impl TermTable {
    pub(crate) fn get(&self, id: TermId) -> &Term {
        &self.terms[id.0 as usize]
    }

    pub(crate) fn add(&mut self, term: Term) -> TermId {
        let id = TermId(self.terms.len() as u32);
        self.terms.push(term);
        id
    }

    pub(crate) fn blank(&mut self, label: Option<&str>) -> TermId {
        match label {
            Some(l) => {
                if let Some(&id) = self.blank_labels.get(l) {
                    return id;
                }
                let id = self.add(Term::blank(l));
                self.blank_labels.insert(l.to_string(), id);
                id
            }
            None => {
                self.blank_counter += 1;
                let label = format!("b{}", self.blank_counter);
                self.add(Term::blank(label))
            }
        }
    }

    pub(crate) fn triple(&self, s: TermId, p: TermId, o: TermId) -> Triple {
        Triple::new(self.get(s).clone(), self.get(p).clone(), self.get(o).clone())
    }
}

/// A sink that collects triples into a Graph
#[derive(Debug, Default)]
pub struct GraphCollectorSink {
    graph: Graph,
    terms: TermTable,
}

impl GraphCollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish building and return the graph
    pub fn finish(self) -> Graph {
        self.graph
    }

    /// Get the current graph (non-consuming)
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Resolve a term ID handed out by this sink
    pub fn term(&self, id: TermId) -> &Term {
        self.terms.get(id)
    }
}

impl GraphSink for GraphCollectorSink {
    fn on_base(&mut self, base_iri: &str) {
        self.graph.set_base(base_iri);
    }

    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.graph.add_prefix(prefix, namespace_iri);
    }

    fn term_iri(&mut self, iri: &str) -> TermId {
        self.terms.add(Term::iri(iri))
    }

    fn term_blank(&mut self, label: Option<&str>) -> TermId {
        self.terms.blank(label)
    }

    fn term_literal(&mut self, value: &str, datatype: Datatype) -> TermId {
        self.terms.add(Term::typed(value, datatype))
    }

    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId) {
        let triple = self.terms.triple(subject, predicate, object);
        self.graph.add(triple);
    }
}
