//! RDF graph - a collection of triples
//!
//! `Graph` keeps triples in emission order (bag semantics). Call `sort()` for
//! a deterministic order and `dedupe()` for set semantics.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples
///
/// # Example
///
/// ```
/// use raman_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
/// graph.add_triple(
///     Term::iri("http://example.org/spectrum.spc"),
///     Term::iri("http://modalmi.u-psud.fr/2015/invivo#filename"),
///     Term::string("spectrum.spc"),
/// );
/// assert_eq!(graph.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    /// Base IRI announced by the producer
    pub base: Option<String>,
    /// Prefix mappings (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Sort triples by SPO for deterministic output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate triples (sorts first)
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// All objects of `(subject, predicate)`, in emission order
    ///
    /// The returned terms borrow from the graph only, so the query terms may be
    /// temporaries.
    pub fn objects<'g, 'q>(
        &'g self,
        subject: &'q Term,
        predicate: &'q str,
    ) -> impl Iterator<Item = &'g Term> + 'q
    where
        'g: 'q,
    {
        self.triples
            .iter()
            .filter(move |t| &t.s == subject && t.p.as_iri() == Some(predicate))
            .map(|t| &t.o)
    }

    /// The single object of `(subject, predicate)`, if there is exactly one
    pub fn object(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        let mut matches = self
            .triples
            .iter()
            .filter(|t| &t.s == subject && t.p.as_iri() == Some(predicate));
        let first = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(&first.o),
        }
    }

    /// Triples whose subject is `subject`
    pub fn about<'g, 'q>(&'g self, subject: &'q Term) -> impl Iterator<Item = &'g Triple> + 'q
    where
        'g: 'q,
    {
        self.triples.iter().filter(move |t| &t.s == subject)
    }

    /// Consume the graph, returning the triples in emission order
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
