//! Streaming N-Triples sink
//!
//! Writes every statement as soon as it is emitted, so a converted file never
//! has to be held in memory. `GraphSink` methods cannot fail, so the first I/O
//! error is remembered, later writes are dropped, and `finish()` reports it.

use crate::sink::TermTable;
use crate::{Datatype, GraphSink, Term, TermId};
use std::io::{self, Write};

/// A `GraphSink` that writes N-Triples to any `Write`
#[derive(Debug)]
pub struct NTriplesSink<W: Write> {
    writer: W,
    terms: TermTable,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> NTriplesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            terms: TermTable::default(),
            written: 0,
            error: None,
        }
    }

    /// Number of statements written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the writer, or the first I/O error encountered
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> GraphSink for NTriplesSink<W> {
    // N-Triples has no base or prefix directives.
    fn on_base(&mut self, _base_iri: &str) {}

    fn on_prefix(&mut self, _prefix: &str, _namespace_iri: &str) {}

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
        if self.error.is_some() {
            return;
        }
        let line = self.terms.triple(subject, predicate, object);
        match writeln!(self.writer, "{line}") {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}
