use super::{Property, PropertyValue, StatementBuilder};
use crate::lexical::format_double;
use raman_graph_ir::{Datatype, GraphSink, TermId};
use raman_vocab::{dcat, invivo, rdf};

/// Wraps every property in an anonymous node
///
/// ```text
/// _:b rdf:type           invivo:{key}
/// _:b invivo:name        "{key}"
/// _:b invivo:value       "{value}"      (or invivo:min / invivo:max)
/// _:b invivo:description "{description}"
/// root invivo:{key}      _:b
/// ```
///
/// Quotes are stripped from the key; the predicate uses the lower-cased key
/// while `invivo:name` keeps the original casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseBuilder;

impl VerboseBuilder {
    fn literal(
        sink: &mut dyn GraphSink,
        subject: TermId,
        predicate: &str,
        value: &str,
        datatype: Datatype,
    ) {
        let p = sink.term_iri(predicate);
        let o = sink.term_literal(value, datatype);
        sink.emit_triple(subject, p, o);
    }
}

impl StatementBuilder for VerboseBuilder {
    fn emit_property(&self, sink: &mut dyn GraphSink, root: TermId, property: &Property<'_>) {
        let key = property.key.replace('"', "");
        let node = sink.term_blank(None);
        let node_key = sink.term_iri(&invivo::iri(&key.to_lowercase()));

        let rdf_type = sink.term_iri(rdf::TYPE);
        sink.emit_triple(node, rdf_type, node_key);

        Self::literal(sink, node, invivo::NAME, &key, Datatype::xsd_string());

        let literal_type = property.literal_type();
        match &property.value {
            PropertyValue::Range { min, max } => {
                Self::literal(sink, node, invivo::MIN, &format_double(*min), literal_type.clone());
                Self::literal(sink, node, invivo::MAX, &format_double(*max), literal_type);
            }
            PropertyValue::Text(value) => {
                Self::literal(sink, node, invivo::VALUE, value, literal_type);
            }
        }

        Self::literal(
            sink,
            node,
            invivo::DESCRIPTION,
            property.description,
            Datatype::xsd_string(),
        );

        sink.emit_triple(root, node_key, node);
    }

    fn emit_mime_type(
        &self,
        sink: &mut dyn GraphSink,
        root: TermId,
        key: &str,
        value: &str,
        description: &str,
    ) {
        let node = sink.term_blank(None);
        let node_key = sink.term_iri(&invivo::iri(key));

        Self::literal(sink, node, invivo::NAME, key, Datatype::xsd_string());
        Self::literal(sink, node, dcat::MEDIA_TYPE, value, Datatype::xsd_string());
        Self::literal(sink, node, invivo::DESCRIPTION, description, Datatype::xsd_string());

        sink.emit_triple(root, node_key, node);
    }
}
