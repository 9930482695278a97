use super::{Property, PropertyValue, StatementBuilder};
use crate::lexical::format_double;
use raman_graph_ir::{Datatype, GraphSink, TermId};
use raman_vocab::{dcat, invivo};

/// Writes every property as a direct predicate of the root
///
/// Keys are lower-cased. A range becomes two statements, `{key}Min` and
/// `{key}Max`, typed `xsd:double`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactBuilder;

impl StatementBuilder for CompactBuilder {
    fn emit_property(&self, sink: &mut dyn GraphSink, root: TermId, property: &Property<'_>) {
        let key = property.key.to_lowercase();

        match &property.value {
            PropertyValue::Range { min, max } => {
                for (suffix, bound) in [("Min", *min), ("Max", *max)] {
                    let predicate = sink.term_iri(&invivo::iri(&format!("{key}{suffix}")));
                    let object = sink.term_literal(&format_double(bound), Datatype::xsd_double());
                    sink.emit_triple(root, predicate, object);
                }
            }
            PropertyValue::Text(value) => {
                let predicate = sink.term_iri(&invivo::iri(&key));
                let object = sink.term_literal(value, property.literal_type());
                sink.emit_triple(root, predicate, object);
            }
        }
    }

    fn emit_mime_type(
        &self,
        sink: &mut dyn GraphSink,
        root: TermId,
        _key: &str,
        value: &str,
        _description: &str,
    ) {
        let predicate = sink.term_iri(dcat::MEDIA_TYPE);
        let object = sink.term_literal(value, Datatype::xsd_string());
        sink.emit_triple(root, predicate, object);
    }
}
