//! Statement builders
//!
//! The walk decides *what* a leaf means; a [`StatementBuilder`] decides how
//! that meaning is spelled as triples. Both builders carry the same
//! information and differ only in shape:
//!
//! - [`CompactBuilder`]: one predicate per property directly on the root
//!   (`root invivo:xMin "400.0"`).
//! - [`VerboseBuilder`]: one anonymous node per property carrying
//!   `name`/`value`/`description`, linked from the root.

mod compact;
mod verbose;

pub use compact::CompactBuilder;
pub use verbose::VerboseBuilder;

use crate::config::BuilderKind;
use crate::lexical::format_double;
use raman_graph_ir::{Datatype, GraphSink, TermId};

/// Value of a property as classified by the walk
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single lexical value
    Text(String),
    /// Envelope of a numeric array
    Range { min: f64, max: f64 },
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    pub fn double(value: f64) -> Self {
        PropertyValue::Text(format_double(value))
    }
}

/// Everything a builder needs to emit one property
#[derive(Debug, Clone, PartialEq)]
pub struct Property<'a> {
    pub key: &'a str,
    pub value: PropertyValue,
    pub description: &'a str,
    /// Literal datatype; `None` emits a plain (xsd:string) literal
    pub datatype: Option<Datatype>,
}

impl<'a> Property<'a> {
    pub fn new(
        key: &'a str,
        value: PropertyValue,
        description: &'a str,
        datatype: Option<Datatype>,
    ) -> Self {
        Self {
            key,
            value,
            description,
            datatype,
        }
    }

    pub(crate) fn literal_type(&self) -> Datatype {
        Datatype::or_string(self.datatype.as_ref())
    }
}

/// Turns classified properties into statements on a sink
pub trait StatementBuilder: Send + Sync {
    /// Emit one property of `root`
    fn emit_property(&self, sink: &mut dyn GraphSink, root: TermId, property: &Property<'_>);

    /// Emit the media type of `root`
    fn emit_mime_type(
        &self,
        sink: &mut dyn GraphSink,
        root: TermId,
        key: &str,
        value: &str,
        description: &str,
    );
}

/// Builder for a configured [`BuilderKind`]
pub fn builder_for(kind: BuilderKind) -> Box<dyn StatementBuilder> {
    match kind {
        BuilderKind::Compact => Box::new(CompactBuilder),
        BuilderKind::Verbose => Box::new(VerboseBuilder),
    }
}
