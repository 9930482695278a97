//! RDF datatype representation
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! A literal created without a datatype is an `xsd:string`, which is what a
//! plain literal means in RDF 1.1.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use raman_vocab::xsd::{
    DATE_TIME as XSD_DATE_TIME, DOUBLE as XSD_DOUBLE, STRING as XSD_STRING,
};

/// RDF literal datatype, stored as its expanded IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain literals
    pub fn xsd_string() -> Self {
        Self::from_iri(XSD_STRING)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(XSD_DOUBLE)
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Self::from_iri(XSD_DATE_TIME)
    }

    /// Resolve an optional datatype, falling back to xsd:string
    pub fn or_string(datatype: Option<&Datatype>) -> Self {
        datatype.cloned().unwrap_or_else(Self::xsd_string)
    }

    /// Get the IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == XSD_STRING
    }

    pub fn is_xsd_double(&self) -> bool {
        self.as_iri() == XSD_DOUBLE
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_iri())
    }
}
