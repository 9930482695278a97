//! RDF vocabulary constants for the Raman SPC importer
//!
//! Every IRI the importer writes lives here so that the builders never spell a
//! namespace by hand.
//!
//! # Organization
//!
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD datatypes used for literals (http://www.w3.org/2001/XMLSchema#)
//! - `dcat` - DCAT terms (http://www.w3.org/ns/dcat#)
//! - `invivo` - the in-vivo Raman acquisition ontology
//! - `media_type` - fixed media type values

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// XSD datatype IRIs
pub mod xsd {
    /// XSD namespace
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// DCAT vocabulary constants
pub mod dcat {
    /// DCAT namespace
    pub const NS: &str = "http://www.w3.org/ns/dcat#";

    /// dcat:mediaType IRI
    pub const MEDIA_TYPE: &str = "http://www.w3.org/ns/dcat#mediaType";
}

/// In-vivo Raman acquisition ontology
///
/// Classes are capitalised; property IRIs are built from lower-cased
/// attribute keys with [`iri`].
pub mod invivo {
    /// Ontology namespace
    pub const NS: &str = "http://modalmi.u-psud.fr/2015/invivo#";

    // Classes
    pub const EXPERIMENTAL_DATA: &str = "http://modalmi.u-psud.fr/2015/invivo#ExperimentalData";
    pub const FILE_RAMAN_SPECTROMETER: &str =
        "http://modalmi.u-psud.fr/2015/invivo#FileRamanSpectrometer";
    pub const ACQUISITION: &str = "http://modalmi.u-psud.fr/2015/invivo#Acquisition";

    // Properties of intermediate property nodes
    pub const NAME: &str = "http://modalmi.u-psud.fr/2015/invivo#name";
    pub const VALUE: &str = "http://modalmi.u-psud.fr/2015/invivo#value";
    pub const MIN: &str = "http://modalmi.u-psud.fr/2015/invivo#min";
    pub const MAX: &str = "http://modalmi.u-psud.fr/2015/invivo#max";
    pub const DESCRIPTION: &str = "http://modalmi.u-psud.fr/2015/invivo#description";

    /// Root classes every parsed file is tagged with, in emission order.
    pub const ROOT_CLASSES: [&str; 3] = [EXPERIMENTAL_DATA, FILE_RAMAN_SPECTROMETER, ACQUISITION];

    /// Expand a local name into an ontology IRI.
    ///
    /// The local name is used verbatim; callers decide on casing.
    pub fn iri(local: &str) -> String {
        let mut out = String::with_capacity(NS.len() + local.len());
        out.push_str(NS);
        out.push_str(local);
        out
    }
}

/// Media type constants
pub mod media_type {
    /// Media type recorded for every imported SPC file.
    ///
    /// Existing graphs carry this exact value, so it is kept byte for byte.
    pub const SPC: &str = "application/x-pkcs7-certificates";
}
