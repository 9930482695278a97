//! Attribute tree walk
//!
//! Classifies every leaf of a decoded attribute tree and hands it to the
//! statement builder. Nested lists are flattened onto the same root.
//!
//! # Dispatch
//!
//! | payload | length | property |
//! |---|---|---|
//! | doubles | 0 | `"NULL"` (double) |
//! | doubles | 1 | the value (double) |
//! | doubles | ≥2, `intensity`/`wavelength` | sorted array as one string |
//! | doubles | ≥2, other | `(min, max)` range |
//! | strings | 0 | `"NULL"` (string) |
//! | strings | 1 | the value (string) |
//! | strings | ≥2 | `[a, b, …]` (plain literal) |
//! | strings | acquisition marker | one property per record line |
//! | list | – | recurse |
//!
//! Keys are lower-cased before dispatch and `spc` is read as `intensity`.
//! `hyperSpec` string leaves describe the decoder itself and are skipped.

use crate::acquisition::parse_record;
use crate::attribute::{AttributeList, AttributeValue};
use crate::builder::{Property, PropertyValue, StatementBuilder};
use crate::error::SpcError;
use crate::lexical::{format_doubles, format_list};
use raman_graph_ir::{Datatype, GraphSink, TermId};
use tracing::{debug, warn};

const UNKNOWN: &str = "UnKnown Yet";
const UNKNOWN_RANGE: &str = "Unknown Yet";
const NULL: &str = "NULL";

/// String leaves with this key are decoder metadata, not acquisition data
const DECODER_KEY: &str = "hyperspec";

/// Keys whose numeric arrays are kept whole instead of summarised
const SPECTRAL_KEYS: [&str; 2] = ["intensity", "wavelength"];

/// A property the walk could not emit
#[derive(Debug)]
pub struct SkippedProperty {
    /// Attribute key the property came from
    pub key: String,
    pub error: SpcError,
}

/// Counters and skips from one walk
#[derive(Debug, Default)]
pub struct WalkSummary {
    /// Properties handed to the builder
    pub emitted: usize,
    /// Leaves deliberately not emitted (`hyperSpec`, unnamed values)
    pub ignored: usize,
    pub skipped: Vec<SkippedProperty>,
}

/// Lower-case a key and apply the `spc` → `intensity` alias
pub fn normalize_key(name: &str) -> String {
    let key = name.to_lowercase();
    if key == "spc" {
        "intensity".to_string()
    } else {
        key
    }
}

/// Recursive emitter for one attribute tree
pub struct TreeWalker<'a> {
    builder: &'a dyn StatementBuilder,
    sink: &'a mut dyn GraphSink,
    root: TermId,
    acquisition_marker: String,
    summary: WalkSummary,
}

impl<'a> TreeWalker<'a> {
    pub fn new(
        builder: &'a dyn StatementBuilder,
        sink: &'a mut dyn GraphSink,
        root: TermId,
        acquisition_marker: &str,
    ) -> Self {
        Self {
            builder,
            sink,
            root,
            acquisition_marker: acquisition_marker.to_lowercase(),
            summary: WalkSummary::default(),
        }
    }

    /// Walk `list` and return what happened
    pub fn run(mut self, list: &AttributeList) -> WalkSummary {
        self.walk_list(list);
        self.summary
    }

    fn walk_list(&mut self, list: &AttributeList) {
        for node in list {
            let key = normalize_key(&node.name);
            match &node.value {
                AttributeValue::Doubles { values } => self.emit_doubles(&key, values),
                AttributeValue::Strings { values } => self.emit_strings(&key, values),
                AttributeValue::List(nested) => self.walk_list(nested),
            }
        }
    }

    fn emit(
        &mut self,
        key: &str,
        value: PropertyValue,
        description: &str,
        datatype: Option<Datatype>,
    ) {
        // An empty key would make the bare namespace a predicate.
        if key.is_empty() {
            warn!(value = ?value, "Ignoring property without a name");
            self.summary.ignored += 1;
            return;
        }
        debug!(key, value = ?value, "Emitting property");
        let property = Property::new(key, value, description, datatype);
        self.builder.emit_property(&mut *self.sink, self.root, &property);
        self.summary.emitted += 1;
    }

    fn emit_doubles(&mut self, key: &str, values: &[f64]) {
        let double = Some(Datatype::xsd_double());
        match values {
            [] => self.emit(key, PropertyValue::text(NULL), UNKNOWN, double),
            [single] => self.emit(key, PropertyValue::double(*single), UNKNOWN, double),
            _ => {
                // Only the envelope matters downstream, so order is not kept.
                let mut sorted = values.to_vec();
                sorted.sort_by(f64::total_cmp);

                if SPECTRAL_KEYS.contains(&key) {
                    let printed = PropertyValue::text(format_doubles(&sorted));
                    self.emit(key, printed, UNKNOWN_RANGE, Some(Datatype::xsd_string()));
                } else {
                    let range = PropertyValue::Range {
                        min: sorted[0],
                        max: sorted[sorted.len() - 1],
                    };
                    self.emit(key, range, UNKNOWN_RANGE, double);
                }
            }
        }
    }

    fn emit_strings(&mut self, key: &str, values: &[String]) {
        if key == DECODER_KEY {
            debug!(key, "Skipping decoder metadata");
            self.summary.ignored += 1;
            return;
        }

        if key.starts_with(&self.acquisition_marker) && !values.is_empty() {
            for record in values {
                self.emit_record(key, record);
            }
            return;
        }

        let string = Some(Datatype::xsd_string());
        match values {
            [] => self.emit(key, PropertyValue::text(NULL), UNKNOWN, string),
            [single] => self.emit(key, PropertyValue::text(single.as_str()), UNKNOWN, string),
            _ => self.emit(key, PropertyValue::text(format_list(values)), UNKNOWN, None),
        }
    }

    fn emit_record(&mut self, key: &str, record: &str) {
        for entry in parse_record(record) {
            match entry {
                Ok(entry) => {
                    self.emit(
                        &entry.name,
                        PropertyValue::Text(entry.value),
                        UNKNOWN,
                        Some(entry.datatype),
                    );
                }
                Err(error) => {
                    warn!(key, error = %error, "Skipping malformed acquisition property");
                    self.summary.skipped.push(SkippedProperty {
                        key: key.to_string(),
                        error,
                    });
                }
            }
        }
    }
}
