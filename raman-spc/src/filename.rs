//! Metadata encoded in acquisition file names
//!
//! Files are named like `201502203V12_J1_T_m3.spc`:
//!
//! - `V12` - volunteer ID
//! - `J1` - first day of the acquisition timetable (`J1`..`J5`)
//! - `T` / `A` / `B` - skin condition: control (Temoin), UVA or UVB
//! - `m3` - measurement number (`m1`..`m6`)
//!
//! Tokens are matched independently of their position; unknown tokens and
//! unknown digits are ignored.

use crate::builder::{Property, PropertyValue, StatementBuilder};
use raman_graph_ir::{Datatype, GraphSink, TermId};
use tracing::debug;

const SKIN_DESCRIPTION: &str = "Laser type used in an acquisition";

static DAYS: [(&str, &str); 5] = [
    ("J1", "First Day of Acquisition"),
    ("J2", "Second Day of Acquisition"),
    ("J3", "Third Day of Acquisition"),
    ("J4", "Forth Day of Acquisition"),
    ("J5", "Fifth Day of Acquisition"),
];

static MEASUREMENTS: [(&str, &str); 6] = [
    ("m1", "The First Measurement Number"),
    ("m2", "The Second Measurement Number"),
    ("m3", "The Third Measurement Number"),
    ("m4", "The Forth Measurement Number"),
    ("m5", "The Fifth Measurement Number"),
    ("m6", "The Sixth Measurement Number"),
];

/// One piece of metadata recognised in a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameFact {
    pub key: &'static str,
    pub value: String,
    pub description: &'static str,
}

impl FilenameFact {
    fn new(key: &'static str, value: impl Into<String>, description: &'static str) -> Self {
        Self {
            key,
            value: value.into(),
            description,
        }
    }
}

/// Classify one `_`-separated token; the first matching rule wins
pub fn classify_token(token: &str) -> Option<FilenameFact> {
    let skin = match token.to_ascii_uppercase().as_str() {
        "T" => Some("Temoin"),
        "A" => Some("UVA"),
        "B" => Some("UVB"),
        _ => None,
    };
    if let Some(skin) = skin {
        return Some(FilenameFact::new("skinSpecification", skin, SKIN_DESCRIPTION));
    }

    if token.starts_with('J') {
        return DAYS
            .iter()
            .find(|(day, _)| *day == token)
            .map(|(day, description)| FilenameFact::new("dayOrder", *day, *description));
    }

    if token.starts_with('m') {
        return MEASUREMENTS
            .iter()
            .find(|(number, _)| token.starts_with(*number))
            .map(|(number, description)| {
                FilenameFact::new("measurementNumber", *number, *description)
            });
    }

    // Segment between the first `V` and the next one (or the end).
    token
        .split('V')
        .nth(1)
        .filter(|id| !id.is_empty())
        .map(|id| FilenameFact::new("volunteerID", format!("V{id}"), "Volunteer ID"))
}

/// Every fact recognised in `file_name`, in token order
pub fn extract(file_name: &str) -> Vec<FilenameFact> {
    file_name.split('_').filter_map(classify_token).collect()
}

/// Emits file-name metadata through a statement builder
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameExtractor;

impl FilenameExtractor {
    /// Emit one string-typed property per recognised token; returns how many
    pub fn emit(
        &self,
        builder: &dyn StatementBuilder,
        sink: &mut dyn GraphSink,
        root: TermId,
        file_name: &str,
    ) -> usize {
        let facts = extract(file_name);
        for fact in &facts {
            debug!(key = fact.key, value = %fact.value, "File name metadata");
            let property = Property::new(
                fact.key,
                PropertyValue::text(fact.value.as_str()),
                fact.description,
                Some(Datatype::xsd_string()),
            );
            builder.emit_property(sink, root, &property);
        }
        facts.len()
    }
}
