//! Acquisition mini-records
//!
//! Some SPC log entries carry a block of `name=value` lines instead of a plain
//! value, for example
//!
//! ```text
//! DATE=23.02.2015 13:17
//! USER=bob
//! Exposure (s)=10
//! ```
//!
//! Each line becomes its own property. `DATE*` values are rewritten to
//! `xsd:dateTime`; everything else stays a string.

use crate::error::{Result, SpcError};
use chrono::{Datelike, NaiveDateTime, Timelike};
use raman_graph_ir::Datatype;
use regex::Regex;
use std::sync::OnceLock;

/// Wall-clock format used inside records
const RECORD_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// One `name=value` line of a record, already cleaned up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub name: String,
    pub value: String,
    pub datatype: Datatype,
}

fn parenthesised() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\(.+\)").expect("valid regex"))
}

/// Remove spaces, then any parenthesised suffix: `"Exposure (s)"` → `"Exposure"`
pub fn clean_name(raw: &str) -> String {
    let compact = raw.replace(' ', "");
    parenthesised().replace_all(&compact, "").into_owned()
}

/// Rewrite `dd.MM.yyyy HH:mm` as an `xsd:dateTime` lexical form
///
/// The hour is rendered on a 12-hour dial (`13:17` → `01:17`) with no zone
/// conversion, only a `Z` suffix. Stored graphs were written this way.
pub fn to_xsd_date_time(value: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(value.trim(), RECORD_DATE_FORMAT)
        .map_err(|e| SpcError::date_format(value, e))?;
    Ok(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00Z",
        parsed.year(),
        parsed.month(),
        parsed.day(),
        parsed.hour() % 12,
        parsed.minute()
    ))
}

/// Parse one record line; `None` for blank lines
pub fn parse_line(line: &str) -> Option<Result<RecordEntry>> {
    let line = line.trim_matches(|c| c == '\r' || c == '\n');
    if line.is_empty() {
        return None;
    }

    let (raw_name, raw_value) = line.split_once('=').unwrap_or((line, ""));
    let name = clean_name(raw_name);
    let value = raw_value.trim();

    let entry = if raw_name.starts_with("DATE") {
        to_xsd_date_time(value).map(|value| RecordEntry {
            name,
            value,
            datatype: Datatype::xsd_date_time(),
        })
    } else {
        Ok(RecordEntry {
            name,
            value: value.to_string(),
            datatype: Datatype::xsd_string(),
        })
    };
    Some(entry)
}

/// Split a record into entries, one result per non-blank line
///
/// Lines are CR+LF separated; stray `\r` on either side of a line is ignored.
pub fn parse_record(record: &str) -> Vec<Result<RecordEntry>> {
    record.split('\n').filter_map(parse_line).collect()
}
