//! Attribute tree produced by the SPC decoder
//!
//! The decoder turns an SPC file into an ordered list of named values, each of
//! which is a numeric vector, a string vector, or a nested list. Order and
//! duplicate names are preserved exactly as decoded.
//!
//! The serde shape is the JSON the R adapter prints:
//!
//! ```json
//! {"type": "list", "entries": [
//!   {"name": "wavelength", "value": {"type": "double", "values": [400.0, 401.5]}},
//!   {"name": "label",      "value": {"type": "list", "entries": []}}
//! ]}
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// One decoded value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeValue {
    /// Numeric vector; missing values are NaN
    #[serde(rename = "double")]
    Doubles {
        #[serde(deserialize_with = "doubles_or_missing")]
        values: Vec<f64>,
    },
    /// Character vector; missing values are `"NA"`
    #[serde(rename = "string")]
    Strings {
        #[serde(deserialize_with = "strings_or_missing")]
        values: Vec<String>,
    },
    /// Nested named list
    List(AttributeList),
}

impl AttributeValue {
    pub fn doubles(values: impl Into<Vec<f64>>) -> Self {
        AttributeValue::Doubles {
            values: values.into(),
        }
    }

    pub fn strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        AttributeValue::Strings {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn list(list: AttributeList) -> Self {
        AttributeValue::List(list)
    }

    /// Number of leaves below (and including) this value
    pub fn leaf_count(&self) -> usize {
        match self {
            AttributeValue::List(list) => list.leaf_count(),
            _ => 1,
        }
    }
}

/// A named entry of an [`AttributeList`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeNode {
    /// Name as decoded; consumers compare it case-insensitively
    #[serde(default)]
    pub name: String,
    pub value: AttributeValue,
}

impl AttributeNode {
    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered list of named values
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeList {
    #[serde(default)]
    pub entries: Vec<AttributeNode>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn with(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.entries.push(AttributeNode::new(name, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeNode> {
        self.entries.iter()
    }

    /// First entry whose name matches case-insensitively
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|node| node.name.eq_ignore_ascii_case(name))
            .map(|node| &node.value)
    }

    pub fn leaf_count(&self) -> usize {
        self.entries.iter().map(|node| node.value.leaf_count()).sum()
    }

    /// Parse the JSON document printed by the R adapter
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        match serde_json::from_str::<AttributeValue>(json)? {
            AttributeValue::List(list) => Ok(list),
            other => Ok(AttributeList::new().with("", other)),
        }
    }

    /// Print the list in the shape [`from_json`](Self::from_json) reads;
    /// NaN is written as `null`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tagged())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.tagged())
    }

    fn tagged(&self) -> TaggedList<'_> {
        TaggedList {
            entries: &self.entries,
        }
    }
}

/// Serialized form of a top-level list, tagged like nested ones
#[derive(Serialize)]
#[serde(tag = "type", rename = "list")]
struct TaggedList<'a> {
    entries: &'a [AttributeNode],
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a AttributeNode;
    type IntoIter = std::slice::Iter<'a, AttributeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn doubles_or_missing<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

fn strings_or_missing<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<String>> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| v.unwrap_or_else(|| "NA".to_string()))
        .collect())
}
