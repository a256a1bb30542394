//! Typed YAML front matter.
//!
//! Uses the same block rules as [`extract`](crate::extract) but parses the
//! block with `serde_yaml`, so values keep their YAML types and keys keep
//! their source case:
//!
//! ```rust
//! use docdata_content::extract_yaml;
//! use docdata_core::Timestamp;
//!
//! let doc = "---\nAuthor: John Doe\nDate: 2015-05-08\nInteger: 42\n---\n\nDocument content.\n";
//! let result = extract_yaml(doc);
//!
//! assert_eq!(result.body(), "Document content.\n");
//! assert_eq!(result.data()["Author"].as_str(), Some("John Doe"));
//! assert_eq!(result.data()["Integer"].as_i64(), Some(42));
//! assert!(matches!(result.data().timestamp("Date"), Some(Timestamp::Date(_))));
//! ```
//!
//! Only a mapping counts as metadata. A block that parses to a scalar, a
//! sequence, or nothing at all is treated like invalid YAML, as is a mapping
//! with a sequence, mapping, or null key anywhere in it.

use std::ops::Deref;

use docdata_core::{Error, Result, Timestamp};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::delimiters::ExtractMode;
use crate::frontmatter::{BlockParser, Extracted, extract_with};

/// A parsed YAML metadata block.
///
/// Derefs to the underlying [`Mapping`], so fields are read with the usual
/// `data["Key"]` indexing. YAML timestamps have no `serde_yaml` type and
/// arrive as strings; [`timestamp`](Self::timestamp) resolves them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct YamlData(Mapping);

impl YamlData {
    /// The value of `key` as a date or date-time.
    ///
    /// `None` when the key is missing or its value is not a string in
    /// `YYYY-MM-DD` or `YYYY-MM-DD[ T]HH:MM:SS` form. Quoting is not
    /// visible after parsing, so a quoted date resolves too.
    pub fn timestamp(&self, key: &str) -> Option<Timestamp> {
        self.0.get(key)?.as_str()?.parse().ok()
    }

    /// Every top-level string key whose value resolves to a timestamp.
    pub fn timestamps(&self) -> impl Iterator<Item = (&str, Timestamp)> {
        self.0.iter().filter_map(|(key, value)| {
            Some((key.as_str()?, value.as_str()?.parse().ok()?))
        })
    }

    /// The underlying mapping.
    pub fn into_mapping(self) -> Mapping {
        self.0
    }
}

impl Deref for YamlData {
    type Target = Mapping;

    fn deref(&self) -> &Mapping {
        &self.0
    }
}

/// Parses block text as a YAML mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl BlockParser for YamlParser {
    type Output = YamlData;

    fn parse(&self, text: &str) -> Result<YamlData> {
        let value: Value = serde_yaml::from_str(text)
            .map_err(|e| Error::parse(format!("Invalid YAML: {e}")))?;

        match value {
            Value::Mapping(mapping) => {
                check_keys(&mapping)?;
                Ok(YamlData(mapping))
            }
            other => Err(Error::parse(format!(
                "Front matter is not a mapping: {}",
                kind(&other)
            ))),
        }
    }
}

/// Extract delimited YAML front matter.
pub fn extract_yaml(document: &str) -> Extracted<'_, YamlData> {
    extract_with(document, ExtractMode::Delimited, &YamlParser)
}

// Keys must be strings, numbers or booleans at every level.
fn check_keys(mapping: &Mapping) -> Result<()> {
    for (key, value) in mapping {
        if !matches!(key, Value::String(_) | Value::Number(_) | Value::Bool(_)) {
            return Err(Error::parse(format!(
                "Front matter has a {} key",
                kind(key)
            )));
        }
        check_nested(value)?;
    }
    Ok(())
}

fn check_nested(value: &Value) -> Result<()> {
    match value {
        Value::Mapping(mapping) => check_keys(mapping),
        Value::Sequence(items) => items.iter().try_for_each(check_nested),
        Value::Tagged(tagged) => check_nested(&tagged.value),
        _ => Ok(()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

// ============================================================================
// Tests
// ============================================================================
