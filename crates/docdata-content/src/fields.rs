//! Parser for `Key: value` metadata fields.
//!
//! Each field starts on a line of the form `Key: value`. Lines indented by
//! four or more spaces (or a tab) continue the previous field:
//!
//! ```text
//! Title:   Foo Bar
//! Summary: Line one
//!     Line two
//! Tags:    foo,bar
//! ```
//!
//! parses to `title: ["Foo Bar"]`, `summary: ["Line one", "Line two"]`,
//! `tags: ["foo,bar"]`. Keys are lowercased and values trimmed. Blank lines
//! are skipped and a repeated key appends to the lines it already has.

use std::sync::LazyLock;

use docdata_core::{Error, RawFieldMap, Result};
use regex::Regex;

use crate::frontmatter::BlockParser;

static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ ]{0,3}([A-Za-z0-9_-]+):\s*(.*)$").expect("Invalid field line regex")
});

static CONTINUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[ ]{4,}|\t)(.*)$").expect("Invalid continuation regex"));

/// Returns `true` if `line` opens a new field.
pub fn is_field_line(line: &str) -> bool {
    FIELD_RE.is_match(line)
}

/// Splits block text into field name to raw lines.
///
/// Rejects anything that is not a non-empty list of fields: a line that is
/// neither a field nor a continuation, a continuation with no field before
/// it, or a block with no fields at all (such as a lone scalar like `foo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaFieldParser;

impl BlockParser for MetaFieldParser {
    type Output = RawFieldMap;

    fn parse(&self, text: &str) -> Result<RawFieldMap> {
        let mut fields = RawFieldMap::new();
        let mut current: Option<String> = None;

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(caps) = FIELD_RE.captures(line) {
                let key = caps[1].to_lowercase();
                let value = caps[2].trim().to_string();
                fields.entry(key.clone()).or_default().push(value);
                current = Some(key);
            } else if let Some(caps) = CONTINUATION_RE.captures(line) {
                let key = current.as_ref().ok_or_else(|| {
                    Error::parse(format!(
                        "line {}: continuation before any field: {line:?}",
                        index + 1
                    ))
                })?;
                if let Some(lines) = fields.get_mut(key) {
                    lines.push(caps[1].trim().to_string());
                }
            } else {
                return Err(Error::parse(format!(
                    "line {}: expected `Key: value`, found {line:?}",
                    index + 1
                )));
            }
        }

        if fields.is_empty() {
            return Err(Error::parse("block contains no fields"));
        }

        Ok(fields)
    }
}

// ============================================================================
// Tests
// ============================================================================
