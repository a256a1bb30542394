//! Field map aliases shared by extraction and transformation.

use indexmap::IndexMap;
use serde_json::Value;

/// The raw lines of one metadata field.
///
/// A field always has at least one line: the text after its `Name:` marker,
/// followed by any continuation lines.
pub type Lines = Vec<String>;

/// Field name to raw lines, in first-appearance order.
pub type RawFieldMap = IndexMap<String, Lines>;

/// Field name to transformed value, in the order of the raw map it came from.
pub type TransformedFieldMap = IndexMap<String, Value>;
