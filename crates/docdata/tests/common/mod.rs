//! Common documents and registries for docdata integration tests.

use docdata::{Builtin, TransformerRegistry, transform::transformer};
use serde_json::Value;

/// A delimited document exercising every field shape.
pub const DELIMITED_DOC: &str = "---
Title: Foo Bar
Author: John
Summary: Line one
    Line two
Tags: foo,bar
---

Doc body
";

/// Registry with the transformers used by the worked example: join with a
/// space by default, uppercase the author, keep summary lines, split tags.
pub fn example_registry() -> TransformerRegistry {
    let mut registry = TransformerRegistry::new();
    registry.register_fn(None, |lines: &[String]| Ok(Value::String(lines.join(" "))));
    registry.register(Some("author"), Builtin::UpperFirst.transformer());
    registry.register(Some("summary"), Builtin::JoinLines.transformer());
    registry.register(
        Some("tags"),
        transformer(|lines: &[String]| Ok(lines[0].split(',').map(Value::from).collect())),
    );
    registry
}
