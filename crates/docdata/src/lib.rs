//! Docdata — umbrella crate.
//!
//! This crate re-exports the docdata components and provides the pipeline
//! entry point, [`get_data`], which extracts a document's metadata block and
//! transforms its fields.
//!
//! # Example
//!
//! ```rust
//! use docdata::{get_data, Builtin, TransformerRegistry};
//! use serde_json::json;
//!
//! let mut registry = TransformerRegistry::new();
//! registry.register(Some("tags"), Builtin::SplitComma.transformer());
//!
//! let doc = "---\nTitle: Foo Bar\nTags: foo,bar\n---\n\nDoc body\n";
//! let (body, data) = get_data(doc, &registry).unwrap().into_parts();
//!
//! assert_eq!(body, "Doc body\n");
//! assert_eq!(data["title"], json!("Foo Bar"));
//! assert_eq!(data["tags"], json!(["foo", "bar"]));
//! ```

#![doc = include_str!("../README.md")]

pub mod pipeline;

pub use docdata_content as content;
pub use docdata_core as core;
pub use docdata_transform as transform;

// Re-export the types most callers need
pub use docdata_content::ExtractMode;
pub use docdata_core::{Error, RawFieldMap, Result, Timestamp, TransformedFieldMap};
pub use docdata_transform::{Builtin, SharedTransformer, Transformer, TransformerRegistry};
pub use pipeline::{DocData, get_data, get_data_with, get_shared_data};
