//! Transformer registry for docdata metadata fields.
//!
//! A transformer turns the raw lines of one field into a value. The
//! [`TransformerRegistry`] maps field names to transformers and falls back
//! to a single default transformer for every other field.
//!
//! # Modules
//!
//! - [`transformer`]: The `Transformer` trait and shared handle type
//! - [`registry`]: Owned, independently configured registries
//! - [`shared`]: The process-wide registry
//! - [`builtins`]: Ready-made transformers, selectable by name
//!
//! # Example
//!
//! ```rust
//! use docdata_transform::{builtins, TransformerRegistry};
//! use serde_json::{json, Value};
//!
//! let mut registry = TransformerRegistry::new();
//! registry.register_fn(Some("author"), |lines: &[String]| {
//!     Ok(Value::String(lines[0].to_uppercase()))
//! });
//! registry.register(Some("summary"), builtins::Builtin::JoinLines.transformer());
//!
//! let lines = vec!["Line one".to_string(), "Line two".to_string()];
//! assert_eq!(registry.transform("summary", &lines).unwrap(), json!("Line one\nLine two"));
//! assert_eq!(registry.transform("other", &lines).unwrap(), json!("Line one Line two"));
//! ```

pub mod builtins;
pub mod registry;
pub mod shared;
pub mod transformer;

// Re-export key types
pub use builtins::Builtin;
pub use registry::TransformerRegistry;
pub use transformer::{SharedTransformer, Transformer, transformer};
