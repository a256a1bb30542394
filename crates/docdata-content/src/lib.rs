//! Front matter detection, block splitting, and field parsing.
//!
//! This crate finds the metadata block at the top of a document and hands
//! its text to a [`BlockParser`]. It never fails on malformed input: any
//! ambiguity in the framing, or any parser rejection, yields the original
//! document as the body with no metadata.
//!
//! # Modules
//!
//! - [`delimiters`]: Locating the block and the body
//! - [`frontmatter`]: The `BlockParser` seam and the extraction entry points
//! - [`fields`]: `Key: value` field parser producing raw lines
//! - [`yaml`]: Typed YAML variant built on `serde_yaml`
//!
//! # Example
//!
//! ```rust
//! use docdata_content::extract;
//!
//! let doc = "---\nTitle: Hello\n---\n\nBody\n";
//! let result = extract(doc);
//!
//! assert!(result.has_metadata());
//! assert_eq!(result.body(), "Body\n");
//! assert_eq!(result.data()["title"], vec!["Hello".to_string()]);
//! ```

pub mod delimiters;
pub mod fields;
pub mod frontmatter;
pub mod yaml;

// Re-export key types and functions
pub use delimiters::{Block, END_DELIMITERS, ExtractMode, START_DELIMITER, split_block};
pub use fields::MetaFieldParser;
pub use frontmatter::{BlockParser, Extracted, extract, extract_with};
pub use yaml::{YamlData, YamlParser, extract_yaml};
