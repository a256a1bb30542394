//! Extract-then-transform pipeline.
//!
//! [`get_data`] runs the block extractor and, only when a block was found,
//! runs the registry over its fields. Malformed or missing metadata never
//! produces an error; the caller gets the whole document back as the body
//! and an empty map. A failing transformer is the only error.

use docdata_content::{ExtractMode, MetaFieldParser, extract_with};
use docdata_core::{Result, TransformedFieldMap};
use docdata_transform::{TransformerRegistry, shared};

/// A document's body and its transformed metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DocData<'a> {
    body: &'a str,
    data: TransformedFieldMap,
}

impl<'a> DocData<'a> {
    /// The body: everything after the metadata block, or the whole document.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// The transformed metadata, in the order the fields appeared.
    pub fn data(&self) -> &TransformedFieldMap {
        &self.data
    }

    /// Check if any metadata was found.
    pub fn has_metadata(&self) -> bool {
        !self.data.is_empty()
    }

    /// Split into `(body, data)`.
    pub fn into_parts(self) -> (&'a str, TransformedFieldMap) {
        (self.body, self.data)
    }
}

/// Extract and transform a document's delimited metadata block.
///
/// # Example
///
/// ```rust
/// use docdata::{get_data, TransformerRegistry};
///
/// let registry = TransformerRegistry::new();
/// let result = get_data("Document content.", &registry).unwrap();
///
/// assert_eq!(result.body(), "Document content.");
/// assert!(!result.has_metadata());
/// ```
pub fn get_data<'a>(document: &'a str, registry: &TransformerRegistry) -> Result<DocData<'a>> {
    get_data_with(document, registry, ExtractMode::Delimited)
}

/// Like [`get_data`], with a choice of block detection mode.
pub fn get_data_with<'a>(
    document: &'a str,
    registry: &TransformerRegistry,
    mode: ExtractMode,
) -> Result<DocData<'a>> {
    let (body, raw) = extract_with(document, mode, &MetaFieldParser).into_parts();

    if raw.is_empty() {
        return Ok(DocData {
            body,
            data: TransformedFieldMap::new(),
        });
    }

    let data = registry.transform_all(&raw)?;
    log::debug!("Transformed {} metadata fields", data.len());

    Ok(DocData { body, data })
}

/// Like [`get_data`], using the process-wide registry.
pub fn get_shared_data(document: &str) -> Result<DocData<'_>> {
    get_data(document, &shared::snapshot())
}

// ============================================================================
// Tests
// ============================================================================
