//! Front matter extraction.
//!
//! Extraction is best-effort and non-destructive. The result is either the
//! parsed block plus the body after it, or the whole document untouched with
//! empty metadata. A missing closing delimiter, a bad delimiter line, a blank
//! first line, and a block the parser rejects all look the same to the
//! caller: no metadata.
//!
//! # Usage
//!
//! ```rust
//! use docdata_content::extract;
//!
//! let doc = "---\nTitle: Test\nSummary: one\n    two\n---\n\nBody";
//! let result = extract(doc);
//!
//! assert!(result.has_metadata());
//! assert_eq!(result.body(), "Body");
//! assert_eq!(result.data()["summary"], vec!["one".to_string(), "two".to_string()]);
//!
//! // Anything ambiguous leaves the document alone
//! let doc = "---\nTitle: Test\n-.-\nBody";
//! let result = extract(doc);
//! assert!(!result.has_metadata());
//! assert_eq!(result.body(), doc);
//! ```

use docdata_core::{RawFieldMap, Result};

use crate::delimiters::{ExtractMode, split_block};
use crate::fields::MetaFieldParser;

/// Turns the text of a metadata block into structured data.
///
/// This is the seam between block detection and the data format inside the
/// block. A parser either returns its output or fails; the extractor treats
/// every failure as "no metadata".
pub trait BlockParser {
    /// What a successful parse produces. The default value stands for
    /// "no metadata".
    type Output: Default;

    /// Parse the text found between the delimiters.
    fn parse(&self, text: &str) -> Result<Self::Output>;
}

/// Result of front matter extraction.
///
/// Contains the parsed data (or its empty default) and the body content.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<'a, T> {
    /// Body content after the block, or the whole document.
    body: &'a str,
    /// Parsed block data.
    data: T,
    /// Whether a block was found and parsed.
    found: bool,
}

impl<'a, T: Default> Extracted<'a, T> {
    fn with_metadata(body: &'a str, data: T) -> Self {
        Self {
            body,
            data,
            found: true,
        }
    }

    fn without_metadata(document: &'a str) -> Self {
        Self {
            body: document,
            data: T::default(),
            found: false,
        }
    }

    /// Check if a block was found and parsed.
    pub fn has_metadata(&self) -> bool {
        self.found
    }

    /// Get the body content.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Get the parsed data.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Take ownership of the parsed data.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Split into `(body, data)`.
    pub fn into_parts(self) -> (&'a str, T) {
        (self.body, self.data)
    }
}

/// Extract a delimited metadata block as raw field lines.
///
/// # Example
///
/// ```rust
/// use docdata_content::extract;
///
/// let result = extract("# Just Markdown");
/// assert!(!result.has_metadata());
/// assert_eq!(result.body(), "# Just Markdown");
/// assert!(result.data().is_empty());
/// ```
pub fn extract(document: &str) -> Extracted<'_, RawFieldMap> {
    extract_with(document, ExtractMode::Delimited, &MetaFieldParser)
}

/// Extract a metadata block with a given mode and parser.
///
/// # Example
///
/// ```rust
/// use docdata_content::{extract_with, ExtractMode, MetaFieldParser};
///
/// let doc = "Title: Foo\n\nDoc body\n";
/// let result = extract_with(doc, ExtractMode::DelimitedOrImplicit, &MetaFieldParser);
/// assert_eq!(result.body(), "Doc body\n");
/// assert_eq!(result.data()["title"], vec!["Foo".to_string()]);
/// ```
pub fn extract_with<'a, P: BlockParser>(
    document: &'a str,
    mode: ExtractMode,
    parser: &P,
) -> Extracted<'a, P::Output> {
    let Some(block) = split_block(document, mode) else {
        return Extracted::without_metadata(document);
    };

    match parser.parse(block.text) {
        Ok(data) => Extracted::with_metadata(block.body, data),
        Err(e) => {
            if block.delimited {
                log::warn!("Failed to parse front matter: {e}");
            } else {
                log::debug!("Leading lines are not metadata: {e}");
            }
            Extracted::without_metadata(document)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use docdata_core::Error;
    use proptest::prelude::*;

    const DELIMITED: &str = "---
Title: Foo Bar
Author: John
Summary: Line one
    Line two
Tags: foo,bar
---

Doc body
";

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    // ------------------------------------------------------------------------
    // Basic extraction tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_delimited_fields() {
        let result = extract(DELIMITED);

        assert!(result.has_metadata());
        assert_eq!(result.body(), "Doc body\n");

        let data = result.data();
        assert_eq!(data["title"], lines(&["Foo Bar"]));
        assert_eq!(data["author"], lines(&["John"]));
        assert_eq!(data["summary"], lines(&["Line one", "Line two"]));
        assert_eq!(data["tags"], lines(&["foo,bar"]));
    }

    #[test]
    fn test_extract_dot_terminated() {
        let doc = "---\nAuthor: John Doe\nInteger: 42\n...\nDocument content.\n";
        let (body, data) = extract(doc).into_parts();

        assert_eq!(body, "Document content.\n");
        assert_eq!(data["author"], lines(&["John Doe"]));
        assert_eq!(data["integer"], lines(&["42"]));
    }

    #[test]
    fn test_extract_no_metadata() {
        let doc = "Document content.";
        let result = extract(doc);

        assert!(!result.has_metadata());
        assert_eq!(result.body(), doc);
        assert!(result.data().is_empty());
    }

    #[test]
    fn test_implicit_block_needs_opt_in() {
        let doc = DELIMITED.replace("---\n", "");
        let result = extract(&doc);

        assert!(!result.has_metadata());
        assert_eq!(result.body(), doc);
    }

    #[test]
    fn test_extract_implicit_block() {
        let doc = DELIMITED.replace("---\n", "");
        let result = extract_with(&doc, ExtractMode::DelimitedOrImplicit, &MetaFieldParser);

        assert!(result.has_metadata());
        assert_eq!(result.body(), "Doc body\n");
        assert_eq!(result.data(), extract(DELIMITED).data());
    }

    // ------------------------------------------------------------------------
    // Fail-safe tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_bad_delimiter_returns_document() {
        let doc = "---\nAuthor: John Doe\nDate: 2015-05-08\n-.-\nDocument content.\n";
        let result = extract(doc);

        assert!(!result.has_metadata());
        assert_eq!(result.body(), doc);
        assert!(result.data().is_empty());
    }

    #[test]
    fn test_blank_first_line_returns_document() {
        let doc = "\n---\nAuthor: John Doe\n---\nDocument content.\n";
        let (body, data) = extract(doc).into_parts();

        assert_eq!(body, doc);
        assert!(data.is_empty());
    }

    #[test]
    fn test_unparseable_block_returns_document() {
        let doc = "---\nfoo\n...\nDocument content.\n";
        let (body, data) = extract(doc).into_parts();

        assert_eq!(body, doc);
        assert!(data.is_empty());
    }

    #[test]
    fn test_implicit_parse_failure_returns_document() {
        let doc = "Title: Foo\nnot a field\n\nBody\n";
        let result = extract_with(doc, ExtractMode::DelimitedOrImplicit, &MetaFieldParser);

        assert!(!result.has_metadata());
        assert_eq!(result.body(), doc);
    }

    #[test]
    fn test_custom_parser_failure_is_swallowed() {
        struct Rejecting;

        impl BlockParser for Rejecting {
            type Output = Vec<String>;

            fn parse(&self, _text: &str) -> Result<Vec<String>> {
                Err(Error::parse("always rejects"))
            }
        }

        let doc = "---\nTitle: Foo\n---\nBody";
        let result = extract_with(doc, ExtractMode::Delimited, &Rejecting);

        assert!(!result.has_metadata());
        assert_eq!(result.body(), doc);
        assert!(result.into_data().is_empty());
    }

    #[test]
    fn test_custom_parser_receives_block_text() {
        struct Capture;

        impl BlockParser for Capture {
            type Output = String;

            fn parse(&self, text: &str) -> Result<String> {
                Ok(text.to_string())
            }
        }

        let result = extract_with("---\na\nb\n---\nc", ExtractMode::Delimited, &Capture);
        assert_eq!(result.data(), "a\nb\n");
        assert_eq!(result.body(), "c");
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_no_start_delimiter_means_no_metadata(doc in "[^-][\\PC\n]{0,80}") {
            let result = extract(&doc);
            prop_assert!(!result.has_metadata());
            prop_assert_eq!(result.body(), doc.as_str());
            prop_assert!(result.data().is_empty());
        }

        #[test]
        fn prop_leading_blank_line_means_no_metadata(rest in "[\\PC\n]{0,80}") {
            let doc = format!("\n{rest}");
            let result = extract(&doc);
            prop_assert!(!result.has_metadata());
            prop_assert_eq!(result.body(), doc.as_str());
        }

        #[test]
        fn prop_valid_block_body_is_text_after_delimiter(
            value in "[A-Za-z0-9 ]{0,20}",
            body in "[A-Za-z][A-Za-z0-9 \n]{0,40}",
            terminator in prop::sample::select(vec!["---", "..."]),
        ) {
            let doc = format!("---\nTitle: {value}\n{terminator}\n{body}");
            let result = extract(&doc);
            prop_assert!(result.has_metadata());
            prop_assert_eq!(result.body(), body.as_str());
            prop_assert_eq!(&result.data()["title"], &vec![value.trim().to_string()]);
        }
    }
}
