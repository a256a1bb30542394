//! Locating the metadata block and the body that follows it.
//!
//! A delimited block looks like this:
//!
//! ```text
//! ---
//! Title: My Document
//! Author: Jane
//! ---
//!
//! The body of the document starts here.
//! ```
//!
//! The opening `---` must be the very first line. The block ends at the first
//! line that is exactly `---` or `...`. Nothing here parses the block; the
//! scanner only decides where the block and the body are, and gives up
//! (returns `None`) whenever the framing is missing or ambiguous.

use crate::fields::is_field_line;

/// The opening delimiter line.
pub const START_DELIMITER: &str = "---";

/// The recognized closing delimiter lines. Both behave identically.
pub const END_DELIMITERS: [&str; 2] = ["---", "..."];

/// How the start of a document is searched for a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Only a block opened by `---` on the first line counts.
    #[default]
    Delimited,
    /// As `Delimited`, but a document whose first line is a `Key: value`
    /// line is also read as a block running up to the first blank line.
    DelimitedOrImplicit,
}

/// A metadata block located in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text strictly between the delimiters (or the implicit block lines).
    pub text: &'a str,
    /// Everything after the block.
    pub body: &'a str,
    /// Whether the block was framed by delimiters.
    pub delimited: bool,
}

/// Split a document into its metadata block and body.
///
/// Returns `None` when there is no block, when the closing delimiter is
/// missing, or when a bad delimiter line shows up before it.
///
/// # Example
///
/// ```rust
/// use docdata_content::{split_block, ExtractMode};
///
/// let block = split_block("---\nTitle: Hi\n...\nBody", ExtractMode::Delimited).unwrap();
/// assert_eq!(block.text, "Title: Hi\n");
/// assert_eq!(block.body, "Body");
///
/// assert!(split_block("\n---\nTitle: Hi\n---\n", ExtractMode::Delimited).is_none());
/// ```
pub fn split_block(document: &str, mode: ExtractMode) -> Option<Block<'_>> {
    let mut lines = LineCursor::new(document);
    let (first, _, after_first) = lines.next()?;

    if first == START_DELIMITER {
        return split_delimited(document, after_first, lines);
    }

    match mode {
        ExtractMode::Delimited => None,
        ExtractMode::DelimitedOrImplicit if is_field_line(first) => {
            Some(split_implicit(document, after_first, lines))
        }
        ExtractMode::DelimitedOrImplicit => None,
    }
}

/// Returns `true` for a line that is exactly one of the closing delimiters.
pub fn is_end_delimiter(line: &str) -> bool {
    END_DELIMITERS.contains(&line)
}

/// Returns `true` for a line that looks like a delimiter but is not one.
///
/// Such a line is made only of `-` and `.` characters, at least three of
/// them, at the start of the line, and matches neither closing spelling.
pub fn is_bad_delimiter(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-' || c == '.') && !is_end_delimiter(line)
}

fn split_delimited<'a>(
    document: &'a str,
    inner_start: usize,
    lines: LineCursor<'a>,
) -> Option<Block<'a>> {
    for (line, start, end) in lines {
        if is_end_delimiter(line) {
            return Some(Block {
                text: &document[inner_start..start],
                body: skip_blank_line(&document[end..]),
                delimited: true,
            });
        }
        if is_bad_delimiter(line) {
            log::debug!("Bad front matter delimiter {line:?}; treating document as body");
            return None;
        }
    }

    log::debug!("Front matter opening delimiter found but no closing delimiter");
    None
}

fn split_implicit<'a>(document: &'a str, first_end: usize, lines: LineCursor<'a>) -> Block<'a> {
    let mut block_end = first_end;
    for (line, start, end) in lines {
        if line.trim().is_empty() {
            return Block {
                text: &document[..start],
                body: &document[end..],
                delimited: false,
            };
        }
        block_end = end;
    }

    Block {
        text: &document[..block_end],
        body: &document[block_end..],
        delimited: false,
    }
}

/// Drop a single empty line directly after the closing delimiter.
fn skip_blank_line(body: &str) -> &str {
    body.strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body)
}

/// Iterates lines as `(content, start, end)`, where `content` excludes the
/// line terminator and `end` is the offset just past it.
struct LineCursor<'a> {
    document: &'a str,
    offset: usize,
}

impl<'a> LineCursor<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            document,
            offset: 0,
        }
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = (&'a str, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.document.len() {
            return None;
        }

        let start = self.offset;
        let rest = &self.document[start..];
        let (raw, end) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], start + pos + 1),
            None => (rest, self.document.len()),
        };
        self.offset = end;

        let content = raw.strip_suffix('\r').unwrap_or(raw);
        Some((content, start, end))
    }
}

// ============================================================================
// Tests
// ============================================================================
