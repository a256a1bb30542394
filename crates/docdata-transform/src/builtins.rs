//! Ready-made transformers.
//!
//! Each built-in is a plain function usable directly with
//! [`transformer`](crate::transformer), and is also named by a [`Builtin`]
//! variant so configuration files can pick one by its kebab-case name.
//!
//! | Name          | Lines `["a, b", "c"]` become                |
//! |---------------|---------------------------------------------|
//! | `identity`    | `["a, b", "c"]`                             |
//! | `join-space`  | `"a, b c"`                                  |
//! | `join-lines`  | `"a, b\nc"`                                 |
//! | `first-line`  | `"a, b"`                                    |
//! | `upper-first` | `"A, B"`                                    |
//! | `split-comma` | `["a", "b", "c"]`                           |
//!
//! The typed built-ins (`integer`, `boolean`, `date`) read the first line and
//! fail with a transform error when it does not parse.

use std::fmt;
use std::str::FromStr;

use docdata_core::{Error, Result, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transformer::{SharedTransformer, transformer};

/// The lines as a JSON array of strings.
pub fn identity(lines: &[String]) -> Result<Value> {
    Ok(lines.iter().map(|l| Value::from(l.as_str())).collect())
}

/// The lines joined with single spaces.
pub fn join_space(lines: &[String]) -> Result<Value> {
    Ok(Value::String(lines.join(" ")))
}

/// The lines joined with newlines.
pub fn join_lines(lines: &[String]) -> Result<Value> {
    Ok(Value::String(lines.join("\n")))
}

/// The first line only.
pub fn first_line(lines: &[String]) -> Result<Value> {
    Ok(Value::String(first(lines).to_string()))
}

/// The first line, uppercased.
pub fn upper_first(lines: &[String]) -> Result<Value> {
    Ok(Value::String(first(lines).to_uppercase()))
}

/// Comma-separated items from every line, trimmed, empty items dropped.
pub fn split_comma(lines: &[String]) -> Result<Value> {
    Ok(lines
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(Value::from)
        .collect())
}

/// The first line as a signed integer.
pub fn integer(lines: &[String]) -> Result<Value> {
    let text = first(lines).trim();
    text.parse::<i64>()
        .map(Value::from)
        .map_err(|e| Error::transform_with_source(format!("'{text}' is not an integer"), e))
}

/// The first line as a boolean (`true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`).
pub fn boolean(lines: &[String]) -> Result<Value> {
    let text = first(lines).trim();
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(Value::Bool(true)),
        "false" | "no" | "off" | "0" => Ok(Value::Bool(false)),
        _ => Err(Error::transform(format!("'{text}' is not a boolean"))),
    }
}

/// The first line as an ISO-8601 date or date-time string.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`.
pub fn date(lines: &[String]) -> Result<Value> {
    let text = first(lines).trim();
    text.parse::<Timestamp>()
        .map(|ts| Value::String(ts.to_string()))
        .map_err(|e| Error::transform_with_source(format!("'{text}' is not a date"), e))
}

fn first(lines: &[String]) -> &str {
    lines.first().map(String::as_str).unwrap_or_default()
}

/// Names for the built-in transformers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Builtin {
    /// See [`identity`].
    Identity,
    /// See [`join_space`].
    JoinSpace,
    /// See [`join_lines`].
    JoinLines,
    /// See [`first_line`].
    FirstLine,
    /// See [`upper_first`].
    UpperFirst,
    /// See [`split_comma`].
    SplitComma,
    /// See [`integer`].
    Integer,
    /// See [`boolean`].
    Boolean,
    /// See [`date`].
    Date,
}

impl Builtin {
    /// Every built-in, in documentation order.
    pub const ALL: [Builtin; 9] = [
        Builtin::Identity,
        Builtin::JoinSpace,
        Builtin::JoinLines,
        Builtin::FirstLine,
        Builtin::UpperFirst,
        Builtin::SplitComma,
        Builtin::Integer,
        Builtin::Boolean,
        Builtin::Date,
    ];

    /// The kebab-case name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Identity => "identity",
            Builtin::JoinSpace => "join-space",
            Builtin::JoinLines => "join-lines",
            Builtin::FirstLine => "first-line",
            Builtin::UpperFirst => "upper-first",
            Builtin::SplitComma => "split-comma",
            Builtin::Integer => "integer",
            Builtin::Boolean => "boolean",
            Builtin::Date => "date",
        }
    }

    /// A shared handle to the built-in's function.
    pub fn transformer(self) -> SharedTransformer {
        match self {
            Builtin::Identity => transformer(identity),
            Builtin::JoinSpace => transformer(join_space),
            Builtin::JoinLines => transformer(join_lines),
            Builtin::FirstLine => transformer(first_line),
            Builtin::UpperFirst => transformer(upper_first),
            Builtin::SplitComma => transformer(split_comma),
            Builtin::Integer => transformer(integer),
            Builtin::Boolean => transformer(boolean),
            Builtin::Date => transformer(date),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Builtin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
                Error::config(format!(
                    "unknown transformer '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
