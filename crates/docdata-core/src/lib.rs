//! Docdata Core — shared types and errors.
//!
//! This crate provides the foundational types used across all docdata crates.
//! It has no internal docdata dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Field map aliases shared by extraction and transformation
//! - [`timestamp`]: Dates and date-times recognised in metadata values

#![doc = include_str!("../README.md")]

pub mod error;
pub mod timestamp;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use timestamp::Timestamp;
pub use types::{Lines, RawFieldMap, TransformedFieldMap};
