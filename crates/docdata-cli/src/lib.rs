//! # docdata-cli
//!
//! Command-line front end for docdata:
//! - Read a document from a file or stdin
//! - Extract and transform its metadata with configured built-ins
//! - Print the result as JSON, or print only the body

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::Args;
pub use config::DocdataConfig;
