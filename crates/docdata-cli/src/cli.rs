//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Docdata - extract and transform document front matter
#[derive(Parser, Debug, Default)]
#[command(name = "docdata")]
#[command(author, version, about = "Extract and transform document front matter", long_about = None)]
pub struct Args {
    /// Document to read (`-` or omitted for stdin)
    pub file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "DOCDATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also accept an undelimited `Key: value` block ending at the first blank line
    #[arg(long)]
    pub implicit: bool,

    /// Parse the block as typed YAML instead of running transformers
    #[arg(long, conflicts_with = "implicit")]
    pub yaml: bool,

    /// Print only the document body
    #[arg(long)]
    pub body_only: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
