//! Reading documents and rendering results.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use docdata::content::extract_yaml;
use docdata::{ExtractMode, get_data_with};
use serde::Serialize;

use crate::cli::Args;
use crate::config::DocdataConfig;

#[derive(Serialize)]
struct Output<'a, T: Serialize> {
    data: &'a T,
    body: &'a str,
}

/// Load configuration, read the document, and print the result to stdout.
pub fn run(args: &Args) -> Result<()> {
    let config = DocdataConfig::load(args.config.as_deref())?;
    let document = read_document(args.file.as_deref())?;
    let output = render(args, &config, &document)?;
    print!("{output}");
    Ok(())
}

/// Read the document from `file`, or stdin when it is absent or `-`.
pub fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut document = String::new();
            std::io::stdin()
                .read_to_string(&mut document)
                .context("Failed to read stdin")?;
            Ok(document)
        }
    }
}

/// Render a document's metadata and body as the CLI prints them.
///
/// With `--body-only` the body is returned verbatim; otherwise the result
/// is pretty JSON with `data` and `body` keys, followed by a newline.
pub fn render(args: &Args, config: &DocdataConfig, document: &str) -> Result<String> {
    if args.yaml {
        let result = extract_yaml(document);
        tracing::debug!(found = result.has_metadata(), "Extracted YAML front matter");
        return format_output(args, result.data(), result.body());
    }

    let mode = if args.implicit || config.implicit {
        ExtractMode::DelimitedOrImplicit
    } else {
        ExtractMode::Delimited
    };
    let registry = config.registry();
    tracing::debug!(?mode, fields = registry.len(), "Running pipeline");

    let result = get_data_with(document, &registry, mode)?;
    format_output(args, result.data(), result.body())
}

fn format_output<T: Serialize>(args: &Args, data: &T, body: &str) -> Result<String> {
    if args.body_only {
        return Ok(body.to_string());
    }

    let mut json = serde_json::to_string_pretty(&Output { data, body })
        .context("Failed to serialize metadata as JSON")?;
    json.push('\n');
    Ok(json)
}
