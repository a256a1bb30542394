//! Configuration file for the CLI.
//!
//! A TOML file selects a built-in transformer per field and the default:
//!
//! ```toml
//! default = "join-space"
//! implicit = false
//!
//! [fields]
//! author = "upper-first"
//! summary = "join-lines"
//! tags = "split-comma"
//! date = "date"
//! ```
//!
//! Field names are matched exactly; the field parser lowercases keys, so
//! names here should be lowercase.

use std::path::Path;

use docdata::{Builtin, Error, Result, TransformerRegistry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocdataConfig {
    /// Transformer for fields without their own entry.
    pub default: Option<Builtin>,
    /// Accept undelimited blocks.
    pub implicit: bool,
    /// Transformer per field name.
    pub fields: IndexMap<String, Builtin>,
}

impl DocdataConfig {
    /// Load configuration from `path`, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("No configuration file; using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Build the transformer registry this configuration describes.
    pub fn registry(&self) -> TransformerRegistry {
        let mut registry = TransformerRegistry::new();
        if let Some(default) = self.default {
            registry.register(None, default.transformer());
        }
        for (field, builtin) in &self.fields {
            registry.register(Some(field.as_str()), builtin.transformer());
        }
        registry
    }
}
