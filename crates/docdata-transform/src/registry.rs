//! Field name to transformer mapping with a default fallback.
//!
//! A registry is plain configuration: it is built once, changed only through
//! [`register`](TransformerRegistry::register), and read by
//! [`transform`](TransformerRegistry::transform). Field names are matched
//! exactly as given; the registry does no case or whitespace normalization.

use std::fmt;

use docdata_core::{RawFieldMap, Result, TransformedFieldMap};
use indexmap::IndexMap;
use serde_json::Value;

use crate::builtins;
use crate::transformer::{SharedTransformer, transformer};

/// Registry of per-field transformers.
///
/// # Example
///
/// ```rust
/// use docdata_transform::{transformer, TransformerRegistry};
/// use serde_json::{json, Value};
///
/// let mut registry = TransformerRegistry::new();
///
/// // Registration returns the transformer, so it can be kept for reuse
/// let tags = registry.register_fn(Some("tags"), |lines: &[String]| {
///     Ok(lines[0].split(',').map(|t| Value::from(t.trim())).collect())
/// });
/// registry.register(Some("keywords"), tags);
///
/// // No name: replaces the default
/// registry.register(None, transformer(|lines: &[String]| Ok(Value::from(lines.len()))));
///
/// let lines = vec!["foo, bar".to_string()];
/// assert_eq!(registry.transform("keywords", &lines).unwrap(), json!(["foo", "bar"]));
/// assert_eq!(registry.transform("title", &lines).unwrap(), json!(1));
/// ```
#[derive(Clone)]
pub struct TransformerRegistry {
    transformers: IndexMap<String, SharedTransformer>,
    default: SharedTransformer,
}

impl TransformerRegistry {
    /// Create a registry with no field entries and the `join-space` default.
    pub fn new() -> Self {
        Self::with_default(transformer(builtins::join_space))
    }

    /// Create a registry with no field entries and the given default.
    pub fn with_default(default: SharedTransformer) -> Self {
        Self {
            transformers: IndexMap::new(),
            default,
        }
    }

    /// Create a registry seeded from field entries and a default.
    pub fn with_items<I, K>(items: I, default: SharedTransformer) -> Self
    where
        I: IntoIterator<Item = (K, SharedTransformer)>,
        K: Into<String>,
    {
        Self {
            transformers: items.into_iter().map(|(k, t)| (k.into(), t)).collect(),
            default,
        }
    }

    /// Register a transformer.
    ///
    /// With a name, the transformer is stored under that field name,
    /// replacing any earlier entry. Without a name it becomes the default.
    /// Returns the transformer that was registered.
    pub fn register(
        &mut self,
        name: Option<&str>,
        transformer: SharedTransformer,
    ) -> SharedTransformer {
        match name {
            Some(name) => {
                if self
                    .transformers
                    .insert(name.to_string(), transformer.clone())
                    .is_some()
                {
                    log::debug!("Replaced transformer for field '{name}'");
                } else {
                    log::debug!("Registered transformer for field '{name}'");
                }
            }
            None => {
                log::debug!("Replaced default transformer");
                self.default = transformer.clone();
            }
        }
        transformer
    }

    /// Register a function or closure. See [`register`](Self::register).
    pub fn register_fn<F>(&mut self, name: Option<&str>, f: F) -> SharedTransformer
    where
        F: Fn(&[String]) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(name, transformer(f))
    }

    /// Transform one field's lines.
    ///
    /// Uses the transformer registered under `name`, or the default when
    /// there is none. Transformer errors are returned unchanged.
    pub fn transform(&self, name: &str, lines: &[String]) -> Result<Value> {
        self.resolve(name).apply(lines)
    }

    /// Transform every field of a raw field map.
    ///
    /// The result has the same keys in the same order. Stops at the first
    /// transformer error and returns it.
    pub fn transform_all(&self, raw: &RawFieldMap) -> Result<TransformedFieldMap> {
        raw.iter()
            .map(|(name, lines)| Ok((name.clone(), self.transform(name, lines)?)))
            .collect()
    }

    /// The transformer that [`transform`](Self::transform) would use for `name`.
    pub fn resolve(&self, name: &str) -> &SharedTransformer {
        self.transformers.get(name).unwrap_or(&self.default)
    }

    /// The transformer registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&SharedTransformer> {
        self.transformers.get(name)
    }

    /// The default transformer.
    pub fn default_transformer(&self) -> &SharedTransformer {
        &self.default
    }

    /// Check if a field has its own transformer.
    pub fn contains(&self, name: &str) -> bool {
        self.transformers.contains_key(name)
    }

    /// Field names with their own transformer, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transformers.keys().map(String::as_str)
    }

    /// Number of field entries (the default is not counted).
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// Check if there are no field entries.
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl Default for TransformerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerRegistry")
            .field("fields", &self.transformers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
