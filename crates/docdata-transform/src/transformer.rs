//! The `Transformer` trait.
//!
//! Transformers must be pure: the registry may call them any number of
//! times, from any thread, and never looks at anything but the value they
//! return.

use std::sync::Arc;

use docdata_core::Result;
use serde_json::Value;

/// Converts the raw lines of one field into a value.
///
/// Returning `Err` is a configuration bug in the transformer, and the error
/// propagates to whoever asked for the transformation.
pub trait Transformer: Send + Sync {
    /// Apply the transformation to a field's lines.
    fn apply(&self, lines: &[String]) -> Result<Value>;
}

/// Simple function-based implementation of `Transformer`.
impl<F> Transformer for F
where
    F: Fn(&[String]) -> Result<Value> + Send + Sync,
{
    fn apply(&self, lines: &[String]) -> Result<Value> {
        self(lines)
    }
}

/// A reference-counted transformer, as stored in a registry.
pub type SharedTransformer = Arc<dyn Transformer>;

/// Wrap a function or closure as a [`SharedTransformer`].
///
/// # Example
///
/// ```rust
/// use docdata_transform::{transformer, Transformer};
/// use serde_json::{json, Value};
///
/// let count = transformer(|lines: &[String]| Ok(Value::from(lines.len())));
/// let lines = vec!["a".to_string(), "b".to_string()];
/// assert_eq!(count.apply(&lines).unwrap(), json!(2));
/// ```
pub fn transformer<F>(f: F) -> SharedTransformer
where
    F: Fn(&[String]) -> Result<Value> + Send + Sync + 'static,
{
    Arc::new(f)
}
