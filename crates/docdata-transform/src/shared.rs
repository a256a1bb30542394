//! The process-wide transformer registry.
//!
//! For callers that want one global set of rules. The shared registry
//! behaves exactly like an owned [`TransformerRegistry`]: it starts empty
//! with the `join-space` default, changes only through [`register`] and
//! [`register_fn`], and lives until the process exits.
//!
//! Transformers run outside the lock, so a transformer may itself read or
//! change the shared registry.
//!
//! ```rust
//! use docdata_transform::shared;
//! use serde_json::{json, Value};
//!
//! shared::register_fn(Some("example-shout"), |lines: &[String]| {
//!     Ok(Value::String(lines.join(" ").to_uppercase()))
//! });
//!
//! let lines = vec!["hi".to_string()];
//! assert_eq!(shared::transform("example-shout", &lines).unwrap(), json!("HI"));
//! ```

use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use docdata_core::{RawFieldMap, Result, TransformedFieldMap};
use serde_json::Value;

use crate::registry::TransformerRegistry;
use crate::transformer::SharedTransformer;

static SHARED: LazyLock<RwLock<TransformerRegistry>> =
    LazyLock::new(|| RwLock::new(TransformerRegistry::new()));

fn read() -> RwLockReadGuard<'static, TransformerRegistry> {
    SHARED.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, TransformerRegistry> {
    SHARED.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register a transformer on the shared registry.
///
/// See [`TransformerRegistry::register`].
pub fn register(name: Option<&str>, transformer: SharedTransformer) -> SharedTransformer {
    write().register(name, transformer)
}

/// Register a function or closure on the shared registry.
pub fn register_fn<F>(name: Option<&str>, f: F) -> SharedTransformer
where
    F: Fn(&[String]) -> Result<Value> + Send + Sync + 'static,
{
    write().register_fn(name, f)
}

/// Transform one field's lines with the shared registry.
pub fn transform(name: &str, lines: &[String]) -> Result<Value> {
    let transformer = read().resolve(name).clone();
    transformer.apply(lines)
}

/// Transform every field of a raw field map with the shared registry.
pub fn transform_all(raw: &RawFieldMap) -> Result<TransformedFieldMap> {
    snapshot().transform_all(raw)
}

/// A copy of the shared registry as it is right now.
///
/// Later registrations on the shared registry do not affect the copy.
pub fn snapshot() -> TransformerRegistry {
    read().clone()
}

/// Run `f` with read access to the shared registry.
///
/// The lock is held while `f` runs; do not register from inside it.
pub fn with_shared<R>(f: impl FnOnce(&TransformerRegistry) -> R) -> R {
    f(&read())
}

/// Put the shared registry back to its initial state.
pub fn reset() {
    *write() = TransformerRegistry::new();
}

// ============================================================================
// Tests
// ============================================================================
