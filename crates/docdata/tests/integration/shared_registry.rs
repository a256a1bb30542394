//! The process-wide registry behaves like an owned one.

use std::sync::{Mutex, PoisonError};

use crate::common::{DELIMITED_DOC, example_registry};
use docdata::transform::shared;
use docdata::{Builtin, get_data, get_shared_data};
use serde_json::{Value, json};

// The shared registry is global to this test binary.
static LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_shared_and_owned_registries_agree() {
    let _guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    shared::reset();

    shared::register_fn(None, |lines: &[String]| Ok(Value::String(lines.join(" "))));
    shared::register(Some("author"), Builtin::UpperFirst.transformer());
    shared::register(Some("summary"), Builtin::JoinLines.transformer());
    shared::register_fn(Some("tags"), |lines: &[String]| {
        Ok(lines[0].split(',').map(Value::from).collect())
    });

    let from_shared = get_shared_data(DELIMITED_DOC).unwrap();
    let from_owned = get_data(DELIMITED_DOC, &example_registry()).unwrap();
    assert_eq!(from_shared, from_owned);

    shared::reset();
}

#[test]
fn test_shared_registry_starts_with_join_default() {
    let _guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    shared::reset();

    let data = get_shared_data(DELIMITED_DOC).unwrap();
    assert_eq!(data.data()["summary"], json!("Line one Line two"));
    assert_eq!(data.data()["author"], json!("John"));
}

#[test]
fn test_shared_reregistration_overwrites() {
    let _guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    shared::reset();

    shared::register(Some("title"), Builtin::UpperFirst.transformer());
    shared::register(Some("title"), Builtin::Identity.transformer());

    let data = get_shared_data(DELIMITED_DOC).unwrap();
    assert_eq!(data.data()["title"], json!(["Foo Bar"]));

    shared::reset();
}
