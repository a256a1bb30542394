//! Whole-document behavior with an owned registry.

use crate::common::{DELIMITED_DOC, example_registry};
use docdata::content::{extract, extract_yaml};
use docdata::{Error, ExtractMode, RawFieldMap, TransformerRegistry, get_data, get_data_with};
use serde_json::json;

#[test]
fn test_worked_example() {
    let (body, data) = get_data(DELIMITED_DOC, &example_registry())
        .unwrap()
        .into_parts();

    assert_eq!(body, "Doc body\n");
    assert_eq!(data.len(), 4);
    assert_eq!(data["title"], json!("Foo Bar"));
    assert_eq!(data["author"], json!("JOHN"));
    assert_eq!(data["summary"], json!("Line one\nLine two"));
    assert_eq!(data["tags"], json!(["foo", "bar"]));
}

#[test]
fn test_both_end_delimiters_behave_identically() {
    let dotted = DELIMITED_DOC.replacen("---\n\n", "...\n\n", 1);
    assert_ne!(dotted, DELIMITED_DOC);

    let registry = example_registry();
    assert_eq!(
        get_data(&dotted, &registry).unwrap().into_parts(),
        get_data(DELIMITED_DOC, &registry).unwrap().into_parts()
    );
}

#[test]
fn test_raw_lines_are_verbatim() {
    let result = extract(DELIMITED_DOC);
    let expected: RawFieldMap = [
        ("title", vec!["Foo Bar"]),
        ("author", vec!["John"]),
        ("summary", vec!["Line one", "Line two"]),
        ("tags", vec!["foo,bar"]),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
    .collect();

    assert_eq!(result.data(), &expected);
}

#[test]
fn test_malformed_documents_come_back_unchanged() {
    let registry = example_registry();
    let documents = [
        "Document content.",
        "",
        "\n---\nTitle: Foo\n---\nBody\n",
        "---\nTitle: Foo\nAuthor: John\n-.-\nDocument content.\n",
        "---\nTitle: Foo\n\nno closing delimiter\n",
        "---\nfoo\n...\nDocument content.\n",
        "---\n---\nEmpty block\n",
    ];

    for doc in documents {
        let (body, data) = get_data(doc, &registry).unwrap().into_parts();
        assert_eq!(body, doc, "body for {doc:?}");
        assert!(data.is_empty(), "data for {doc:?}");
    }
}

#[test]
fn test_transformer_failure_is_the_only_error() {
    let mut registry = TransformerRegistry::new();
    registry.register_fn(None, |_: &[String]| Err(Error::transform_field("title", "rejected")));

    let err = get_data(DELIMITED_DOC, &registry).unwrap_err();
    assert_eq!(err.to_string(), "Transform error in field 'title': rejected");

    // Without metadata the failing default never runs
    assert!(get_data("Just text", &registry).is_ok());
}

#[test]
fn test_implicit_document() {
    let doc = DELIMITED_DOC.replace("---\n", "");
    let result =
        get_data_with(&doc, &example_registry(), ExtractMode::DelimitedOrImplicit).unwrap();

    assert_eq!(result.body(), "Doc body\n");
    assert_eq!(result.data()["author"], json!("JOHN"));
}

#[test]
fn test_yaml_variant_shares_framing_rules() {
    let doc = "---\nAuthor: John Doe\nDate: 2015-05-08\nInteger: 42\n...\nDocument content.\n";
    let result = extract_yaml(doc);
    assert_eq!(result.body(), "Document content.\n");
    assert_eq!(result.data()["Integer"].as_i64(), Some(42));
    assert_eq!(
        result.data().timestamp("Date").map(|ts| ts.to_string()),
        Some("2015-05-08".to_string())
    );

    let bad = "---\nAuthor: John Doe\n-.-\nDocument content.\n";
    assert_eq!(extract_yaml(bad).body(), bad);
}
