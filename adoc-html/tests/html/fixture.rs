//! The tree is interchange data: a document deserialized from its JSON form
//! renders the same as one built in code.

use crate::common::render;
use adoc_html::ast::Document;

#[test]
fn test_json_fixture_renders() {
    let json = r#"{
        "title": "Fixture",
        "doctype": "article",
        "attrs": {"toc": "", "product": "Widget"},
        "authors": [{"name": "Jane Doe"}],
        "footnotes": [{"index": 1, "text": "See the manual."}],
        "blocks": [
            {
                "meta": {"id": "_intro", "title": "Intro"},
                "body": {"section": {
                    "level": 1,
                    "sectname": "section",
                    "number": "1.",
                    "numbered": true,
                    "blocks": [
                        {"meta": {"content": "Welcome to {product}."}, "body": "paragraph"}
                    ]
                }}
            },
            {"body": "thematic_break"},
            {"meta": {"content": "<custom>kept</custom>"}, "body": {"unknown": {"context": "custom"}}}
        ]
    }"#;

    let doc: Document = serde_json::from_str(json).expect("fixture to deserialize");
    let html = render(&doc);

    assert!(html.contains("<h1>Fixture</h1>"));
    assert!(html.contains("<span id=\"author\" class=\"author\">Jane Doe</span>"));
    assert!(html.contains("<a href=\"#_intro\">1. Intro</a>"));
    assert!(html.contains("Welcome to Widget."));
    assert!(html.contains("<hr>"));
    assert!(html.contains("<custom>kept</custom>"));
    assert!(html.contains("<div class=\"footnote\" id=\"_footnotedef_1\">"));
}

#[test]
fn test_document_round_trips_through_json() {
    let doc = crate::common::document(vec![crate::common::paragraph("Hello")]);
    let json = serde_json::to_string(&doc).expect("document to serialize");
    let back: Document = serde_json::from_str(&json).expect("document to deserialize");

    assert_eq!(doc, back);
    assert_eq!(render(&doc), render(&back));
}
