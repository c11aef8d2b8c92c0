//! Document shell assembly and final serialization.
//!
//! One render call performs one depth-first traversal of the block tree and
//! returns a complete fragment in fixed order: header, content, footnotes.
//! Standalone mode wraps the fragment in a full page with embedded CSS.

use crate::ast::Document;
use crate::error::RenderError;
use crate::html::convert::Converter;
use crate::html::dom::{
    append_element, append_raw, append_text, create_element, html_escape, serialize_children,
};
use crate::html::{outline, HtmlOptions};
use markup5ever_rcdom::Handle;

/// Render a document with the given options.
pub fn render_document(doc: &Document, options: &HtmlOptions) -> Result<String, RenderError> {
    let mut converter = Converter::new(doc);
    // Staging container; only its children are serialized.
    let root = create_element("div", vec![]);

    render_header(doc, &converter, &root);

    let content = append_element(&root, "div", vec![("id", "content")]);
    converter.convert_blocks(&doc.blocks, &content);

    render_footnotes(doc, &converter, &root);

    let fragment = serialize_children(&root)?;
    if options.standalone {
        Ok(wrap_in_page(doc, &fragment, options))
    } else {
        Ok(fragment)
    }
}

fn render_header(doc: &Document, converter: &Converter, root: &Handle) {
    let subs = converter.subs();
    if subs.is_set("noheader") {
        return;
    }
    let header = append_element(root, "div", vec![("id", "header")]);
    if !doc.has_header() {
        return;
    }

    if let Some(title) = &doc.title {
        let h1 = append_element(&header, "h1", vec![]);
        append_raw(&h1, title);
    }

    render_details(doc, converter, &header);

    // Inline TOC: only with sections present, the toc attribute set, and
    // auto placement.
    if doc.has_sections()
        && subs.is_set("toc")
        && subs.text_or("toc-placement", "auto") == "auto"
    {
        let class = subs.text_or("toc-class", "toc");
        let toc = append_element(&header, "div", vec![("id", "toc"), ("class", &class)]);
        let title_div = append_element(&toc, "div", vec![("id", "toctitle")]);
        append_text(&title_div, &subs.text_or("toc-title", "Table of Contents"));
        if let Some(list) = outline::outline(&doc.blocks, subs) {
            toc.children.borrow_mut().push(list);
        }
    }
}

/// Author and revision metadata under the document title.
fn render_details(doc: &Document, converter: &Converter, header: &Handle) {
    let subs = converter.subs();
    let has_revision =
        subs.has("revnumber") || subs.has("revdate") || subs.has("revremark");
    if doc.authors.is_empty() && !has_revision {
        return;
    }

    let details = append_element(header, "div", vec![("class", "details")]);

    for (index, author) in doc.authors.iter().enumerate() {
        let ordinal = index + 1;
        let author_id =
            if ordinal > 1 { format!("author{ordinal}") } else { "author".to_string() };
        let span = append_element(&details, "span", vec![("id", &author_id), ("class", "author")]);
        append_raw(&span, &subs.substitute(&author.name));
        append_element(&details, "br", vec![]);

        if let Some(email) = &author.email {
            let email_id =
                if ordinal > 1 { format!("email{ordinal}") } else { "email".to_string() };
            let span =
                append_element(&details, "span", vec![("id", &email_id), ("class", "email")]);
            append_raw(&span, &subs.substitute(email));
            append_element(&details, "br", vec![]);
        }
    }

    if let Some(revnumber) = subs.text("revnumber") {
        let span = append_element(&details, "span", vec![("id", "revnumber")]);
        let label = subs.text_or("version-label", "Version").to_lowercase();
        let comma = if subs.has("revdate") { "," } else { "" };
        append_text(&span, &format!("{label} {revnumber}{comma}"));
    }
    if let Some(revdate) = subs.text("revdate") {
        let span = append_element(&details, "span", vec![("id", "revdate")]);
        append_text(&span, &revdate);
    }
    if let Some(revremark) = subs.text("revremark") {
        append_element(&details, "br", vec![]);
        let span = append_element(&details, "span", vec![("id", "revremark")]);
        append_text(&span, &revremark);
    }
}

/// Terminal footnotes region, keyed by stable 1-based indexes.
fn render_footnotes(doc: &Document, converter: &Converter, root: &Handle) {
    if doc.footnotes.is_empty() || converter.subs().is_set("nofootnotes") {
        return;
    }
    let region = append_element(root, "div", vec![("id", "footnotes")]);
    append_element(&region, "hr", vec![]);

    for footnote in &doc.footnotes {
        let id = format!("_footnotedef_{}", footnote.index);
        let div = append_element(&region, "div", vec![("class", "footnote"), ("id", &id)]);
        let href = format!("#_footnoteref_{}", footnote.index);
        let anchor = append_element(&div, "a", vec![("href", &href)]);
        append_text(&anchor, &footnote.index.to_string());
        append_text(&div, ". ");
        append_raw(&div, &footnote.text);
    }
}

/// Wrap the fragment in a complete HTML page with embedded CSS.
fn wrap_in_page(doc: &Document, fragment: &str, options: &HtmlOptions) -> String {
    let baseline_css = include_str!("../../css/baseline.css");
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let title = doc.title.as_deref().unwrap_or("Untitled");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="adoc-html">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body class="{doctype}">
{fragment}
</body>
</html>"#,
        doctype = doc.doctype.as_str(),
    )
}
