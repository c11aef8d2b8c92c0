//! Outline numbering and recursion-depth tests.

use crate::common::{document, paragraph, render, section};
use adoc_html::ast::{AttrMap, Block, BlockBody, Doctype, Section};

fn doc_with_toc(blocks: Vec<Block>) -> adoc_html::ast::Document {
    let mut doc = document(blocks);
    doc.title = Some("Doc".to_string());
    doc.attrs = AttrMap::new().with("toc", "");
    doc
}

#[test]
fn test_level1_numbered_section_end_to_end() {
    let doc = doc_with_toc(vec![section("_intro", 1, "Intro", "1.", vec![])]);
    let html = render(&doc);

    // Outline entry and body heading agree on the numbered title.
    assert!(html.contains("<ul class=\"sectlevel1\"><li><a href=\"#_intro\">1. Intro</a></li></ul>"));
    assert!(html.contains("<h2 id=\"_intro\">1. Intro</h2>"));
}

#[test]
fn test_sectnumlevels_caps_numbering() {
    let level3 = section("_l3", 3, "Deeper", "1.1.1.", vec![]);
    let level2 = section("_l2", 2, "Mid", "1.1.", vec![level3]);
    let level1 = section("_l1", 1, "Top", "1.", vec![level2]);
    let mut doc = doc_with_toc(vec![level1]);
    doc.attrs = AttrMap::new().with("toc", "").with("toclevels", "5");
    let html = render(&doc);

    // sectnumlevels defaults to 3: level 2 is numbered, level 3 is not.
    assert!(html.contains(">1.1. Mid</a>"));
    assert!(html.contains(">Deeper</a>"));
    assert!(!html.contains("1.1.1. Deeper"));
}

#[test]
fn test_sectnumlevels_override_extends_numbering() {
    let level3 = section("_l3", 3, "Deeper", "1.1.1.", vec![]);
    let level2 = section("_l2", 2, "Mid", "1.1.", vec![level3]);
    let level1 = section("_l1", 1, "Top", "1.", vec![level2]);
    let mut doc = doc_with_toc(vec![level1]);
    doc.attrs = AttrMap::new()
        .with("toc", "")
        .with("toclevels", "5")
        .with("sectnumlevels", "4");
    let html = render(&doc);

    assert!(html.contains(">1.1.1. Deeper</a>"));
}

#[test]
fn test_toclevels_limits_outline_depth_but_not_body() {
    let level3 = section("_l3", 3, "Deeper", "1.1.1.", vec![paragraph("deep body")]);
    let level2 = section("_l2", 2, "Mid", "1.1.", vec![level3]);
    let level1 = section("_l1", 1, "Top", "1.", vec![level2]);
    let doc = doc_with_toc(vec![level1]);
    let html = render(&doc);

    // toclevels defaults to 2: the level-2 entry is listed, its own
    // children are not.
    assert!(html.contains("<a href=\"#_l2\">"));
    assert!(!html.contains("<a href=\"#_l3\">"));
    // The level-3 section still renders in the body.
    assert!(html.contains("<h4 id=\"_l3\">"));
    assert!(html.contains("deep body"));
}

#[test]
fn test_toclevels_override_deepens_outline() {
    let level3 = section("_l3", 3, "Deeper", "1.1.1.", vec![]);
    let level2 = section("_l2", 2, "Mid", "1.1.", vec![level3]);
    let level1 = section("_l1", 1, "Top", "1.", vec![level2]);
    let mut doc = doc_with_toc(vec![level1]);
    doc.attrs = AttrMap::new().with("toc", "").with("toclevels", "3");
    let html = render(&doc);

    assert!(html.contains("<a href=\"#_l3\">"));
}

#[test]
fn test_unnumbered_section_shows_bare_title() {
    let mut block = section("_notes", 1, "Notes", "5.", vec![]);
    if let BlockBody::Section(section) = &mut block.body {
        section.numbered = false;
    }
    let doc = doc_with_toc(vec![block]);
    let html = render(&doc);

    assert!(html.contains("<a href=\"#_notes\">Notes</a>"));
}

#[test]
fn test_dot_number_sentinel_renders_empty() {
    let doc = doc_with_toc(vec![section("_intro", 1, "Intro", ".", vec![])]);
    let html = render(&doc);

    assert!(html.contains("<a href=\"#_intro\">Intro</a>"));
    assert!(!html.contains(">. Intro<"));
}

#[test]
fn test_caption_supplies_title_verbatim() {
    let mut block = section("_appendix", 1, "Glossary", "9.", vec![]);
    if let BlockBody::Section(section) = &mut block.body {
        section.caption = Some("Appendix A: ".to_string());
    }
    let doc = doc_with_toc(vec![block]);
    let html = render(&doc);

    assert!(html.contains("<a href=\"#_appendix\">Appendix A: Glossary</a>"));
    assert!(!html.contains("9. Glossary"));
}

#[test]
fn test_book_chapter_signifier() {
    let block = Block::new(BlockBody::Section(Section {
        level: 0,
        sectname: "chapter".to_string(),
        number: "1.".to_string(),
        numbered: true,
        caption: None,
        blocks: vec![],
    }))
    .with_id("_first_steps")
    .with_title("First Steps");

    let mut doc = doc_with_toc(vec![block]);
    doc.doctype = Doctype::Book;
    doc.attrs = AttrMap::new().with("toc", "").with("chapter-signifier", "Chapter");
    let html = render(&doc);

    assert!(html.contains("<a href=\"#_first_steps\">Chapter 1. First Steps</a>"));
    assert!(html.contains("<ul class=\"sectlevel0\">"));
}

#[test]
fn test_book_part_signifier() {
    let block = Block::new(BlockBody::Section(Section {
        level: 0,
        sectname: "part".to_string(),
        number: "I.".to_string(),
        numbered: true,
        caption: None,
        blocks: vec![],
    }))
    .with_id("_basics")
    .with_title("Basics");

    let mut doc = doc_with_toc(vec![block]);
    doc.doctype = Doctype::Book;
    doc.attrs = AttrMap::new().with("toc", "").with("part-signifier", "Part");
    let html = render(&doc);

    assert!(html.contains("<a href=\"#_basics\">Part I. Basics</a>"));
}

#[test]
fn test_non_book_doctype_ignores_signifiers() {
    let block = Block::new(BlockBody::Section(Section {
        level: 0,
        sectname: "chapter".to_string(),
        number: "1.".to_string(),
        numbered: true,
        caption: None,
        blocks: vec![],
    }))
    .with_id("_plain")
    .with_title("Plain");

    let mut doc = doc_with_toc(vec![block]);
    doc.attrs = AttrMap::new().with("toc", "").with("chapter-signifier", "Chapter");
    let html = render(&doc);

    assert!(html.contains("<a href=\"#_plain\">1. Plain</a>"));
    assert!(!html.contains("Chapter 1."));
}

#[test]
fn test_outline_numbering_is_idempotent() {
    let level2 = section("_l2", 2, "Mid", "1.1.", vec![]);
    let level1 = section("_l1", 1, "Top", "1.", vec![level2]);
    let doc = doc_with_toc(vec![level1]);

    assert_eq!(render(&doc), render(&doc));
}

#[test]
fn test_sectlinks_wraps_body_headings() {
    let mut doc = doc_with_toc(vec![section("_intro", 1, "Intro", "1.", vec![])]);
    doc.attrs = AttrMap::new().with("toc", "").with("sectlinks", "");
    let html = render(&doc);

    assert!(html.contains("<h2 id=\"_intro\"><a class=\"anchor\" href=\"#_intro\">1. Intro</a></h2>"));
}

#[test]
fn test_level1_section_gets_sectionbody() {
    let doc = document(vec![section("_intro", 1, "Intro", "1.", vec![paragraph("Body")])]);
    let html = render(&doc);

    assert!(html.contains("<div class=\"sect1\"><h2 id=\"_intro\">1. Intro</h2><div class=\"sectionbody\">"));
}
