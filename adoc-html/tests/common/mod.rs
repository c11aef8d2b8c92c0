//! Shared builders for rendering tests.

use adoc_html::ast::{Block, BlockBody, Document, Section};
use adoc_html::html::HtmlBackend;
use adoc_html::Backend;

pub fn render(doc: &Document) -> String {
    HtmlBackend::default().convert(doc).expect("render to succeed")
}

pub fn render_standalone(doc: &Document) -> String {
    HtmlBackend::standalone().convert(doc).expect("render to succeed")
}

pub fn paragraph(text: &str) -> Block {
    Block::with_content(BlockBody::Paragraph, text)
}

/// A numbered section with the conventional sectname.
pub fn section(id: &str, level: usize, title: &str, number: &str, blocks: Vec<Block>) -> Block {
    Block::new(BlockBody::Section(Section {
        level,
        sectname: "section".to_string(),
        number: number.to_string(),
        numbered: true,
        caption: None,
        blocks,
    }))
    .with_id(id)
    .with_title(title)
}

pub fn document(blocks: Vec<Block>) -> Document {
    Document { blocks, ..Document::default() }
}
