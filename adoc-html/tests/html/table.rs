//! Table rendering: row groups, alignment, spans, and per-column styles.

use crate::common::{document, paragraph, render};
use adoc_html::ast::{
    Block, BlockBody, Cell, CellStyle, Column, HorizontalAlign, Row, Table, VerticalAlign,
};

fn row(cells: Vec<Cell>) -> Row {
    Row { cells }
}

fn two_column_table(body: Vec<Row>) -> Table {
    Table {
        columns: vec![Column::default(), Column::default()],
        head: vec![row(vec![Cell::new("Name"), Cell::new("Value")])],
        body,
        foot: vec![],
    }
}

#[test]
fn test_head_and_body_groups() {
    let table = two_column_table(vec![row(vec![Cell::new("answer"), Cell::new("42")])]);
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<table class=\"tableblock frame-all grid-all\">"));
    assert!(html.contains("<thead><tr><th class=\"tableblock halign-left valign-top\">Name</th>"));
    assert!(html.contains("<tbody>"));
    assert!(html.contains("<td class=\"tableblock halign-left valign-top\"><p class=\"tableblock\">answer</p></td>"));
    assert!(!html.contains("<tfoot>"));
}

#[test]
fn test_footer_group_when_present() {
    let mut table = two_column_table(vec![row(vec![Cell::new("a"), Cell::new("b")])]);
    table.foot = vec![row(vec![Cell::new("total"), Cell::new("1")])];
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<tfoot><tr><td class=\"tableblock halign-left valign-top\"><p class=\"tableblock\">total</p></td>"));
}

#[test]
fn test_cell_alignment_classes() {
    let cell = Cell {
        halign: Some(HorizontalAlign::Center),
        valign: Some(VerticalAlign::Bottom),
        ..Cell::new("centered")
    };
    let table = Table {
        columns: vec![Column::default()],
        body: vec![row(vec![cell])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("class=\"tableblock halign-center valign-bottom\""));
}

#[test]
fn test_column_alignment_is_the_fallback() {
    let column = Column { halign: HorizontalAlign::Right, ..Column::default() };
    let table = Table {
        columns: vec![column],
        body: vec![row(vec![Cell::new("right by column")])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("halign-right"));
}

#[test]
fn test_cell_spans() {
    let cell = Cell { colspan: Some(2), rowspan: Some(3), ..Cell::new("wide") };
    let table = Table {
        columns: vec![Column::default(), Column::default()],
        body: vec![row(vec![cell])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("colspan=\"2\""));
    assert!(html.contains("rowspan=\"3\""));
}

#[test]
fn test_column_style_shapes_cell_content() {
    let table = Table {
        columns: vec![
            Column { style: CellStyle::Strong, ..Column::default() },
            Column { style: CellStyle::Monospaced, ..Column::default() },
        ],
        body: vec![row(vec![Cell::new("bold cell"), Cell::new("mono cell")])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<p class=\"tableblock\"><strong>bold cell</strong></p>"));
    assert!(html.contains("<p class=\"tableblock\"><code>mono cell</code></p>"));
}

#[test]
fn test_cell_style_overrides_column_style() {
    let cell = Cell { style: Some(CellStyle::Emphasis), ..Cell::new("leaning") };
    let table = Table {
        columns: vec![Column { style: CellStyle::Strong, ..Column::default() }],
        body: vec![row(vec![cell])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<p class=\"tableblock\"><em>leaning</em></p>"));
    assert!(!html.contains("<strong>"));
}

#[test]
fn test_header_style_promotes_to_th() {
    let cell = Cell { style: Some(CellStyle::Header), ..Cell::new("key") };
    let table = Table {
        columns: vec![Column::default()],
        body: vec![row(vec![cell])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<th class=\"tableblock halign-left valign-top\">key</th>"));
}

#[test]
fn test_literal_style_cell() {
    let cell = Cell { style: Some(CellStyle::Literal), ..Cell::new("  indented\ntext") };
    let table = Table {
        columns: vec![Column::default()],
        body: vec![row(vec![cell])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<div class=\"literal\">"));
    assert!(html.contains("indented\ntext"));
}

#[test]
fn test_asciidoc_style_cell_recurses() {
    let cell = Cell {
        style: Some(CellStyle::AsciiDoc),
        blocks: vec![paragraph("nested block")],
        ..Cell::default()
    };
    let table = Table {
        columns: vec![Column::default()],
        body: vec![row(vec![cell])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<div class=\"content\"><div class=\"paragraph\"><p>nested block</p></div></div>"));
}

#[test]
fn test_colgroup_from_column_widths() {
    let table = Table {
        columns: vec![
            Column { width: Some(25), ..Column::default() },
            Column { width: Some(75), ..Column::default() },
        ],
        body: vec![row(vec![Cell::new("a"), Cell::new("b")])],
        ..Table::default()
    };
    let html = render(&document(vec![Block::new(BlockBody::Table(table))]));

    assert!(html.contains("<colgroup><col style=\"width: 25%;\"><col style=\"width: 75%;\"></colgroup>"));
}

#[test]
fn test_table_caption() {
    let table = two_column_table(vec![row(vec![Cell::new("a"), Cell::new("b")])]);
    let block = Block::new(BlockBody::Table(table))
        .with_title("Results")
        .with_attr("caption", "Table 1. ");
    let html = render(&document(vec![block]));

    assert!(html.contains("<caption class=\"title\">Table 1. Results</caption>"));
}

#[test]
fn test_cell_content_is_substituted() {
    let mut doc = document(vec![Block::new(BlockBody::Table(two_column_table(vec![row(vec![
        Cell::new("{product}"),
        Cell::new("ready"),
    ])])))]);
    doc.attrs = adoc_html::ast::AttrMap::new().with("product", "Widget");
    let html = render(&doc);

    assert!(html.contains("<p class=\"tableblock\">Widget</p>"));
}
