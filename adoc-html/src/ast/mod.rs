//! The document object model consumed by the renderers.
//!
//! The tree is built by an upstream AsciiDoc parser and handed over fully
//! resolved: inline substitutions applied, section numbers computed,
//! footnotes collected. Rendering never mutates it.

pub mod attrs;
pub mod nodes;

pub use attrs::{AttrMap, AttrValue};
pub use nodes::{
    AdmonitionVariant, Author, Block, BlockBody, BlockMeta, Cell, CellStyle, Column,
    DescriptionItem, Doctype, Document, Footnote, HorizontalAlign, ListItem, Row, Section, Table,
    VerticalAlign,
};
