//! Core data structures for the parsed document tree.
//!
//! Everything here is produced by an upstream AsciiDoc parser and consumed
//! read-only by the renderers. Inline markup (bold, footnote references,
//! attribute entries in running text) is resolved upstream; the tree carries
//! it as pre-rendered markup strings in each block's envelope.
//!
//! The set of known block contexts is closed. Anything else arrives as
//! [`BlockBody::Unknown`] and degrades to its pre-rendered content when
//! rendered.

use crate::ast::attrs::AttrMap;
use serde::{Deserialize, Serialize};

/// Document-level classification. Book documents number their top-level
/// sections with chapter/part signifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Doctype {
    #[default]
    Article,
    Book,
    Manpage,
}

impl Doctype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Doctype::Article => "article",
            Doctype::Book => "book",
            Doctype::Manpage => "manpage",
        }
    }
}

/// The root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub title: Option<String>,
    pub doctype: Doctype,
    /// Global attributes; also the seed for the render-scoped substitution
    /// context.
    pub attrs: AttrMap,
    pub authors: Vec<Author>,
    pub footnotes: Vec<Footnote>,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document would render any header content at all.
    pub fn has_header(&self) -> bool {
        self.title.is_some()
            || !self.authors.is_empty()
            || self.attrs.has("revnumber")
            || self.attrs.has("revdate")
            || self.attrs.has("revremark")
    }

    pub fn has_sections(&self) -> bool {
        self.blocks.iter().any(Block::is_section)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| block.is_section())
    }
}

/// A document author, as declared in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A resolved footnote. Indexes are 1-based and stable for the lifetime of
/// the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footnote {
    pub index: usize,
    pub text: String,
}

/// Per-block envelope shared by every node type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockMeta {
    /// Stable anchor id, when the block is linkable.
    pub id: Option<String>,
    /// Block title (pre-rendered inline markup).
    pub title: Option<String>,
    pub attrs: AttrMap,
    /// Pre-rendered raw markup. Leaf renderers and the unknown-context
    /// fallback emit this without re-escaping.
    pub content: Option<String>,
}

/// One node of the block tree: the shared envelope plus a typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub meta: BlockMeta,
    pub body: BlockBody,
}

impl Block {
    pub fn new(body: BlockBody) -> Self {
        Self { meta: BlockMeta::default(), body }
    }

    pub fn with_content(body: BlockBody, content: impl Into<String>) -> Self {
        let mut block = Self::new(body);
        block.meta.content = Some(content.into());
        block
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.meta.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<crate::ast::AttrValue>) -> Self {
        self.meta.attrs.set(name, value);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    pub fn raw_content(&self) -> &str {
        self.meta.content.as_deref().unwrap_or_default()
    }

    pub fn is_section(&self) -> bool {
        matches!(self.body, BlockBody::Section(_))
    }

    pub fn section(&self) -> Option<&Section> {
        match &self.body {
            BlockBody::Section(section) => Some(section),
            _ => None,
        }
    }

    /// The upstream context name this block dispatches on.
    pub fn context_name(&self) -> &str {
        match &self.body {
            BlockBody::Audio => "audio",
            BlockBody::Preamble { .. } => "preamble",
            BlockBody::Section(_) => "section",
            BlockBody::Paragraph => "paragraph",
            BlockBody::DescriptionList { .. } => "dlist",
            BlockBody::UnorderedList { .. } => "ulist",
            BlockBody::FloatingTitle { .. } => "floating_title",
            BlockBody::Admonition { .. } => "admonition",
            BlockBody::Listing => "listing",
            BlockBody::Literal => "literal",
            BlockBody::Image => "image",
            BlockBody::CalloutList { .. } => "colist",
            BlockBody::OrderedList { .. } => "olist",
            BlockBody::Table(_) => "table",
            BlockBody::ThematicBreak => "thematic_break",
            BlockBody::Open { .. } => "open",
            BlockBody::Pass => "pass",
            BlockBody::PageBreak => "page_break",
            BlockBody::Example { .. } => "example",
            BlockBody::Sidebar { .. } => "sidebar",
            BlockBody::Quote { .. } => "quote",
            BlockBody::Verse => "verse",
            BlockBody::TableOfContents => "toc",
            BlockBody::Unknown { context } => context,
        }
    }
}

/// Typed payload, one variant per known upstream context.
///
/// Serde names match the upstream context strings, so JSON fixtures read the
/// way the wire tree does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockBody {
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "preamble")]
    Preamble { blocks: Vec<Block> },
    #[serde(rename = "section")]
    Section(Section),
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "dlist")]
    DescriptionList { items: Vec<DescriptionItem> },
    #[serde(rename = "ulist")]
    UnorderedList { items: Vec<ListItem> },
    #[serde(rename = "floating_title")]
    FloatingTitle { level: usize },
    #[serde(rename = "admonition")]
    Admonition {
        variant: AdmonitionVariant,
        #[serde(default)]
        blocks: Vec<Block>,
    },
    #[serde(rename = "listing")]
    Listing,
    #[serde(rename = "literal")]
    Literal,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "colist")]
    CalloutList { items: Vec<ListItem> },
    #[serde(rename = "olist")]
    OrderedList { items: Vec<ListItem> },
    #[serde(rename = "table")]
    Table(Table),
    #[serde(rename = "thematic_break")]
    ThematicBreak,
    #[serde(rename = "open")]
    Open { blocks: Vec<Block> },
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "page_break")]
    PageBreak,
    #[serde(rename = "example")]
    Example { blocks: Vec<Block> },
    #[serde(rename = "sidebar")]
    Sidebar { blocks: Vec<Block> },
    #[serde(rename = "quote")]
    Quote {
        #[serde(default)]
        blocks: Vec<Block>,
    },
    #[serde(rename = "verse")]
    Verse,
    #[serde(rename = "toc")]
    TableOfContents,
    #[serde(rename = "unknown")]
    Unknown { context: String },
}

/// A section node. Id and display title live in the block envelope; the
/// payload carries the numbering state the outline depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Nesting level, 0 for parts/top-level book chapters.
    pub level: usize,
    /// Semantic name: "section", "chapter", "part", …
    pub sectname: String,
    /// Computed number string, e.g. `"1.2."`. The bare `"."` is the
    /// document-level sentinel and renders as empty.
    pub number: String,
    pub numbered: bool,
    /// Explicit caption; when present it supplies the display title verbatim.
    pub caption: Option<String>,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn has_sections(&self) -> bool {
        self.blocks.iter().any(Block::is_section)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| block.is_section())
    }
}

/// Fixed admonition vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmonitionVariant {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl AdmonitionVariant {
    /// CSS class / attribute key form.
    pub fn key(&self) -> &'static str {
        match self {
            AdmonitionVariant::Note => "note",
            AdmonitionVariant::Tip => "tip",
            AdmonitionVariant::Important => "important",
            AdmonitionVariant::Warning => "warning",
            AdmonitionVariant::Caution => "caution",
        }
    }

    /// Default display label; overridable via the `<key>-caption` attribute.
    pub fn label(&self) -> &'static str {
        match self {
            AdmonitionVariant::Note => "Note",
            AdmonitionVariant::Tip => "Tip",
            AdmonitionVariant::Important => "Important",
            AdmonitionVariant::Warning => "Warning",
            AdmonitionVariant::Caution => "Caution",
        }
    }
}

/// An item of an unordered, ordered or callout list. The principal text is
/// pre-rendered inline markup; the body is a full block tree, not bare text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItem {
    pub principal: String,
    pub blocks: Vec<Block>,
}

impl ListItem {
    pub fn new(principal: impl Into<String>) -> Self {
        Self { principal: principal.into(), blocks: Vec::new() }
    }
}

/// One entry of a description list: any number of terms sharing one
/// description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionItem {
    pub terms: Vec<String>,
    pub principal: Option<String>,
    pub blocks: Vec<Block>,
}

/// Table payload: column specs plus the three row groups, each emitted only
/// when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub columns: Vec<Column>,
    pub head: Vec<Row>,
    pub body: Vec<Row>,
    pub foot: Vec<Row>,
}

/// Column spec. Cells without explicit style/alignment fall back to their
/// column's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Width percentage for the colgroup, when fixed.
    pub width: Option<u8>,
    pub style: CellStyle,
    pub halign: HorizontalAlign,
    pub valign: VerticalAlign,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A table cell. Content is pre-rendered markup except for
/// [`CellStyle::AsciiDoc`] cells, which carry a nested block tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub content: String,
    pub blocks: Vec<Block>,
    pub style: Option<CellStyle>,
    pub halign: Option<HorizontalAlign>,
    pub valign: Option<VerticalAlign>,
    /// Spans; `None` means 1.
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), ..Self::default() }
    }
}

/// Cell content rendering styles, per column or per cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStyle {
    #[default]
    Default,
    Emphasis,
    Strong,
    Monospaced,
    Literal,
    Header,
    AsciiDoc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn css_class(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "halign-left",
            HorizontalAlign::Center => "halign-center",
            HorizontalAlign::Right => "halign-right",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub fn css_class(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "valign-top",
            VerticalAlign::Middle => "valign-middle",
            VerticalAlign::Bottom => "valign-bottom",
        }
    }
}
