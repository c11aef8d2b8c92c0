//! Block dispatch and per-type renderers.
//!
//! `Converter` walks the block tree depth-first. Each visit plays the
//! block's attributes back into the substitution context, then routes on the
//! block body. The match is exhaustive over the known contexts, with
//! `Unknown` falling through to a raw-content graft — an unrecognized
//! upstream context is a fallback case, never an error.

use crate::ast::{
    AdmonitionVariant, Block, BlockBody, Cell, CellStyle, Column, DescriptionItem, Document,
    ListItem, Row, Section, Table,
};
use crate::common::media::resolve_media_target;
use crate::common::subs::SubstitutionContext;
use crate::common::titles::section_display_title;
use crate::html::dom::{append_element, append_raw, append_text};
use crate::html::outline;
use markup5ever_rcdom::Handle;

pub(crate) struct Converter<'a> {
    doc: &'a Document,
    subs: SubstitutionContext,
}

impl<'a> Converter<'a> {
    pub(crate) fn new(doc: &'a Document) -> Self {
        Self { doc, subs: SubstitutionContext::new(doc) }
    }

    pub(crate) fn subs(&self) -> &SubstitutionContext {
        &self.subs
    }

    pub(crate) fn convert_blocks(&mut self, blocks: &[Block], parent: &Handle) {
        for block in blocks {
            self.convert_block(block, parent);
        }
    }

    /// Render one block into `parent`.
    pub(crate) fn convert_block(&mut self, block: &Block, parent: &Handle) {
        // Playback happens exactly once per visit, before any recursion, so
        // `{name}` references in content evaluated later see these values.
        self.subs.playback(&block.meta.attrs);

        match &block.body {
            BlockBody::Audio => self.audio(block, parent),
            BlockBody::Preamble { blocks } => self.preamble(blocks, parent),
            BlockBody::Section(section) => self.section(block, section, parent),
            BlockBody::Paragraph => self.paragraph(block, parent),
            BlockBody::DescriptionList { items } => self.description_list(block, items, parent),
            BlockBody::UnorderedList { items } => self.unordered_list(block, items, parent),
            BlockBody::FloatingTitle { level } => self.floating_title(block, *level, parent),
            BlockBody::Admonition { variant, blocks } => {
                self.admonition(block, *variant, blocks, parent)
            }
            BlockBody::Listing => self.listing(block, parent),
            BlockBody::Literal => self.literal(block, parent),
            BlockBody::Image => self.image(block, parent),
            BlockBody::CalloutList { items } => self.callout_list(block, items, parent),
            BlockBody::OrderedList { items } => self.ordered_list(block, items, parent),
            BlockBody::Table(table) => self.table(block, table, parent),
            BlockBody::ThematicBreak => {
                append_element(parent, "hr", vec![]);
            }
            BlockBody::Open { blocks } => self.container(block, blocks, "openblock", parent),
            BlockBody::Pass => append_raw(parent, block.raw_content()),
            BlockBody::PageBreak => {
                append_element(parent, "div", vec![("style", "page-break-after: always;")]);
            }
            BlockBody::Example { blocks } => self.container(block, blocks, "exampleblock", parent),
            BlockBody::Sidebar { blocks } => self.container(block, blocks, "sidebarblock", parent),
            BlockBody::Quote { blocks } => self.quote(block, blocks, parent),
            BlockBody::Verse => self.verse(block, parent),
            BlockBody::TableOfContents => self.toc_macro(block, parent),
            BlockBody::Unknown { .. } => append_raw(parent, block.raw_content()),
        }
    }

    /// `<div>` wrapper carrying the block's anchor id and CSS class.
    fn block_wrapper(&self, parent: &Handle, block: &Block, class: &str) -> Handle {
        let mut attrs = Vec::new();
        if let Some(id) = &block.meta.id {
            attrs.push(("id", id.as_str()));
        }
        attrs.push(("class", class));
        append_element(parent, "div", attrs)
    }

    /// Block title with its caption prefix ("Figure 1. ", "Example 2. ", …)
    /// when upstream computed one.
    fn captioned_title(&self, block: &Block) -> Option<String> {
        let title = block.title()?;
        let caption = block.meta.attrs.text_or("caption", "");
        Some(format!("{caption}{}", self.subs.substitute(title)))
    }

    fn block_title(&self, wrapper: &Handle, block: &Block) {
        if let Some(title) = self.captioned_title(block) {
            let div = append_element(wrapper, "div", vec![("class", "title")]);
            append_raw(&div, &title);
        }
    }

    fn paragraph(&mut self, block: &Block, parent: &Handle) {
        let div = self.block_wrapper(parent, block, "paragraph");
        self.block_title(&div, block);
        let p = append_element(&div, "p", vec![]);
        append_raw(&p, &self.subs.substitute(block.raw_content()));
    }

    fn preamble(&mut self, blocks: &[Block], parent: &Handle) {
        let div = append_element(parent, "div", vec![("id", "preamble")]);
        let body = append_element(&div, "div", vec![("class", "sectionbody")]);
        self.convert_blocks(blocks, &body);
    }

    fn section(&mut self, block: &Block, section: &Section, parent: &Handle) {
        let level = section.level;
        let class = format!("sect{level}");
        let div = append_element(parent, "div", vec![("class", &class)]);

        let heading_tag = format!("h{}", (level + 1).min(6));
        let mut heading_attrs = Vec::new();
        if let Some(id) = &block.meta.id {
            heading_attrs.push(("id", id.as_str()));
        }
        let heading = append_element(&div, &heading_tag, heading_attrs);

        let title = section_display_title(block, &self.subs);
        match (&block.meta.id, self.subs.is_set("sectlinks")) {
            (Some(id), true) => {
                let href = format!("#{id}");
                let anchor =
                    append_element(&heading, "a", vec![("class", "anchor"), ("href", &href)]);
                append_raw(&anchor, &title);
            }
            _ => append_raw(&heading, &title),
        }

        // Only level-1 sections wrap their content in a sectionbody div.
        let content_parent = if level == 1 {
            append_element(&div, "div", vec![("class", "sectionbody")])
        } else {
            div
        };
        self.convert_blocks(&section.blocks, &content_parent);
    }

    fn floating_title(&mut self, block: &Block, level: usize, parent: &Handle) {
        let tag = format!("h{}", (level + 1).min(6));
        let mut attrs = Vec::new();
        if let Some(id) = &block.meta.id {
            attrs.push(("id", id.as_str()));
        }
        attrs.push(("class", "float"));
        let heading = append_element(parent, &tag, attrs);
        append_raw(&heading, &self.subs.substitute(block.title().unwrap_or_default()));
    }

    fn admonition(
        &mut self,
        block: &Block,
        variant: AdmonitionVariant,
        blocks: &[Block],
        parent: &Handle,
    ) {
        let class = format!("admonitionblock {}", variant.key());
        let div = self.block_wrapper(parent, block, &class);

        let caption_attr = format!("{}-caption", variant.key());
        let label = self
            .subs
            .text(&caption_attr)
            .unwrap_or_else(|| variant.label().to_string());
        let label_div = append_element(&div, "div", vec![("class", "title")]);
        append_text(&label_div, &label);

        let content = append_element(&div, "div", vec![("class", "content")]);
        self.block_title(&content, block);
        if blocks.is_empty() {
            append_raw(&content, &self.subs.substitute(block.raw_content()));
        } else {
            self.convert_blocks(blocks, &content);
        }
    }

    fn listing(&mut self, block: &Block, parent: &Handle) {
        let div = self.block_wrapper(parent, block, "listingblock");
        self.block_title(&div, block);
        let content = append_element(&div, "div", vec![("class", "content")]);

        let pre = if self.subs.is_set("source-highlighter") {
            append_element(&content, "pre", vec![("class", "highlight")])
        } else {
            append_element(&content, "pre", vec![])
        };
        let code = match block.meta.attrs.text("language") {
            Some(language) => {
                let class = format!("language-{language}");
                append_element(&pre, "code", vec![("class", &class), ("data-lang", &language)])
            }
            None => append_element(&pre, "code", vec![]),
        };
        // Verbatim body: pre-rendered (possibly highlighted) markup, grafted
        // without attribute substitution.
        append_raw(&code, block.raw_content());
    }

    fn literal(&mut self, block: &Block, parent: &Handle) {
        let div = self.block_wrapper(parent, block, "literalblock");
        self.block_title(&div, block);
        let content = append_element(&div, "div", vec![("class", "content")]);
        let pre = append_element(&content, "pre", vec![]);
        append_raw(&pre, block.raw_content());
    }

    fn image(&mut self, block: &Block, parent: &Handle) {
        let target = block.meta.attrs.text_or("target", "");
        let src = resolve_media_target(&self.subs, &self.subs.substitute(&target));
        let alt = block.meta.attrs.text_or("alt", "");
        let width = block.meta.attrs.text("width");
        let height = block.meta.attrs.text("height");

        let mut img_attrs = vec![("src", src.as_str()), ("alt", alt.as_str())];
        if let Some(width) = &width {
            img_attrs.push(("width", width));
        }
        if let Some(height) = &height {
            img_attrs.push(("height", height));
        }

        match self.captioned_title(block) {
            Some(title) => {
                let div = self.block_wrapper(parent, block, "imageblock");
                let content = append_element(&div, "div", vec![("class", "content")]);
                append_element(&content, "img", img_attrs);
                let title_div = append_element(&div, "div", vec![("class", "title")]);
                append_raw(&title_div, &title);
            }
            // No caption: an unwrapped image reference.
            None => {
                append_element(parent, "img", img_attrs);
            }
        }
    }

    fn audio(&mut self, block: &Block, parent: &Handle) {
        let div = self.block_wrapper(parent, block, "audioblock");
        self.block_title(&div, block);
        let content = append_element(&div, "div", vec![("class", "content")]);

        let target = block.meta.attrs.text_or("target", "");
        let src = resolve_media_target(&self.subs, &self.subs.substitute(&target));
        let mut attrs = vec![("src", src.as_str()), ("controls", "")];
        if block.meta.attrs.is_set("autoplay") {
            attrs.push(("autoplay", ""));
        }
        if block.meta.attrs.is_set("loop") {
            attrs.push(("loop", ""));
        }
        append_element(&content, "audio", attrs);
    }

    fn unordered_list(&mut self, block: &Block, items: &[ListItem], parent: &Handle) {
        let div = self.block_wrapper(parent, block, "ulist");
        self.block_title(&div, block);
        let ul = append_element(&div, "ul", vec![]);
        self.list_items(items, &ul);
    }

    fn ordered_list(&mut self, block: &Block, items: &[ListItem], parent: &Handle) {
        let style = block.meta.attrs.text_or("style", "arabic");
        let class = format!("olist {style}");
        let div = self.block_wrapper(parent, block, &class);
        self.block_title(&div, block);

        let start = block.meta.attrs.text("start");
        let mut ol_attrs = vec![("class", style.as_str())];
        if let Some(start) = &start {
            ol_attrs.push(("start", start));
        }
        let ol = append_element(&div, "ol", ol_attrs);
        self.list_items(items, &ol);
    }

    fn callout_list(&mut self, block: &Block, items: &[ListItem], parent: &Handle) {
        let div = self.block_wrapper(parent, block, "colist arabic");
        self.block_title(&div, block);
        let ol = append_element(&div, "ol", vec![]);
        self.list_items(items, &ol);
    }

    fn list_items(&mut self, items: &[ListItem], parent: &Handle) {
        for item in items {
            let li = append_element(parent, "li", vec![]);
            if !item.principal.is_empty() {
                let p = append_element(&li, "p", vec![]);
                append_raw(&p, &self.subs.substitute(&item.principal));
            }
            // Item bodies are block trees, not bare text.
            self.convert_blocks(&item.blocks, &li);
        }
    }

    fn description_list(&mut self, block: &Block, items: &[DescriptionItem], parent: &Handle) {
        let div = self.block_wrapper(parent, block, "dlist");
        self.block_title(&div, block);
        let dl = append_element(&div, "dl", vec![]);
        for item in items {
            for term in &item.terms {
                let dt = append_element(&dl, "dt", vec![("class", "hdlist1")]);
                append_raw(&dt, &self.subs.substitute(term));
            }
            if item.principal.is_some() || !item.blocks.is_empty() {
                let dd = append_element(&dl, "dd", vec![]);
                if let Some(principal) = &item.principal {
                    let p = append_element(&dd, "p", vec![]);
                    append_raw(&p, &self.subs.substitute(principal));
                }
                self.convert_blocks(&item.blocks, &dd);
            }
        }
    }

    /// Shared shape for open, example and sidebar blocks.
    fn container(&mut self, block: &Block, blocks: &[Block], class: &str, parent: &Handle) {
        let div = self.block_wrapper(parent, block, class);
        self.block_title(&div, block);
        let content = append_element(&div, "div", vec![("class", "content")]);
        if blocks.is_empty() {
            append_raw(&content, &self.subs.substitute(block.raw_content()));
        } else {
            self.convert_blocks(blocks, &content);
        }
    }

    fn quote(&mut self, block: &Block, blocks: &[Block], parent: &Handle) {
        let div = self.block_wrapper(parent, block, "quoteblock");
        self.block_title(&div, block);
        let blockquote = append_element(&div, "blockquote", vec![]);
        if blocks.is_empty() {
            append_raw(&blockquote, &self.subs.substitute(block.raw_content()));
        } else {
            self.convert_blocks(blocks, &blockquote);
        }
        self.attribution(&div, block);
    }

    fn verse(&mut self, block: &Block, parent: &Handle) {
        let div = self.block_wrapper(parent, block, "verseblock");
        self.block_title(&div, block);
        let pre = append_element(&div, "pre", vec![("class", "content")]);
        append_raw(&pre, block.raw_content());
        self.attribution(&div, block);
    }

    fn attribution(&self, wrapper: &Handle, block: &Block) {
        let attribution = block.meta.attrs.text("attribution");
        let citetitle = block.meta.attrs.text("citetitle");
        if attribution.is_none() && citetitle.is_none() {
            return;
        }
        let div = append_element(wrapper, "div", vec![("class", "attribution")]);
        if let Some(attribution) = &attribution {
            append_text(&div, &format!("— {attribution}"));
        }
        if let Some(citetitle) = &citetitle {
            if attribution.is_some() {
                append_element(&div, "br", vec![]);
            }
            let cite = append_element(&div, "cite", vec![]);
            append_text(&cite, citetitle);
        }
    }

    /// The `toc::[]` macro: an in-place table of contents.
    fn toc_macro(&mut self, block: &Block, parent: &Handle) {
        if !self.doc.has_sections() {
            return;
        }
        let id = block.meta.id.as_deref().unwrap_or("toc");
        let class = self.subs.text_or("toc-class", "toc");
        let div = append_element(parent, "div", vec![("id", id), ("class", &class)]);
        let title_id = format!("{id}title");
        let title_div = append_element(&div, "div", vec![("id", &title_id)]);
        append_text(&title_div, &self.subs.text_or("toc-title", "Table of Contents"));
        if let Some(list) = outline::outline(&self.doc.blocks, &self.subs) {
            div.children.borrow_mut().push(list);
        }
    }

    fn table(&mut self, block: &Block, table: &Table, parent: &Handle) {
        let mut attrs = Vec::new();
        if let Some(id) = &block.meta.id {
            attrs.push(("id", id.as_str()));
        }
        attrs.push(("class", "tableblock frame-all grid-all"));
        let table_el = append_element(parent, "table", attrs);

        if let Some(title) = self.captioned_title(block) {
            let caption = append_element(&table_el, "caption", vec![("class", "title")]);
            append_raw(&caption, &title);
        }

        if table.columns.iter().any(|column| column.width.is_some()) {
            let colgroup = append_element(&table_el, "colgroup", vec![]);
            for column in &table.columns {
                match column.width {
                    Some(width) => {
                        let style = format!("width: {width}%;");
                        append_element(&colgroup, "col", vec![("style", &style)]);
                    }
                    None => {
                        append_element(&colgroup, "col", vec![]);
                    }
                }
            }
        }

        self.row_group(&table_el, "thead", &table.head, table, true);
        self.row_group(&table_el, "tbody", &table.body, table, false);
        self.row_group(&table_el, "tfoot", &table.foot, table, false);
    }

    /// Row groups are only present when they have rows.
    fn row_group(
        &mut self,
        table_el: &Handle,
        tag: &str,
        rows: &[Row],
        table: &Table,
        header_group: bool,
    ) {
        if rows.is_empty() {
            return;
        }
        let group = append_element(table_el, tag, vec![]);
        for row in rows {
            let tr = append_element(&group, "tr", vec![]);
            let mut col_index = 0usize;
            for cell in &row.cells {
                self.cell(&tr, cell, table.columns.get(col_index), header_group);
                col_index += cell.colspan.unwrap_or(1) as usize;
            }
        }
    }

    fn cell(&mut self, tr: &Handle, cell: &Cell, column: Option<&Column>, header_group: bool) {
        // Explicit cell properties win; otherwise the column spec decides.
        let style = cell.style.or(column.map(|c| c.style)).unwrap_or_default();
        let halign = cell.halign.or(column.map(|c| c.halign)).unwrap_or_default();
        let valign = cell.valign.or(column.map(|c| c.valign)).unwrap_or_default();

        let header = header_group || style == CellStyle::Header;
        let tag = if header { "th" } else { "td" };
        let class = format!("tableblock {} {}", halign.css_class(), valign.css_class());
        let colspan = cell.colspan.filter(|n| *n > 1).map(|n| n.to_string());
        let rowspan = cell.rowspan.filter(|n| *n > 1).map(|n| n.to_string());

        let mut attrs = vec![("class", class.as_str())];
        if let Some(colspan) = &colspan {
            attrs.push(("colspan", colspan));
        }
        if let Some(rowspan) = &rowspan {
            attrs.push(("rowspan", rowspan));
        }
        let cell_el = append_element(tr, tag, attrs);

        match style {
            CellStyle::Header => {
                append_raw(&cell_el, &self.subs.substitute(&cell.content));
            }
            _ if header_group => {
                append_raw(&cell_el, &self.subs.substitute(&cell.content));
            }
            CellStyle::AsciiDoc => {
                let content = append_element(&cell_el, "div", vec![("class", "content")]);
                self.convert_blocks(&cell.blocks, &content);
            }
            CellStyle::Literal => {
                let div = append_element(&cell_el, "div", vec![("class", "literal")]);
                let pre = append_element(&div, "pre", vec![]);
                append_raw(&pre, &cell.content);
            }
            CellStyle::Default => {
                self.cell_paragraph(&cell_el, None, &cell.content);
            }
            CellStyle::Emphasis => {
                self.cell_paragraph(&cell_el, Some("em"), &cell.content);
            }
            CellStyle::Strong => {
                self.cell_paragraph(&cell_el, Some("strong"), &cell.content);
            }
            CellStyle::Monospaced => {
                self.cell_paragraph(&cell_el, Some("code"), &cell.content);
            }
        }
    }

    fn cell_paragraph(&self, cell_el: &Handle, wrap: Option<&str>, content: &str) {
        let p = append_element(cell_el, "p", vec![("class", "tableblock")]);
        let target = match wrap {
            Some(tag) => append_element(&p, tag, vec![]),
            None => p.clone(),
        };
        append_raw(&target, &self.subs.substitute(content));
    }
}
