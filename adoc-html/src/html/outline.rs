//! Table-of-contents rendering.
//!
//! Mirrors the section tree as nested `<ul class="sectlevelN">` lists.
//! Entry titles go through the shared numbering rules; recursion into a
//! subsection's own outline stops at `toclevels`, while deeper sections
//! still render in the document body.

use crate::ast::Block;
use crate::common::subs::SubstitutionContext;
use crate::common::titles::section_display_title;
use crate::html::dom::{append_element, append_raw, create_element};
use markup5ever_rcdom::Handle;

/// Build the outline list for the sections among `blocks`.
///
/// Returns `None` when there is nothing to list.
pub(crate) fn outline(blocks: &[Block], subs: &SubstitutionContext) -> Option<Handle> {
    let sections: Vec<&Block> = blocks.iter().filter(|block| block.is_section()).collect();
    let first_level = sections.first().and_then(|block| block.section())?.level;

    let class = format!("sectlevel{first_level}");
    let list = create_element("ul", vec![("class", &class)]);

    for block in sections {
        let Some(section) = block.section() else {
            continue;
        };
        let li = append_element(&list, "li", vec![]);
        let href = format!("#{}", block.meta.id.as_deref().unwrap_or_default());
        let anchor = append_element(&li, "a", vec![("href", &href)]);
        append_raw(&anchor, &section_display_title(block, subs));

        if (section.level as i64) < subs.toclevels() {
            if let Some(sublist) = outline(&section.blocks, subs) {
                li.children.borrow_mut().push(sublist);
            }
        }
    }

    Some(list)
}
