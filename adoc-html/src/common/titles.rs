//! Section display titles: captions, numbering, signifiers.
//!
//! The same computation feeds body headings and outline entries, so the two
//! can never disagree about a section's number.

use crate::ast::{Block, Doctype};
use crate::common::subs::SubstitutionContext;

/// A number string of exactly `"."` is the document-level sentinel and
/// renders as empty, never as a lone period.
pub fn display_number(number: &str) -> &str {
    if number == "." {
        ""
    } else {
        number
    }
}

/// Compute the display title for a section heading or outline entry.
///
/// Precedence:
/// 1. An explicit caption supplies the title verbatim; numbering is
///    suppressed.
/// 2. A numbered section below `sectnumlevels` gets its number string
///    prefixed. Below level 2 in book doctype, chapter and part sections
///    additionally get their signifier attribute, when one is set.
/// 3. Everything else shows the bare title.
pub fn section_display_title(block: &Block, ctx: &SubstitutionContext) -> String {
    let title = ctx.substitute(block.title().unwrap_or_default());
    let Some(section) = block.section() else {
        return title;
    };

    if let Some(caption) = &section.caption {
        return format!("{caption}{title}");
    }

    if !section.numbered || (section.level as i64) >= ctx.sectnumlevels() {
        return title;
    }

    let number = display_number(&section.number);
    let signifier = if section.level < 2 && ctx.doctype() == Doctype::Book {
        match section.sectname.as_str() {
            "chapter" => ctx.text("chapter-signifier"),
            "part" => ctx.text("part-signifier"),
            _ => None,
        }
    } else {
        None
    };

    let mut parts: Vec<&str> = Vec::new();
    if let Some(signifier) = signifier.as_deref() {
        if !signifier.is_empty() {
            parts.push(signifier);
        }
    }
    if !number.is_empty() {
        parts.push(number);
    }
    if !title.is_empty() {
        parts.push(&title);
    }
    parts.join(" ")
}
