//! The running attribute-substitution context.
//!
//! One context is created per render call from the document's global
//! attributes and threaded through the traversal. Each block's attributes
//! are played back into it exactly once, before the block dispatches, so
//! `{name}` references in content evaluated later resolve against the values
//! in effect at that point of the document. Nothing here is shared between
//! renders.

use crate::ast::{AttrMap, AttrValue, Doctype, Document};

pub(crate) const DEFAULT_SECTNUMLEVELS: i64 = 3;
pub(crate) const DEFAULT_TOCLEVELS: i64 = 2;

#[derive(Debug, Clone)]
pub struct SubstitutionContext {
    doctype: Doctype,
    attrs: AttrMap,
}

impl SubstitutionContext {
    pub fn new(doc: &Document) -> Self {
        Self { doctype: doc.doctype, attrs: doc.attrs.clone() }
    }

    /// Merge a block's attributes into the running context.
    pub fn playback(&mut self, attrs: &AttrMap) {
        if !attrs.is_empty() {
            self.attrs.merge(attrs);
        }
    }

    pub fn doctype(&self) -> Doctype {
        self.doctype
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.attrs.has(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.attrs.is_set(name)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.attrs.text(name)
    }

    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.attrs.text_or(name, default)
    }

    pub fn sectnumlevels(&self) -> i64 {
        self.attrs.int_or("sectnumlevels", DEFAULT_SECTNUMLEVELS)
    }

    pub fn toclevels(&self) -> i64 {
        self.attrs.int_or("toclevels", DEFAULT_TOCLEVELS)
    }

    /// Resolve `{name}` references against the current attribute values.
    ///
    /// Unknown references and anything that is not a well-formed attribute
    /// name are left verbatim.
    pub fn substitute(&self, text: &str) -> String {
        if !text.contains('{') {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open + 1..];
            match tail.find('}') {
                Some(close) if is_attr_name(&tail[..close]) && self.attrs.has(&tail[..close]) => {
                    out.push_str(&self.attrs.text_or(&tail[..close], ""));
                    rest = &tail[close + 1..];
                }
                _ => {
                    out.push('{');
                    rest = tail;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn is_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
