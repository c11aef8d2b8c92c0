//! Syntax-highlighter registration and selection.
//!
//! Highlighting happens upstream: the parser invokes the registered
//! highlighter while producing the pre-rendered listing content this crate
//! grafts verbatim. The renderer therefore registers and selects
//! highlighters but never invokes them.
//!
//! Registered names must be distinct from the built-in adapter names of the
//! host toolchain. A same-named registration would shadow the built-in and
//! change which implementation the parser resolves, so collisions are
//! rejected at registration time.

use crate::ast::Document;
use crate::error::RenderError;
use std::collections::HashMap;

/// Names reserved by the host toolchain's built-in adapters.
pub const RESERVED_HIGHLIGHTER_NAMES: &[&str] = &["highlight.js", "rouge", "coderay", "pygments"];

/// A syntax highlighter the upstream parser can be pointed at.
pub trait SyntaxHighlighter: Send + Sync {
    /// Registry name; must be distinct from the reserved built-in names.
    fn name(&self) -> &str;

    /// Whether this highlighter takes over highlighting entirely.
    fn handles_highlighting(&self) -> bool {
        true
    }

    /// Highlight `source`. A `lang` of `None` means emit the source
    /// untouched.
    fn highlight(&self, source: &str, lang: Option<&str>) -> String;
}

/// Registry of highlighters available to the upstream parser.
#[derive(Default)]
pub struct HighlighterRegistry {
    highlighters: HashMap<String, Box<dyn SyntaxHighlighter>>,
}

impl HighlighterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a highlighter under its own name.
    ///
    /// Fails with [`RenderError::ReservedHighlighterName`] when the name
    /// collides with a built-in adapter.
    pub fn register<H: SyntaxHighlighter + 'static>(
        &mut self,
        highlighter: H,
    ) -> Result<(), RenderError> {
        let name = highlighter.name().to_string();
        if RESERVED_HIGHLIGHTER_NAMES.contains(&name.as_str()) {
            return Err(RenderError::ReservedHighlighterName(name));
        }
        self.highlighters.insert(name, Box::new(highlighter));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn SyntaxHighlighter> {
        self.highlighters.get(name).map(|h| h.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.highlighters.contains_key(name)
    }

    /// Pick the highlighter named by the document's `source-highlighter`
    /// attribute, when one is registered.
    pub fn select<'a>(&'a self, doc: &Document) -> Option<&'a dyn SyntaxHighlighter> {
        let name = doc.attrs.text("source-highlighter")?;
        self.get(&name)
    }
}
