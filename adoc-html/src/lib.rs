//! HTML rendering for parsed AsciiDoc documents
//!
//!     This crate turns an AsciiDoc block tree, already built by an upstream
//!     parser, into HTML markup. It is a presentation-layer adapter: every
//!     block type has one renderer, the renderers recurse into child blocks
//!     through a single dispatcher, and the document shell (header, table of
//!     contents, footnotes) is assembled around the dispatched content.
//!
//!     TLDR for contributors:
//!         - This crate never parses AsciiDoc source and never runs inline
//!           substitutions; both happen upstream. The tree arrives with
//!           pre-rendered markup strings where inline content lives.
//!         - Pre-rendered markup is grafted into the output tree as parsed
//!           nodes, never as text, so it is not escaped a second time.
//!         - Unrecognized block contexts are not errors: they degrade to
//!           their raw content. Missing optional attributes mean "use the
//!           default", never a failure.
//!
//! Architecture
//!
//!     The format-agnostic core lives in ./common: the attribute
//!     substitution context threaded through one render call, the section
//!     numbering rules shared by body headings and the outline, and media
//!     target resolution. Output-specific code lives under ./html and stays
//!     focused on markup shapes. This split keeps the numbering and
//!     substitution logic testable in isolation and reusable by future
//!     backends.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── backend.rs              # Backend trait definition
//!     ├── registry.rs             # BackendRegistry for discovery and selection
//!     ├── highlight.rs            # SyntaxHighlighter registration/selection
//!     ├── ast                     # The document object model (input boundary)
//!     ├── common                  # Format-agnostic rendering logic
//!     └── html                    # The HTML backend
//!
//! Rendering Model
//!
//!     One render call performs one depth-first traversal of the immutable
//!     tree and returns a complete result, in fixed order: header, content,
//!     footnotes. The only state a traversal carries is the substitution
//!     context, created per call from the document's global attributes and
//!     updated by playing back each block's attributes exactly once before
//!     the block dispatches. Nothing is shared between render calls, so
//!     concurrent renders of different documents cannot interfere.
//!
//! Library Choices
//!
//!     The output is built as an rcdom tree and serialized with html5ever
//!     rather than concatenated by hand. That choice is what makes the
//!     raw-content contract cheap to honor: text we produce is escaped by
//!     the serializer, and markup produced upstream is parsed and adopted as
//!     nodes, so neither path can double-escape the other.

pub mod ast;
pub mod backend;
pub mod common;
pub mod error;
pub mod highlight;
pub mod html;
pub mod registry;

pub use backend::Backend;
pub use error::RenderError;
pub use highlight::{HighlighterRegistry, SyntaxHighlighter};
pub use registry::BackendRegistry;

/// Render a document to an HTML fragment with default options.
pub fn render_html(doc: &ast::Document) -> Result<String, RenderError> {
    html::render_document(doc, &html::HtmlOptions::default())
}
