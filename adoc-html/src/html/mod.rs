//! HTML backend
//!
//! Renders the parsed block tree to HTML5.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `rcdom` ecosystem for building and serializing
//! the output tree:
//! - `html5ever`: Browser-grade HTML5 parser/serializer from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Building a real element tree (instead of concatenating strings) keeps
//! escaping decisions in one place: text nodes are escaped by the
//! serializer, while pre-rendered markup from the upstream parser is parsed
//! and grafted as nodes so it is never escaped twice.
//!
//! # Element Mapping Table
//!
//! | Block context    | HTML shape                                              |
//! |------------------|---------------------------------------------------------|
//! | document         | `<div id="header">` + `<div id="content">` + `<div id="footnotes">` |
//! | section          | `<div class="sectN">` + `<hN+1 id>` (+ `sectionbody` at level 1) |
//! | paragraph        | `<div class="paragraph"><p>`                            |
//! | preamble         | `<div id="preamble"><div class="sectionbody">`          |
//! | ulist            | `<div class="ulist"><ul><li><p>`                        |
//! | olist            | `<div class="olist arabic"><ol class="arabic">`         |
//! | colist           | `<div class="colist arabic"><ol>`                       |
//! | dlist            | `<div class="dlist"><dl><dt class="hdlist1"><dd>`       |
//! | admonition       | `<div class="admonitionblock note">` + label + content  |
//! | listing          | `<div class="listingblock"><pre><code>`                 |
//! | literal          | `<div class="literalblock"><pre>`                       |
//! | image            | `<div class="imageblock">` when captioned, bare `<img>` otherwise |
//! | audio            | `<div class="audioblock"><audio controls>`              |
//! | table            | `<table class="tableblock …">` + colgroup + row groups  |
//! | quote / verse    | `<div class="quoteblock|verseblock">` + attribution     |
//! | open / example / sidebar | titled `<div class="…block"><div class="content">` |
//! | thematic_break   | `<hr>`                                                  |
//! | page_break       | `<div style="page-break-after: always;">`               |
//! | pass             | raw content, no wrapper                                 |
//! | floating_title   | `<hN class="float">`                                    |
//! | toc              | `<div id="toc">` + nested `<ul class="sectlevelN">`     |
//! | (unknown)        | raw content, no wrapper                                 |
//!
//! # Output Modes
//!
//! By default the backend produces an embeddable fragment (header, content,
//! footnotes, in that order). With [`HtmlOptions::standalone`] the fragment
//! is wrapped in a complete page: doctype, escaped `<title>`, viewport and
//! generator meta tags, and the baseline stylesheet embedded in `<style>`,
//! with optional custom CSS appended after it.

mod convert;
mod dom;
mod outline;
mod serializer;

pub use serializer::render_document;

use crate::ast::Document;
use crate::backend::Backend;
use crate::error::RenderError;

/// Options for HTML rendering.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete page with embedded CSS.
    pub standalone: bool,
    /// Optional custom CSS appended after the baseline stylesheet.
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Backend implementation for HTML
pub struct HtmlBackend {
    options: HtmlOptions,
}

impl HtmlBackend {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Fragment output (the default).
    pub fn fragment() -> Self {
        Self::new(HtmlOptions::default())
    }

    /// Complete-page output with embedded CSS.
    pub fn standalone() -> Self {
        Self::new(HtmlOptions::new().with_standalone(true))
    }
}

impl Default for HtmlBackend {
    fn default() -> Self {
        Self::fragment()
    }
}

impl Backend for HtmlBackend {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 output built from the parsed block tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn convert(&self, doc: &Document) -> Result<String, RenderError> {
        render_document(doc, &self.options)
    }

    fn convert_with_options(
        &self,
        doc: &Document,
        options: &std::collections::HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let mut opts = self.options.clone();
        if let Some(value) = options.get("standalone") {
            opts.standalone = value == "true";
        }
        if let Some(css) = options.get("custom-css") {
            opts.custom_css = Some(css.clone());
        }
        render_document(doc, &opts)
    }
}
