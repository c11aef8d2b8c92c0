//! Backend trait definition
//!
//! This module defines the core Backend trait that all output backends must
//! implement. The trait provides a uniform interface for rendering a parsed
//! document into a target representation.

use crate::ast::Document;
use crate::error::RenderError;
use std::collections::HashMap;

/// Trait for output backends
///
/// Implementors render a read-only document tree into their target markup.
/// Rendering is pure: one call performs one traversal and returns a complete
/// result, with no state shared between calls.
///
/// # Examples
///
/// ```ignore
/// struct MyBackend;
///
/// impl Backend for MyBackend {
///     fn name(&self) -> &str {
///         "my-backend"
///     }
///
///     fn convert(&self, doc: &Document) -> Result<String, RenderError> {
///         // Render doc to the target representation
///         todo!()
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// The name of this backend (e.g., "html")
    fn name(&self) -> &str;

    /// Optional description of this backend
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this backend's output (e.g.,
    /// ["html", "htm"]), without the leading dot. Used for automatic
    /// backend detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a document with this backend's default options.
    fn convert(&self, doc: &Document) -> Result<String, RenderError>;

    /// Render a document, optionally adjusting backend-specific options.
    ///
    /// Backends without extra parameters can rely on the default
    /// implementation, which delegates to [`Backend::convert`].
    fn convert_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        if options.is_empty() {
            self.convert(doc)
        } else {
            Err(RenderError::NotSupported(format!(
                "Backend '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
