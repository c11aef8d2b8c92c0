//! Error types for rendering operations

use std::fmt;

/// Errors that can occur while rendering a document
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Backend not found in registry
    BackendNotFound(String),
    /// Error while serializing the output tree
    SerializationError(String),
    /// Operation not supported by the backend
    NotSupported(String),
    /// Highlighter registration collided with a built-in adapter name
    ReservedHighlighterName(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::BackendNotFound(name) => write!(f, "Backend '{name}' not found"),
            RenderError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            RenderError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            RenderError::ReservedHighlighterName(name) => {
                write!(f, "Highlighter name '{name}' is reserved by a built-in adapter")
            }
        }
    }
}

impl std::error::Error for RenderError {}
