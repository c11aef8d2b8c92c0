//! Backend registry for discovery and selection
//!
//! This module provides a centralized registry for all available output
//! backends. Backends can be registered and retrieved by name.

use crate::ast::Document;
use crate::backend::Backend;
use crate::error::RenderError;
use std::collections::HashMap;

/// Registry of output backends
///
/// # Examples
///
/// ```ignore
/// let mut registry = BackendRegistry::new();
/// registry.register(MyBackend);
///
/// let backend = registry.get("my-backend")?;
/// let html = backend.convert(&doc)?;
/// ```
pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn Backend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend
    ///
    /// If a backend with the same name already exists, it will be replaced.
    pub fn register<B: Backend + 'static>(&mut self, backend: B) {
        self.backends
            .insert(backend.name().to_string(), Box::new(backend));
    }

    /// Get a backend by name
    pub fn get(&self, name: &str) -> Result<&dyn Backend, RenderError> {
        self.backends
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| RenderError::BackendNotFound(name.to_string()))
    }

    /// Check if a backend exists
    pub fn has(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    /// List all available backend names (sorted)
    pub fn list_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect a backend from an output filename based on its extension
    ///
    /// Returns the backend name if a matching extension is found.
    pub fn detect_backend_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for backend in self.backends.values() {
            if backend.file_extensions().contains(&extension) {
                return Some(backend.name().to_string());
            }
        }

        None
    }

    /// Render a document using the named backend
    pub fn convert(&self, doc: &Document, backend: &str) -> Result<String, RenderError> {
        self.get(backend)?.convert(doc)
    }

    /// Render a document using the named backend and options
    pub fn convert_with_options(
        &self,
        doc: &Document,
        backend: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        self.get(backend)?.convert_with_options(doc, options)
    }

    /// Create a registry with the default backends
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::html::HtmlBackend::default());
        registry
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
