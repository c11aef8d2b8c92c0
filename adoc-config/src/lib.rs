//! Shared configuration loader for the adoc-render toolchain.
//!
//! `defaults/adoc.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`AdocConfig`].

use adoc_html::ast::AttrMap;
use adoc_html::html::HtmlOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/adoc.default.toml");

/// Top-level configuration consumed by adoc-render applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AdocConfig {
    /// Default document attributes, applied wherever a document does not set
    /// its own value.
    pub attributes: BTreeMap<String, String>,
    pub html: HtmlConfig,
}

impl AdocConfig {
    /// The attribute defaults as a seed map for documents.
    ///
    /// Merge with `AttrMap::merge_defaults` so document-provided values win.
    pub fn default_attributes(&self) -> AttrMap {
        let mut attrs = AttrMap::new();
        for (name, value) in &self.attributes {
            attrs.set(name.clone(), value.clone());
        }
        attrs
    }
}

/// HTML output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
    #[serde(default)]
    pub custom_css: Option<String>,
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            standalone: config.standalone,
            custom_css: config.custom_css.clone().filter(|css| !css.is_empty()),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AdocConfig, ConfigError> {
    Loader::new().build()
}
