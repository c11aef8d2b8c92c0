//! Attribute maps attached to documents and blocks.
//!
//! AsciiDoc attributes are stringly typed at the source level, but upstream
//! parsers hand numeric and boolean values through as such (`sectnumlevels`,
//! set-flags like `noheader`). Lookups therefore come in typed flavors with
//! explicit defaults; a missing attribute is never an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl AttrValue {
    /// String form of the value, used wherever it flows into markup.
    pub fn to_text(&self) -> String {
        match self {
            AttrValue::Bool(value) => value.to_string(),
            AttrValue::Int(value) => value.to_string(),
            AttrValue::Str(value) => value.clone(),
        }
    }

    /// Numeric form, parsing string values when possible.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(value) => Some(*value),
            AttrValue::Str(value) => value.trim().parse().ok(),
            AttrValue::Bool(_) => None,
        }
    }

    /// An attribute counts as set unless it is explicitly false.
    /// The empty string is the conventional set-flag form.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Bool(value) => *value,
            AttrValue::Int(_) => true,
            AttrValue::Str(value) => value != "false",
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// Ordered name → value map, deterministic to iterate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap(BTreeMap<String, AttrValue>);

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Present and not explicitly false.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(AttrValue::is_truthy)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(AttrValue::to_text)
    }

    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.text(name).unwrap_or_else(|| default.to_string())
    }

    pub fn int_or(&self, name: &str, default: i64) -> i64 {
        self.get(name).and_then(AttrValue::as_int).unwrap_or(default)
    }

    /// Overwrite with `other`'s entries (attribute playback during traversal).
    pub fn merge(&mut self, other: &AttrMap) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Fill in `defaults` without clobbering values already present.
    pub fn merge_defaults(&mut self, defaults: &AttrMap) {
        for (name, value) in &defaults.0 {
            self.0.entry(name.clone()).or_insert_with(|| value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
