//! Per-object custom property storage

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Custom properties attached to a scene object, stored as TOML values
///
/// Keys are free-form; the type tagger only touches its own well-known keys
/// and leaves everything else alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectProperties {
    data: BTreeMap<String, toml::Value>,
}

impl ObjectProperties {
    /// Create empty properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property by key
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.data.get(key)
    }

    /// Get a string property; non-string values read as `None`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Get a boolean property; non-boolean values read as `None`
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(|v| v.as_bool())
    }

    /// Set a property
    pub fn set(&mut self, key: impl Into<String>, value: toml::Value) {
        self.data.insert(key.into(), value);
    }

    /// Remove a property, returning its old value
    pub fn remove(&mut self, key: &str) -> Option<toml::Value> {
        self.data.remove(key)
    }

    /// Check if a property exists
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl From<BTreeMap<String, toml::Value>> for ObjectProperties {
    fn from(data: BTreeMap<String, toml::Value>) -> Self {
        Self { data }
    }
}
