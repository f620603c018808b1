//! Structure-preserving TOML scene patcher
//!
//! Uses `toml_edit` to modify only the tagging keys in a scene file,
//! preserving comments, formatting, and ordering of everything else.
//! Tag commands touch one or two keys, so the diff stays minimal.

use crate::world::SceneWorld;
use roottag_core::{Result, RootTagError};
use std::fs;
use std::path::Path;

/// A parsed scene document that can be patched key-by-key
pub struct SceneDocument {
    doc: toml_edit::DocumentMut,
}

impl SceneDocument {
    /// Parse a scene file into an editable document
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse a TOML string into an editable document
    pub fn parse(content: &str) -> Result<Self> {
        let doc: toml_edit::DocumentMut = content
            .parse()
            .map_err(|e| RootTagError::TomlParseError(format!("{}", e)))?;
        Ok(Self { doc })
    }

    fn object_table(&mut self, object: &str) -> Result<&mut dyn toml_edit::TableLike> {
        let objects = self
            .doc
            .get_mut("objects")
            .and_then(|v| v.as_table_like_mut())
            .ok_or_else(|| RootTagError::SceneError("No [objects] table in scene file".to_string()))?;

        objects
            .get_mut(object)
            .and_then(|v| v.as_table_like_mut())
            .ok_or_else(|| {
                RootTagError::SceneError(format!("Object '{}' not found in scene file", object))
            })
    }

    /// Set a custom property on an object.
    /// Navigates to `objects.<object>.<key>` and sets the value.
    pub fn set_property(&mut self, object: &str, key: &str, value: &toml::Value) -> Result<()> {
        let table = self.object_table(object)?;
        let edit_value = toml_to_edit_value(key, value)?;

        // Keep the existing decor (e.g. trailing comments) when overwriting
        match table.get_mut(key).and_then(|item| item.as_value_mut()) {
            Some(existing) => {
                let decor = existing.decor().clone();
                *existing = edit_value;
                *existing.decor_mut() = decor;
            }
            None => {
                table.insert(key, toml_edit::Item::Value(edit_value));
            }
        }
        Ok(())
    }

    /// Remove a custom property from an object, returning whether it was present
    pub fn remove_property(&mut self, object: &str, key: &str) -> Result<bool> {
        let table = self.object_table(object)?;
        Ok(table.remove(key).is_some())
    }

    /// Set or clear `scene.active`
    pub fn set_active(&mut self, object: Option<&str>) -> Result<()> {
        let scene = self
            .doc
            .get_mut("scene")
            .and_then(|v| v.as_table_like_mut())
            .ok_or_else(|| RootTagError::SceneError("No [scene] table in scene file".to_string()))?;

        match object {
            Some(name) => {
                scene.insert("active", toml_edit::value(name));
            }
            None => {
                scene.remove("active");
            }
        }
        Ok(())
    }

    /// Bring `keys` on every object, and the active object, in line with the world
    pub fn apply_world(&mut self, world: &SceneWorld, keys: &[&str]) -> Result<()> {
        for info in world.all_objects() {
            for key in keys {
                match info.properties.get(key) {
                    Some(value) => self.set_property(&info.name, key, value)?,
                    None => {
                        self.remove_property(&info.name, key)?;
                    }
                }
            }
        }

        let active = world.active().and_then(|id| world.get_name(id));
        self.set_active(active)
    }

    /// Serialize the document back to a string (preserving formatting)
    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    /// Write the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Convert a tagging value to its `toml_edit` form; only scalars are written
fn toml_to_edit_value(key: &str, value: &toml::Value) -> Result<toml_edit::Value> {
    match value {
        toml::Value::String(s) => Ok(toml_edit::Value::from(s.as_str())),
        toml::Value::Integer(i) => Ok(toml_edit::Value::from(*i)),
        toml::Value::Boolean(b) => Ok(toml_edit::Value::from(*b)),
        other => Err(RootTagError::SceneError(format!(
            "Cannot write {} value for '{}'",
            other.type_str(),
            key
        ))),
    }
}
