//! SceneWorld - the objects of one scene with their custom properties

use crate::object::{ObjectInfo, ObjectKind};
use crate::properties::ObjectProperties;
use bimap::BiMap;
use roottag_core::{ObjectId, Result, RootTagError};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct ObjectEntry {
    kind: ObjectKind,
    properties: ObjectProperties,
}

/// The objects of a scene
///
/// Provides:
/// - Stable ObjectId <-> unique name mapping
/// - Per-object custom property storage
/// - The active object, which may be absent
#[derive(Debug, Default)]
pub struct SceneWorld {
    /// Bidirectional mapping: object name <-> ObjectId
    names: BiMap<String, ObjectId>,
    objects: HashMap<ObjectId, ObjectEntry>,
    active: Option<ObjectId>,
    /// Last id handed out; ids are never reused within a world
    last_id: u64,
}

impl SceneWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new object with a name
    pub fn spawn(&mut self, name: impl Into<String>, kind: ObjectKind) -> Result<ObjectId> {
        let name = name.into();

        if self.names.contains_left(&name) {
            return Err(RootTagError::DuplicateObjectName(name));
        }

        self.last_id += 1;
        let id = ObjectId::from_raw(self.last_id);
        self.names.insert(name, id);
        self.objects.insert(
            id,
            ObjectEntry {
                kind,
                properties: ObjectProperties::new(),
            },
        );

        Ok(id)
    }

    /// Get object ID by name
    pub fn get_id(&self, name: &str) -> Option<ObjectId> {
        self.names.get_by_left(name).copied()
    }

    /// Get object name by ID
    pub fn get_name(&self, id: ObjectId) -> Option<&str> {
        self.names.get_by_right(&id).map(|s| s.as_str())
    }

    /// Get an object's kind
    pub fn kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.objects.get(&id).map(|o| o.kind)
    }

    /// Get an object's custom properties
    pub fn properties(&self, id: ObjectId) -> Option<&ObjectProperties> {
        self.objects.get(&id).map(|o| &o.properties)
    }

    /// Get an object's custom properties mutably
    pub fn properties_mut(&mut self, id: ObjectId) -> Option<&mut ObjectProperties> {
        self.objects.get_mut(&id).map(|o| &mut o.properties)
    }

    /// Set a custom property on an object
    pub fn set_property(&mut self, id: ObjectId, key: &str, value: toml::Value) -> Result<()> {
        let props = self
            .properties_mut(id)
            .ok_or_else(|| RootTagError::ObjectNotFound(id.to_string()))?;
        props.set(key, value);
        Ok(())
    }

    /// Make an object active, or clear the active object with `None`
    pub fn set_active(&mut self, id: Option<ObjectId>) -> Result<()> {
        if let Some(id) = id {
            if !self.contains(id) {
                return Err(RootTagError::ObjectNotFound(id.to_string()));
            }
        }
        self.active = id;
        Ok(())
    }

    /// Make an object active by name
    pub fn set_active_by_name(&mut self, name: &str) -> Result<ObjectId> {
        let id = self
            .get_id(name)
            .ok_or_else(|| RootTagError::ObjectNotFound(name.to_string()))?;
        self.active = Some(id);
        Ok(id)
    }

    /// The active object, if any
    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }

    /// All object IDs, ordered by object name
    pub fn ids(&self) -> Vec<ObjectId> {
        let mut named: Vec<(&String, &ObjectId)> = self.names.iter().collect();
        named.sort_by(|a, b| a.0.cmp(b.0));
        named.into_iter().map(|(_, id)| *id).collect()
    }

    /// Get info about all objects, ordered by name
    pub fn all_objects(&self) -> Vec<ObjectInfo> {
        self.ids()
            .into_iter()
            .filter_map(|id| {
                let entry = self.objects.get(&id)?;
                Some(ObjectInfo {
                    id,
                    name: self.get_name(id)?.to_string(),
                    kind: entry.kind,
                    properties: entry.properties.clone(),
                })
            })
            .collect()
    }

    /// Get number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check if an object exists
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }
}
