//! The host object storage consumed by the sync engine

use crate::object::ObjectKind;
use crate::world::SceneWorld;
use roottag_core::{ObjectId, Result};

/// Per-object key/value storage plus the selection state of a scene.
///
/// The sync engine only talks to the scene through this trait, so any
/// editor that can get/set/delete a keyed value on its objects can host it.
pub trait ObjectStore {
    /// Every object in the scene
    fn object_ids(&self) -> Vec<ObjectId>;

    /// The active object, if any
    fn active_object(&self) -> Option<ObjectId>;

    fn object_kind(&self, id: ObjectId) -> Option<ObjectKind>;

    /// Human-readable label for diagnostics
    fn object_label(&self, id: ObjectId) -> String {
        id.to_string()
    }

    /// Whether `key` is present on the object, whatever its value type
    fn has_key(&self, id: ObjectId, key: &str) -> bool;

    fn get_string(&self, id: ObjectId, key: &str) -> Option<String>;

    fn set_string(&mut self, id: ObjectId, key: &str, value: &str) -> Result<()>;

    fn get_bool(&self, id: ObjectId, key: &str) -> Option<bool>;

    fn set_bool(&mut self, id: ObjectId, key: &str, value: bool) -> Result<()>;

    /// Remove `key` from the object, returning whether it was present
    fn remove_key(&mut self, id: ObjectId, key: &str) -> bool;
}

impl ObjectStore for SceneWorld {
    fn object_ids(&self) -> Vec<ObjectId> {
        self.ids()
    }

    fn active_object(&self) -> Option<ObjectId> {
        self.active()
    }

    fn object_kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.kind(id)
    }

    fn object_label(&self, id: ObjectId) -> String {
        self.get_name(id)
            .map(String::from)
            .unwrap_or_else(|| id.to_string())
    }

    fn has_key(&self, id: ObjectId, key: &str) -> bool {
        self.properties(id).map(|p| p.has(key)).unwrap_or(false)
    }

    fn get_string(&self, id: ObjectId, key: &str) -> Option<String> {
        self.properties(id)?.get_str(key).map(String::from)
    }

    fn set_string(&mut self, id: ObjectId, key: &str, value: &str) -> Result<()> {
        self.set_property(id, key, toml::Value::String(value.to_string()))
    }

    fn get_bool(&self, id: ObjectId, key: &str) -> Option<bool> {
        self.properties(id)?.get_bool(key)
    }

    fn set_bool(&mut self, id: ObjectId, key: &str, value: bool) -> Result<()> {
        self.set_property(id, key, toml::Value::Boolean(value))
    }

    fn remove_key(&mut self, id: ObjectId, key: &str) -> bool {
        self.properties_mut(id)
            .and_then(|p| p.remove(key))
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_roundtrip_through_store() {
        let mut world = SceneWorld::new();
        let id = world.spawn("Crate", ObjectKind::Mesh).unwrap();

        world.set_string(id, "ObjectType", "Pickup").unwrap();
        assert!(world.has_key(id, "ObjectType"));
        assert_eq!(world.get_string(id, "ObjectType").as_deref(), Some("Pickup"));

        assert!(world.remove_key(id, "ObjectType"));
        assert!(!world.remove_key(id, "ObjectType"));
        assert_eq!(world.get_string(id, "ObjectType"), None);
    }

    #[test]
    fn test_non_string_value_still_has_key() {
        let mut world = SceneWorld::new();
        let id = world.spawn("Crate", ObjectKind::Mesh).unwrap();
        world.set_bool(id, "ObjectType", true).unwrap();

        assert!(world.has_key(id, "ObjectType"));
        assert_eq!(world.get_string(id, "ObjectType"), None);
    }

    #[test]
    fn test_unknown_object() {
        let mut world = SceneWorld::new();
        let ghost = ObjectId::from_raw(u64::MAX);

        assert!(!world.has_key(ghost, "ObjectType"));
        assert!(world.set_string(ghost, "ObjectType", "Door").is_err());
        assert!(!world.remove_key(ghost, "ObjectType"));
        assert_eq!(world.object_label(ghost), ghost.to_string());
    }
}
