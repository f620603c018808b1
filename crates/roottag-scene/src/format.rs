//! Scene file format definitions
//!
//! Scenes are only read through these types; writes go through
//! [`crate::SceneDocument`] so the user's formatting survives.

use crate::object::ObjectKind;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Root structure of a scene TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    pub scene: SceneMetadata,
    #[serde(default)]
    pub objects: BTreeMap<String, ObjectDef>,
}

/// Scene metadata
#[derive(Debug, Clone, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Name of the active object
    #[serde(default)]
    pub active: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Definition of an object in a scene file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectDef {
    #[serde(default)]
    pub kind: ObjectKind,
    /// Custom properties - all other keys are treated as properties
    #[serde(flatten)]
    pub properties: BTreeMap<String, toml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_file_deserialization() {
        let toml_str = r#"
[scene]
name = "Level 1"
active = "cam"

[objects.door_a]
ObjectType = "Door"

[objects.cam]
kind = "camera"
IsMainCamera = true
"#;

        let scene: SceneFile = toml::from_str(toml_str).unwrap();
        assert_eq!(scene.scene.name, "Level 1");
        assert_eq!(scene.scene.version, "1.0");
        assert_eq!(scene.scene.active.as_deref(), Some("cam"));

        let door = &scene.objects["door_a"];
        assert_eq!(door.kind, ObjectKind::Mesh);
        assert_eq!(door.properties["ObjectType"].as_str(), Some("Door"));

        let cam = &scene.objects["cam"];
        assert_eq!(cam.kind, ObjectKind::Camera);
        assert!(!cam.properties.contains_key("kind"));
    }
}
