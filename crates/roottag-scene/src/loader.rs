//! Scene loading from TOML files

use crate::format::SceneFile;
use crate::properties::ObjectProperties;
use crate::world::SceneWorld;
use roottag_core::{Result, RootTagError};
use std::fs;
use std::path::Path;

/// Load a scene from a TOML file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<(SceneWorld, SceneFile)> {
    let content = fs::read_to_string(path)?;
    load_scene_string(&content)
}

/// Load a scene from a TOML string
pub fn load_scene_string(content: &str) -> Result<(SceneWorld, SceneFile)> {
    let scene_file: SceneFile = toml::from_str(content)?;
    let mut world = SceneWorld::new();

    for (name, def) in &scene_file.objects {
        let id = world.spawn(name.clone(), def.kind)?;
        if let Some(props) = world.properties_mut(id) {
            *props = ObjectProperties::from(def.properties.clone());
        }
    }

    if let Some(active) = &scene_file.scene.active {
        world.set_active_by_name(active).map_err(|_| {
            RootTagError::SceneError(format!("Active object '{}' is not in the scene", active))
        })?;
    }

    Ok((world, scene_file))
}
