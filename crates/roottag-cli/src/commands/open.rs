//! Loading a scene into a live tagging session and writing it back

use anyhow::{Context, Result};
use roottag_core::keys::{MAIN_CAMERA_KEY, TYPE_TAG_KEY};
use roottag_core::Preferences;
use roottag_scene::{load_scene, SceneDocument, SceneWorld};
use roottag_sync::{EventBus, SceneEvent, Session};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys the tagger may change in a scene file
const TAGGING_KEYS: &[&str] = &[TYPE_TAG_KEY, MAIN_CAMERA_KEY];

/// Preferences for this invocation, with `--list` taking precedence
pub fn preferences(list: Option<&Path>) -> Result<Preferences> {
    match list {
        Some(path) => Ok(Preferences::with_list(path)),
        None => Preferences::load().context("Failed to load preferences"),
    }
}

/// A scene file opened for one command
pub struct OpenScene {
    path: PathBuf,
    pub world: SceneWorld,
    pub bus: EventBus,
    pub session: Session,
}

impl OpenScene {
    /// Load the scene, optionally select `object`, and register a session on it
    pub fn open(scene_path: &str, object: Option<&str>, list: Option<&Path>) -> Result<Self> {
        Self::open_with(scene_path, object, preferences(list)?)
    }

    /// Like [`OpenScene::open`] with preferences already resolved
    pub fn open_with(scene_path: &str, object: Option<&str>, prefs: Preferences) -> Result<Self> {
        let path = PathBuf::from(scene_path);
        if !path.exists() {
            anyhow::bail!("Scene file not found: {}", scene_path);
        }

        let (world, _) = load_scene(&path).context("Failed to load scene")?;
        debug!(scene = %path.display(), objects = world.object_count(), "scene loaded");
        let mut bus = EventBus::new();
        let session = Session::register(prefs, &mut bus, Some(&world));

        let mut open = Self {
            path,
            world,
            bus,
            session,
        };
        if let Some(name) = object {
            open.select(name)?;
        }
        Ok(open)
    }

    /// Make `name` the active object and let the session see the change
    pub fn select(&mut self, name: &str) -> Result<()> {
        self.world
            .set_active_by_name(name)
            .with_context(|| format!("Failed to select object '{}'", name))?;
        self.bus.publish(SceneEvent::HierarchyChanged);
        self.session.pump(&mut self.bus, Some(&self.world));
        Ok(())
    }

    /// Name of the active object, if any
    pub fn active_name(&self) -> Option<&str> {
        self.world.active().and_then(|id| self.world.get_name(id))
    }

    /// Patch the tagging keys and active object back into the scene file
    pub fn save(&self) -> Result<()> {
        let mut doc = SceneDocument::from_file(&self.path).context("Failed to read scene file")?;
        doc.apply_world(&self.world, TAGGING_KEYS)
            .context("Failed to update scene file")?;
        doc.save(&self.path).context("Failed to write scene file")?;
        Ok(())
    }

    /// Tear down the session
    pub fn close(mut self) {
        self.session.unregister(&mut self.bus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roottag_scene::ObjectStore;
    use std::fs;

    const SCENE: &str = r#"# Test level
[scene]
name = "Level"

[objects.crate]
ObjectType = "Pickup" # from the designer

[objects.cam]
kind = "camera"
"#;

    fn temp_scene() -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("roottag_cli_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let scene = dir.join("level.scene.toml");
        fs::write(&scene, SCENE).unwrap();
        let list = dir.join("types.txt");
        fs::write(&list, "Enemy\nPickup\n").unwrap();
        (scene, list)
    }

    #[test]
    fn test_open_missing_scene() {
        let result = OpenScene::open("/nonexistent/level.scene.toml", None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_open_selects_object() {
        let (scene, list) = temp_scene();
        let open = OpenScene::open(scene.to_str().unwrap(), Some("crate"), Some(list.as_path())).unwrap();

        assert_eq!(open.active_name(), Some("crate"));
        assert_eq!(open.session.context().display_value(), "Pickup");
    }

    #[test]
    fn test_open_unknown_object() {
        let (scene, list) = temp_scene();
        assert!(OpenScene::open(scene.to_str().unwrap(), Some("ghost"), Some(list.as_path())).is_err());
    }

    #[test]
    fn test_save_writes_only_tagging_keys() {
        let (scene, list) = temp_scene();
        let mut open = OpenScene::open(scene.to_str().unwrap(), Some("cam"), Some(list.as_path())).unwrap();
        let cam = open.world.get_id("cam").unwrap();
        open.world.set_string(cam, TYPE_TAG_KEY, "Enemy").unwrap();
        open.save().unwrap();
        open.close();

        let content = fs::read_to_string(&scene).unwrap();
        assert!(content.starts_with("# Test level"));
        assert!(content.contains("ObjectType = \"Pickup\" # from the designer"));
        assert!(content.contains("ObjectType = \"Enemy\""));
        assert!(content.contains("active = \"cam\""));
    }
}
