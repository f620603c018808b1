//! roottag Scene - the host side of the type tagger
//!
//! Holds scene objects with their custom properties, exposes them to the
//! sync engine through the `ObjectStore` trait, reads TOML scene files and
//! patches them in place.

mod format;
mod loader;
mod object;
pub mod patcher;
mod properties;
mod store;
mod world;

pub use format::{ObjectDef, SceneFile, SceneMetadata};
pub use loader::{load_scene, load_scene_string};
pub use object::{ObjectInfo, ObjectKind};
pub use patcher::SceneDocument;
pub use properties::ObjectProperties;
pub use store::ObjectStore;
pub use world::SceneWorld;
