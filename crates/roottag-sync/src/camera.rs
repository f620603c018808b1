//! The main-camera marker

use roottag_core::keys::MAIN_CAMERA_KEY;
use roottag_core::{ObjectId, Result, RootTagError};
use roottag_scene::ObjectStore;
use tracing::info;

/// Mark `object` as the scene's main camera, unmarking any other object
pub fn set_main_camera<S: ObjectStore>(store: &mut S, object: ObjectId) -> Result<()> {
    let kind = store
        .object_kind(object)
        .ok_or_else(|| RootTagError::ObjectNotFound(object.to_string()))?;
    if !kind.is_camera() {
        return Err(RootTagError::NotACamera(store.object_label(object)));
    }

    for id in store.object_ids() {
        if id != object && store.remove_key(id, MAIN_CAMERA_KEY) {
            info!(object = %store.object_label(id), "no longer the main camera");
        }
    }

    store.set_bool(object, MAIN_CAMERA_KEY, true)?;
    info!(object = %store.object_label(object), "set as main camera");
    Ok(())
}

/// The object currently marked as main camera
pub fn main_camera<S: ObjectStore>(store: &S) -> Option<ObjectId> {
    store
        .object_ids()
        .into_iter()
        .find(|id| store.get_bool(*id, MAIN_CAMERA_KEY).unwrap_or(false))
}
