//! Selecting objects and changing their GameObject type

use super::open::OpenScene;
use anyhow::Result;
use roottag_sync::CommandStatus;
use std::path::Path;

/// Make `object` active and save the selection to the scene file
pub fn select(scene_path: &str, object: &str, list: Option<&Path>) -> Result<()> {
    let open = OpenScene::open(scene_path, Some(object), list)?;
    open.save()?;

    println!(
        "Selected '{}' (Object Type: {})",
        object,
        open.session.context().display_value()
    );

    open.close();
    Ok(())
}

/// The dropdown changed to `type_name` for the active object
pub fn set_type(
    scene_path: &str,
    object: Option<&str>,
    type_name: &str,
    list: Option<&Path>,
) -> Result<()> {
    let mut open = OpenScene::open(scene_path, object, list)?;
    let status = open.session.select_type(&mut open.world, type_name);
    finish(open, status, "Failed to set GameObject type")
}

/// Remove the type tag from the active object
pub fn reset(scene_path: &str, object: Option<&str>, list: Option<&Path>) -> Result<()> {
    let mut open = OpenScene::open(scene_path, object, list)?;
    let status = open.session.reset_selected(&mut open.world);
    finish(open, status, "Failed to reset GameObject type")
}

fn finish(open: OpenScene, status: CommandStatus, failure: &str) -> Result<()> {
    if status == CommandStatus::Cancelled {
        open.close();
        anyhow::bail!("{}", failure);
    }

    open.save()?;
    println!(
        "{}: Object Type = {}",
        open.active_name().unwrap_or("<none>"),
        open.session.context().display_value()
    );
    open.close();
    Ok(())
}
