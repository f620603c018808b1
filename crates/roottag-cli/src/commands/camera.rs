//! Main camera flag

use super::open::OpenScene;
use anyhow::Result;
use roottag_sync::CommandStatus;
use std::path::Path;

pub fn run(scene_path: &str, object: Option<&str>, list: Option<&Path>) -> Result<()> {
    let mut open = OpenScene::open(scene_path, object, list)?;

    if open.session.set_main_camera(&mut open.world) == CommandStatus::Cancelled {
        open.close();
        anyhow::bail!("Failed to set main camera; the active object must be a camera");
    }

    open.save()?;
    println!(
        "Main camera: {}",
        open.active_name().unwrap_or("<none>")
    );
    open.close();
    Ok(())
}
