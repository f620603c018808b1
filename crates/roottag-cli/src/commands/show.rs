//! Print the type panel for the active object

use super::open::OpenScene;
use anyhow::Result;
use std::path::Path;

pub fn run(scene_path: &str, object: Option<&str>, list: Option<&Path>) -> Result<()> {
    let open = OpenScene::open(scene_path, object, list)?;

    match open.active_name() {
        Some(name) => println!("Active object: {}", name),
        None => println!("No active object"),
    }
    println!("{}", open.session.panel(Some(&open.world)));

    open.close();
    Ok(())
}
