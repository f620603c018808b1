//! Remove tags naming types that are no longer in the list

use super::open::{preferences, OpenScene};
use anyhow::Result;
use roottag_core::keys::TYPE_TAG_KEY;
use roottag_core::Preferences;
use roottag_scene::ObjectStore;
use roottag_sync::CommandStatus;
use std::path::Path;

pub fn run(scene_path: &str, list: Option<&Path>) -> Result<()> {
    purge(scene_path, preferences(list)?)
}

fn purge(scene_path: &str, prefs: Preferences) -> Result<()> {
    if prefs.type_list_path().is_none() {
        anyhow::bail!(
            "No GameObject type list configured; use `roottag config set-list <path>` or --list"
        );
    }

    let mut open = OpenScene::open_with(scene_path, None, prefs)?;
    let before = tagged_count(&open);

    // An unreadable list leaves only "None", which would purge every tag
    let report = open.session.refresh_types(Some(&open.world));
    if !report.source_readable {
        let path = open.session.preferences().display_path();
        open.close();
        anyhow::bail!("Type list {} could not be read; refusing to purge", path);
    }

    if open.session.purge_stale(&mut open.world) == CommandStatus::Cancelled {
        open.close();
        anyhow::bail!("Please update the GameObject type list before doing this!");
    }

    open.save()?;
    println!(
        "Removed {} stale GameObject type(s); {} type(s) known",
        before - tagged_count(&open),
        report.types
    );
    open.close();
    Ok(())
}

fn tagged_count(open: &OpenScene) -> usize {
    open.world
        .object_ids()
        .into_iter()
        .filter(|id| open.world.has_key(*id, TYPE_TAG_KEY))
        .count()
}
