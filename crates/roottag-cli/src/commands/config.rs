//! Preference commands

use super::open::preferences;
use anyhow::{Context, Result};
use clap::Subcommand;
use roottag_core::{Preferences, GAMEOBJECT_LIST_ENV, PROJECT_CONFIG_PATH};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective preferences
    Show,

    /// Set the GameObject type list for this project
    SetList {
        /// Path to the type list file
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCommands, list: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(list),
        ConfigCommands::SetList { path } => set_list(&path, Path::new(PROJECT_CONFIG_PATH)),
    }
}

fn show(list: Option<&Path>) -> Result<()> {
    let prefs = preferences(list)?;
    match prefs.type_list_path() {
        Some(path) => {
            println!("gameobject_list = \"{}\"", path.display());
            if list.is_none() && std::env::var_os(GAMEOBJECT_LIST_ENV).is_some() {
                println!("(overridden by {})", GAMEOBJECT_LIST_ENV);
            }
            if !path.exists() {
                eprintln!("Warning: {} does not exist", path.display());
            }
        }
        None => println!("gameobject_list is not set"),
    }
    Ok(())
}

fn set_list(path: &Path, config_path: &Path) -> Result<()> {
    let mut prefs = if config_path.exists() {
        Preferences::load_from_file(config_path).context("Failed to read project config")?
    } else {
        Preferences::default()
    };
    prefs.gameobject_list = Some(path.to_path_buf());
    prefs
        .save_to_file(config_path)
        .context("Failed to write project config")?;

    println!("GameObject type list set to {}", path.display());
    Ok(())
}
