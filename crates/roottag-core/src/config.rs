//! Layered preferences
//!
//! The only persisted setting is the path to the GameObject type list.
//! It is loaded with three layers of precedence (highest wins):
//! 1. Environment variable: `ROOTTAG_GAMEOBJECT_LIST`
//! 2. Project-local: `.roottag/config.toml`
//! 3. Global: `~/.roottag/config.toml`

use crate::error::{Result, RootTagError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the type list path
pub const GAMEOBJECT_LIST_ENV: &str = "ROOTTAG_GAMEOBJECT_LIST";

/// Project-local config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".roottag/config.toml";

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    preferences: Preferences,
}

/// Add-on preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Path to the GameObject type list, usually in the project's working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gameobject_list: Option<PathBuf>,
}

impl Preferences {
    /// Preferences pointing at a specific type list
    pub fn with_list(path: impl Into<PathBuf>) -> Self {
        Self {
            gameobject_list: Some(path.into()),
        }
    }

    /// Load preferences with layered precedence: global < project < env var
    pub fn load() -> Result<Self> {
        let mut prefs = Preferences::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                prefs.merge(Self::load_from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            prefs.merge(Self::load_from_file(&local_path)?);
        }

        if let Ok(list) = std::env::var(GAMEOBJECT_LIST_ENV) {
            prefs.merge(Preferences::with_list(list));
        }

        Ok(prefs)
    }

    /// Load preferences from a specific file path only
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: PreferencesFile = toml::from_str(&content).map_err(|e| {
            RootTagError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(file.preferences)
    }

    /// Write preferences to a file, creating parent directories as needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = PreferencesFile {
            preferences: self.clone(),
        };
        std::fs::write(path, toml::to_string_pretty(&file)?)?;
        Ok(())
    }

    /// The configured type list path, treating an empty string as unset
    pub fn type_list_path(&self) -> Option<&Path> {
        self.gameobject_list
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Human-readable form of the configured path for guidance messages
    pub fn display_path(&self) -> String {
        self.type_list_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    fn merge(&mut self, overlay: Preferences) {
        if overlay.type_list_path().is_some() {
            self.gameobject_list = overlay.gameobject_list;
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".roottag").join("config.toml"))
    }
}
