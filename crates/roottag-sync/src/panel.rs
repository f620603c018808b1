//! What the object properties panel shows

use crate::context::SyncContext;
use roottag_core::Preferences;
use roottag_scene::ObjectStore;
use std::fmt;

/// Render-agnostic description of the type panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// No usable type list yet; tell the user how to set one up
    Guidance { configured_path: String },
    /// The type dropdown and its action buttons
    Selector {
        items: Vec<String>,
        current: String,
        can_reset: bool,
        can_set_main_camera: bool,
    },
}

/// Build the panel for the current state
pub fn panel_view<S: ObjectStore>(
    ctx: &SyncContext,
    prefs: &Preferences,
    scene: Option<&S>,
) -> PanelView {
    if !ctx.has_domain() || !ctx.source_readable() {
        return PanelView::Guidance {
            configured_path: prefs.display_path(),
        };
    }

    let active = scene.and_then(|s| s.active_object().map(|id| (s, id)));
    let can_set_main_camera = active
        .and_then(|(s, id)| s.object_kind(id))
        .map(|k| k.is_camera())
        .unwrap_or(false);

    PanelView::Selector {
        items: ctx
            .current_domain()
            .identifiers()
            .into_iter()
            .map(String::from)
            .collect(),
        current: ctx.display_value().to_string(),
        can_reset: active.is_some(),
        can_set_main_camera,
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelView::Guidance { configured_path } => {
                writeln!(f, "Did you set the GameObject list path in the preferences correctly?")?;
                writeln!(f, "Currently set to \"{}\"", configured_path)?;
                write!(f, "Don't forget to run \"roottag types\" to update")
            }
            PanelView::Selector {
                items,
                current,
                can_reset,
                can_set_main_camera,
            } => {
                writeln!(f, "GameObject Type Selection")?;
                for item in items {
                    let marker = if item == current { "*" } else { " " };
                    writeln!(f, " {} {}", marker, item)?;
                }
                write!(f, "Object Type: {}", current)?;
                if *can_reset {
                    write!(f, "\n[Reset GameObject Type]")?;
                }
                if *can_set_main_camera {
                    write!(f, "\n[Set as Main Camera]")?;
                }
                Ok(())
            }
        }
    }
}
