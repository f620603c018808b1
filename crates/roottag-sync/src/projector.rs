//! Projecting the type list into the enumeration domain

use crate::context::SyncContext;
use crate::selection::on_selection_or_graph_changed;
use roottag_scene::ObjectStore;
use roottag_types::{load_type_list, EnumerationDomain};
use std::path::Path;
use tracing::{info, warn};

/// Outcome of re-reading the type list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    /// Number of type names in the new domain, sentinel excluded
    pub types: usize,
    /// False when the list could not be read and the domain holds only "None"
    pub source_readable: bool,
}

/// Build a domain from `names` and install it, replacing the previous one.
///
/// The active object's displayed value is recomputed right away so the
/// dropdown never shows a selection from the old domain. Callers close the
/// gate before and reopen it after.
pub fn rebuild<'c, S: ObjectStore>(
    ctx: &'c mut SyncContext,
    names: &[String],
    scene: Option<&S>,
) -> &'c EnumerationDomain {
    ctx.install_domain(EnumerationDomain::from_names(names));
    on_selection_or_graph_changed(ctx, scene);
    ctx.current_domain()
}

/// Re-read the type list at `path` and rebuild the domain with the gate closed.
///
/// An unset or unreadable path is not fatal: the domain becomes "None" only
/// and the problem is logged.
pub fn refresh_type_list<S: ObjectStore>(
    ctx: &mut SyncContext,
    path: Option<&Path>,
    scene: Option<&S>,
) -> RefreshReport {
    ctx.set_gate(false);

    let (names, source_readable) = match path {
        Some(path) => match load_type_list(path) {
            Ok(names) => (names, true),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Something went wrong when reading from the GameObject type list! Is the path to the file correct?"
                );
                (Vec::new(), false)
            }
        },
        None => {
            warn!("Please set your GameObject type list in the preferences!");
            (Vec::new(), false)
        }
    };

    ctx.set_source_readable(source_readable);
    let types = rebuild(ctx, &names, scene).len() - 1;
    ctx.set_gate(true);

    info!(types, "GameObject types updated");
    RefreshReport {
        types,
        source_readable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roottag_core::keys::TYPE_TAG_KEY;
    use roottag_scene::{ObjectKind, SceneWorld};
    use std::fs;
    use std::path::PathBuf;

    fn temp_list(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("roottag_sync_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("types.txt");
        fs::write(&path, content).unwrap();
        path
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rebuild_orders_sentinel_first() {
        let mut ctx = SyncContext::new();
        let domain = rebuild::<SceneWorld>(&mut ctx, &names(&["Enemy", "Pickup", "Door"]), None);

        assert_eq!(domain.identifiers(), vec!["None", "Enemy", "Pickup", "Door"]);
    }

    #[test]
    fn test_rebuild_replaces_previous_domain() {
        let mut ctx = SyncContext::new();
        rebuild::<SceneWorld>(&mut ctx, &names(&["Enemy", "Pickup"]), None);
        rebuild::<SceneWorld>(&mut ctx, &names(&["Door"]), None);

        assert_eq!(ctx.current_domain().identifiers(), vec!["None", "Door"]);
    }

    #[test]
    fn test_rebuild_redisplays_active_object() {
        let mut world = SceneWorld::new();
        let id = world.spawn("A", ObjectKind::Mesh).unwrap();
        world.set_string(id, TYPE_TAG_KEY, "Pickup").unwrap();
        world.set_active(Some(id)).unwrap();

        let mut ctx = SyncContext::new();
        rebuild(&mut ctx, &names(&["Pickup"]), Some(&world));
        assert_eq!(ctx.display_value(), "Pickup");

        rebuild(&mut ctx, &names(&["Enemy"]), Some(&world));
        assert_eq!(ctx.display_value(), "None");
        assert_eq!(world.get_string(id, TYPE_TAG_KEY).as_deref(), Some("Pickup"));
    }

    #[test]
    fn test_refresh_reads_list_and_opens_gate() {
        let path = temp_list("Enemy\nPickup\nDoor\n");
        let mut ctx = SyncContext::new();

        let report = refresh_type_list::<SceneWorld>(&mut ctx, Some(path.as_path()), None);

        assert_eq!(report, RefreshReport { types: 3, source_readable: true });
        assert!(ctx.gate().is_open());
        assert!(ctx.source_readable());
        assert_eq!(ctx.current_domain().type_names(), vec!["Enemy", "Pickup", "Door"]);
    }

    #[test]
    fn test_refresh_missing_list_degrades_to_sentinel() {
        let path = std::env::temp_dir().join(format!("roottag_missing_{}.txt", uuid::Uuid::new_v4()));
        let mut ctx = SyncContext::new();

        let report = refresh_type_list::<SceneWorld>(&mut ctx, Some(path.as_path()), None);

        assert_eq!(report, RefreshReport { types: 0, source_readable: false });
        assert!(ctx.has_domain());
        assert!(ctx.gate().is_open());
        assert_eq!(ctx.current_domain().identifiers(), vec!["None"]);
    }

    #[test]
    fn test_refresh_without_path() {
        let mut ctx = SyncContext::new();
        let report = refresh_type_list::<SceneWorld>(&mut ctx, None, None);

        assert!(!report.source_readable);
        assert_eq!(ctx.current_domain().identifiers(), vec!["None"]);
    }
}
