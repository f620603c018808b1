//! Keeping the dropdown in step with the active object

use crate::context::SyncContext;
use roottag_core::keys::{NONE_TYPE, TYPE_TAG_KEY};
use roottag_core::ObjectId;
use roottag_scene::ObjectStore;
use roottag_types::EnumerationDomain;

/// The value the dropdown should show for `object` under `domain`.
///
/// Untagged objects, non-string tags and tags naming a type the domain no
/// longer has all resolve to "None".
pub fn resolve_display_value<S: ObjectStore>(
    domain: &EnumerationDomain,
    store: &S,
    object: ObjectId,
) -> String {
    match store.get_string(object, TYPE_TAG_KEY) {
        Some(tag) if domain.contains(&tag) => tag,
        _ => NONE_TYPE.to_string(),
    }
}

/// Handler for selection changes and scene graph updates.
///
/// Writes the active object's resolved type straight into the display
/// field. It never goes through `on_value_changed` and only reads the
/// scene, so observing a selection cannot create, change or delete a tag.
/// Returns the displayed value, or `None` when there is no scene or no
/// active object.
pub fn on_selection_or_graph_changed<'c, S: ObjectStore>(
    ctx: &'c mut SyncContext,
    scene: Option<&S>,
) -> Option<&'c str> {
    let scene = scene?;
    let active = scene.active_object()?;

    let value = resolve_display_value(ctx.current_domain(), scene, active);
    ctx.set_display(&value);
    Some(ctx.display_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roottag_scene::{ObjectKind, SceneWorld};

    fn scene_with_tag(tag: Option<&str>) -> (SceneWorld, ObjectId) {
        let mut world = SceneWorld::new();
        let id = world.spawn("B", ObjectKind::Mesh).unwrap();
        if let Some(tag) = tag {
            world.set_string(id, TYPE_TAG_KEY, tag).unwrap();
        }
        world.set_active(Some(id)).unwrap();
        (world, id)
    }

    #[test]
    fn test_untagged_object_shows_none_without_creating_tag() {
        let (world, id) = scene_with_tag(None);
        let mut ctx = SyncContext::new();
        ctx.install_domain(EnumerationDomain::from_names(&["Enemy"]));

        assert_eq!(on_selection_or_graph_changed(&mut ctx, Some(&world)), Some("None"));
        assert!(!world.has_key(id, TYPE_TAG_KEY));
    }

    #[test]
    fn test_known_tag_is_displayed() {
        let (world, _) = scene_with_tag(Some("Enemy"));
        let mut ctx = SyncContext::new();
        ctx.install_domain(EnumerationDomain::from_names(&["Enemy"]));

        assert_eq!(on_selection_or_graph_changed(&mut ctx, Some(&world)), Some("Enemy"));
        assert_eq!(ctx.display_value(), "Enemy");
    }

    #[test]
    fn test_stale_tag_falls_back_to_none_and_is_kept() {
        let (world, id) = scene_with_tag(Some("Pickup"));
        let mut ctx = SyncContext::new();
        ctx.install_domain(EnumerationDomain::from_names(&["Enemy"]));

        assert_eq!(on_selection_or_graph_changed(&mut ctx, Some(&world)), Some("None"));
        assert_eq!(world.get_string(id, TYPE_TAG_KEY).as_deref(), Some("Pickup"));
    }

    #[test]
    fn test_without_domain_only_none_is_known() {
        let (world, _) = scene_with_tag(Some("Enemy"));
        let mut ctx = SyncContext::new();

        assert_eq!(on_selection_or_graph_changed(&mut ctx, Some(&world)), Some("None"));
    }

    #[test]
    fn test_no_scene_or_no_active_object_is_noop() {
        let mut ctx = SyncContext::new();
        ctx.install_domain(EnumerationDomain::from_names(&["Enemy"]));
        ctx.set_display("Enemy");

        assert_eq!(on_selection_or_graph_changed::<SceneWorld>(&mut ctx, None), None);
        assert_eq!(ctx.display_value(), "Enemy");

        let world = SceneWorld::new();
        assert_eq!(on_selection_or_graph_changed(&mut ctx, Some(&world)), None);
        assert_eq!(ctx.display_value(), "Enemy");
    }

    #[test]
    fn test_non_string_tag_shows_none() {
        let (mut world, id) = scene_with_tag(None);
        world.set_bool(id, TYPE_TAG_KEY, true).unwrap();
        let domain = EnumerationDomain::from_names(&["Enemy"]);

        assert_eq!(resolve_display_value(&domain, &world, id), "None");
    }
}
