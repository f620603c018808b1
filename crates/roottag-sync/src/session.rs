//! Session - lifecycle and user commands of the type tagger
//!
//! The session owns the sync state, the preferences and the scene event
//! subscription. Each command runs to completion within one call, logs
//! what happened and reports a [`CommandStatus`]; recoverable failures
//! never escape as errors.

use crate::camera;
use crate::consistency::{self, SweepOutcome};
use crate::context::SyncContext;
use crate::events::{EventBus, Subscription};
use crate::panel::{panel_view, PanelView};
use crate::projector::{refresh_type_list, RefreshReport};
use crate::selection::on_selection_or_graph_changed;
use roottag_core::{Preferences, RootTagError};
use roottag_scene::ObjectStore;
use tracing::{debug, info, warn};

/// How a user command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Finished,
    Cancelled,
}

pub struct Session {
    ctx: SyncContext,
    prefs: Preferences,
    subscription: Subscription,
}

impl Session {
    /// Start up: subscribe to scene events and build the type enumeration
    /// if a type list is configured.
    pub fn register<S: ObjectStore>(prefs: Preferences, bus: &mut EventBus, scene: Option<&S>) -> Self {
        info!("Initializing roottag");

        let mut ctx = SyncContext::new();
        ctx.set_gate(false);
        let subscription = Subscription::subscribe(bus);

        match prefs.type_list_path() {
            Some(path) => {
                refresh_type_list(&mut ctx, Some(path), scene);
            }
            None => warn!("Please set your GameObject type list in the preferences!"),
        }

        Self {
            ctx,
            prefs,
            subscription,
        }
    }

    /// Shut down: forget the enumeration and drop the subscription
    pub fn unregister(mut self, bus: &mut EventBus) {
        info!("Uninitializing roottag");
        self.ctx.clear_domain();
        self.ctx.set_gate(false);
        self.subscription.unsubscribe(bus);
    }

    pub fn context(&self) -> &SyncContext {
        &self.ctx
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Handle queued scene events; returns how many were processed
    pub fn pump<S: ObjectStore>(&mut self, bus: &mut EventBus, scene: Option<&S>) -> usize {
        let events = self.subscription.receive(bus);
        for event in &events {
            debug!(%event, "scene event");
            on_selection_or_graph_changed(&mut self.ctx, scene);
        }
        events.len()
    }

    /// The user picked `value` in the type dropdown for the active object
    pub fn select_type<S: ObjectStore>(&mut self, scene: &mut S, value: &str) -> CommandStatus {
        let Some(object) = self.active_or_warn(scene) else {
            return CommandStatus::Cancelled;
        };

        if !self.ctx.current_domain().contains(value) {
            return self.cancel(RootTagError::StaleReference(format!(
                "'{}' is not a known GameObject type",
                value
            )));
        }

        match consistency::on_value_changed(&mut self.ctx, scene, object, value) {
            Ok(_) => CommandStatus::Finished,
            Err(e) => self.cancel(e),
        }
    }

    /// Reset the active object to a default GameObject
    pub fn reset_selected<S: ObjectStore>(&mut self, scene: &mut S) -> CommandStatus {
        let Some(object) = self.active_or_warn(scene) else {
            return CommandStatus::Cancelled;
        };
        consistency::reset_tag(&mut self.ctx, scene, object);
        CommandStatus::Finished
    }

    /// Re-read the type list and rebuild the enumeration
    pub fn refresh_types<S: ObjectStore>(&mut self, scene: Option<&S>) -> RefreshReport {
        refresh_type_list(&mut self.ctx, self.prefs.type_list_path(), scene)
    }

    /// Remove tags whose type no longer exists
    pub fn purge_stale<S: ObjectStore>(&mut self, scene: &mut S) -> CommandStatus {
        match consistency::sweep(&self.ctx, scene) {
            Ok(SweepOutcome::Purged { removed }) => {
                info!(removed = removed.len(), "removed non-existing GameObject types");
                CommandStatus::Finished
            }
            Ok(SweepOutcome::Deferred { .. }) => CommandStatus::Cancelled,
            Err(e) => self.cancel(e),
        }
    }

    /// Mark the active object as the main camera
    pub fn set_main_camera<S: ObjectStore>(&mut self, scene: &mut S) -> CommandStatus {
        let Some(object) = self.active_or_warn(scene) else {
            return CommandStatus::Cancelled;
        };
        match camera::set_main_camera(scene, object) {
            Ok(()) => CommandStatus::Finished,
            Err(e) => self.cancel(e),
        }
    }

    pub fn panel<S: ObjectStore>(&self, scene: Option<&S>) -> PanelView {
        panel_view(&self.ctx, &self.prefs, scene)
    }

    fn active_or_warn<S: ObjectStore>(&self, scene: &S) -> Option<roottag_core::ObjectId> {
        let active = scene.active_object();
        if active.is_none() {
            warn!("{}", RootTagError::NoActiveObject);
        }
        active
    }

    fn cancel(&self, err: RootTagError) -> CommandStatus {
        if err.is_recoverable() {
            warn!(error = %err, "command cancelled");
        } else {
            warn!(error = %err, "command failed");
        }
        CommandStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SceneEvent;
    use roottag_core::keys::{MAIN_CAMERA_KEY, TYPE_TAG_KEY};
    use roottag_scene::{ObjectKind, SceneWorld};
    use std::fs;
    use std::path::PathBuf;

    fn temp_list(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("roottag_session_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("types.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_register_without_list_leaves_domain_unbuilt() {
        let mut bus = EventBus::new();
        let session = Session::register::<SceneWorld>(Preferences::default(), &mut bus, None);

        assert!(!session.context().has_domain());
        assert!(!session.context().gate().is_open());
        assert_eq!(bus.subscriber_count(), 1);
        assert!(matches!(
            session.panel::<SceneWorld>(None),
            PanelView::Guidance { .. }
        ));
    }

    #[test]
    fn test_register_with_list_builds_domain() {
        let path = temp_list("Enemy\nPickup\n");
        let mut bus = EventBus::new();
        let session = Session::register::<SceneWorld>(Preferences::with_list(&path), &mut bus, None);

        assert!(session.context().gate().is_open());
        assert_eq!(
            session.context().current_domain().identifiers(),
            vec!["None", "Enemy", "Pickup"]
        );
    }

    #[test]
    fn test_unregister_drops_subscription() {
        let mut bus = EventBus::new();
        let session = Session::register::<SceneWorld>(Preferences::default(), &mut bus, None);
        session.unregister(&mut bus);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_pump_redisplays_selection() {
        let path = temp_list("Enemy\n");
        let mut bus = EventBus::new();
        let mut world = SceneWorld::new();
        let a = world.spawn("A", ObjectKind::Mesh).unwrap();
        let b = world.spawn("B", ObjectKind::Mesh).unwrap();
        world.set_string(a, TYPE_TAG_KEY, "Enemy").unwrap();
        world.set_active(Some(a)).unwrap();

        let mut session = Session::register(Preferences::with_list(&path), &mut bus, Some(&world));
        assert_eq!(session.context().display_value(), "Enemy");

        world.set_active(Some(b)).unwrap();
        bus.publish(SceneEvent::HierarchyChanged);
        assert_eq!(session.pump(&mut bus, Some(&world)), 1);

        assert_eq!(session.context().display_value(), "None");
        assert!(!world.has_key(b, TYPE_TAG_KEY));
    }

    #[test]
    fn test_select_unknown_type_is_cancelled() {
        let path = temp_list("Enemy\n");
        let mut bus = EventBus::new();
        let mut world = SceneWorld::new();
        let a = world.spawn("A", ObjectKind::Mesh).unwrap();
        world.set_active(Some(a)).unwrap();
        let mut session = Session::register(Preferences::with_list(&path), &mut bus, Some(&world));

        assert_eq!(session.select_type(&mut world, "Dragon"), CommandStatus::Cancelled);
        assert!(!world.has_key(a, TYPE_TAG_KEY));

        assert_eq!(session.select_type(&mut world, "Enemy"), CommandStatus::Finished);
        assert_eq!(world.get_string(a, TYPE_TAG_KEY).as_deref(), Some("Enemy"));
    }

    #[test]
    fn test_commands_without_active_object_are_cancelled() {
        let mut bus = EventBus::new();
        let mut world = SceneWorld::new();
        world.spawn("A", ObjectKind::Mesh).unwrap();
        let mut session = Session::register(Preferences::default(), &mut bus, Some(&world));

        assert_eq!(session.select_type(&mut world, "None"), CommandStatus::Cancelled);
        assert_eq!(session.reset_selected(&mut world), CommandStatus::Cancelled);
        assert_eq!(session.set_main_camera(&mut world), CommandStatus::Cancelled);
    }

    #[test]
    fn test_purge_before_list_is_loaded() {
        let mut bus = EventBus::new();
        let mut world = SceneWorld::new();
        let a = world.spawn("A", ObjectKind::Mesh).unwrap();
        world.set_string(a, TYPE_TAG_KEY, "Enemy").unwrap();
        let mut session = Session::register(Preferences::default(), &mut bus, Some(&world));

        assert_eq!(session.purge_stale(&mut world), CommandStatus::Cancelled);
        assert!(world.has_key(a, TYPE_TAG_KEY));
    }

    #[test]
    fn test_set_main_camera_on_mesh_is_cancelled() {
        let mut bus = EventBus::new();
        let mut world = SceneWorld::new();
        let cube = world.spawn("cube", ObjectKind::Mesh).unwrap();
        world.set_active(Some(cube)).unwrap();
        let mut session = Session::register(Preferences::default(), &mut bus, Some(&world));

        assert_eq!(session.set_main_camera(&mut world), CommandStatus::Cancelled);
        assert!(!world.has_key(cube, MAIN_CAMERA_KEY));
    }
}
