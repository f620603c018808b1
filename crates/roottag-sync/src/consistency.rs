//! Keeping object type tags consistent with the enumeration domain

use crate::context::SyncContext;
use roottag_core::keys::{NONE_TYPE, TYPE_TAG_KEY};
use roottag_core::{ObjectId, Result, RootTagError};
use roottag_scene::ObjectStore;
use roottag_types::EnumerationDomain;
use tracing::{debug, info, warn};

/// What a dropdown change did to the object's tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueChange {
    /// The tag now holds this type
    Assigned(String),
    /// "None" was chosen and the tag is gone
    Cleared,
    /// "None" was chosen while the gate was closed; the tag was left alone
    Deferred,
}

/// Result of a purge over all objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Tags removed from these objects
    Purged { removed: Vec<ObjectId> },
    /// Gate closed: nothing was deleted although `stale` tags were found
    Deferred { stale: usize },
}

impl SweepOutcome {
    /// Objects whose tag was removed
    pub fn removed(&self) -> &[ObjectId] {
        match self {
            SweepOutcome::Purged { removed } => removed,
            SweepOutcome::Deferred { .. } => &[],
        }
    }
}

/// Handle a new value chosen in the type dropdown for `object`.
///
/// A real type name is written to the tag as-is. "None" clears the tag,
/// but only while the gate is open; during a rebuild the dropdown can
/// pass through "None" without the user asking for it.
pub fn on_value_changed<S: ObjectStore>(
    ctx: &mut SyncContext,
    store: &mut S,
    object: ObjectId,
    value: &str,
) -> Result<ValueChange> {
    if value != NONE_TYPE {
        store.set_string(object, TYPE_TAG_KEY, value)?;
        ctx.set_display(value);
        debug!(object = %store.object_label(object), type_name = value, "GameObject type assigned");
        return Ok(ValueChange::Assigned(value.to_string()));
    }

    if ctx.gate().is_open() {
        reset_tag(ctx, store, object);
        Ok(ValueChange::Cleared)
    } else {
        ctx.set_display(NONE_TYPE);
        debug!(
            object = %store.object_label(object),
            "type list is being rebuilt, keeping existing GameObject type"
        );
        Ok(ValueChange::Deferred)
    }
}

/// Remove `object`'s tag, making it a default GameObject. Not gated.
///
/// Returns whether a tag was present.
pub fn reset_tag<S: ObjectStore>(ctx: &mut SyncContext, store: &mut S, object: ObjectId) -> bool {
    let removed = store.remove_key(object, TYPE_TAG_KEY);
    ctx.set_display(NONE_TYPE);
    if removed {
        info!(object = %store.object_label(object), "GameObject type reset");
    }
    removed
}

fn is_valid_tag(domain: &EnumerationDomain, tag: Option<&str>) -> bool {
    tag.map(|t| domain.is_assignable(t)).unwrap_or(false)
}

/// Remove every tag that names a type missing from the current domain.
///
/// Objects without a tag are never touched, and running it twice in a row
/// changes nothing the second time. Before any domain has been built this
/// is refused with `PreconditionNotMet`; with the gate closed it only warns.
/// The gate is read once, after collecting and right before deleting; the
/// context is borrowed for the whole sweep so it cannot change mid-way.
pub fn sweep<S: ObjectStore>(ctx: &SyncContext, store: &mut S) -> Result<SweepOutcome> {
    let domain = ctx.domain().ok_or_else(|| {
        warn!("Please update the GameObject type list before doing this!");
        RootTagError::PreconditionNotMet("the GameObject type list has never been loaded".to_string())
    })?;

    let stale: Vec<ObjectId> = store
        .object_ids()
        .into_iter()
        .filter(|id| store.has_key(*id, TYPE_TAG_KEY))
        .filter(|id| !is_valid_tag(domain, store.get_string(*id, TYPE_TAG_KEY).as_deref()))
        .collect();

    if !ctx.gate().is_open() {
        warn!(stale = stale.len(), "Please update the GameObject type list before doing this!");
        return Ok(SweepOutcome::Deferred { stale: stale.len() });
    }

    let mut removed = Vec::with_capacity(stale.len());
    for id in stale {
        let previous = store.get_string(id, TYPE_TAG_KEY);
        if store.remove_key(id, TYPE_TAG_KEY) {
            info!(
                object = %store.object_label(id),
                type_name = previous.as_deref().unwrap_or("<non-text>"),
                "removed non-existing GameObject type"
            );
            removed.push(id);
        }
    }

    Ok(SweepOutcome::Purged { removed })
}
