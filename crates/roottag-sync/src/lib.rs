//! roottag Sync - the type-enum synchronization engine
//!
//! Rebuilds the type enumeration from the type list, keeps object type
//! tags consistent with it, and keeps the dropdown's displayed value
//! truthful as the selection changes.
//!
//! All state lives in an explicit [`SyncContext`]; every operation takes
//! it as a parameter. The host drives everything from one thread.

mod camera;
mod consistency;
mod context;
mod events;
mod gate;
mod panel;
mod projector;
mod selection;
mod session;

pub use camera::{main_camera, set_main_camera};
pub use consistency::{on_value_changed, reset_tag, sweep, SweepOutcome, ValueChange};
pub use context::SyncContext;
pub use events::{EventBus, SceneEvent, Subscription};
pub use gate::UpdateGate;
pub use panel::{panel_view, PanelView};
pub use projector::{rebuild, refresh_type_list, RefreshReport};
pub use selection::{on_selection_or_graph_changed, resolve_display_value};
pub use session::{CommandStatus, Session};
