//! Scene notifications and the subscription that receives them

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Something changed in the host; handlers re-read whatever they need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneEvent {
    /// Selection or object hierarchy changed
    HierarchyChanged,
    /// The scene graph was re-evaluated
    GraphEvaluated,
    /// A scene file was loaded
    FileLoaded,
}

impl fmt::Display for SceneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneEvent::HierarchyChanged => write!(f, "HierarchyChanged"),
            SceneEvent::GraphEvaluated => write!(f, "GraphEvaluated"),
            SceneEvent::FileLoaded => write!(f, "FileLoaded"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SubscriptionId(u64);

/// Delivers host notifications to subscribers, queued until drained
#[derive(Debug, Default)]
pub struct EventBus {
    queues: HashMap<SubscriptionId, Vec<SceneEvent>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for every subscriber; dropped if there are none.
    ///
    /// Events carry no payload, so a repeat of a subscriber's last queued
    /// event is collapsed into it.
    pub fn publish(&mut self, event: SceneEvent) {
        if self.queues.is_empty() {
            debug!(%event, "no subscribers, event dropped");
            return;
        }
        for queue in self.queues.values_mut() {
            if queue.last() != Some(&event) {
                queue.push(event);
            }
        }
    }

    fn drain(&mut self, id: SubscriptionId) -> Vec<SceneEvent> {
        self.queues
            .get_mut(&id)
            .map(|q| q.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.queues.len()
    }

    fn add_subscriber(&mut self) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.queues.insert(id, Vec::new());
        id
    }

    fn clear_by_owner(&mut self, id: SubscriptionId) -> bool {
        self.queues.remove(&id).is_some()
    }
}

/// The single long-lived subscription, created at startup and torn down at shutdown
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
}

impl Subscription {
    pub fn subscribe(bus: &mut EventBus) -> Self {
        let id = bus.add_subscriber();
        debug!(?id, "subscribed to scene events");
        Self { id }
    }

    /// Events received since the last call
    pub fn receive(&self, bus: &mut EventBus) -> Vec<SceneEvent> {
        bus.drain(self.id)
    }

    pub fn unsubscribe(self, bus: &mut EventBus) {
        if bus.clear_by_owner(self.id) {
            debug!(id = ?self.id, "unsubscribed from scene events");
        }
    }
}
