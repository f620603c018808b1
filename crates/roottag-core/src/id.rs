//! Stable scene object identifiers

use std::fmt;

/// A stable identifier for an object in a scene.
///
/// Ids are handed out by the scene that owns the object and are only
/// meaningful within it. Object names can be renamed by the user; the id
/// stays fixed for the lifetime of the loaded scene.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Wrap a raw id allocated by a scene
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
