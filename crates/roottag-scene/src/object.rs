//! Scene object metadata

use crate::properties::ObjectProperties;
use roottag_core::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of data an object carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Mesh,
    Camera,
    Light,
    Empty,
    Other,
}

impl ObjectKind {
    pub fn is_camera(&self) -> bool {
        matches!(self, ObjectKind::Camera)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Mesh => "mesh",
            ObjectKind::Camera => "camera",
            ObjectKind::Light => "light",
            ObjectKind::Empty => "empty",
            ObjectKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A snapshot of an object for listing and serialization
#[derive(Debug, Clone)]
pub struct ObjectInfo {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub properties: ObjectProperties,
}
