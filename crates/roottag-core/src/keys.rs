//! Well-known custom property keys

/// Custom property holding an object's GameObject type name
pub const TYPE_TAG_KEY: &str = "ObjectType";

/// Custom property marking the scene's main camera
pub const MAIN_CAMERA_KEY: &str = "IsMainCamera";

/// Identifier of the sentinel enum item meaning "no type assigned"
pub const NONE_TYPE: &str = "None";

/// Enum value reserved for the sentinel item
pub const NONE_VALUE: i32 = -1;
