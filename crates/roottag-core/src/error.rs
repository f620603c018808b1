//! Error types for roottag

use thiserror::Error;

/// The main error type for roottag operations
#[derive(Debug, Error)]
pub enum RootTagError {
    #[error("Type list unreadable at '{path}': {reason}")]
    SourceUnreadable { path: String, reason: String },

    #[error("Stale type reference: {0}")]
    StaleReference(String),

    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Duplicate object name: {0}")]
    DuplicateObjectName(String),

    #[error("Object is not a camera: {0}")]
    NotACamera(String),

    #[error("No active object")]
    NoActiveObject,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Scene error: {0}")]
    SceneError(String),
}

impl RootTagError {
    /// Whether the error degrades to a safe fallback instead of failing a command
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RootTagError::SourceUnreadable { .. }
                | RootTagError::StaleReference(_)
                | RootTagError::PreconditionNotMet(_)
        )
    }
}

/// Result type alias for roottag operations
pub type Result<T> = std::result::Result<T, RootTagError>;

impl From<toml::de::Error> for RootTagError {
    fn from(err: toml::de::Error) -> Self {
        RootTagError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for RootTagError {
    fn from(err: toml::ser::Error) -> Self {
        RootTagError::TomlSerError(err.to_string())
    }
}
