//! roottag Core - Foundational types for the GameObject type tagger
//!
//! This crate provides the types that all other roottag crates depend on:
//! - `ObjectId` - Stable scene object identifiers
//! - Well-known property keys and the `None` sentinel
//! - `Preferences` - the persisted type-list path
//! - Error types and Result alias

mod config;
mod error;
mod id;
pub mod keys;

pub use config::{Preferences, GAMEOBJECT_LIST_ENV, PROJECT_CONFIG_PATH};
pub use error::{Result, RootTagError};
pub use id::ObjectId;
