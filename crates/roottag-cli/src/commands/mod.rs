//! CLI command implementations

pub mod camera;
pub mod config;
pub mod open;
pub mod purge;
pub mod show;
pub mod tag;
pub mod types;
