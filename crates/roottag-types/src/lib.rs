//! roottag Types - GameObject type lists and enumeration domains
//!
//! This crate reads the user-maintained type list and projects it into
//! the ordered, sentinel-headed set of values the type dropdown offers.

mod domain;
mod loader;

pub use domain::{EnumItem, EnumerationDomain};
pub use loader::{load_type_list, parse_type_list};
