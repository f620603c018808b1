//! Enumeration domains: the values the type dropdown offers

use roottag_core::keys::{NONE_TYPE, NONE_VALUE};
use serde::Serialize;

/// A single selectable value of the type enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumItem {
    /// Value stored in an object's type tag
    pub identifier: String,
    /// Label shown in the dropdown
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Position in the type list, `-1` for the sentinel
    pub value: i32,
}

impl EnumItem {
    fn new(type_name: &str, value: i32) -> Self {
        Self {
            identifier: type_name.to_string(),
            name: type_name.to_string(),
            description: String::new(),
            value,
        }
    }

    /// The "None" item heading every domain
    pub fn sentinel() -> Self {
        Self::new(NONE_TYPE, NONE_VALUE)
    }

    /// Whether this is the "no type assigned" item
    pub fn is_sentinel(&self) -> bool {
        self.value == NONE_VALUE && self.identifier == NONE_TYPE
    }
}

/// The ordered set of type values currently known, always headed by "None".
///
/// A domain is built in one go from a type list and never patched; a
/// rebuild produces a fresh value that replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationDomain {
    items: Vec<EnumItem>,
}

impl Default for EnumerationDomain {
    fn default() -> Self {
        Self::sentinel_only()
    }
}

impl EnumerationDomain {
    /// A domain holding only the sentinel
    pub fn sentinel_only() -> Self {
        Self {
            items: vec![EnumItem::sentinel()],
        }
    }

    /// Build a domain from type names, keeping their order and duplicates
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut items = Vec::with_capacity(names.len() + 1);
        items.push(EnumItem::sentinel());
        for (i, name) in names.iter().enumerate() {
            items.push(EnumItem::new(name.as_ref(), i as i32));
        }
        Self { items }
    }

    /// All items, sentinel first
    pub fn items(&self) -> &[EnumItem] {
        &self.items
    }

    /// Item identifiers in dropdown order
    pub fn identifiers(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.identifier.as_str()).collect()
    }

    /// Type names from the list, without the sentinel
    pub fn type_names(&self) -> Vec<&str> {
        self.items[1..].iter().map(|i| i.identifier.as_str()).collect()
    }

    /// Look up an item by identifier; with duplicates the last one wins
    pub fn lookup(&self, identifier: &str) -> Option<&EnumItem> {
        self.items.iter().rev().find(|i| i.identifier == identifier)
    }

    /// Whether `identifier` is a selectable value of this domain
    pub fn contains(&self, identifier: &str) -> bool {
        self.lookup(identifier).is_some()
    }

    /// Whether `type_name` may be stored in a type tag.
    ///
    /// The sentinel never qualifies, even when the list itself has a "None" line.
    pub fn is_assignable(&self, type_name: &str) -> bool {
        type_name != NONE_TYPE && self.contains(type_name)
    }

    /// Number of items including the sentinel
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; the sentinel is always present
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_order_and_values() {
        let domain = EnumerationDomain::from_names(&["Enemy", "Pickup", "Door"]);

        assert_eq!(domain.identifiers(), vec!["None", "Enemy", "Pickup", "Door"]);
        let values: Vec<i32> = domain.items().iter().map(|i| i.value).collect();
        assert_eq!(values, vec![-1, 0, 1, 2]);
        assert!(domain.items()[0].is_sentinel());
        assert_eq!(domain.items()[2].name, "Pickup");
    }

    #[test]
    fn test_empty_list_is_sentinel_only() {
        let domain = EnumerationDomain::from_names::<&str>(&[]);
        assert_eq!(domain, EnumerationDomain::sentinel_only());
        assert_eq!(domain.identifiers(), vec!["None"]);
        assert!(domain.type_names().is_empty());
        assert!(!domain.is_empty());
    }

    #[test]
    fn test_duplicates_listed_twice_last_wins() {
        let domain = EnumerationDomain::from_names(&["Door", "Enemy", "Door"]);

        assert_eq!(domain.identifiers(), vec!["None", "Door", "Enemy", "Door"]);
        assert_eq!(domain.lookup("Door").map(|i| i.value), Some(2));
    }

    #[test]
    fn test_contains_and_assignable() {
        let domain = EnumerationDomain::from_names(&["Enemy"]);

        assert!(domain.contains("None"));
        assert!(domain.contains("Enemy"));
        assert!(!domain.contains("Pickup"));
        assert!(domain.is_assignable("Enemy"));
        assert!(!domain.is_assignable("None"));
    }

    #[test]
    fn test_none_line_in_list_is_not_assignable() {
        let domain = EnumerationDomain::from_names(&["None", "Enemy"]);

        assert_eq!(domain.identifiers(), vec!["None", "None", "Enemy"]);
        assert!(!domain.is_assignable("None"));
    }

    #[test]
    fn test_rebuild_is_equivalent_in_content() {
        let names = vec!["Enemy".to_string(), "Door".to_string()];
        assert_eq!(EnumerationDomain::from_names(&names), EnumerationDomain::from_names(&names));
    }
}
