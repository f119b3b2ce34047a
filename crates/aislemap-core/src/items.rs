//! Item to location lookup table

use crate::error::Result;
use crate::limits::{validate_item_name, validate_location_name};
use indexmap::IndexMap;

/// Maps item names to the single location that stocks them
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    items: IndexMap<String, String>,
}

impl ItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location of an item, returning the location it replaced
    pub fn add_item(
        &mut self,
        item: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Option<String>> {
        let item = item.into();
        let location = location.into();
        validate_item_name(&item)?;
        validate_location_name(&location)?;

        Ok(self.items.insert(item, location))
    }

    /// Location of an item, or `None` if the store does not carry it
    pub fn location_of(&self, item: &str) -> Option<&str> {
        self.items.get(item).map(String::as_str)
    }

    /// Items paired with their locations, in the order they were first added
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut index = ItemIndex::new();
        index.add_item("Bread", "Bakery").unwrap();

        assert_eq!(index.location_of("Bread"), Some("Bakery"));
        assert_eq!(index.location_of("Yogurt"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut index = ItemIndex::new();
        index.add_item("Milk", "Dairy and Eggs").unwrap();

        assert_eq!(index.location_of("milk"), None);
        assert_eq!(index.location_of("Milk "), None);
    }

    #[test]
    fn test_add_item_overwrites() {
        let mut index = ItemIndex::new();
        assert_eq!(index.add_item("Milk", "Beverages").unwrap(), None);
        assert_eq!(
            index.add_item("Milk", "Dairy and Eggs").unwrap(),
            Some("Beverages".to_string())
        );

        assert_eq!(index.location_of("Milk"), Some("Dairy and Eggs"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_add_item_rejects_empty_names() {
        let mut index = ItemIndex::new();
        assert!(index.add_item("", "Bakery").is_err());
        assert!(index.add_item("Bread", "").is_err());
        assert!(index.is_empty());
    }

    #[test]
    fn test_iter_preserves_order() {
        let mut index = ItemIndex::new();
        index.add_item("Milk", "Dairy and Eggs").unwrap();
        index.add_item("Bread", "Bakery").unwrap();
        index.add_item("Milk", "Frozen Foods").unwrap();

        let items: Vec<_> = index.iter().collect();
        assert_eq!(items, vec![("Milk", "Frozen Foods"), ("Bread", "Bakery")]);
    }
}
