//! Declarative store layouts
//!
//! A layout is plain data: location names, paths between them and the items
//! stocked at each location. Building a layout validates it and produces a
//! read-only [`Store`].

use crate::error::{Error, Result};
use crate::graph::LocationGraph;
use crate::items::ItemIndex;
use crate::limits::validate_layout_size;
use crate::store::Store;
use serde::{Deserialize, Serialize};

/// A bidirectional path between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSpec {
    pub from: String,
    pub to: String,
    pub distance: u32,
}

impl PathSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// An item and the location that stocks it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    pub name: String,
    pub location: String,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Store layout as loaded from configuration
///
/// Unknown keys are rejected, so a misspelled table fails to parse instead
/// of silently producing an empty store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreLayout {
    #[serde(default)]
    pub locations: Vec<String>,

    #[serde(default)]
    pub paths: Vec<PathSpec>,

    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

impl StoreLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.locations.push(name.into());
        self
    }

    pub fn with_path(mut self, from: impl Into<String>, to: impl Into<String>, distance: u32) -> Self {
        self.paths.push(PathSpec::new(from, to, distance));
        self
    }

    pub fn with_item(mut self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.items.push(ItemSpec::new(name, location));
        self
    }

    /// The built-in sample store: ten sections chained from the entrance
    pub fn sample() -> Self {
        const SECTIONS: [&str; 10] = [
            "Entrance",
            "Fruits and Vegetables",
            "Bakery",
            "Beverages",
            "Pantry Staples",
            "Snacks and Sweets",
            "Household Essentials",
            "Meat and Seafood",
            "Frozen Foods",
            "Dairy and Eggs",
        ];

        let mut layout = Self::new();
        for section in SECTIONS {
            layout = layout.with_location(section);
        }
        for (i, pair) in SECTIONS.windows(2).enumerate() {
            let distance = if i == 0 { 10 } else { 5 };
            layout = layout.with_path(pair[0], pair[1], distance);
        }

        layout
            .with_item("Milk", "Dairy and Eggs")
            .with_item("Bread", "Bakery")
            .with_item("Ice Cream", "Frozen Foods")
    }

    /// Parse a layout from TOML
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Render the layout as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Layout(e.to_string()))
    }

    /// Validate the layout and build the store graph and item index
    ///
    /// Locations are added first, then paths, then items. A path or item
    /// naming a location that was never declared is rejected.
    pub fn build(&self) -> Result<Store> {
        validate_layout_size(self.locations.len(), self.items.len())?;

        let mut graph = LocationGraph::new();
        for name in &self.locations {
            if !graph.add_location(name.as_str())? {
                tracing::debug!("Duplicate location in layout: {}", name);
            }
        }

        for path in &self.paths {
            graph.add_path(&path.from, &path.to, path.distance)?;
        }

        let mut items = ItemIndex::new();
        for item in &self.items {
            if !graph.contains(&item.location) {
                return Err(Error::UnknownLocation(item.location.clone()));
            }
            if let Some(previous) = items.add_item(item.name.as_str(), item.location.as_str())? {
                tracing::debug!(
                    "Item {} moved from {} to {}",
                    item.name,
                    previous,
                    item.location
                );
            }
        }

        tracing::info!(
            "Built store layout: {} locations, {} paths, {} items",
            graph.location_count(),
            graph.path_count(),
            items.len()
        );

        Ok(Store::new(graph, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_LAYOUT: &str = r#"
locations = ["Entrance", "Deli", "Checkout"]

[[paths]]
from = "Entrance"
to = "Deli"
distance = 4

[[paths]]
from = "Deli"
to = "Checkout"
distance = 2

[[items]]
name = "Salami"
location = "Deli"
"#;

    #[test]
    fn test_sample_layout() {
        let store = StoreLayout::sample().build().unwrap();

        assert_eq!(store.graph.location_count(), 10);
        assert_eq!(store.graph.path_count(), 9);
        assert_eq!(store.items.len(), 3);
        assert_eq!(store.graph.distance("Entrance", "Fruits and Vegetables"), Some(10));
        assert_eq!(store.graph.distance("Bakery", "Fruits and Vegetables"), Some(5));
        assert_eq!(store.items.location_of("Ice Cream"), Some("Frozen Foods"));
    }

    #[test]
    fn test_parse_toml_layout() {
        let layout = StoreLayout::from_toml_str(SMALL_LAYOUT).unwrap();

        assert_eq!(layout.locations, vec!["Entrance", "Deli", "Checkout"]);
        assert_eq!(layout.paths[0], PathSpec::new("Entrance", "Deli", 4));
        assert_eq!(layout.items, vec![ItemSpec::new("Salami", "Deli")]);

        let store = layout.build().unwrap();
        assert_eq!(store.graph.distance("Checkout", "Deli"), Some(2));
    }

    #[test]
    fn test_toml_round_trip_of_sample() {
        let sample = StoreLayout::sample();
        let text = sample.to_toml_string().unwrap();
        assert_eq!(StoreLayout::from_toml_str(&text).unwrap(), sample);
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = StoreLayout::from_toml_str("locations = [\"Entrance\"\n").unwrap_err();
        assert!(matches!(err, Error::Layout(_)));

        let err = StoreLayout::from_toml_str("[[paths]]\nfrom = \"A\"\nto = \"B\"\n").unwrap_err();
        assert!(matches!(err, Error::Layout(_)));
    }

    #[test]
    fn test_parse_rejects_misspelled_tables() {
        let misspelled_paths = "locations = [\"A\", \"B\"]\n[[path]]\nfrom = \"A\"\nto = \"B\"\ndistance = 1\n";
        let err = StoreLayout::from_toml_str(misspelled_paths).unwrap_err();
        assert!(matches!(err, Error::Layout(_)));

        let misspelled_items = "locations = [\"A\"]\n[[item]]\nname = \"Milk\"\nlocation = \"A\"\n";
        assert!(matches!(
            StoreLayout::from_toml_str(misspelled_items),
            Err(Error::Layout(_))
        ));

        let unknown_path_key = "locations = [\"A\", \"B\"]\n[[paths]]\nfrom = \"A\"\nto = \"B\"\ndistance = 1\nweight = 2\n";
        assert!(matches!(
            StoreLayout::from_toml_str(unknown_path_key),
            Err(Error::Layout(_))
        ));
    }

    #[test]
    fn test_build_rejects_path_to_undeclared_location() {
        let layout = StoreLayout::new()
            .with_location("Entrance")
            .with_path("Entrance", "Garden Center", 5);

        let err = layout.build().unwrap_err();
        assert!(matches!(err, Error::UnknownLocation(ref name) if name == "Garden Center"));
    }

    #[test]
    fn test_build_rejects_item_at_undeclared_location() {
        let layout = StoreLayout::new()
            .with_location("Entrance")
            .with_item("Hose", "Garden Center");

        assert!(matches!(layout.build(), Err(Error::UnknownLocation(_))));
    }

    #[test]
    fn test_build_rejects_zero_distance() {
        let layout = StoreLayout::new()
            .with_location("A")
            .with_location("B")
            .with_path("A", "B", 0);

        assert!(matches!(layout.build(), Err(Error::InvalidDistance { .. })));
    }

    #[test]
    fn test_build_tolerates_duplicates() {
        let layout = StoreLayout::new()
            .with_location("A")
            .with_location("B")
            .with_location("A")
            .with_path("A", "B", 3)
            .with_path("B", "A", 8)
            .with_item("Milk", "A")
            .with_item("Milk", "B");

        let store = layout.build().unwrap();
        assert_eq!(store.graph.location_count(), 2);
        assert_eq!(store.graph.distance("A", "B"), Some(8));
        assert_eq!(store.items.location_of("Milk"), Some("B"));
    }
}
