//! Store location graph

use crate::error::{Error, Result};
use crate::limits::validate_location_name;
use indexmap::IndexMap;

/// Adjacency map of a single location: neighbour name to edge distance
pub type Neighbors = IndexMap<String, u32>;

/// Undirected weighted graph of named store locations
///
/// Locations and their neighbours are kept in insertion order, so iteration
/// (and therefore breadth-first tie-breaking) follows the order in which the
/// layout was described.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    adjacency: IndexMap<String, Neighbors>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location, returning `true` if it was not already present
    pub fn add_location(&mut self, name: impl Into<String>) -> Result<bool> {
        let name = name.into();
        validate_location_name(&name)?;

        if self.adjacency.contains_key(&name) {
            return Ok(false);
        }
        self.adjacency.insert(name, Neighbors::new());
        Ok(true)
    }

    /// Add a bidirectional path between two existing locations
    ///
    /// Both endpoints must have been added first. Re-adding a pair overwrites
    /// the distance in both directions. On error the graph is left unchanged.
    pub fn add_path(&mut self, from: &str, to: &str, distance: u32) -> Result<()> {
        for name in [from, to] {
            if !self.adjacency.contains_key(name) {
                return Err(Error::UnknownLocation(name.to_string()));
            }
        }
        if distance == 0 {
            return Err(Error::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        for (a, b) in [(from, to), (to, from)] {
            let neighbors = self
                .adjacency
                .get_mut(a)
                .ok_or_else(|| Error::UnknownLocation(a.to_string()))?;
            neighbors.insert(b.to_string(), distance);
        }
        Ok(())
    }

    /// Adjacent locations of `name`, or `None` for an unknown location
    pub fn neighbors(&self, name: &str) -> Option<&Neighbors> {
        self.adjacency.get(name)
    }

    /// Distance of the direct path between two locations, if there is one
    pub fn distance(&self, from: &str, to: &str) -> Option<u32> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// All known locations, in the order they were added
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Index of a location in layout order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.adjacency.get_index_of(name)
    }

    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected paths
    pub fn path_count(&self) -> usize {
        let mut self_loops = 0;
        let mut directed = 0;
        for (name, neighbors) in &self.adjacency {
            for neighbor in neighbors.keys() {
                if neighbor == name {
                    self_loops += 1;
                } else {
                    directed += 1;
                }
            }
        }
        directed / 2 + self_loops
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(names: &[&str]) -> LocationGraph {
        let mut graph = LocationGraph::new();
        for name in names {
            graph.add_location(*name).unwrap();
        }
        graph
    }

    #[test]
    fn test_add_location_is_idempotent() {
        let mut graph = LocationGraph::new();
        assert!(graph.add_location("Bakery").unwrap());
        assert!(!graph.add_location("Bakery").unwrap());
        assert_eq!(graph.location_count(), 1);
        assert!(graph.neighbors("Bakery").unwrap().is_empty());
    }

    #[test]
    fn test_add_location_keeps_existing_paths() {
        let mut graph = graph_with(&["A", "B"]);
        graph.add_path("A", "B", 3).unwrap();
        graph.add_location("A").unwrap();
        assert_eq!(graph.distance("A", "B"), Some(3));
    }

    #[test]
    fn test_add_location_rejects_empty_name() {
        let mut graph = LocationGraph::new();
        assert!(matches!(graph.add_location(""), Err(Error::Validation(_))));
    }

    #[test]
    fn test_add_path_is_symmetric() {
        let mut graph = graph_with(&["Entrance", "Bakery"]);
        graph.add_path("Entrance", "Bakery", 7).unwrap();

        assert_eq!(graph.distance("Entrance", "Bakery"), Some(7));
        assert_eq!(graph.distance("Bakery", "Entrance"), Some(7));
        assert_eq!(graph.path_count(), 1);
    }

    #[test]
    fn test_add_path_overwrites_both_directions() {
        let mut graph = graph_with(&["A", "B", "C"]);
        graph.add_path("A", "B", 5).unwrap();
        graph.add_path("A", "C", 1).unwrap();
        graph.add_path("B", "A", 9).unwrap();

        assert_eq!(graph.distance("A", "B"), Some(9));
        assert_eq!(graph.distance("B", "A"), Some(9));
        assert_eq!(graph.path_count(), 2);

        // Overwriting keeps the neighbour's original position
        let order: Vec<_> = graph.neighbors("A").unwrap().keys().cloned().collect();
        assert_eq!(order, vec!["B", "C"]);
    }

    #[test]
    fn test_add_path_unknown_location_fails_fast() {
        let mut graph = graph_with(&["A"]);
        let err = graph.add_path("A", "Nowhere", 5).unwrap_err();
        assert!(matches!(err, Error::UnknownLocation(ref name) if name == "Nowhere"));
        assert!(graph.neighbors("A").unwrap().is_empty());
        assert!(!graph.contains("Nowhere"));
    }

    #[test]
    fn test_add_path_rejects_zero_distance() {
        let mut graph = graph_with(&["A", "B"]);
        let err = graph.add_path("A", "B", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidDistance { .. }));
        assert_eq!(graph.path_count(), 0);
    }

    #[test]
    fn test_neighbors_of_unknown_location() {
        let graph = graph_with(&["A"]);
        assert!(graph.neighbors("B").is_none());
        assert!(graph.distance("B", "A").is_none());
    }

    #[test]
    fn test_locations_in_insertion_order() {
        let graph = graph_with(&["Entrance", "Bakery", "Dairy"]);
        let names: Vec<_> = graph.locations().collect();
        assert_eq!(names, vec!["Entrance", "Bakery", "Dairy"]);
        assert_eq!(graph.position("Dairy"), Some(2));
        assert_eq!(graph.position("Deli"), None);
    }

    #[test]
    fn test_locations_are_case_sensitive() {
        let graph = graph_with(&["Bakery"]);
        assert!(graph.contains("Bakery"));
        assert!(!graph.contains("bakery"));
    }
}
