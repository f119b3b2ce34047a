//! A built store: location graph plus item index

use crate::graph::LocationGraph;
use crate::items::ItemIndex;
use crate::pathfinding::{PathResult, ShortestPathFinder};
use crate::route::{Route, RoutePlanner};
use serde::Serialize;

/// Outcome of looking up an item from a starting location
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemLookup {
    /// The store does not carry the item
    NotFound { item: String },

    /// The item was resolved; `result` holds the path search, which may
    /// still have found no path
    Found {
        item: String,
        location: String,
        result: PathResult,
    },
}

/// Read-only store used to answer queries
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub graph: LocationGraph,
    pub items: ItemIndex,
}

impl Store {
    pub fn new(graph: LocationGraph, items: ItemIndex) -> Self {
        Self { graph, items }
    }

    /// Shortest path between two locations
    pub fn shortest_path(&self, start: &str, target: &str) -> PathResult {
        ShortestPathFinder::search(&self.graph, start, target)
    }

    /// Resolve an item and find the path to it from `start`
    pub fn find_item(&self, start: &str, item: &str) -> ItemLookup {
        match self.items.location_of(item) {
            None => {
                tracing::debug!("Item not found: {:?}", item);
                ItemLookup::NotFound {
                    item: item.to_string(),
                }
            }
            Some(location) => ItemLookup::Found {
                item: item.to_string(),
                location: location.to_string(),
                result: self.shortest_path(start, location),
            },
        }
    }

    /// Plan a route through every wanted item
    pub fn plan_route<S: AsRef<str>>(
        &self,
        start: &str,
        wanted: &[S],
        finish: Option<&str>,
    ) -> Route {
        RoutePlanner::plan(&self.graph, &self.items, start, wanted, finish)
    }
}
