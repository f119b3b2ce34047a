//! Breadth-first shortest path search over the location graph
//!
//! Paths are shortest by hop count. Edge distances are carried along for
//! display but never influence which path is chosen.

use crate::graph::LocationGraph;
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// A path between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorePath {
    /// Ordered location names, start first
    pub locations: Vec<String>,

    /// Number of edges walked
    pub hops: usize,

    /// Sum of edge distances along the path (informational only)
    pub distance: u64,
}

impl StorePath {
    pub fn start(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.locations.last().map(String::as_str)
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locations.join(" -> "))
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
    pub path_found: bool,
}

/// Result of a path search
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub start: String,
    pub target: String,

    /// The path found, `None` when either endpoint is unknown or unreachable
    pub path: Option<StorePath>,

    pub stats: SearchStats,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Location names along the path, empty when there is none
    pub fn into_locations(self) -> Vec<String> {
        self.path.map(|p| p.locations).unwrap_or_default()
    }
}

/// Unweighted shortest path finder
pub struct ShortestPathFinder;

impl ShortestPathFinder {
    /// Minimum-hop path from `start` to `target` as location names
    ///
    /// Returns an empty vector when either location is unknown or when the
    /// target cannot be reached. Among several equally short paths, the one
    /// following earlier-added neighbours is returned.
    pub fn find_shortest_path(graph: &LocationGraph, start: &str, target: &str) -> Vec<String> {
        Self::search(graph, start, target).into_locations()
    }

    /// Run the search and report statistics along with the path
    pub fn search<'a>(graph: &'a LocationGraph, start: &'a str, target: &str) -> PathResult {
        tracing::debug!("Searching path: start={:?}, target={:?}", start, target);

        let mut stats = SearchStats::default();

        if !graph.contains(start) || !graph.contains(target) {
            tracing::debug!("Unknown endpoint, no path between {:?} and {:?}", start, target);
            return Self::build_result(start, target, None, stats);
        }

        let mut visited: HashSet<&'a str> = HashSet::new();
        let mut parent: HashMap<&'a str, Option<&'a str>> = HashMap::new();
        let mut queue: VecDeque<&'a str> = VecDeque::new();

        queue.push_back(start);
        visited.insert(start);
        parent.insert(start, None);

        let mut path = None;

        while let Some(current) = queue.pop_front() {
            stats.nodes_visited += 1;

            if current == target {
                stats.path_found = true;
                path = Some(Self::reconstruct_path(graph, &parent, current));
                break;
            }

            let Some(neighbors) = graph.neighbors(current) else {
                continue;
            };

            for next in neighbors.keys() {
                stats.edges_traversed += 1;
                let next = next.as_str();
                if visited.insert(next) {
                    parent.insert(next, Some(current));
                    queue.push_back(next);
                }
            }
        }

        tracing::debug!(
            "Search visited {} nodes, traversed {} edges, found={}",
            stats.nodes_visited,
            stats.edges_traversed,
            stats.path_found
        );

        Self::build_result(start, target, path, stats)
    }

    /// Walk predecessors back from `end` to the start
    fn reconstruct_path(
        graph: &LocationGraph,
        parent: &HashMap<&str, Option<&str>>,
        end: &str,
    ) -> StorePath {
        let mut locations = vec![end.to_string()];
        let mut current = end;
        let mut distance = 0u64;

        while let Some(&Some(prev)) = parent.get(current) {
            distance += u64::from(graph.distance(prev, current).unwrap_or(0));
            locations.push(prev.to_string());
            current = prev;
        }

        locations.reverse();

        StorePath {
            hops: locations.len() - 1,
            locations,
            distance,
        }
    }

    fn build_result(
        start: &str,
        target: &str,
        path: Option<StorePath>,
        stats: SearchStats,
    ) -> PathResult {
        PathResult {
            start: start.to_string(),
            target: target.to_string(),
            path,
            stats,
        }
    }
}
