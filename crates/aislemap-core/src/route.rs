//! Shopping-list routes through the store
//!
//! A route visits every stop holding a wanted item, in layout order, chaining
//! shortest paths leg by leg.

use crate::graph::LocationGraph;
use crate::items::ItemIndex;
use crate::pathfinding::ShortestPathFinder;
use serde::Serialize;
use std::collections::HashSet;

/// A location visited on a route and the items picked up there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStop {
    pub location: String,
    pub items: Vec<String>,
}

/// A planned walk through the store
#[derive(Debug, Clone, Default, Serialize)]
pub struct Route {
    pub start: String,

    /// Stops actually reached, in visiting order
    pub stops: Vec<RouteStop>,

    /// Every location walked through, start first
    pub locations: Vec<String>,

    /// Number of edges walked over the whole route
    pub hops: usize,

    /// Items the store does not carry
    pub missing: Vec<String>,

    /// Items whose location cannot be reached
    pub unreachable: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,

    /// Whether the requested finish location was reached
    pub finish_reached: bool,
}

impl Route {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
            && self.unreachable.is_empty()
            && (self.finish.is_none() || self.finish_reached)
    }
}

/// Plans shopping-list routes
pub struct RoutePlanner;

impl RoutePlanner {
    /// Plan a route from `start` through the locations of `wanted` items
    ///
    /// Stops are visited in layout order; items sharing a location are
    /// collected at a single stop. Duplicate items are ignored. When `finish`
    /// is given the route ends there.
    pub fn plan<S: AsRef<str>>(
        graph: &LocationGraph,
        items: &ItemIndex,
        start: &str,
        wanted: &[S],
        finish: Option<&str>,
    ) -> Route {
        let mut route = Route {
            start: start.to_string(),
            finish: finish.map(str::to_string),
            ..Default::default()
        };

        let mut seen = HashSet::new();
        let mut stops: Vec<RouteStop> = Vec::new();

        for item in wanted {
            let item = item.as_ref();
            if !seen.insert(item) {
                continue;
            }

            let Some(location) = items.location_of(item) else {
                route.missing.push(item.to_string());
                continue;
            };

            match stops.iter_mut().find(|stop| stop.location == location) {
                Some(stop) => stop.items.push(item.to_string()),
                None => stops.push(RouteStop {
                    location: location.to_string(),
                    items: vec![item.to_string()],
                }),
            }
        }

        // Stable sort, so input order breaks ties
        stops.sort_by_key(|stop| graph.position(&stop.location).unwrap_or(usize::MAX));

        if graph.contains(start) {
            route.locations.push(start.to_string());
        }

        let mut current = start.to_string();

        for stop in stops {
            let leg = ShortestPathFinder::find_shortest_path(graph, &current, &stop.location);
            if leg.is_empty() {
                tracing::debug!("No path from {:?} to stop {:?}", current, stop.location);
                route.unreachable.extend(stop.items);
                continue;
            }

            Self::append_leg(&mut route.locations, leg);
            current = stop.location.clone();
            route.stops.push(stop);
        }

        if let Some(finish) = finish {
            let leg = ShortestPathFinder::find_shortest_path(graph, &current, finish);
            if leg.is_empty() {
                tracing::debug!("No path from {:?} to finish {:?}", current, finish);
            } else {
                Self::append_leg(&mut route.locations, leg);
                route.finish_reached = true;
            }
        }

        route.hops = route.locations.len().saturating_sub(1);

        tracing::debug!(
            "Planned route with {} stops over {} hops ({} missing, {} unreachable)",
            route.stops.len(),
            route.hops,
            route.missing.len(),
            route.unreachable.len()
        );

        route
    }

    /// Append a leg, skipping its first location when it repeats the last one
    fn append_leg(locations: &mut Vec<String>, leg: Vec<String>) {
        let skip = usize::from(locations.last() == leg.first());
        locations.extend(leg.into_iter().skip(skip));
    }
}
