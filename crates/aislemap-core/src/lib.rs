//! Aislemap Core - Store navigation engine
//!
//! This crate models a store as an undirected graph of named locations,
//! maps items to the location that stocks them, and finds the shortest
//! walk (by number of hops) between locations.

pub mod error;
pub mod graph;
pub mod items;
pub mod layout;
pub mod limits;
pub mod pathfinding;
pub mod route;
pub mod store;

pub use error::{Error, Result};
pub use graph::{LocationGraph, Neighbors};
pub use items::ItemIndex;
pub use layout::{ItemSpec, PathSpec, StoreLayout};
pub use limits::ValidationError;
pub use pathfinding::{PathResult, SearchStats, ShortestPathFinder, StorePath};
pub use route::{Route, RoutePlanner, RouteStop};
pub use store::{ItemLookup, Store};
