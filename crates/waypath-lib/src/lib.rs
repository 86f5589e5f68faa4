//! Waypath library entry points.
//!
//! This crate loads a road network into an undirected weighted graph,
//! enumerates candidate routes between two locations, and ranks them by
//! travel time for a chosen vehicle under a sampled road-conditions factor.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod conditions;
pub mod error;
pub mod estimate;
pub mod graph;
pub mod history;
pub mod maps;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod vehicle;

pub use conditions::{sample_factor, ConditionsSource, FixedConditions, SimulatedConditions};
pub use error::{Error, Result};
pub use estimate::{best_route_index, estimate_routes, CostModel, RouteEstimate};
pub use graph::{Edge, Graph, Location};
pub use history::{RecentSearch, RecentSearches};
pub use maps::directions_url;
pub use network::{load_network, load_network_from_reader, reference_network};
pub use output::{RouteRenderMode, RouteSummary};
pub use path::{find_k_shortest_routes, find_routes, RouteCandidate};
pub use routing::{
    plan_routes, validate_selection, RouteAlgorithm, RoutePlan, RouteRequest, DEFAULT_MAX_ROUTES,
};
pub use vehicle::{VehicleCatalog, VehicleProfile};
