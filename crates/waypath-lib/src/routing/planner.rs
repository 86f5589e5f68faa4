//! Route search strategies.
//!
//! `plan_routes` delegates candidate enumeration to a [`RoutePlanner`], so
//! the approximate priority collector and Yen's k-shortest search share one
//! orchestration path.

use crate::graph::Graph;
use crate::path::{find_k_shortest_routes, find_routes, RouteCandidate};
use crate::Result;

use super::{RouteAlgorithm, RouteRequest, DEFAULT_MAX_ROUTES};

/// Trait for route enumeration strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Enumerate candidates from `start` to `goal` in non-decreasing distance.
    ///
    /// Fails with [`crate::Error::NoRouteFound`] when `goal` is unreachable.
    fn find_routes(&self, graph: &Graph, start: &str, goal: &str) -> Result<Vec<RouteCandidate>>;
}

/// Priority-ordered collector of every route the exploration completes.
#[derive(Debug, Clone, Default)]
pub struct PriorityPlanner {
    limit: Option<usize>,
}

impl PriorityPlanner {
    /// Keep at most `limit` routes (the shortest ones).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
        }
    }
}

impl RoutePlanner for PriorityPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Priority
    }

    fn find_routes(&self, graph: &Graph, start: &str, goal: &str) -> Result<Vec<RouteCandidate>> {
        let mut routes = find_routes(graph, start, goal)?;
        if let Some(limit) = self.limit {
            routes.truncate(limit);
        }
        Ok(routes)
    }
}

/// Yen's k-shortest loopless paths.
#[derive(Debug, Clone)]
pub struct KShortestPlanner {
    k: usize,
}

impl KShortestPlanner {
    pub fn new(k: usize) -> Self {
        Self { k: k.max(1) }
    }
}

impl Default for KShortestPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUTES)
    }
}

impl RoutePlanner for KShortestPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Yen
    }

    fn find_routes(&self, graph: &Graph, start: &str, goal: &str) -> Result<Vec<RouteCandidate>> {
        find_k_shortest_routes(graph, start, goal, self.k)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Priority => match request.max_routes {
            Some(limit) => Box::new(PriorityPlanner::with_limit(limit)),
            None => Box::new(PriorityPlanner::default()),
        },
        RouteAlgorithm::Yen => Box::new(KShortestPlanner::new(
            request.max_routes.unwrap_or(DEFAULT_MAX_ROUTES),
        )),
    }
}
