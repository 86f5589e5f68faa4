//! Route planning module.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported route enumeration algorithms
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Estimated routes plus the selected best one
//! - [`plan_routes`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Candidate enumeration goes through the [`RoutePlanner`] trait. The
//! orchestration in [`plan_routes`] validates the selection, samples road
//! conditions once, and estimates every candidate with that single factor.
//!
//! # Example
//!
//! ```
//! use waypath_lib::{plan_routes, reference_network, FixedConditions, RouteRequest, VehicleCatalog};
//!
//! let graph = reference_network();
//! let vehicles = VehicleCatalog::builtin();
//! let request = RouteRequest::new("Hyderabad", "Karimnagar", "Car");
//! let plan = plan_routes(&graph, &vehicles, &mut FixedConditions(1.0), &request).unwrap();
//! assert_eq!(plan.best().distance_km, 210.0);
//! ```

mod planner;

pub use planner::{select_planner, KShortestPlanner, PriorityPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::conditions::{sample_factor, ConditionsSource};
use crate::error::{Error, Result};
use crate::estimate::{best_route_index, estimate_routes, CostModel, RouteEstimate};
use crate::graph::{Graph, Location};
use crate::vehicle::{VehicleCatalog, VehicleProfile};

/// Route count requested from Yen's search when the caller sets no limit.
pub const DEFAULT_MAX_ROUTES: usize = 5;

/// Supported route enumeration algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Priority-ordered collector; may skip some simple paths.
    #[default]
    Priority,
    /// Yen's k-shortest loopless paths.
    Yen,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Priority => "priority",
            RouteAlgorithm::Yen => "yen",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub vehicle: String,
    pub algorithm: RouteAlgorithm,
    /// Upper bound on the number of candidates kept (Yen: `k`).
    pub max_routes: Option<usize>,
    pub pricing: CostModel,
}

impl RouteRequest {
    /// Request with the default algorithm and pricing.
    pub fn new(
        start: impl Into<String>,
        goal: impl Into<String>,
        vehicle: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            vehicle: vehicle.into(),
            algorithm: RouteAlgorithm::default(),
            max_routes: None,
            pricing: CostModel::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = Some(max_routes);
        self
    }

    pub fn with_pricing(mut self, pricing: CostModel) -> Self {
        self.pricing = pricing;
        self
    }
}

/// Estimated routes for one request.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: Location,
    pub goal: Location,
    pub vehicle: VehicleProfile,
    /// Conditions multiplier shared by every estimate in this plan.
    pub conditions_factor: f64,
    pub pricing: CostModel,
    /// Candidates in non-decreasing raw distance; never empty.
    routes: Vec<RouteEstimate>,
    /// Index into `routes` of the minimum travel time.
    best: usize,
}

impl RoutePlan {
    /// Candidates in non-decreasing raw distance.
    pub fn routes(&self) -> &[RouteEstimate] {
        &self.routes
    }

    /// Rank (zero-based) of the estimate with minimum travel time.
    pub fn best_index(&self) -> usize {
        self.best
    }

    /// The estimate with minimum travel time.
    pub fn best(&self) -> &RouteEstimate {
        &self.routes[self.best]
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// Reject selections that must never reach the search engine.
///
/// Empty fields and identical endpoints fail with
/// [`Error::InvalidSelection`]. Endpoints are compared exactly after
/// trimming; names differing only in case may be distinct locations.
pub fn validate_selection(request: &RouteRequest) -> Result<()> {
    let start = request.start.trim();
    let goal = request.goal.trim();

    if start.is_empty() {
        return Err(invalid_selection("a start location is required"));
    }
    if goal.is_empty() {
        return Err(invalid_selection("a destination is required"));
    }
    if request.vehicle.trim().is_empty() {
        return Err(invalid_selection("a vehicle type is required"));
    }
    if start == goal {
        return Err(invalid_selection(
            "start and destination must be different locations",
        ));
    }
    let rate = request.pricing.rate_per_km;
    if !rate.is_finite() || rate < 0.0 {
        return Err(invalid_selection(
            "rate per km must be a finite non-negative number",
        ));
    }
    Ok(())
}

fn invalid_selection(reason: &str) -> Error {
    Error::InvalidSelection {
        reason: reason.to_string(),
    }
}

/// Plan, estimate and rank routes for a request.
///
/// This is the main entry point for route planning. It:
/// 1. Validates the selection
/// 2. Resolves both locations and the vehicle profile
/// 3. Samples the conditions factor once
/// 4. Enumerates candidates with the selected planner
/// 5. Estimates every candidate and picks the fastest
pub fn plan_routes(
    graph: &Graph,
    vehicles: &VehicleCatalog,
    conditions: &mut dyn ConditionsSource,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    validate_selection(request)?;

    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;
    if start == goal {
        return Err(invalid_selection(
            "start and destination must be different locations",
        ));
    }
    let vehicle = vehicles.lookup(&request.vehicle)?;

    let factor = sample_factor(conditions)?;

    let planner = select_planner(request);
    let candidates = planner.find_routes(graph, start, goal)?;
    debug!(
        algorithm = %planner.algorithm(),
        candidates = candidates.len(),
        "enumerated route candidates"
    );

    let routes = estimate_routes(&candidates, factor, vehicle, &request.pricing);
    let best = best_route_index(&routes).ok_or_else(|| Error::NoRouteFound {
        start: start.to_string(),
        goal: goal.to_string(),
    })?;

    info!(
        start,
        goal,
        vehicle = %vehicle.name,
        routes = routes.len(),
        factor,
        best_hours = routes[best].travel_time_hours,
        "planned routes"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start: start.to_string(),
        goal: goal.to_string(),
        vehicle: vehicle.clone(),
        conditions_factor: factor,
        pricing: request.pricing,
        routes,
        best,
    })
}
