use serde::Serialize;

use crate::graph::Location;
use crate::path::RouteCandidate;
use crate::vehicle::VehicleProfile;

/// Cost per adjusted kilometre used when no rate is configured.
pub const DEFAULT_RATE_PER_KM: f64 = 2.0;

/// Pricing applied to adjusted distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostModel {
    pub rate_per_km: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            rate_per_km: DEFAULT_RATE_PER_KM,
        }
    }
}

impl CostModel {
    pub fn new(rate_per_km: f64) -> Self {
        Self { rate_per_km }
    }

    pub fn cost(&self, adjusted_distance_km: f64) -> f64 {
        adjusted_distance_km * self.rate_per_km
    }
}

/// Time and cost estimate for one route candidate.
///
/// Values are stored unrounded; renderers round for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEstimate {
    pub path: Vec<Location>,
    /// Raw distance in kilometres.
    pub distance_km: f64,
    /// Raw distance scaled by the conditions factor.
    pub adjusted_distance_km: f64,
    pub travel_time_hours: f64,
    pub travel_cost: f64,
}

impl RouteEstimate {
    pub fn from_candidate(
        candidate: &RouteCandidate,
        factor: f64,
        vehicle: &VehicleProfile,
        pricing: &CostModel,
    ) -> Self {
        let adjusted = candidate.distance * factor;
        Self {
            path: candidate.path.clone(),
            distance_km: candidate.distance,
            adjusted_distance_km: adjusted,
            travel_time_hours: vehicle.travel_hours(adjusted),
            travel_cost: pricing.cost(adjusted),
        }
    }

    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Estimate every candidate with one shared conditions factor.
pub fn estimate_routes(
    candidates: &[RouteCandidate],
    factor: f64,
    vehicle: &VehicleProfile,
    pricing: &CostModel,
) -> Vec<RouteEstimate> {
    candidates
        .iter()
        .map(|candidate| RouteEstimate::from_candidate(candidate, factor, vehicle, pricing))
        .collect()
}

/// Index of the fastest estimate. Exact ties keep the earliest one.
pub fn best_route_index(estimates: &[RouteEstimate]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, estimate) in estimates.iter().enumerate() {
        match best {
            Some((_, time)) if estimate.travel_time_hours >= time => {}
            _ => best = Some((index, estimate.travel_time_hours)),
        }
    }
    best.map(|(index, _)| index)
}
