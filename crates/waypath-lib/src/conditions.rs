//! Road-conditions oracle.
//!
//! A conditions source yields one positive multiplier per search, standing in
//! for combined traffic and weather drag. The planner samples it exactly once
//! per invocation so every candidate route is scaled by the same factor.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};

/// Traffic drag drawn per search.
pub const TRAFFIC_RANGE: Range<f64> = 0.8..1.5;
/// Weather drag drawn per search.
pub const WEATHER_RANGE: Range<f64> = 0.9..1.2;

/// Source of the conditions multiplier applied to raw route distances.
pub trait ConditionsSource {
    /// Draw the multiplier for one search.
    fn sample(&mut self) -> f64;
}

impl<T: ConditionsSource + ?Sized> ConditionsSource for &mut T {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<T: ConditionsSource + ?Sized> ConditionsSource for Box<T> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Draw once from `source` and reject non-finite or non-positive factors.
pub fn sample_factor(source: &mut dyn ConditionsSource) -> Result<f64> {
    let factor = source.sample();
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidConditionsFactor { factor });
    }
    debug!(factor, "sampled conditions factor");
    Ok(factor)
}

/// Simulated traffic × weather multiplier, rounded to two decimals.
///
/// The product lies in roughly `0.72..1.8`.
pub struct SimulatedConditions(SmallRng);

impl SimulatedConditions {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        SimulatedConditions(SmallRng::from_entropy())
    }

    /// Deterministic sequence for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        SimulatedConditions(SmallRng::seed_from_u64(seed))
    }
}

impl Default for SimulatedConditions {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionsSource for SimulatedConditions {
    fn sample(&mut self) -> f64 {
        let traffic = self.0.gen_range(TRAFFIC_RANGE);
        let weather = self.0.gen_range(WEATHER_RANGE);
        ((traffic * weather) * 100.0).round() / 100.0
    }
}

/// Constant multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedConditions(pub f64);

impl ConditionsSource for FixedConditions {
    fn sample(&mut self) -> f64 {
        self.0
    }
}
