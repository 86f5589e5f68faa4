use std::fmt::Write;

use serde::Serialize;

use crate::estimate::RouteEstimate;
use crate::graph::Location;
use crate::maps::directions_url;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Separator placed between location names when a path is shown as text.
pub const PATH_SEPARATOR: &str = " → ";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Join location names with [`PATH_SEPARATOR`].
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Hours rounded to two decimals for display.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

/// Currency amount rounded to two decimals for display.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// One estimated route as shown to the user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLine {
    /// 1-based position in non-decreasing distance order.
    pub rank: usize,
    pub path: Vec<Location>,
    pub distance_km: f64,
    pub adjusted_distance_km: f64,
    pub travel_time_hours: f64,
    pub travel_cost: f64,
    pub best: bool,
}

impl RouteLine {
    fn from_estimate(rank: usize, estimate: &RouteEstimate, best: bool) -> Self {
        Self {
            rank,
            path: estimate.path.clone(),
            distance_km: estimate.distance_km,
            adjusted_distance_km: estimate.adjusted_distance_km,
            travel_time_hours: estimate.travel_time_hours,
            travel_cost: estimate.travel_cost,
            best,
        }
    }

    pub fn path_text(&self) -> String {
        format_path(&self.path)
    }
}

/// Structured representation of a route plan that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: Location,
    pub goal: Location,
    pub vehicle: String,
    pub speed_kmh: f64,
    pub conditions_factor: f64,
    pub rate_per_km: f64,
    pub routes: Vec<RouteLine>,
    pub best: RouteLine,
    pub map_url: String,
}

impl RouteSummary {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let best_index = plan.best_index();
        let routes: Vec<RouteLine> = plan
            .routes()
            .iter()
            .enumerate()
            .map(|(index, estimate)| RouteLine::from_estimate(index + 1, estimate, index == best_index))
            .collect();
        let best = RouteLine::from_estimate(best_index + 1, plan.best(), true);

        Self {
            algorithm: plan.algorithm,
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            vehicle: plan.vehicle.name.clone(),
            speed_kmh: plan.vehicle.speed_kmh,
            conditions_factor: plan.conditions_factor,
            rate_per_km: plan.pricing.rate_per_km,
            routes,
            best,
            map_url: directions_url(&plan.start, &plan.goal),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Routes: {}{}{} ({}, {} routes, algorithm: {}, conditions x{:.2})",
            self.start,
            PATH_SEPARATOR,
            self.goal,
            self.vehicle,
            self.routes.len(),
            self.algorithm,
            self.conditions_factor
        );
        for line in &self.routes {
            let _ = writeln!(
                buffer,
                "{:>3}. {} | {:.2} km | {} hours | ₹{}{}",
                line.rank,
                line.path_text(),
                line.distance_km,
                format_hours(line.travel_time_hours),
                format_amount(line.travel_cost),
                if line.best { " (best)" } else { "" }
            );
        }
        let _ = writeln!(
            buffer,
            "Best route: {} | {} hours | ₹{}",
            self.best.path_text(),
            format_hours(self.best.travel_time_hours),
            format_amount(self.best.travel_cost)
        );
        let _ = writeln!(buffer, "Map: {}", self.map_url);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Routes** _{}{}{}_ ({}, algorithm: `{}`, conditions ×{:.2})",
            self.start,
            PATH_SEPARATOR,
            self.goal,
            self.vehicle,
            self.algorithm,
            self.conditions_factor
        );
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "| # | Route | Distance (km) | Time (h) | Cost (₹) |");
        let _ = writeln!(buffer, "|---|---|---:|---:|---:|");
        for line in &self.routes {
            let path = if line.best {
                format!("**{}**", line.path_text())
            } else {
                line.path_text()
            };
            let _ = writeln!(
                buffer,
                "| {} | {} | {:.2} | {} | {} |",
                line.rank,
                path,
                line.distance_km,
                format_hours(line.travel_time_hours),
                format_amount(line.travel_cost)
            );
        }
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "Best route: **{}** in {} hours for ₹{}",
            self.best.path_text(),
            format_hours(self.best.travel_time_hours),
            format_amount(self.best.travel_cost)
        );
        let _ = writeln!(buffer, "[Open in maps]({})", self.map_url);
        buffer
    }
}
