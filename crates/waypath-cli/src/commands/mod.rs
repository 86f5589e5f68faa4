// Module exports for CLI subcommands.
//
// Each module handles one subcommand. main.rs parses arguments, builds an
// `AppContext` and dispatches to these handlers.

pub mod locations;
pub mod route;
pub mod session;
pub mod vehicles;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use waypath_lib::{
    load_network, reference_network, ConditionsSource, CostModel, Error as LibError,
    FixedConditions, Graph, SimulatedConditions, VehicleCatalog,
};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Global options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Network CSV; the built-in reference network when `None`.
    pub network: Option<PathBuf>,
    /// Vehicle catalog CSV; the built-in catalog when `None`.
    pub vehicles: Option<PathBuf>,
    pub format: OutputFormat,
    /// Seed for simulated conditions.
    pub seed: Option<u64>,
    /// Fixed conditions multiplier; overrides simulation.
    pub conditions: Option<f64>,
    pub rate_per_km: f64,
    pub no_color: bool,
}

/// Loaded data and collaborators for one CLI invocation.
pub struct AppContext {
    pub graph: Graph,
    pub vehicles: VehicleCatalog,
    pub format: OutputFormat,
    pub palette: ColorPalette,
    pub pricing: CostModel,
    conditions: Box<dyn ConditionsSource>,
}

impl AppContext {
    pub fn load(options: &AppOptions) -> Result<Self> {
        let graph = load_graph(options.network.as_deref())?;
        let vehicles = load_vehicles(options.vehicles.as_deref())?;

        let conditions: Box<dyn ConditionsSource> = match (options.conditions, options.seed) {
            (Some(factor), _) => Box::new(FixedConditions(factor)),
            (None, Some(seed)) => Box::new(SimulatedConditions::seeded(seed)),
            (None, None) => Box::new(SimulatedConditions::new()),
        };

        Ok(Self {
            graph,
            vehicles,
            format: options.format,
            palette: ColorPalette::for_options(options.no_color),
            pricing: CostModel::new(options.rate_per_km),
            conditions,
        })
    }

    pub fn conditions(&mut self) -> &mut dyn ConditionsSource {
        self.conditions.as_mut()
    }
}

fn load_graph(path: Option<&Path>) -> Result<Graph> {
    match path {
        Some(path) => load_network(path)
            .with_context(|| format!("failed to load network from {}", path.display())),
        None => {
            debug!("using built-in reference network");
            Ok(reference_network())
        }
    }
}

fn load_vehicles(path: Option<&Path>) -> Result<VehicleCatalog> {
    match path {
        Some(path) => VehicleCatalog::from_path(path)
            .with_context(|| format!("failed to load vehicle catalog from {}", path.display())),
        None => Ok(VehicleCatalog::builtin()),
    }
}

/// Turn a planning error into the message shown to the user.
pub fn format_route_error(err: &LibError, vehicles: &VehicleCatalog) -> String {
    match err {
        LibError::UnknownLocation { name, suggestions } => {
            let mut message = format!("Unknown location '{name}'.");
            push_suggestions(&mut message, suggestions);
            message
        }
        LibError::UnsupportedVehicle { name, suggestions } => {
            let mut message = format!("Unsupported vehicle '{name}'.");
            if suggestions.is_empty() {
                message.push_str(&format!(
                    " Available vehicles: {}.",
                    vehicles.vehicle_names().join(", ")
                ));
            } else {
                push_suggestions(&mut message, suggestions);
            }
            message
        }
        LibError::NoRouteFound { start, goal } => {
            format!("No route found between {start} and {goal}.")
        }
        LibError::InvalidSelection { reason } => format!("Invalid selection: {reason}."),
        other => other.to_string(),
    }
}

fn push_suggestions(message: &mut String, suggestions: &[String]) {
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
}
