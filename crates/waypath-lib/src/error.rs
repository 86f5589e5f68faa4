use thiserror::Error;

/// Convenient result alias for the Waypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name is not registered in the graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a vehicle kind has no entry in the vehicle catalog.
    #[error("unsupported vehicle: {name}{}", format_suggestions(.suggestions))]
    UnsupportedVehicle {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the destination cannot be reached from the start.
    #[error("no route found between {start} and {goal}")]
    NoRouteFound { start: String, goal: String },

    /// Raised at the input boundary before any search is attempted.
    #[error("invalid selection: {reason}")]
    InvalidSelection { reason: String },

    /// Raised when an edge weight is not a finite positive number.
    #[error("invalid weight {weight} for edge {from} - {to}; expected a finite positive distance")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when an edge is structurally unusable (e.g. a self-loop).
    #[error("invalid edge: {message}")]
    InvalidEdge { message: String },

    /// Raised when a conditions source yields an unusable multiplier.
    #[error("invalid conditions factor {factor}; expected a finite positive multiplier")]
    InvalidConditionsFactor { factor: f64 },

    /// Raised when network data fails validation.
    #[error("invalid network data: {message}")]
    NetworkData { message: String },

    /// Raised when vehicle data fails validation.
    #[error("invalid vehicle data: {message}")]
    VehicleData { message: String },

    /// Raised when duplicate vehicle names are encountered during catalog load.
    #[error("duplicate vehicle name encountered: {name}")]
    DuplicateVehicle { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// `true` for errors produced by input validation rather than by the data
    /// or the search itself.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidSelection { .. }
                | Error::UnknownLocation { .. }
                | Error::UnsupportedVehicle { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
