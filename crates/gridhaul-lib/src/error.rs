use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Coord;

/// Convenient result alias for the gridhaul library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a planning input is malformed: an out-of-bounds coordinate,
    /// a non-positive vehicle parameter, a duplicate order id, and similar.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// Raised when a refuel detour is required but no gas station can be
    /// reached with the fuel on board, or when a leg is longer than a full
    /// tank can cover.
    #[error(
        "fuel exhausted at {position} with {fuel:.2} fuel remaining{}",
        format_target(.target, .required)
    )]
    FuelExhausted {
        position: Coord,
        fuel: f64,
        target: Option<Coord>,
        required: f64,
    },

    /// Internal logic error: the load would exceed the vehicle capacity.
    #[error("cargo load {load:.2} would exceed vehicle capacity {capacity:.2}")]
    CapacityViolation { load: f64, capacity: f64 },

    /// Raised when the pathfinder could not connect two coordinates.
    #[error("no path found between {start} and {goal}")]
    PathNotFound { start: Coord, goal: Coord },

    /// Raised when a scenario file could not be parsed.
    #[error("failed to parse scenario {path}: {message}")]
    ScenarioParse { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building a [`Error::Configuration`].
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}

fn format_target(target: &Option<Coord>, required: &f64) -> String {
    match target {
        Some(coord) => format!("; reaching {coord} needs {required:.2}"),
        None => "; no gas station available".to_string(),
    }
}
