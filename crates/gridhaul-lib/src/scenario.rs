//! Scenario files: the grid, vehicle, orders and gas stations for a run.
//!
//! Scenarios are JSON documents:
//!
//! ```json
//! {
//!   "grid": { "rows": 10, "cols": 10 },
//!   "vehicle": { "start": [2, 3], "capacity": 50, "fuel_capacity": 30 },
//!   "orders": [ { "id": 1, "pickup": [3, 5], "delivery": [8, 7], "weight": 20 } ],
//!   "gas_stations": [[4, 9], [9, 1]]
//! }
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Coord, GridBounds};
use crate::order::Order;
use crate::routing::{PathAlgorithm, PlanRequest};
use crate::vehicle::VehicleSpec;

/// Environment variable pointing at a scenario file.
pub const SCENARIO_ENV: &str = "GRIDHAUL_SCENARIO";

/// File name looked up in the platform configuration directory.
pub const SCENARIO_FILE_NAME: &str = "scenario.json";

/// Planning inputs as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub grid: GridBounds,
    pub vehicle: VehicleSpec,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub gas_stations: Vec<Coord>,
    #[serde(default)]
    pub algorithm: PathAlgorithm,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents).map_err(|err| Error::ScenarioParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Parse a scenario from a JSON string.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Built-in demonstration: a 10x10 grid, three orders and two stations.
    pub fn demo() -> Self {
        Self {
            grid: GridBounds { rows: 10, cols: 10 },
            vehicle: VehicleSpec::new(Coord::new(2, 3), 50.0, 30.0),
            orders: vec![
                Order::new(1, Coord::new(3, 5), Coord::new(8, 7), 20.0),
                Order::new(2, Coord::new(1, 8), Coord::new(6, 2), 15.0),
                Order::new(3, Coord::new(7, 4), Coord::new(9, 9), 10.0),
            ],
            gas_stations: vec![Coord::new(4, 9), Coord::new(9, 1)],
            algorithm: PathAlgorithm::AStar,
        }
    }

    /// Convert into a planning request.
    pub fn into_request(self) -> PlanRequest {
        PlanRequest {
            grid: self.grid,
            vehicle: self.vehicle,
            orders: self.orders,
            gas_stations: self.gas_stations,
            algorithm: self.algorithm,
        }
    }
}

/// Resolve which scenario file to load.
///
/// The resolution order is:
/// 1. Explicit `explicit` argument when provided.
/// 2. `GRIDHAUL_SCENARIO` environment variable.
/// 3. `scenario.json` in the platform-specific configuration directory, if
///    it exists.
///
/// Returns `None` when nothing is configured; callers fall back to
/// [`Scenario::demo`].
pub fn resolve_scenario_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = env::var_os(SCENARIO_ENV) {
        return Some(PathBuf::from(env_path));
    }

    let candidate = ProjectDirs::from("", "", "gridhaul")?
        .config_dir()
        .join(SCENARIO_FILE_NAME);
    if candidate.exists() {
        debug!("using scenario from {}", candidate.display());
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenario_is_valid() {
        Scenario::demo().into_request().validate().unwrap();
    }

    #[test]
    fn explicit_path_wins() {
        let explicit = Path::new("/tmp/some-scenario.json");
        assert_eq!(
            resolve_scenario_path(Some(explicit)),
            Some(explicit.to_path_buf())
        );
    }

    #[test]
    fn optional_sections_default() {
        let scenario = Scenario::from_json(
            r#"{"grid": {"rows": 2, "cols": 2}, "vehicle": {"start": [0, 0], "capacity": 1, "fuel_capacity": 1}}"#,
        )
        .unwrap();
        assert!(scenario.orders.is_empty());
        assert!(scenario.gas_stations.is_empty());
        assert_eq!(scenario.algorithm, PathAlgorithm::AStar);
    }
}
