//! Plan and demo command handlers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::{debug, info};

use gridhaul_lib::{
    plan_route, resolve_scenario_path, Error as PlanError, PathAlgorithm, PlanRequest,
    RouteSummary, Scenario,
};

use gridhaul_cli::output::OutputFormat;

/// Pathfinder choice as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    AStar,
    Bfs,
}

impl From<AlgorithmArg> for PathAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => PathAlgorithm::AStar,
            AlgorithmArg::Bfs => PathAlgorithm::Bfs,
        }
    }
}

/// Arguments for the plan command.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanCommandArgs {
    /// Scenario JSON file. Falls back to GRIDHAUL_SCENARIO, then
    /// scenario.json in the user configuration directory, then the demo.
    #[arg(long)]
    pub scenario: Option<PathBuf>,
    /// Pathfinder used for each leg.
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
    /// Override the vehicle cargo capacity (kg).
    #[arg(long)]
    pub capacity: Option<f64>,
    /// Override the fuel tank capacity (liters).
    #[arg(long)]
    pub fuel_capacity: Option<f64>,
    /// Override fuel consumed per unit of grid distance.
    #[arg(long)]
    pub consumption: Option<f64>,
    /// Fuel on board at the start instead of a full tank.
    #[arg(long)]
    pub initial_fuel: Option<f64>,
}

impl PlanCommandArgs {
    /// Apply the command-line overrides on top of a loaded scenario.
    pub fn apply(&self, mut request: PlanRequest) -> PlanRequest {
        if let Some(algorithm) = self.algorithm {
            request.algorithm = algorithm.into();
        }
        let vehicle = &mut request.vehicle;
        if let Some(capacity) = self.capacity {
            vehicle.capacity = capacity;
        }
        if let Some(fuel_capacity) = self.fuel_capacity {
            vehicle.fuel_capacity = fuel_capacity;
        }
        if let Some(consumption) = self.consumption {
            vehicle.fuel_consumption = consumption;
        }
        if self.initial_fuel.is_some() {
            vehicle.initial_fuel = self.initial_fuel;
        }
        request
    }
}

/// Arguments for the demo command.
#[derive(Args, Debug, Clone, Default)]
pub struct DemoCommandArgs {
    /// Write the demo scenario as JSON to this path instead of planning it.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Handle the plan subcommand.
pub fn handle_plan_command(format: OutputFormat, args: &PlanCommandArgs) -> Result<()> {
    let scenario = load_scenario(args.scenario.as_deref())?;
    let request = args.apply(scenario.into_request());
    run_plan(format, &request)
}

/// Handle the demo subcommand.
pub fn handle_demo_command(format: OutputFormat, args: &DemoCommandArgs) -> Result<()> {
    let scenario = Scenario::demo();
    if let Some(target) = &args.export {
        let json = serde_json::to_string_pretty(&scenario)
            .context("failed to serialise the demo scenario")?;
        fs::write(target, json)
            .with_context(|| format!("failed to write scenario to {}", target.display()))?;
        println!("Demo scenario written to {}", target.display());
        return Ok(());
    }
    run_plan(format, &scenario.into_request())
}

/// Load the scenario named by `explicit`, the environment or the user
/// configuration directory, or fall back to the built-in demo.
pub fn load_scenario(explicit: Option<&Path>) -> Result<Scenario> {
    match resolve_scenario_path(explicit) {
        Some(path) => {
            debug!("loading scenario from {}", path.display());
            Scenario::from_path(&path)
                .with_context(|| format!("failed to load scenario from {}", path.display()))
        }
        None => {
            info!("no scenario configured; planning the built-in demo");
            Ok(Scenario::demo())
        }
    }
}

fn run_plan(format: OutputFormat, request: &PlanRequest) -> Result<()> {
    let plan = plan_route(request).map_err(handle_plan_failure)?;
    let summary = RouteSummary::from_plan(request.grid, request.vehicle.start, &plan);
    format
        .render_plan(&summary)
        .context("failed to write the route plan")
}

fn handle_plan_failure(err: PlanError) -> anyhow::Error {
    match err {
        PlanError::FuelExhausted { .. } => anyhow::anyhow!(
            "Route planning failed: {err}. Add a gas station within range or raise --fuel-capacity."
        ),
        PlanError::Configuration { message } => anyhow::anyhow!("Invalid scenario: {message}"),
        other => anyhow::Error::new(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridhaul_lib::Coord;

    #[test]
    fn overrides_replace_vehicle_fields() {
        let args = PlanCommandArgs {
            algorithm: Some(AlgorithmArg::Bfs),
            capacity: Some(12.0),
            initial_fuel: Some(3.0),
            ..PlanCommandArgs::default()
        };
        let request = args.apply(Scenario::demo().into_request());
        assert_eq!(request.algorithm, PathAlgorithm::Bfs);
        assert_eq!(request.vehicle.capacity, 12.0);
        assert_eq!(request.vehicle.fuel_capacity, 30.0);
        assert_eq!(request.vehicle.initial_fuel, Some(3.0));
    }

    #[test]
    fn no_overrides_keep_scenario() {
        let request = PlanCommandArgs::default().apply(Scenario::demo().into_request());
        assert_eq!(request, Scenario::demo().into_request());
    }

    #[test]
    fn fuel_failure_is_friendly() {
        let err = handle_plan_failure(PlanError::FuelExhausted {
            position: Coord::new(0, 0),
            fuel: 1.0,
            target: Some(Coord::new(5, 0)),
            required: 5.0,
        });
        let message = err.to_string();
        assert!(message.starts_with("Route planning failed: fuel exhausted at (0, 0)"));
        assert!(message.contains("--fuel-capacity"));
    }
}
