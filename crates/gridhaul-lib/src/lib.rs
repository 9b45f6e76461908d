//! Gridhaul library entry points.
//!
//! This crate plans a single vehicle's pickup-and-delivery route across a
//! rectangular grid under cargo-capacity and fuel-range constraints. It
//! exposes the grid pathfinder, the fuel rules, the greedy dispatch engine,
//! the route log and its metrics. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod fuel;
pub mod grid;
pub mod metrics;
pub mod order;
pub mod output;
pub mod path;
pub mod routing;
pub mod scenario;
pub mod vehicle;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{Error, Result};
pub use fuel::FuelRules;
pub use grid::{Coord, GridBounds};
pub use metrics::{calculate_metrics, RouteMetrics};
pub use order::{Order, OrderId};
pub use output::{RouteRenderMode, RouteStep, RouteSummary, StepKind};
pub use path::{find_path_a_star, find_path_bfs, path_distance};
pub use routing::{plan_route, DispatchPhase, PathAlgorithm, PlanRequest, RoutePlan};
pub use scenario::{resolve_scenario_path, Scenario};
pub use vehicle::{FleetState, VehicleSpec};
