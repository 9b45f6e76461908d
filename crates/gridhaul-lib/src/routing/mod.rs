//! Route planning module for capacity- and fuel-constrained deliveries.
//!
//! This module provides:
//! - [`PathAlgorithm`] - Supported grid pathfinding algorithms (A*, BFS)
//! - [`PlanRequest`] - Grid, vehicle, orders and gas stations for one run
//! - [`RoutePlan`] - The route log and its metrics
//! - [`plan_route`] - Main entry point for computing a plan
//!
//! # Strategy Pattern
//!
//! Legs between cells are resolved through the [`PathPlanner`] trait, so the
//! dispatch loop does not depend on a particular search algorithm.
//!
//! # Example
//!
//! ```
//! use gridhaul_lib::{plan_route, Coord, GridBounds, Order, PlanRequest, VehicleSpec};
//!
//! let request = PlanRequest::new(
//!     GridBounds::new(3, 3).unwrap(),
//!     VehicleSpec::new(Coord::new(0, 0), 100.0, 100.0),
//!     vec![Order::new(1, Coord::new(0, 2), Coord::new(2, 2), 5.0)],
//!     Vec::new(),
//! );
//! let plan = plan_route(&request).unwrap();
//! assert_eq!(plan.metrics.total_distance, 8);
//! ```

mod engine;
mod planner;

pub use engine::DispatchPhase;
pub use planner::{select_planner, AStarPlanner, BfsPlanner, PathPlanner};

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::grid::{Coord, GridBounds};
use crate::metrics::{calculate_metrics, RouteMetrics};
use crate::order::Order;
use crate::output::RouteStep;
use crate::vehicle::{FleetState, VehicleSpec};

use engine::DispatchEngine;

/// Supported grid pathfinding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// A* search guided by Manhattan distance.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Breadth-first search.
    Bfs,
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathAlgorithm::AStar => "a-star",
            PathAlgorithm::Bfs => "bfs",
        };
        f.write_str(value)
    }
}

/// Everything a planning run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub grid: GridBounds,
    pub vehicle: VehicleSpec,
    pub orders: Vec<Order>,
    pub gas_stations: Vec<Coord>,
    pub algorithm: PathAlgorithm,
}

impl PlanRequest {
    /// Request using the default A* planner.
    pub fn new(
        grid: GridBounds,
        vehicle: VehicleSpec,
        orders: Vec<Order>,
        gas_stations: Vec<Coord>,
    ) -> Self {
        Self {
            grid,
            vehicle,
            orders,
            gas_stations,
            algorithm: PathAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: PathAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check every input before planning starts.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.vehicle.validate()?;
        self.grid
            .ensure_contains(self.vehicle.start, "vehicle start")?;

        let mut seen = HashSet::with_capacity(self.orders.len());
        for order in &self.orders {
            if !seen.insert(order.id) {
                return Err(Error::configuration(format!(
                    "duplicate order id {}",
                    order.id
                )));
            }
            if !order.weight.is_finite() || order.weight <= 0.0 {
                return Err(Error::configuration(format!(
                    "order {} weight must be a finite positive number, got {}",
                    order.id, order.weight
                )));
            }
            if order.weight > self.vehicle.capacity {
                return Err(Error::configuration(format!(
                    "order {} weight {} exceeds vehicle capacity {}",
                    order.id, order.weight, self.vehicle.capacity
                )));
            }
            self.grid
                .ensure_contains(order.pickup, &format!("order {} pickup", order.id))?;
            self.grid
                .ensure_contains(order.delivery, &format!("order {} delivery", order.id))?;
        }

        for station in &self.gas_stations {
            self.grid.ensure_contains(*station, "gas station")?;
        }

        Ok(())
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoutePlan {
    pub algorithm: PathAlgorithm,
    pub steps: Vec<RouteStep>,
    pub metrics: RouteMetrics,
}

impl RoutePlan {
    /// Number of depot-to-depot trips in the plan.
    pub fn trip_count(&self) -> u32 {
        self.metrics.trips
    }
}

/// Validate the request and run the greedy dispatch over a fresh copy of the
/// vehicle state.
///
/// The run is all-or-nothing: on failure no partial route is returned.
pub fn plan_route(request: &PlanRequest) -> Result<RoutePlan> {
    request.validate()?;

    let fleet = FleetState::new(&request.vehicle)?;
    let planner = select_planner(request.algorithm);
    let engine = DispatchEngine::new(
        request.grid,
        planner.as_ref(),
        &request.gas_stations,
        &request.orders,
        fleet,
    );

    let steps = engine.run()?;
    let metrics = calculate_metrics(&steps);

    info!(
        algorithm = %request.algorithm,
        orders = request.orders.len(),
        steps = metrics.total_steps,
        trips = metrics.trips,
        distance = metrics.total_distance,
        refuels = metrics.refuel_count,
        "route plan complete"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        steps,
        metrics,
    })
}
