//! Greedy multi-phase dispatch.
//!
//! The engine alternates a pickup burst (nearest capacity-feasible pickup
//! first) with a full delivery drain (nearest drop-off first), returning to
//! the depot between trips while orders remain. Any leg the fuel on board
//! cannot cover is preceded by a detour to the nearest gas station.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::{Coord, GridBounds};
use crate::order::Order;
use crate::output::{RouteStep, StepKind};
use crate::path::path_distance;
use crate::vehicle::FleetState;

use super::planner::PathPlanner;

/// States of the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPhase {
    Pickup,
    Delivery,
    TripReturn,
    FinalReturn,
    Done,
}

impl fmt::Display for DispatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DispatchPhase::Pickup => "pickup",
            DispatchPhase::Delivery => "delivery",
            DispatchPhase::TripReturn => "trip_return",
            DispatchPhase::FinalReturn => "final_return",
            DispatchPhase::Done => "done",
        };
        f.write_str(value)
    }
}

/// Single-use dispatch run. Owns the fleet state and both order pools; the
/// pools hold indices into `orders` so list position doubles as tie-break.
pub(crate) struct DispatchEngine<'a> {
    grid: GridBounds,
    planner: &'a dyn PathPlanner,
    stations: &'a [Coord],
    orders: &'a [Order],
    fleet: FleetState,
    unfulfilled: Vec<usize>,
    in_transit: Vec<usize>,
    trip: u32,
    steps: Vec<RouteStep>,
}

impl<'a> DispatchEngine<'a> {
    pub(crate) fn new(
        grid: GridBounds,
        planner: &'a dyn PathPlanner,
        stations: &'a [Coord],
        orders: &'a [Order],
        fleet: FleetState,
    ) -> Self {
        Self {
            grid,
            planner,
            stations,
            orders,
            fleet,
            unfulfilled: (0..orders.len()).collect(),
            in_transit: Vec::new(),
            trip: 1,
            steps: Vec::with_capacity(orders.len() * 2 + 2),
        }
    }

    /// Run the state machine to completion and hand back the route log.
    pub(crate) fn run(mut self) -> Result<Vec<RouteStep>> {
        self.steps.push(RouteStep::start(
            self.fleet.position(),
            self.trip,
            self.fleet.fuel(),
            self.fleet.load(),
        ));

        let mut phase = DispatchPhase::Pickup;
        while phase != DispatchPhase::Done {
            let next = match phase {
                DispatchPhase::Pickup => {
                    let picked = self.pickup_burst()?;
                    let idle = picked == 0 && self.in_transit.is_empty();
                    if idle && !self.unfulfilled.is_empty() {
                        return Err(self.stalled());
                    }
                    DispatchPhase::Delivery
                }
                DispatchPhase::Delivery => {
                    self.delivery_drain()?;
                    if self.unfulfilled.is_empty() {
                        DispatchPhase::FinalReturn
                    } else {
                        DispatchPhase::TripReturn
                    }
                }
                DispatchPhase::TripReturn => {
                    self.trip_return()?;
                    DispatchPhase::Pickup
                }
                DispatchPhase::FinalReturn => {
                    if !self.fleet.is_at_depot() {
                        self.return_to_depot(StepKind::FinalReturn)?;
                    }
                    DispatchPhase::Done
                }
                DispatchPhase::Done => DispatchPhase::Done,
            };
            debug!(from = %phase, to = %next, trip = self.trip, "dispatch phase transition");
            phase = next;
        }

        Ok(self.steps)
    }

    /// Pick up the nearest order that still fits until none does, returning
    /// how many were loaded.
    fn pickup_burst(&mut self) -> Result<usize> {
        let orders = self.orders;
        let mut picked = 0;
        while let Some(index) = self.next_pickup() {
            let order = &orders[index];
            self.ensure_fuel_for(order.pickup)?;
            let distance = self.travel_to(order.pickup)?;
            self.fleet.take_on(order.weight)?;

            self.unfulfilled.retain(|&candidate| candidate != index);
            self.in_transit.push(index);
            self.push_order_step(StepKind::Pickup, order, distance);
            picked += 1;
        }
        Ok(picked)
    }

    /// Deliver every order on board, nearest drop-off first.
    fn delivery_drain(&mut self) -> Result<()> {
        let orders = self.orders;
        while let Some(index) = self.next_delivery() {
            let order = &orders[index];
            self.ensure_fuel_for(order.delivery)?;
            let distance = self.travel_to(order.delivery)?;
            self.fleet.drop_off(order.weight);

            self.in_transit.retain(|&candidate| candidate != index);
            if self.in_transit.is_empty() {
                self.fleet.unload_all();
            }
            self.push_order_step(StepKind::Delivery, order, distance);
        }
        Ok(())
    }

    /// Return to the depot, top up the tank there and open the next trip.
    fn trip_return(&mut self) -> Result<()> {
        self.return_to_depot(StepKind::Return)?;
        self.fleet.refuel();
        self.trip += 1;
        Ok(())
    }

    fn return_to_depot(&mut self, kind: StepKind) -> Result<()> {
        let depot = self.fleet.depot();
        self.ensure_fuel_for(depot)?;
        let distance = self.travel_to(depot)?;
        self.push_step(RouteStep::depot_return(
            kind,
            depot,
            self.trip,
            distance,
            self.fleet.fuel(),
        ));
        Ok(())
    }

    /// Nearest unfulfilled order whose weight fits the remaining capacity.
    fn next_pickup(&self) -> Option<usize> {
        let position = self.fleet.position();
        self.unfulfilled
            .iter()
            .copied()
            .filter(|&index| self.fleet.fits(self.orders[index].weight))
            .min_by_key(|&index| (position.manhattan(&self.orders[index].pickup), index))
    }

    /// In-transit order with the nearest delivery cell.
    fn next_delivery(&self) -> Option<usize> {
        let position = self.fleet.position();
        self.in_transit
            .iter()
            .copied()
            .min_by_key(|&index| (position.manhattan(&self.orders[index].delivery), index))
    }

    /// Insert a refuel detour when `target` is out of range, then confirm the
    /// leg is coverable.
    fn ensure_fuel_for(&mut self, target: Coord) -> Result<()> {
        if self.fleet.can_reach(target) {
            return Ok(());
        }

        self.refuel_detour(target)?;

        if !self.fleet.can_reach(target) {
            return Err(self.fuel_exhausted(Some(target), target));
        }
        Ok(())
    }

    fn refuel_detour(&mut self, target: Coord) -> Result<()> {
        let position = self.fleet.position();
        let fuel_before = self.fleet.fuel();

        let Some((_, station)) = self.fleet.rules().nearest_station(position, self.stations)
        else {
            return Err(self.fuel_exhausted(None, target));
        };
        if !self.fleet.can_reach(station) {
            return Err(self.fuel_exhausted(Some(station), station));
        }

        warn!(
            %position,
            %station,
            %target,
            fuel = fuel_before,
            "insufficient fuel for next leg; detouring to gas station"
        );

        let distance = self.travel_to(station)?;
        self.fleet.refuel();
        self.push_step(RouteStep::refuel(
            station,
            self.trip,
            distance,
            fuel_before,
            self.fleet.fuel(),
            self.fleet.load(),
        ));
        Ok(())
    }

    /// Follow the planner's path to `target`, returning the distance covered.
    fn travel_to(&mut self, target: Coord) -> Result<u32> {
        let start = self.fleet.position();
        let path = self
            .planner
            .find_path(&self.grid, start, target)
            .filter(|path| !path.is_empty())
            .ok_or(Error::PathNotFound {
                start,
                goal: target,
            })?;

        let distance = path_distance(&path);
        self.fleet.travel(target, distance);
        Ok(distance)
    }

    fn fuel_exhausted(&self, reported: Option<Coord>, leg_target: Coord) -> Error {
        let position = self.fleet.position();
        let rules = self.fleet.rules();
        Error::FuelExhausted {
            position,
            fuel: self.fleet.fuel(),
            target: reported,
            required: rules.fuel_needed(rules.distance(position, leg_target)),
        }
    }

    /// An empty hold that cannot take any remaining order would otherwise
    /// cycle between the depot and the pickup phase forever.
    fn stalled(&self) -> Error {
        let lightest = self
            .unfulfilled
            .iter()
            .map(|&index| self.orders[index].weight)
            .fold(f64::INFINITY, f64::min);
        Error::CapacityViolation {
            load: self.fleet.load() + lightest,
            capacity: self.fleet.capacity(),
        }
    }

    fn push_order_step(&mut self, kind: StepKind, order: &Order, distance: u32) {
        let step = RouteStep::order(
            kind,
            order,
            self.trip,
            distance,
            self.fleet.fuel(),
            self.fleet.load(),
        );
        self.push_step(step);
    }

    fn push_step(&mut self, step: RouteStep) {
        debug!(
            kind = %step.kind,
            position = %step.position,
            trip = step.trip,
            distance = step.distance,
            fuel = step.fuel,
            load = step.load,
            "route step"
        );
        self.steps.push(step);
    }
}
