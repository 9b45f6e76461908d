//! Vehicle configuration and the mutable fleet state used during planning.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuel::FuelRules;
use crate::grid::Coord;

/// Fuel burned per grid unit when a scenario omits the consumption rate
/// (one litre per twenty cells).
pub const DEFAULT_FUEL_CONSUMPTION: f64 = 0.05;

fn default_fuel_consumption() -> f64 {
    DEFAULT_FUEL_CONSUMPTION
}

/// Static vehicle description supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Depot: the starting cell, returned to between trips and at the end.
    pub start: Coord,
    /// Maximum cargo weight carried at once.
    pub capacity: f64,
    /// Fuel tank capacity.
    pub fuel_capacity: f64,
    /// Fuel burned per unit of grid distance.
    #[serde(default = "default_fuel_consumption")]
    pub fuel_consumption: f64,
    /// Fuel on board at the start; a full tank when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_fuel: Option<f64>,
}

impl VehicleSpec {
    /// Vehicle with a full tank and the default consumption rate.
    pub fn new(start: Coord, capacity: f64, fuel_capacity: f64) -> Self {
        Self {
            start,
            capacity,
            fuel_capacity,
            fuel_consumption: DEFAULT_FUEL_CONSUMPTION,
            initial_fuel: None,
        }
    }

    pub fn with_consumption(mut self, fuel_consumption: f64) -> Self {
        self.fuel_consumption = fuel_consumption;
        self
    }

    pub fn with_initial_fuel(mut self, initial_fuel: f64) -> Self {
        self.initial_fuel = Some(initial_fuel);
        self
    }

    /// Validate the numeric parameters. Bounds checks on `start` happen at
    /// the request level where the grid is known.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.capacity, "capacity"),
            (self.fuel_capacity, "fuel_capacity"),
            (self.fuel_consumption, "fuel_consumption"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::configuration(format!(
                    "{field} must be a finite positive number, got {value}"
                )));
            }
        }

        if let Some(fuel) = self.initial_fuel {
            if !fuel.is_finite() || fuel < 0.0 {
                return Err(Error::configuration(
                    "initial_fuel must be finite and non-negative",
                ));
            }
            if fuel > self.fuel_capacity {
                return Err(Error::configuration(format!(
                    "initial_fuel {fuel} exceeds fuel_capacity {}",
                    self.fuel_capacity
                )));
            }
        }

        Ok(())
    }

    pub fn fuel_rules(&self) -> FuelRules {
        FuelRules::new(self.fuel_consumption)
    }
}

/// Position, fuel and load of the vehicle while a plan is being built.
///
/// Only the dispatch engine holds one of these; every mutation goes through
/// the methods below so the load and fuel invariants are checked in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetState {
    position: Coord,
    depot: Coord,
    capacity: f64,
    fuel_capacity: f64,
    current_fuel: f64,
    current_load: f64,
    rules: FuelRules,
}

impl FleetState {
    /// Validate `spec` and build the initial state, defaulting the fuel level
    /// to a full tank.
    pub fn new(spec: &VehicleSpec) -> Result<Self> {
        spec.validate()?;

        Ok(Self {
            position: spec.start,
            depot: spec.start,
            capacity: spec.capacity,
            fuel_capacity: spec.fuel_capacity,
            current_fuel: spec.initial_fuel.unwrap_or(spec.fuel_capacity),
            current_load: 0.0,
            rules: spec.fuel_rules(),
        })
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn depot(&self) -> Coord {
        self.depot
    }

    pub fn is_at_depot(&self) -> bool {
        self.position == self.depot
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub fn fuel(&self) -> f64 {
        self.current_fuel
    }

    pub fn load(&self) -> f64 {
        self.current_load
    }

    pub fn rules(&self) -> &FuelRules {
        &self.rules
    }

    /// Whether an order of `weight` fits in the remaining capacity.
    pub fn fits(&self, weight: f64) -> bool {
        self.current_load + weight <= self.capacity
    }

    /// Whether `target` is reachable with the fuel on board.
    pub fn can_reach(&self, target: Coord) -> bool {
        self.rules.can_reach(self.position, target, self.current_fuel)
    }

    /// Move to `to` over `distance` grid units, burning the matching fuel.
    pub(crate) fn travel(&mut self, to: Coord, distance: u32) {
        let burned = self.rules.fuel_needed(distance);
        // Reachability was checked beforehand; clamp rounding residue.
        self.current_fuel = (self.current_fuel - burned).max(0.0);
        self.position = to;
    }

    /// Fill the tank.
    pub(crate) fn refuel(&mut self) {
        self.current_fuel = self.fuel_capacity;
    }

    /// Add `weight` to the cargo load.
    pub(crate) fn take_on(&mut self, weight: f64) -> Result<()> {
        let load = self.current_load + weight;
        if load > self.capacity {
            return Err(Error::CapacityViolation {
                load,
                capacity: self.capacity,
            });
        }
        self.current_load = load;
        Ok(())
    }

    /// Remove `weight` from the cargo load.
    pub(crate) fn drop_off(&mut self, weight: f64) {
        self.current_load = (self.current_load - weight).max(0.0);
    }

    /// Mark the hold as empty. Subtracting fractional weights one by one can
    /// leave a residue above zero, which would make a full-capacity order
    /// look like it no longer fits.
    pub(crate) fn unload_all(&mut self) {
        self.current_load = 0.0;
    }
}
