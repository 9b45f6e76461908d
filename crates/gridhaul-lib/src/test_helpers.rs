// Test-only helpers for `gridhaul-lib` unit tests
#![allow(dead_code)]
use crate::grid::Coord;
use crate::order::OrderId;
use crate::output::{RouteStep, StepKind};

/// Builder to create `RouteStep` instances in tests with sensible defaults.
pub struct RouteStepBuilder {
    step: RouteStep,
}

impl RouteStepBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: RouteStep::start(Coord::new(0, 0), 1, 100.0, 0.0),
        }
    }

    pub fn kind(mut self, kind: StepKind) -> Self {
        self.step.kind = kind;
        self
    }

    pub fn position(mut self, position: Coord) -> Self {
        self.step.position = position;
        self
    }

    pub fn trip(mut self, trip: u32) -> Self {
        self.step.trip = trip;
        self
    }

    pub fn distance(mut self, distance: u32) -> Self {
        self.step.distance = Some(distance);
        self
    }

    pub fn fuel(mut self, fuel: f64) -> Self {
        self.step.fuel = Some(fuel);
        self
    }

    pub fn load(mut self, load: f64) -> Self {
        self.step.load = Some(load);
        self
    }

    pub fn order(mut self, id: u32, weight: f64) -> Self {
        self.step.order_id = Some(OrderId(id));
        self.step.weight = Some(weight);
        self
    }

    pub fn build(self) -> RouteStep {
        self.step
    }
}

impl Default for RouteStepBuilder {
    fn default() -> Self {
        Self::new()
    }
}
