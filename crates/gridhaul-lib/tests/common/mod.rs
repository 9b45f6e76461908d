#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use gridhaul_lib::{
    plan_route, Coord, GridBounds, Order, PlanRequest, Result, RoutePlan, StepKind, VehicleSpec,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Upper bound on a single planning run in tests; the small grids used here
/// finish in milliseconds.
pub const PLAN_TIMEOUT: Duration = Duration::from_secs(5);

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn grid(rows: u32, cols: u32) -> GridBounds {
    GridBounds::new(rows, cols).expect("valid grid")
}

/// Vehicle burning one fuel unit per cell, so fuel arithmetic stays exact.
pub fn unit_vehicle(start: Coord, capacity: f64, fuel_capacity: f64) -> VehicleSpec {
    VehicleSpec::new(start, capacity, fuel_capacity).with_consumption(1.0)
}

pub fn request(
    grid: GridBounds,
    vehicle: VehicleSpec,
    orders: Vec<Order>,
    stations: Vec<Coord>,
) -> PlanRequest {
    PlanRequest::new(grid, vehicle, orders, stations)
}

/// Kinds of every step, in order.
pub fn kinds(plan: &RoutePlan) -> Vec<StepKind> {
    plan.steps.iter().map(|step| step.kind).collect()
}

/// Seeded generator so scenario sweeps are reproducible.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn random_coord(rng: &mut impl Rng, grid: &GridBounds) -> Coord {
    Coord::new(
        rng.gen_range(0..grid.rows) as i32,
        rng.gen_range(0..grid.cols) as i32,
    )
}

/// Run `plan_route` on a worker thread, failing the test if it does not
/// return within [`PLAN_TIMEOUT`].
pub fn plan_within_timeout(request: &PlanRequest) -> Result<RoutePlan> {
    let (tx, rx) = mpsc::channel();
    let owned = request.clone();
    thread::spawn(move || {
        let _ = tx.send(plan_route(&owned));
    });

    rx.recv_timeout(PLAN_TIMEOUT)
        .unwrap_or_else(|_| panic!("plan_route did not finish within {PLAN_TIMEOUT:?}"))
}
