use criterion::{criterion_group, criterion_main, Criterion};
use gridhaul_lib::{
    find_path_a_star, find_path_bfs, plan_route, Coord, GridBounds, Order, PathAlgorithm,
    PlanRequest, Scenario, VehicleSpec,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

const LARGE_GRID: GridBounds = GridBounds {
    rows: 200,
    cols: 200,
};

static DEMO_REQUEST: Lazy<PlanRequest> = Lazy::new(|| Scenario::demo().into_request());
static DEMO_BFS_REQUEST: Lazy<PlanRequest> =
    Lazy::new(|| Scenario::demo().into_request().with_algorithm(PathAlgorithm::Bfs));

/// Forty orders fanned out over a 60x60 grid with a station every ten cells.
static BUSY_REQUEST: Lazy<PlanRequest> = Lazy::new(|| {
    let grid = GridBounds { rows: 60, cols: 60 };
    let orders = (0..40)
        .map(|i: i32| {
            let pickup = Coord::new((i * 7) % 60, (i * 13) % 60);
            let delivery = Coord::new((i * 11 + 5) % 60, (i * 3 + 17) % 60);
            Order::new(i as u32 + 1, pickup, delivery, f64::from(5 + i % 10))
        })
        .collect();
    let stations = (0..6)
        .flat_map(|row| (0..6).map(move |col| Coord::new(row * 10 + 5, col * 10 + 5)))
        .collect();
    PlanRequest::new(
        grid,
        VehicleSpec::new(Coord::new(30, 30), 40.0, 6.0),
        orders,
        stations,
    )
});

fn benchmark_planning(c: &mut Criterion) {
    c.bench_function("astar_corner_to_corner", |b| {
        b.iter(|| {
            let path = find_path_a_star(&LARGE_GRID, Coord::new(0, 0), Coord::new(199, 199))
                .expect("path exists");
            black_box(path.len())
        });
    });

    c.bench_function("bfs_corner_to_corner", |b| {
        b.iter(|| {
            let path = find_path_bfs(&LARGE_GRID, Coord::new(0, 0), Coord::new(199, 199))
                .expect("path exists");
            black_box(path.len())
        });
    });

    c.bench_function("plan_demo_astar", |b| {
        let request = &*DEMO_REQUEST;
        b.iter(|| {
            let plan = plan_route(request).expect("demo plans");
            black_box(plan.metrics.total_distance)
        });
    });

    c.bench_function("plan_demo_bfs", |b| {
        let request = &*DEMO_BFS_REQUEST;
        b.iter(|| {
            let plan = plan_route(request).expect("demo plans");
            black_box(plan.metrics.total_distance)
        });
    });

    c.bench_function("plan_busy_grid", |b| {
        let request = &*BUSY_REQUEST;
        b.iter(|| black_box(plan_route(request).map(|plan| plan.steps.len())));
    });
}

criterion_group!(benches, benchmark_planning);
criterion_main!(benches);
