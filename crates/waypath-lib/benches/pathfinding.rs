use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;
use waypath_lib::{
    find_k_shortest_routes, find_routes, load_network, plan_routes, reference_network,
    FixedConditions, Graph, RouteAlgorithm, RouteRequest, VehicleCatalog,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.csv")
}

static SAMPLE: Lazy<Graph> = Lazy::new(|| load_network(&fixture_path()).expect("fixture loads"));
static REFERENCE: Lazy<Graph> = Lazy::new(reference_network);
static VEHICLES: Lazy<VehicleCatalog> = Lazy::new(VehicleCatalog::builtin);
static YEN_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Hyderabad", "Vijayawada", "Car").with_algorithm(RouteAlgorithm::Yen)
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let sample = &*SAMPLE;

    c.bench_function("priority_hyderabad_vijayawada", |b| {
        b.iter(|| {
            let routes = find_routes(sample, "Hyderabad", "Vijayawada").expect("route exists");
            black_box(routes.len())
        });
    });

    c.bench_function("yen_hyderabad_vijayawada", |b| {
        b.iter(|| {
            let routes =
                find_k_shortest_routes(sample, "Hyderabad", "Vijayawada", 5).expect("route exists");
            black_box(routes.len())
        });
    });

    c.bench_function("priority_reference_tirupati_srikakulam", |b| {
        let reference = &*REFERENCE;
        b.iter(|| {
            let routes = find_routes(reference, "Tirupati", "Srikakulam").expect("route exists");
            black_box(routes[0].distance)
        });
    });

    c.bench_function("plan_yen_with_estimates", |b| {
        let request = &*YEN_REQUEST;
        let vehicles = &*VEHICLES;
        b.iter(|| {
            let plan = plan_routes(sample, vehicles, &mut FixedConditions(1.2), request)
                .expect("route exists");
            black_box(plan.best().travel_time_hours)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
