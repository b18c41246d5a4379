use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use geograph_core::{engine::GeoEngine, geopoint::GeoPoint, graph::GeoGraph};
use rand::{Rng, SeedableRng, rngs::StdRng};

const GRID_SIZE: usize = 60;

fn node_id(row: usize, col: usize) -> String {
    format!("{row}:{col}")
}

/// Jittered grid over central London, every cell linked to its right and lower
/// neighbors.
fn grid_graph() -> GeoGraph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = GeoGraph::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let lat = 51.45 + row as f64 * 0.002 + rng.random_range(0.0..0.001);
            let lon = -0.2 + col as f64 * 0.003 + rng.random_range(0.0..0.001);
            graph.add_node(node_id(row, col), lat, lon).unwrap();
        }
    }

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if col + 1 < GRID_SIZE {
                graph.add_edge(&node_id(row, col), &node_id(row, col + 1));
            }
            if row + 1 < GRID_SIZE {
                graph.add_edge(&node_id(row, col), &node_id(row + 1, col));
            }
        }
    }

    graph
}

fn dijkstra_benchmark(c: &mut Criterion) {
    let graph = grid_graph();
    let start = node_id(0, 0);
    let end = node_id(GRID_SIZE - 1, GRID_SIZE - 1);

    c.bench_function("dijkstra corner to corner", |b| {
        b.iter(|| black_box(graph.shortest_path(&start, &end)))
    });
}

fn prim_benchmark(c: &mut Criterion) {
    let graph = grid_graph();
    let root = node_id(GRID_SIZE / 2, GRID_SIZE / 2);

    c.bench_function("prim grid", |b| {
        b.iter(|| black_box(graph.minimum_spanning_tree(&root)))
    });
}

fn nearest_node_benchmark(c: &mut Criterion) {
    let engine = GeoEngine::from_graph(grid_graph());
    let query = GeoPoint::new(51.5, -0.1);

    // Build the index outside the measured loop
    engine.index();

    c.bench_function("nearest node", |b| {
        b.iter(|| black_box(engine.nearest_node(&query)))
    });
}

fn waypoint_tree_benchmark(c: &mut Criterion) {
    let engine = GeoEngine::from_graph(grid_graph());
    let waypoints: Vec<GeoPoint> = (0..8)
        .map(|i| GeoPoint::new(51.46 + i as f64 * 0.012, -0.19 + i as f64 * 0.02))
        .collect();

    c.bench_function("waypoint tree 8 points", |b| {
        b.iter(|| black_box(engine.waypoint_tree(&waypoints)))
    });
}

criterion_group!(
    benches,
    dijkstra_benchmark,
    prim_benchmark,
    nearest_node_benchmark,
    waypoint_tree_benchmark
);
criterion_main!(benches);
