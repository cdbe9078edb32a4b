//! Criterion benchmarks for the graph engine and the rollout strategy.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use hinterland::board::{Player, TokenBoard};
use hinterland::graph::{Graph, VertexId};
use hinterland::strategy::{MonteCarloStrategy, NeighborGreedy, Strategy};

fn bench_dijkstra(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(17);
    let graph = Graph::random(200, 0.1, &mut rng);

    c.bench_function("dijkstra_200v", |b| {
        b.iter(|| black_box(graph.distance_from(VertexId(0))))
    });
}

fn bench_strategies(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(17);
    let graph = Graph::random(60, 0.2, &mut rng);
    let mut board = TokenBoard::with_random_values(graph, 10, &mut rng);
    board.place_token(Player::One, VertexId(0));
    board.place_token(Player::Two, VertexId(1));

    c.bench_function("neighbor_greedy_60v", |b| {
        let mut strategy = NeighborGreedy;
        b.iter(|| black_box(strategy.choose_vertex(&board, Player::One, 4)))
    });

    c.bench_function("monte_carlo_60v_25sims", |b| {
        let mut strategy = MonteCarloStrategy::seeded(23);
        b.iter(|| black_box(strategy.choose_vertex(&board, Player::One, 4)))
    });
}

criterion_group!(benches, bench_dijkstra, bench_strategies);
criterion_main!(benches);
