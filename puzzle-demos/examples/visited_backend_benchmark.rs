//! Benchmark comparing visited-map backends on a run-constrained grid walk.
//!
//! Run with: cargo run --example visited_backend_benchmark --release
//!
//! The problem is the crucible shape: position, heading, and consecutive
//! run length, all in the state. Grid states map onto a compact integer
//! range, which is exactly the case DenseVisited exists for; this compares
//! it against the default HashVisited on increasing grid sizes.

use std::time::Instant;

use state_search::{ClosureProblem, DenseVisited, Dijkstra};

const MIN_RUN: u8 = 1;
const MAX_RUN: u8 = 3;

/// Position, heading (0..4), consecutive straight moves (1..=MAX_RUN).
type State = ((i64, i64), u8, u8);

const DELTAS: [(i64, i64); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

fn synthetic_cost(x: i64, y: i64) -> u64 {
    ((x * 31 + y * 17) % 9 + 1) as u64
}

fn expand(size: i64) -> impl Fn(&State) -> Vec<(State, u64)> {
    move |&((x, y), dir, run)| {
        let mut edges = Vec::with_capacity(3);
        let mut step = |d: u8, next_run: u8| {
            let (dx, dy) = DELTAS[d as usize];
            let (nx, ny) = (x + dx, y + dy);
            if nx >= 0 && nx < size && ny >= 0 && ny < size {
                edges.push((((nx, ny), d, next_run), synthetic_cost(nx, ny)));
            }
        };

        if run < MAX_RUN {
            step(dir, run + 1);
        }
        if run >= MIN_RUN {
            step((dir + 1) % 4, 1);
            step((dir + 3) % 4, 1);
        }
        edges
    }
}

fn main() {
    println!("Visited-Backend Benchmark: run-constrained grid walk");
    println!("====================================================\n");

    for size in [50i64, 100, 200, 400] {
        let is_goal = move |&((x, y), _, run): &State| x == size - 1 && y == size - 1 && run >= MIN_RUN;
        let engine = Dijkstra::new(ClosureProblem::new(is_goal, expand(size)));
        let start: State = ((0, 0), 3, 1);

        let hash_start = Instant::now();
        let hashed = engine.run(start).expect("goal is reachable");
        let hash_time = hash_start.elapsed();

        let dense_index = move |&((x, y), dir, run): &State| {
            ((((y * size + x) as usize) * 4 + dir as usize) * (MAX_RUN as usize + 1)) + run as usize
        };
        let capacity = (size * size) as usize * 4 * (MAX_RUN as usize + 1);

        let dense_start = Instant::now();
        let dense = engine
            .run_in(start, DenseVisited::with_capacity(capacity, dense_index))
            .expect("goal is reachable");
        let dense_time = dense_start.elapsed();

        assert_eq!(hashed.cost, dense.cost, "backends must agree");
        println!(
            "{size:>4} x {size:<4} cost {:>6}   HashVisited {:>10.2?}   DenseVisited {:>10.2?}",
            hashed.cost, hash_time, dense_time
        );
    }
}
