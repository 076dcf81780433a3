//! Tests for the search engine.

use super::*;

#[test]
fn test_goal_at_start_needs_no_expansion() {
    // The goal check happens at finalization, before expansion: an
    // expansion function that panics proves it is never called.
    let problem = ClosureProblem::new(
        |n: &u32| *n == 7,
        |_n: &u32| -> Vec<(u32, u64)> { panic!("start satisfies the goal, nothing may expand") },
    );

    let found = Dijkstra::new(problem).run(7).unwrap();
    assert_eq!(found.state, 7);
    assert_eq!(found.cost, 0);
}

#[test]
fn test_linear_chain_sums_edge_costs() {
    let found = shortest_path(0u32, |n| *n == 4, |n| vec![(n + 1, (n + 1) as u64)]).unwrap();
    // 1 + 2 + 3 + 4
    assert_eq!(found, (4, 10));
}

#[test]
fn test_cheaper_of_two_routes_wins() {
    // Diamond: 0 -> 1 -> 3 costs 2, 0 -> 2 -> 3 costs 6.
    let expand = |n: &u32| match *n {
        0 => vec![(1, 1), (2, 5)],
        1 => vec![(3, 1)],
        2 => vec![(3, 1)],
        _ => vec![],
    };

    let found = shortest_path(0u32, |n| *n == 3, expand).unwrap();
    assert_eq!(found.1, 2);
}

#[test]
fn test_discovered_state_improves_before_finalization() {
    // State 1 is discovered at cost 10 directly, then improved to cost 2
    // through state 2 before it is popped. The stale cost-10 entry must be
    // skipped, not finalized.
    let expand = |n: &u32| match *n {
        0 => vec![(1, 10), (2, 1)],
        1 => vec![(3, 1)],
        2 => vec![(1, 1)],
        _ => vec![],
    };

    let found = shortest_path(0u32, |n| *n == 3, expand).unwrap();
    assert_eq!(found.1, 3);
}

#[test]
fn test_unreachable_goal_returns_none() {
    // Finite component {0, 1, 2} with the goal outside it.
    let expand = |n: &u32| match *n {
        0 => vec![(1, 1), (2, 1)],
        1 => vec![(2, 1)],
        _ => vec![],
    };

    assert_eq!(shortest_path(0u32, |n| *n == 99, expand), None);
}

#[test]
fn test_dead_ends_do_not_block_other_routes() {
    let expand = |n: &u32| match *n {
        0 => vec![(1, 1), (2, 1)],
        // 1 is a dead end
        2 => vec![(3, 1)],
        _ => vec![],
    };

    let found = shortest_path(0u32, |n| *n == 3, expand).unwrap();
    assert_eq!(found, (3, 2));
}

#[test]
fn test_equal_cost_goals_resolve_by_insertion_order() {
    // Both 1 and 2 are goals at cost 1; the one pushed first wins, and the
    // outcome is identical on every run.
    let expand = |n: &u32| match *n {
        0 => vec![(1, 1), (2, 1)],
        _ => vec![],
    };
    let is_goal = |n: &u32| *n == 1 || *n == 2;

    let first = shortest_path(0u32, is_goal, expand).unwrap();
    let second = shortest_path(0u32, is_goal, expand).unwrap();
    assert_eq!(first, (1, 1));
    assert_eq!(first, second);
}

#[test]
fn test_traced_path_connects_start_to_goal() {
    let problem = ClosureProblem::new(|n: &u32| *n == 3, |n: &u32| vec![(n + 1, 2)]);

    let traced = Dijkstra::new(problem).run_traced(0).unwrap();
    assert_eq!(traced.path, vec![0, 1, 2, 3]);
    assert_eq!(traced.cost, 6);
}

#[test]
fn test_traced_cost_matches_untraced_run() {
    let expand = |n: &u32| match *n {
        0 => vec![(1, 1), (2, 5)],
        1 => vec![(3, 1)],
        2 => vec![(3, 1)],
        _ => vec![],
    };
    let engine = Dijkstra::new(ClosureProblem::new(|n: &u32| *n == 3, expand));

    let found = engine.run(0).unwrap();
    let traced = engine.run_traced(0).unwrap();
    assert_eq!(found.cost, traced.cost);
    assert_eq!(traced.path.first(), Some(&0));
    assert_eq!(traced.path.last(), Some(&found.state));
}

// =============================================================================
// Run-constrained grid scenarios
// =============================================================================

/// Position, heading (0=N, 1=W, 2=S, 3=E), and consecutive straight moves.
type RunState = ((i64, i64), u8, u8);

const DELTAS: [(i64, i64); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Uniform-cost grid walk where turning is only allowed after `min_run`
/// straight moves and forced after `max_run`. The move history lives in the
/// state, not in the engine.
fn grid_expand(
    width: i64,
    height: i64,
    min_run: u8,
    max_run: u8,
) -> impl Fn(&RunState) -> Vec<(RunState, u64)> {
    move |&((x, y), dir, run)| {
        let mut edges = Vec::new();
        let mut step = |d: u8, next_run: u8| {
            let (dx, dy) = DELTAS[d as usize];
            let (nx, ny) = (x + dx, y + dy);
            if nx >= 0 && nx < width && ny >= 0 && ny < height {
                edges.push((((nx, ny), d, next_run), 1));
            }
        };

        if run < max_run {
            step(dir, run + 1);
        }
        if run >= min_run {
            step((dir + 1) % 4, 1);
            step((dir + 3) % 4, 1);
        }
        edges
    }
}

#[test]
fn test_uniform_grid_with_slack_run_limits_costs_manhattan() {
    // 3x3 grid, run range 1..=3: the constraint never binds, so the cost is
    // the Manhattan distance from (0,0) to (2,2).
    let start: RunState = ((0, 0), 3, 1);
    let found = shortest_path(
        start,
        |&((x, y), _, run)| x == 2 && y == 2 && run >= 1,
        grid_expand(3, 3, 1, 3),
    )
    .unwrap();

    assert_eq!(found.1, 4);
}

#[test]
fn test_forced_minimum_run_lengthens_path() {
    // 5x5 grid, minimum run of 4: a straight-line dash east then south is
    // the only way to turn at all, and the optimum stays 8 moves.
    let start: RunState = ((0, 0), 3, 1);
    let found = shortest_path(
        start,
        |&((x, y), _, run)| x == 4 && y == 4 && run >= 4,
        grid_expand(5, 5, 4, 10),
    )
    .unwrap();

    assert_eq!(found.1, 8);
}

#[test]
fn test_dense_visited_matches_hash_visited() {
    let expand = grid_expand(4, 4, 1, 3);
    let is_goal = |&((x, y), _, run): &RunState| x == 3 && y == 3 && run >= 1;
    let start: RunState = ((0, 0), 3, 1);

    let engine = Dijkstra::new(ClosureProblem::new(is_goal, expand));
    let hashed = engine.run(start).unwrap();

    let dense = engine
        .run_in(
            start,
            DenseVisited::new(|&((x, y), dir, run): &RunState| {
                (((y * 4 + x) as usize * 4) + dir as usize) * 11 + run as usize
            }),
        )
        .unwrap();

    assert_eq!(hashed.cost, dense.cost);
    assert_eq!(hashed.state, dense.state);
}
