//! The search engine: Dijkstra with lazy frontier deletion.

use std::collections::HashMap;
use std::hash::Hash;

use crate::frontier::Frontier;
use crate::problem::{ClosureProblem, SearchProblem};
use crate::visited::{HashVisited, VisitedMap};

/// A finalized goal state together with its minimum total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<S> {
    /// The first goal state finalized by the search.
    pub state: S,
    /// Sum of edge costs along a minimum-cost path from the start.
    pub cost: u64,
}

/// A search result with the full minimum-cost path reconstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traced<S> {
    /// States along a minimum-cost path, start first, goal last.
    pub path: Vec<S>,
    /// Sum of edge costs along `path`.
    pub cost: u64,
}

/// Minimum-cost search engine over a [`SearchProblem`].
///
/// Each `run*` call owns its own frontier and visited map and discards them
/// on return; the engine itself carries no state between calls, so one
/// engine can be reused for any number of independent searches.
///
/// # Example
///
/// ```rust
/// use state_search::{ClosureProblem, Dijkstra};
///
/// let problem = ClosureProblem::new(
///     |n: &u32| *n == 6,
///     |n: &u32| vec![(n + 1, 1), (n + 3, 2)],
/// );
/// let found = Dijkstra::new(problem).run(0).unwrap();
/// assert_eq!(found.cost, 4); // 0 -> 3 -> 6 via two +3 hops
/// ```
pub struct Dijkstra<P: SearchProblem> {
    problem: P,
}

impl<P: SearchProblem> Dijkstra<P> {
    /// Creates an engine for the given problem definition.
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Borrows the underlying problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Searches from `start`, returning the first finalized goal state and
    /// its total cost, or `None` if the frontier empties without reaching a
    /// goal.
    ///
    /// The goal predicate is tested when a state is finalized (popped with
    /// an up-to-date cost), which by Dijkstra's greedy-finalization property
    /// makes the returned state the cheapest reachable goal. A `start` that
    /// already satisfies the goal is returned with cost 0 before any
    /// expansion.
    pub fn run(&self, start: P::State) -> Option<Found<P::State>> {
        self.run_in(start, HashVisited::new())
    }

    /// Like [`run`](Self::run), but with a caller-supplied visited backend.
    ///
    /// Use [`DenseVisited`](crate::DenseVisited) when states map onto a
    /// compact integer range; the search itself is identical.
    pub fn run_in<V>(&self, start: P::State, mut visited: V) -> Option<Found<P::State>>
    where
        V: VisitedMap<P::State>,
    {
        let mut frontier = Frontier::new();
        visited.record(start.clone(), 0);
        frontier.push(start, 0);

        while let Some((state, cost)) = frontier.pop() {
            // Lazy deletion: a cheaper entry for this state was already
            // finalized, so this one is stale.
            if visited.best(&state).is_some_and(|best| cost > best) {
                continue;
            }
            if self.problem.is_goal(&state) {
                return Some(Found { state, cost });
            }
            for (next, edge_cost) in self.problem.neighbors(&state) {
                let next_cost = cost + edge_cost;
                if visited.best(&next).is_none_or(|best| next_cost < best) {
                    visited.record(next.clone(), next_cost);
                    frontier.push(next, next_cost);
                }
            }
        }

        None
    }

    /// Searches from `start` and reconstructs the full minimum-cost path.
    ///
    /// Keeps a parent link per discovered state on top of what
    /// [`run`](Self::run) tracks, so prefer `run` when only the cost or the
    /// goal state is needed.
    pub fn run_traced(&self, start: P::State) -> Option<Traced<P::State>> {
        let mut visited: HashVisited<P::State> = HashVisited::new();
        let mut parents: HashMap<P::State, P::State> = HashMap::new();
        let mut frontier = Frontier::new();

        visited.record(start.clone(), 0);
        frontier.push(start, 0);

        while let Some((state, cost)) = frontier.pop() {
            if visited.best(&state).is_some_and(|best| cost > best) {
                continue;
            }
            if self.problem.is_goal(&state) {
                let mut path = vec![state];
                while let Some(parent) = parents.get(path.last().expect("path is non-empty")) {
                    path.push(parent.clone());
                }
                path.reverse();
                return Some(Traced { path, cost });
            }
            for (next, edge_cost) in self.problem.neighbors(&state) {
                let next_cost = cost + edge_cost;
                if visited.best(&next).is_none_or(|best| next_cost < best) {
                    visited.record(next.clone(), next_cost);
                    parents.insert(next.clone(), state.clone());
                    frontier.push(next, next_cost);
                }
            }
        }

        None
    }
}

/// Finds a minimum-cost path from `start` to any state satisfying
/// `is_goal`, expanding states with `expand`.
///
/// Closure-based convenience over [`Dijkstra`] + [`ClosureProblem`]:
/// returns the finalized goal state and its total cost, or `None` when no
/// reachable state satisfies the predicate.
///
/// # Example
///
/// ```rust
/// use state_search::shortest_path;
///
/// // No path: the graph only ever moves away from the goal.
/// let found = shortest_path(5u32, |n| *n == 0, |n| {
///     if *n < 8 { vec![(n + 1, 1)] } else { vec![] }
/// });
/// assert_eq!(found, None);
/// ```
pub fn shortest_path<S, G, E>(start: S, is_goal: G, expand: E) -> Option<(S, u64)>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    E: Fn(&S) -> Vec<(S, u64)>,
{
    Dijkstra::new(ClosureProblem::new(is_goal, expand))
        .run(start)
        .map(|found| (found.state, found.cost))
}
