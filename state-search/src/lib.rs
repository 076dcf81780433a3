//! Minimum-Cost State-Graph Search
//!
//! A generic Dijkstra / uniform-cost search over state graphs that are
//! generated lazily: the caller supplies a start state, a goal predicate,
//! and an expansion function, and the engine finds a minimum-total-cost
//! path to the first goal state it finalizes.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining search problems
//! - A closure-based convenience API for one-off searches
//! - Pluggable visited-map backends (hash-based or dense-indexed)
//! - Optional reconstruction of the full minimum-cost path
//!
//! States are opaque to the engine: anything `Clone + Eq + Hash` works,
//! which is what lets path-history constraints (direction, consecutive-move
//! counts) be encoded directly into the state rather than into the engine.
//!
//! # Quick Example
//!
//! ```
//! use state_search::shortest_path;
//!
//! // Cheapest walk from 0 to 10 where stepping +1 costs 3 and +2 costs 5.
//! let found = shortest_path(
//!     0u32,
//!     |n| *n == 10,
//!     |n| {
//!         let mut edges = vec![(n + 1, 3)];
//!         if n + 2 <= 10 {
//!             edges.push((n + 2, 5));
//!         }
//!         edges
//!     },
//! );
//!
//! assert_eq!(found, Some((10, 25)));
//! ```
//!
//! # Key Concepts
//!
//! ## SearchProblem Trait
//!
//! The [`SearchProblem`] trait is the core interface. Implement it to define:
//! - The state type (`State`)
//! - When a state counts as a goal (`is_goal`)
//! - The outgoing edges of a state (`neighbors`)
//!
//! Both methods must be pure functions of their explicit arguments: the
//! engine's correctness guarantees (optimality, idempotence) assume the
//! graph does not change underneath a running search.
//!
//! ## Frontier and Finalization
//!
//! The engine keeps a min-priority frontier keyed by cumulative cost and a
//! visited map of best known costs. A state is finalized the first time it
//! is popped with an up-to-date cost; stale duplicate entries are skipped on
//! pop instead of being removed eagerly (lazy deletion). The goal predicate
//! is tested at finalization, so the returned goal carries the minimum cost
//! among all reachable goal states, and a start state that is already a
//! goal is reported before any expansion happens.
//!
//! ## Visited Backends
//!
//! [`HashVisited`] works for any state type. [`DenseVisited`] trades a
//! caller-supplied dense index function for flat-array lookups, which pays
//! off on grid-shaped state spaces.

mod frontier;
mod problem;
mod search;
mod visited;

pub use problem::{ClosureProblem, SearchProblem};
pub use search::{Dijkstra, Found, Traced, shortest_path};
pub use visited::{DenseVisited, HashVisited, VisitedMap};

#[cfg(test)]
mod tests;
