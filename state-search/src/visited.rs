//! Visited-map backends for the search engine.

use std::collections::HashMap;
use std::hash::Hash;

/// Best-known-cost storage for discovered states.
///
/// This trait defines the interface for recording and querying the cheapest
/// cumulative cost found so far for each state. Implementations can use
/// different data structures (HashMap, flat Vec, ...) based on the state
/// type's shape.
///
/// # Contract
///
/// - `best` returns the cost most recently recorded for the state, or
///   `None` if it was never recorded
/// - `record` overwrites unconditionally; the engine only calls it with
///   strictly improving costs
pub trait VisitedMap<S> {
    /// Returns the best known cumulative cost for `state`, if any.
    fn best(&self, state: &S) -> Option<u64>;

    /// Records `cost` as the best known cumulative cost for `state`.
    fn record(&mut self, state: S, cost: u64);
}

/// A HashMap-based visited map for arbitrary hashable states.
///
/// This is the default backend: it supports any `Eq + Hash` state type and
/// needs no sizing information up front.
#[derive(Debug)]
pub struct HashVisited<S> {
    data: HashMap<S, u64>,
}

impl<S> HashVisited<S> {
    /// Creates a new empty HashVisited.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Number of distinct states recorded so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no state has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<S> Default for HashVisited<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> VisitedMap<S> for HashVisited<S> {
    fn best(&self, state: &S) -> Option<u64> {
        self.data.get(state).copied()
    }

    fn record(&mut self, state: S, cost: u64) {
        self.data.insert(state, cost);
    }
}

/// A flat-array visited map for states with a dense integer index.
///
/// The caller supplies a function mapping each state to a `usize` index;
/// the backing Vec grows automatically to accommodate new indices. This is
/// efficient for grid-shaped state spaces where the index range is compact,
/// and meaningless for sparse ones.
///
/// `u64::MAX` is reserved as the internal "never visited" sentinel, so a
/// recorded cost must stay below it; cumulative path costs in practice do.
#[derive(Debug)]
pub struct DenseVisited<S, F>
where
    F: Fn(&S) -> usize,
{
    data: Vec<u64>,
    index_of: F,
    _phantom: std::marker::PhantomData<S>,
}

const UNVISITED: u64 = u64::MAX;

impl<S, F> DenseVisited<S, F>
where
    F: Fn(&S) -> usize,
{
    /// Creates a new empty DenseVisited with the given index function.
    pub fn new(index_of: F) -> Self {
        Self {
            data: Vec::new(),
            index_of,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a DenseVisited pre-sized for `capacity` distinct indices.
    pub fn with_capacity(capacity: usize, index_of: F) -> Self {
        Self {
            data: vec![UNVISITED; capacity],
            index_of,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S, F> VisitedMap<S> for DenseVisited<S, F>
where
    F: Fn(&S) -> usize,
{
    fn best(&self, state: &S) -> Option<u64> {
        let index = (self.index_of)(state);
        self.data
            .get(index)
            .copied()
            .filter(|cost| *cost != UNVISITED)
    }

    fn record(&mut self, state: S, cost: u64) {
        let index = (self.index_of)(&state);
        if index >= self.data.len() {
            self.data.resize(index + 1, UNVISITED);
        }
        self.data[index] = cost;
    }
}
