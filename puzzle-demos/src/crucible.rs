//! Minimum heat-loss routing for a crucible that resists rolling straight.
//!
//! The crucible loses heat per city block it enters and is constrained by
//! momentum: it must keep its heading for a minimum number of blocks before
//! it may turn, and can never keep it beyond a maximum. Both constraints
//! live entirely inside the search state (heading plus current run length),
//! so the plain minimum-cost engine solves the routing unchanged.

use std::ops::RangeInclusive;

use anyhow::{Context, ensure};
use grid_geom::{CardinalDirection, Point};
use state_search::{Dijkstra, SearchProblem};

/// A rectangular grid of per-block heat-loss digits.
pub struct CityGrid {
    costs: Vec<u8>,
    width: i64,
    height: i64,
}

impl CityGrid {
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let mut costs = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0i64;

        for (row, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            match width {
                None => width = Some(line.len()),
                Some(w) => ensure!(
                    line.len() == w,
                    "line {} is {} blocks wide, expected {}",
                    row + 1,
                    line.len(),
                    w
                ),
            }
            for c in line.chars() {
                let digit = c
                    .to_digit(10)
                    .with_context(|| format!("line {}: '{}' is not a digit", row + 1, c))?;
                costs.push(digit as u8);
            }
            height += 1;
        }

        ensure!(height > 0, "empty grid");
        Ok(Self {
            costs,
            width: width.unwrap_or(0) as i64,
            height,
        })
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn heat_loss(&self, p: Point) -> u64 {
        self.costs[(p.y * self.width + p.x) as usize] as u64
    }

    fn bottom_right(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }
}

/// One search position: where the crucible is, which way it is rolling, and
/// how many consecutive blocks it has kept that heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrucibleState {
    pos: Point,
    dir: CardinalDirection,
    run: u8,
}

struct CrucibleRoute<'a> {
    grid: &'a CityGrid,
    min_run: u8,
    max_run: u8,
}

impl SearchProblem for CrucibleRoute<'_> {
    type State = CrucibleState;

    fn is_goal(&self, state: &CrucibleState) -> bool {
        // The crucible must also be allowed to stop: a goal reached
        // mid-minimum-run does not count.
        state.pos == self.grid.bottom_right() && state.run >= self.min_run
    }

    fn neighbors(&self, state: &CrucibleState) -> Vec<(CrucibleState, u64)> {
        let mut edges = Vec::with_capacity(3);
        let mut roll = |dir: CardinalDirection, run: u8| {
            let pos = state.pos + dir;
            if self.grid.in_bounds(pos) {
                edges.push((CrucibleState { pos, dir, run }, self.grid.heat_loss(pos)));
            }
        };

        if state.run < self.max_run {
            roll(state.dir, state.run + 1);
        }
        if state.run >= self.min_run {
            roll(state.dir.left(), 1);
            roll(state.dir.right(), 1);
        }
        edges
    }
}

/// Minimum total heat loss from the top-left block to the bottom-right one.
///
/// `run` bounds the consecutive straight moves: turning is allowed only at
/// or above the lower bound and forced at the upper one. Returns `None` if
/// the constraints make the exit unreachable.
pub fn min_heat_loss(grid: &CityGrid, run: RangeInclusive<u8>) -> Option<u64> {
    let route = CrucibleRoute {
        grid,
        min_run: *run.start(),
        max_run: *run.end(),
    };
    let start = CrucibleState {
        pos: Point::ORIGIN,
        dir: CardinalDirection::E,
        run: 1,
    };
    Dijkstra::new(route).run(start).map(|found| found.cost)
}
