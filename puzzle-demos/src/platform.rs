//! A tilting platform of rounded and cube-shaped rocks.
//!
//! Rounded rocks roll until they hit a wall, a cube rock, or another
//! rounded rock; cube rocks never move. One spin cycle tilts the platform
//! north, west, south, then east. The billion-spin load question is where
//! the cycle-detecting fast-forward earns its keep: the whole grid is the
//! simulation state.

use anyhow::{bail, ensure};
use cycle_sim::{ClosureSim, FastForward, SimulationError};
use grid_geom::Vector;

const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const EMPTY: u8 = b'.';

/// The rock layout, row-major in a flat buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    cells: Vec<u8>,
    width: usize,
}

impl Platform {
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;

        for (row, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            match width {
                None => width = Some(line.len()),
                Some(w) => ensure!(
                    line.len() == w,
                    "row {} is {} cells wide, expected {}",
                    row + 1,
                    line.len(),
                    w
                ),
            }
            for b in line.bytes() {
                if b != ROUND && b != CUBE && b != EMPTY {
                    bail!("row {}: unexpected cell '{}'", row + 1, b as char);
                }
                cells.push(b);
            }
        }

        let width = width.unwrap_or(0);
        ensure!(width > 0, "empty platform");
        Ok(Self { cells, width })
    }

    fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, cell: u8) {
        self.cells[y * self.width + x] = cell;
    }

    /// Slides every rounded rock as far toward `v` as it will go.
    ///
    /// Cells are visited starting from the edge being tilted toward, so
    /// each rock's destination is already settled when it rolls.
    pub fn tilt(&mut self, v: Vector) {
        let (w, h) = (self.width as i64, self.height() as i64);
        let xs: Vec<i64> = if v.dx < 0 {
            (1..w).collect()
        } else if v.dx > 0 {
            (0..w - 1).rev().collect()
        } else {
            (0..w).collect()
        };
        let ys: Vec<i64> = if v.dy < 0 {
            (1..h).collect()
        } else if v.dy > 0 {
            (0..h - 1).rev().collect()
        } else {
            (0..h).collect()
        };

        for &y in &ys {
            for &x in &xs {
                if self.get(x as usize, y as usize) != ROUND {
                    continue;
                }
                let (mut px, mut py) = (x + v.dx, y + v.dy);
                while px >= 0
                    && px < w
                    && py >= 0
                    && py < h
                    && self.get(px as usize, py as usize) == EMPTY
                {
                    px += v.dx;
                    py += v.dy;
                }
                self.set(x as usize, y as usize, EMPTY);
                self.set((px - v.dx) as usize, (py - v.dy) as usize, ROUND);
            }
        }
    }

    /// One spin cycle: tilt north, west, south, east.
    pub fn spin(&self) -> Platform {
        let mut next = self.clone();
        next.tilt(Vector::UP);
        next.tilt(Vector::LEFT);
        next.tilt(Vector::DOWN);
        next.tilt(Vector::RIGHT);
        next
    }

    /// Total load on the north support beams: each rounded rock counts its
    /// distance from the south edge, inclusive.
    pub fn north_load(&self) -> u64 {
        let h = self.height();
        (0..h)
            .map(|y| {
                let rocks = (0..self.width).filter(|&x| self.get(x, y) == ROUND).count();
                rocks as u64 * (h - y) as u64
            })
            .sum()
    }

    /// The north load after `spins` full spin cycles.
    pub fn load_after_spins(&self, spins: u64) -> Result<u64, SimulationError> {
        FastForward::new(ClosureSim::new(Platform::spin))
            .run(self.clone(), spins)
            .map(|settled| settled.north_load())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

    #[test]
    fn test_north_tilt_load_on_sample() {
        let mut platform = Platform::parse(SAMPLE).unwrap();
        platform.tilt(Vector::UP);
        assert_eq!(platform.north_load(), 136);
    }

    #[test]
    fn test_billion_spins_on_sample() {
        let platform = Platform::parse(SAMPLE).unwrap();
        assert_eq!(platform.load_after_spins(1_000_000_000).unwrap(), 64);
    }

    #[test]
    fn test_zero_spins_leave_the_load_alone() {
        let platform = Platform::parse(SAMPLE).unwrap();
        assert_eq!(
            platform.load_after_spins(0).unwrap(),
            platform.north_load()
        );
    }

    #[test]
    fn test_rocks_stack_against_cubes_and_walls() {
        let mut platform = Platform::parse(".O.\n.#.\nOOO").unwrap();
        platform.tilt(Vector::UP);
        // The outer-column rocks rise to the wall; the one beneath the
        // cube stays blocked where it is.
        let expected = Platform::parse("OOO\n.#.\n.O.").unwrap();
        assert_eq!(platform, expected);
    }

    #[test]
    fn test_parse_rejects_bad_platforms() {
        assert!(Platform::parse("O.\nO").is_err());
        assert!(Platform::parse("OX").is_err());
        assert!(Platform::parse("").is_err());
    }

    fn platform_strategy() -> impl Strategy<Value = Platform> {
        (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
            prop::collection::vec(prop::sample::select(vec![ROUND, CUBE, EMPTY]), w * h)
                .prop_map(move |cells| Platform { cells, width: w })
        })
    }

    proptest! {
        /// Tilting moves rocks around but never creates or destroys them,
        /// and cube rocks stay exactly where they are.
        #[test]
        fn tilt_conserves_rocks(platform in platform_strategy()) {
            for v in [Vector::UP, Vector::DOWN, Vector::LEFT, Vector::RIGHT] {
                let mut tilted = platform.clone();
                tilted.tilt(v);

                let rounds = |p: &Platform| p.cells.iter().filter(|c| **c == ROUND).count();
                let cubes = |p: &Platform| {
                    p.cells
                        .iter()
                        .enumerate()
                        .filter(|(_, c)| **c == CUBE)
                        .map(|(i, _)| i)
                        .collect::<Vec<_>>()
                };
                prop_assert_eq!(rounds(&tilted), rounds(&platform));
                prop_assert_eq!(cubes(&tilted), cubes(&platform));
            }
        }

        /// A second tilt in the same direction changes nothing: everything
        /// has already settled.
        #[test]
        fn tilt_is_idempotent(platform in platform_strategy()) {
            for v in [Vector::UP, Vector::DOWN, Vector::LEFT, Vector::RIGHT] {
                let mut once = platform.clone();
                once.tilt(v);
                let mut twice = once.clone();
                twice.tilt(v);
                prop_assert_eq!(&once.cells, &twice.cells);
            }
        }
    }
}
