//! Lagoon capacity from a trench dig plan.
//!
//! The dig plan walks a closed loop of axis-aligned trenches; the lagoon is
//! everything on or inside that loop. Each plan line carries two encodings
//! of the same step, a plain one and one packed into the hex color, and
//! the second encoding makes the loop far too large to flood-fill, so the
//! capacity comes from the exact lattice count instead.

use anyhow::{Context, bail, ensure};
use grid_geom::{CardinalDirection, Point, polygon};

/// One trench segment: a heading and a length in meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigStep {
    pub dir: CardinalDirection,
    pub meters: i64,
}

/// Parses the plain encoding: `R 6 (#70c710)` reads direction and length
/// from the first two fields.
pub fn parse_plain(input: &str) -> anyhow::Result<Vec<DigStep>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(row, line)| {
            let mut fields = line.split_whitespace();
            let dir = match fields.next() {
                Some("U") => CardinalDirection::N,
                Some("D") => CardinalDirection::S,
                Some("L") => CardinalDirection::W,
                Some("R") => CardinalDirection::E,
                other => bail!("line {}: bad direction {:?}", row + 1, other),
            };
            let meters = fields
                .next()
                .with_context(|| format!("line {}: missing length", row + 1))?
                .parse::<i64>()
                .with_context(|| format!("line {}: bad length", row + 1))?;
            ensure!(meters > 0, "line {}: length must be positive", row + 1);
            Ok(DigStep { dir, meters })
        })
        .collect()
}

/// Parses the hex encoding: the last color digit is the direction
/// (0 = R, 1 = D, 2 = L, 3 = U) and the first five are the length.
pub fn parse_hex(input: &str) -> anyhow::Result<Vec<DigStep>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(row, line)| {
            let start = line
                .find("(#")
                .with_context(|| format!("line {}: missing color", row + 1))?;
            let color = &line[start + 2..];
            let color = color
                .strip_suffix(')')
                .with_context(|| format!("line {}: unterminated color", row + 1))?;
            ensure!(
                color.len() == 6,
                "line {}: color has {} digits, expected 6",
                row + 1,
                color.len()
            );

            let meters = i64::from_str_radix(&color[..5], 16)
                .with_context(|| format!("line {}: bad length digits", row + 1))?;
            let dir = match &color[5..] {
                "0" => CardinalDirection::E,
                "1" => CardinalDirection::S,
                "2" => CardinalDirection::W,
                "3" => CardinalDirection::N,
                other => bail!("line {}: bad direction digit {:?}", row + 1, other),
            };
            Ok(DigStep { dir, meters })
        })
        .collect()
}

/// Cubic meters of lagoon: every lattice cell on or inside the dug loop.
///
/// Walks the plan into its corner vertices and counts covered lattice
/// points with Pick's theorem. The plan must return to its starting point.
pub fn lagoon_capacity(steps: &[DigStep]) -> i64 {
    let mut vertices = Vec::with_capacity(steps.len());
    let mut at = Point::ORIGIN;
    for step in steps {
        at = at + step.dir.vector() * step.meters;
        vertices.push(at);
    }
    polygon::covered_points(&vertices)
}
