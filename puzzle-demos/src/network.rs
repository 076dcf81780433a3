//! Ghost traversal of a left/right instruction network.
//!
//! A looping list of L/R instructions drives walkers through a map of
//! binary forks. The single-walker question is a plain guarded walk; the
//! many-walkers-at-once question is astronomically long but each walker's
//! trajectory over (node, instruction position) is periodic, so the answer
//! is the alignment of the detected cycle periods.

use std::collections::HashMap;

use anyhow::{Context, anyhow, bail, ensure};
use cycle_sim::{FastForward, Simulation, align};

/// One instruction from the looping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// The fork map plus its instruction list, with node labels interned to
/// dense indices.
pub struct Network {
    turns: Vec<Turn>,
    labels: Vec<String>,
    left: Vec<u16>,
    right: Vec<u16>,
}

impl Network {
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let mut lines = input.trim().lines();

        let turns = lines
            .next()
            .context("missing instruction line")?
            .trim()
            .chars()
            .map(|c| match c {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                other => Err(anyhow!("unexpected instruction '{other}'")),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        ensure!(!turns.is_empty(), "empty instruction line");

        // First pass interns every defined label so forward references
        // resolve; second pass wires the forks.
        let forks = lines
            .filter(|line| !line.trim().is_empty())
            .map(parse_fork)
            .collect::<anyhow::Result<Vec<_>>>()?;
        ensure!(!forks.is_empty(), "no nodes defined");
        ensure!(forks.len() <= u16::MAX as usize, "too many nodes");

        let mut index: HashMap<&str, u16> = HashMap::new();
        let mut labels = Vec::with_capacity(forks.len());
        for &(name, _, _) in &forks {
            ensure!(
                index.insert(name, labels.len() as u16).is_none(),
                "node {name} defined twice"
            );
            labels.push(name.to_string());
        }

        let mut left = Vec::with_capacity(forks.len());
        let mut right = Vec::with_capacity(forks.len());
        for &(name, l, r) in &forks {
            let resolve = |target: &str| {
                index
                    .get(target)
                    .copied()
                    .with_context(|| format!("node {name} forks to undefined node {target}"))
            };
            left.push(resolve(l)?);
            right.push(resolve(r)?);
        }

        Ok(Self {
            turns,
            labels,
            left,
            right,
        })
    }

    fn node(&self, label: &str) -> anyhow::Result<u16> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| i as u16)
            .with_context(|| format!("no node labeled {label}"))
    }

    fn next(&self, node: u16, turn: Turn) -> u16 {
        match turn {
            Turn::Left => self.left[node as usize],
            Turn::Right => self.right[node as usize],
        }
    }

    /// Steps to walk from `from` to `to` following the looping instructions.
    ///
    /// Fails if `to` is not reached within one full tour of the state space
    /// (every node at every instruction position), which means it never
    /// will be.
    pub fn steps_between(&self, from: &str, to: &str) -> anyhow::Result<u64> {
        let target = self.node(to)?;
        let mut at = self.node(from)?;
        let bound = self.labels.len() as u64 * self.turns.len() as u64;

        for step in 0..=bound {
            if at == target {
                return Ok(step);
            }
            let turn = self.turns[(step % self.turns.len() as u64) as usize];
            at = self.next(at, turn);
        }
        bail!("{from} never reaches {to}")
    }

    /// The trajectory period of a single walker from `start`, over the
    /// combined (node, instruction position) state.
    pub fn walker_period(&self, start: &str) -> anyhow::Result<u64> {
        let start = self.node(start)?;
        let cycle = FastForward::new(LockstepWalk { net: self }).detect_cycle((start, 0))?;
        Ok(cycle.period as u64)
    }

    /// Steps until every walker starting on an `A` node stands on a `Z`
    /// node simultaneously.
    ///
    /// These networks are built so that each walker's `Z` visits coincide
    /// with its cycle period, which reduces the simultaneous arrival to the
    /// least common multiple of the periods.
    pub fn ghost_steps(&self) -> anyhow::Result<u64> {
        let starts: Vec<&str> = self
            .labels
            .iter()
            .filter(|label| label.ends_with('A'))
            .map(|label| label.as_str())
            .collect();
        ensure!(!starts.is_empty(), "no ghost start nodes");

        let periods = starts
            .iter()
            .map(|label| self.walker_period(label))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(align::lcm_all(periods))
    }
}

fn parse_fork(line: &str) -> anyhow::Result<(&str, &str, &str)> {
    let (name, forks) = line
        .trim()
        .split_once(" = ")
        .with_context(|| format!("malformed node line {line:?}"))?;
    let forks = forks
        .strip_prefix('(')
        .and_then(|f| f.strip_suffix(')'))
        .with_context(|| format!("malformed fork list in {line:?}"))?;
    let (l, r) = forks
        .split_once(", ")
        .with_context(|| format!("malformed fork list in {line:?}"))?;
    Ok((name, l, r))
}

/// A walker advancing one fork per step, instruction position in lockstep.
struct LockstepWalk<'a> {
    net: &'a Network,
}

impl Simulation for LockstepWalk<'_> {
    type State = (u16, u16);

    fn step(&self, &(node, turn_index): &(u16, u16)) -> (u16, u16) {
        let next = self.net.next(node, self.net.turns[turn_index as usize]);
        (next, ((turn_index as usize + 1) % self.net.turns.len()) as u16)
    }
}
