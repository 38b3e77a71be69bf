//! Depth-bounded depth-first propagation

use crate::model::Model;
use crate::propagator::{Propagator, observe_cell};
use crate::spatial::direction::Direction;
use crate::spatial::wave::WaveGrid;
use rand::rngs::StdRng;

/// Default traversal depth bound
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Revises neighbors depth-first from the collapsed cell
///
/// Recursion is expressed as an explicit stack with a per-entry depth
/// counter, so large grids cannot exhaust the call stack while the
/// depth-first visitation order is preserved. Reaching the depth bound
/// truncates the traversal silently; only an emptied domain counts as
/// failure. Callers needing full consistency must choose a high enough
/// bound or a different propagator.
#[derive(Debug)]
pub struct RecursivePropagator {
    max_depth: usize,
    stack: Vec<(usize, usize)>,
    supported: Vec<bool>,
}

impl Default for RecursivePropagator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl RecursivePropagator {
    /// Create a propagator with the given depth bound
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            stack: Vec::new(),
            supported: Vec::new(),
        }
    }

    /// Ban every state of `target` that no possible state of `source`
    /// supports in `dir`; returns whether any ban happened
    fn revise(
        &mut self,
        grid: &mut WaveGrid,
        model: &dyn Model,
        source: usize,
        target: usize,
        dir: Direction,
    ) -> bool {
        self.supported.clear();
        self.supported.resize(model.state_count(), false);
        let mut to_ban = Vec::new();
        {
            let (Some(src), Some(dst)) = (grid.cell(source), grid.cell(target)) else {
                return false;
            };
            for s in src.possible_states() {
                for &t in model.neighbors(s, dir) {
                    if let Some(slot) = self.supported.get_mut(t) {
                        *slot = true;
                    }
                }
            }
            for t in dst.possible_states() {
                if self.supported.get(t).copied() != Some(true) {
                    to_ban.push(t);
                }
            }
        }
        let mut changed = false;
        for t in to_ban {
            if grid.ban(target, t, model.weight(t)) {
                changed = true;
            }
        }
        changed
    }
}

impl Propagator for RecursivePropagator {
    fn collapse(
        &mut self,
        grid: &mut WaveGrid,
        model: &dyn Model,
        cell_id: usize,
        rng: &mut StdRng,
    ) -> bool {
        if observe_cell(grid, model, cell_id, rng).is_none() {
            return false;
        }

        self.stack.clear();
        self.stack.push((cell_id, 0));
        while let Some((source, depth)) = self.stack.pop() {
            if depth >= self.max_depth {
                continue;
            }
            // Reverse order so the canonically-first revised neighbor pops
            // first at each level
            for dir in Direction::ALL.into_iter().rev() {
                let Some(target) = grid.neighbor_in_direction(source, dir) else {
                    continue;
                };
                if !self.revise(grid, model, source, target, dir) {
                    continue;
                }
                match grid.cell(target) {
                    Some(cell) if cell.is_contradicted() => return false,
                    Some(_) => self.stack.push((target, depth + 1)),
                    None => {}
                }
            }
        }
        true
    }
}
