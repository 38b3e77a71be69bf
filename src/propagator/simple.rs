//! Bounded full-grid sweep propagation

use crate::io::configuration::DEFAULT_SWEEP_LIMIT;
use crate::model::Model;
use crate::propagator::{Propagator, observe_cell};
use crate::spatial::wave::WaveGrid;
use rand::rngs::StdRng;

/// Deliberately naive baseline: repeat full grid sweeps to a fixpoint
///
/// Every sweep revises every cell against every neighbor regardless of what
/// changed. Sweeping stops early once a pass makes no change, or after the
/// configured sweep limit; hitting the limit truncates silently, leaving the
/// grid possibly short of full consistency.
#[derive(Debug)]
pub struct SimplePropagator {
    sweep_limit: usize,
    supported: Vec<bool>,
}

impl Default for SimplePropagator {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_LIMIT)
    }
}

impl SimplePropagator {
    /// Create a propagator with the given sweep limit
    pub const fn new(sweep_limit: usize) -> Self {
        Self {
            sweep_limit,
            supported: Vec::new(),
        }
    }
}

impl Propagator for SimplePropagator {
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

        for _ in 0..self.sweep_limit {
            let mut changed = false;
            for source in 0..grid.cell_count() {
                let neighbors: Vec<_> = grid.neighbors_of(source).collect();
                for (target, dir) in neighbors {
                    self.supported.clear();
                    self.supported.resize(model.state_count(), false);
                    let mut to_ban = Vec::new();
                    {
                        let (Some(src), Some(dst)) = (grid.cell(source), grid.cell(target))
                        else {
                            continue;
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
                    for t in to_ban {
                        if grid.ban(target, t, model.weight(t)) {
                            changed = true;
                        }
                    }
                    if grid.cell(target).is_some_and(|cell| cell.is_contradicted()) {
                        return false;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        true
    }
}
