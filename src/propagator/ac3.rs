//! Worklist propagation with full support rescans

use crate::model::Model;
use crate::propagator::{Propagator, observe_cell};
use crate::spatial::wave::WaveGrid;
use rand::rngs::StdRng;

/// Classic AC-3: a worklist of dirty cells, full rescan per pop
///
/// Popping a cell re-derives support for every state of every neighbor from
/// scratch against the cell's current domain. Any neighbor that loses a
/// state is pushed back onto the worklist. Correct at a fixpoint but redoes
/// compatibility scans that the counter-based variants avoid.
#[derive(Debug, Default)]
pub struct Ac3Propagator {
    worklist: Vec<usize>,
    supported: Vec<bool>,
}

impl Ac3Propagator {
    /// Create an empty propagator
    pub const fn new() -> Self {
        Self {
            worklist: Vec::new(),
            supported: Vec::new(),
        }
    }
}

impl Propagator for Ac3Propagator {
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

        self.worklist.clear();
        self.worklist.push(cell_id);
        while let Some(source) = self.worklist.pop() {
            let neighbors: Vec<_> = grid.neighbors_of(source).collect();
            for (target, dir) in neighbors {
                self.supported.clear();
                self.supported.resize(model.state_count(), false);
                let mut to_ban = Vec::new();
                {
                    let (Some(src), Some(dst)) = (grid.cell(source), grid.cell(target)) else {
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
                let mut changed = false;
                for t in to_ban {
                    if grid.ban(target, t, model.weight(t)) {
                        changed = true;
                    }
                }
                if !changed {
                    continue;
                }
                match grid.cell(target) {
                    Some(cell) if cell.is_contradicted() => return false,
                    Some(_) => self.worklist.push(target),
                    None => {}
                }
            }
        }
        true
    }
}
