//! Worklist propagation with resumable support witnesses

use crate::model::Model;
use crate::propagator::{Propagator, observe_cell};
use crate::spatial::direction::Direction;
use crate::spatial::wave::WaveGrid;
use rand::rngs::StdRng;

/// AC-2001: AC-3's worklist plus a remembered witness per arc
///
/// For each (cell, state, direction) the index of the last supporting state
/// found in the model's neighbor list is kept. Re-validation first re-checks
/// that witness and otherwise resumes the scan from the next index; since
/// domains only shrink within an attempt, states before the witness can
/// never regain support and need not be revisited.
#[derive(Debug, Default)]
pub struct Ac2001Propagator {
    state_count: usize,
    witnesses: Vec<usize>,
    worklist: Vec<usize>,
}

impl Ac2001Propagator {
    /// Create an empty propagator
    pub const fn new() -> Self {
        Self {
            state_count: 0,
            witnesses: Vec::new(),
            worklist: Vec::new(),
        }
    }

    const fn witness_index(&self, cell_id: usize, state: usize, dir: Direction) -> usize {
        (cell_id * self.state_count + state) * Direction::COUNT + dir.index()
    }
}

impl Propagator for Ac2001Propagator {
    fn initialize(&mut self, grid: &mut WaveGrid, model: &dyn Model) {
        self.state_count = model.state_count();
        self.witnesses = vec![0; grid.cell_count() * self.state_count * Direction::COUNT];
        self.worklist.clear();
    }

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
            for (target, edge) in neighbors {
                // Direction from the target back toward the changed cell
                let back = edge.opposite();
                let mut to_ban = Vec::new();
                {
                    let (Some(src), Some(dst)) = (grid.cell(source), grid.cell(target)) else {
                        continue;
                    };
                    for t in dst.possible_states() {
                        let candidates = model.neighbors(t, back);
                        let idx = self.witness_index(target, t, back);
                        let start = self.witnesses.get(idx).copied().unwrap_or(0);
                        let found = candidates
                            .get(start..)
                            .into_iter()
                            .flatten()
                            .position(|&s| src.allows(s))
                            .map(|offset| start + offset);
                        match found {
                            Some(at) => {
                                if let Some(slot) = self.witnesses.get_mut(idx) {
                                    *slot = at;
                                }
                            }
                            None => to_ban.push(t),
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
