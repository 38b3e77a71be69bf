//! Full-scan minimum entropy selection

use crate::heuristic::{Heuristic, StateTables, shannon_entropy};
use crate::io::configuration::{ENTROPY_NOISE_SCAN, WEIGHT_EPSILON};
use crate::model::Model;
use crate::spatial::wave::WaveGrid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Scans every cell per pick and returns the entropy argmin
///
/// Maintains a per-cell running sum of `w·ln w` over possible states,
/// decremented on each ban; the summed weight itself comes live from the
/// grid. A small uniform perturbation breaks ties between equal-entropy
/// cells.
#[derive(Debug)]
pub struct MinEntropyHeuristic {
    rng: StdRng,
    tables: StateTables,
    cell_wlw: Vec<f64>,
    initialized: bool,
}

impl Default for MinEntropyHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl MinEntropyHeuristic {
    /// Create an uninitialized heuristic
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            tables: StateTables::default(),
            cell_wlw: Vec::new(),
            initialized: false,
        }
    }
}

impl Heuristic for MinEntropyHeuristic {
    fn initialize(&mut self, grid: &WaveGrid, model: &dyn Model, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.tables = StateTables::from_model(model);

        self.cell_wlw = grid
            .cells()
            .iter()
            .map(|cell| {
                if cell.domain_count() == model.state_count() {
                    self.tables.total_wlw
                } else {
                    cell.possible_states()
                        .map(|s| self.tables.wlw.get(s).copied().unwrap_or(0.0))
                        .sum()
                }
            })
            .collect();
        self.initialized = true;
    }

    fn on_banned(&mut self, cell_id: usize, state: usize) {
        if !self.initialized {
            return;
        }
        let removed = self.tables.wlw.get(state).copied().unwrap_or(0.0);
        if let Some(sum) = self.cell_wlw.get_mut(cell_id) {
            *sum -= removed;
            if sum.abs() < WEIGHT_EPSILON {
                *sum = 0.0;
            }
        }
    }

    fn pick_next_cell(&mut self, grid: &WaveGrid) -> Option<usize> {
        if !self.initialized {
            return None;
        }
        let mut candidate = None;
        let mut min_score = f64::INFINITY;

        for (id, cell) in grid.cells().iter().enumerate() {
            if cell.is_decided() || cell.domain_count() < 1 {
                continue;
            }
            let sum_w = cell.sum_weights();
            if sum_w <= WEIGHT_EPSILON {
                continue;
            }
            let sum_wlw = self.cell_wlw.get(id).copied().unwrap_or(0.0);
            let noise = self.rng.random::<f64>() * ENTROPY_NOISE_SCAN;
            let score = shannon_entropy(sum_w, sum_wlw) + noise;
            if score < min_score {
                min_score = score;
                candidate = Some(id);
            }
        }
        candidate
    }
}
