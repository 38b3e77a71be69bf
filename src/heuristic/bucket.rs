//! Bucketed minimum entropy selection

use crate::heuristic::{Heuristic, StateTables, shannon_entropy};
use crate::io::configuration::{ENTROPY_BUCKET_COUNT, ENTROPY_NOISE_HEAP, WEIGHT_EPSILON};
use crate::model::Model;
use crate::spatial::wave::WaveGrid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Marker for cells that left the candidate pool
const RETIRED: usize = usize::MAX;

/// Groups candidate cells into fixed entropy ranges
///
/// The reachable entropy range `[0, H_max]` is split into a fixed number of
/// buckets. Picking scans from the lowest non-empty bucket; exact ordering
/// inside a bucket is not maintained, which trades selection precision for
/// constant-time updates. Entries are deleted lazily: each cell's current
/// bucket lives in a side table and an entry found in the wrong bucket is
/// dropped on pop. A small seeded perturbation on each score keeps cells at
/// a bucket boundary from always landing on the same side.
#[derive(Debug)]
pub struct MinEntropyBucketHeuristic {
    rng: StdRng,
    tables: StateTables,
    cell_wlw: Vec<f64>,
    cell_sum_weights: Vec<f64>,
    cell_bucket: Vec<usize>,
    buckets: Vec<Vec<usize>>,
    cursor: usize,
    max_entropy: f64,
    initialized: bool,
}

impl Default for MinEntropyBucketHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl MinEntropyBucketHeuristic {
    /// Create an uninitialized heuristic
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            tables: StateTables::default(),
            cell_wlw: Vec::new(),
            cell_sum_weights: Vec::new(),
            cell_bucket: Vec::new(),
            buckets: Vec::new(),
            cursor: 0,
            max_entropy: 0.0,
            initialized: false,
        }
    }

    /// Map an entropy value onto a bucket index
    fn bucket_of(&self, entropy: f64) -> usize {
        if self.max_entropy <= WEIGHT_EPSILON || !entropy.is_finite() {
            return 0;
        }
        let scaled = (entropy / self.max_entropy * ENTROPY_BUCKET_COUNT as f64).floor();
        let clamped = scaled.max(0.0) as usize;
        clamped.min(ENTROPY_BUCKET_COUNT - 1)
    }

    /// Current perturbed entropy score of a cell from the shadow sums
    fn score_of(&mut self, cell_id: usize) -> Option<f64> {
        let sum_w = self.cell_sum_weights.get(cell_id).copied().unwrap_or(0.0);
        if sum_w <= WEIGHT_EPSILON {
            return None;
        }
        let sum_wlw = self.cell_wlw.get(cell_id).copied().unwrap_or(0.0);
        let noise = self.rng.random::<f64>() * ENTROPY_NOISE_HEAP;
        Some(shannon_entropy(sum_w, sum_wlw) + noise)
    }

    /// Move a cell into the bucket matching its current score
    fn reassign(&mut self, cell_id: usize) {
        let target = match self.score_of(cell_id) {
            Some(score) => self.bucket_of(score),
            None => RETIRED,
        };
        let previous = self.cell_bucket.get(cell_id).copied().unwrap_or(RETIRED);
        if target == previous {
            return;
        }
        if let Some(slot) = self.cell_bucket.get_mut(cell_id) {
            *slot = target;
        }
        if target == RETIRED {
            return;
        }
        if let Some(bucket) = self.buckets.get_mut(target) {
            bucket.push(cell_id);
        }
        if target < self.cursor {
            self.cursor = target;
        }
    }
}

impl Heuristic for MinEntropyBucketHeuristic {
    fn initialize(&mut self, grid: &WaveGrid, model: &dyn Model, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.tables = StateTables::from_model(model);
        self.max_entropy = shannon_entropy(self.tables.total_weight, self.tables.total_wlw)
            .max(WEIGHT_EPSILON);

        let cell_count = grid.cells().len();
        self.cell_wlw = Vec::with_capacity(cell_count);
        self.cell_sum_weights = Vec::with_capacity(cell_count);
        for cell in grid.cells() {
            let wlw = if cell.domain_count() == model.state_count() {
                self.tables.total_wlw
            } else {
                cell.possible_states()
                    .map(|s| self.tables.wlw.get(s).copied().unwrap_or(0.0))
                    .sum()
            };
            self.cell_wlw.push(wlw);
            self.cell_sum_weights.push(cell.sum_weights());
        }

        self.cell_bucket = vec![RETIRED; cell_count];
        self.buckets = vec![Vec::new(); ENTROPY_BUCKET_COUNT];
        self.cursor = 0;
        self.initialized = true;
        for cell_id in 0..cell_count {
            self.reassign(cell_id);
        }
    }

    fn on_banned(&mut self, cell_id: usize, state: usize) {
        if !self.initialized {
            return;
        }
        let w = self.tables.weights.get(state).copied().unwrap_or(0.0);
        let wlw = self.tables.wlw.get(state).copied().unwrap_or(0.0);
        if let Some(sum) = self.cell_sum_weights.get_mut(cell_id) {
            *sum -= w;
            if sum.abs() < WEIGHT_EPSILON {
                *sum = 0.0;
            }
        }
        if let Some(sum) = self.cell_wlw.get_mut(cell_id) {
            *sum -= wlw;
            if sum.abs() < WEIGHT_EPSILON {
                *sum = 0.0;
            }
        }
        self.reassign(cell_id);
    }

    fn on_observed(&mut self, cell_id: usize, _state: usize) {
        if !self.initialized {
            return;
        }
        if let Some(slot) = self.cell_bucket.get_mut(cell_id) {
            *slot = RETIRED;
        }
    }

    fn pick_next_cell(&mut self, grid: &WaveGrid) -> Option<usize> {
        while self.cursor < self.buckets.len() {
            let entry = match self.buckets.get_mut(self.cursor) {
                Some(bucket) => bucket.pop(),
                None => None,
            };
            let Some(cell_id) = entry else {
                self.cursor += 1;
                continue;
            };
            if self.cell_bucket.get(cell_id).copied() != Some(self.cursor) {
                continue;
            }
            let Some(cell) = grid.cell(cell_id) else {
                continue;
            };
            if cell.is_decided() || cell.is_contradicted() {
                continue;
            }
            // Popped for observation; a later ban would re-insert it, but an
            // observed cell never returns to the pool.
            return Some(cell_id);
        }
        None
    }
}
