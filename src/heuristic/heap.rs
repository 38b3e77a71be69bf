//! Priority-queue minimum entropy selection with lazy deletion

use crate::heuristic::{Heuristic, StateTables, shannon_entropy};
use crate::io::configuration::{ENTROPY_NOISE_HEAP, SCORE_MATCH_EPSILON, WEIGHT_EPSILON};
use crate::model::Model;
use crate::spatial::wave::WaveGrid;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so the smallest score surfaces first
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    score: f64,
    cell_id: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the minimum score first
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.cell_id.cmp(&self.cell_id))
    }
}

/// Keeps candidate cells in a binary heap keyed by entropy
///
/// Stale entries are never removed eagerly. Each cell's current score lives
/// in a side table; a popped entry only wins when its score still matches
/// the table within a small tolerance, otherwise it is discarded.
#[derive(Debug)]
pub struct MinEntropyHeapHeuristic {
    rng: StdRng,
    tables: StateTables,
    cell_wlw: Vec<f64>,
    cell_sum_weights: Vec<f64>,
    cell_scores: Vec<f64>,
    heap: BinaryHeap<HeapEntry>,
    initialized: bool,
}

impl Default for MinEntropyHeapHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl MinEntropyHeapHeuristic {
    /// Create an uninitialized heuristic
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            tables: StateTables::default(),
            cell_wlw: Vec::new(),
            cell_sum_weights: Vec::new(),
            cell_scores: Vec::new(),
            heap: BinaryHeap::new(),
            initialized: false,
        }
    }

    /// Recompute a cell's score and push a fresh heap entry
    fn refresh(&mut self, cell_id: usize) {
        let sum_w = self.cell_sum_weights.get(cell_id).copied().unwrap_or(0.0);
        if sum_w <= WEIGHT_EPSILON {
            if let Some(slot) = self.cell_scores.get_mut(cell_id) {
                *slot = f64::INFINITY;
            }
            return;
        }
        let sum_wlw = self.cell_wlw.get(cell_id).copied().unwrap_or(0.0);
        let noise = self.rng.random::<f64>() * ENTROPY_NOISE_HEAP;
        let score = shannon_entropy(sum_w, sum_wlw) + noise;
        if let Some(slot) = self.cell_scores.get_mut(cell_id) {
            *slot = score;
        }
        self.heap.push(HeapEntry { score, cell_id });
    }
}

impl Heuristic for MinEntropyHeapHeuristic {
    fn initialize(&mut self, grid: &WaveGrid, model: &dyn Model, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.tables = StateTables::from_model(model);

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

        self.cell_scores = vec![f64::INFINITY; cell_count];
        self.heap = BinaryHeap::with_capacity(cell_count);
        self.initialized = true;
        for cell_id in 0..cell_count {
            self.refresh(cell_id);
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
        self.refresh(cell_id);
    }

    fn on_observed(&mut self, cell_id: usize, _state: usize) {
        if !self.initialized {
            return;
        }
        // Decided cells never come back up; poison the side table so any
        // stale heap entries are dropped on pop.
        if let Some(slot) = self.cell_scores.get_mut(cell_id) {
            *slot = f64::INFINITY;
        }
    }

    fn pick_next_cell(&mut self, grid: &WaveGrid) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let current = self.cell_scores.get(entry.cell_id).copied().unwrap_or(f64::INFINITY);
            if (entry.score - current).abs() > SCORE_MATCH_EPSILON {
                continue;
            }
            let Some(cell) = grid.cell(entry.cell_id) else {
                continue;
            };
            if cell.is_decided() || cell.is_contradicted() {
                continue;
            }
            return Some(entry.cell_id);
        }
        None
    }
}
