//! Cell-selection strategies
//!
//! A heuristic decides which undecided cell collapses next. Entropy-based
//! variants subscribe to the grid's domain-change events (drained to them by
//! the generator between steps) and maintain shadow bookkeeping, a derived
//! index over the grid's domains rather than the source of truth.

/// Discretized entropy buckets with lazy deletion
pub mod bucket;
/// Full-scan minimum Shannon entropy
pub mod entropy;
/// Priority-queue minimum entropy with lazy deletion
pub mod heap;
/// First undecided cell in row-major order
pub mod scanline;

pub use bucket::MinEntropyBucketHeuristic;
pub use entropy::MinEntropyHeuristic;
pub use heap::MinEntropyHeapHeuristic;
pub use scanline::ScanlineHeuristic;

use crate::io::configuration::WEIGHT_EPSILON;
use crate::model::Model;
use crate::spatial::wave::WaveGrid;

/// Strategy for choosing the next cell to collapse
///
/// A heuristic is re-initialized against a fresh grid for every generation
/// attempt; no state crosses attempts. Cells with an empty domain are never
/// selectable; contradictions are the propagator's to surface.
pub trait Heuristic {
    /// Seed shadow bookkeeping from the grid's starting domains
    ///
    /// Called after the grid's initial domains (including boundary pruning)
    /// are in place.
    fn initialize(&mut self, _grid: &WaveGrid, _model: &dyn Model, _seed: u64) {}

    /// Choose the next undecided cell, or `None` when every cell is decided
    fn pick_next_cell(&mut self, grid: &WaveGrid) -> Option<usize>;

    /// Domain-change notification: `state` was removed from `cell_id`
    fn on_banned(&mut self, _cell_id: usize, _state: usize) {}

    /// Domain-change notification: `cell_id` collapsed to `state`
    fn on_observed(&mut self, _cell_id: usize, _state: usize) {}
}

/// Per-state `w` and `w·ln w` tables shared by the entropy heuristics
#[derive(Debug, Default)]
pub(crate) struct StateTables {
    pub weights: Vec<f64>,
    pub wlw: Vec<f64>,
    pub total_weight: f64,
    pub total_wlw: f64,
}

impl StateTables {
    /// Precompute per-state weight and `w·ln w` from the model
    pub fn from_model(model: &dyn Model) -> Self {
        let state_count = model.state_count();
        let mut weights = Vec::with_capacity(state_count);
        let mut wlw = Vec::with_capacity(state_count);
        let mut total_weight = 0.0;
        let mut total_wlw = 0.0;
        for state in 0..state_count {
            let w = model.weight(state);
            // Zero-weight states would produce NaN from ln(0)
            let product = if w > WEIGHT_EPSILON { w * w.ln() } else { 0.0 };
            weights.push(w);
            wlw.push(product);
            total_weight += w;
            total_wlw += product;
        }
        Self {
            weights,
            wlw,
            total_weight,
            total_wlw,
        }
    }
}

/// Shannon entropy from a cell's summed weight and summed `w·ln w`
///
/// `H = ln(sum_w) - sum_wlw / sum_w`, the entropy of the weight-normalized
/// distribution over the still-possible states.
pub(crate) fn shannon_entropy(sum_weights: f64, sum_wlw: f64) -> f64 {
    sum_weights.ln() - sum_wlw / sum_weights
}
