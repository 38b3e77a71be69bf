//! Sample analysis and the model abstraction
//!
//! A model turns an input sample into a state space: distinct states with
//! per-state weights and per-direction compatibility lists. States and their
//! tables are immutable once initialized; weighted-random selection draws
//! from the caller's generator.

/// N×N window pattern extraction
pub mod overlapping;

pub use overlapping::OverlappingModel;

use crate::io::error::Result;
use crate::spatial::direction::Direction;
use crate::spatial::wave::WaveCell;
use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;

/// State space extracted from an input sample
///
/// Implementations must fail fast in [`Model::initialize`] when the sample
/// yields zero states; every other operation may assume a non-empty space.
pub trait Model {
    /// Extract states, weights, and compatibility tables from a sample of
    /// tile ids
    ///
    /// # Errors
    ///
    /// Returns an error for degenerate samples (no extractable states).
    fn initialize(&mut self, sample: &Array2<usize>, rng: &mut StdRng) -> Result<()>;

    /// Number of distinct states
    fn state_count(&self) -> usize;

    /// Total weight over all states (the zero-information baseline for
    /// entropy heuristics)
    fn sum_weights(&self) -> f64;

    /// Relative frequency of a state in the sample
    fn weight(&self, state: usize) -> f64;

    /// States that may legally occupy the neighboring cell in `dir`
    fn neighbors(&self, state: usize, dir: Direction) -> &[usize];

    /// Whether any state may occupy the neighboring cell in `dir`
    ///
    /// An unsupported direction confines the state to the matching grid
    /// boundary; see boundary pruning on the wave grid.
    fn has_support(&self, state: usize, dir: Direction) -> bool {
        !self.neighbors(state, dir).is_empty()
    }

    /// Sample tile id painted for a collapsed state
    fn tile_id(&self, state: usize) -> Option<usize>;

    /// Weighted-random selection among the cell's still-possible states
    ///
    /// Weights act as unnormalized probabilities. Returns `None` when the
    /// domain is empty, signaling a contradiction to the caller.
    fn pick_state(&self, cell: &WaveCell, rng: &mut StdRng) -> Option<usize> {
        let total: f64 = cell.possible_states().map(|s| self.weight(s)).sum();
        if total <= 0.0 {
            return cell.possible_states().next();
        }
        let mut remaining = rng.random::<f64>() * total;
        let mut last = None;
        for state in cell.possible_states() {
            last = Some(state);
            remaining -= self.weight(state);
            if remaining <= 0.0 {
                return last;
            }
        }
        last
    }
}
