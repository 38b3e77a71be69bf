//! Constraint propagation strategies
//!
//! A propagator owns the consequences of an observation: after a cell is
//! collapsed it removes every state that lost all support from neighboring
//! domains, transitively, until the grid is consistent again or some domain
//! empties. The variants differ in how much bookkeeping they carry between
//! collapses and in how aggressively they chase weakened supports.

/// AC-2001: AC-3 ordering with per-arc resumable witnesses
pub mod ac2001;
/// AC-3 style worklist over weakened cells
pub mod ac3;
/// AC-4 support counters with exact decremental maintenance
pub mod ac4;
/// Depth-bounded recursive neighborhood revision
pub mod recursive;
/// Bounded full-grid sweeps
pub mod simple;

pub use ac2001::Ac2001Propagator;
pub use ac3::Ac3Propagator;
pub use ac4::Ac4Propagator;
pub use recursive::RecursivePropagator;
pub use simple::SimplePropagator;

use crate::model::Model;
use crate::spatial::wave::WaveGrid;
use rand::rngs::StdRng;

/// Strategy for restoring arc consistency after an observation
pub trait Propagator {
    /// Build per-grid bookkeeping before the first collapse
    ///
    /// Counter-based variants also establish initial arc consistency here;
    /// any states banned in the process land in the grid's change log.
    fn initialize(&mut self, _grid: &mut WaveGrid, _model: &dyn Model) {}

    /// Collapse `cell_id` to a weighted-random state and propagate
    ///
    /// Returns false when propagation empties some cell's domain (or the
    /// target cell itself had none to begin with); the attempt is then a
    /// contradiction and the grid must be discarded.
    fn collapse(
        &mut self,
        grid: &mut WaveGrid,
        model: &dyn Model,
        cell_id: usize,
        rng: &mut StdRng,
    ) -> bool;
}

/// Pick a state for `cell_id` and observe it
///
/// Returns the chosen state together with the states the observation
/// implicitly removed, so support-counting propagators can process each
/// removal individually. `None` means the cell had an empty domain or was
/// already decided.
pub(crate) fn observe_cell(
    grid: &mut WaveGrid,
    model: &dyn Model,
    cell_id: usize,
    rng: &mut StdRng,
) -> Option<(usize, Vec<usize>)> {
    let cell = grid.cell(cell_id)?;
    if cell.is_decided() || cell.is_contradicted() {
        return None;
    }
    let chosen = model.pick_state(cell, rng)?;
    let removed: Vec<usize> = cell.possible_states().filter(|&s| s != chosen).collect();
    if !grid.observe(cell_id, chosen, model.weight(chosen)) {
        return None;
    }
    Some((chosen, removed))
}
