//! Wave cells and the wave grid
//!
//! Each cell holds a bitset of still-possible states plus cached aggregates
//! (population count, summed weight). The grid owns all cells and exposes the
//! observation/ban primitives; every successful mutation is appended to an
//! internal change log that the generator drains and forwards to the active
//! heuristic. Draining instead of invoking callbacks inline makes re-entrant
//! domain mutation from inside a notification unrepresentable.

use crate::io::configuration::WEIGHT_EPSILON;
use crate::model::Model;
use crate::spatial::direction::Direction;
use bitvec::bitvec;
use bitvec::prelude::BitVec;

/// One grid position's domain of still-possible states
///
/// `domain_count == 0` signals a contradiction. Once `observed` is set the
/// domain holds exactly that one state and never changes again.
#[derive(Clone, Debug)]
pub struct WaveCell {
    observed: Option<usize>,
    domain: BitVec,
    domain_count: usize,
    sum_weights: f64,
}

impl WaveCell {
    fn new(state_count: usize, sum_weights: f64) -> Self {
        Self {
            observed: None,
            domain: bitvec![1; state_count],
            domain_count: state_count,
            sum_weights,
        }
    }

    /// The chosen state, if this cell has been collapsed
    pub const fn observed(&self) -> Option<usize> {
        self.observed
    }

    /// Number of states still possible
    pub const fn domain_count(&self) -> usize {
        self.domain_count
    }

    /// Sum of weights of still-possible states, tracked incrementally
    pub const fn sum_weights(&self) -> f64 {
        self.sum_weights
    }

    /// Test whether a state is still possible
    pub fn allows(&self, state: usize) -> bool {
        self.domain.get(state).as_deref() == Some(&true)
    }

    /// Whether the cell has been collapsed to a single state
    pub const fn is_decided(&self) -> bool {
        self.observed.is_some()
    }

    /// Whether no legal state remains
    pub const fn is_contradicted(&self) -> bool {
        self.domain_count == 0
    }

    /// Iterate the still-possible state ids in ascending order
    pub fn possible_states(&self) -> impl Iterator<Item = usize> + '_ {
        self.domain.iter_ones()
    }

    fn set_observed(&mut self, state: usize, weight: f64) -> bool {
        if state >= self.domain.len() {
            return false;
        }
        self.domain.fill(false);
        self.domain.set(state, true);
        self.domain_count = 1;
        self.sum_weights = weight;
        self.observed = Some(state);
        true
    }

    fn ban(&mut self, state: usize, weight: f64) -> bool {
        if !self.allows(state) {
            return false;
        }
        self.domain.set(state, false);
        self.domain_count -= 1;
        self.sum_weights -= weight;
        // Clamp drift so near-zero sums never go negative
        if self.sum_weights < WEIGHT_EPSILON {
            self.sum_weights = 0.0;
        }
        true
    }
}

/// A single domain mutation, recorded in the grid's change log
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainChange {
    /// A state was removed from a cell's domain
    Banned {
        /// Cell whose domain shrank
        cell_id: usize,
        /// The removed state
        state: usize,
    },
    /// A cell was collapsed to a single state
    Observed {
        /// The collapsed cell
        cell_id: usize,
        /// The chosen state
        state: usize,
    },
}

/// Rectangular grid of wave cells addressed by `id = y * width + x`
///
/// Created once per generation attempt and fully re-initialized (never
/// reused) on retry.
#[derive(Clone, Debug)]
pub struct WaveGrid {
    width: usize,
    height: usize,
    cell_count: usize,
    cells: Vec<WaveCell>,
    changes: Vec<DomainChange>,
}

impl WaveGrid {
    /// Create an unpopulated grid; call [`WaveGrid::initialize`] before use
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cell_count: width * height,
            cells: Vec::new(),
            changes: Vec::new(),
        }
    }

    /// Allocate all cells with every state possible, then apply boundary
    /// pruning from the model's support data
    ///
    /// A state with no compatible neighbor in some direction is only legal
    /// where that direction leaves the grid, so it is pre-banned from every
    /// cell with an in-bounds neighbor in that direction. Pruning is part of
    /// the starting domains and is not reported through the change log.
    pub fn initialize(&mut self, model: &dyn Model) {
        let state_count = model.state_count();
        let sum_weights = model.sum_weights();
        self.cells = (0..self.cell_count)
            .map(|_| WaveCell::new(state_count, sum_weights))
            .collect();
        self.changes.clear();

        for state in 0..state_count {
            for dir in Direction::ALL {
                if model.has_support(state, dir) {
                    continue;
                }
                let weight = model.weight(state);
                for id in 0..self.cell_count {
                    if self.neighbor_in_direction(id, dir).is_some() {
                        if let Some(cell) = self.cells.get_mut(id) {
                            cell.ban(state, weight);
                        }
                    }
                }
            }
        }
        self.changes.clear();
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// All cells in id order
    pub fn cells(&self) -> &[WaveCell] {
        &self.cells
    }

    /// Look up a cell by id
    pub fn cell(&self, id: usize) -> Option<&WaveCell> {
        self.cells.get(id)
    }

    /// Map coordinates to a cell id
    pub const fn to_id(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Map a cell id back to coordinates
    pub const fn from_id(&self, id: usize) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// In-bounds 4-neighbors of a cell, in canonical direction order
    pub fn neighbors_of(&self, id: usize) -> impl Iterator<Item = (usize, Direction)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor_in_direction(id, dir).map(|n| (n, dir)))
    }

    /// The neighbor id one step in `dir`, when in bounds
    pub fn neighbor_in_direction(&self, id: usize, dir: Direction) -> Option<usize> {
        let (x, y) = self.from_id(id);
        let nx = x as i64 + dir.dx();
        let ny = y as i64 + dir.dy();
        (nx >= 0 && ny >= 0 && (nx as usize) < self.width && (ny as usize) < self.height)
            .then(|| self.to_id(nx as usize, ny as usize))
    }

    /// Collapse a cell to `state`, whose weight becomes the cell's sum
    ///
    /// Returns false without touching the cell if it was already observed or
    /// `state` is outside the model's state range; callers must treat that
    /// as a conflict, not retry the assignment.
    pub fn observe(&mut self, cell_id: usize, state: usize, weight: f64) -> bool {
        let Some(cell) = self.cells.get_mut(cell_id) else {
            return false;
        };
        if cell.is_decided() || !cell.set_observed(state, weight) {
            return false;
        }
        self.changes.push(DomainChange::Observed { cell_id, state });
        true
    }

    /// Remove `state` from a cell's domain
    ///
    /// Returns false (and logs nothing) if the state was already absent.
    /// Banning the last remaining state leaves `domain_count == 0`, which
    /// propagators must surface as a contradiction.
    pub fn ban(&mut self, cell_id: usize, state: usize, weight: f64) -> bool {
        let Some(cell) = self.cells.get_mut(cell_id) else {
            return false;
        };
        if !cell.ban(state, weight) {
            return false;
        }
        self.changes.push(DomainChange::Banned { cell_id, state });
        true
    }

    /// Drain the pending change log
    pub fn take_changes(&mut self) -> Vec<DomainChange> {
        std::mem::take(&mut self.changes)
    }

    /// Discard pending changes without dispatching them
    pub fn discard_changes(&mut self) {
        self.changes.clear();
    }

    /// Whether any cell has an empty domain
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(WaveCell::is_contradicted)
    }
}
