//! Generation orchestration
//!
//! The generator wires a sample mapping, a model, a heuristic, and a
//! propagator into the observe-propagate loop, owns the wave grid for the
//! current attempt, and forwards the grid's drained domain changes to the
//! heuristic between steps.

use crate::heuristic::Heuristic;
use crate::io::error::Result;
use crate::model::Model;
use crate::propagator::Propagator;
use crate::spatial::mapped::MappedGrid;
use crate::spatial::wave::{DomainChange, WaveGrid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hash::Hash;

/// Seed increment between retry attempts, the 64-bit golden-ratio constant
const RESEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Terminal and non-terminal outcomes of the collapse loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationResult {
    /// Undecided cells remain and no domain is empty
    Collapsing,
    /// Every cell is decided
    Collapsed,
    /// Some domain emptied; the attempt is unsalvageable
    Contradicted,
}

/// Drives repeated observe-propagate steps until the grid resolves
///
/// One generator is built per sample and reused across attempts;
/// [`TileMapGenerator::initialize`] rebuilds all per-attempt state (grid,
/// model tables, heuristic bookkeeping) from scratch.
pub struct TileMapGenerator<T: Clone + Eq + Hash> {
    sample: MappedGrid<T>,
    model: Box<dyn Model>,
    heuristic: Box<dyn Heuristic>,
    propagator: Box<dyn Propagator>,
    grid: WaveGrid,
    rng: StdRng,
    seed: u64,
    doomed: bool,
}

impl<T: Clone + Eq + Hash> TileMapGenerator<T> {
    /// Assemble a generator over `sample` for a `width` by `height` output
    pub fn new(
        sample: MappedGrid<T>,
        model: Box<dyn Model>,
        heuristic: Box<dyn Heuristic>,
        propagator: Box<dyn Propagator>,
        width: usize,
        height: usize,
        seed: u64,
    ) -> Self {
        Self {
            sample,
            model,
            heuristic,
            propagator,
            grid: WaveGrid::new(width, height),
            rng: StdRng::seed_from_u64(seed),
            seed,
            doomed: false,
        }
    }

    /// The wave grid of the current attempt
    pub const fn grid(&self) -> &WaveGrid {
        &self.grid
    }

    /// The sample's symbol mapping
    pub const fn sample(&self) -> &MappedGrid<T> {
        &self.sample
    }

    /// Rebuild all per-attempt state for the current seed
    ///
    /// Order matters: the model's tables exist before grid allocation so
    /// boundary pruning can consult support data, the propagator runs its
    /// setup (which may ban states) next, and the heuristic seeds its
    /// bookkeeping last, from the final starting domains.
    ///
    /// # Errors
    ///
    /// Returns an error when model initialization rejects the sample.
    pub fn initialize(&mut self) -> Result<()> {
        self.rng = StdRng::seed_from_u64(self.seed);
        let ids = self.sample.to_ids();
        self.model.initialize(&ids, &mut self.rng)?;

        let mut grid = WaveGrid::new(self.grid.width(), self.grid.height());
        grid.initialize(self.model.as_ref());
        self.propagator.initialize(&mut grid, self.model.as_ref());
        grid.discard_changes();
        self.heuristic
            .initialize(&grid, self.model.as_ref(), self.seed);
        self.doomed = grid.has_contradiction();
        self.grid = grid;
        Ok(())
    }

    /// Forward pending domain changes to the heuristic
    fn dispatch_changes(&mut self) {
        for change in self.grid.take_changes() {
            match change {
                DomainChange::Banned { cell_id, state } => {
                    self.heuristic.on_banned(cell_id, state);
                }
                DomainChange::Observed { cell_id, state } => {
                    self.heuristic.on_observed(cell_id, state);
                }
            }
        }
    }

    /// Collapse one cell and propagate
    pub fn step(&mut self) -> PropagationResult {
        if self.doomed || self.grid.has_contradiction() {
            return PropagationResult::Contradicted;
        }
        self.dispatch_changes();
        let Some(cell_id) = self.heuristic.pick_next_cell(&self.grid) else {
            return PropagationResult::Collapsed;
        };
        let ok = self
            .propagator
            .collapse(&mut self.grid, self.model.as_ref(), cell_id, &mut self.rng);
        self.dispatch_changes();
        if ok {
            PropagationResult::Collapsing
        } else {
            PropagationResult::Contradicted
        }
    }

    /// Step until the attempt reaches a terminal state
    ///
    /// # Errors
    ///
    /// Returns an error when model initialization rejects the sample.
    pub fn generate(&mut self) -> Result<PropagationResult> {
        self.initialize()?;
        loop {
            match self.step() {
                PropagationResult::Collapsing => {}
                terminal => return Ok(terminal),
            }
        }
    }

    /// Retry whole attempts with derived seeds until one collapses
    ///
    /// Each retry reseeds deterministically from the previous seed. With
    /// `max_attempts` of `None`, retries continue indefinitely; callers
    /// wanting bounded work must pass a cap. A contradiction already present
    /// at initialization ends the loop at once, since it cannot depend on
    /// the seed. Returns the terminal result of the last attempt made.
    ///
    /// # Errors
    ///
    /// Returns an error when model initialization rejects the sample.
    pub fn generate_until_collapsed(
        &mut self,
        max_attempts: Option<usize>,
    ) -> Result<PropagationResult> {
        let mut attempt = 0;
        loop {
            let result = self.generate()?;
            attempt += 1;
            if result == PropagationResult::Collapsed {
                return Ok(result);
            }
            // A contradiction present at initialization is seed-independent,
            // so no number of retries can clear it.
            if self.doomed {
                return Ok(result);
            }
            if let Some(cap) = max_attempts {
                if attempt >= cap {
                    return Ok(result);
                }
            }
            self.seed = self.seed.wrapping_add(RESEED_STEP);
        }
    }

    /// Map each decided cell through the model's tile id and the sample's
    /// symbol table
    ///
    /// Undecided or contradicted cells yield the sample's unknown symbol.
    pub fn to_symbols(&self) -> Vec<T> {
        let tile_ids: Vec<Option<usize>> = self
            .grid
            .cells()
            .iter()
            .map(|cell| cell.observed().and_then(|s| self.model.tile_id(s)))
            .collect();
        self.sample.to_symbols(&tile_ids)
    }
}
