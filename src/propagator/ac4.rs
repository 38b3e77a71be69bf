//! Support-counter propagation

use crate::model::Model;
use crate::propagator::{Propagator, observe_cell};
use crate::spatial::direction::Direction;
use crate::spatial::wave::WaveGrid;
use rand::rngs::StdRng;

/// Counter value for directions that leave the grid
///
/// Never decremented, so a boundary direction can never drive a ban.
const UNBOUNDED: u32 = u32::MAX;

/// AC-4: per-(cell, state, direction) support counters
///
/// `counts[(cell * state_count + state) * 4 + dir]` holds how many states in
/// the neighboring cell's domain still support `state` here. A ban then only
/// decrements the counters of dependent pairs instead of rescanning
/// compatibility sets; a counter hitting zero bans that pair and cascades.
/// Initialization also establishes full arc consistency, so the first
/// collapse starts from exact counters.
#[derive(Debug, Default)]
pub struct Ac4Propagator {
    state_count: usize,
    counts: Vec<u32>,
    supporters: Vec<Vec<usize>>,
    queue: Vec<(usize, usize)>,
}

impl Ac4Propagator {
    /// Create an empty propagator
    pub const fn new() -> Self {
        Self {
            state_count: 0,
            counts: Vec::new(),
            supporters: Vec::new(),
            queue: Vec::new(),
        }
    }

    const fn count_index(&self, cell_id: usize, state: usize, dir: Direction) -> usize {
        (cell_id * self.state_count + state) * Direction::COUNT + dir.index()
    }

    /// Cascade the queued removals through the counters
    ///
    /// Each removal of `state` at a cell weakens, in every neighbor, exactly
    /// the states whose support list contains `state` on the connecting
    /// direction. Redundant bans decrement dead counters harmlessly and are
    /// never re-queued.
    fn drain_queue(&mut self, grid: &mut WaveGrid, model: &dyn Model) -> bool {
        while let Some((source, removed)) = self.queue.pop() {
            for edge in Direction::ALL {
                let Some(target) = grid.neighbor_in_direction(source, edge) else {
                    continue;
                };
                let back = edge.opposite();
                let list_index = removed * Direction::COUNT + back.index();
                let dependents = match self.supporters.get(list_index) {
                    Some(list) => list.clone(),
                    None => continue,
                };
                for s in dependents {
                    let idx = self.count_index(target, s, back);
                    let Some(count) = self.counts.get_mut(idx) else {
                        continue;
                    };
                    if *count == UNBOUNDED || *count == 0 {
                        continue;
                    }
                    *count -= 1;
                    if *count > 0 {
                        continue;
                    }
                    if !grid.ban(target, s, model.weight(s)) {
                        continue;
                    }
                    match grid.cell(target) {
                        Some(cell) if cell.is_contradicted() => return false,
                        _ => self.queue.push((target, s)),
                    }
                }
            }
        }
        true
    }
}

impl Propagator for Ac4Propagator {
    fn initialize(&mut self, grid: &mut WaveGrid, model: &dyn Model) {
        self.state_count = model.state_count();

        // Reverse index: supporters[t][d] = states whose d-neighbor list
        // contains t
        self.supporters = vec![Vec::new(); self.state_count * Direction::COUNT];
        for s in 0..self.state_count {
            for dir in Direction::ALL {
                for &t in model.neighbors(s, dir) {
                    if let Some(list) = self.supporters.get_mut(t * Direction::COUNT + dir.index())
                    {
                        list.push(s);
                    }
                }
            }
        }

        // Counting and banning must not interleave: a counter computed after
        // an init-time ban already excludes the banned supporter, and the
        // queued removal would then decrement it a second time. All counters
        // are derived from the boundary-pruned domains first; bans follow.
        self.counts = vec![UNBOUNDED; grid.cell_count() * self.state_count * Direction::COUNT];
        for cell_id in 0..grid.cell_count() {
            for state in 0..self.state_count {
                for dir in Direction::ALL {
                    let Some(neighbor) = grid.neighbor_in_direction(cell_id, dir) else {
                        continue;
                    };
                    let count = grid.cell(neighbor).map_or(0, |cell| {
                        model
                            .neighbors(state, dir)
                            .iter()
                            .filter(|&&s| cell.allows(s))
                            .count()
                    });
                    let idx = self.count_index(cell_id, state, dir);
                    if let Some(slot) = self.counts.get_mut(idx) {
                        *slot = count as u32;
                    }
                }
            }
        }

        self.queue.clear();
        for cell_id in 0..grid.cell_count() {
            for state in 0..self.state_count {
                if !grid.cell(cell_id).is_some_and(|cell| cell.allows(state)) {
                    continue;
                }
                let unsupported = Direction::ALL.into_iter().any(|dir| {
                    let idx = self.count_index(cell_id, state, dir);
                    self.counts.get(idx).copied() == Some(0)
                });
                if unsupported && grid.ban(cell_id, state, model.weight(state)) {
                    self.queue.push((cell_id, state));
                }
            }
        }
        // An emptied domain here surfaces through the grid; the generator
        // checks for contradictions after initialization.
        let _ = self.drain_queue(grid, model);
    }

    fn collapse(
        &mut self,
        grid: &mut WaveGrid,
        model: &dyn Model,
        cell_id: usize,
        rng: &mut StdRng,
    ) -> bool {
        let Some((_, removed)) = observe_cell(grid, model, cell_id, rng) else {
            return false;
        };
        for state in removed {
            self.queue.push((cell_id, state));
        }
        self.drain_queue(grid, model)
    }
}
