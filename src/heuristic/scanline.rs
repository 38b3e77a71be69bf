//! Row-major scanline selection

use crate::heuristic::Heuristic;
use crate::spatial::wave::WaveGrid;

/// Picks the first undecided cell in row-major order
///
/// Stateless, no entropy awareness; O(cell count) worst case per pick.
#[derive(Debug, Default)]
pub struct ScanlineHeuristic;

impl ScanlineHeuristic {
    /// Create a scanline heuristic
    pub const fn new() -> Self {
        Self
    }
}

impl Heuristic for ScanlineHeuristic {
    fn pick_next_cell(&mut self, grid: &WaveGrid) -> Option<usize> {
        grid.cells()
            .iter()
            .position(|cell| !cell.is_decided() && !cell.is_contradicted())
    }
}
