//! Wave function collapse tile map generation
//!
//! The system learns adjacency constraints from a sample grid of symbols and
//! generates new grids in which every 4-neighbor pair satisfies those
//! constraints. Cell selection (heuristics) and arc-consistency enforcement
//! (propagators) are interchangeable strategies chosen at construction time.

#![forbid(unsafe_code)]

/// Collapse/propagate orchestration and terminal result reporting
pub mod generator;
/// Cell-selection strategies driven by incremental entropy tracking
pub mod heuristic;
/// Input/output operations and error handling
pub mod io;
/// Sample analysis: pattern extraction, weights, and adjacency tables
pub mod model;
/// Arc-consistency strategies that enforce neighbor compatibility
pub mod propagator;
/// Grid topology, wave domains, and symbol/id mapping
pub mod spatial;

pub use generator::{PropagationResult, TileMapGenerator};
pub use io::error::{GenerationError, Result};

#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod unit;
