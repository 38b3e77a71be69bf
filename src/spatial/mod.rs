//! Spatial data structures for generation
//!
//! This module contains grid-related functionality including:
//! - 4-directional adjacency on rectangular grids
//! - Wave domains (per-cell state bitsets with incremental bookkeeping)
//! - Symbol/id mapping between sample grids and the integer state space

/// Four-directional grid adjacency
pub mod direction;
/// Symbol grid to integer id mapping and persisted sample records
pub mod mapped;
/// Wave cells and the wave grid with change notification
pub mod wave;

pub use direction::Direction;
pub use mapped::{MapData, MappedGrid};
pub use wave::{DomainChange, WaveCell, WaveGrid};
