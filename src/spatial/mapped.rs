//! Symbol grid to integer id mapping
//!
//! The core works on small integer tile ids; this layer assigns each distinct
//! sample symbol a stable id on first sight (preserving first-seen order) and
//! maps generated ids back to symbols. `MapData` is the minimal serializable
//! record needed to reconstruct a sample without its original source.

use crate::io::error::{GenerationError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Persisted sample record: flattened symbols plus dimensions and the
/// sentinel used for lookup misses
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData<T> {
    /// Row-major symbol grid
    pub grid: Vec<T>,
    /// Grid width
    pub width: usize,
    /// Grid height
    pub height: usize,
    /// Symbol substituted for unresolved or unknown positions
    pub unknown: T,
}

/// A sample symbol grid with a bidirectional symbol ↔ id table
///
/// Ids are assigned in first-seen row-major order, so the mapping is
/// deterministic for a given sample.
#[derive(Clone, Debug)]
pub struct MappedGrid<T> {
    base: Vec<T>,
    width: usize,
    height: usize,
    unknown: T,
    symbol_to_id: HashMap<T, usize>,
    id_to_symbol: Vec<T>,
}

impl<T: Clone + Eq + Hash> MappedGrid<T> {
    /// Build the mapping from a flattened row-major symbol grid
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::DimensionMismatch` if the data length does
    /// not equal `width * height`.
    pub fn new(data: Vec<T>, width: usize, height: usize, unknown: T) -> Result<Self> {
        if data.len() != width * height {
            return Err(GenerationError::DimensionMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }

        let mut symbol_to_id = HashMap::new();
        let mut id_to_symbol = Vec::new();
        for symbol in &data {
            if !symbol_to_id.contains_key(symbol) {
                symbol_to_id.insert(symbol.clone(), id_to_symbol.len());
                id_to_symbol.push(symbol.clone());
            }
        }

        Ok(Self {
            base: data,
            width,
            height,
            unknown,
            symbol_to_id,
            id_to_symbol,
        })
    }

    /// Reconstruct a mapping from a persisted sample record
    ///
    /// # Errors
    ///
    /// Returns an error if the record's dimensions are inconsistent.
    pub fn from_map_data(data: MapData<T>) -> Result<Self> {
        Self::new(data.grid, data.width, data.height, data.unknown)
    }

    /// Export the minimal serializable form of this sample
    pub fn to_map_data(&self) -> MapData<T> {
        MapData {
            grid: self.base.clone(),
            width: self.width,
            height: self.height,
            unknown: self.unknown.clone(),
        }
    }

    /// Sample width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Sample height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of distinct symbols seen in the sample
    pub fn symbol_count(&self) -> usize {
        self.id_to_symbol.len()
    }

    /// The raw sample symbols in row-major order
    pub fn base(&self) -> &[T] {
        &self.base
    }

    /// Id assigned to a symbol, if it occurs in the sample
    pub fn id_of(&self, symbol: &T) -> Option<usize> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Symbol assigned to an id
    pub fn symbol_of(&self, id: usize) -> Option<&T> {
        self.id_to_symbol.get(id)
    }

    /// The sample as a 2D grid of tile ids, indexed `(row, col)`
    pub fn to_ids(&self) -> Array2<usize> {
        Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            self.base
                .get(row * self.width + col)
                .and_then(|symbol| self.id_of(symbol))
                .unwrap_or(0)
        })
    }

    /// Map per-cell tile ids back to symbols
    ///
    /// Positions holding `None` or an id outside the table become the
    /// unknown sentinel.
    pub fn to_symbols(&self, tile_ids: &[Option<usize>]) -> Vec<T> {
        tile_ids
            .iter()
            .map(|entry| {
                entry
                    .and_then(|id| self.symbol_of(id))
                    .cloned()
                    .unwrap_or_else(|| self.unknown.clone())
            })
            .collect()
    }
}
