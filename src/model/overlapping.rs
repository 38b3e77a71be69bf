//! Overlapping-pattern model
//!
//! Slides an N×N window over every sample position, deduplicates identical
//! windows into states weighted by occurrence count, and derives
//! per-direction compatibility by checking window agreement under a one-cell
//! offset. Optional wraparound treats the sample as periodic; optional
//! 8-fold symmetry adds the rotations and reflections of every window as
//! additional occurrences.

use crate::io::error::{GenerationError, Result};
use crate::model::Model;
use crate::spatial::direction::Direction;
use ndarray::Array2;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Flattened N×N window of sample tile ids, row-major
type Pattern = Vec<usize>;

/// Model deriving its state space from overlapping N×N sample windows
pub struct OverlappingModel {
    n: usize,
    periodic_input: bool,
    symmetry: bool,
    patterns: Vec<Pattern>,
    weights: Vec<f64>,
    sum_weights: f64,
    compat: Vec<[Vec<usize>; 4]>,
}

impl OverlappingModel {
    /// Create a model for N×N windows
    ///
    /// `periodic_input` wraps window extraction around the sample edges;
    /// `symmetry` duplicates every window through its 8 rotations and
    /// reflections. The output grid itself is always non-periodic.
    pub const fn new(n: usize, periodic_input: bool, symmetry: bool) -> Self {
        Self {
            n,
            periodic_input,
            symmetry,
            patterns: Vec::new(),
            weights: Vec::new(),
            sum_weights: 0.0,
            compat: Vec::new(),
        }
    }

    /// Pattern side length
    pub const fn pattern_size(&self) -> usize {
        self.n
    }

    fn window_at(&self, sample: &Array2<usize>, x: usize, y: usize) -> Pattern {
        let (height, width) = sample.dim();
        let mut pattern = Vec::with_capacity(self.n * self.n);
        for dy in 0..self.n {
            for dx in 0..self.n {
                let row = (y + dy) % height;
                let col = (x + dx) % width;
                pattern.push(sample.get((row, col)).copied().unwrap_or(0));
            }
        }
        pattern
    }

    fn rotate(&self, pattern: &[usize]) -> Pattern {
        let n = self.n;
        let mut rotated = vec![0; n * n];
        for y in 0..n {
            for x in 0..n {
                let source = pattern.get((n - 1 - x) * n + y).copied().unwrap_or(0);
                if let Some(slot) = rotated.get_mut(y * n + x) {
                    *slot = source;
                }
            }
        }
        rotated
    }

    fn reflect(&self, pattern: &[usize]) -> Pattern {
        let n = self.n;
        let mut reflected = vec![0; n * n];
        for y in 0..n {
            for x in 0..n {
                let source = pattern.get(y * n + (n - 1 - x)).copied().unwrap_or(0);
                if let Some(slot) = reflected.get_mut(y * n + x) {
                    *slot = source;
                }
            }
        }
        reflected
    }

    fn variants_of(&self, pattern: Pattern) -> Vec<Pattern> {
        if !self.symmetry {
            return vec![pattern];
        }
        let mut variants = Vec::with_capacity(8);
        let mut current = pattern;
        for _ in 0..4 {
            variants.push(current.clone());
            variants.push(self.reflect(&current));
            current = self.rotate(&current);
        }
        variants
    }

    /// Whether `a` agrees with `b` when `b` is placed one cell away in `dir`
    ///
    /// Agreement is checked over the overlap of the two windows; with N = 1
    /// the overlap is empty and every pair is compatible.
    fn agrees(&self, a: &[usize], b: &[usize], dir: Direction) -> bool {
        let n = self.n as i64;
        let (dx, dy) = (dir.dx(), dir.dy());
        for y in 0..n {
            for x in 0..n {
                let bx = x - dx;
                let by = y - dy;
                if bx < 0 || bx >= n || by < 0 || by >= n {
                    continue;
                }
                let from_a = a.get((y * n + x) as usize);
                let from_b = b.get((by * n + bx) as usize);
                if from_a != from_b {
                    return false;
                }
            }
        }
        true
    }
}

impl Model for OverlappingModel {
    fn initialize(&mut self, sample: &Array2<usize>, _rng: &mut StdRng) -> Result<()> {
        let (height, width) = sample.dim();
        if self.n == 0 {
            return Err(GenerationError::InvalidParameter {
                parameter: "pattern_size",
                value: "0".to_string(),
                reason: "window side length must be at least 1".to_string(),
            });
        }
        if !self.periodic_input && (width < self.n || height < self.n) {
            return Err(GenerationError::DegenerateSample {
                reason: format!(
                    "sample {width}x{height} is smaller than the {n}x{n} window",
                    n = self.n
                ),
            });
        }
        if width == 0 || height == 0 {
            return Err(GenerationError::DegenerateSample {
                reason: "sample has no cells".to_string(),
            });
        }

        self.patterns.clear();
        self.weights.clear();
        self.compat.clear();

        let (x_limit, y_limit) = if self.periodic_input {
            (width, height)
        } else {
            (width - self.n + 1, height - self.n + 1)
        };

        let mut index_of: HashMap<Pattern, usize> = HashMap::new();
        for y in 0..y_limit {
            for x in 0..x_limit {
                for variant in self.variants_of(self.window_at(sample, x, y)) {
                    if let Some(&state) = index_of.get(&variant) {
                        if let Some(weight) = self.weights.get_mut(state) {
                            *weight += 1.0;
                        }
                    } else {
                        index_of.insert(variant.clone(), self.patterns.len());
                        self.patterns.push(variant);
                        self.weights.push(1.0);
                    }
                }
            }
        }

        if self.patterns.is_empty() {
            return Err(GenerationError::DegenerateSample {
                reason: "no patterns extractable from sample".to_string(),
            });
        }

        self.sum_weights = self.weights.iter().sum();

        let state_count = self.patterns.len();
        let compat: Vec<[Vec<usize>; 4]> = (0..state_count)
            .map(|a| {
                let mut by_dir: [Vec<usize>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
                for dir in Direction::ALL {
                    let pattern_a = self.patterns.get(a).cloned().unwrap_or_default();
                    let compatible: Vec<usize> = (0..state_count)
                        .filter(|&b| {
                            self.patterns
                                .get(b)
                                .is_some_and(|pattern_b| self.agrees(&pattern_a, pattern_b, dir))
                        })
                        .collect();
                    if let Some(slot) = by_dir.get_mut(dir.index()) {
                        *slot = compatible;
                    }
                }
                by_dir
            })
            .collect();
        self.compat = compat;

        Ok(())
    }

    fn state_count(&self) -> usize {
        self.patterns.len()
    }

    fn sum_weights(&self) -> f64 {
        self.sum_weights
    }

    fn weight(&self, state: usize) -> f64 {
        self.weights.get(state).copied().unwrap_or(0.0)
    }

    fn neighbors(&self, state: usize, dir: Direction) -> &[usize] {
        self.compat
            .get(state)
            .and_then(|by_dir| by_dir.get(dir.index()))
            .map_or(&[], Vec::as_slice)
    }

    fn tile_id(&self, state: usize) -> Option<usize> {
        self.patterns.get(state).and_then(|p| p.first().copied())
    }
}
