//! Text and JSON sample loading
//!
//! Text samples are plain character grids, one row per line; ragged rows are
//! padded with spaces to the widest line. JSON samples are persisted
//! [`MapData`] records.

use crate::io::configuration::UNKNOWN_CHAR;
use crate::io::error::{GenerationError, Result};
use crate::spatial::mapped::{MapData, MappedGrid};
use std::path::Path;

/// Parse a character grid from raw text
///
/// # Errors
///
/// Returns [`GenerationError::DegenerateSample`] when the text contains no
/// non-empty line.
pub fn char_grid_from_text(text: &str) -> Result<MappedGrid<char>> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().collect())
        .filter(|row: &Vec<char>| !row.is_empty())
        .collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let height = rows.len();
    if width == 0 || height == 0 {
        return Err(GenerationError::DegenerateSample {
            reason: "text sample contains no non-empty lines".to_string(),
        });
    }

    let mut data = Vec::with_capacity(width * height);
    for row in rows {
        let padding = width - row.len();
        data.extend(row);
        data.extend(std::iter::repeat_n(' ', padding));
    }
    MappedGrid::new(data, width, height, UNKNOWN_CHAR)
}

/// Load a character grid from a text file
///
/// # Errors
///
/// Returns an error when the file cannot be read or parses to an empty grid.
pub fn load_text_sample(path: &Path) -> Result<MappedGrid<char>> {
    let text = std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read sample",
        source: e,
    })?;
    char_grid_from_text(&text)
}

/// Write a character grid to a text file, one row per line
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn save_text_grid(path: &Path, symbols: &[char], width: usize) -> Result<()> {
    let mut text = String::with_capacity(symbols.len() + symbols.len() / width.max(1));
    for row in symbols.chunks(width.max(1)) {
        text.extend(row.iter());
        text.push('\n');
    }
    std::fs::write(path, text).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "write grid",
        source: e,
    })
}

/// Load a character grid from a persisted JSON record
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, or
/// declares dimensions that disagree with its data.
pub fn load_json_sample(path: &Path) -> Result<MappedGrid<char>> {
    let text = std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read sample",
        source: e,
    })?;
    let data: MapData<char> =
        serde_json::from_str(&text).map_err(|e| GenerationError::SampleDecode {
            path: path.to_path_buf(),
            source: e,
        })?;
    MappedGrid::from_map_data(data)
}

/// Persist a character grid as a JSON record
///
/// # Errors
///
/// Returns an error when serialization or the write fails.
pub fn save_json_grid(path: &Path, data: &MapData<char>) -> Result<()> {
    let text = serde_json::to_string_pretty(data).map_err(|e| GenerationError::SampleDecode {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, text).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "write grid",
        source: e,
    })
}
