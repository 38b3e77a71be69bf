//! PNG sample loading and result export
//!
//! Pixels are treated as opaque RGBA symbols: every distinct color becomes
//! one tile. Fully transparent black doubles as the unknown symbol so
//! contradicted or undecided cells stay visible in exported results.

use crate::io::error::{GenerationError, Result};
use crate::spatial::mapped::MappedGrid;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Unknown symbol for pixel grids
pub const UNKNOWN_PIXEL: [u8; 4] = [0, 0, 0, 0];

/// Load a PNG file as a grid of RGBA symbols
///
/// # Errors
///
/// Returns an error when the image cannot be opened or decoded.
pub fn load_png_sample(path: &Path) -> Result<MappedGrid<[u8; 4]>> {
    let img = image::open(path)
        .map_err(|e| GenerationError::SampleLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data: Vec<[u8; 4]> = img.pixels().map(|p| p.0).collect();
    MappedGrid::new(data, width, height, UNKNOWN_PIXEL)
}

/// Export a grid of RGBA symbols as a PNG image
///
/// # Errors
///
/// Returns an error when the symbol count disagrees with the dimensions, the
/// parent directory cannot be created, or the image cannot be saved.
pub fn export_png(path: &Path, symbols: &[[u8; 4]], width: usize, height: usize) -> Result<()> {
    if symbols.len() != width * height {
        return Err(GenerationError::DimensionMismatch {
            expected: width * height,
            actual: symbols.len(),
        });
    }

    let mut img = ImageBuffer::new(width as u32, height as u32);
    for (i, rgba) in symbols.iter().enumerate() {
        let x = (i % width.max(1)) as u32;
        let y = (i / width.max(1)) as u32;
        img.put_pixel(x, y, Rgba(*rgba));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(path).map_err(|e| GenerationError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
