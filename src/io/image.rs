//! Grayscale image loading and PNG export of occupancy grids

use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;

use crate::io::error::{FractalError, Result, invalid_input};
use crate::spatial::OccupancyGrid;

/// Load an image file as an 8-bit grayscale raster indexed by `(row, col)`
///
/// Color images are converted to luma; any format enabled in the `image`
/// crate is accepted.
///
/// # Errors
///
/// Returns an error if:
/// - No file exists at `path`
/// - The file cannot be decoded as an image
/// - The decoded image has zero width or height
pub fn load_raster(path: &Path) -> Result<Array2<u8>> {
    if !path.is_file() {
        return Err(FractalError::ImageNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| FractalError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    raster_from_luma(img.to_luma8())
}

/// Convert a decoded luma image into a raster
///
/// # Errors
///
/// Returns an error if the image has zero width or height
pub fn raster_from_luma(luma: GrayImage) -> Result<Array2<u8>> {
    let (width, height) = (luma.width() as usize, luma.height() as usize);
    if width == 0 || height == 0 {
        return Err(invalid_input(&format!(
            "image of size {width}x{height} has no pixels"
        )));
    }

    Array2::from_shape_vec((height, width), luma.into_raw())
        .map_err(|e| invalid_input(&format!("pixel buffer does not match image size: {e}")))
}

/// Export an occupancy grid as a PNG with black foreground on white
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &OccupancyGrid, output_path: &Path) -> Result<()> {
    let side = grid.side() as u32;
    let img = GrayImage::from_fn(side, side, |x, y| {
        if grid.is_occupied(y as usize, x as usize) {
            Luma([0])
        } else {
            Luma([255])
        }
    });

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FractalError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| FractalError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
