//! Conversion of arbitrary-size grayscale rasters into canonical occupancy grids

use ndarray::Array2;

use crate::io::configuration::{DEFAULT_THRESHOLD, validate_grid_size};
use crate::io::error::{Result, invalid_input};
use crate::math::interpolation::resize_bilinear;
use crate::spatial::OccupancyGrid;

/// Which side of the threshold counts as foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Pixels darker than the threshold are occupied (inverse binary)
    #[default]
    DarkForeground,
    /// Pixels at or above the threshold are occupied
    LightForeground,
}

/// Intensity threshold and the sense in which it is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    /// Intensity separating foreground from background (0–255)
    pub threshold: u8,
    /// Which side of the threshold is foreground
    pub polarity: Polarity,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            polarity: Polarity::DarkForeground,
        }
    }
}

impl ThresholdPolicy {
    /// Classify a single intensity sample
    pub const fn is_occupied(&self, intensity: u8) -> bool {
        match self.polarity {
            Polarity::DarkForeground => intensity < self.threshold,
            Polarity::LightForeground => intensity >= self.threshold,
        }
    }
}

/// Resample a raster to `target_size × target_size` and threshold it
///
/// # Errors
///
/// Returns an error if:
/// - The raster has no rows or no columns
/// - `target_size` is not a power of two or lies outside the supported range
pub fn binarize(
    raster: &Array2<u8>,
    target_size: usize,
    policy: &ThresholdPolicy,
) -> Result<OccupancyGrid> {
    validate_grid_size(target_size)?;

    let (rows, cols) = raster.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_input(&format!(
            "raster of size {cols}x{rows} has no pixels"
        )));
    }

    let canonical = resize_bilinear(raster, target_size, target_size)?;
    OccupancyGrid::from_fn(target_size, |r, c| {
        canonical
            .get((r, c))
            .is_some_and(|&intensity| policy.is_occupied(intensity))
    })
}
