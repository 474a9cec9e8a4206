//! Analysis constants and runtime configuration defaults

use crate::analysis::binarize::ThresholdPolicy;
use crate::io::error::{Result, invalid_config};
use crate::math::dyadic::exact_log2;

/// Side length of the canonical grid images are resampled to
pub const DEFAULT_GRID_SIZE: usize = 512;

/// Intensity below which a pixel is foreground (dark-foreground polarity)
pub const DEFAULT_THRESHOLD: u8 = 250;

/// Smallest grid side that yields more than one box size
pub const MIN_GRID_SIZE: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Largest accepted canonical grid side
pub const MAX_GRID_SIZE: usize = 8192;

/// Directory image names are resolved against
pub const DEFAULT_IMAGES_DIR: &str = "../images";

// Output settings
/// Suffix added to the image stem for the results file
pub const OUTPUT_SUFFIX: &str = "_output";
/// Extension of the results file
pub const OUTPUT_EXTENSION: &str = "txt";
/// Suffix added to the image stem for the binarized preview
pub const BINARY_SUFFIX: &str = "_binary";
/// Extension of the binarized preview
pub const BINARY_EXTENSION: &str = "png";
/// Digits after the decimal point for each value in the results file
pub const SERIES_PRECISION: usize = 6;

// Post-processing collaborator
/// Interpreter used to launch the plotting script
pub const PYTHON_PROGRAM: &str = "python";
/// Plotting and fitting script shipped next to the tool
pub const PLOT_SCRIPT: &str = "plot_fractal.py";
/// MATLAB entry point offered as an alternative in the guidance text
pub const MATLAB_FUNCTION: &str = "plot_fractal";

/// Check that a canonical grid side is usable
///
/// Returns the exponent `p` with `2^p == size`.
///
/// # Errors
///
/// Returns an error if `size` is not a power of two or lies outside
/// `MIN_GRID_SIZE..=MAX_GRID_SIZE`
pub fn validate_grid_size(size: usize) -> Result<u32> {
    let exponent = exact_log2(size)
        .ok_or_else(|| invalid_config("grid_size", &size, &"must be a power of two"))?;

    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(invalid_config(
            "grid_size",
            &size,
            &format!("must lie between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
        ));
    }

    Ok(exponent)
}

/// Parameters for a single image analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Canonical grid side length
    pub grid_size: usize,
    /// Foreground classification
    pub threshold: ThresholdPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            threshold: ThresholdPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    /// Check every parameter before any image is touched
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is invalid
    pub fn validate(&self) -> Result<()> {
        validate_grid_size(self.grid_size).map(|_| ())
    }
}
