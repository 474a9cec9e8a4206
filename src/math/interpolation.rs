//! Bilinear resampling for 8-bit intensity rasters
//!
//! Sample positions are aligned on pixel centres and clamped at the edges, so
//! a destination pixel at index `d` reads the source at `(d + 0.5) * scale - 0.5`.
//! Results are rounded back to the nearest integer intensity.

use std::error::Error;
use std::fmt;

use ndarray::Array2;

/// Error type for interpolation operations
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation error: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Precomputed source neighbours and blend weight for one destination index
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisSample {
    lower: usize,
    upper: usize,
    weight: f64,
}

fn axis_samples(src_len: usize, dst_len: usize) -> Vec<AxisSample> {
    let scale = src_len as f64 / dst_len as f64;
    let last = (src_len - 1) as f64;

    (0..dst_len)
        .map(|d| {
            let position = ((d as f64 + 0.5) * scale - 0.5).clamp(0.0, last);
            let lower = position.floor() as usize;
            AxisSample {
                lower,
                upper: (lower + 1).min(src_len - 1),
                weight: position - lower as f64,
            }
        })
        .collect()
}

/// Resize a raster to `rows × cols` with bilinear interpolation
///
/// Enlarging and shrinking both use the same two-tap filter; there is no
/// additional low-pass step when shrinking.
///
/// # Errors
///
/// Returns an error if:
/// - The source raster has no rows or no columns
/// - The requested size has zero rows or zero columns
pub fn resize_bilinear(
    src: &Array2<u8>,
    rows: usize,
    cols: usize,
) -> Result<Array2<u8>, InterpolationError> {
    let (src_rows, src_cols) = src.dim();
    if src_rows == 0 || src_cols == 0 {
        return Err(InterpolationError::new("Source raster is empty"));
    }
    if rows == 0 || cols == 0 {
        return Err(InterpolationError::new(format!(
            "Target size {rows}x{cols} must be non-zero"
        )));
    }

    let row_samples = axis_samples(src_rows, rows);
    let col_samples = axis_samples(src_cols, cols);
    let at = |r: usize, c: usize| src.get((r, c)).copied().map_or(0.0, f64::from);

    let mut dst = Array2::zeros((rows, cols));
    for (r, ry) in row_samples.iter().enumerate() {
        for (c, cx) in col_samples.iter().enumerate() {
            let top = (at(ry.lower, cx.upper) - at(ry.lower, cx.lower))
                .mul_add(cx.weight, at(ry.lower, cx.lower));
            let bottom = (at(ry.upper, cx.upper) - at(ry.upper, cx.lower))
                .mul_add(cx.weight, at(ry.upper, cx.lower));
            let value = (bottom - top).mul_add(ry.weight, top);

            if let Some(cell) = dst.get_mut((r, c)) {
                *cell = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(dst)
}
