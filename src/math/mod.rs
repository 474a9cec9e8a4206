//! Mathematical utilities for resampling and dyadic scales

/// Power-of-two helpers for grid sides and box sizes
pub mod dyadic;
/// Bilinear resampling of intensity rasters
pub mod interpolation;
