//! Binarization of rasters and box counting over occupancy grids

/// Resampling and thresholding of intensity rasters into occupancy grids
pub mod binarize;
/// Dyadic box counting over occupancy grids
pub mod box_count;

pub use binarize::{Polarity, ThresholdPolicy, binarize};
pub use box_count::{BoxCount, BoxCountSeries, count_boxes};
