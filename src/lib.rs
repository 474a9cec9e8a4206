//! Box-counting analysis of grayscale images
//!
//! Images are resampled to a square power-of-two grid, thresholded into an
//! occupancy grid, and covered with boxes of side `1, 2, 4, …`. The number of
//! occupied boxes at each size is written out for an external log-log fit of
//! the fractal dimension.

#![forbid(unsafe_code)]

/// Binarization and box counting
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Resampling and power-of-two utilities
pub mod math;
/// Occupancy grid storage and coarsening
pub mod spatial;

pub use analysis::{BoxCount, BoxCountSeries, ThresholdPolicy, binarize, count_boxes};
pub use io::error::{FractalError, Result};
pub use spatial::OccupancyGrid;
