//! Spatial data structures for binary occupancy grids

/// Power-of-two occupancy grid and dyadic coarsening
pub mod grid;

pub use grid::OccupancyGrid;
