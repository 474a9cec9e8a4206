//! Dyadic box counting over occupancy grids
//!
//! The finest level is the grid itself, where each occupied cell is one box.
//! Every coarser level is derived from the one below it by merging 2×2
//! blocks, after which the finer level is dropped. Each level is complete
//! before the next is read, and total work is proportional to the cell count.

use std::iter::successors;

use crate::io::configuration::MIN_GRID_SIZE;
use crate::io::error::{Result, invalid_config};
use crate::math::dyadic::{box_sizes, exact_log2};
use crate::spatial::OccupancyGrid;

/// Number of non-empty boxes at one box size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxCount {
    /// Box side length in canonical grid cells
    pub box_size: usize,
    /// Boxes containing at least one occupied cell
    pub count: usize,
}

/// Box counts for box sizes `1, 2, 4, …, S` in ascending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxCountSeries {
    entries: Vec<BoxCount>,
}

impl BoxCountSeries {
    /// All entries, ascending by box size
    pub fn entries(&self) -> &[BoxCount] {
        &self.entries
    }

    /// Number of box sizes in the series
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the series has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries, ascending by box size
    pub fn iter(&self) -> std::slice::Iter<'_, BoxCount> {
        self.entries.iter()
    }

    /// Count for a given box size, if it is part of the series
    pub fn count_at(&self, box_size: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.box_size == box_size)
            .map(|entry| entry.count)
    }

    /// `(box size, count)` pairs as floating point, the shape consumed by plotting tools
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.box_size as f64, entry.count as f64))
    }
}

impl<'a> IntoIterator for &'a BoxCountSeries {
    type Item = &'a BoxCount;
    type IntoIter = std::slice::Iter<'a, BoxCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count non-empty boxes at every dyadic box size of a grid
///
/// The count at box size 1 is the number of occupied cells; the count at
/// box size `S` is 1 when anything is occupied and 0 otherwise.
///
/// # Errors
///
/// Returns an error if the grid side is below 2 or is not a power of two
pub fn count_boxes(grid: &OccupancyGrid) -> Result<BoxCountSeries> {
    let side = grid.side();
    let exponent = exact_log2(side)
        .filter(|_| side >= MIN_GRID_SIZE)
        .ok_or_else(|| {
            invalid_config(
                "grid_size",
                &side,
                &format!("box counting needs a power-of-two side of at least {MIN_GRID_SIZE}"),
            )
        })?;

    let finest = grid.occupied_count();
    let coarser =
        successors(grid.coarsen(), OccupancyGrid::coarsen).map(|level| level.occupied_count());

    let entries = box_sizes(exponent)
        .zip(std::iter::once(finest).chain(coarser))
        .map(|(box_size, count)| BoxCount { box_size, count })
        .collect();

    Ok(BoxCountSeries { entries })
}
