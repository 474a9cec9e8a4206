//! Square occupancy grid with dyadic coarsening
//!
//! Cells are stored row-major in a single bit vector. The side length is
//! always a power of two so the grid can be halved repeatedly down to a
//! single cell.

use std::fmt;

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{Result, invalid_config};
use crate::math::dyadic::exact_log2;

/// Square boolean grid whose side is a power of two
///
/// `true` marks an occupied (foreground) cell.
#[derive(Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    side: usize,
    cells: BitVec,
}

impl OccupancyGrid {
    /// Create a grid with every cell empty
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not a power of two or exceeds `MAX_GRID_SIZE`
    pub fn new(side: usize) -> Result<Self> {
        Self::check_side(side)?;
        Ok(Self {
            side,
            cells: bitvec![0; side * side],
        })
    }

    /// Create a grid with every cell occupied
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not a power of two or exceeds `MAX_GRID_SIZE`
    pub fn filled(side: usize) -> Result<Self> {
        Self::check_side(side)?;
        Ok(Self {
            side,
            cells: bitvec![1; side * side],
        })
    }

    /// Build a grid by evaluating `occupied(row, col)` for every cell
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not a power of two or exceeds `MAX_GRID_SIZE`
    pub fn from_fn(side: usize, mut occupied: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        Self::check_side(side)?;
        let cells = (0..side * side)
            .map(|index| occupied(index / side, index % side))
            .collect();
        Ok(Self { side, cells })
    }

    /// Build a grid from a square boolean array
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not square or its side is not a
    /// power of two no larger than `MAX_GRID_SIZE`
    pub fn from_array(array: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = array.dim();
        if rows != cols {
            return Err(invalid_config(
                "grid_shape",
                &format!("{rows}x{cols}"),
                &"occupancy grid must be square",
            ));
        }
        Self::from_fn(rows, |r, c| array.get((r, c)).copied().unwrap_or(false))
    }

    fn check_side(side: usize) -> Result<()> {
        if exact_log2(side).is_none() {
            return Err(invalid_config(
                "grid_size",
                &side,
                &"side length must be a power of two",
            ));
        }
        // Keeps `side * side` addressable as a bit length
        if side > MAX_GRID_SIZE {
            return Err(invalid_config(
                "grid_size",
                &side,
                &format!("side length must not exceed {MAX_GRID_SIZE}"),
            ));
        }
        Ok(())
    }

    /// Side length in cells
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Test whether a cell is occupied; out-of-range cells are empty
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.side
            && col < self.side
            && self.cells.get(row * self.side + col).as_deref() == Some(&true)
    }

    /// Set the occupancy of a cell; out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        if row < self.side && col < self.side {
            self.cells.set(row * self.side + col, occupied);
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.count_ones()
    }

    /// Merge each 2×2 block into one cell of a grid with half the side
    ///
    /// A merged cell is occupied iff any of its four children is occupied.
    /// Returns `None` once the grid is down to a single cell.
    pub fn coarsen(&self) -> Option<Self> {
        let side = self.side / 2;
        if side == 0 {
            return None;
        }

        let cells = (0..side * side)
            .map(|index| {
                let (row, col) = (2 * (index / side), 2 * (index % side));
                self.is_occupied(row, col)
                    || self.is_occupied(row + 1, col)
                    || self.is_occupied(row, col + 1)
                    || self.is_occupied(row + 1, col + 1)
            })
            .collect();
        Some(Self { side, cells })
    }

    /// Copy the grid into a boolean array indexed by `(row, col)`
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.side, self.side), |(r, c)| self.is_occupied(r, c))
    }
}

impl fmt::Debug for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OccupancyGrid({}x{}, {} occupied)",
            self.side,
            self.side,
            self.occupied_count()
        )
    }
}
