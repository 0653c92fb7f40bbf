//! # Periodic cell grid (2D)
//!
//! This module implements the **linked-cell** spatial index used by the force
//! pass. The periodic domain `W x H` is split into `rows x columns` cells whose
//! edge length equals the force cutoff radius, so any two particles closer
//! than the cutoff sit in the same cell or in adjacent cells.
//!
//! ## Addressing
//!
//! Cells are addressed 1-indexed: interior cells are `1..=rows` by
//! `1..=columns`. A ghost ring surrounds the interior (row `0` and `rows + 1`,
//! column `0` and `columns + 1`). Ghost cells hold no data of their own:
//! [`SpatialGrid::wrap`] maps them onto the interior cell on the opposite
//! side, and the displacement table says how far a particle seen through
//! that ghost has to be shifted so that distances across the boundary come
//! out right.
//!
//! ## Half-stencil
//!
//! [`SpatialGrid::neighbors_of`] returns the cell itself, its right neighbor
//! and the three cells of the next row:
//!
//! ```text
//!          j-1   j    j+1
//!   i           [X]   [1]
//!   i+1   [2]   [3]   [4]
//! ```
//!
//! Sweeping this stencil over every interior cell touches every pair of
//! adjacent cells exactly once, so no pair of particles is evaluated twice.

use crate::error::{Result, SimulationError};
use crate::simulation::states::NVec2;

/// One entry of the half-stencil returned by [`SpatialGrid::neighbors_of`].
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub cell: (usize, usize), // interior cell the requested coordinate resolves to
    pub bucket: &'a [usize], // particle indices stored in that cell
    pub displacement: Option<NVec2>, // shift for particles seen through a ghost
}

/// Uniform periodic grid of particle buckets.
///
/// Buckets live in a row-major arena of `rows * columns` entries. The
/// displacement table covers the full `(rows + 2) x (columns + 2)` range
/// including the ghost ring.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    rows: usize,
    columns: usize,
    cell_size: f64,
    width: f64,
    height: f64,
    buckets: Vec<Vec<usize>>,
    displacements: Vec<Option<NVec2>>,
}

impl SpatialGrid {
    /// Create a grid of `rows x columns` cells with edge length `cell_size`.
    ///
    /// The domain extent follows from the cell count:
    /// `width = columns * cell_size`, `height = rows * cell_size`.
    pub fn new(rows: usize, columns: usize, cell_size: f64) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(SimulationError::config(format!(
                "grid needs at least one row and one column, got {rows}x{columns}"
            )));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SimulationError::config(format!(
                "cell size must be positive and finite, got {cell_size}"
            )));
        }

        let width = columns as f64 * cell_size;
        let height = rows as f64 * cell_size;

        let mut displacements = Vec::with_capacity((rows + 2) * (columns + 2));
        for i in 0..rows + 2 {
            // ghost rows see the opposite edge shifted by one domain height
            let dy = if i == 0 {
                -height
            } else if i == rows + 1 {
                height
            } else {
                0.0
            };
            for j in 0..columns + 2 {
                let dx = if j == 0 {
                    -width
                } else if j == columns + 1 {
                    width
                } else {
                    0.0
                };
                let d = if dx != 0.0 || dy != 0.0 {
                    Some(NVec2::new(dx, dy))
                } else {
                    None
                };
                displacements.push(d);
            }
        }

        Ok(Self {
            rows,
            columns,
            cell_size,
            width,
            height,
            buckets: vec![Vec::new(); rows * columns],
            displacements,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Empty every bucket. Ghost cells have no storage, so they are empty too.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }

    /// Put the index of every position into the bucket of its cell.
    ///
    /// Positions are expected to be wrapped into `[0,W) x [0,H)` already;
    /// anything outside is clamped onto the nearest edge cell.
    pub fn place(&mut self, positions: &[NVec2]) {
        for (n, pos) in positions.iter().enumerate() {
            let (i, j) = self.cell_of(pos);
            let slot = self.slot(i, j);
            self.buckets[slot].push(n);
        }
    }

    /// Interior cell `(row, column)` containing `pos`.
    ///
    /// Bins are `[k * cell, (k + 1) * cell)`; the upper edge and anything
    /// beyond it falls into the last bin.
    pub fn cell_of(&self, pos: &NVec2) -> (usize, usize) {
        let bin = |coord: f64, count: usize| -> usize {
            // negative and NaN saturate to 0 in the float -> usize cast
            let k = (coord / self.cell_size).floor() as usize;
            k.min(count - 1) + 1
        };
        (bin(pos.y, self.rows), bin(pos.x, self.columns))
    }

    /// Map a possibly-ghost coordinate onto the interior cell it aliases.
    ///
    /// Row `0` maps to `rows`, row `rows + 1` maps to `1`; columns likewise.
    /// Interior coordinates are returned unchanged.
    pub fn wrap(&self, i: usize, j: usize) -> (usize, usize) {
        let wrap_axis = |k: usize, count: usize| -> usize {
            if k == 0 {
                count
            } else if k == count + 1 {
                1
            } else {
                k
            }
        };
        (wrap_axis(i, self.rows), wrap_axis(j, self.columns))
    }

    /// Displacement of the requested coordinate, `None` for interior cells.
    pub fn displacement(&self, i: usize, j: usize) -> Result<Option<NVec2>> {
        self.check_ring(i, j)?;
        Ok(self.displacements[i * (self.columns + 2) + j])
    }

    /// Bucket of cell `(i, j)`. Ghost coordinates resolve to their interior
    /// counterpart; anything beyond the ghost ring is an error.
    pub fn cell(&self, i: usize, j: usize) -> Result<&[usize]> {
        self.check_ring(i, j)?;
        let (wi, wj) = self.wrap(i, j);
        Ok(&self.buckets[self.slot(wi, wj)])
    }

    /// The 5-cell forward stencil of interior cell `(i, j)`:
    /// `(i,j)`, `(i,j+1)`, `(i+1,j-1)`, `(i+1,j)`, `(i+1,j+1)`.
    ///
    /// Fails if `(i, j)` is not an interior cell.
    pub fn neighbors_of(&self, i: usize, j: usize) -> Result<[Neighbor<'_>; 5]> {
        if i < 1 || i > self.rows || j < 1 || j > self.columns {
            return Err(self.invalid(i, j));
        }
        Ok(self.stencil(i, j))
    }

    /// Interior cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.rows).flat_map(move |i| (1..=self.columns).map(move |j| (i, j)))
    }

    /// Unchecked stencil, `(i, j)` must be interior.
    pub(crate) fn stencil(&self, i: usize, j: usize) -> [Neighbor<'_>; 5] {
        let entry = |ri: usize, rj: usize| {
            let (wi, wj) = self.wrap(ri, rj);
            Neighbor {
                cell: (wi, wj),
                bucket: &self.buckets[self.slot(wi, wj)],
                displacement: self.displacements[ri * (self.columns + 2) + rj],
            }
        };
        [
            entry(i, j),
            entry(i, j + 1),
            entry(i + 1, j - 1),
            entry(i + 1, j),
            entry(i + 1, j + 1),
        ]
    }

    fn slot(&self, i: usize, j: usize) -> usize {
        (i - 1) * self.columns + (j - 1)
    }

    fn check_ring(&self, i: usize, j: usize) -> Result<()> {
        if i > self.rows + 1 || j > self.columns + 1 {
            return Err(self.invalid(i, j));
        }
        Ok(())
    }

    fn invalid(&self, i: usize, j: usize) -> SimulationError {
        SimulationError::InvalidCell {
            i,
            j,
            rows: self.rows,
            columns: self.columns,
        }
    }
}
