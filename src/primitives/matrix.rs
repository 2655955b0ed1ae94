//! Augmented-matrix workspace for the elimination solver.
//!
//! ## Purpose
//!
//! This module provides the transient working storage for the
//! normal-equations system: a dense `(n+1) × (n+2)` augmented matrix
//! `[G | y]` where `G` is the Gram matrix of the monomial basis and the
//! last column is the right-hand side. The matrix is allocated once per
//! fit call and never exposed to callers.
//!
//! ## Design notes
//!
//! * **Flat storage**: A single row-major `Vec<T>` indexed by `(row, col)`,
//!   avoiding the aliasing and locality problems of nested vectors.
//! * **Explicit bounds**: All accessors take `(row, col)` pairs; debug
//!   assertions guard against out-of-range indexing.
//! * **1D-focused**: Sized for the augmented normal system only; this is a
//!   fixed-size per-call workspace, not a general matrix type.
//!
//! ## Invariants
//!
//! * `cols == rows + 1` (square coefficient block plus the RHS column).
//! * Storage length is exactly `rows * cols` for the lifetime of the value.
//!
//! ## Non-goals
//!
//! * No general linear-algebra operations (multiplication, inversion).
//! * No reuse across fit calls; each fit allocates its own workspace.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// ============================================================================
// Augmented Matrix
// ============================================================================

/// Dense row-major augmented matrix `[G | y]` for the normal equations.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    /// Number of rows (equations), `degree + 1`.
    rows: usize,

    /// Number of columns including the RHS, `rows + 1`.
    cols: usize,

    /// Row-major storage of length `rows * cols`.
    data: Vec<T>,
}

impl<T: Float> AugmentedMatrix<T> {
    /// Create a zeroed augmented matrix with `rows` equations.
    ///
    /// The column count is always `rows + 1`: the square coefficient block
    /// plus the right-hand-side column.
    pub fn zeroed(rows: usize) -> Self {
        let cols = rows + 1;
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Number of equation rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, including the augmented RHS column.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Index of the right-hand-side column.
    #[inline]
    pub fn rhs_col(&self) -> usize {
        self.cols - 1
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows, "row {} out of bounds ({})", row, self.rows);
        debug_assert!(col < self.cols, "col {} out of bounds ({})", col, self.cols);
        row * self.cols + col
    }

    /// Swap two entire rows in place.
    #[inline]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (a_off, b_off) = (self.offset(a, 0), self.offset(b, 0));
        for j in 0..cols {
            self.data.swap(a_off + j, b_off + j);
        }
    }

    /// Subtract `factor * row(src)` from `row(dst)` across all columns.
    ///
    /// This is the elementary row operation of forward elimination.
    #[inline]
    pub fn eliminate_row(&mut self, dst: usize, src: usize, factor: T) {
        debug_assert_ne!(dst, src, "cannot eliminate a row against itself");
        let cols = self.cols;
        let src_off = self.offset(src, 0);
        let dst_off = self.offset(dst, 0);
        for j in 0..cols {
            let delta = factor * self.data[src_off + j];
            self.data[dst_off + j] = self.data[dst_off + j] - delta;
        }
    }

    /// Largest absolute entry in the coefficient block (RHS excluded).
    ///
    /// Used to scale the near-zero pivot tolerance to the magnitude of the
    /// system.
    pub fn max_abs_coefficient(&self) -> T {
        let mut max = T::zero();
        for row in 0..self.rows {
            for col in 0..self.rows {
                let v = self[(row, col)].abs();
                if v > max {
                    max = v;
                }
            }
        }
        max
    }
}

impl<T: Float> Index<(usize, usize)> for AugmentedMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for AugmentedMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let off = self.offset(row, col);
        &mut self.data[off]
    }
}
