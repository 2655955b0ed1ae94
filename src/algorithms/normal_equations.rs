//! Normal-equations assembly for least-squares polynomial fitting.
//!
//! ## Purpose
//!
//! This module builds the augmented linear system whose solution is the
//! least-squares coefficient vector. For a fit of degree `n` over samples
//! `(x_j, y_j)`, the system is `G·a = m` where
//!
//! ```text
//! G[i][k] = Σ_j x_j^(i+k)      (Gram matrix of the monomial basis)
//! m[i]    = Σ_j x_j^i · y_j    (moment vector)
//! ```
//!
//! Both are assembled into a single `(n+1) × (n+2)` augmented workspace.
//!
//! ## Design notes
//!
//! * **Power sums first**: `G` contains only `2n+1` distinct values
//!   (`Σ x^0` through `Σ x^2n`), so those are computed once and scattered
//!   along the anti-diagonals instead of recomputed per cell.
//! * **Running powers**: Each sample contributes `x^0, x^1, ...` via
//!   iterated multiplication; no `powi` in the inner loops.
//! * **Generics**: Assembly is generic over `Float` types.
//!
//! ## Invariants
//!
//! * `power_sums(x, n).len() == 2n + 1` and `power_sums(x, n)[0] == N`.
//! * The assembled matrix is symmetric in its coefficient block.
//!
//! ## Non-goals
//!
//! * No input validation (the engine validates before assembly).
//! * No conditioning improvements (scaling, orthogonal bases); the system
//!   is solved as assembled.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Power Sums
// ============================================================================

/// Compute the power sums `Σ_j x_j^i` for `i = 0 .. 2·degree`.
///
/// Returns a vector of length `2·degree + 1`; index `i` holds the sum of
/// the i-th powers. Index 0 is therefore the sample count as a float.
pub fn power_sums<T: Float>(x: &[T], degree: usize) -> Vec<T> {
    let len = 2 * degree + 1;
    let mut sums = vec![T::zero(); len];
    for &xj in x {
        let mut power = T::one();
        for sum in sums.iter_mut() {
            *sum = *sum + power;
            power = power * xj;
        }
    }
    sums
}

/// Compute the moment vector `m[i] = Σ_j x_j^i · y_j` for `i = 0 .. degree`.
pub fn moments<T: Float>(x: &[T], y: &[T], degree: usize) -> Vec<T> {
    debug_assert_eq!(x.len(), y.len());
    let mut m = vec![T::zero(); degree + 1];
    for (&xj, &yj) in x.iter().zip(y) {
        let mut power = T::one();
        for mi in m.iter_mut() {
            *mi = *mi + power * yj;
            power = power * xj;
        }
    }
    m
}

// ============================================================================
// System Assembly
// ============================================================================

/// Assemble the augmented normal-equations system for a fit of `degree`.
///
/// The returned matrix has `degree + 1` rows; its coefficient block is the
/// Gram matrix `G[i][k] = Σ x^(i+k)` and its last column is the moment
/// vector.
pub fn assemble_system<T: Float>(x: &[T], y: &[T], degree: usize) -> AugmentedMatrix<T> {
    let sums = power_sums(x, degree);
    let m = moments(x, y, degree);

    let rows = degree + 1;
    let mut matrix = AugmentedMatrix::zeroed(rows);
    let rhs = matrix.rhs_col();

    for i in 0..rows {
        for k in 0..rows {
            matrix[(i, k)] = sums[i + k];
        }
        matrix[(i, rhs)] = m[i];
    }

    matrix
}
