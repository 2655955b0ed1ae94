//! Gaussian elimination with partial pivoting.
//!
//! ## Purpose
//!
//! This module solves the augmented normal-equations system in place:
//! partial pivoting to stabilize the elimination, forward elimination to
//! reach row-echelon form, then back substitution to extract the
//! coefficient vector.
//!
//! ## Design notes
//!
//! * **Absolute-value pivoting**: Each pivot column is scanned for the
//!   row with the largest-magnitude entry, which is swapped into pivot
//!   position. The comparison is strict, so the earliest maximal row wins.
//! * **Guarded divisions**: Every pivot is checked against a magnitude
//!   tolerance before it divides anything; a degenerate pivot surfaces as
//!   [`PolyFitError::SingularSystem`], never as NaN/Inf coefficients.
//! * **In-place**: The workspace is consumed and mutated; only the
//!   coefficient vector is allocated fresh.
//!
//! ## Key concepts
//!
//! * **Pivot tolerance**: `max(1, max |G|) · ε · rows`, scaling the
//!   near-zero test to the magnitude of the assembled system.
//! * **Back substitution**: Coefficients are recovered from the last row
//!   upward, subtracting already-solved terms.
//!
//! ## Invariants
//!
//! * On success the returned vector has exactly `rows` entries, all finite.
//! * The solver never divides by a value below the pivot tolerance.
//!
//! ## Non-goals
//!
//! * No iterative refinement and no QR/SVD fallback for ill-conditioned
//!   systems; conditioning is inherited from the assembled Gram matrix.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyFitError;
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Pivot Tolerance
// ============================================================================

/// Threshold below which a pivot magnitude is treated as zero.
///
/// Scaled by the largest coefficient magnitude in the system so that
/// uniformly huge or tiny Gram matrices are judged relative to their own
/// scale, with a floor of machine epsilon times the system size.
fn pivot_tolerance<T: Float>(matrix: &AugmentedMatrix<T>) -> T {
    let scale = matrix.max_abs_coefficient().max(T::one());
    let rows = T::from(matrix.rows()).unwrap_or_else(T::one);
    scale * T::epsilon() * rows
}

// ============================================================================
// Solver
// ============================================================================

/// Solve the augmented system in place, returning the coefficient vector.
///
/// The solution is ordered to match the system rows: for the normal
/// equations of a polynomial fit, index `i` holds the coefficient of `x^i`.
pub fn solve<T: Float>(mut matrix: AugmentedMatrix<T>) -> Result<Vec<T>, PolyFitError> {
    let rows = matrix.rows();
    let rhs = matrix.rhs_col();
    let tolerance = pivot_tolerance(&matrix);

    // Partial pivoting: bring the largest-magnitude entry of each pivot
    // column (at or below the diagonal) into pivot position.
    for i in 0..rows {
        let mut best = i;
        for k in (i + 1)..rows {
            if matrix[(k, i)].abs() > matrix[(best, i)].abs() {
                best = k;
            }
        }
        matrix.swap_rows(i, best);

        if matrix[(i, i)].abs() <= tolerance {
            return Err(PolyFitError::SingularSystem { row: i });
        }

        // Forward elimination: zero column i below the diagonal.
        for k in (i + 1)..rows {
            let factor = matrix[(k, i)] / matrix[(i, i)];
            matrix.eliminate_row(k, i, factor);
        }
    }

    // Back substitution, last variable first.
    let mut solution = vec![T::zero(); rows];
    for i in (0..rows).rev() {
        let mut value = matrix[(i, rhs)];
        for j in (i + 1)..rows {
            value = value - matrix[(i, j)] * solution[j];
        }
        // Every diagonal entry already passed the tolerance check above.
        solution[i] = value / matrix[(i, i)];
    }

    Ok(solution)
}
