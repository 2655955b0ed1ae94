//! Fit orchestration for polynomial least squares.
//!
//! ## Purpose
//!
//! This module coordinates a complete fit: input validation, a structural
//! solvability check, normal-equations assembly, and the elimination
//! solve. It is the single entry point the API layer calls; lower layers
//! never validate and the API layer never touches the matrix.
//!
//! ## Design notes
//!
//! * **Separation of concerns**: validation lives in `validator`, numeric
//!   work in the algorithm layer; this module only sequences them.
//! * **Structural precheck**: `degree + 1 > N` is rejected before assembly.
//!   The system is then rank-deficient by construction, and catching it
//!   early gives a deterministic error instead of one at the mercy of
//!   floating-point cancellation in the pivot check.
//! * **Generics**: Fitting is generic over `Float` types.
//!
//! ## Invariants
//!
//! * On success the coefficient vector has exactly `degree + 1` entries,
//!   lowest degree first, all finite.
//! * No partial results: any failure leaves nothing allocated for the
//!   caller.
//!
//! ## Non-goals
//!
//! * No degree selection, regularization, or refitting on failure.
//! * This module does not format results (handled by `output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::elimination::solve;
use crate::algorithms::normal_equations::assemble_system;
use crate::engine::validator::Validator;
use crate::primitives::errors::PolyFitError;

// ============================================================================
// Fit Entry Point
// ============================================================================

/// Fit a polynomial of `degree` to the samples by ordinary least squares.
///
/// Returns the coefficient vector, lowest degree first. See
/// [`PolyFitError`] for the failure modes.
pub fn fit_polynomial<T: Float>(
    x: &[T],
    y: &[T],
    degree: usize,
) -> Result<Vec<T>, PolyFitError> {
    Validator::validate_inputs(x, y)?;

    // Fewer samples than unknowns: the Gram matrix cannot reach full rank.
    if degree + 1 > x.len() {
        return Err(PolyFitError::SingularSystem { row: x.len() });
    }

    let system = assemble_system(x, y, degree);
    solve(system)
}
