//! Polynomial evaluation in the monomial basis.
//!
//! ## Purpose
//!
//! This module evaluates a polynomial given its coefficient vector
//! (lowest degree first) at scalar or slice inputs. It is the consumer
//! side of the fitting pipeline: the fitter produces coefficients, this
//! module turns them back into values.
//!
//! ## Design notes
//!
//! * **Running power**: `Σ aᵢ·xⁱ` is accumulated with a running power of
//!   `x` multiplied once per term, never a `powi` call per term.
//! * **Independence**: Slice evaluation applies the scalar evaluator
//!   element-wise; results never interact, and input order is preserved.
//! * **Generics**: Evaluation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * `evaluate(&[], x) == 0` for any `x` (empty sum, not an error).
//! * `evaluate_many(c, xs).len() == xs.len()`.
//!
//! ## Non-goals
//!
//! * No Horner-form rewriting of the coefficient vector and no derivative
//!   or integral evaluation.
//! * This module does not validate coefficients; the fitter guarantees
//!   finite output or fails before producing any.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Scalar Evaluation
// ============================================================================

/// Evaluate a polynomial at a single point.
///
/// `coefficients[i]` is the coefficient of `x^i`. An empty slice evaluates
/// to zero, the sum over zero terms.
#[inline]
pub fn evaluate<T: Float>(coefficients: &[T], x: T) -> T {
    let mut sum = T::zero();
    let mut power = T::one();
    for &c in coefficients {
        sum = sum + c * power;
        power = power * x;
    }
    sum
}

// ============================================================================
// Vectorized Evaluation
// ============================================================================

/// Evaluate a polynomial at each point of a slice.
///
/// Equivalent to calling [`evaluate`] on every element independently;
/// output order matches input order.
pub fn evaluate_many<T: Float>(coefficients: &[T], xs: &[T]) -> Vec<T> {
    xs.iter().map(|&x| evaluate(coefficients, x)).collect()
}
