//! Output types and result structures for polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the `PolyFitResult` struct which encapsulates the
//! outcome of a fit: the coefficient vector plus the metadata needed to
//! interpret it, with convenience evaluation directly on the result.
//!
//! ## Design notes
//!
//! * **Value semantics**: The result owns its coefficients and is immutable
//!   after the fit returns; clone freely, share across threads.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `coefficients.len() == degree + 1`, lowest degree first.
//! * All coefficients are finite (a singular fit fails before producing a
//!   result).
//!
//! ## Non-goals
//!
//! * This module does not perform the fit; it only stores and evaluates
//!   its output.
//! * No goodness-of-fit statistics beyond raw residuals.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial::{evaluate, evaluate_many};

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a polynomial least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitResult<T> {
    /// Fitted coefficients, lowest degree first (`coefficients[i]` scales `x^i`).
    pub coefficients: Vec<T>,

    /// Degree of the fitted polynomial.
    pub degree: usize,

    /// Number of sample points the fit was computed from.
    pub n_points: usize,
}

impl<T: Float> PolyFitResult<T> {
    /// Evaluate the fitted polynomial at a single point.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        evaluate(&self.coefficients, x)
    }

    /// Evaluate the fitted polynomial at each point of a slice.
    pub fn eval_many(&self, xs: &[T]) -> Vec<T> {
        evaluate_many(&self.coefficients, xs)
    }

    /// Residuals `y_i - P(x_i)` of the fit against a sample set.
    ///
    /// Callers typically pass the data the fit was computed from, but any
    /// equal-length pair works. Extra elements of the longer slice are
    /// ignored.
    pub fn residuals(&self, x: &[T], y: &[T]) -> Vec<T> {
        x.iter()
            .zip(y)
            .map(|(&xi, &yi)| yi - self.eval(xi))
            .collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for PolyFitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_points)?;
        writeln!(f, "  Degree:      {}", self.degree)?;

        write!(f, "  Polynomial:  y = ")?;
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "({})·x", c)?,
                _ => write!(f, "({})·x^{}", c, i)?,
            }
        }
        writeln!(f)
    }
}
