//! Input validation for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides validation functions for fit input data. It checks
//! requirements such as input lengths and finite values before any
//! numerical work begins.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Length checks**: Inputs must be non-empty and equal-length.
//! * **Finite checks**: Ensures all inputs are finite (no NaN/Inf); a NaN
//!   fed into the power sums would otherwise surface much later as an
//!   inscrutable singular-system failure.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not judge whether the requested degree is solvable;
//!   rank deficiency is the solver's concern.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyFitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for polynomial-fit input data.
///
/// Provides static methods returning `Result<(), PolyFitError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate input arrays for polynomial fitting.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), PolyFitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(PolyFitError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(PolyFitError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(PolyFitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(PolyFitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }
}
