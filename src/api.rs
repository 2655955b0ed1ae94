//! High-level API for polynomial least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points of the crate: the
//! direct call surface (`fit`, `eval`, `eval_many`, `poly_fit`,
//! `poly_fit_many`) and a fluent builder for callers that prefer a
//! configured, reusable model object.
//!
//! ## Design notes
//!
//! * **Thin**: Every entry point delegates to the engine or math layer;
//!   no numeric logic lives here.
//! * **Two surfaces, one behavior**: The builder path and the free
//!   functions produce bit-identical results for the same inputs.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `PolyFit::new().degree(n).build()` yields a
//!   reusable [`PolyFitModel`]; `model.fit(&x, &y)` performs the fit.
//! * **Composition**: `poly_fit` is exactly `eval(fit(..)?, ..)` and adds
//!   no failure modes of its own.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::fit_polynomial;
use crate::engine::output::PolyFitResult;
use crate::math::polynomial;
use crate::primitives::errors::PolyFitError;

// ============================================================================
// Direct Call Surface
// ============================================================================

/// Fit a polynomial of `order` to the samples by ordinary least squares.
///
/// Returns `order + 1` coefficients, lowest degree first, minimizing
/// `Σ (y_j − P(x_j))²` under the normal-equations formulation.
///
/// # Errors
///
/// * [`PolyFitError::MismatchedInputs`] if `x` and `y` differ in length.
/// * [`PolyFitError::EmptyInput`] if either slice is empty.
/// * [`PolyFitError::InvalidNumericValue`] if any input is NaN/infinite.
/// * [`PolyFitError::SingularSystem`] if the normal-equations matrix is
///   not invertible (e.g. `order + 1 > x.len()`, or all `x` identical).
///
/// # Examples
///
/// ```rust
/// let x: Vec<f64> = vec![0.0, 1.0, 2.0];
/// let y: Vec<f64> = vec![1.0, 3.0, 5.0]; // y = 1 + 2x
/// let coeffs = polyfit::fit(&x, &y, 1)?;
/// assert!((coeffs[0] - 1.0).abs() < 1e-9);
/// assert!((coeffs[1] - 2.0).abs() < 1e-9);
/// # Result::<(), polyfit::PolyFitError>::Ok(())
/// ```
pub fn fit<T: Float>(x: &[T], y: &[T], order: usize) -> Result<Vec<T>, PolyFitError> {
    fit_polynomial(x, y, order)
}

/// Evaluate a polynomial at a single point.
///
/// `coefficients[i]` scales `x^i`; an empty slice evaluates to zero.
#[inline]
pub fn eval<T: Float>(coefficients: &[T], x: T) -> T {
    polynomial::evaluate(coefficients, x)
}

/// Evaluate a polynomial at each point of a slice, order preserved.
pub fn eval_many<T: Float>(coefficients: &[T], xs: &[T]) -> Vec<T> {
    polynomial::evaluate_many(coefficients, xs)
}

/// Fit a polynomial and evaluate it at a single point, in one call.
///
/// Exactly `eval(&fit(x, y, order)?, x2)`; propagates the fitter's errors
/// and adds none of its own.
pub fn poly_fit<T: Float>(
    x: &[T],
    y: &[T],
    x2: T,
    order: usize,
) -> Result<T, PolyFitError> {
    Ok(eval(&fit(x, y, order)?, x2))
}

/// Fit a polynomial and evaluate it at each point of a slice, in one call.
///
/// Exactly `eval_many(&fit(x, y, order)?, x2s)`.
pub fn poly_fit_many<T: Float>(
    x: &[T],
    y: &[T],
    x2s: &[T],
    order: usize,
) -> Result<Vec<T>, PolyFitError> {
    Ok(eval_many(&fit(x, y, order)?, x2s))
}

// ============================================================================
// Fluent Builder
// ============================================================================

/// Fluent builder for configuring a polynomial fit.
///
/// All degrees are valid configurations, so [`build`](PolyFit::build) is
/// infallible; data-dependent failures surface from
/// [`PolyFitModel::fit`].
///
/// # Examples
///
/// ```rust
/// use polyfit::prelude::*;
///
/// let model = PolyFit::new().degree(2).build();
/// let result = model.fit(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 5.0, 10.0])?;
/// assert_eq!(result.coefficients.len(), 3);
/// # Result::<(), PolyFitError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct PolyFit<T> {
    /// Degree of the polynomial to fit.
    pub degree: usize,

    _marker: PhantomData<T>,
}

impl<T: Float> PolyFit<T> {
    /// Create a builder with the default degree of 1 (a straight line).
    pub fn new() -> Self {
        Self {
            degree: 1,
            _marker: PhantomData,
        }
    }

    /// Set the degree of the polynomial to fit.
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Finalize the configuration into a reusable model.
    pub fn build(self) -> PolyFitModel<T> {
        PolyFitModel {
            degree: self.degree,
            _marker: PhantomData,
        }
    }
}

impl<T: Float> Default for PolyFit<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured polynomial-fit model, reusable across datasets.
#[derive(Debug, Clone, Copy)]
pub struct PolyFitModel<T> {
    /// Degree of the polynomial this model fits.
    pub degree: usize,

    _marker: PhantomData<T>,
}

impl<T: Float> PolyFitModel<T> {
    /// Fit the configured polynomial to a sample set.
    ///
    /// See [`fit`] for the error conditions.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<PolyFitResult<T>, PolyFitError> {
        let coefficients = fit_polynomial(x, y, self.degree)?;
        Ok(PolyFitResult {
            coefficients,
            degree: self.degree,
            n_points: x.len(),
        })
    }
}
