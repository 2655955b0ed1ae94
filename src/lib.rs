//! # polyfit — Polynomial Least-Squares Fitting for Rust
//!
//! Ordinary least-squares polynomial fitting via the normal equations,
//! solved by Gaussian elimination with partial pivoting, plus fast
//! polynomial evaluation and a fit-then-evaluate convenience call.
//!
//! ## What is polynomial regression?
//!
//! Polynomial regression fits a non-linear relationship to a set of points
//! by modeling the expected value of `y` as an nth-degree polynomial:
//!
//! ```text
//! y ≈ a0 + a1·x + a2·x² + ... + an·xⁿ
//! ```
//!
//! The coefficients minimizing the sum of squared residuals are the
//! solution of a small linear system (the normal equations), which this
//! crate assembles from power sums of the sample data and solves directly.
//! The result is a closed-form smooth approximation of noisy or irregularly
//! spaced data, useful for curve smoothing, trend extraction, and
//! extrapolation.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use polyfit::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y: Vec<f64> = vec![1.0, 1.8, 1.3, 2.5, 6.3];
//!
//! // Build the model
//! let model = PolyFit::new()
//!     .degree(2)      // Fit a quadratic
//!     .build();
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! // Evaluate the fitted polynomial at a new point
//! let extrapolated = result.eval(5.0);
//! assert!(extrapolated.is_finite());
//! # Result::<(), PolyFitError>::Ok(())
//! ```
//!
//! ### Direct function calls
//!
//! The fitting, evaluation, and composition steps are also exposed as free
//! functions for callers that do not want a builder:
//!
//! ```rust
//! use polyfit::{eval, eval_many, fit, poly_fit};
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![1.0, 1.8, 1.3, 2.5, 6.3];
//!
//! // Coefficients, lowest degree first: y ≈ a0 + a1·x + a2·x²
//! let coeffs = fit(&x, &y, 2)?;
//! assert_eq!(coeffs.len(), 3);
//!
//! // Scalar and vectorized evaluation
//! let at_five = eval(&coeffs, 5.0);
//! let at_samples = eval_many(&coeffs, &x);
//! assert_eq!(at_samples.len(), x.len());
//!
//! // Fit and evaluate in one call
//! assert_eq!(poly_fit(&x, &y, 5.0, 2)?, at_five);
//! # Result::<(), polyfit::PolyFitError>::Ok(())
//! ```
//!
//! ## Errors
//!
//! All failure modes surface as [`PolyFitError`]:
//!
//! - `MismatchedInputs` — `x` and `y` have different lengths.
//! - `EmptyInput` — one or both input slices are empty.
//! - `InvalidNumericValue` — inputs contain NaN or infinity.
//! - `SingularSystem` — the normal-equations matrix is not invertible
//!   (degree too high for the sample count, or degenerate `x` values).
//!
//! Singular systems are detected via a near-zero pivot check rather than
//! silently dividing by zero; callers never receive NaN coefficients.
//!
//! ## Precision
//!
//! Every routine is generic over [`num_traits::Float`], supporting both
//! `f32` and `f64`. The normal-equations formulation inherits the
//! conditioning of the monomial Gram matrix, which deteriorates as the
//! degree grows relative to the spread of `x`; for modest degrees this is
//! a non-issue, but callers fitting high-degree polynomials in `f32`
//! should expect reduced accuracy.
//!
//! ## no_std support
//!
//! Disable the `std` feature for `no_std` + `alloc` environments:
//!
//! ```toml
//! [dependencies]
//! polyfit = { version = "0.1", default-features = false }
//! ```
//!
//! All fitting and evaluation functionality is available without `std`;
//! only the `std::error::Error` impl and the demo program are `std`-gated.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and the matrix workspace.
mod primitives;

// Layer 2: Math - pure polynomial evaluation.
mod math;

// Layer 3: Algorithms - normal-equation assembly and the elimination solver.
mod algorithms;

// Layer 4: Engine - validation and fit orchestration.
mod engine;

// High-level fluent API for polynomial fitting.
mod api;

pub use crate::api::{eval, eval_many, fit, poly_fit, poly_fit_many};
pub use crate::engine::output::PolyFitResult;
pub use crate::primitives::errors::PolyFitError;

// Standard polyfit prelude.
pub mod prelude {
    pub use crate::api::{
        eval, eval_many, fit, poly_fit, poly_fit_many, PolyFit, PolyFitModel,
    };
    pub use crate::engine::output::PolyFitResult;
    pub use crate::primitives::errors::PolyFitError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
