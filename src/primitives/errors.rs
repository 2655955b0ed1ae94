//! Error types for polynomial fitting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during polynomial
//! least-squares fitting, covering input validation and numerical failure
//! of the linear solver.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Numerical failure**: A singular normal-equations system detected
//!    during elimination.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies
//!   (no automatic degree reduction, no regularization).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for polynomial fitting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyFitError {
    /// Input arrays are empty; fitting requires at least 1 point.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The normal-equations matrix is not invertible.
    ///
    /// Raised when elimination encounters a near-zero pivot, or when the
    /// requested degree leaves the system structurally underdetermined
    /// (`degree + 1` exceeds the number of sample points). Typical causes
    /// are a degree too high for the data, or duplicate/degenerate `x`
    /// values that make the Gram matrix rank-deficient.
    SingularSystem {
        /// Pivot row at which the singularity was detected.
        row: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyFitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::SingularSystem { row } => {
                write!(
                    f,
                    "Singular system: near-zero pivot at row {row} (degree too high for the data, or degenerate x values)"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyFitError {}
