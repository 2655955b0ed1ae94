//! Layer 3: Algorithms
//!
//! This layer implements the core numerical logic of the crate: assembly of
//! the normal-equations system from sample data, and its solution by
//! Gaussian elimination with partial pivoting. It is orchestrated by the
//! engine layer.

// Power sums, moments, and Gram-matrix assembly.
pub mod normal_equations;

// Gaussian elimination with partial pivoting and back substitution.
pub mod elimination;
