//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions with no
//! algorithm-specific logic: polynomial evaluation in the monomial basis.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial evaluation (scalar and vectorized).
pub mod polynomial;
