//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the fitting process: it validates inputs, hands
//! them to the algorithm layer for assembly and solving, and packages the
//! result for the API layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for fitting operations.
pub mod output;
