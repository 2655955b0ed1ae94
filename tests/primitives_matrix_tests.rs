#![cfg(feature = "dev")]
//! Tests for the augmented-matrix workspace.
//!
//! These tests verify the flat row-major storage, `(row, col)` indexing,
//! and the elementary row operations used by the elimination solver.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Shape and zero-initialization
//! 2. **Indexing** - Read/write through `(row, col)` pairs
//! 3. **Row Operations** - Swap and eliminate
//! 4. **Scale Queries** - Largest coefficient magnitude

use approx::assert_relative_eq;

use polyfit::internals::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test shape invariants of a freshly allocated workspace.
#[test]
fn test_zeroed_shape() {
    let m = AugmentedMatrix::<f64>::zeroed(3);

    assert_eq!(m.rows(), 3);
    assert_eq!(m.cols(), 4);
    assert_eq!(m.rhs_col(), 3);
}

/// Test that a new workspace is fully zeroed.
#[test]
fn test_zeroed_contents() {
    let m = AugmentedMatrix::<f32>::zeroed(2);
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(m[(i, j)], 0.0);
        }
    }
}

// ============================================================================
// Indexing Tests
// ============================================================================

/// Test read-back through (row, col) indexing.
#[test]
fn test_index_round_trip() {
    let mut m = AugmentedMatrix::<f64>::zeroed(2);
    m[(0, 0)] = 1.0;
    m[(0, 2)] = -2.5;
    m[(1, 1)] = 4.0;

    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 2)], -2.5);
    assert_eq!(m[(1, 1)], 4.0);
    assert_eq!(m[(1, 0)], 0.0);
}

// ============================================================================
// Row Operation Tests
// ============================================================================

/// Test swapping two rows moves every column, including the RHS.
#[test]
fn test_swap_rows() {
    let mut m = AugmentedMatrix::<f64>::zeroed(2);
    for j in 0..3 {
        m[(0, j)] = j as f64;
        m[(1, j)] = 10.0 + j as f64;
    }

    m.swap_rows(0, 1);

    for j in 0..3 {
        assert_eq!(m[(0, j)], 10.0 + j as f64);
        assert_eq!(m[(1, j)], j as f64);
    }
}

/// Test that swapping a row with itself is a no-op.
#[test]
fn test_swap_rows_self() {
    let mut m = AugmentedMatrix::<f64>::zeroed(2);
    m[(0, 0)] = 7.0;

    m.swap_rows(0, 0);

    assert_eq!(m[(0, 0)], 7.0);
}

/// Test the elementary elimination row operation.
#[test]
fn test_eliminate_row() {
    let mut m = AugmentedMatrix::<f64>::zeroed(2);
    // row0 = [2, 4, 6], row1 = [1, 3, 5]
    for (j, v) in [2.0, 4.0, 6.0].into_iter().enumerate() {
        m[(0, j)] = v;
    }
    for (j, v) in [1.0, 3.0, 5.0].into_iter().enumerate() {
        m[(1, j)] = v;
    }

    // row1 -= 0.5 * row0 → [0, 1, 2]
    m.eliminate_row(1, 0, 0.5);

    assert_relative_eq!(m[(1, 0)], 0.0);
    assert_relative_eq!(m[(1, 1)], 1.0);
    assert_relative_eq!(m[(1, 2)], 2.0);
    // Source row untouched.
    assert_relative_eq!(m[(0, 0)], 2.0);
}

// ============================================================================
// Scale Query Tests
// ============================================================================

/// Test that the scale query ignores the RHS column.
#[test]
fn test_max_abs_coefficient_excludes_rhs() {
    let mut m = AugmentedMatrix::<f64>::zeroed(2);
    m[(0, 0)] = -3.0;
    m[(1, 1)] = 2.0;
    m[(0, 2)] = 100.0; // RHS, must not count

    assert_eq!(m.max_abs_coefficient(), 3.0);
}
