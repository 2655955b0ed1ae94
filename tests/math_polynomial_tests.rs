//! Tests for polynomial evaluation.
//!
//! These tests verify scalar and vectorized evaluation of coefficient
//! vectors in the monomial basis, through the public API.
//!
//! ## Test Organization
//!
//! 1. **Scalar Evaluation** - Known polynomials at known points
//! 2. **Degenerate Inputs** - Empty and constant coefficient vectors
//! 3. **Vectorized Evaluation** - Element-wise consistency and ordering

use approx::assert_relative_eq;

use polyfit::{eval, eval_many};

// ============================================================================
// Scalar Evaluation Tests
// ============================================================================

/// Test evaluation of a known quadratic.
#[test]
fn test_eval_quadratic() {
    // P(x) = 1 - 2x + 3x²
    let coeffs = vec![1.0, -2.0, 3.0];

    assert_relative_eq!(eval(&coeffs, 0.0), 1.0);
    assert_relative_eq!(eval(&coeffs, 1.0), 2.0);
    assert_relative_eq!(eval(&coeffs, 2.0), 9.0);
    assert_relative_eq!(eval(&coeffs, -1.0), 6.0);
}

/// Test that the running-power accumulation matches explicit powers.
#[test]
fn test_eval_matches_explicit_powers() {
    let coeffs = vec![0.5, 1.25, -0.75, 2.0, -0.125];
    let x = 1.7f64;

    let explicit: f64 = coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * x.powi(i as i32))
        .sum();

    assert_relative_eq!(eval(&coeffs, x), explicit, max_relative = 1e-12);
}

/// Test evaluation at negative and fractional inputs.
#[test]
fn test_eval_sign_handling() {
    // P(x) = x³: odd powers must preserve sign.
    let coeffs = vec![0.0, 0.0, 0.0, 1.0];

    assert_relative_eq!(eval(&coeffs, -2.0), -8.0);
    assert_relative_eq!(eval(&coeffs, 0.5), 0.125);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test that an empty coefficient vector evaluates to zero.
///
/// The sum over zero terms is zero by definition; this is degenerate but
/// not an error.
#[test]
fn test_eval_empty() {
    assert_eq!(eval::<f64>(&[], 3.0), 0.0);
    assert_eq!(eval::<f32>(&[], -1.0e30), 0.0);
}

/// Test that a single coefficient is a constant polynomial.
#[test]
fn test_eval_constant() {
    let coeffs = vec![7.5];
    assert_eq!(eval(&coeffs, 0.0), 7.5);
    assert_eq!(eval(&coeffs, 1.0e6), 7.5);
}

// ============================================================================
// Vectorized Evaluation Tests
// ============================================================================

/// Test vectorized evaluation against the scalar form, element by element.
#[test]
fn test_eval_many_elementwise() {
    let coeffs = vec![2.0, -1.0, 0.5];
    let xs = vec![-3.0, -1.5, 0.0, 0.25, 4.0];

    let values = eval_many(&coeffs, &xs);

    assert_eq!(values.len(), xs.len());
    for (v, &x) in values.iter().zip(&xs) {
        assert_eq!(*v, eval(&coeffs, x));
    }
}

/// Test that vectorized evaluation preserves input order.
#[test]
fn test_eval_many_preserves_order() {
    // P(x) = x, so output must equal input exactly.
    let coeffs = vec![0.0, 1.0];
    let xs = vec![5.0, -2.0, 9.0, 0.0];

    assert_eq!(eval_many(&coeffs, &xs), xs);
}

/// Test vectorized evaluation of an empty input slice.
#[test]
fn test_eval_many_empty_inputs() {
    let coeffs = vec![1.0, 2.0];
    assert!(eval_many(&coeffs, &[]).is_empty());
}
