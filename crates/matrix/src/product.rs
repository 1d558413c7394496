//! Matrix products in all four transposition flavors, plus quadratic
//! forms.
//!
//! A transposed operand is never materialized: each flavor walks its
//! outer indices and hands the inner sum to the strided dot-product
//! primitives, reading the operand column-wise in place where the
//! transpose calls for it.

use crate::matrix::Matrix;
use crate::sum_product::{dot, dot_strided, dot_x_strided, dot_y_strided};

/// Matrix product `C = A B`.
///
/// # Panics
///
/// Panics if either operand is empty or `A.cols() != B.rows()`.
pub fn multiply_mm(a: &Matrix, b: &Matrix) -> Matrix {
    assert!(!a.is_empty() && !b.is_empty(), "multiply_mm requires non-empty operands");
    assert_eq!(
        a.cols(),
        b.rows(),
        "multiply_mm inner dimensions do not match"
    );

    let mut ab = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            ab.set(i, j, dot_y_strided(a.cols(), a.base_at(i, 0), b.base_at(0, j), b.cols()));
        }
    }
    ab
}

/// Matrix product `C = Aᵀ B`.
///
/// # Panics
///
/// Panics if either operand is empty or `A.rows() != B.rows()`.
pub fn multiply_mtm(a: &Matrix, b: &Matrix) -> Matrix {
    assert!(!a.is_empty() && !b.is_empty(), "multiply_mtm requires non-empty operands");
    assert_eq!(
        a.rows(),
        b.rows(),
        "multiply_mtm inner dimensions do not match"
    );

    let mut atb = Matrix::zeros(a.cols(), b.cols());
    for i in 0..a.cols() {
        for j in 0..b.cols() {
            atb.set(
                i,
                j,
                dot_strided(a.rows(), a.base_at(0, i), a.cols(), b.base_at(0, j), b.cols()),
            );
        }
    }
    atb
}

/// Matrix product `C = A Bᵀ`.
///
/// # Panics
///
/// Panics if either operand is empty or `A.cols() != B.cols()`.
pub fn multiply_mmt(a: &Matrix, b: &Matrix) -> Matrix {
    assert!(!a.is_empty() && !b.is_empty(), "multiply_mmt requires non-empty operands");
    assert_eq!(
        a.cols(),
        b.cols(),
        "multiply_mmt inner dimensions do not match"
    );

    let mut abt = Matrix::zeros(a.rows(), b.rows());
    for i in 0..a.rows() {
        for j in 0..b.rows() {
            abt.set(i, j, dot(a.cols(), a.base_at(i, 0), b.base_at(j, 0)));
        }
    }
    abt
}

/// Matrix product `C = Aᵀ Bᵀ`.
///
/// # Panics
///
/// Panics if either operand is empty or `A.rows() != B.cols()`.
pub fn multiply_mtmt(a: &Matrix, b: &Matrix) -> Matrix {
    assert!(!a.is_empty() && !b.is_empty(), "multiply_mtmt requires non-empty operands");
    assert_eq!(
        a.rows(),
        b.cols(),
        "multiply_mtmt inner dimensions do not match"
    );

    let mut atbt = Matrix::zeros(a.cols(), b.rows());
    for i in 0..a.cols() {
        for j in 0..b.rows() {
            atbt.set(
                i,
                j,
                dot_x_strided(a.rows(), a.base_at(0, i), a.cols(), b.base_at(j, 0)),
            );
        }
    }
    atbt
}

/// Quadratic form `aᵀ B c` where `a` and `c` are column vectors.
///
/// # Panics
///
/// Panics on any shape mismatch.
pub fn quad_form_col(a: &Matrix, b: &Matrix, c: &Matrix) -> f64 {
    assert!(a.rows() > 0 && a.cols() == 1, "quad_form_col: a must be a column");
    assert_eq!(a.rows(), b.rows(), "quad_form_col: a and B do not conform");
    assert!(c.rows() > 0 && c.cols() == 1, "quad_form_col: c must be a column");
    assert_eq!(b.cols(), c.rows(), "quad_form_col: B and c do not conform");

    let bc = multiply_mm(b, c);
    multiply_mtm(a, &bc).get(0, 0)
}

/// Quadratic form `a B c` where `a` is a row vector and `c` a column.
///
/// # Panics
///
/// Panics on any shape mismatch.
pub fn quad_form_row(a: &Matrix, b: &Matrix, c: &Matrix) -> f64 {
    assert!(a.rows() == 1 && a.cols() > 0, "quad_form_row: a must be a row");
    assert_eq!(a.cols(), b.rows(), "quad_form_row: a and B do not conform");
    assert!(c.rows() > 0 && c.cols() == 1, "quad_form_row: c must be a column");
    assert_eq!(b.cols(), c.rows(), "quad_form_row: B and c do not conform");

    let bc = multiply_mm(b, c);
    multiply_mm(a, &bc).get(0, 0)
}
