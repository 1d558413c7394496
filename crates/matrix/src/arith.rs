//! Unary, scalar/matrix and matrix/matrix element-wise arithmetic.
//!
//! Every routine returns a freshly allocated result, so the caller may
//! assign it over one of the inputs without an aliasing hazard.

use crate::matrix::Matrix;

/// Returns the transpose of `a`.
pub fn transpose(a: &Matrix) -> Matrix {
    let mut at = Matrix::zeros(a.cols(), a.rows());
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            at.set(j, i, a.get(i, j));
        }
    }
    at
}

/// Returns the element-wise negation of `a`.
pub fn negative(a: &Matrix) -> Matrix {
    let mut c = a.clone();
    for i in 0..c.rows() {
        for j in 0..c.cols() {
            c.set(i, j, -c.get(i, j));
        }
    }
    c
}

/// Returns the n x n identity matrix.
pub fn identity(n: usize) -> Matrix {
    let mut a = Matrix::zeros(n, n);
    for i in 0..n {
        a.set(i, i, 1.0);
    }
    a
}

/// Scalar/matrix addition: every output element is `a + input`.
pub fn add_scalar(a: f64, m: &Matrix) -> Matrix {
    let mut c = m.clone();
    for i in 0..c.rows() {
        for j in 0..c.cols() {
            c.set(i, j, a + m.get(i, j));
        }
    }
    c
}

/// Scalar/matrix multiplication: every output element is `a * input`.
pub fn scale(a: f64, m: &Matrix) -> Matrix {
    let mut c = m.clone();
    for i in 0..c.rows() {
        for j in 0..c.cols() {
            c.set(i, j, a * m.get(i, j));
        }
    }
    c
}

/// Matrix addition `A + B`.
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn add(a: &Matrix, b: &Matrix) -> Matrix {
    assert!(
        a.rows() == b.rows() && a.cols() == b.cols(),
        "add requires matching shapes: {} x {} vs {} x {}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );

    let mut c = a.clone();
    for i in 0..c.rows() {
        for j in 0..c.cols() {
            c.set(i, j, a.get(i, j) + b.get(i, j));
        }
    }
    c
}

/// Matrix subtraction `A - B`.
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn subtract(a: &Matrix, b: &Matrix) -> Matrix {
    assert!(
        a.rows() == b.rows() && a.cols() == b.cols(),
        "subtract requires matching shapes: {} x {} vs {} x {}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );

    let mut c = a.clone();
    for i in 0..c.rows() {
        for j in 0..c.cols() {
            c.set(i, j, a.get(i, j) - b.get(i, j));
        }
    }
    c
}
