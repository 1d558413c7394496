//! Matrix sums, measures and norms.

use crate::matrix::Matrix;

/// Returns the 1 x n row of column sums of `a`.
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn column_sum(a: &Matrix) -> Matrix {
    assert!(!a.is_empty(), "column_sum requires a non-empty matrix");

    let mut x = Matrix::zeros(1, a.cols());
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            x.set(0, j, x.get(0, j) + a.get(i, j));
        }
    }
    x
}

/// Returns the m x 1 column of row sums of `a`.
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn row_sum(a: &Matrix) -> Matrix {
    assert!(!a.is_empty(), "row_sum requires a non-empty matrix");

    let mut x = Matrix::zeros(a.rows(), 1);
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            x.set(i, 0, x.get(i, 0) + a.get(i, j));
        }
    }
    x
}

/// Sum of the diagonal elements of a square matrix.
///
/// # Panics
///
/// Panics if `a` is empty or not square.
pub fn trace(a: &Matrix) -> f64 {
    assert!(!a.is_empty(), "trace requires a non-empty matrix");
    assert_eq!(a.rows(), a.cols(), "trace requires a square matrix");

    (0..a.rows()).map(|i| a.get(i, i)).sum()
}

/// Maximum absolute value over all elements.
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn max_abs(a: &Matrix) -> f64 {
    assert!(!a.is_empty(), "max_abs requires a non-empty matrix");

    a.base().iter().fold(0.0, |acc, &x| f64::max(acc, x.abs()))
}

/// L1 norm: the maximum absolute column sum.
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn l1_norm(a: &Matrix) -> f64 {
    assert!(!a.is_empty(), "l1_norm requires a non-empty matrix");

    let mut max_col_sum = 0.0;
    for j in 0..a.cols() {
        let sum: f64 = (0..a.rows()).map(|i| a.get(i, j).abs()).sum();
        if sum > max_col_sum {
            max_col_sum = sum;
        }
    }
    max_col_sum
}

/// L-infinity norm: the maximum absolute row sum.
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn linf_norm(a: &Matrix) -> f64 {
    assert!(!a.is_empty(), "linf_norm requires a non-empty matrix");

    let mut max_row_sum = 0.0;
    for i in 0..a.rows() {
        let sum: f64 = (0..a.cols()).map(|j| a.get(i, j).abs()).sum();
        if sum > max_row_sum {
            max_row_sum = sum;
        }
    }
    max_row_sum
}

/// Frobenius norm: the square root of the sum of squared elements.
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn f_norm(a: &Matrix) -> f64 {
    assert!(!a.is_empty(), "f_norm requires a non-empty matrix");

    a.base().iter().map(|&x| x * x).sum::<f64>().sqrt()
}
