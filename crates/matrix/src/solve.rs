//! Solvers for symmetric positive-definite systems.
//!
//! Cholesky factorization is the workhorse: the SPD inverse runs two
//! triangular solves against the factor, and the least-squares solver
//! factors the normal equations. All triangular sweeps delegate their
//! inner sums to the strided dot-product primitives.

use crate::error::SolveError;
use crate::matrix::Matrix;
use crate::product::multiply_mtm;
use crate::sum_product::{dot, dot_self, dot_strided, dot_y_strided};

/// Cholesky factorization of a symmetric positive-definite matrix.
///
/// Returns the lower-triangular `L` with strictly positive diagonal
/// such that `A = L Lᵀ`. Only the lower triangle of `A` is read; the
/// upper triangle of `L` is zero.
///
/// # Errors
///
/// Returns [`SolveError::NotSpd`] at the first diagonal pivot whose
/// square would be non-positive.
///
/// # Panics
///
/// Panics if `A` is empty or not square.
pub fn cholesky(a: &Matrix) -> Result<Matrix, SolveError> {
    assert!(!a.is_empty(), "cholesky requires a non-empty matrix");
    assert_eq!(a.rows(), a.cols(), "cholesky requires a square matrix");

    let n = a.rows();
    let mut l = Matrix::zeros(n, n);

    for j in 0..n {
        let d = a.get(j, j) - dot_self(j, l.base_at(j, 0));
        if !(d > 0.0) {
            return Err(SolveError::NotSpd);
        }
        let pivot = d.sqrt();
        l.set(j, j, pivot);

        for i in (j + 1)..n {
            let s = dot(j, l.base_at(i, 0), l.base_at(j, 0));
            l.set(i, j, (a.get(i, j) - s) / pivot);
        }
    }

    Ok(l)
}

/// Inverse of a symmetric positive-definite matrix via Cholesky.
///
/// Factors `A = L Lᵀ`, forward-substitutes `Y = L⁻¹` column by column,
/// and returns `A⁻¹ = Yᵀ Y`. The result may be assigned over the input.
///
/// # Errors
///
/// Returns [`SolveError::NotSpd`] when the factorization fails.
///
/// # Panics
///
/// Panics if `A` is empty or not square.
pub fn spd_inverse(a: &Matrix) -> Result<Matrix, SolveError> {
    let l = cholesky(a)?;
    let n = l.rows();

    let mut y = Matrix::zeros(n, n);
    for j in 0..n {
        y.set(j, j, 1.0 / l.get(j, j));
        for i in (j + 1)..n {
            let s = dot_y_strided(i - j, l.base_at(i, j), y.base_at(j, j), n);
            y.set(i, j, -s / l.get(i, i));
        }
    }

    Ok(multiply_mtm(&y, &y))
}

/// Least-squares solution of the overdetermined system `A X = B`.
///
/// For `A` of shape `m x n` with `m >= n` and full column rank, and `B`
/// of shape `m x k`, returns the `n x k` matrix minimizing
/// `||A X - B||_F`, computed through the normal equations
/// `AᵀA X = AᵀB` with a Cholesky factorization and forward/back
/// substitution.
///
/// # Errors
///
/// Returns [`SolveError::Singular`] when `AᵀA` is not positive definite
/// to working precision.
///
/// # Panics
///
/// Panics if either operand is empty, `A.rows() < A.cols()`, or
/// `B.rows() != A.rows()`.
pub fn least_squares(a: &Matrix, b: &Matrix) -> Result<Matrix, SolveError> {
    assert!(!a.is_empty() && !b.is_empty(), "least_squares requires non-empty operands");
    assert!(
        a.rows() >= a.cols(),
        "least_squares requires at least as many rows as columns"
    );
    assert_eq!(a.rows(), b.rows(), "least_squares row counts do not match");

    let ata = multiply_mtm(a, a);
    let atb = multiply_mtm(a, b);
    let l = cholesky(&ata).map_err(|_| SolveError::Singular)?;

    let n = a.cols();
    let k = b.cols();

    // Forward substitution: L Z = AᵀB.
    let mut z = Matrix::zeros(n, k);
    for j in 0..k {
        for i in 0..n {
            let s = dot_y_strided(i, l.base_at(i, 0), z.base_at(0, j), k);
            z.set(i, j, (atb.get(i, j) - s) / l.get(i, i));
        }
    }

    // Back substitution: Lᵀ X = Z, reading L column-wise in place.
    let mut x = Matrix::zeros(n, k);
    for j in 0..k {
        for i in (0..n).rev() {
            let tail = n - 1 - i;
            let s = if tail == 0 {
                0.0
            } else {
                dot_strided(tail, l.base_at(i + 1, i), n, x.base_at(i + 1, j), k)
            };
            x.set(i, j, (z.get(i, j) - s) / l.get(i, i));
        }
    }

    Ok(x)
}

/// Affine transformation `Y = X U + 1 mu`.
///
/// Applies the square map `U` to every row of `X` and adds the row
/// vector `mu`: `Y[i, :] = X[i, :] U + mu`. Value-returning, so the
/// caller may assign the result over `X`.
///
/// # Panics
///
/// Panics if `X` is empty, `U` is not `n x n` for `n = X.cols()`, or
/// `mu` is not a `1 x n` row.
pub fn affine(x: &Matrix, u: &Matrix, mu: &Matrix) -> Matrix {
    assert!(!x.is_empty(), "affine requires a non-empty input");
    assert!(
        u.rows() == x.cols() && u.cols() == x.cols(),
        "affine requires U to be square with side X.cols()"
    );
    assert!(
        mu.rows() == 1 && mu.cols() == x.cols(),
        "affine requires mu to be a 1 x X.cols() row"
    );

    let n = x.cols();
    let mut y = Matrix::zeros(x.rows(), n);
    for i in 0..x.rows() {
        for j in 0..n {
            let s = dot_y_strided(n, x.base_at(i, 0), u.base_at(0, j), n);
            y.set(i, j, s + mu.get(0, j));
        }
    }
    y
}
