//! Matrix-valued and multivariate Normal generation.

use oneka_matrix::{Matrix, affine, cholesky, transpose};
use rand::Rng;

use crate::error::GaussianError;
use crate::rng::GaussianRng;

/// Fills an `rows x cols` matrix with independent standard Normal
/// deviates, drawn in row-major order.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn standard_normal_matrix<R: Rng>(
    rows: usize,
    cols: usize,
    source: &mut GaussianRng<R>,
) -> Matrix {
    assert!(
        rows >= 1 && cols >= 1,
        "standard_normal_matrix requires positive dimensions"
    );

    let mut z = Matrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            z.set(i, j, source.sample());
        }
    }
    z
}

/// Draws `n_draws` independent rows from the multivariate Normal
/// distribution with mean row `mu` (`1 x n`) and covariance `sigma`
/// (`n x n`, symmetric positive definite).
///
/// Factors `sigma = L Lᵀ`, fills a matrix of uncorrelated standard
/// Normal deviates `Z`, and returns `Z Lᵀ + 1 mu` through the affine
/// transformation primitive. Within each returned row the components
/// carry the requested covariance; distinct rows are independent.
///
/// # Errors
///
/// Returns [`GaussianError::NotSpd`] when `sigma` is not positive
/// definite.
///
/// # Panics
///
/// Panics if `mu` is not a non-empty row, `sigma` is not square with
/// the same side as `mu`, or `n_draws` is zero.
pub fn multivariate_normal<R: Rng>(
    n_draws: usize,
    mu: &Matrix,
    sigma: &Matrix,
    source: &mut GaussianRng<R>,
) -> Result<Matrix, GaussianError> {
    assert!(
        mu.rows() == 1 && mu.cols() >= 1,
        "multivariate_normal requires mu to be a non-empty row"
    );
    assert!(
        sigma.rows() == sigma.cols() && sigma.cols() == mu.cols(),
        "multivariate_normal requires sigma to be square with side mu.cols()"
    );
    assert!(n_draws >= 1, "multivariate_normal requires n_draws >= 1");

    let l = cholesky(sigma).map_err(|_| GaussianError::NotSpd)?;
    let u = transpose(&l);

    let z = standard_normal_matrix(n_draws, mu.cols(), source);
    Ok(affine(&z, &u, mu))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_matrix_shape() {
        let mut g = GaussianRng::seeded(42);
        let z = standard_normal_matrix(5, 3, &mut g);
        assert_eq!((z.rows(), z.cols()), (5, 3));
        assert!(z.base().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn standard_matrix_deterministic_with_seed() {
        let mut a = GaussianRng::seeded(11);
        let mut b = GaussianRng::seeded(11);
        let za = standard_normal_matrix(4, 4, &mut a);
        let zb = standard_normal_matrix(4, 4, &mut b);
        assert!(oneka_matrix::approx_equal_matrix(&za, &zb, 0.0));
    }

    #[test]
    fn mvn_shape_and_determinism() {
        let mu = Matrix::from_text("1,2,3");
        let sigma = Matrix::from_text("4,1,-1; 1,3,0; -1,0,2");

        let mut a = GaussianRng::seeded(7);
        let xa = multivariate_normal(10, &mu, &sigma, &mut a).unwrap();
        assert_eq!((xa.rows(), xa.cols()), (10, 3));

        let mut b = GaussianRng::seeded(7);
        let xb = multivariate_normal(10, &mu, &sigma, &mut b).unwrap();
        assert!(oneka_matrix::approx_equal_matrix(&xa, &xb, 0.0));
    }

    #[test]
    fn mvn_rejects_indefinite_covariance() {
        let mu = Matrix::from_text("0,0");
        let sigma = Matrix::from_text("1,2; 2,1");
        let mut g = GaussianRng::seeded(1);
        assert!(matches!(
            multivariate_normal(5, &mu, &sigma, &mut g),
            Err(GaussianError::NotSpd)
        ));
    }

    #[test]
    fn mvn_degenerate_covariance_rejected() {
        // Rank-one covariance is only semi-definite.
        let mu = Matrix::from_text("0,0");
        let sigma = Matrix::from_text("1,1; 1,1");
        let mut g = GaussianRng::seeded(1);
        assert!(matches!(
            multivariate_normal(5, &mu, &sigma, &mut g),
            Err(GaussianError::NotSpd)
        ));
    }

    #[test]
    fn mvn_identity_covariance_centers_on_mu() {
        let mu = Matrix::from_text("10,-10");
        let sigma = Matrix::from_text("1,0; 0,1");
        let mut g = GaussianRng::seeded(99);
        let x = multivariate_normal(20_000, &mu, &sigma, &mut g).unwrap();

        for j in 0..2 {
            let mean: f64 = (0..x.rows()).map(|i| x.get(i, j)).sum::<f64>() / x.rows() as f64;
            assert!(
                (mean - mu.get(0, j)).abs() < 0.05,
                "component {j} mean = {mean}"
            );
        }
    }
}
