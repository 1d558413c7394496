//! Error type for the Gaussian layer.

/// Failure modes of the multivariate Normal generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GaussianError {
    /// Returned when the supplied covariance matrix has no Cholesky
    /// factorization, i.e. it is not symmetric positive definite.
    /// Degenerate (positive semi-definite) covariances are rejected too.
    #[error("covariance matrix is not positive definite")]
    NotSpd,
}
