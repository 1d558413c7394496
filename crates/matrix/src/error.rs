//! Error type for the SPD solver layer.

/// Failure modes of the solvers in [`crate::solve`].
///
/// Shape mismatches are contract violations and panic instead; these
/// variants cover genuinely data-dependent numerical failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// Returned when Cholesky factorization hits a non-positive pivot,
    /// i.e. the input is not symmetric positive definite.
    #[error("matrix is not symmetric positive definite")]
    NotSpd,

    /// Returned when the least-squares normal equations are singular to
    /// working precision (rank-deficient design matrix).
    #[error("normal equations are singular to working precision")]
    Singular,
}
