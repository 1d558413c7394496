//! The inference entry point.

use oneka_gaussian::{GaussianRng, multivariate_normal};
use oneka_matrix::{Matrix, least_squares, multiply_mtm, spd_inverse, transpose};
use rand::Rng;
use tracing::debug;

use crate::assemble::assemble_system;
use crate::error::EngineError;
use crate::input::OnekaInput;
use crate::posterior::Posterior;

/// Runs the Bayesian inference on the six Oneka coefficients.
///
/// Builds the weighted regression system from the piezometer
/// observations, computes the posterior covariance
/// `Sigma = (AᵀA)⁻¹` and posterior mean `mu = argmin ||A mu - b||`,
/// and draws `n_sims` equiprobable coefficient vectors from
/// `N(mu, Sigma)` using the supplied deviate source.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`EngineError::NonPositiveConductivity`] | bad aquifer conductivity |
/// | [`EngineError::NonPositiveThickness`] | bad aquifer thickness |
/// | [`EngineError::InsufficientPiezometers`] | fewer than six piezometers |
/// | [`EngineError::NonPositiveHeadStd`] | bad head standard deviation |
/// | [`EngineError::SingularSystem`] | rank-deficient piezometer geometry |
///
/// # Example
///
/// ```ignore
/// let mut source = GaussianRng::seeded(42);
/// let posterior = infer(&input, &mut source)?;
/// println!("F = {}", posterior.mu()[5]);
/// ```
#[tracing::instrument(skip(input, source), fields(
    n_wells = input.wells.len(),
    n_piezometers = input.piezometers.len(),
    n_sims = input.n_sims
))]
pub fn infer<R: Rng>(
    input: &OnekaInput,
    source: &mut GaussianRng<R>,
) -> Result<Posterior, EngineError> {
    input.validate()?;

    let (a, b) = assemble_system(input);

    let gram = multiply_mtm(&a, &a);
    let cov = spd_inverse(&gram).map_err(|_| EngineError::SingularSystem)?;
    let mu_col = least_squares(&a, &b).map_err(|_| EngineError::SingularSystem)?;

    let mut mu = [0.0; 6];
    for (i, slot) in mu.iter_mut().enumerate() {
        *slot = mu_col.get(i, 0);
    }
    debug!(?mu, "posterior mean computed");

    let realizations = if input.n_sims > 0 {
        // The generator wants the mean as a row, the solver returns a column.
        let mu_row = transpose(&mu_col);
        multivariate_normal(input.n_sims, &mu_row, &cov, source)
            .map_err(|_| EngineError::SingularSystem)?
    } else {
        Matrix::new()
    };

    Ok(Posterior::new(
        env!("CARGO_PKG_VERSION").to_string(),
        chrono::Local::now().format("%a %b %e %H:%M:%S %Y").to_string(),
        mu,
        cov,
        input.n_sims,
        realizations,
    ))
}
