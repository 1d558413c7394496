//! Scalar standard Normal deviate generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A standard Normal deviate generator over a uniform source.
///
/// Implements the polar Box-Muller method with rejection: two uniforms
/// on `(-1, 1)` are accepted when their squared radius falls inside the
/// unit disc, producing a pair of independent deviates. One is returned
/// and its partner is cached for the next call, so uniform draws are
/// consumed two at a time.
///
/// The generator owns both the uniform state and the cache slot.
/// Reseeding means constructing a new value, which starts with an empty
/// cache; a fixed seed therefore reproduces the exact draw sequence.
/// The generator is not meant to be shared between consumers that each
/// need a reproducible stream.
#[derive(Clone, Debug)]
pub struct GaussianRng<R: Rng> {
    uniform: R,
    cached: Option<f64>,
}

impl GaussianRng<StdRng> {
    /// Creates a deterministic generator from an integer seed.
    ///
    /// # Example
    ///
    /// ```
    /// use oneka_gaussian::GaussianRng;
    ///
    /// let mut a = GaussianRng::seeded(7);
    /// let mut b = GaussianRng::seeded(7);
    /// assert_eq!(a.sample(), b.sample());
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> GaussianRng<R> {
    /// Wraps an arbitrary uniform source.
    pub fn from_rng(uniform: R) -> Self {
        Self {
            uniform,
            cached: None,
        }
    }

    /// Draws one standard Normal deviate.
    ///
    /// Consumes the cached partner from the previous accepted pair if
    /// one is present; otherwise runs the rejection loop. The loop
    /// terminates with probability 1 (expected rejection ratio is
    /// `1 - pi/4`).
    pub fn sample(&mut self) -> f64 {
        if let Some(partner) = self.cached.take() {
            return partner;
        }

        loop {
            let u1 = 2.0 * self.uniform.random::<f64>() - 1.0;
            let u2 = 2.0 * self.uniform.random::<f64>() - 1.0;

            let r = u1 * u1 + u2 * u2;
            if r < 1.0 && r > 0.0 {
                let p = (-2.0 * r.ln() / r).sqrt();
                self.cached = Some(p * u1);
                return p * u2;
            }
        }
    }
}
