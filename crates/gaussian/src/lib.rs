//! # oneka-gaussian
//!
//! The Gaussian layer of the Oneka coefficient engine: a high-accuracy
//! standard Normal CDF, a scalar standard Normal deviate generator
//! (polar Box-Muller with rejection), and a multivariate Normal
//! generator driven by the SPD solvers of [`oneka_matrix`].
//!
//! # Quick start
//!
//! ```rust
//! use oneka_gaussian::{GaussianRng, std_normal_cdf};
//!
//! assert_eq!(std_normal_cdf(0.0), 0.5);
//!
//! let mut source = GaussianRng::seeded(42);
//! let z = source.sample();
//! assert!(z.is_finite());
//! ```

pub mod cdf;
pub mod error;
pub mod mvn;
pub mod rng;

pub use cdf::std_normal_cdf;
pub use error::GaussianError;
pub use mvn::{multivariate_normal, standard_normal_matrix};
pub use rng::GaussianRng;
