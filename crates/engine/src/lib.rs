//! # oneka-engine
//!
//! Bayesian inference on the coefficients of the six-term quadratic
//! Oneka discharge-potential model
//!
//! ```text
//!   Phi(x, y) = A dx² + B dy² + C dx dy + D dx + E dy + F,
//!   dx = x - Xo, dy = y - Yo
//! ```
//!
//! given wells with known discharges and piezometers with Normally
//! distributed head observations. The engine returns the posterior
//! mean vector and covariance matrix of `(A, B, C, D, E, F)` together
//! with a requested number of equiprobable Monte-Carlo realizations.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌─────────────────┐     ┌──────────────────┐
//!  │  assemble     │────▶│  posterior      │────▶│  realizations    │
//!  │  (A, b)       │     │  (AᵀA)⁻¹, lsq   │     │  N(mu, Sigma)    │
//!  └──────────────┘     └─────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use oneka_engine::{Aquifer, OnekaInput, Piezometer, Well, infer};
//! use oneka_gaussian::GaussianRng;
//!
//! // Eight observation points on the corners and edge midpoints of a
//! // square around one pumping well. (Points on a circle would make
//! // the quadratic basis rank-deficient.)
//! let ring = [
//!     (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (-100.0, 100.0),
//!     (-100.0, 0.0), (-100.0, -100.0), (0.0, -100.0), (100.0, -100.0),
//! ];
//! let input = OnekaInput {
//!     aquifer: Aquifer { conductivity: 1.0, thickness: 50.0, base: 0.0 },
//!     wells: vec![Well { x: 0.0, y: 0.0, discharge: 30.0 }],
//!     piezometers: ring
//!         .iter()
//!         .enumerate()
//!         .map(|(i, &(x, y))| Piezometer {
//!             x,
//!             y,
//!             head_mean: 45.0 + i as f64,
//!             head_std: 1.0,
//!         })
//!         .collect(),
//!     origin: (0.0, 0.0),
//!     n_sims: 10,
//! };
//!
//! let mut source = GaussianRng::seeded(42);
//! let posterior = infer(&input, &mut source).unwrap();
//! assert_eq!(posterior.realizations().rows(), 10);
//! ```

mod assemble;
mod engine;
mod error;
mod input;
mod posterior;

pub use engine::infer;
pub use error::EngineError;
pub use input::{Aquifer, N_COEFFICIENTS, OnekaInput, Piezometer, Well};
pub use posterior::Posterior;
