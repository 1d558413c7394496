//! # oneka-matrix
//!
//! Dense row-major matrix kernel for the Oneka coefficient engine:
//! construction, norms, arithmetic, the four transposition flavors of
//! matrix product, quadratic forms, and a small family of solvers for
//! symmetric positive-definite systems (Cholesky, SPD inverse,
//! least squares via the normal equations, affine transformation).
//!
//! The design is deliberately dense and quadratic/cubic in the matrix
//! dimensions; it targets systems of at most a few hundred rows. All
//! products are built on a strided dot-product primitive so that a
//! transposed operand is a stride choice, never a data copy.
//!
//! # Quick start
//!
//! ```rust
//! use oneka_matrix::{Matrix, cholesky};
//!
//! let a = Matrix::from_text("4,6,4,4; 6,10,9,7; 4,9,17,11; 4,7,11,18");
//! let l = cholesky(&a).unwrap();
//! assert_eq!(l.get(0, 0), 2.0);
//! ```

pub mod arith;
pub mod compare;
pub mod error;
pub mod matrix;
pub mod norms;
pub mod parse;
pub mod product;
pub mod solve;
pub mod sum_product;

pub use arith::{add, add_scalar, identity, negative, scale, subtract, transpose};
pub use compare::{approx_equal, approx_equal_matrix, relative_equal};
pub use error::SolveError;
pub use matrix::Matrix;
pub use norms::{column_sum, f_norm, l1_norm, linf_norm, max_abs, row_sum, trace};
pub use product::{
    multiply_mm, multiply_mmt, multiply_mtm, multiply_mtmt, quad_form_col, quad_form_row,
};
pub use solve::{affine, cholesky, least_squares, spd_inverse};
