//! Recovers the coefficients of a degree-(k-1) polynomial from k samples
//! whose y values arrive as digit strings in arbitrary bases (2-36): exact
//! big-integer decoding, then a Vandermonde system solved by Gauss-Jordan
//! elimination with partial pivoting.

pub mod decode;
pub mod error;
pub mod format;
pub mod matrix;
pub mod recover;
pub mod sample;
pub mod solver;

pub use decode::{decode, MAX_BASE, MIN_BASE};
pub use error::{RecoverError, Result};
pub use format::{coefficients_line, recovery_summary};
pub use matrix::{vandermonde, Matrix};
pub use recover::{recover, recover_lines};
pub use sample::{decode_samples, Sample, MAX_EXACT_F64};
pub use solver::{invert, mat_vec_mul, solve};
