//! Samples pairing an ordinal x coordinate with an exactly decoded y value.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::decode::decode;
use crate::error::{RecoverError, Result};

/// Largest magnitude a decoded value can reach while still converting to
/// `f64` without rounding (2^53). Values beyond it enter the solver with
/// reduced precision.
pub const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// One interpolation point. `x` is the sample's 1-based position among the
/// input pairs; `y` is the exact decoded value of its digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub x: u32,
    pub y: BigInt,
}

impl Sample {
    /// The y value narrowed to the solver's floating-point domain. Lossy for
    /// magnitudes above [`MAX_EXACT_F64`].
    pub fn y_approx(&self) -> f64 {
        self.y.to_f64().unwrap_or(f64::INFINITY)
    }
}

/// Decode every (base, digits) pair into a `Sample`, assigning x = position
/// + 1. A decode failure is reported with the index of the offending pair.
pub fn decode_samples(pairs: &[(u32, &str)]) -> Result<Vec<Sample>> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, &(base, digits))| {
            let y = decode(digits, base).map_err(|source| RecoverError::Decode {
                index,
                source: Box::new(source),
            })?;
            Ok(Sample {
                x: index as u32 + 1,
                y,
            })
        })
        .collect()
}
