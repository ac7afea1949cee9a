//! Slice-based convenience API for the full decode-then-solve pipeline.

use crate::error::{RecoverError, Result};
use crate::format::recovery_summary;
use crate::sample::decode_samples;
use crate::solver::solve;

/// Decode every (base, digits) pair, then interpolate through the first `k`
/// samples in their given order. Index i of the result holds the coefficient
/// of x^i.
pub fn recover(pairs: &[(u32, &str)], k: usize) -> Result<Vec<f64>> {
    if pairs.len() < k {
        return Err(RecoverError::NotEnoughSamples {
            needed: k,
            available: pairs.len(),
        });
    }
    let samples = decode_samples(pairs)?;
    solve(&samples[..k])
}

/// Like [`recover`], but rendered into printable summary lines.
pub fn recover_lines(pairs: &[(u32, &str)], k: usize) -> Result<Vec<String>> {
    Ok(recovery_summary(&recover(pairs, k)?))
}
