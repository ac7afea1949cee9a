//! Gauss-Jordan inversion with partial pivoting and the interpolation solve.

use crate::error::{RecoverError, Result};
use crate::matrix::{vandermonde, Matrix};
use crate::sample::Sample;

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// The input is never mutated; elimination runs on a working copy while an
/// identity matrix accumulates the inverse through the same swap, scale, and
/// eliminate steps. A pivot column whose best candidate magnitude falls at or
/// below a magnitude-scaled tolerance fails with `SingularMatrix` naming that
/// column. The tolerance scales with the largest entry of the input so that
/// round-off residue in an exactly singular column still counts as zero.
pub fn invert(a: &Matrix) -> Result<Matrix> {
    let n = a.size();
    let mut work = a.clone();
    let mut inverse = Matrix::identity(n);
    let tolerance = pivot_tolerance(&work);

    for col in 0..n {
        let mut pivot_row = col;
        for r in col + 1..n {
            if work.get(r, col).abs() > work.get(pivot_row, col).abs() {
                pivot_row = r;
            }
        }
        let pivot = work.get(pivot_row, col);
        if pivot.abs() <= tolerance {
            return Err(RecoverError::SingularMatrix { column: col });
        }
        work.swap_rows(col, pivot_row);
        inverse.swap_rows(col, pivot_row);

        work.scale_row(col, pivot);
        inverse.scale_row(col, pivot);

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = work.get(row, col);
            work.sub_scaled_row(row, col, factor);
            inverse.sub_scaled_row(row, col, factor);
        }
    }

    Ok(inverse)
}

fn pivot_tolerance(m: &Matrix) -> f64 {
    let scale = m.max_abs().max(1.0);
    (m.size() as f64 * f64::EPSILON * scale).max(f64::MIN_POSITIVE)
}

/// Standard matrix-vector product: result[i] = sum_j M[i][j] * v[j].
pub fn mat_vec_mul(m: &Matrix, v: &[f64]) -> Vec<f64> {
    let n = m.size();
    debug_assert_eq!(v.len(), n);
    let mut result = vec![0.0; n];
    for (i, out) in result.iter_mut().enumerate() {
        for (j, &value) in v.iter().enumerate() {
            *out += m.get(i, j) * value;
        }
    }
    result
}

/// Recover the coefficients of the unique degree-(k-1) polynomial through
/// the given k samples. Index i of the result holds the coefficient of x^i.
///
/// The y values cross from exact integers into `f64` here; see
/// [`crate::sample::MAX_EXACT_F64`] for the bound past which that narrowing
/// rounds.
pub fn solve(samples: &[Sample]) -> Result<Vec<f64>> {
    let xs: Vec<f64> = samples.iter().map(|s| f64::from(s.x)).collect();
    let ys: Vec<f64> = samples.iter().map(Sample::y_approx).collect();
    let inverse = invert(&vandermonde(&xs))?;
    Ok(mat_vec_mul(&inverse, &ys))
}
