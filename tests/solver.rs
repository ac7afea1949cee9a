use num_bigint::BigInt;
use rpoly::{invert, mat_vec_mul, solve, vandermonde, Matrix, RecoverError, Sample};

const TOL: f64 = 1e-6;

fn samples(points: &[(u32, i64)]) -> Vec<Sample> {
    points
        .iter()
        .map(|&(x, y)| Sample {
            x,
            y: BigInt::from(y),
        })
        .collect()
}

fn mat_mul(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.size();
    let mut out = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let mut acc = 0.0;
            for l in 0..n {
                acc += a.get(i, l) * b.get(l, j);
            }
            *out.get_mut(i, j) = acc;
        }
    }
    out
}

fn max_deviation(m: &Matrix, reference: &Matrix) -> f64 {
    let n = m.size();
    let mut worst: f64 = 0.0;
    for i in 0..n {
        for j in 0..n {
            worst = worst.max((m.get(i, j) - reference.get(i, j)).abs());
        }
    }
    worst
}

#[test]
fn vandermonde_rows_are_successive_powers() {
    let v = vandermonde(&[1.0, 2.0, 3.0]);
    assert_eq!(v.row(0), &[1.0, 1.0, 1.0]);
    assert_eq!(v.row(1), &[1.0, 2.0, 4.0]);
    assert_eq!(v.row(2), &[1.0, 3.0, 9.0]);
}

#[test]
fn inverse_times_original_is_identity() {
    let xs: Vec<f64> = (1..=7).map(f64::from).collect();
    let v = vandermonde(&xs);
    let inverse = invert(&v).unwrap();
    let product = mat_mul(&v, &inverse);
    assert!(max_deviation(&product, &Matrix::identity(7)) < TOL);
}

#[test]
fn invert_leaves_input_unchanged_and_repeats_exactly() {
    let v = vandermonde(&[1.0, 2.0, 3.0, 4.0]);
    let before = v.clone();
    let first = invert(&v).unwrap();
    assert_eq!(v, before);
    let second = invert(&v).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invert_requires_pivoting_when_leading_entry_is_zero() {
    let m = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]);
    let inverse = invert(&m).unwrap();
    // The matrix is its own inverse.
    assert!(max_deviation(&inverse, &m) < TOL);
}

#[test]
fn duplicate_rows_are_singular() {
    let v = vandermonde(&[2.0, 2.0, 3.0]);
    assert!(matches!(
        invert(&v),
        Err(RecoverError::SingularMatrix { .. })
    ));
}

#[test]
fn zero_matrix_fails_at_first_column() {
    assert!(matches!(
        invert(&Matrix::zeros(3)),
        Err(RecoverError::SingularMatrix { column: 0 })
    ));
}

#[test]
fn mat_vec_mul_matches_hand_computation() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(mat_vec_mul(&m, &[5.0, 6.0]), vec![17.0, 39.0]);
}

#[test]
fn solve_recovers_square_polynomial() {
    // P(x) = x^2 through (1,1), (2,4), (3,9).
    let coeffs = solve(&samples(&[(1, 1), (2, 4), (3, 9)])).unwrap();
    assert_eq!(coeffs.len(), 3);
    assert!((coeffs[0]).abs() < TOL);
    assert!((coeffs[1]).abs() < TOL);
    assert!((coeffs[2] - 1.0).abs() < TOL);
}

#[test]
fn solve_round_trips_degree_four_polynomial() {
    // P(x) = 3 - 2x + x^2 + 5x^3 - x^4 sampled at x = 1..=5.
    let p = |x: i64| 3 - 2 * x + x * x + 5 * x * x * x - x * x * x * x;
    let points: Vec<(u32, i64)> = (1..=5).map(|x| (x as u32, p(x))).collect();
    let coeffs = solve(&samples(&points)).unwrap();
    let expected = [3.0, -2.0, 1.0, 5.0, -1.0];
    for (got, want) in coeffs.iter().zip(expected) {
        assert!((got - want).abs() < TOL, "got {got}, want {want}");
    }
}

#[test]
fn solve_with_no_samples_is_vacuous() {
    assert!(solve(&[]).unwrap().is_empty());
}
