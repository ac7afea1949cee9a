//! Rendering coefficient vectors for CLI/example output.

/// Render coefficients in increasing power order, each with two fixed
/// decimals, single-space separated.
pub fn coefficients_line(coeffs: &[f64]) -> String {
    coeffs
        .iter()
        .map(|c| format!("{c:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a recovery result into human-readable lines for CLI/examples: a
/// header naming the powers, then the fixed-precision coefficient line.
pub fn recovery_summary(coeffs: &[f64]) -> Vec<String> {
    let header = match coeffs.len() {
        0 => "Coefficients: (none)".to_string(),
        1 => "Coefficients (a0):".to_string(),
        n => format!("Coefficients (a0 + a1*x + ... + a{d}*x^{d}):", d = n - 1),
    };
    vec![header, coefficients_line(coeffs)]
}
