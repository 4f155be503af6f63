//! Small numeric helpers shared by the series evaluator and time routines.

/// Evaluate a polynomial with coefficients `coefficients` at `x` using
/// Horner's method. The constant term is `coefficients[0]`.
///
/// Panics
/// ----------
/// * Panics on an empty coefficient list. An empty list is a programming
///   error on the caller's side, not a recoverable condition.
pub fn horner(x: f64, coefficients: &[f64]) -> f64 {
    let mut iter = coefficients.iter().rev();
    let mut y = *iter
        .next()
        .expect("horner: empty coefficient list");
    for c in iter {
        y = y * x + c;
    }
    y
}
