use crate::constants::BESSEL_SERIES_TERMS;

/// Zeroth-order modified Bessel function of the first kind, I0(x)
///
/// Evaluates the truncated power series
/// `sum_{i=0}^{BESSEL_SERIES_TERMS-1} (x/2)^(2i) / (i!)^2`.
/// There is no convergence check; the fixed term count is accurate over the
/// beta range used by Kaiser windows. Extreme arguments overflow to infinity.
pub fn bessel_i0(x: f64) -> f64 {
    bessel_i0_with_terms(x, BESSEL_SERIES_TERMS)
}

/// I0(x) using the first `terms` terms of the power series
///
/// Zero terms yields 0.0; one term yields 1.0 for any `x`.
pub fn bessel_i0_with_terms(x: f64, terms: usize) -> f64 {
    if terms == 0 {
        return 0.0;
    }

    let half_sq = (x / 2.0) * (x / 2.0);
    let mut term = 1.0;
    let mut sum = 1.0;

    // term_i = term_{i-1} * (x/2)^2 / i^2
    for i in 1..terms {
        let i = i as f64;
        term *= half_sq / (i * i);
        sum += term;
    }

    sum
}
