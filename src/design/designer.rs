use crate::constants::BESSEL_SERIES_TERMS;
use crate::design::kaiser::{KaiserParams, RippleSpec};
use crate::design::window::{Window, WindowSpec};
use crate::design::{CoefficientSet, FilterKind, FilterSpec, ideal_coefficients};
use crate::error::Result;

/// A finished windowed-sinc design
///
/// Owns the final one-sided coefficients together with the inputs that
/// produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct FirDesign {
    pub spec: FilterSpec,
    pub window: WindowSpec,
    /// Present when the length and beta came from Kaiser's estimator
    pub kaiser: Option<KaiserParams>,
    pub coefficients: CoefficientSet,
}

impl FirDesign {
    pub fn filter_length(&self) -> usize {
        self.coefficients.filter_length()
    }

    pub fn group_delay_samples(&self) -> usize {
        self.coefficients.group_delay_samples()
    }

    pub fn into_coefficients(self) -> CoefficientSet {
        self.coefficients
    }
}

/// Truncated sinc shaped by `window`
///
/// # Errors
/// `AllocationFailure` if coefficient storage cannot be reserved
pub fn design(spec: &FilterSpec, window: WindowSpec) -> Result<FirDesign> {
    let mut coefficients = ideal_coefficients(spec)?;
    window.apply(&mut coefficients);

    log::debug!(
        "Designed {} filter: {} taps, {} window, DC gain {:.6}",
        spec.kind(),
        spec.length(),
        window,
        coefficients.dc_gain()
    );

    Ok(FirDesign {
        spec: *spec,
        window,
        kaiser: None,
        coefficients,
    })
}

/// Adaptive Kaiser design meeting a ripple / transition-width requirement
///
/// Estimates order and beta from `ripple`, rounds the order up to an odd
/// length, then designs the truncated sinc at that length with a Kaiser
/// window.
///
/// # Errors
/// `InvalidFrequency` for a cutoff outside (0, Nyquist), `AllocationFailure`
/// if the estimated length cannot be stored
pub fn design_kaiser(
    kind: FilterKind,
    transition_hz: f64,
    sample_rate_hz: f64,
    ripple: &RippleSpec,
) -> Result<FirDesign> {
    design_kaiser_with_terms(
        kind,
        transition_hz,
        sample_rate_hz,
        ripple,
        BESSEL_SERIES_TERMS,
    )
}

/// `design_kaiser` with an explicit I0 series length for the window
pub fn design_kaiser_with_terms(
    kind: FilterKind,
    transition_hz: f64,
    sample_rate_hz: f64,
    ripple: &RippleSpec,
    bessel_terms: usize,
) -> Result<FirDesign> {
    let params = KaiserParams::estimate(ripple);
    let length = params.window_length();
    if length != params.order {
        log::debug!(
            "Kaiser order {} rounded up to odd length {}",
            params.order,
            length
        );
    }

    let spec = FilterSpec::new(kind, length, transition_hz, sample_rate_hz)?;
    let window = params.window().with_bessel_terms(bessel_terms);
    let mut design = design(&spec, WindowSpec::Kaiser(window))?;
    design.kaiser = Some(params);
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::window::WindowShape;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_design_rectangular_equals_ideal() {
        let spec = FilterSpec::new(FilterKind::LowPass, 21, 100.0, 8000.0).unwrap();
        let design = design(&spec, WindowShape::Rectangular.into()).unwrap();
        assert_eq!(design.coefficients, ideal_coefficients(&spec).unwrap());
        assert!(design.kaiser.is_none());
    }

    #[test]
    fn test_design_hamming_keeps_center() {
        let spec = FilterSpec::new(FilterKind::LowPass, 21, 100.0, 8000.0).unwrap();
        let design = design(&spec, WindowShape::Hamming.into()).unwrap();
        assert_abs_diff_eq!(design.coefficients.center(), 0.025, epsilon = 1e-12);
        assert_eq!(design.group_delay_samples(), 10);
    }

    #[test]
    fn test_design_kaiser_uses_estimated_length() {
        let ripple = RippleSpec::new(0.01, 100.0, 8000.0).unwrap();
        let design = design_kaiser(FilterKind::LowPass, 1000.0, 8000.0, &ripple).unwrap();

        let params = design.kaiser.unwrap();
        assert_eq!(design.filter_length(), params.window_length());
        assert_eq!(design.filter_length() % 2, 1);
        assert!(matches!(design.window, WindowSpec::Kaiser(_)));
    }

    #[test]
    fn test_design_kaiser_meets_attenuation() {
        let sample_rate = 8000.0;
        let cutoff = 1000.0;
        let width = 200.0;
        let ripple = RippleSpec::new(0.01, width, sample_rate).unwrap();
        let design = design_kaiser(FilterKind::LowPass, cutoff, sample_rate, &ripple).unwrap();

        let coefficients = &design.coefficients;
        assert_abs_diff_eq!(coefficients.dc_gain(), 1.0, epsilon = 0.02);

        // Well past the transition band, which ends at cutoff + width / 2
        let mut freq = cutoff + width;
        while freq < sample_rate / 2.0 {
            let db = coefficients.magnitude_db_at(freq, sample_rate);
            assert!(db < -35.0, "Stopband leak at {} Hz: {:.1} dB", freq, db);
            freq += 25.0;
        }
    }
}
