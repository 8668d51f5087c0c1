use std::f64::consts::PI;

use crate::design::CoefficientSet;

impl CoefficientSet {
    /// Zero-phase amplitude response at `freq_hz`
    ///
    /// For an even-symmetric filter the response is real once the linear
    /// phase term is removed: `A(f) = c0 + 2 * sum_k c[k] cos(2 pi f k / fs)`.
    pub fn amplitude_at(&self, freq_hz: f64, sample_rate_hz: f64) -> f64 {
        let omega = 2.0 * PI * freq_hz / sample_rate_hz;
        let taps = self.as_slice();
        taps.iter()
            .enumerate()
            .skip(1)
            .fold(taps[0], |acc, (k, &c)| acc + 2.0 * c * (omega * k as f64).cos())
    }

    /// Magnitude response `|H(f)|`
    pub fn magnitude_at(&self, freq_hz: f64, sample_rate_hz: f64) -> f64 {
        self.amplitude_at(freq_hz, sample_rate_hz).abs()
    }

    /// Magnitude response in dB, floored to avoid `-inf` at exact nulls
    pub fn magnitude_db_at(&self, freq_hz: f64, sample_rate_hz: f64) -> f64 {
        20.0 * self
            .magnitude_at(freq_hz, sample_rate_hz)
            .max(f64::MIN_POSITIVE)
            .log10()
    }

    /// Sum of the full symmetric kernel (gain at 0 Hz)
    pub fn dc_gain(&self) -> f64 {
        let taps = self.as_slice();
        taps[0] + 2.0 * taps[1..].iter().sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dc_gain_matches_amplitude_at_zero() {
        let set = CoefficientSet::from_half(vec![0.5, 0.25, -0.1]).unwrap();
        assert_abs_diff_eq!(set.dc_gain(), 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(set.amplitude_at(0.0, 8000.0), set.dc_gain(), epsilon = 1e-12);
    }

    #[test]
    fn test_dc_gain_equals_symmetric_sum() {
        let set = CoefficientSet::from_half(vec![0.3, 0.2, 0.1, 0.05]).unwrap();
        let full: f64 = set.to_symmetric().iter().sum();
        assert_abs_diff_eq!(set.dc_gain(), full, epsilon = 1e-12);
    }

    #[test]
    fn test_half_band_nyquist_response() {
        // [0.25, 0.5, 0.25] has a null at Nyquist
        let set = CoefficientSet::from_half(vec![0.5, 0.25]).unwrap();
        assert_abs_diff_eq!(set.magnitude_at(4000.0, 8000.0), 0.0, epsilon = 1e-12);
        assert!(set.magnitude_db_at(4000.0, 8000.0) < -200.0);
    }
}
