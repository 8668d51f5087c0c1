use std::f64::consts::PI;

use crate::constants::{
    BESSEL_SERIES_TERMS, KAISER_HIGH_ATTENUATION_DB, KAISER_LOW_ATTENUATION_DB,
    MAX_ACCURATE_KAISER_BETA,
};
use crate::design::bessel::bessel_i0_with_terms;
use crate::design::window::Window;
use crate::design::{CoefficientSet, half_length};
use crate::error::{FilterError, Result};

/// Ripple and transition-width requirements for the adaptive Kaiser design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleSpec {
    ripple: f64,
    transition_width_hz: f64,
    reference_hz: f64,
}

impl RippleSpec {
    /// Create a ripple specification
    ///
    /// # Arguments
    /// * `ripple` - Linear amplitude ripple, e.g. 0.01 for 40 dB
    /// * `transition_width_hz` - Width of the transition band in Hz
    /// * `reference_hz` - Frequency the width is normalized by (the sample rate)
    ///
    /// # Errors
    /// `InvalidRipple` unless `0 < ripple < 1`; `InvalidFrequency` for
    /// non-positive widths or reference frequencies
    pub fn new(ripple: f64, transition_width_hz: f64, reference_hz: f64) -> Result<Self> {
        if !(ripple > 0.0 && ripple < 1.0) {
            return Err(FilterError::InvalidRipple(ripple));
        }
        if !(transition_width_hz > 0.0 && reference_hz > 0.0) {
            return Err(FilterError::InvalidFrequency {
                transition_hz: transition_width_hz,
                sample_rate_hz: reference_hz,
            });
        }
        Ok(Self {
            ripple,
            transition_width_hz,
            reference_hz,
        })
    }

    pub fn ripple(&self) -> f64 {
        self.ripple
    }

    pub fn transition_width_hz(&self) -> f64 {
        self.transition_width_hz
    }

    pub fn reference_hz(&self) -> f64 {
        self.reference_hz
    }

    /// Required attenuation in dB (`-20 log10(ripple)`)
    pub fn attenuation_db(&self) -> f64 {
        -20.0 * self.ripple.log10()
    }

    /// Transition width in radians per sample
    pub fn normalized_transition(&self) -> f64 {
        2.0 * PI * self.transition_width_hz / self.reference_hz
    }
}

/// Order and shape parameter derived from a `RippleSpec`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaiserParams {
    pub attenuation_db: f64,
    /// Estimated order, exactly as Kaiser's formula yields it (may be even)
    pub order: usize,
    pub beta: f64,
}

impl KaiserParams {
    /// Apply Kaiser's empirical design rule
    ///
    /// With `A` the attenuation in dB and `tw` the normalized transition width:
    /// * `A <= 21`: `order = ceil(5.79 / tw)`, `beta = 0`
    /// * `21 < A <= 50`: `order = ceil((A - 7.95) / (2.285 tw))`,
    ///   `beta = 0.5842 (A - 21)^0.4 + 0.07886 (A - 21)`
    /// * `A > 50`: same order, `beta = 0.1102 (A - 8.7)`
    pub fn estimate(spec: &RippleSpec) -> Self {
        let attenuation_db = spec.attenuation_db();
        let tw = spec.normalized_transition();

        let (order, beta) = if attenuation_db <= KAISER_LOW_ATTENUATION_DB {
            ((5.79 / tw).ceil(), 0.0)
        } else if attenuation_db <= KAISER_HIGH_ATTENUATION_DB {
            let excess = attenuation_db - KAISER_LOW_ATTENUATION_DB;
            (
                ((attenuation_db - 7.95) / (2.285 * tw)).ceil(),
                0.5842 * excess.powf(0.4) + 0.07886 * excess,
            )
        } else {
            (
                ((attenuation_db - 7.95) / (2.285 * tw)).ceil(),
                0.1102 * (attenuation_db - 8.7),
            )
        };

        let params = Self {
            attenuation_db,
            order: order as usize,
            beta,
        };

        log::debug!(
            "Kaiser estimate: A={:.2} dB, tw={:.5} rad, order={}, beta={:.4}",
            attenuation_db,
            tw,
            params.order,
            params.beta
        );
        if beta > MAX_ACCURATE_KAISER_BETA {
            log::warn!(
                "Kaiser beta {:.3} exceeds {} where the {}-term I0 series is reliable",
                beta,
                MAX_ACCURATE_KAISER_BETA,
                BESSEL_SERIES_TERMS
            );
        }

        params
    }

    /// Filter length to use: the estimated order rounded up to odd
    pub fn window_length(&self) -> usize {
        round_up_to_odd(self.order)
    }

    /// Kaiser window with the estimated beta
    pub fn window(&self) -> KaiserWindow {
        KaiserWindow::new(self.beta)
    }
}

/// Smallest odd number `>= n` (1 for 0)
pub fn round_up_to_odd(n: usize) -> usize {
    if n.is_multiple_of(2) { n + 1 } else { n }
}

/// Kaiser window `w[k] = I0(beta * sqrt(1 - (2k/M)^2)) / I0(beta)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaiserWindow {
    beta: f64,
    bessel_terms: usize,
}

impl KaiserWindow {
    pub fn new(beta: f64) -> Self {
        Self {
            beta,
            bessel_terms: BESSEL_SERIES_TERMS,
        }
    }

    /// Override the number of I0 series terms
    pub fn with_bessel_terms(mut self, terms: usize) -> Self {
        self.bessel_terms = terms.max(1);
        self
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn bessel_terms(&self) -> usize {
        self.bessel_terms
    }
}

impl Window for KaiserWindow {
    fn value(&self, k: usize, order: usize) -> f64 {
        let ratio = 2.0 * k as f64 / order as f64;
        let arg = self.beta * (1.0 - ratio * ratio).max(0.0).sqrt();
        bessel_i0_with_terms(arg, self.bessel_terms) / bessel_i0_with_terms(self.beta, self.bessel_terms)
    }
}

/// Produce a Kaiser window of odd `length`, optionally shaped by `input`
///
/// # Errors
/// `InvalidLength` for an even length or mismatched `input`,
/// `AllocationFailure` if storage cannot be reserved
pub fn create_kaiser_window(
    input: Option<&CoefficientSet>,
    length: usize,
    beta: f64,
) -> Result<CoefficientSet> {
    half_length(length)?;
    let window = KaiserWindow::new(beta);
    match input {
        Some(input) if input.filter_length() != length => Err(FilterError::InvalidLength { length }),
        Some(input) => window.generate_shaped(input),
        None => window.generate(length),
    }
}
