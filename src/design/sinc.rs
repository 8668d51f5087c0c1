use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::design::CoefficientSet;
use crate::error::{FilterError, Result};

/// Single-transition filter response
///
/// Band-pass and band-stop are not designed by this crate. Their names are
/// still recognised when parsing so a request for them fails loudly with
/// `FilterError::InvalidType` instead of being mistaken for a typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterKind {
    LowPass,
    /// Mirrored sinc: the low-pass taps for `1 - r` with every side tap
    /// negated. The response steps from `1 - 2r` below `(1 - r)` of Nyquist
    /// to `2 - 2r` above it, so it is a true high-pass only at `r = 0.5`.
    HighPass,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::LowPass => write!(f, "lowpass"),
            FilterKind::HighPass => write!(f, "highpass"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "lowpass" | "lp" => Ok(FilterKind::LowPass),
            "highpass" | "hp" => Ok(FilterKind::HighPass),
            "bandpass" | "bandstop" => Err(FilterError::InvalidType(format!(
                "{} filters are not implemented; only lowpass and highpass are supported",
                s.trim()
            ))),
            _ => Err(FilterError::InvalidType(format!(
                "unknown filter kind '{}'",
                s.trim()
            ))),
        }
    }
}

impl TryFrom<String> for FilterKind {
    type Error = FilterError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterKind> for String {
    fn from(kind: FilterKind) -> Self {
        kind.to_string()
    }
}

/// Validated description of an ideal single-transition filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    kind: FilterKind,
    length: usize,
    transition_hz: f64,
    sample_rate_hz: f64,
}

impl FilterSpec {
    /// Create a filter specification
    ///
    /// # Arguments
    /// * `kind` - Low-pass or high-pass
    /// * `length` - Number of taps in the full filter (must be odd)
    /// * `transition_hz` - Cutoff frequency in Hz
    /// * `sample_rate_hz` - Sampling frequency in Hz
    ///
    /// # Errors
    /// `InvalidLength` for an even or zero length, `InvalidFrequency` when the
    /// cutoff is not strictly between 0 and Nyquist.
    pub fn new(
        kind: FilterKind,
        length: usize,
        transition_hz: f64,
        sample_rate_hz: f64,
    ) -> Result<Self> {
        if length == 0 || length.is_multiple_of(2) {
            return Err(FilterError::InvalidLength { length });
        }

        let nyquist = sample_rate_hz / 2.0;
        if !(sample_rate_hz > 0.0 && transition_hz > 0.0 && transition_hz < nyquist) {
            return Err(FilterError::InvalidFrequency {
                transition_hz,
                sample_rate_hz,
            });
        }

        Ok(Self {
            kind,
            length,
            transition_hz,
            sample_rate_hz,
        })
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn transition_hz(&self) -> f64 {
        self.transition_hz
    }

    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Same spec with a different tap count
    pub fn with_length(&self, length: usize) -> Result<Self> {
        Self::new(self.kind, length, self.transition_hz, self.sample_rate_hz)
    }

    /// Cutoff as a fraction of Nyquist (`2 * fc / fs`)
    pub fn normalized_cutoff(&self) -> f64 {
        2.0 * self.transition_hz / self.sample_rate_hz
    }
}

/// Truncated-sinc impulse response of an ideal low-pass or high-pass filter
///
/// Returns the `(length + 1) / 2` one-sided taps. With `r = 2 * fc / fs` the
/// center tap is `r` (low-pass) or `1 - r` (high-pass), and
/// `c[k] = sin(pi * k * c[0]) / (pi * k)`, negated for high-pass.
///
/// # Errors
/// Returns `FilterError::AllocationFailure` if storage cannot be reserved
pub fn ideal_coefficients(spec: &FilterSpec) -> Result<CoefficientSet> {
    let mut coefficients = CoefficientSet::zeroed(spec.length())?;

    let ratio = match spec.kind() {
        FilterKind::LowPass => spec.normalized_cutoff(),
        FilterKind::HighPass => 1.0 - spec.normalized_cutoff(),
    };

    log::debug!(
        "Ideal {} sinc: {} taps, center tap {:.6}",
        spec.kind(),
        spec.length(),
        ratio
    );

    let taps = coefficients.as_mut_slice();
    taps[0] = ratio;
    for (k, tap) in taps.iter_mut().enumerate().skip(1) {
        let lag = PI * k as f64;
        let value = (lag * ratio).sin() / lag;
        *tap = match spec.kind() {
            FilterKind::LowPass => value,
            FilterKind::HighPass => -value,
        };
    }

    Ok(coefficients)
}
