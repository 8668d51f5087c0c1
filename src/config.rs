//! Configuration for filter design and streaming.
//!
//! A configuration can be built in code, loaded from TOML, or assembled by
//! the CLI. Every section has defaults matching the reference design: a
//! 21-tap low-pass at 100 Hz for 8 kHz audio, Hamming window, and a
//! 1024-sample circular buffer.
//!
//! ```toml
//! [filter]
//! kind = "lowpass"
//! length = 21
//! transition_hz = 100.0
//! sample_rate_hz = 8000.0
//!
//! [window]
//! shape = "kaiser"
//! ripple = 0.01
//! transition_width_hz = 100.0
//!
//! [stream]
//! buffer_capacity = 1024
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{BESSEL_SERIES_TERMS, DEFAULT_BUFFER_CAPACITY};
use crate::design::{
    FilterKind, FilterSpec, FirDesign, KaiserWindow, RippleSpec, WindowShape, design,
    design_kaiser_with_terms,
};
use crate::error::{FilterError, Result};
use crate::streaming::{BufferCapacity, StreamingFir};

/// Frequency given on the command line
///
/// # Parsing formats
/// - `100` - Hz (no suffix)
/// - `100hz` or `100Hz` - Hz (explicit)
/// - `1.5khz` or `1.5k` - kHz
///
/// # Example
/// ```
/// use sincfir::config::Frequency;
///
/// let freq: Frequency = "1.5khz".parse().unwrap();
/// assert!((freq.as_hz() - 1500.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency(f64);

impl Frequency {
    pub fn from_hz(hz: f64) -> Self {
        Self(hz)
    }

    pub fn as_hz(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}hz", self.0)
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        let (num, scale) = if let Some(num) = lower.strip_suffix("khz") {
            (num, 1000.0)
        } else if let Some(num) = lower.strip_suffix('k') {
            (num, 1000.0)
        } else {
            (lower.strip_suffix("hz").unwrap_or(&lower), 1.0)
        };

        let value: f64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid frequency: {}", s))?;
        if !(value > 0.0 && value.is_finite()) {
            return Err("frequency must be positive".to_string());
        }
        Ok(Self::from_hz(value * scale))
    }
}

/// Complete design and streaming configuration
///
/// # Example
/// ```
/// use sincfir::config::DesignConfig;
///
/// let mut config = DesignConfig::default();
/// config.filter.length = 31;
/// let design = config.design().unwrap();
/// assert_eq!(design.filter_length(), 31);
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Ideal filter parameters
    pub filter: FilterConfig,
    /// Window selection
    pub window: WindowConfig,
    /// Streaming engine parameters
    pub stream: StreamConfig,
}

/// Ideal filter parameters
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub kind: FilterKind,
    /// Number of taps (must be odd). Ignored by the adaptive Kaiser path.
    pub length: usize,
    /// Cutoff frequency in Hz
    pub transition_hz: f64,
    /// Sampling frequency in Hz
    pub sample_rate_hz: f64,
}

/// Window selection
///
/// `shape = "kaiser"` with `ripple` set picks the adaptive path, where
/// Kaiser's rule decides both the filter length and beta. Kaiser without
/// `ripple` needs an explicit `beta`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// rectangular, bartlett, hanning, hamming, blackman or kaiser
    pub shape: String,
    /// Kaiser shape parameter
    pub beta: Option<f64>,
    /// Linear ripple for the adaptive Kaiser path (0 < ripple < 1)
    pub ripple: Option<f64>,
    /// Transition band width in Hz for the adaptive Kaiser path
    pub transition_width_hz: Option<f64>,
    /// Terms in the I0 series used by Kaiser windows
    pub bessel_terms: usize,
}

/// Streaming engine parameters
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Circular buffer capacity (power of two, at least the filter length)
    pub buffer_capacity: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::LowPass,
            length: 21,
            transition_hz: 100.0,
            sample_rate_hz: 8000.0,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            shape: "hamming".to_string(),
            beta: None,
            ripple: None,
            transition_width_hz: None,
            bessel_terms: BESSEL_SERIES_TERMS,
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl WindowConfig {
    fn is_kaiser(&self) -> bool {
        self.shape.trim().eq_ignore_ascii_case("kaiser")
    }
}

impl DesignConfig {
    /// Parse a TOML document; missing sections and keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Fixed-length filter spec from the `[filter]` section
    pub fn filter_spec(&self) -> Result<FilterSpec> {
        FilterSpec::new(
            self.filter.kind,
            self.filter.length,
            self.filter.transition_hz,
            self.filter.sample_rate_hz,
        )
    }

    /// Validated buffer capacity from the `[stream]` section
    pub fn buffer_capacity(&self) -> Result<BufferCapacity> {
        BufferCapacity::new(self.stream.buffer_capacity)
    }

    /// Run the design pipeline this configuration describes
    ///
    /// # Errors
    /// Any design error, or `FilterError::Config` when the Kaiser settings
    /// are incomplete
    pub fn design(&self) -> Result<FirDesign> {
        let window = &self.window;

        if !window.is_kaiser() {
            let shape: WindowShape = window.shape.parse()?;
            return design(&self.filter_spec()?, shape.into());
        }

        if window.bessel_terms == 0 {
            return Err(FilterError::Config(
                "bessel_terms must be at least 1".to_string(),
            ));
        }

        match (window.ripple, window.beta) {
            (Some(ripple), _) => {
                let width = window.transition_width_hz.ok_or_else(|| {
                    FilterError::Config(
                        "adaptive Kaiser design needs transition_width_hz".to_string(),
                    )
                })?;
                let ripple = RippleSpec::new(ripple, width, self.filter.sample_rate_hz)?;
                design_kaiser_with_terms(
                    self.filter.kind,
                    self.filter.transition_hz,
                    self.filter.sample_rate_hz,
                    &ripple,
                    window.bessel_terms,
                )
            }
            (None, Some(beta)) => {
                let kaiser = KaiserWindow::new(beta).with_bessel_terms(window.bessel_terms);
                design(&self.filter_spec()?, kaiser.into())
            }
            (None, None) => Err(FilterError::Config(
                "kaiser window needs either ripple or beta".to_string(),
            )),
        }
    }

    /// Design the filter and wrap it in a streaming engine
    pub fn streaming_filter(&self) -> Result<StreamingFir> {
        let design = self.design()?;
        StreamingFir::with_capacity(design.into_coefficients(), self.buffer_capacity()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::WindowSpec;

    #[test]
    fn test_frequency_parsing() {
        let freq: Frequency = "100".parse().unwrap();
        assert_eq!(freq.as_hz(), 100.0);

        let freq: Frequency = "250Hz".parse().unwrap();
        assert_eq!(freq.as_hz(), 250.0);

        let freq: Frequency = "1.5kHz".parse().unwrap();
        assert!((freq.as_hz() - 1500.0).abs() < 1e-9);

        let freq: Frequency = "8k".parse().unwrap();
        assert_eq!(freq.as_hz(), 8000.0);
    }

    #[test]
    fn test_frequency_invalid() {
        assert!("abc".parse::<Frequency>().is_err());
        assert!("-100hz".parse::<Frequency>().is_err());
        assert!("0".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_default_design() {
        let config = DesignConfig::default();
        let design = config.design().unwrap();
        assert_eq!(design.filter_length(), 21);
        assert_eq!(design.window, WindowSpec::Shape(WindowShape::Hamming));
        assert!((design.coefficients.center() - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_toml_partial_sections() {
        let config = DesignConfig::from_toml_str(
            r#"
            [filter]
            kind = "highpass"
            length = 31

            [window]
            shape = "blackman"
            "#,
        )
        .unwrap();

        assert_eq!(config.filter.kind, FilterKind::HighPass);
        assert_eq!(config.filter.length, 31);
        assert_eq!(config.filter.sample_rate_hz, 8000.0);
        assert_eq!(config.stream.buffer_capacity, 1024);

        let design = config.design().unwrap();
        assert_eq!(design.window, WindowSpec::Shape(WindowShape::Blackman));
    }

    #[test]
    fn test_toml_rejects_band_filters() {
        let result = DesignConfig::from_toml_str("[filter]\nkind = \"bandpass\"\n");
        assert!(matches!(result, Err(FilterError::Config(_))));
    }

    #[test]
    fn test_adaptive_kaiser() {
        let config = DesignConfig::from_toml_str(
            r#"
            [window]
            shape = "kaiser"
            ripple = 0.01
            transition_width_hz = 100.0
            "#,
        )
        .unwrap();

        let design = config.design().unwrap();
        let params = design.kaiser.expect("adaptive path should record estimate");
        assert_eq!(design.filter_length(), 179);
        assert!(params.beta > 0.0);
    }

    #[test]
    fn test_explicit_kaiser_beta() {
        let mut config = DesignConfig::default();
        config.window.shape = "Kaiser".to_string();
        config.window.beta = Some(4.0);

        let design = config.design().unwrap();
        assert_eq!(design.filter_length(), 21);
        assert!(design.kaiser.is_none());
        assert!(matches!(design.window, WindowSpec::Kaiser(k) if k.beta() == 4.0));
    }

    #[test]
    fn test_incomplete_kaiser_rejected() {
        let mut config = DesignConfig::default();
        config.window.shape = "kaiser".to_string();
        assert!(matches!(config.design(), Err(FilterError::Config(_))));

        config.window.ripple = Some(0.01);
        assert!(matches!(config.design(), Err(FilterError::Config(_))));
    }

    #[test]
    fn test_unknown_window_rejected() {
        let mut config = DesignConfig::default();
        config.window.shape = "gaussian".to_string();
        assert!(matches!(config.design(), Err(FilterError::InvalidType(_))));
    }

    #[test]
    fn test_streaming_filter_capacity_checks() {
        let mut config = DesignConfig::default();
        config.stream.buffer_capacity = 1000;
        assert!(matches!(
            config.streaming_filter(),
            Err(FilterError::BufferMisconfiguration { .. })
        ));

        config.stream.buffer_capacity = 16;
        assert!(matches!(
            config.streaming_filter(),
            Err(FilterError::BufferMisconfiguration {
                filter_length: 21,
                ..
            })
        ));

        config.stream.buffer_capacity = 32;
        assert!(config.streaming_filter().is_ok());
    }
}
