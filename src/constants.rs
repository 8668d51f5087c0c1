//! Numeric constants for filter design and streaming
//!
//! Anything that used to be a magic number in the design formulas lives here
//! so it can be referenced by name from configuration and tests.

/// Default circular buffer capacity for streaming filters. Must be a power of two.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Number of terms in the I0 power series.
///
/// Accuracy/performance knob: 20 terms are accurate to double precision for
/// the beta range Kaiser windows use (roughly 0..=12). Larger arguments need
/// more terms.
pub const BESSEL_SERIES_TERMS: usize = 20;

/// Largest Kaiser beta for which the default series length is trusted.
pub const MAX_ACCURATE_KAISER_BETA: f64 = 12.0;

/// Attenuation (dB) at or below which Kaiser's rule degenerates to a rectangular window.
pub const KAISER_LOW_ATTENUATION_DB: f64 = 21.0;

/// Attenuation (dB) above which Kaiser's rule switches to its linear beta fit.
pub const KAISER_HIGH_ATTENUATION_DB: f64 = 50.0;
