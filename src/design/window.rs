use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::design::kaiser::KaiserWindow;
use crate::design::{CoefficientSet, half_length};
use crate::error::{FilterError, Result};

/// A symmetric tapering window evaluated on the one-sided index
///
/// `k` runs from the center (0) to the edge (`order / 2`), where `order` is
/// the filter length minus one. Implementors only provide `value`; generation
/// and in-place application are shared.
pub trait Window {
    /// Window value at lag `k` for a filter of the given order
    fn value(&self, k: usize, order: usize) -> f64;

    /// Produce the `(length + 1) / 2` one-sided window values
    ///
    /// # Errors
    /// `InvalidLength` for an even length, `AllocationFailure` if storage
    /// cannot be reserved
    fn generate(&self, length: usize) -> Result<CoefficientSet> {
        let mut window = CoefficientSet::zeroed(length)?;
        let order = length - 1;
        for (k, value) in window.as_mut_slice().iter_mut().enumerate() {
            *value = tapered(self, k, order);
        }
        Ok(window)
    }

    /// Shape `coefficients` in place (`c[k] *= w[k]`)
    ///
    /// The set is both input and output; its own filter length determines
    /// the window length.
    fn apply(&self, coefficients: &mut CoefficientSet) {
        let order = coefficients.filter_length() - 1;
        for (k, value) in coefficients.as_mut_slice().iter_mut().enumerate() {
            *value *= tapered(self, k, order);
        }
    }

    /// Produce the window already multiplied by `input`
    fn generate_shaped(&self, input: &CoefficientSet) -> Result<CoefficientSet> {
        let mut shaped = self.generate(input.filter_length())?;
        shaped.multiply_in_place(input);
        Ok(shaped)
    }
}

fn tapered<W: Window + ?Sized>(window: &W, k: usize, order: usize) -> f64 {
    // A single-tap filter has nothing to taper.
    if order == 0 { 1.0 } else { window.value(k, order) }
}

/// Fixed window shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowShape {
    Rectangular,
    Bartlett,
    Hanning,
    Hamming,
    Blackman,
}

impl Window for WindowShape {
    fn value(&self, k: usize, order: usize) -> f64 {
        let k = k as f64;
        let m = order as f64;
        match self {
            WindowShape::Rectangular => 1.0,
            WindowShape::Bartlett => 1.0 - 2.0 * k / m,
            WindowShape::Hanning => 0.5 + 0.5 * (2.0 * PI * k / m).cos(),
            WindowShape::Hamming => 0.54 + 0.46 * (2.0 * PI * k / m).cos(),
            WindowShape::Blackman => {
                0.42 + 0.5 * (2.0 * PI * k / m).cos() + 0.08 * (4.0 * PI * k / m).cos()
            }
        }
    }
}

impl fmt::Display for WindowShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowShape::Rectangular => "rectangular",
            WindowShape::Bartlett => "bartlett",
            WindowShape::Hanning => "hanning",
            WindowShape::Hamming => "hamming",
            WindowShape::Blackman => "blackman",
        };
        f.write_str(name)
    }
}

impl FromStr for WindowShape {
    type Err = FilterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" | "rect" | "boxcar" => Ok(WindowShape::Rectangular),
            "bartlett" | "triangular" => Ok(WindowShape::Bartlett),
            "hanning" | "hann" => Ok(WindowShape::Hanning),
            "hamming" => Ok(WindowShape::Hamming),
            "blackman" => Ok(WindowShape::Blackman),
            other => Err(FilterError::InvalidType(format!(
                "unknown window shape '{}'",
                other
            ))),
        }
    }
}

/// Any supported window: one of the fixed shapes or a Kaiser window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowSpec {
    Shape(WindowShape),
    Kaiser(KaiserWindow),
}

impl Window for WindowSpec {
    fn value(&self, k: usize, order: usize) -> f64 {
        match self {
            WindowSpec::Shape(shape) => shape.value(k, order),
            WindowSpec::Kaiser(kaiser) => kaiser.value(k, order),
        }
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowSpec::Shape(shape) => shape.fmt(f),
            WindowSpec::Kaiser(kaiser) => write!(f, "kaiser(beta={:.4})", kaiser.beta()),
        }
    }
}

impl From<WindowShape> for WindowSpec {
    fn from(shape: WindowShape) -> Self {
        WindowSpec::Shape(shape)
    }
}

impl From<KaiserWindow> for WindowSpec {
    fn from(kaiser: KaiserWindow) -> Self {
        WindowSpec::Kaiser(kaiser)
    }
}

/// Produce a fixed-shape window of odd `length`, optionally shaped by `input`
///
/// Without input this returns the raw window values. With input each value is
/// multiplied by the matching input coefficient, which is how ideal
/// coefficients get tapered.
///
/// # Errors
/// `InvalidLength` for an even length or when `input` does not describe a
/// filter of `length` taps
pub fn create_window(
    input: Option<&CoefficientSet>,
    length: usize,
    shape: WindowShape,
) -> Result<CoefficientSet> {
    half_length(length)?;
    match input {
        Some(input) if input.filter_length() != length => Err(FilterError::InvalidLength { length }),
        Some(input) => shape.generate_shaped(input),
        None => shape.generate(length),
    }
}
