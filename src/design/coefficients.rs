use crate::error::{FilterError, Result};

/// One-sided coefficients of a linear-phase (even-symmetric) FIR filter
///
/// Holds the center tap followed by the positive lags: `c[0]` is the center of
/// the impulse response and `c[k]` is mirrored at `-k`. A filter of odd
/// length `N` is therefore described by `(N + 1) / 2` values. Windows use the
/// same layout so they can be applied elementwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    values: Vec<f64>,
}

impl CoefficientSet {
    /// Wrap existing one-sided values
    ///
    /// # Errors
    /// Returns `FilterError::InvalidLength` if `values` is empty
    pub fn from_half(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(FilterError::InvalidLength { length: 0 });
        }
        Ok(Self { values })
    }

    /// Allocate a zeroed set for a filter of odd `filter_length`
    ///
    /// Storage is reserved fallibly so an impossible request surfaces as
    /// `FilterError::AllocationFailure` instead of aborting.
    pub(crate) fn zeroed(filter_length: usize) -> Result<Self> {
        let half = half_length(filter_length)?;
        let mut values = Vec::new();
        values
            .try_reserve_exact(half)
            .map_err(|_| FilterError::AllocationFailure { requested: half })?;
        values.resize(half, 0.0);
        Ok(Self { values })
    }

    /// Number of stored (one-sided) values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a set holds at least the center tap
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Length of the full symmetric filter these values describe
    pub fn filter_length(&self) -> usize {
        2 * self.values.len() - 1
    }

    /// Group delay in samples (half the filter order)
    pub fn group_delay_samples(&self) -> usize {
        self.values.len() - 1
    }

    /// The center tap
    pub fn center(&self) -> f64 {
        self.values[0]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Multiply elementwise by `other` in place
    ///
    /// `self` is both input and output. Only the overlapping prefix is
    /// touched; callers in this crate always pass sets of equal length.
    pub fn multiply_in_place(&mut self, other: &CoefficientSet) {
        for (value, factor) in self.values.iter_mut().zip(&other.values) {
            *value *= factor;
        }
    }

    /// Reconstruct the full symmetric kernel (`filter_length()` taps)
    ///
    /// The result is ordered from lag `-M` to `+M`, ready for a direct-form
    /// convolution elsewhere.
    pub fn to_symmetric(&self) -> Vec<f64> {
        let mut taps = Vec::with_capacity(self.filter_length());
        taps.extend(self.values.iter().skip(1).rev());
        taps.extend(self.values.iter());
        taps
    }
}

impl AsRef<[f64]> for CoefficientSet {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Number of one-sided values for an odd filter length
///
/// # Errors
/// Returns `FilterError::InvalidLength` if `filter_length` is zero or even
pub fn half_length(filter_length: usize) -> Result<usize> {
    if filter_length == 0 || filter_length.is_multiple_of(2) {
        return Err(FilterError::InvalidLength {
            length: filter_length,
        });
    }
    Ok(filter_length.div_ceil(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_length() {
        assert_eq!(half_length(1).unwrap(), 1);
        assert_eq!(half_length(21).unwrap(), 11);
        assert_eq!(
            half_length(20),
            Err(FilterError::InvalidLength { length: 20 })
        );
        assert!(half_length(0).is_err());
    }

    #[test]
    fn test_to_symmetric_mirrors_around_center() {
        let set = CoefficientSet::from_half(vec![3.0, 2.0, 1.0]).unwrap();
        assert_eq!(set.filter_length(), 5);
        assert_eq!(set.group_delay_samples(), 2);
        assert_eq!(set.to_symmetric(), vec![1.0, 2.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_from_half_rejects_empty() {
        assert!(CoefficientSet::from_half(Vec::new()).is_err());
    }

    #[test]
    fn test_multiply_in_place() {
        let mut set = CoefficientSet::from_half(vec![1.0, 2.0, 3.0]).unwrap();
        let window = CoefficientSet::from_half(vec![1.0, 0.5, 0.0]).unwrap();
        set.multiply_in_place(&window);
        assert_eq!(set.as_slice(), &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_zeroed_has_half_length() {
        let set = CoefficientSet::zeroed(9).unwrap();
        assert_eq!(set.len(), 5);
        assert!(set.as_slice().iter().all(|&v| v == 0.0));
    }
}
