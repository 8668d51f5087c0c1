use crate::design::CoefficientSet;
use crate::error::{FilterError, Result};
use crate::streaming::{BufferCapacity, CircularBuffer, Filter};

/// Real-time linear-phase FIR filter
///
/// Convolves one sample at a time against a one-sided `CoefficientSet`,
/// folding each symmetric pair of taps into a single multiply:
///
/// `y = c[0] * x[n-M] + sum_{k=1}^{M} c[k] * (x[n-M-k] + x[n-M+k])`
///
/// with `M` the group delay. Output therefore lags input by `M` samples.
/// All validation happens in `new`; `process` has no error path.
pub struct StreamingFir {
    coefficients: CoefficientSet,
    buffer: CircularBuffer,
}

impl StreamingFir {
    /// Create a streaming filter with the default buffer capacity
    ///
    /// # Errors
    /// `BufferMisconfiguration` if the filter is longer than the buffer
    pub fn new(coefficients: CoefficientSet) -> Result<Self> {
        Self::with_capacity(coefficients, BufferCapacity::default())
    }

    /// Create a streaming filter with an explicit buffer capacity
    ///
    /// # Errors
    /// `BufferMisconfiguration` if `capacity` cannot hold `filter_length()`
    /// samples, `AllocationFailure` if the buffer cannot be allocated
    pub fn with_capacity(coefficients: CoefficientSet, capacity: BufferCapacity) -> Result<Self> {
        let filter_length = coefficients.filter_length();
        if capacity.get() < filter_length {
            return Err(FilterError::BufferMisconfiguration {
                capacity: capacity.get(),
                filter_length,
                reason: "capacity must be at least the filter length",
            });
        }

        log::debug!(
            "Streaming FIR: {} taps, buffer capacity {}, latency {} samples",
            filter_length,
            capacity.get(),
            coefficients.group_delay_samples()
        );

        Ok(Self {
            buffer: CircularBuffer::new(capacity)?,
            coefficients,
        })
    }

    /// Process a single sample through the filter
    pub fn process(&mut self, sample: f64) -> f64 {
        self.buffer.write(sample);

        let taps = self.coefficients.as_slice();
        let m = taps.len() - 1;

        let mut output = taps[0] * self.buffer.behind(m);
        for (k, &tap) in taps.iter().enumerate().skip(1) {
            output += tap * (self.buffer.behind(m + k) + self.buffer.behind(m - k));
        }

        self.buffer.advance();
        output
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear the sample history
    pub fn reset(&mut self) {
        self.buffer.reset();
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.coefficients.filter_length()
    }

    /// Get the group delay in samples (half the filter order)
    pub fn group_delay_samples(&self) -> usize {
        self.coefficients.group_delay_samples()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coefficients
    }
}

impl Filter for StreamingFir {
    fn process(&mut self, sample: f64) -> f64 {
        StreamingFir::process(self, sample)
    }
}
