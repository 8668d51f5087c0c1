use crate::constants::DEFAULT_BUFFER_CAPACITY;
use crate::error::{FilterError, Result};

/// Circular buffer capacity, guaranteed to be a power of two
///
/// Wraparound indexing uses `index & mask`, which only aliases correctly for
/// power-of-two sizes. Constructing this type is the only place that is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// # Errors
    /// Returns `FilterError::BufferMisconfiguration` unless `capacity` is a
    /// non-zero power of two
    pub fn new(capacity: usize) -> Result<Self> {
        if !capacity.is_power_of_two() {
            return Err(FilterError::BufferMisconfiguration {
                capacity,
                filter_length: 0,
                reason: "capacity must be a power of two",
            });
        }
        Ok(Self(capacity))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn mask(&self) -> usize {
        self.0 - 1
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_BUFFER_CAPACITY)
    }
}

impl TryFrom<usize> for BufferCapacity {
    type Error = FilterError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

/// Fixed-size sample history with a wrapping write cursor
///
/// Holds the most recent `capacity` samples. The cursor points at the slot the
/// next sample will be written to; `write` stores without moving it so the
/// freshly written sample is readable at `behind(0)` until `advance`.
pub struct CircularBuffer {
    samples: Vec<f64>,
    mask: usize,
    cursor: usize,
}

impl CircularBuffer {
    /// # Errors
    /// Returns `FilterError::AllocationFailure` if storage cannot be reserved
    pub fn new(capacity: BufferCapacity) -> Result<Self> {
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(capacity.get())
            .map_err(|_| FilterError::AllocationFailure {
                requested: capacity.get(),
            })?;
        samples.resize(capacity.get(), 0.0);

        Ok(Self {
            samples,
            mask: capacity.mask(),
            cursor: 0,
        })
    }

    /// Store `sample` at the cursor
    #[inline]
    pub fn write(&mut self, sample: f64) {
        self.samples[self.cursor] = sample;
    }

    /// Move the cursor one slot forward, wrapping at capacity
    #[inline]
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) & self.mask;
    }

    /// Sample written `age` steps before the one at the cursor
    #[inline]
    pub fn behind(&self, age: usize) -> f64 {
        self.samples[self.cursor.wrapping_sub(age) & self.mask]
    }

    /// Write and advance in one step
    pub fn push(&mut self, sample: f64) {
        self.write(sample);
        self.advance();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Zero the history and rewind the cursor
    pub fn reset(&mut self) {
        self.samples.fill(0.0);
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_must_be_power_of_two() {
        assert!(BufferCapacity::new(1024).is_ok());
        assert!(BufferCapacity::new(1).is_ok());
        assert!(BufferCapacity::new(0).is_err());
        assert!(matches!(
            BufferCapacity::new(1023),
            Err(FilterError::BufferMisconfiguration { capacity: 1023, .. })
        ));
        assert!(BufferCapacity::try_from(48).is_err());
    }

    #[test]
    fn test_default_capacity() {
        let capacity = BufferCapacity::default();
        assert_eq!(capacity.get(), 1024);
        assert_eq!(capacity.mask(), 1023);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(4).unwrap()).unwrap();
        for i in 0..6 {
            buffer.push(i as f64);
        }
        // Slots now hold [4, 5, 2, 3], cursor at 2
        assert_eq!(buffer.cursor(), 2);
        assert_eq!(buffer.behind(1), 5.0);
        assert_eq!(buffer.behind(2), 4.0);
        assert_eq!(buffer.behind(3), 3.0);
        assert_eq!(buffer.behind(4), 2.0);
    }

    #[test]
    fn test_write_is_visible_before_advance() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(8).unwrap()).unwrap();
        buffer.push(1.0);
        buffer.write(2.0);
        assert_eq!(buffer.behind(0), 2.0);
        assert_eq!(buffer.behind(1), 1.0);
        // Wraps below zero onto the end of storage
        assert_eq!(buffer.behind(2), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(8).unwrap()).unwrap();
        buffer.push(3.0);
        buffer.push(4.0);
        buffer.reset();
        assert_eq!(buffer.cursor(), 0);
        assert!((0..8).all(|age| buffer.behind(age) == 0.0));
    }
}
