use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Filter length must be odd and positive, got {length}")]
    InvalidLength { length: usize },

    #[error("Unsupported type: {0}")]
    InvalidType(String),

    #[error("Cannot allocate storage for {requested} coefficients")]
    AllocationFailure { requested: usize },

    #[error("Buffer misconfigured (capacity {capacity}, filter length {filter_length}): {reason}")]
    BufferMisconfiguration {
        capacity: usize,
        filter_length: usize,
        reason: &'static str,
    },

    #[error(
        "Transition frequency {transition_hz} Hz must lie between 0 and Nyquist for sample rate {sample_rate_hz} Hz"
    )]
    InvalidFrequency {
        transition_hz: f64,
        sample_rate_hz: f64,
    },

    #[error("Ripple must be in (0, 1), got {0}")]
    InvalidRipple(f64),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
