pub mod config;
pub mod constants;
pub mod design;
pub mod error;
pub mod output;
pub mod streaming;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::DesignConfig;
pub use design::{CoefficientSet, FilterKind, FilterSpec, FirDesign};
pub use error::{FilterError, Result};
pub use streaming::{BufferCapacity, Filter, StreamingFir};
