mod circular_buffer;
mod filter;
mod fir;

pub use circular_buffer::{BufferCapacity, CircularBuffer};
pub use filter::Filter;
pub use fir::StreamingFir;
