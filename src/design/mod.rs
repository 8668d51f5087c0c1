pub mod bessel;
mod coefficients;
mod designer;
pub mod kaiser;
mod response;
mod sinc;
pub mod window;

pub use bessel::bessel_i0;
pub use coefficients::{CoefficientSet, half_length};
pub use designer::{FirDesign, design, design_kaiser, design_kaiser_with_terms};
pub use kaiser::{KaiserParams, KaiserWindow, RippleSpec, create_kaiser_window, round_up_to_odd};
pub use sinc::{FilterKind, FilterSpec, ideal_coefficients};
pub use window::{Window, WindowShape, WindowSpec, create_window};
