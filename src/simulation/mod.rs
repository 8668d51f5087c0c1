mod noise;
mod signal;

pub use noise::{NoiseConfig, apply_noise, rms, signal_power};
pub use signal::{generate_reference_waveform, generate_tone, generate_tones, unit_impulse};
