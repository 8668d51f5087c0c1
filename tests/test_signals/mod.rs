#![allow(dead_code)]

pub use sincfir::simulation::{
    NoiseConfig, apply_noise, generate_reference_waveform, generate_tone, generate_tones, rms,
    signal_power, unit_impulse,
};

/// RMS of `output` once the filter has settled (first `skip` samples dropped)
pub fn steady_state_rms(output: &[f64], skip: usize) -> f64 {
    rms(&output[skip.min(output.len())..])
}

/// Gain in dB between two signals, measured after `skip` samples
pub fn gain_db(input: &[f64], output: &[f64], skip: usize) -> f64 {
    20.0 * (steady_state_rms(output, skip) / steady_state_rms(input, skip)).log10()
}

/// RMS difference between `output` and `reference` delayed by `delay` samples
pub fn delayed_error_rms(output: &[f64], reference: &[f64], delay: usize, skip: usize) -> f64 {
    let errors: Vec<f64> = output
        .iter()
        .enumerate()
        .skip(skip.max(delay))
        .map(|(n, &y)| y - reference[n - delay])
        .collect();
    rms(&errors)
}
