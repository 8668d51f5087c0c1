use std::f64::consts::PI;

use rand::RngExt;

use super::noise::create_rng;

/// Sine tone of `num_samples` samples
pub fn generate_tone(freq_hz: f64, amplitude: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
        .collect()
}

/// Sum of sine tones given as `(freq_hz, amplitude)` pairs
pub fn generate_tones(tones: &[(f64, f64)], sample_rate: f64, num_samples: usize) -> Vec<f64> {
    let mut signal = vec![0.0; num_samples];
    for &(freq_hz, amplitude) in tones {
        for (sample, tone) in signal
            .iter_mut()
            .zip(generate_tone(freq_hz, amplitude, sample_rate, num_samples))
        {
            *sample += tone;
        }
    }
    signal
}

/// All zeros except `1.0` at `position`
pub fn unit_impulse(num_samples: usize, position: usize) -> Vec<f64> {
    let mut signal = vec![0.0; num_samples];
    if let Some(sample) = signal.get_mut(position) {
        *sample = 1.0;
    }
    signal
}

/// Noisy test waveform for low-pass demonstrations
///
/// A 50-amplitude 100 Hz sine plus 200 Hz and 300 Hz cosines whose
/// amplitudes are redrawn every sample (integers in 0..15 and 0..10), the
/// 300 Hz component phase-shifted by 3/4 pi.
pub fn generate_reference_waveform(
    duration_secs: f64,
    sample_rate: f64,
    seed: Option<u64>,
) -> Vec<f64> {
    let num_samples = (duration_secs * sample_rate) as usize;
    let mut rng = create_rng(seed);

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let a200 = (rng.random::<f64>() * 15.0).floor();
            let a300 = (rng.random::<f64>() * 10.0).floor();
            50.0 * (2.0 * PI * 100.0 * t).sin()
                + a200 * (2.0 * PI * 200.0 * t).cos()
                + a300 * (2.0 * PI * 300.0 * t + 3.0 * PI / 4.0).cos()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_waveform_length() {
        let signal = generate_reference_waveform(0.1, 8000.0, Some(1));
        assert_eq!(signal.len(), 800);
        // 50 + 14 + 9 bounds every sample
        assert!(signal.iter().all(|s| s.abs() <= 73.0));
    }

    #[test]
    fn test_reference_waveform_seeded() {
        let a = generate_reference_waveform(0.05, 8000.0, Some(9));
        let b = generate_reference_waveform(0.05, 8000.0, Some(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unit_impulse() {
        let signal = unit_impulse(8, 3);
        assert_eq!(signal.iter().sum::<f64>(), 1.0);
        assert_eq!(signal[3], 1.0);
        assert!(unit_impulse(4, 10).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_tones_sum() {
        let a = generate_tone(100.0, 1.0, 8000.0, 50);
        let b = generate_tone(300.0, 0.5, 8000.0, 50);
        let mixed = generate_tones(&[(100.0, 1.0), (300.0, 0.5)], 8000.0, 50);
        for i in 0..50 {
            assert!((mixed[i] - (a[i] + b[i])).abs() < 1e-12);
        }
    }
}
