use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Additive white Gaussian noise settings
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct NoiseConfig {
    pub seed: Option<u64>,
    /// Signal-to-noise ratio in dB; `None` adds no noise
    pub snr_db: Option<f64>,
}

impl NoiseConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_awgn(mut self, snr_db: f64) -> Self {
        self.snr_db = Some(snr_db);
        self
    }
}

pub(crate) fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

pub fn signal_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|&x| x * x).sum::<f64>() / signal.len() as f64
}

pub fn rms(signal: &[f64]) -> f64 {
    signal_power(signal).sqrt()
}

/// Add white Gaussian noise scaled to the configured SNR
pub fn apply_noise(signal: &mut [f64], config: &NoiseConfig) {
    let Some(snr_db) = config.snr_db else {
        return;
    };

    let sig_power = signal_power(signal);
    if sig_power == 0.0 {
        return;
    }

    let noise_power = sig_power / 10.0_f64.powf(snr_db / 10.0);
    let Ok(normal) = Normal::new(0.0, noise_power.sqrt()) else {
        log::warn!("Cannot build noise distribution for SNR {} dB", snr_db);
        return;
    };

    let mut rng = create_rng(config.seed);
    for sample in signal.iter_mut() {
        *sample += normal.sample(&mut rng);
    }
}
