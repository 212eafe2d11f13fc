use std::f64::consts::PI;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::signal::{Frame, Signal, VALUE_COLUMN};

/// Generate a pure tone with a 0..n sample index.
pub fn sine_signal(freq_hz: f64, sample_rate_hz: f64, num_samples: usize) -> Signal {
    Signal::from_values(
        (0..num_samples)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate_hz).sin())
            .collect(),
    )
}

/// Generate a pure tone wrapped in a single-column frame.
pub fn sine_frame(freq_hz: f64, sample_rate_hz: f64, num_samples: usize) -> Frame {
    let signal = sine_signal(freq_hz, sample_rate_hz, num_samples);
    Frame::from_column(VALUE_COLUMN, signal.values().to_vec())
}

/// Generate a single-channel EEG-like recording.
///
/// Mixes an alpha rhythm (10 Hz) and theta rhythm (6 Hz) with a slow 0.05 Hz
/// baseline drift, 50 Hz powerline interference, and Gaussian noise from a
/// seeded generator. The drift and powerline components sit outside the
/// default 0.1-20 Hz band. Identical seeds produce identical frames.
pub fn eeg_like_frame(sample_rate_hz: f64, num_samples: usize, seed: u64) -> Frame {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 0.15).unwrap();

    let values = (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate_hz;
            let alpha = (2.0 * PI * 10.0 * t).sin();
            let theta = 0.4 * (2.0 * PI * 6.0 * t).sin();
            let drift = 0.8 * (2.0 * PI * 0.05 * t).sin();
            let powerline = 0.5 * (2.0 * PI * 50.0 * t).sin();
            alpha + theta + drift + powerline + normal.sample(&mut rng)
        })
        .collect();

    Frame::from_column(VALUE_COLUMN, values)
}
