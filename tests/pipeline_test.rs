use std::f64::consts::PI;

use eegfilt::simulation::eeg_like_frame;
use eegfilt::{
    DISPLAY_LIMIT, FilterSpec, PageDocument, VALUE_COLUMN, filter_signal,
    plot_frequency_responses,
};

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

#[test]
fn test_default_band_cleans_eeg_like_recording() {
    let dir = tempfile::tempdir().unwrap();
    let spec = FilterSpec::default();

    // 8 seconds of synthetic EEG: 10 Hz alpha (amp 1.0) in band, 50 Hz
    // powerline (amp 0.5) and 0.05 Hz drift (amp 0.8) out of band.
    let frame = eeg_like_frame(spec.sample_rate_hz, 4096, 42);
    let filtered = filter_signal(
        &frame,
        &spec,
        dir.path().join("comparison.png"),
        None,
    )
    .unwrap();

    assert_eq!(filtered.len(), frame.len());

    // Measure on the settled second half.
    let raw = &frame.column(VALUE_COLUMN).unwrap()[2048..];
    let out = &filtered.values()[2048..];

    let alpha = tone_amplitude(out, 10.0, spec.sample_rate_hz);
    assert!(
        (alpha - 1.0).abs() < 0.15,
        "Alpha rhythm should pass nearly unchanged, got amplitude {}",
        alpha
    );

    let powerline_in = tone_amplitude(raw, 50.0, spec.sample_rate_hz);
    let powerline_out = tone_amplitude(out, 50.0, spec.sample_rate_hz);
    assert!(
        powerline_out < 0.05 * powerline_in,
        "Powerline should be rejected: {} in, {} out",
        powerline_in,
        powerline_out
    );

    // The slow drift shows up as a large window mean in the raw signal and
    // should be mostly gone after filtering.
    let raw_mean = raw.iter().sum::<f64>() / raw.len() as f64;
    let out_mean = out.iter().sum::<f64>() / out.len() as f64;
    assert!(
        raw_mean.abs() > 0.5,
        "Raw window should carry drift offset, got {}",
        raw_mean
    );
    assert!(
        out_mean.abs() < 0.2,
        "Filtered window should sit near zero, got {}",
        out_mean
    );
}

#[test]
fn test_export_writes_full_series_beyond_display_window() {
    let dir = tempfile::tempdir().unwrap();
    let spec = FilterSpec::default();
    let csv_path = dir.path().join("filtered.csv");

    // More samples than the chart displays.
    let frame = eeg_like_frame(spec.sample_rate_hz, 4096, 7);
    assert!(frame.len() > DISPLAY_LIMIT);

    filter_signal(
        &frame,
        &spec,
        dir.path().join("comparison.png"),
        Some(csv_path.as_path()),
    )
    .unwrap();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let rows: Vec<&str> = contents.lines().collect();
    assert_eq!(
        rows.len(),
        4096,
        "Export must cover the whole series, not the display window"
    );
    for row in rows {
        row.parse::<f64>().unwrap();
    }

    let png = std::fs::read(dir.path().join("comparison.png")).unwrap();
    assert_eq!(&png[..4], &PNG_MAGIC);
}

#[test]
fn test_order_sweep_accumulates_pages_across_calls() {
    let dir = tempfile::tempdir().unwrap();
    let mut document = PageDocument::new();

    plot_frequency_responses(512.0, 0.1, 20.0, &[3, 5, 7], &mut document).unwrap();
    plot_frequency_responses(256.0, 1.0, 40.0, &[4], &mut document).unwrap();
    assert_eq!(document.page_count(), 2);

    let paths = document.save_to_dir(dir.path(), "responses").unwrap();
    assert_eq!(paths.len(), 2);
    for path in &paths {
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..4], &PNG_MAGIC, "{} is not a PNG", path.display());
    }
}

/// Amplitude of the `freq_hz` component via single-bin DFT projection.
fn tone_amplitude(samples: &[f64], freq_hz: f64, sample_rate_hz: f64) -> f64 {
    let mut re = 0.0;
    let mut im = 0.0;
    for (i, &x) in samples.iter().enumerate() {
        let phase = 2.0 * PI * freq_hz * i as f64 / sample_rate_hz;
        re += x * phase.cos();
        im += x * phase.sin();
    }
    2.0 * (re * re + im * im).sqrt() / samples.len() as f64
}
