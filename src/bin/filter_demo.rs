use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eegfilt::simulation::eeg_like_frame;
use eegfilt::{FilterSpec, PageDocument, filter_signal, plot_frequency_responses};

fn main() -> Result<()> {
    env_logger::init();

    let spec = FilterSpec::default();

    println!("=== eegfilt - EEG band-pass demo ===");
    println!("Sample rate: {} Hz", spec.sample_rate_hz);
    println!("Pass band: {}-{} Hz", spec.low_cut_hz, spec.high_cut_hz);
    println!("Order: {}", spec.order);
    println!();

    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir).context("Failed to create output directory")?;

    println!("Generating synthetic EEG-like recording...");
    let frame = eeg_like_frame(spec.sample_rate_hz, 4096, 42);

    println!("Filtering and rendering the comparison chart...");
    let plot_path = output_dir.join("comparison.png");
    let csv_path = output_dir.join("filtered.csv");
    let filtered = filter_signal(&frame, &spec, &plot_path, Some(csv_path.as_path()))?;
    println!("  Filtered {} samples", filtered.len());
    println!("  Wrote {}", plot_path.display());
    println!("  Wrote {}", csv_path.display());

    println!("Sweeping the frequency response across orders...");
    let mut document = PageDocument::new();
    plot_frequency_responses(
        spec.sample_rate_hz,
        spec.low_cut_hz,
        spec.high_cut_hz,
        &[3, 5, 7],
        &mut document,
    )?;
    for page in document.save_to_dir(output_dir, "responses")? {
        println!("  Wrote {}", page.display());
    }

    println!("\nDone. Open {} to see the result.", plot_path.display());
    Ok(())
}
