//! Butterworth band-pass filtering for single-channel EEG-style recordings.
//!
//! The crate covers the offline loop around one recording: design a band-pass
//! ([`design_bandpass`]), run it forward over the samples
//! ([`apply_bandpass`]), chart original vs. filtered
//! ([`render_comparison_png`]), sweep the response across candidate orders
//! into a multi-page document ([`plot_frequency_responses`]), and dump the
//! filtered values one per row ([`write_values`]). Design follows the scipy
//! `butter` conventions, with transfer-function `(b, a)` coefficients for
//! inspection; filtering runs the band as cascaded second-order sections,
//! one forward pass with zero initial state.
//!
//! [`filter_signal`] ties the pieces together for the common case:
//!
//! ```no_run
//! use eegfilt::{FilterSpec, Frame, VALUE_COLUMN, filter_signal};
//!
//! let frame = Frame::from_column(VALUE_COLUMN, vec![0.25; 512]);
//! let filtered =
//!     filter_signal(&frame, &FilterSpec::default(), "comparison.png", None).unwrap();
//! assert_eq!(filtered.len(), 512);
//! ```

pub mod error;
pub mod export;
pub mod filter;
pub mod plot;
pub mod signal;

#[cfg(feature = "simulation")]
pub mod simulation;

use std::path::Path;

pub use error::{FilterError, Result};
pub use export::write_values;
pub use filter::{
    BandpassCoefficients, DEFAULT_RESPONSE_POINTS, FilterSpec, FrequencyResponse, apply_bandpass,
    design_bandpass, frequency_response, lfilter,
};
pub use plot::{DISPLAY_LIMIT, PageDocument, plot_frequency_responses, render_comparison_png};
pub use signal::{Frame, Signal, VALUE_COLUMN};

/// Filter a frame's `"Value"` column and render the before/after chart.
///
/// The chart shows the first [`DISPLAY_LIMIT`] samples and is written as a
/// PNG to `plot_path`. When `out_file` is given, the full filtered series
/// (not the display window) is written there one value per row, replacing
/// any existing file. Returns the filtered signal, which keeps the frame's
/// index.
///
/// # Errors
/// `MissingField` if the frame has no `"Value"` column; otherwise whatever
/// designing, filtering, rendering, or writing reports.
pub fn filter_signal(
    frame: &Frame,
    spec: &FilterSpec,
    plot_path: impl AsRef<Path>,
    out_file: Option<&Path>,
) -> Result<Signal> {
    let original = frame.series(VALUE_COLUMN)?;
    let filtered = apply_bandpass(&original, spec)?;

    let png = render_comparison_png(&original, &filtered)?;
    std::fs::write(plot_path, png)?;

    if let Some(path) = out_file {
        export::write_values(path, filtered.values())?;
        log::debug!("Wrote {} filtered values to {}", filtered.len(), path.display());
    }

    Ok(filtered)
}
