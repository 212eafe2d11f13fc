//! Chart rendering.
//!
//! Every chart draws into an explicit in-memory bitmap and comes back as PNG
//! bytes; there is no shared figure state between calls. Multi-page output
//! accumulates in a caller-owned [`PageDocument`].

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;

use crate::error::{FilterError, Result};
use crate::filter::design::{FilterSpec, design_bandpass};
use crate::filter::response::{DEFAULT_RESPONSE_POINTS, frequency_response};
use crate::signal::Signal;

/// Number of leading samples shown by the comparison chart.
pub const DISPLAY_LIMIT: usize = 2000;

const PAGE_WIDTH: u32 = 900;
const PAGE_HEIGHT: u32 = 600;

const PALETTE: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

/// An ordered collection of rendered pages.
///
/// Pages are PNG-encoded images held in memory until [`save_to_dir`] writes
/// them out as numbered files. The caller creates the document, hands it to
/// whatever wants to append pages, and saves it once at the end.
///
/// [`save_to_dir`]: PageDocument::save_to_dir
#[derive(Debug, Default)]
pub struct PageDocument {
    pages: Vec<Vec<u8>>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rendered page.
    pub fn push_page(&mut self, png: Vec<u8>) {
        self.pages.push(png);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Borrow the rendered pages in append order.
    pub fn pages(&self) -> &[Vec<u8>] {
        &self.pages
    }

    /// Write every page as `<stem>_page<n>.png` under `dir`, creating the
    /// directory if needed. Returns the written paths in page order.
    pub fn save_to_dir(&self, dir: impl AsRef<Path>, stem: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let mut paths = Vec::with_capacity(self.pages.len());
        for (i, page) in self.pages.iter().enumerate() {
            let path = dir.join(format!("{stem}_page{}.png", i + 1));
            std::fs::write(&path, page)?;
            paths.push(path);
        }
        Ok(paths)
    }
}

/// Render the original and filtered signal as one overlaid chart.
///
/// Only the first [`DISPLAY_LIMIT`] samples of each signal are drawn; the
/// caption names the window. Returns the chart as PNG bytes.
///
/// # Errors
/// `FilterError::Plot` if the original signal is empty or rendering fails.
pub fn render_comparison_png(original: &Signal, filtered: &Signal) -> Result<Vec<u8>> {
    if original.is_empty() {
        return Err(FilterError::Plot("signal has no samples".into()));
    }

    let shown = original.len().min(DISPLAY_LIMIT);
    let original_window: Vec<(f64, f64)> = original.points().take(shown).collect();
    let filtered_window: Vec<(f64, f64)> = filtered.points().take(shown).collect();

    let (x_range, y_range) = window_bounds(&original_window, &filtered_window);
    let caption = format!("Original vs. filtered, first {shown} samples");

    let mut buffer = vec![0u8; (PAGE_WIDTH * PAGE_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (PAGE_WIDTH, PAGE_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 20).into_font())
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc("Sample")
            .y_desc("Amplitude")
            .draw()?;

        for (points, label, color) in [
            (&original_window, "Original Signal", BLUE),
            (&filtered_window, "Filtered Signal", RED),
        ] {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;

        root.present()?;
    }

    encode_png(&buffer, PAGE_WIDTH, PAGE_HEIGHT)
}

/// Sweep the band-pass design across `orders` and append the resulting chart
/// to `document` as exactly one page.
///
/// Each order is designed for the same band and evaluated at
/// [`DEFAULT_RESPONSE_POINTS`] frequencies on `[0, Nyquist)`; its gain curve
/// is drawn with an `order = N` legend entry. An empty `orders` slice still
/// appends a page with bare axes. If any order fails to design, no page is
/// appended.
pub fn plot_frequency_responses(
    sample_rate_hz: f64,
    low_cut_hz: f64,
    high_cut_hz: f64,
    orders: &[usize],
    document: &mut PageDocument,
) -> Result<()> {
    let mut responses = Vec::with_capacity(orders.len());
    for &order in orders {
        let spec = FilterSpec::new(low_cut_hz, high_cut_hz, sample_rate_hz, order);
        let coeffs = design_bandpass(&spec)?;
        responses.push((
            order,
            frequency_response(&coeffs, sample_rate_hz, DEFAULT_RESPONSE_POINTS),
        ));
    }

    let nyquist = sample_rate_hz / 2.0;
    let peak_gain = responses
        .iter()
        .flat_map(|(_, r)| r.gains.iter().copied())
        .fold(1.0f64, f64::max);

    let mut buffer = vec![0u8; (PAGE_WIDTH * PAGE_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (PAGE_WIDTH, PAGE_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Band-pass frequency response, {low_cut_hz}-{high_cut_hz} Hz"),
                ("sans-serif", 20).into_font(),
            )
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..nyquist, 0f64..peak_gain * 1.05)?;

        chart
            .configure_mesh()
            .x_desc("Frequency (Hz)")
            .y_desc("Gain")
            .draw()?;

        for (idx, (order, response)) in responses.iter().enumerate() {
            let color = PALETTE[idx % PALETTE.len()];
            let points = response
                .frequencies_hz
                .iter()
                .copied()
                .zip(response.gains.iter().copied());
            chart
                .draw_series(LineSeries::new(points, &color))?
                .label(format!("order = {order}"))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;

        root.present()?;
    }

    document.push_page(encode_png(&buffer, PAGE_WIDTH, PAGE_HEIGHT)?);
    Ok(())
}

/// Axis ranges covering both windowed series, padded and never degenerate.
fn window_bounds(
    original: &[(f64, f64)],
    filtered: &[(f64, f64)],
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let xs = original.iter().chain(filtered).map(|&(x, _)| x);
    let x_min = xs.clone().fold(f64::INFINITY, f64::min);
    let x_max = xs.fold(f64::NEG_INFINITY, f64::max);

    let ys = original.iter().chain(filtered).map(|&(_, y)| y);
    let y_min = ys.clone().fold(f64::INFINITY, f64::min);
    let y_max = ys.fold(f64::NEG_INFINITY, f64::max);

    let x_pad = if x_max > x_min { 0.0 } else { 1.0 };
    let y_pad = if y_max > y_min {
        (y_max - y_min) * 0.1
    } else {
        1.0
    };

    (
        x_min..x_max + x_pad,
        (y_min - y_pad)..(y_max + y_pad),
    )
}

fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| FilterError::Plot("failed to allocate image buffer".into()))?;

    let mut output = Vec::new();
    DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
