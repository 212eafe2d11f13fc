//! Butterworth band-pass design.
//!
//! `FilterSpec` carries the band edges, sample rate, and prototype order.
//! `design_bandpass` turns a validated spec into transfer-function
//! coefficients for inspection and response plots; the filtering path gets
//! the same band as cascaded second-order sections from
//! `design_bandpass_sos`. Everything is recomputed on every call, never
//! cached.

use sci_rs::signal::filter::design::{
    DigitalFilter, FilterBandType, FilterOutputType, Sos, butter_dyn,
};

use crate::error::{FilterError, Result};

/// Band-pass filter parameters.
///
/// The invariant is `0 < low_cut_hz < high_cut_hz < sample_rate_hz / 2` with
/// `order >= 1`; `validate` reports any violation instead of clamping.
///
/// # Example
/// ```
/// use eegfilt::FilterSpec;
///
/// let spec = FilterSpec::default();
/// assert_eq!(spec.low_cut_hz, 0.1);
/// assert_eq!(spec.high_cut_hz, 20.0);
/// spec.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    /// Lower band edge in Hz.
    pub low_cut_hz: f64,
    /// Upper band edge in Hz.
    pub high_cut_hz: f64,
    /// Sampling rate of the signal in Hz.
    pub sample_rate_hz: f64,
    /// Prototype order (a band-pass doubles it; see [`design_bandpass`]).
    pub order: usize,
}

impl FilterSpec {
    /// Create a spec from band edges, sample rate, and order.
    pub fn new(low_cut_hz: f64, high_cut_hz: f64, sample_rate_hz: f64, order: usize) -> Self {
        Self {
            low_cut_hz,
            high_cut_hz,
            sample_rate_hz,
            order,
        }
    }

    /// Nyquist frequency (half the sample rate) in Hz.
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Check that the parameters describe a realizable band.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidFilterSpec` naming the violated condition.
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(FilterError::InvalidFilterSpec(format!(
                "sample rate must be positive, got {}",
                self.sample_rate_hz
            )));
        }
        if self.order == 0 {
            return Err(FilterError::InvalidFilterSpec(
                "order must be at least 1".to_string(),
            ));
        }
        if !self.low_cut_hz.is_finite() || self.low_cut_hz <= 0.0 {
            return Err(FilterError::InvalidFilterSpec(format!(
                "low cutoff must be positive, got {}",
                self.low_cut_hz
            )));
        }
        if !self.high_cut_hz.is_finite() || self.high_cut_hz <= self.low_cut_hz {
            return Err(FilterError::InvalidFilterSpec(format!(
                "high cutoff must exceed low cutoff, got {} <= {}",
                self.high_cut_hz, self.low_cut_hz
            )));
        }
        if self.high_cut_hz >= self.nyquist_hz() {
            return Err(FilterError::InvalidFilterSpec(format!(
                "high cutoff {} Hz must stay below the Nyquist frequency {} Hz",
                self.high_cut_hz,
                self.nyquist_hz()
            )));
        }
        Ok(())
    }
}

impl Default for FilterSpec {
    /// A published EEG artifact-removal configuration: 0.1 to 20 Hz pass band
    /// on a 512 Hz recording, order 5.
    fn default() -> Self {
        Self::new(0.1, 20.0, 512.0, 5)
    }
}

/// Transfer-function coefficients of a designed band-pass.
///
/// `b` is the feedforward (numerator) side, `a` the feedback (denominator)
/// side, both in descending powers of z^-1 with `a[0] == 1`. A band-pass of
/// prototype order N carries `2N + 1` entries in each vector.
#[derive(Debug, Clone, PartialEq)]
pub struct BandpassCoefficients {
    pub b: Vec<f64>,
    pub a: Vec<f64>,
}

/// Design a digital Butterworth band-pass filter.
///
/// Both cutoffs are normalized by the Nyquist frequency and handed to the
/// scipy-style design routine in transfer-function form. Identical parameters
/// always produce identical coefficients.
///
/// # Errors
/// Propagates `InvalidFilterSpec` from validation; `FilterDesign` if the
/// design library answers in an unexpected form.
pub fn design_bandpass(spec: &FilterSpec) -> Result<BandpassCoefficients> {
    spec.validate()?;

    let nyquist = spec.nyquist_hz();
    let wn = vec![spec.low_cut_hz / nyquist, spec.high_cut_hz / nyquist];

    let filter = butter_dyn(
        spec.order,
        wn,
        Some(FilterBandType::Bandpass),
        Some(false),
        Some(FilterOutputType::Ba),
        None,
    );
    let DigitalFilter::Ba(ba) = filter else {
        return Err(FilterError::FilterDesign(
            "expected transfer-function (b, a) output".to_string(),
        ));
    };

    log::debug!(
        "Designed band-pass {}-{} Hz at {} Hz, order {}: {} taps",
        spec.low_cut_hz,
        spec.high_cut_hz,
        spec.sample_rate_hz,
        spec.order,
        ba.b.len()
    );

    Ok(BandpassCoefficients { b: ba.b, a: ba.a })
}

/// Design the same Butterworth band as cascaded second-order sections.
///
/// The expanded polynomials of [`design_bandpass`] are for inspection and
/// response evaluation only: at high order with a narrow band their
/// f64-rounded roots land outside the unit circle, so filtering goes through
/// this cascade instead. Sections come back with zeroed internal state.
///
/// # Errors
/// Propagates `InvalidFilterSpec` from validation; `FilterDesign` if the
/// design library answers in an unexpected form.
pub(crate) fn design_bandpass_sos(spec: &FilterSpec) -> Result<Vec<Sos<f64>>> {
    spec.validate()?;

    let nyquist = spec.nyquist_hz();
    let wn = vec![spec.low_cut_hz / nyquist, spec.high_cut_hz / nyquist];

    let filter = butter_dyn(
        spec.order,
        wn,
        Some(FilterBandType::Bandpass),
        Some(false),
        Some(FilterOutputType::Sos),
        None,
    );
    let DigitalFilter::Sos(cascade) = filter else {
        return Err(FilterError::FilterDesign(
            "expected cascaded second-order sections".to_string(),
        ));
    };

    log::debug!(
        "Designed band-pass {}-{} Hz at {} Hz, order {}: {} sections",
        spec.low_cut_hz,
        spec.high_cut_hz,
        spec.sample_rate_hz,
        spec.order,
        cascade.sos.len()
    );

    Ok(cascade.sos)
}
