//! Forward IIR filtering of whole in-memory signals.

use sci_rs::signal::filter::sosfilt_dyn;

use crate::error::{FilterError, Result};
use crate::filter::design::{FilterSpec, design_bandpass_sos};
use crate::signal::Signal;

/// Run one forward pass of an IIR filter over `x`.
///
/// Direct-form II transposed difference equation with zero initial state,
/// normalized by `a[0]`. `b` and `a` may have different lengths; the shorter
/// side is zero-padded. The output carries the filter's phase delay (this is
/// a single forward pass, not a zero-phase filter) and always has the same
/// length as `x`.
///
/// # Errors
/// Returns `FilterError::FilterDesign` if either coefficient vector is empty
/// or `a[0]` is zero.
pub fn lfilter(b: &[f64], a: &[f64], x: &[f64]) -> Result<Vec<f64>> {
    let Some(&a0) = a.first() else {
        return Err(FilterError::FilterDesign(
            "denominator must not be empty".to_string(),
        ));
    };
    if a0 == 0.0 {
        return Err(FilterError::FilterDesign(
            "leading denominator coefficient must be nonzero".to_string(),
        ));
    }
    if b.is_empty() {
        return Err(FilterError::FilterDesign(
            "numerator must not be empty".to_string(),
        ));
    }

    // Normalize by a[0] and zero-pad both sides to a common length.
    let n = b.len().max(a.len());
    let bn: Vec<f64> = (0..n)
        .map(|i| b.get(i).copied().unwrap_or(0.0) / a0)
        .collect();
    let an: Vec<f64> = (0..n)
        .map(|i| a.get(i).copied().unwrap_or(0.0) / a0)
        .collect();

    // Single-coefficient filters are a pure gain with no state.
    if n == 1 {
        return Ok(x.iter().map(|&xi| bn[0] * xi).collect());
    }

    let mut z = vec![0.0; n - 1];
    let mut y = Vec::with_capacity(x.len());
    for &xi in x {
        let yi = bn[0] * xi + z[0];
        for j in 0..n - 2 {
            z[j] = bn[j + 1] * xi + z[j + 1] - an[j + 1] * yi;
        }
        z[n - 2] = bn[n - 1] * xi - an[n - 1] * yi;
        y.push(yi);
    }
    Ok(y)
}

/// Design a band-pass for `spec` and filter `signal` through it.
///
/// The band runs as cascaded second-order sections, one forward pass with
/// zero initial state, so the output carries the filter's phase delay. The
/// output signal has the same length as the input and a copy of its index.
/// The input is left untouched.
///
/// # Errors
/// Propagates validation and design errors.
pub fn apply_bandpass(signal: &Signal, spec: &FilterSpec) -> Result<Signal> {
    let mut sections = design_bandpass_sos(spec)?;
    let filtered = sosfilt_dyn(signal.values().iter(), &mut sections);
    Signal::new(signal.index().to_vec(), filtered)
}
