//! Frequency response of designed filters.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::filter::design::BandpassCoefficients;

/// Number of evaluation points used by the order-sweep plot.
pub const DEFAULT_RESPONSE_POINTS: usize = 2000;

/// Gain versus frequency, evaluated on `[0, Nyquist)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    pub frequencies_hz: Vec<f64>,
    pub gains: Vec<f64>,
}

impl FrequencyResponse {
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }
}

/// Evaluate `coeffs` at `points` frequencies evenly spaced on `[0, Nyquist)`.
///
/// Point `k` sits at angular frequency `w = pi * k / points`; the gain is the
/// magnitude of `B(e^{-jw}) / A(e^{-jw})`. The Nyquist frequency itself is
/// excluded, matching a half-open sweep of the unit circle's upper arc.
pub fn frequency_response(
    coeffs: &BandpassCoefficients,
    sample_rate_hz: f64,
    points: usize,
) -> FrequencyResponse {
    let mut frequencies_hz = Vec::with_capacity(points);
    let mut gains = Vec::with_capacity(points);

    for k in 0..points {
        let w = PI * k as f64 / points as f64;
        let zinv = Complex64::from_polar(1.0, -w);
        let gain = (polyval(&coeffs.b, zinv) / polyval(&coeffs.a, zinv)).norm();
        frequencies_hz.push(w * sample_rate_hz / (2.0 * PI));
        gains.push(gain);
    }

    FrequencyResponse {
        frequencies_hz,
        gains,
    }
}

/// Evaluate a polynomial in z^-1 with coefficients in ascending powers.
fn polyval(coeffs: &[f64], u: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * u + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::design::{FilterSpec, design_bandpass};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_response_grid_covers_zero_to_nyquist() {
        let coeffs = design_bandpass(&FilterSpec::default()).unwrap();
        let response = frequency_response(&coeffs, 512.0, DEFAULT_RESPONSE_POINTS);

        assert_eq!(response.len(), 2000);
        assert_eq!(response.frequencies_hz.len(), response.gains.len());
        assert_abs_diff_eq!(response.frequencies_hz[0], 0.0, epsilon = 1e-12);
        assert!(
            *response.frequencies_hz.last().unwrap() < 256.0,
            "Nyquist itself must be excluded"
        );
        // Even spacing of Nyquist / points.
        assert_abs_diff_eq!(
            response.frequencies_hz[1] - response.frequencies_hz[0],
            256.0 / 2000.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_response_shape_of_default_band() {
        let spec = FilterSpec::default();
        let coeffs = design_bandpass(&spec).unwrap();
        let response = frequency_response(&coeffs, spec.sample_rate_hz, DEFAULT_RESPONSE_POINTS);

        // DC is blocked. The narrow band leaves the polynomials badly
        // conditioned right at z = 1, so keep the tolerance loose.
        assert!(response.gains[0] < 1e-3, "DC gain {}", response.gains[0]);

        // Gain near the geometric band center (~1.4 Hz) is close to unity.
        let center_hz = (spec.low_cut_hz * spec.high_cut_hz).sqrt();
        let k = response
            .frequencies_hz
            .iter()
            .position(|&f| f >= center_hz)
            .unwrap();
        assert!(
            (response.gains[k] - 1.0).abs() < 0.1,
            "Pass-band gain at {} Hz was {}",
            response.frequencies_hz[k],
            response.gains[k]
        );

        // Far above the 20 Hz edge the response has rolled off hard.
        assert!(
            *response.gains.last().unwrap() < 1e-3,
            "High-end gain {}",
            response.gains.last().unwrap()
        );
    }

    #[test]
    fn test_response_point_count_is_caller_controlled() {
        let coeffs = design_bandpass(&FilterSpec::default()).unwrap();
        let response = frequency_response(&coeffs, 512.0, 4);

        assert_eq!(response.len(), 4);
        assert_abs_diff_eq!(response.frequencies_hz[2], 128.0, epsilon = 1e-9);
    }

    #[test]
    fn test_polyval_matches_direct_evaluation() {
        // 1 + 2u + 3u^2 at u = -1 is 2.
        let u = Complex64::new(-1.0, 0.0);
        let value = polyval(&[1.0, 2.0, 3.0], u);
        assert_abs_diff_eq!(value.re, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(value.im, 0.0, epsilon = 1e-12);
    }
}
