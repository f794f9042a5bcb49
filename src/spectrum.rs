//! Real-valued views of a complex spectrum.

use ndarray::{Array1, ArrayView1};
use rustfft::num_complex::Complex64;

use crate::error::{TransformError, TransformResult};
use crate::normalize::validate_len;

/// `|X[k]|` for every bin.
pub fn magnitude_spectrum(spectrum: ArrayView1<'_, Complex64>) -> Array1<f64> {
    spectrum.mapv(|c| c.norm())
}

/// `|X[k]|^2 / N` for every bin, where `N` is the spectrum length.
pub fn power_spectrum(spectrum: ArrayView1<'_, Complex64>) -> Array1<f64> {
    let n = spectrum.len() as f64;
    spectrum.mapv(|c| c.norm_sqr() / n)
}

/// One-sided bin frequencies `k * sample_rate / n` for `k` in `0..=n/2`.
pub fn frequency_bins(n: usize, sample_rate: f64) -> TransformResult<Array1<f64>> {
    let n = validate_len(n)?;
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(TransformError::InvalidSampleRate);
    }
    let step = sample_rate / n as f64;
    Ok((0..=n / 2).map(|k| k as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::{frequency_bins, magnitude_spectrum, power_spectrum};
    use crate::error::TransformError;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};
    use rustfft::num_complex::Complex64;

    #[test]
    fn magnitude_and_power_of_known_bins() {
        let spectrum = array![Complex64::new(3.0, 4.0), Complex64::new(0.0, -2.0)];
        assert_eq!(magnitude_spectrum(spectrum.view()), array![5.0, 2.0]);
        let power = power_spectrum(spectrum.view());
        assert_abs_diff_eq!(power[0], 12.5, epsilon = 1e-12);
        assert_abs_diff_eq!(power[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_spectrum_has_empty_power() {
        let empty: Array1<Complex64> = Array1::zeros(0);
        assert!(power_spectrum(empty.view()).is_empty());
    }

    #[test]
    fn bins_cover_zero_to_nyquist() {
        let bins = frequency_bins(64, 100.0).expect("valid arguments");
        assert_eq!(bins.len(), 33);
        assert_abs_diff_eq!(bins[1], 1.5625, epsilon = 1e-12);
        assert_abs_diff_eq!(bins[32], 50.0, epsilon = 1e-12);

        let odd = frequency_bins(5, 10.0).expect("valid arguments");
        assert_eq!(odd, array![0.0, 2.0, 4.0]);
    }

    #[test]
    fn bins_reject_bad_arguments() {
        assert_eq!(frequency_bins(0, 1.0), Err(TransformError::ZeroLength));
        assert_eq!(
            frequency_bins(8, 0.0),
            Err(TransformError::InvalidSampleRate)
        );
        assert_eq!(
            frequency_bins(8, f64::NAN),
            Err(TransformError::InvalidSampleRate)
        );
    }
}
