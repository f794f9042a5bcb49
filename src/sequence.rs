use std::sync::Arc;

use log::debug;
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use rustfft::{num_complex::Complex64, Fft, FftPlanner};

/// Forward DFT of a real sequence, backed by a `rustfft` planner.
///
/// `result[k] = sum_j x[j] * exp(-2*pi*i*j*k/N)` with no scaling.
pub struct SequenceTransformer {
    fft_planner: FftPlanner<f64>,
}

impl SequenceTransformer {
    pub fn new() -> Self {
        Self {
            fft_planner: FftPlanner::new(),
        }
    }

    /// Forward plan for `len`-point transforms. Plans are cached by the planner.
    pub fn plan(&mut self, len: usize) -> Arc<dyn Fft<f64>> {
        debug!("planning forward FFT of length {}", len);
        self.fft_planner.plan_fft_forward(len)
    }

    /// Transform `sequence`, returning a spectrum of the same length.
    pub fn transform(&mut self, sequence: ArrayView1<'_, f64>) -> Array1<Complex64> {
        if sequence.is_empty() {
            return Array1::zeros(0);
        }

        let fft = self.plan(sequence.len());
        let mut spectrum = Array1::zeros(sequence.len());
        transform_into(fft.as_ref(), sequence, spectrum.view_mut());
        spectrum
    }
}

impl Default for SequenceTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `fft` over `sequence` and write the spectrum into `out`.
///
/// `sequence` and `out` must both have length `fft.len()`.
pub(crate) fn transform_into(
    fft: &dyn Fft<f64>,
    sequence: ArrayView1<'_, f64>,
    mut out: ArrayViewMut1<'_, Complex64>,
) {
    let mut buffer: Vec<Complex64> = sequence
        .iter()
        .map(|&s| Complex64::new(s, 0.0))
        .collect();

    // Perform FFT
    fft.process(&mut buffer);

    for (slot, value) in out.iter_mut().zip(buffer) {
        *slot = value;
    }
}
