use log::trace;
use ndarray::{Array1, ArrayView1};
use rustfft::num_complex::Complex64;

use crate::error::{TransformError, TransformResult};
use crate::normalize::{normalize, validate_len};
use crate::sequence::SequenceTransformer;

/// DFT of a single real sequence, resized to the requested length first.
#[derive(Default)]
pub struct VectorTransform {
    sequence: SequenceTransformer,
}

impl VectorTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform `x` at its native length.
    pub fn transform(&mut self, x: ArrayView1<'_, f64>) -> TransformResult<Array1<Complex64>> {
        self.transform_n(x, x.len())
    }

    /// Zero-pad or truncate `x` to `n` samples, then transform.
    pub fn transform_n(
        &mut self,
        x: ArrayView1<'_, f64>,
        n: usize,
    ) -> TransformResult<Array1<Complex64>> {
        let n = validate_len(n)?;
        trace!("vector transform: {} samples -> {} points", x.len(), n);
        let normalized = normalize(x, n);
        Ok(self.sequence.transform(normalized.view()))
    }

    /// Same as [`Self::transform_n`]; a sequence only has `dim` 1.
    pub fn transform_n_dim(
        &mut self,
        x: ArrayView1<'_, f64>,
        n: usize,
        dim: usize,
    ) -> TransformResult<Array1<Complex64>> {
        if dim != 1 {
            return Err(TransformError::UnsupportedAxis {
                dim,
                variant: "vector",
                expected: "1",
            });
        }
        self.transform_n(x, n)
    }
}
