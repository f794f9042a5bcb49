use std::sync::Arc;

use log::debug;
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, Zip};
use rayon::ThreadPool;
use rustfft::num_complex::Complex64;

use crate::axis::TransformAxis;
use crate::error::TransformResult;
use crate::normalize::{normalize, validate_len};
use crate::sequence::{transform_into, SequenceTransformer};

/// Column-wise or row-wise DFT of a real matrix.
///
/// Every lane (column or row) is resized to `n` and transformed on its own,
/// then written into its slot of a freshly allocated output. The input is
/// never modified.
pub struct MatrixTransform {
    sequence: SequenceTransformer,
    parallel: bool,
    pool: Option<Arc<ThreadPool>>,
}

impl MatrixTransform {
    pub fn new() -> Self {
        Self {
            sequence: SequenceTransformer::new(),
            parallel: true,
            pool: None,
        }
    }

    /// Process lanes on the rayon pool (`true`, the default) or in order.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run parallel lane work on `pool` instead of the global rayon pool.
    #[must_use]
    pub fn with_thread_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Transform each column at the native row count.
    pub fn transform(&mut self, x: ArrayView2<'_, f64>) -> TransformResult<Array2<Complex64>> {
        self.transform_along(x, x.nrows(), TransformAxis::Columns)
    }

    /// Transform each column resized to `n` samples; the result is `n x C`.
    pub fn transform_n(
        &mut self,
        x: ArrayView2<'_, f64>,
        n: usize,
    ) -> TransformResult<Array2<Complex64>> {
        self.transform_along(x, n, TransformAxis::Columns)
    }

    /// Transform along `dim` (1 = columns, 2 = rows) with lanes resized to `n`.
    pub fn transform_n_dim(
        &mut self,
        x: ArrayView2<'_, f64>,
        n: usize,
        dim: usize,
    ) -> TransformResult<Array2<Complex64>> {
        let axis = TransformAxis::from_dim(dim)?;
        self.transform_along(x, n, axis)
    }

    /// Columns give an `n x C` result, rows give `R x n`.
    pub fn transform_along(
        &mut self,
        x: ArrayView2<'_, f64>,
        n: usize,
        axis: TransformAxis,
    ) -> TransformResult<Array2<Complex64>> {
        let n = validate_len(n)?;
        let (rows, cols) = x.dim();
        let (shape, lane_count) = match axis {
            TransformAxis::Columns => ((n, cols), cols),
            TransformAxis::Rows => ((rows, n), rows),
        };
        let lane_axis = axis.lane_axis();
        debug!(
            "matrix transform: {}x{} along {:?}, {} lanes of {} points",
            rows, cols, axis, lane_count, n
        );

        let fft = self.sequence.plan(n);
        let mut output = Array2::zeros(shape);
        let lanes = Zip::from(output.lanes_mut(lane_axis)).and(x.lanes(lane_axis));
        let apply = |out: ArrayViewMut1<'_, Complex64>, lane: ArrayView1<'_, f64>| {
            transform_into(fft.as_ref(), normalize(lane, n).view(), out)
        };

        match (&self.pool, self.parallel) {
            (_, false) => lanes.for_each(apply),
            (Some(pool), true) => pool.install(|| lanes.par_for_each(apply)),
            (None, true) => lanes.par_for_each(apply),
        }

        Ok(output)
    }
}

impl Default for MatrixTransform {
    fn default() -> Self {
        Self::new()
    }
}
