use ndarray::{Array1, Array2};
use rustfft::num_complex::Complex64;

use crate::axis::TransformAxis;
use crate::error::{TransformError, TransformResult};
use crate::matrix::MatrixTransform;
use crate::vector::VectorTransform;

/// Real input handed to a [`Transformer`] chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Sequence(Array1<f64>),
    Matrix(Array2<f64>),
}

impl Signal {
    fn shape_name(&self) -> &'static str {
        match self {
            Signal::Sequence(_) => "sequence",
            Signal::Matrix(_) => "matrix",
        }
    }
}

/// Complex output of [`Transformer::apply`], shaped like its [`Signal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Spectrum {
    Sequence(Array1<Complex64>),
    Matrix(Array2<Complex64>),
}

/// Closed set of transform variants.
///
/// Each variant only accepts the signal shape it was built for; handing it
/// anything else is reported as
/// [`TransformError::UnsupportedOperationForVariant`] without doing any work.
pub enum Transformer {
    Vector(VectorTransform),
    Matrix(MatrixTransform),
}

impl Transformer {
    pub fn vector() -> Self {
        Transformer::Vector(VectorTransform::new())
    }

    pub fn matrix() -> Self {
        Transformer::Matrix(MatrixTransform::new())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transformer::Vector(_) => "vector",
            Transformer::Matrix(_) => "matrix",
        }
    }

    /// Transform `signal`. `n` defaults to the native length of the
    /// transformed dimension and `dim` defaults to 1.
    pub fn apply(
        &mut self,
        signal: &Signal,
        n: Option<usize>,
        dim: Option<usize>,
    ) -> TransformResult<Spectrum> {
        let dim = dim.unwrap_or(1);
        match (self, signal) {
            (Transformer::Vector(vt), Signal::Sequence(x)) => {
                let n = n.unwrap_or(x.len());
                vt.transform_n_dim(x.view(), n, dim).map(Spectrum::Sequence)
            }
            (Transformer::Matrix(mt), Signal::Matrix(x)) => {
                let axis = TransformAxis::from_dim(dim)?;
                let n = n.unwrap_or(match axis {
                    TransformAxis::Columns => x.nrows(),
                    TransformAxis::Rows => x.ncols(),
                });
                mt.transform_along(x.view(), n, axis).map(Spectrum::Matrix)
            }
            (transformer, signal) => Err(TransformError::UnsupportedOperationForVariant {
                variant: transformer.name(),
                input: signal.shape_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Signal, Spectrum, Transformer};
    use crate::error::TransformError;
    use ndarray::{array, Array2};

    #[test]
    fn vector_variant_rejects_matrix_signal() {
        let signal = Signal::Matrix(Array2::zeros((2, 2)));
        assert_eq!(
            Transformer::vector().apply(&signal, None, None),
            Err(TransformError::UnsupportedOperationForVariant {
                variant: "vector",
                input: "matrix",
            })
        );
    }

    #[test]
    fn matrix_variant_rejects_sequence_signal() {
        let signal = Signal::Sequence(array![1.0, 2.0]);
        assert_eq!(
            Transformer::matrix().apply(&signal, Some(4), Some(1)),
            Err(TransformError::UnsupportedOperationForVariant {
                variant: "matrix",
                input: "sequence",
            })
        );
    }

    #[test]
    fn matrix_rows_default_to_column_count() {
        let signal = Signal::Matrix(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        match Transformer::matrix().apply(&signal, None, Some(2)) {
            Ok(Spectrum::Matrix(y)) => assert_eq!(y.dim(), (2, 3)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn sequence_respects_requested_length() {
        let signal = Signal::Sequence(array![1.0, 2.0, 3.0]);
        match Transformer::vector().apply(&signal, Some(8), None) {
            Ok(Spectrum::Sequence(y)) => assert_eq!(y.len(), 8),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
