use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

/// Errors raised before any transform work starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The axis is outside the set the transform variant accepts.
    #[error("unsupported axis {dim} for {variant} transform: expected {expected}")]
    UnsupportedAxis {
        dim: usize,
        variant: &'static str,
        expected: &'static str,
    },
    /// A transform variant was handed an input shape it does not process.
    #[error("{variant} transform cannot process {input} input")]
    UnsupportedOperationForVariant {
        variant: &'static str,
        input: &'static str,
    },
    #[error("transform length must be greater than zero")]
    ZeroLength,
    #[error("sample rate must be finite and greater than zero")]
    InvalidSampleRate,
}
