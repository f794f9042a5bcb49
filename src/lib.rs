//! Discrete Fourier transforms of real sequences and matrices.
//!
//! Input is zero-padded or truncated to the requested length before a
//! forward DFT is applied. Matrices are transformed lane by lane along
//! either their columns (`dim` 1, the default) or their rows (`dim` 2).

pub mod axis;
pub mod error;
pub mod matrix;
pub mod normalize;
pub mod sequence;
pub mod spectrum;
pub mod transformer;
pub mod vector;

pub use axis::TransformAxis;
pub use error::{TransformError, TransformResult};
pub use matrix::MatrixTransform;
pub use normalize::{normalize, validate_len};
pub use rustfft::num_complex::Complex64;
pub use sequence::SequenceTransformer;
pub use spectrum::{frequency_bins, magnitude_spectrum, power_spectrum};
pub use transformer::{Signal, Spectrum, Transformer};
pub use vector::VectorTransform;
