use ndarray::{Array1, ArrayView1};

use crate::error::{TransformError, TransformResult};

/// Resize `sequence` to exactly `n` samples.
///
/// Shorter input is zero-padded at the tail, longer input keeps its first `n`
/// samples, and input of length `n` is returned unchanged. Callers validate
/// `n` with [`validate_len`] first.
pub fn normalize(sequence: ArrayView1<'_, f64>, n: usize) -> Array1<f64> {
    // Zero-pad or truncate to the target length
    let mut buffer: Vec<f64> = sequence.iter().take(n).copied().collect();
    buffer.resize(n, 0.0);
    Array1::from(buffer)
}

/// Reject a zero transform length.
pub fn validate_len(n: usize) -> TransformResult<usize> {
    if n == 0 {
        return Err(TransformError::ZeroLength);
    }
    Ok(n)
}
