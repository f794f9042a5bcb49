use crate::error::{TransformError, TransformResult};

/// Matrix axis a transform runs along.
///
/// The external `dim` numbering is 1-based: `1` transforms each column,
/// `2` transforms each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformAxis {
    #[default]
    Columns,
    Rows,
}

impl TransformAxis {
    pub fn from_dim(dim: usize) -> TransformResult<Self> {
        match dim {
            1 => Ok(Self::Columns),
            2 => Ok(Self::Rows),
            _ => Err(TransformError::UnsupportedAxis {
                dim,
                variant: "matrix",
                expected: "1 (columns) or 2 (rows)",
            }),
        }
    }

    #[must_use]
    pub fn dim(self) -> usize {
        match self {
            Self::Columns => 1,
            Self::Rows => 2,
        }
    }

    /// The `ndarray` axis whose lanes are transformed.
    pub(crate) fn lane_axis(self) -> ndarray::Axis {
        match self {
            Self::Columns => ndarray::Axis(0),
            Self::Rows => ndarray::Axis(1),
        }
    }
}

impl TryFrom<usize> for TransformAxis {
    type Error = TransformError;

    fn try_from(dim: usize) -> TransformResult<Self> {
        Self::from_dim(dim)
    }
}
