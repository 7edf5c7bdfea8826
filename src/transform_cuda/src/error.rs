//! Error types for transform construction.
//!
//! Every failure is detected synchronously before any arithmetic runs, and
//! none of them is recovered internally: a call either returns a complete
//! transformation or one of these errors.

use thiserror::Error;

use crate::tensor::{Device, Dtype};

/// Errors from tensor validation and kernel dispatch.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Dtype mismatch: expected {expected}, got {actual}")]
    DtypeMismatch { expected: Dtype, actual: Dtype },

    #[error("Device mismatch: expected {expected}, got {actual}")]
    DeviceMismatch { expected: Device, actual: Device },

    #[error("Unimplemented device {0}")]
    UnsupportedDevice(Device),

    #[error("Not compiled with CUDA, but {0} device is used")]
    BuildConfiguration(Device),

    #[error("Index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("Invalid device string: {0:?}")]
    InvalidDevice(String),

    #[error("CUDA runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
}

/// Result alias used throughout the crate.
pub type TransformResult<T> = Result<T, TransformError>;

impl TransformError {
    pub(crate) fn shape(expected: &[usize], actual: &[usize]) -> Self {
        TransformError::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TransformError::shape(&[3, 3], &[2, 2]);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: expected [3, 3], got [2, 2]"
        );

        let err = TransformError::BuildConfiguration(Device::cuda(0));
        assert_eq!(
            err.to_string(),
            "Not compiled with CUDA, but CUDA:0 device is used"
        );

        let err = TransformError::DtypeMismatch {
            expected: Dtype::Float32,
            actual: Dtype::Float64,
        };
        assert_eq!(
            err.to_string(),
            "Dtype mismatch: expected Float32, got Float64"
        );
    }
}
