//! CubeCL-based rigid transform construction for CPU and CUDA.
//!
//! This library builds 4x4 homogeneous transformation matrices for
//! registration pipelines from either:
//! - an explicit 3x3 rotation and 3-vector translation, or
//! - a 6-DoF pose `[rx, ry, rz, tx, ty, tz]` (ZYX Euler angles in radians).
//!
//! All values are single precision. The pose path computes its rotation block
//! with a kernel chosen by the input's device; the CPU and CUDA kernels
//! evaluate the same closed-form expansion and agree to float rounding.
//!
//! # Features
//!
//! - `cuda`: compile the CUDA runtime and kernel dispatch. Without it, a pose
//!   on a CUDA device is rejected with [`TransformError::BuildConfiguration`].
//! - `test-verbose`: print diagnostics from tests.
//!
//! # Usage
//!
//! ```
//! use transform_cuda::{compute_transformation_from_rt, Device, Tensor};
//!
//! let rotation = Tensor::from_vec(
//!     vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
//!     &[3, 3],
//!     Device::cpu(),
//! )?;
//! let translation = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3], Device::cpu())?;
//!
//! let transformation = compute_transformation_from_rt(&rotation, &translation)?;
//! assert_eq!(transformation.get(&[2, 3])?, 3.0);
//! # Ok::<(), transform_cuda::TransformError>(())
//! ```

pub mod error;
#[cfg(feature = "cuda")]
pub mod runtime;
pub mod tensor;
pub mod test_utils;
pub mod transform;

pub use error::{TransformError, TransformResult};
pub use tensor::{Device, DeviceType, Dtype, Tensor};
pub use transform::{
    compute_transformation_from_pose, compute_transformation_from_rt, pose_to_matrix,
    rigid_to_matrix, select_rotation_kernel, CpuRotationKernel, RotationKernel,
};

// GPU runtime (optional, for direct GPU access)
#[cfg(feature = "cuda")]
pub use runtime::{is_cuda_available, GpuRuntime};

/// Print only when the `test-verbose` feature is enabled.
#[doc(hidden)]
#[macro_export]
macro_rules! test_println {
    ($($arg:tt)*) => {
        #[cfg(feature = "test-verbose")]
        {
            println!($($arg)*);
        }
    };
}
