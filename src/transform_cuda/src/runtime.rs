//! GPU runtime management for CubeCL CUDA execution.
//!
//! This module provides the CUDA side of transform construction:
//! - Device initialization and client management
//! - Pose upload, kernel launch and synchronous read-back
//!
//! Only compiled with the `cuda` feature.
//!
//! # Example
//!
//! ```ignore
//! use transform_cuda::runtime::GpuRuntime;
//!
//! let runtime = GpuRuntime::new()?;
//! let transformation = runtime.compute_rotation_from_pose(&[0.1, 0.2, 0.3, 1.0, 2.0, 3.0])?;
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::{anyhow, ensure, Result};
use cubecl::client::ComputeClient;
use cubecl::cuda::{CudaDevice, CudaRuntime};
use cubecl::prelude::*;

use crate::transform::kernels::compute_rotation_from_pose_kernel;

/// Type alias for CUDA compute client
type CudaClient = ComputeClient<<CudaRuntime as Runtime>::Server>;

/// GPU runtime for transform construction.
pub struct GpuRuntime {
    /// Compute client for kernel execution
    client: CudaClient,
}

impl GpuRuntime {
    /// Create a new GPU runtime with the default CUDA device.
    pub fn new() -> Result<Self> {
        Self::with_device_id(0)
    }

    /// Create a new GPU runtime with a specific CUDA device.
    ///
    /// Fails if the driver is missing or `device_id` does not name a device.
    pub fn with_device_id(device_id: usize) -> Result<Self> {
        // CubeCL panics when the device cannot be opened
        let client = catch_unwind(AssertUnwindSafe(|| {
            let device = CudaDevice::new(device_id);
            CudaRuntime::client(&device)
        }))
        .map_err(|_| anyhow!("failed to initialize CUDA device {device_id}"))?;

        Ok(Self { client })
    }

    /// Run the rotation kernel for one pose.
    ///
    /// Returns the full row-major 4x4 buffer. Only the rotation block is
    /// written by the kernel; every other entry is zero. The read-back blocks
    /// until the kernel has finished.
    pub fn compute_rotation_from_pose(&self, pose: &[f32; 6]) -> Result<[f32; 16]> {
        let zeros = [0.0f32; 16];

        let pose_gpu = self.client.create(f32::as_bytes(pose));
        let transformation_gpu = self.client.create(f32::as_bytes(&zeros));

        unsafe {
            compute_rotation_from_pose_kernel::launch_unchecked::<f32, CudaRuntime>(
                &self.client,
                CubeCount::Static(1, 1, 1),
                CubeDim::new(1, 1, 1),
                ArrayArg::from_raw_parts::<f32>(&pose_gpu, 6, 1),
                ArrayArg::from_raw_parts::<f32>(&transformation_gpu, 16, 1),
            );
        }

        let transformation_bytes = self.client.read_one(transformation_gpu);
        let values = f32::from_bytes(&transformation_bytes);
        ensure!(
            values.len() == 16,
            "expected 16 transformation values from device, got {}",
            values.len()
        );

        let mut transformation = [0.0f32; 16];
        transformation.copy_from_slice(values);
        Ok(transformation)
    }
}

/// Check if CUDA is available on this system.
pub fn is_cuda_available() -> bool {
    GpuRuntime::new().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{reference_rotation, sample_poses};

    /// Skip test at runtime if CUDA is not available.
    macro_rules! require_cuda {
        () => {
            if !is_cuda_available() {
                crate::test_println!("Skipping test: CUDA not available");
                return;
            }
        };
    }

    #[test]
    fn test_cuda_availability() {
        let _available = is_cuda_available();
        crate::test_println!("CUDA available: {_available}");
    }

    #[test]
    fn test_invalid_device_id_is_error() {
        let result = GpuRuntime::with_device_id(4096);
        let err = result.err().expect("device 4096 should not exist");
        assert!(err.to_string().contains("CUDA device 4096"));
    }

    #[test]
    fn test_rotation_kernel_zero_pose() {
        require_cuda!();

        let runtime = GpuRuntime::new().expect("Failed to create GPU runtime");
        let result = runtime
            .compute_rotation_from_pose(&[0.0, 0.0, 0.0, 5.0, 6.0, 7.0])
            .unwrap();

        #[rustfmt::skip]
        let expected = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(result, expected);
    }

    #[test]
    fn test_rotation_kernel_matches_reference() {
        require_cuda!();

        let runtime = GpuRuntime::new().expect("Failed to create GPU runtime");
        for pose in sample_poses() {
            let result = runtime.compute_rotation_from_pose(&pose).unwrap();
            let expected = reference_rotation(pose[0], pose[1], pose[2]);

            for r in 0..3 {
                for c in 0..3 {
                    let diff = (result[r * 4 + c] - expected[(r, c)]).abs();
                    assert!(
                        diff < 1e-5,
                        "Rotation mismatch at ({r}, {c}) for pose {pose:?}: GPU={}, expected={}",
                        result[r * 4 + c],
                        expected[(r, c)]
                    );
                }
            }
            // Translation column and bottom row are not touched by the kernel
            for i in 0..4 {
                assert_eq!(result[i * 4 + 3], 0.0);
                assert_eq!(result[12 + i], 0.0);
            }
        }
    }
}
