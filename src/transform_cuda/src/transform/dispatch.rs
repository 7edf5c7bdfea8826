//! Device dispatch for the rotation kernel.
//!
//! The CPU kernel is always available. The CUDA kernel exists only when the
//! crate is built with the `cuda` feature; asking for a CUDA device otherwise
//! is an error, never a fallback to CPU.

use nalgebra::Matrix4;

use super::cpu::compute_rotation_from_pose_cpu;
use crate::error::{TransformError, TransformResult};
use crate::tensor::{Device, DeviceType};

/// Backend that fills the rotation block of a transform from pose angles.
pub trait RotationKernel {
    /// Short backend name for logging.
    fn name(&self) -> &'static str;

    /// Write the top-left 3x3 block of `transformation` from `pose`.
    ///
    /// Must leave every other entry untouched and must finish all device work
    /// before returning.
    fn compute_rotation(
        &self,
        pose: &[f32; 6],
        transformation: &mut Matrix4<f32>,
    ) -> TransformResult<()>;
}

/// Scalar host implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuRotationKernel;

impl RotationKernel for CpuRotationKernel {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn compute_rotation(
        &self,
        pose: &[f32; 6],
        transformation: &mut Matrix4<f32>,
    ) -> TransformResult<()> {
        compute_rotation_from_pose_cpu(pose, transformation);
        Ok(())
    }
}

/// Pick the rotation kernel for `device`.
pub fn select_rotation_kernel(device: Device) -> TransformResult<Box<dyn RotationKernel>> {
    let kernel: Box<dyn RotationKernel> = match device.device_type() {
        DeviceType::Cpu => Box::new(CpuRotationKernel),
        DeviceType::Cuda => cuda_rotation_kernel(device)?,
        DeviceType::Sycl => {
            tracing::error!(%device, "Unimplemented device");
            return Err(TransformError::UnsupportedDevice(device));
        }
    };

    tracing::debug!(%device, kernel = kernel.name(), "Selected rotation kernel");
    Ok(kernel)
}

#[cfg(feature = "cuda")]
fn cuda_rotation_kernel(device: Device) -> TransformResult<Box<dyn RotationKernel>> {
    let kernel = super::gpu::CudaRotationKernel::new(device.id())?;
    Ok(Box::new(kernel))
}

#[cfg(not(feature = "cuda"))]
fn cuda_rotation_kernel(device: Device) -> TransformResult<Box<dyn RotationKernel>> {
    tracing::error!(%device, "Not compiled with CUDA, but CUDA device is used");
    Err(TransformError::BuildConfiguration(device))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_selected_for_cpu_device() {
        let kernel = select_rotation_kernel(Device::cpu()).unwrap();
        assert_eq!(kernel.name(), "cpu");
    }

    #[test]
    fn test_sycl_is_unsupported() {
        let result = select_rotation_kernel(Device::sycl(0));
        assert!(matches!(
            result,
            Err(TransformError::UnsupportedDevice(d)) if d == Device::sycl(0)
        ));
    }

    #[cfg(not(feature = "cuda"))]
    #[test]
    fn test_cuda_without_feature_is_build_error() {
        let result = select_rotation_kernel(Device::cuda(0));
        assert!(matches!(
            result,
            Err(TransformError::BuildConfiguration(d)) if d == Device::cuda(0)
        ));
    }

    #[test]
    fn test_cpu_kernel_leaves_other_entries() {
        let mut m = Matrix4::from_element(-3.0);
        CpuRotationKernel
            .compute_rotation(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0], &mut m)
            .unwrap();

        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(m[(0, 3)], -3.0);
        assert_eq!(m[(3, 3)], -3.0);
    }
}
