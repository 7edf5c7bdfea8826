//! CUDA rotation kernel backed by [`GpuRuntime`].

use nalgebra::Matrix4;

use super::dispatch::RotationKernel;
use crate::error::TransformResult;
use crate::runtime::GpuRuntime;

/// Runs `compute_rotation_from_pose_kernel` on one CUDA device.
pub struct CudaRotationKernel {
    runtime: GpuRuntime,
}

impl CudaRotationKernel {
    pub fn new(device_id: usize) -> TransformResult<Self> {
        let runtime = GpuRuntime::with_device_id(device_id)?;
        Ok(Self { runtime })
    }
}

impl RotationKernel for CudaRotationKernel {
    fn name(&self) -> &'static str {
        "cuda"
    }

    fn compute_rotation(
        &self,
        pose: &[f32; 6],
        transformation: &mut Matrix4<f32>,
    ) -> TransformResult<()> {
        let result = self.runtime.compute_rotation_from_pose(pose)?;

        for r in 0..3 {
            for c in 0..3 {
                transformation[(r, c)] = result[r * 4 + c];
            }
        }
        Ok(())
    }
}
