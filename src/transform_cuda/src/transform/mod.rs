//! Homogeneous transformation matrices from rigid-body parameters.
//!
//! Two entry points build a 4x4 `Float32` transform:
//! - [`compute_transformation_from_rt`]: explicit 3x3 rotation + 3-vector translation
//! - [`compute_transformation_from_pose`]: 6-DoF pose `[rx, ry, rz, tx, ty, tz]`
//!
//! Inputs are validated (shape, dtype, device) before anything is written.
//! The pose path dispatches the rotation block to a device kernel
//! (see [`select_rotation_kernel`]); the translation column and the
//! homogeneous corner are filled the same way on every backend.
//!
//! # Example
//!
//! ```
//! use transform_cuda::tensor::{Device, Tensor};
//! use transform_cuda::transform::compute_transformation_from_pose;
//!
//! let pose = Tensor::from_vec(vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0], &[6], Device::cpu()).unwrap();
//! let transformation = compute_transformation_from_pose(&pose).unwrap();
//! assert_eq!(transformation.get(&[1, 3]).unwrap(), 2.0);
//! ```

pub mod cpu;
mod dispatch;
#[cfg(feature = "cuda")]
pub mod gpu;
pub mod kernels;

pub use cpu::compute_rotation_from_pose_cpu;
pub use dispatch::{select_rotation_kernel, CpuRotationKernel, RotationKernel};
#[cfg(feature = "cuda")]
pub use gpu::CudaRotationKernel;

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::error::TransformResult;
use crate::tensor::{Dtype, Tensor};

/// Compose a rotation matrix and translation vector into a 4x4 transform.
///
/// `rotation` must be 3x3 `Float32`; `translation` must be shape `[3]`,
/// `Float32`, on the same device. The rotation is copied verbatim (no
/// orthonormality check). The output lives on the rotation's device.
pub fn compute_transformation_from_rt(
    rotation: &Tensor,
    translation: &Tensor,
) -> TransformResult<Tensor> {
    let dtype = Dtype::Float32;
    let device = rotation.device();

    rotation.assert_shape(&[3, 3])?;
    rotation.assert_dtype(dtype)?;
    translation.assert_shape(&[3])?;
    translation.assert_device(device)?;
    translation.assert_dtype(dtype)?;

    let mut transformation = Tensor::zeros(&[4, 4], dtype, device);

    // Rotation
    transformation.set_block(0..3, 0..3, rotation)?;
    // Translation (scale is always 1)
    transformation.set_block(0..3, 3..4, &translation.reshape(&[3, 1])?)?;
    transformation.set(&[3, 3], 1.0)?;

    Ok(transformation)
}

/// Build a 4x4 transform from a 6-DoF pose `[rx, ry, rz, tx, ty, tz]`.
///
/// The rotation is `Rz(rz) * Ry(ry) * Rx(rx)` and is computed by the kernel
/// matching the pose's device. A CUDA pose in a build without the `cuda`
/// feature fails with `BuildConfiguration`; devices other than CPU and CUDA
/// fail with `UnsupportedDevice`.
pub fn compute_transformation_from_pose(pose: &Tensor) -> TransformResult<Tensor> {
    let dtype = Dtype::Float32;
    pose.assert_shape(&[6])?;
    pose.assert_dtype(dtype)?;
    let device = pose.device();

    let kernel = select_rotation_kernel(device)?;

    let values = pose.contiguous();
    let mut pose_params = [0.0f32; 6];
    pose_params.copy_from_slice(values.as_f32_slice()?);

    let mut transformation = Matrix4::zeros();
    kernel.compute_rotation(&pose_params, &mut transformation)?;

    // Translation from pose, independent of the rotation backend
    let translation = pose.get_slice(3..6)?;
    let translation = translation.as_f32_slice()?;
    for (r, &value) in translation.iter().enumerate() {
        transformation[(r, 3)] = value;
    }
    transformation[(3, 3)] = 1.0;

    Ok(Tensor::from_matrix4(&transformation, device))
}

/// Compose a rotation and translation on the host.
pub fn rigid_to_matrix(rotation: &Matrix3<f32>, translation: &Vector3<f32>) -> Matrix4<f32> {
    let mut transformation = Matrix4::zeros();
    transformation.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    transformation.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    transformation[(3, 3)] = 1.0;
    transformation
}

/// Build a transform from a pose on the host using the CPU kernel.
pub fn pose_to_matrix(pose: &[f32; 6]) -> Matrix4<f32> {
    let mut transformation = Matrix4::zeros();
    compute_rotation_from_pose_cpu(pose, &mut transformation);
    transformation[(0, 3)] = pose[3];
    transformation[(1, 3)] = pose[4];
    transformation[(2, 3)] = pose[5];
    transformation[(3, 3)] = 1.0;
    transformation
}
