//! Test utilities: reference rotations and sample poses.
//!
//! The reference rotation is built independently of the crate's kernels,
//! through nalgebra's Euler-angle constructor, so kernel output can be
//! checked against a known ZYX composition.

use nalgebra::{Matrix3, Rotation3};

/// Rotation `Rz(rz) * Ry(ry) * Rx(rx)` built by nalgebra.
///
/// `Rotation3::from_euler_angles(roll, pitch, yaw)` composes in exactly this
/// order, so it serves as the ground truth for the closed-form kernels.
pub fn reference_rotation(rx: f32, ry: f32, rz: f32) -> Matrix3<f32> {
    Rotation3::from_euler_angles(rx, ry, rz).into_inner()
}

/// Same rotation built as an explicit product of the three axis rotations.
pub fn reference_rotation_from_axes(rx: f32, ry: f32, rz: f32) -> Matrix3<f32> {
    let rot_x = Rotation3::from_axis_angle(&nalgebra::Vector3::x_axis(), rx);
    let rot_y = Rotation3::from_axis_angle(&nalgebra::Vector3::y_axis(), ry);
    let rot_z = Rotation3::from_axis_angle(&nalgebra::Vector3::z_axis(), rz);
    (rot_z * rot_y * rot_x).into_inner()
}

/// Poses `[rx, ry, rz, tx, ty, tz]` covering zero, small, negative, large and
/// gimbal-lock angles.
pub fn sample_poses() -> Vec<[f32; 6]> {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    vec![
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 2.0, 3.0],
        [0.1, 0.2, 0.3, 1.0, 2.0, 3.0],
        [-1.0, 0.5, -0.3, -0.2, 0.15, -0.1],
        [FRAC_PI_4, -FRAC_PI_4, FRAC_PI_4, 10.0, -20.0, 30.0],
        [FRAC_PI_2, 0.0, PI, 10.0, 20.0, 30.0],
        [0.3, FRAC_PI_2, -0.7, 0.0, 0.0, 0.0],
        [2.5, -2.9, 3.1, -100.0, 50.0, 0.5],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_builders_agree() {
        for pose in sample_poses() {
            let a = reference_rotation(pose[0], pose[1], pose[2]);
            let b = reference_rotation_from_axes(pose[0], pose[1], pose[2]);
            assert_relative_eq!(a, b, epsilon = 1e-5);
        }
    }
}
