//! CPU scalar rotation kernel.

use nalgebra::Matrix4;

/// Write the rotation block of `transformation` from the Euler angles of `pose`.
///
/// `pose` is `[rx, ry, rz, tx, ty, tz]`; only the angles are read. The rotation
/// is `Rz(rz) * Ry(ry) * Rx(rx)`, expanded in closed form. Entries outside the
/// top-left 3x3 block are left untouched.
///
/// The operand order matches `compute_rotation_from_pose_kernel` term for term.
pub fn compute_rotation_from_pose_cpu(pose: &[f32; 6], transformation: &mut Matrix4<f32>) {
    let sx = pose[0].sin();
    let cx = pose[0].cos();
    let sy = pose[1].sin();
    let cy = pose[1].cos();
    let sz = pose[2].sin();
    let cz = pose[2].cos();

    // Row 0
    transformation[(0, 0)] = cz * cy;
    transformation[(0, 1)] = -sz * cx + cz * sy * sx;
    transformation[(0, 2)] = sz * sx + cz * sy * cx;

    // Row 1
    transformation[(1, 0)] = sz * cy;
    transformation[(1, 1)] = cz * cx + sz * sy * sx;
    transformation[(1, 2)] = -cz * sx + sz * sy * cx;

    // Row 2
    transformation[(2, 0)] = -sy;
    transformation[(2, 1)] = cy * sx;
    transformation[(2, 2)] = cy * cx;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_zero_angles_give_identity() {
        let mut m = Matrix4::zeros();
        compute_rotation_from_pose_cpu(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0], &mut m);

        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_eq!(m[(r, c)], expected, "entry ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_only_rotation_block_written() {
        let mut m = Matrix4::from_element(7.0);
        compute_rotation_from_pose_cpu(&[0.3, -0.2, 0.1, 0.0, 0.0, 0.0], &mut m);

        for i in 0..4 {
            assert_eq!(m[(i, 3)], 7.0);
            assert_eq!(m[(3, i)], 7.0);
        }
    }

    #[test]
    fn test_yaw_quarter_turn() {
        // Rotating +90° about Z maps X to Y.
        let mut m = Matrix4::zeros();
        compute_rotation_from_pose_cpu(&[0.0, 0.0, FRAC_PI_2, 0.0, 0.0, 0.0], &mut m);

        assert_relative_eq!(m[(0, 0)], 0.0, epsilon = 1e-6);
        assert_relative_eq!(m[(1, 0)], 1.0, epsilon = 1e-6);
        assert_relative_eq!(m[(0, 1)], -1.0, epsilon = 1e-6);
        assert_relative_eq!(m[(2, 2)], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_quarter_turn() {
        // Rotating +90° about Y maps Z to X.
        let mut m = Matrix4::zeros();
        compute_rotation_from_pose_cpu(&[0.0, FRAC_PI_2, 0.0, 0.0, 0.0, 0.0], &mut m);

        assert_relative_eq!(m[(0, 2)], 1.0, epsilon = 1e-6);
        assert_relative_eq!(m[(2, 0)], -1.0, epsilon = 1e-6);
        assert_relative_eq!(m[(1, 1)], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_roll_quarter_turn() {
        // Rotating +90° about X maps Y to Z.
        let mut m = Matrix4::zeros();
        compute_rotation_from_pose_cpu(&[FRAC_PI_2, 0.0, 0.0, 0.0, 0.0, 0.0], &mut m);

        assert_relative_eq!(m[(2, 1)], 1.0, epsilon = 1e-6);
        assert_relative_eq!(m[(1, 2)], -1.0, epsilon = 1e-6);
        assert_relative_eq!(m[(0, 0)], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_entries_use_separate_sin_cos() {
        let (rx, ry, rz) = (0.4f32, -1.3f32, 2.2f32);
        let mut m = Matrix4::zeros();
        compute_rotation_from_pose_cpu(&[rx, ry, rz, 0.0, 0.0, 0.0], &mut m);

        assert_eq!(m[(0, 0)], rz.cos() * ry.cos());
        assert_eq!(m[(2, 0)], -ry.sin());
        assert_eq!(m[(2, 1)], ry.cos() * rx.sin());
        assert_eq!(m[(2, 2)], ry.cos() * rx.cos());
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let mut m = Matrix4::zeros();
        compute_rotation_from_pose_cpu(&[0.7, -1.1, 2.4, 0.0, 0.0, 0.0], &mut m);

        let r = m.fixed_view::<3, 3>(0, 0).into_owned();
        let rtr = r.transpose() * r;
        assert_relative_eq!(rtr, nalgebra::Matrix3::identity(), epsilon = 1e-5);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-5);
    }
}
