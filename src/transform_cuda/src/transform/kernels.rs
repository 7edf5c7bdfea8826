//! CubeCL kernels for transform construction.

use cubecl::prelude::*;

/// Compute the rotation block of a 4x4 transform from a 6-DoF pose.
///
/// Device counterpart of `compute_rotation_from_pose_cpu`; the expressions
/// are kept in the same operand order so both paths agree to float rounding.
///
/// # Arguments
/// * `pose` - [6]: rx, ry, rz, tx, ty, tz (only the angles are read)
/// * `transformation` - [16] row-major 4x4; entries 0-2, 4-6 and 8-10 are written
///
/// # Rotation Convention
/// ZYX Euler angles: Rz(rz) * Ry(ry) * Rx(rx)
#[cube(launch_unchecked)]
pub fn compute_rotation_from_pose_kernel<F: Float>(
    pose: &Array<F>,
    transformation: &mut Array<F>,
) {
    // Single thread kernel
    if ABSOLUTE_POS != 0 {
        terminate!();
    }

    let sx = F::sin(pose[0]);
    let cx = F::cos(pose[0]);
    let sy = F::sin(pose[1]);
    let cy = F::cos(pose[1]);
    let sz = F::sin(pose[2]);
    let cz = F::cos(pose[2]);

    // Row 0
    transformation[0] = cz * cy;
    transformation[1] = F::new(0.0) - sz * cx + cz * sy * sx;
    transformation[2] = sz * sx + cz * sy * cx;

    // Row 1
    transformation[4] = sz * cy;
    transformation[5] = cz * cx + sz * sy * sx;
    transformation[6] = F::new(0.0) - cz * sx + sz * sy * cx;

    // Row 2
    transformation[8] = F::new(0.0) - sy;
    transformation[9] = cy * sx;
    transformation[10] = cy * cx;
}
