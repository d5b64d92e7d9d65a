// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{rotation::angle::Angle, utils::num::FloatScalar, vector::Vector3};

pub mod angle;

/// The rows of the 3x3 matrix rotating by `angle` around `axis`, following Rodrigues' rotation
/// formula `R = a⊗a (1 - cos θ) + I cos θ + [a]× sin θ` for the unit axis `a`.
///
/// `axis` is normalized first. A zero axis stays zero, which leaves `I cos θ`.
#[must_use]
pub(crate) fn axis_angle_rows<T: FloatScalar>(angle: Angle<T>, axis: Vector3<T>) -> [[T; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    let omc = T::ONE - cos;
    let [x, y, z] = axis.normalized().to_array();

    [
        [
            (x * x * omc) + cos,
            (x * y * omc) - (z * sin),
            (x * z * omc) + (y * sin),
        ],
        [
            (y * x * omc) + (z * sin),
            (y * y * omc) + cos,
            (y * z * omc) - (x * sin),
        ],
        [
            (x * z * omc) - (y * sin),
            (y * z * omc) + (x * sin),
            (z * z * omc) + cos,
        ],
    ]
}

/// The rows of the 2x2 counter-clockwise rotation by `angle`.
#[must_use]
pub(crate) fn planar_rows<T: FloatScalar>(angle: Angle<T>) -> [[T; 2]; 2] {
    let (sin, cos) = angle.sin_cos();
    [[cos, -sin], [sin, cos]]
}
