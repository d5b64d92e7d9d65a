// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Matrix, Matrix2x2, Matrix3x3, Matrix4x4, Matrix4x4f},
    rotation::angle::Angle,
    utils::num::Zero,
    vector::{Vector, Vector2, Vector3, Vector3f, Vector4, Vector4f},
};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6};

#[test]
fn test_scaling() {
    let s = Matrix2x2::scaling(Vector2::new([5.0, 7.0]));
    assert_eq!(s * Vector2::new([2.0, 3.0]), Vector2::new([10.0, 21.0]));

    let s = Matrix3x3::scaling2(Vector2::new([5.0, 7.0]));
    assert_eq!(
        s * Vector3::new([2.0, 3.0, 1.0]),
        Vector3::new([10.0, 21.0, 1.0])
    );

    let s = Matrix3x3::scaling(Vector3::new([7.0, 11.0, 13.0]));
    assert_eq!(
        s * Vector3::new([2.0, 3.0, 5.0]),
        Vector3::new([14.0, 33.0, 65.0])
    );

    let s = Matrix4x4::scaling3(Vector3::new([7.0, 11.0, 13.0]));
    assert_eq!(
        s * Vector4::new([2.0, 3.0, 5.0, 1.0]),
        Vector4::new([14.0, 33.0, 65.0, 1.0])
    );

    #[rustfmt::skip]
    assert_eq!(s, Matrix::new([
        [7.0, 0.00, 0.00, 0.0],
        [0.0, 11.0, 0.00, 0.0],
        [0.0, 0.00, 13.0, 0.0],
        [0.0, 0.00, 0.00, 1.0],
    ]));
}

#[test]
fn test_planar_rotation() {
    let r = Matrix2x2::rotation(Angle::Radians(FRAC_PI_2));
    assert_abs_diff_eq!(
        r * Vector2::new([2.0, 3.0]),
        Vector2::new([-3.0, 2.0]),
        epsilon = 1e-12
    );

    let r = Matrix3x3::rotation2(Angle::Radians(-FRAC_PI_2));
    assert_abs_diff_eq!(
        r * Vector3::new([2.0, 3.0, 1.0]),
        Vector3::new([3.0, -2.0, 1.0]),
        epsilon = 1e-12
    );

    assert_relative_eq!(
        Matrix2x2::rotation(Angle::Degrees(90.0)),
        Matrix2x2::rotation(Angle::Radians(FRAC_PI_2)),
        epsilon = 1e-12
    );
}

#[test]
fn test_axis_rotation() {
    let a = Vector3::new([2.0, 3.0, 5.0]);
    let quarter = Angle::Radians(FRAC_PI_2);

    let rx = Matrix3x3::rotation(quarter, Vector3::new([1.0, 0.0, 0.0]));
    assert_abs_diff_eq!(rx * a, Vector3::new([2.0, -5.0, 3.0]), epsilon = 1e-12);

    let ry = Matrix3x3::rotation(quarter, Vector3::new([0.0, 1.0, 0.0]));
    assert_abs_diff_eq!(ry * a, Vector3::new([5.0, 3.0, -2.0]), epsilon = 1e-12);

    let rz = Matrix3x3::rotation(quarter, Vector3::new([0.0, 0.0, 1.0]));
    assert_abs_diff_eq!(rz * a, Vector3::new([-3.0, 2.0, 5.0]), epsilon = 1e-12);

    let a = Vector4::new([2.0, 3.0, 5.0, 1.0]);
    let quarter = Angle::Radians(-FRAC_PI_2);

    let rx = Matrix4x4::rotation3(quarter, Vector3::new([1.0, 0.0, 0.0]));
    assert_abs_diff_eq!(rx * a, Vector4::new([2.0, 5.0, -3.0, 1.0]), epsilon = 1e-12);

    let ry = Matrix4x4::rotation3(quarter, Vector3::new([0.0, 1.0, 0.0]));
    assert_abs_diff_eq!(ry * a, Vector4::new([-5.0, 3.0, 2.0, 1.0]), epsilon = 1e-12);

    let rz = Matrix4x4::rotation3(quarter, Vector3::new([0.0, 0.0, 1.0]));
    assert_abs_diff_eq!(rz * a, Vector4::new([3.0, -2.0, 5.0, 1.0]), epsilon = 1e-12);
}

#[test]
fn test_single_precision_rotation() {
    let a = Vector4f::new([2.0, 3.0, 5.0, 1.0]);
    let rx = Matrix4x4f::rotation3(
        Angle::Radians(-core::f32::consts::FRAC_PI_2),
        Vector3f::new([1.0, 0.0, 0.0]),
    );
    assert_abs_diff_eq!(rx * a, Vector4f::new([2.0, 5.0, -3.0, 1.0]), epsilon = 1e-5);
}

#[test]
fn test_axis_is_normalized() {
    let angle = Angle::Degrees(40.0);
    let unit = Matrix3x3::rotation(angle, Vector3::new([0.0, 0.0, 1.0]));
    let long = Matrix3x3::rotation(angle, Vector3::new([0.0, 0.0, 12.5]));
    assert_relative_eq!(unit, long, epsilon = 1e-12);

    let axis = Vector3::new([1.0, -2.0, 0.5]);
    let r = Matrix3x3::rotation(angle, axis);

    // Points on the axis stay put.
    assert_relative_eq!(r * axis, axis, epsilon = 1e-12);

    // A zero axis leaves only the `cos` term on the diagonal.
    let r = Matrix3x3::rotation(Angle::Radians(FRAC_PI_3), Vector3::ZERO);
    assert_relative_eq!(r, Matrix3x3::identity() * FRAC_PI_3.cos(), epsilon = 1e-12);
}

#[test]
fn test_rotation_is_orthogonal() {
    let r = Matrix4x4::rotation3(Angle::Degrees(73.0), Vector3::new([0.3, 0.4, -1.2]));

    assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(r.inverse(), r.transpose(), epsilon = 1e-12);
    assert_relative_eq!(r * r.transpose(), Matrix4x4::identity(), epsilon = 1e-12);

    // Rotating back by the negated angle undoes the rotation.
    let axis = Vector3::new([0.3, 0.4, -1.2]);
    let back = Matrix4x4::rotation3(-Angle::Degrees(73.0), axis);
    assert_relative_eq!(back * r, Matrix4x4::identity(), epsilon = 1e-12);
    assert_relative_eq!(back, r.transpose(), epsilon = 1e-12);
}

#[test]
fn test_translation() {
    let t = Matrix3x3::translation2(Vector2::new([4.0, -1.0]));
    assert_eq!(
        t * Vector3::new([2.0, 3.0, 1.0]),
        Vector3::new([6.0, 2.0, 1.0])
    );

    let t = Matrix4x4::translation3(Vector3::new([1.0, 2.0, 3.0]));
    assert_eq!(
        t * Vector4::new([2.0, 3.0, 5.0, 1.0]),
        Vector4::new([3.0, 5.0, 8.0, 1.0])
    );

    // Directions ignore translation.
    let direction = Vector4::new([2.0, 3.0, 5.0, 0.0]);
    assert_eq!(t * direction, direction);

    assert_eq!(
        t.inverse(),
        Matrix4x4::translation3(Vector3::new([-1.0, -2.0, -3.0]))
    );
}

#[test]
fn test_composition_order() {
    let scale = Matrix3x3::scaling2(Vector2::new([2.0, 2.0]));
    let translate = Matrix3x3::translation2(Vector2::new([4.0, -1.0]));
    let v = Vector3::new([1.0, 1.0, 1.0]);

    // Scale first, then translate.
    let scale_then_translate = translate * scale;
    assert_eq!(scale_then_translate * v, translate * (scale * v));
    assert_eq!(scale_then_translate * v, Vector3::new([6.0, 1.0, 1.0]));

    let translate_then_scale = scale * translate;
    assert_eq!(translate_then_scale * v, Vector3::new([10.0, 0.0, 1.0]));
    assert_ne!(scale_then_translate, translate_then_scale);

    let sixth = Angle::Radians(FRAC_PI_6);
    let axis = Vector3::new([0.0, 1.0, 1.0]);
    let twice = Matrix4x4::rotation3(sixth, axis) * Matrix4x4::rotation3(sixth, axis);
    assert_relative_eq!(
        twice,
        Matrix4x4::rotation3(Angle::Radians(FRAC_PI_3), axis),
        epsilon = 1e-12
    );

    let p = Vector::new([1.0, 2.0, 3.0, 1.0]);
    let moved = Matrix4x4::translation3(Vector3::new([0.0, 0.0, -3.0]))
        * Matrix4x4::rotation3(Angle::Degrees(90.0), Vector3::new([0.0, 0.0, 1.0]));
    assert_abs_diff_eq!(moved * p, Vector4::new([-2.0, 1.0, 0.0, 1.0]), epsilon = 1e-12);
}
