// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for scaling, rotation and translation matrices.
//!
//! Every builder produces a matrix meant to be multiplied onto a column vector, `m * v`.
//! Transforms compose right to left: `(b * a) * v` applies `a` first, then `b`.
//!
//! The 3x3 `*2` builders and the 4x4 `*3` builders work in homogeneous coordinates, where a
//! point carries a trailing `1` (and a direction a trailing `0`, which translation ignores).

use crate::{
    matrix::Matrix,
    rotation::{angle::Angle, axis_angle_rows, planar_rows},
    utils::num::{FloatScalar, One, Zero},
    vector::{Vector2, Vector3},
};

#[cfg(test)]
mod tests;

/// Writes `linear` into the top-left corner of an identity matrix.
#[inline]
fn embed<T: Copy + Zero + One, const M: usize, const N: usize>(
    linear: [[T; M]; M],
) -> Matrix<T, N, N> {
    Matrix::from_fn(|row, col| match linear.get(row).and_then(|r| r.get(col)) {
        Some(elem) => *elem,
        None if row == col => T::ONE,
        None => T::ZERO,
    })
}

impl<T: Copy + Zero + One> Matrix<T, 2, 2> {
    /// Scales the `x` and `y` components by the components of `scale`.
    ///
    /// # Example
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix2x2, vector::Vector2};
    /// let scale = Matrix2x2::scaling(Vector2::new([5.0, 7.0]));
    /// assert_eq!(scale * Vector2::new([2.0, 3.0]), Vector2::new([10.0, 21.0]));
    /// ```
    #[must_use]
    #[inline]
    pub fn scaling(scale: Vector2<T>) -> Self {
        Matrix::from_diagonal(scale)
    }
}

impl<T: FloatScalar> Matrix<T, 2, 2> {
    /// Rotates counter-clockwise by `angle`.
    #[must_use]
    #[inline]
    pub fn rotation(angle: Angle<T>) -> Self {
        Matrix::new(planar_rows(angle))
    }
}

impl<T: Copy + Zero + One> Matrix<T, 3, 3> {
    /// A 2D scaling in homogeneous coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix3x3, vector::{Vector2, Vector3}};
    /// let scale = Matrix3x3::scaling2(Vector2::new([5.0, 7.0]));
    /// assert_eq!(scale.diagonal(), Vector3::new([5.0, 7.0, 1.0]));
    /// ```
    #[must_use]
    #[inline]
    pub fn scaling2(scale: Vector2<T>) -> Self {
        embed(Matrix::<T, 2, 2>::scaling(scale).to_array())
    }

    /// A 2D translation in homogeneous coordinates, with `offset` in the last column.
    ///
    /// # Example
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix3x3, vector::{Vector2, Vector3}};
    /// let translate = Matrix3x3::translation2(Vector2::new([4.0, -1.0]));
    /// assert_eq!(translate * Vector3::new([2.0, 3.0, 1.0]), Vector3::new([6.0, 2.0, 1.0]));
    /// ```
    #[must_use]
    #[inline]
    pub fn translation2(offset: Vector2<T>) -> Self {
        let mut matrix = Matrix::identity();
        matrix[0][2] = offset.x;
        matrix[1][2] = offset.y;
        matrix
    }

    /// Scales the `x`, `y` and `z` components by the components of `scale`.
    #[must_use]
    #[inline]
    pub fn scaling(scale: Vector3<T>) -> Self {
        Matrix::from_diagonal(scale)
    }
}

impl<T: FloatScalar> Matrix<T, 3, 3> {
    /// A 2D counter-clockwise rotation by `angle` in homogeneous coordinates.
    #[must_use]
    #[inline]
    pub fn rotation2(angle: Angle<T>) -> Self {
        embed(planar_rows(angle))
    }

    /// Rotates by `angle` around `axis`, counter-clockwise when looking down the axis towards
    /// the origin.
    ///
    /// `axis` does not have to be normalized. A zero axis gives `cos(angle)` times the
    /// identity matrix.
    #[must_use]
    #[inline]
    pub fn rotation(angle: Angle<T>, axis: Vector3<T>) -> Self {
        Matrix::new(axis_angle_rows(angle, axis))
    }
}

impl<T: Copy + Zero + One> Matrix<T, 4, 4> {
    /// A 3D scaling in homogeneous coordinates.
    #[must_use]
    #[inline]
    pub fn scaling3(scale: Vector3<T>) -> Self {
        embed(Matrix::<T, 3, 3>::scaling(scale).to_array())
    }

    /// A 3D translation in homogeneous coordinates, with `offset` in the last column.
    ///
    /// # Example
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix4x4, vector::Vector3};
    /// let translate = Matrix4x4::translation3(Vector3::new([1.0, 2.0, 3.0]));
    /// assert_eq!(translate.col(3).to_array(), [1.0, 2.0, 3.0, 1.0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn translation3(offset: Vector3<T>) -> Self {
        let mut matrix = Matrix::identity();
        for (row, elem) in offset.into_iter().enumerate() {
            matrix[row][3] = elem;
        }
        matrix
    }
}

impl<T: FloatScalar> Matrix<T, 4, 4> {
    /// A 3D rotation by `angle` around `axis` in homogeneous coordinates.
    ///
    /// The top-left 3x3 block is the matching 3x3 `rotation`.
    #[must_use]
    #[inline]
    pub fn rotation3(angle: Angle<T>, axis: Vector3<T>) -> Self {
        embed(axis_angle_rows(angle, axis))
    }
}
