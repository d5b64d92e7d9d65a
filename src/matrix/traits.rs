// SPDX-License-Identifier: MIT OR Apache-2.0

//! The operation sets shared by every matrix shape, for code that is generic over shapes.

use crate::{
    matrix::Matrix,
    utils::num::{Scalar, Zero},
    vector::Vector,
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Operations available on a matrix of any shape.
///
/// # Examples
///
/// ```
/// # use smallmat::{DenseMatrix, matrix::Matrix2x3, vector::Vector3};
/// fn project<M: DenseMatrix>(matrix: M, v: M::Row) -> M::Column {
///     matrix.mul_vector(v)
/// }
///
/// let matrix = Matrix2x3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
/// assert_eq!(project(matrix, Vector3::new([4.0, 5.0, 6.0])).to_array(), [4.0, 5.0]);
/// ```
pub trait DenseMatrix:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
where
    Self: Mul<<Self as DenseMatrix>::Scalar, Output = Self>,
    Self: Div<<Self as DenseMatrix>::Scalar, Output = Self>,
    Self: MulAssign<<Self as DenseMatrix>::Scalar>,
    Self: DivAssign<<Self as DenseMatrix>::Scalar>,
{
    type Scalar: Scalar;

    /// A vector as long as one row: the operand of `matrix * vector`.
    type Row;

    /// A vector as long as one column: the result of `matrix * vector`.
    type Column;

    type Transpose: DenseMatrix<Scalar = Self::Scalar, Transpose = Self>;

    const ROW_COUNT: usize;
    const COLUMN_COUNT: usize;

    #[must_use]
    fn zero() -> Self;

    #[must_use]
    fn transpose(self) -> Self::Transpose;

    /// Multiplies every element by `factor`.
    #[must_use]
    fn scale(self, factor: Self::Scalar) -> Self;

    /// `self * vector`: each result element is the dot product of a row with `vector`.
    #[must_use]
    fn mul_vector(self, vector: Self::Row) -> Self::Column;

    /// `vector * self`: each result element is the dot product of `vector` with a column.
    #[must_use]
    fn vector_mul(self, vector: Self::Column) -> Self::Row;
}

/// Operations that only make sense when the number of rows and columns agree.
pub trait SquareMatrix: DenseMatrix<Transpose = Self> + Mul<Output = Self> + MulAssign {
    #[must_use]
    fn identity() -> Self;

    #[must_use]
    fn determinant(self) -> Self::Scalar;

    #[must_use]
    fn adjugate(self) -> Self;

    /// The inverse computed from the adjugate and the determinant. A singular matrix gives
    /// non-finite elements.
    #[must_use]
    fn inverse(self) -> Self;

    /// The inverse, or `None` if the determinant is exactly zero.
    #[must_use]
    fn inverse_checked(self) -> Option<Self>;

    #[must_use]
    #[inline]
    fn has_inverse(self) -> bool {
        self.determinant() != <Self::Scalar as Zero>::ZERO
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> DenseMatrix for Matrix<T, ROWS, COLS> {
    type Scalar = T;
    type Row = Vector<T, COLS>;
    type Column = Vector<T, ROWS>;
    type Transpose = Matrix<T, COLS, ROWS>;

    const ROW_COUNT: usize = ROWS;
    const COLUMN_COUNT: usize = COLS;

    #[inline]
    fn zero() -> Self {
        Zero::ZERO
    }

    #[inline]
    fn transpose(self) -> Self::Transpose {
        Matrix::transpose(self)
    }

    #[inline]
    fn scale(self, factor: T) -> Self {
        self * factor
    }

    #[inline]
    fn mul_vector(self, vector: Self::Row) -> Self::Column {
        self * vector
    }

    #[inline]
    fn vector_mul(self, vector: Self::Column) -> Self::Row {
        vector * self
    }
}

impl<T: Scalar, const N: usize> SquareMatrix for Matrix<T, N, N> {
    #[inline]
    fn identity() -> Self {
        Matrix::identity()
    }

    #[inline]
    fn determinant(self) -> T {
        Matrix::determinant(self)
    }

    #[inline]
    fn adjugate(self) -> Self {
        Matrix::adjugate(self)
    }

    #[inline]
    fn inverse(self) -> Self {
        Matrix::inverse(self)
    }

    #[inline]
    fn inverse_checked(self) -> Option<Self> {
        Matrix::inverse_checked(self)
    }

    #[inline]
    fn has_inverse(self) -> bool {
        Matrix::has_inverse(self)
    }
}
