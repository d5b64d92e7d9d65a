// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    error::ShapeError,
    utils::{
        num::{ClosedAdd, ClosedDiv, ClosedMul, ClosedSub, One, Zero},
        zip_map,
    },
    vector::Vector,
};
use core::{
    borrow::{Borrow, BorrowMut},
    convert::{AsMut, AsRef},
    mem,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
    slice,
};

mod fmt;
mod interop;
#[cfg(feature = "serde")]
mod ser;
mod square;
pub mod traits;


pub use self::traits::{DenseMatrix, SquareMatrix};

/// A row-major matrix with `ROWS` rows and `COLS` columns.
///
/// Rows are stored contiguously, so the nested array handed to [`Matrix::new()`] reads the same
/// way the matrix is written on paper.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct Matrix<T = f64, const ROWS: usize = 4, const COLS: usize = 4> {
    data: [[T; COLS]; ROWS],
}

pub type Matrix2x2<T = f64> = Matrix<T, 2, 2>;
pub type Matrix2x3<T = f64> = Matrix<T, 2, 3>;
pub type Matrix2x4<T = f64> = Matrix<T, 2, 4>;
pub type Matrix3x2<T = f64> = Matrix<T, 3, 2>;
pub type Matrix3x3<T = f64> = Matrix<T, 3, 3>;
pub type Matrix3x4<T = f64> = Matrix<T, 3, 4>;
pub type Matrix4x2<T = f64> = Matrix<T, 4, 2>;
pub type Matrix4x3<T = f64> = Matrix<T, 4, 3>;
pub type Matrix4x4<T = f64> = Matrix<T, 4, 4>;

pub type Matrix2x2f = Matrix2x2<f32>;
pub type Matrix2x3f = Matrix2x3<f32>;
pub type Matrix2x4f = Matrix2x4<f32>;
pub type Matrix3x2f = Matrix3x2<f32>;
pub type Matrix3x3f = Matrix3x3<f32>;
pub type Matrix3x4f = Matrix3x4<f32>;
pub type Matrix4x2f = Matrix4x2<f32>;
pub type Matrix4x3f = Matrix4x3<f32>;
pub type Matrix4x4f = Matrix4x4<f32>;

impl<T: Default, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| Default::default())
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    pub const ROW_COUNT: usize = ROWS;
    pub const COLUMN_COUNT: usize = COLS;

    /// Create a new `Matrix` from the given nested array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix;
    /// let matrix: Matrix<f64, 2, 3> = Matrix::new([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ]);
    /// assert_eq!(matrix[(1, 0)], 4.0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(data: [[T; COLS]; ROWS]) -> Self {
        Self { data }
    }

    /// Builds a matrix by calling `f(row, col)` for every element, in row-major order.
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        let mut row = 0;
        Self {
            data: [(); ROWS].map(|_| {
                let mut col = 0;
                let elems = [(); COLS].map(|_| {
                    let elem = f(row, col);
                    col += 1;
                    elem
                });
                row += 1;
                elems
            }),
        }
    }

    /// Builds a matrix from its rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix2x3, vector::Vector3};
    /// let matrix = Matrix2x3::from_rows([
    ///     Vector3::new([1.0, 2.0, 3.0]),
    ///     Vector3::new([4.0, 5.0, 6.0]),
    /// ]);
    /// assert_eq!(matrix, Matrix2x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_rows(rows: [Vector<T, COLS>; ROWS]) -> Self {
        Self {
            data: rows.map(Vector::to_array),
        }
    }

    /// The number of rows, `ROWS`.
    #[must_use]
    #[inline]
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// The number of columns, `COLS`.
    #[must_use]
    #[inline]
    pub const fn cols(&self) -> usize {
        COLS
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [[T; COLS]; ROWS] {
        self.data
    }

    /// Views the elements as a flat row-major slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(matrix.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(row)?.get(col)
    }

    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut(row)?.get_mut(col)
    }

    #[inline]
    pub fn elems(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn elems_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Replaces the row at `row_idx`.
    ///
    /// # Panics
    ///
    /// This method will panic if `row_idx` is equal or greater to `ROWS`.
    #[track_caller]
    #[inline]
    pub fn set_row(&mut self, row_idx: usize, row: Vector<T, COLS>) {
        if self.try_set_row(row_idx, row).is_err() {
            panic!("row index {row_idx} out of bounds for a matrix with {ROWS} rows");
        }
    }

    /// Replaces the row at `row_idx`, handing `row` back if the index is out of bounds.
    #[inline]
    pub fn try_set_row(
        &mut self,
        row_idx: usize,
        row: Vector<T, COLS>,
    ) -> Result<(), Vector<T, COLS>> {
        match self.data.get_mut(row_idx) {
            Some(slot) => {
                *slot = row.to_array();
                Ok(())
            }
            None => Err(row),
        }
    }

    /// Replaces the column at `col_idx`.
    ///
    /// # Panics
    ///
    /// This method will panic if `col_idx` is equal or greater to `COLS`.
    #[track_caller]
    #[inline]
    pub fn set_col(&mut self, col_idx: usize, col: Vector<T, ROWS>) {
        if self.try_set_col(col_idx, col).is_err() {
            panic!("column index {col_idx} out of bounds for a matrix with {COLS} columns");
        }
    }

    /// Replaces the column at `col_idx`, handing `col` back if the index is out of bounds.
    #[inline]
    pub fn try_set_col(
        &mut self,
        col_idx: usize,
        col: Vector<T, ROWS>,
    ) -> Result<(), Vector<T, ROWS>> {
        if col_idx >= COLS {
            return Err(col);
        }

        for (row, elem) in self.data.iter_mut().zip(col) {
            row[col_idx] = elem;
        }

        Ok(())
    }

    /// Applies `f` to every element of the `Matrix`, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    ///
    /// assert_eq!(matrix.map(|elem| elem * elem), Matrix::new([[1.0, 4.0], [9.0, 16.0]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, ROWS, COLS> {
        Matrix {
            data: self.data.map(|row| row.map(&mut f)),
        }
    }

    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(
        self,
        rhs: Matrix<U, ROWS, COLS>,
        mut f: F,
    ) -> Matrix<Ret, ROWS, COLS> {
        Matrix {
            data: zip_map(self.data, rhs.data, |lhs, rhs| zip_map(lhs, rhs, &mut f)),
        }
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a new matrix, where every element of `Matrix` is set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix3x4;
    /// let matrix = Matrix3x4::splat(21.0);
    /// assert!(matrix.elems().all(|elem| *elem == 21.0));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            data: [[value; COLS]; ROWS],
        }
    }

    /// Builds a matrix from its columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix2x3, vector::Vector2};
    /// let matrix = Matrix2x3::from_columns([
    ///     Vector2::new([1.0, 4.0]),
    ///     Vector2::new([2.0, 5.0]),
    ///     Vector2::new([3.0, 6.0]),
    /// ]);
    /// assert_eq!(matrix, Matrix2x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_columns(cols: [Vector<T, ROWS>; COLS]) -> Self {
        Self::from_fn(|row, col| cols[col][row])
    }

    /// Builds a matrix from a runtime-sized list of rows.
    ///
    /// # Panics
    ///
    /// This method will panic if `rows` does not hold exactly `ROWS` rows. Use
    /// [`Matrix::try_from_row_slice()`] when the length is not known to be correct.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn from_row_slice(rows: &[Vector<T, COLS>]) -> Self {
        match Self::try_from_row_slice(rows) {
            Ok(matrix) => matrix,
            Err(err) => panic!("could not build a {ROWS}x{COLS} matrix: {err}"),
        }
    }

    /// Builds a matrix from a runtime-sized list of rows, failing if there are not exactly
    /// `ROWS` of them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::{ShapeError, matrix::Matrix2x2, vector::Vector2};
    /// let rows = [Vector2::new([1.0, 2.0]), Vector2::new([3.0, 4.0]), Vector2::new([5.0, 6.0])];
    ///
    /// assert!(Matrix2x2::try_from_row_slice(&rows[..2]).is_ok());
    /// assert_eq!(
    ///     Matrix2x2::try_from_row_slice(&rows),
    ///     Err(ShapeError::RowCount { expected: 2, found: 3 }),
    /// );
    /// ```
    #[inline]
    pub fn try_from_row_slice(rows: &[Vector<T, COLS>]) -> Result<Self, ShapeError> {
        match <[Vector<T, COLS>; ROWS]>::try_from(rows) {
            Ok(rows) => Ok(Self::from_rows(rows)),
            Err(_) => {
                log::debug!(
                    "rejected {} rows for a {ROWS}x{COLS} matrix",
                    rows.len()
                );
                Err(ShapeError::RowCount {
                    expected: ROWS,
                    found: rows.len(),
                })
            }
        }
    }

    /// Builds a matrix from runtime-sized rows of runtime-sized length, checking both the row
    /// count and the length of every row.
    #[inline]
    pub fn try_from_nested_slice(rows: &[&[T]]) -> Result<Self, ShapeError> {
        if rows.len() != ROWS {
            log::debug!("rejected {} rows for a {ROWS}x{COLS} matrix", rows.len());
            return Err(ShapeError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }

        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|&(_, len)| len != COLS)
        {
            log::debug!("rejected row {row} of length {found} for a {ROWS}x{COLS} matrix");
            return Err(ShapeError::ColumnCount {
                row,
                expected: COLS,
                found,
            });
        }

        Ok(Self::from_fn(|row, col| rows[row][col]))
    }

    /// Returns a copy of the row at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `ROWS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix, vector::Vector};
    /// let matrix = Matrix::new([
    ///     [0.0, 1.0, 2.0],
    ///     [5.0, 6.0, 7.0],
    /// ]);
    ///
    /// assert_eq!(matrix.row(1), Vector::new([5.0, 6.0, 7.0]));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row(&self, n: usize) -> Vector<T, COLS> {
        assert!(n < ROWS, "given row index is out of bounds");
        Vector::new(self.data[n])
    }

    /// Returns a copy of the column at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::{matrix::Matrix, vector::Vector};
    /// let matrix = Matrix::new([
    ///     [0.0, 1.0, 2.0],
    ///     [5.0, 6.0, 7.0],
    /// ]);
    ///
    /// assert_eq!(matrix.col(2), Vector::new([2.0, 7.0]));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn col(&self, n: usize) -> Vector<T, ROWS> {
        assert!(n < COLS, "given column index is out of bounds");
        Vector::new(self.data.map(|row| row[n]))
    }

    #[inline]
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = Vector<T, COLS>> + '_ {
        self.data.iter().map(|row| Vector::new(*row))
    }

    #[inline]
    pub fn iter_cols(&self) -> impl ExactSizeIterator<Item = Vector<T, ROWS>> + '_ {
        (0..COLS).map(|n| self.col(n))
    }

    /// Computes the transpose of the matrix, so that element `(row, col)` of the result is
    /// element `(col, row)` of `self`.
    ///
    /// See [`Matrix::transpose_in_place()`] for square matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1.0, 2.0, 3.0, 4.0],
    ///     [5.0, 6.0, 7.0, 8.0],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([
    ///     [1.0, 5.0],
    ///     [2.0, 6.0],
    ///     [3.0, 7.0],
    ///     [4.0, 8.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, COLS, ROWS> {
        Matrix::from_fn(|row, col| self.data[col][row])
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Swaps every element `(row, col)` with `(col, row)`.
    #[inline]
    pub fn transpose_in_place(&mut self) {
        for col in 1..N {
            let (upper, lower) = self.data.split_at_mut(col);
            for (row, upper_row) in upper.iter_mut().enumerate() {
                mem::swap(&mut upper_row[col], &mut lower[0][row]);
            }
        }
    }
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// The elements from the top-left to the bottom-right corner.
    #[must_use]
    #[inline]
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.data[i][i])
    }

    #[inline]
    pub fn set_diagonal(&mut self, diagonal: Vector<T, N>) {
        for (i, elem) in diagonal.into_iter().enumerate() {
            self.data[i][i] = elem;
        }
    }
}

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix, with ones on the diagonal and zeros elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix;
    /// assert_eq!(Matrix::identity(), Matrix::new([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// A diagonal matrix holding `diagonal`, zero elsewhere.
    #[must_use]
    #[inline]
    pub fn from_diagonal(diagonal: Vector<T, N>) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| if row == col { diagonal[row] } else { T::ZERO })
    }
}

impl<T: Zero, const ROWS: usize, const COLS: usize> Zero for Matrix<T, ROWS, COLS> {
    const ZERO: Self = Self::new(Zero::ZERO);
}

impl<T, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = [T; COLS];
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLS> {
    type Output = T;
    #[track_caller]
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLS> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn from(value: [[T; COLS]; ROWS]) -> Self {
        Self::new(value)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<Matrix<T, ROWS, COLS>> for [[T; COLS]; ROWS] {
    #[inline]
    fn from(value: Matrix<T, ROWS, COLS>) -> Self {
        value.data
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<[Vector<T, COLS>; ROWS]>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn from(rows: [Vector<T, COLS>; ROWS]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> TryFrom<&[Vector<T, COLS>]>
    for Matrix<T, ROWS, COLS>
{
    type Error = ShapeError;
    #[inline]
    fn try_from(rows: &[Vector<T, COLS>]) -> Result<Self, Self::Error> {
        Self::try_from_row_slice(rows)
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> TryFrom<&[[T; COLS]]>
    for Matrix<T, ROWS, COLS>
{
    type Error = ShapeError;
    #[inline]
    fn try_from(rows: &[[T; COLS]]) -> Result<Self, Self::Error> {
        match <[[T; COLS]; ROWS]>::try_from(rows) {
            Ok(data) => Ok(Self::new(data)),
            Err(_) => {
                log::debug!("rejected {} rows for a {ROWS}x{COLS} matrix", rows.len());
                Err(ShapeError::RowCount {
                    expected: ROWS,
                    found: rows.len(),
                })
            }
        }
    }
}

impl<T, const A: usize, const B: usize, const C: usize> Mul<Matrix<T, B, C>> for Matrix<T, A, B>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Matrix<T, A, C>;
    #[inline]
    fn mul(self, rhs: Matrix<T, B, C>) -> Self::Output {
        Matrix::from_fn(|row, col| Vector::dot(self.row(row), rhs.col(col)))
    }
}

impl<T, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

impl<T, const ROWS: usize, const COLS: usize> Mul<Vector<T, COLS>> for Matrix<T, ROWS, COLS>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Vector<T, ROWS>;
    #[inline]
    fn mul(self, rhs: Vector<T, COLS>) -> Self::Output {
        Vector::new(self.data.map(|row| Vector::new(row).dot(rhs)))
    }
}

impl<T, const ROWS: usize, const COLS: usize> Mul<Matrix<T, ROWS, COLS>> for Vector<T, ROWS>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Vector<T, COLS>;
    #[inline]
    fn mul(self, rhs: Matrix<T, ROWS, COLS>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.col(col)))
    }
}

impl<T: Copy + Mul, const ROWS: usize, const COLS: usize> Mul<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Copy + ClosedMul, const ROWS: usize, const COLS: usize> MulAssign<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T, const ROWS: usize, const COLS: usize> Div<T> for Matrix<T, ROWS, COLS>
where
    T: Copy + One + ClosedMul + ClosedDiv,
{
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self * (T::ONE / rhs)
    }
}

impl<T, const ROWS: usize, const COLS: usize> DivAssign<T> for Matrix<T, ROWS, COLS>
where
    T: Copy + One + ClosedMul + ClosedDiv,
{
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ( $( $scalar:ty ),* ) => {
        $(
            impl<const ROWS: usize, const COLS: usize> Mul<Matrix<$scalar, ROWS, COLS>> for $scalar {
                type Output = Matrix<$scalar, ROWS, COLS>;
                #[inline]
                fn mul(self, rhs: Matrix<$scalar, ROWS, COLS>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Add<U>, U, const ROWS: usize, const COLS: usize> Add<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn add(self, rhs: Matrix<U, ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: Copy + ClosedAdd, const ROWS: usize, const COLS: usize> AddAssign
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Sub<U>, U, const ROWS: usize, const COLS: usize> Sub<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn sub(self, rhs: Matrix<U, ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: Copy + ClosedSub, const ROWS: usize, const COLS: usize> SubAssign
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Neg, const ROWS: usize, const COLS: usize> Neg for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|elem| elem.neg())
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsMut<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsMut<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_mut(&mut self) -> &mut [[T; COLS]; ROWS] {
        &mut self.data
    }
}

impl<T, const ROWS: usize, const COLS: usize> Borrow<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn borrow(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }
}

impl<T, const ROWS: usize, const COLS: usize> BorrowMut<[[T; COLS]; ROWS]>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn borrow_mut(&mut self) -> &mut [[T; COLS]; ROWS] {
        &mut self.data
    }
}
