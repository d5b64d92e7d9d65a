// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::Matrix,
    utils::num::{Scalar, Zero},
};

/// Lists `0..N` with `skipped` left out. The second value is how many indices were written.
#[inline]
fn indices_without<const N: usize>(skipped: usize) -> ([usize; N], usize) {
    let mut indices = [0; N];
    let mut len = 0;
    for i in (0..N).filter(|&i| i != skipped) {
        indices[len] = i;
        len += 1;
    }

    (indices, len)
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Calculates the scalar determinant of the matrix.
    ///
    /// 2x2 matrices use the closed form `ad - bc`, larger ones expand along their first row
    /// into the determinants of their minors.
    ///
    /// If this value is `0`, then the matrix is not invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [3.0, 8.0],
    ///     [4.0, 6.0],
    /// ]);
    /// assert_eq!(matrix.determinant(), -14.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn determinant(self) -> T {
        let all: [usize; N] = core::array::from_fn(|i| i);
        self.det_inner(&all, &all)
    }

    /// The determinant of the square submatrix picked out by `rows` and `cols`.
    fn det_inner(&self, rows: &[usize], cols: &[usize]) -> T {
        match (rows, cols) {
            ([], _) | (_, []) => T::ONE,
            ([r], [c]) => self.data[*r][*c],
            ([r0, r1], [c0, c1]) => {
                (self.data[*r0][*c0] * self.data[*r1][*c1])
                    - (self.data[*r0][*c1] * self.data[*r1][*c0])
            }
            ([top, rest @ ..], _) => {
                let mut result = T::ZERO;
                let mut minor_cols = [0; N];

                for (i, &col) in cols.iter().enumerate() {
                    let mut len = 0;
                    for &other in cols.iter().filter(|&&other| other != col) {
                        minor_cols[len] = other;
                        len += 1;
                    }

                    let value = self.data[*top][col] * self.det_inner(rest, &minor_cols[..len]);
                    if i % 2 == 0 {
                        result += value;
                    } else {
                        result -= value;
                    }
                }

                result
            }
        }
    }

    /// The determinant of the matrix with `row` and `col` removed.
    ///
    /// # Panics
    ///
    /// This method will panic if `row` or `col` is equal or greater to `N`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn minor(self, row: usize, col: usize) -> T {
        assert!(row < N && col < N, "minor index out of bounds");

        let (rows, rows_len) = indices_without::<N>(row);
        let (cols, cols_len) = indices_without::<N>(col);
        self.det_inner(&rows[..rows_len], &cols[..cols_len])
    }

    /// The signed minor, `(-1)^(row + col) * minor(row, col)`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn cofactor(self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    /// Calculates the adjugate of the matrix: the transpose of its cofactor matrix.
    ///
    /// This is used to find the inverse of the matrix in [`Matrix::inverse()`].
    #[doc(alias = "adjoint")]
    #[must_use]
    #[inline]
    pub fn adjugate(self) -> Self {
        if N <= 1 {
            return Matrix::splat(T::ONE);
        }

        Matrix::from_fn(|row, col| self.cofactor(row, col)).transpose()
    }

    /// Returns whether the matrix is invertible.
    ///
    /// If this is `false`, then [`Matrix::inverse()`] produces non-finite elements and
    /// [`Matrix::inverse_checked()`] returns `None`.
    #[must_use]
    #[inline]
    pub fn has_inverse(self) -> bool {
        self.determinant() != Zero::ZERO
    }

    /// Calculates the inverse of the matrix as `adjugate * (1 / determinant)`.
    ///
    /// If you have a matrix `m1`, and `m2`, multiplying `m1` by `m2`, and then multiplying
    /// the result by `m2.inverse()` gives back `m1`.
    ///
    /// The determinant is not checked: a singular matrix divides by zero and the result holds
    /// infinite or NaN elements. Use [`Matrix::inverse_checked()`] or
    /// [`Matrix::has_inverse()`] when the matrix may be singular.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::matrix::Matrix2x2;
    /// let matrix = Matrix2x2::new([
    ///     [4.0, 7.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(matrix.inverse(), Matrix2x2::new([[2.0, -3.5], [-1.0, 2.0]]));
    /// assert_eq!(matrix * matrix.inverse(), Matrix2x2::identity());
    ///
    /// let singular = Matrix2x2::<f64>::new([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert!(singular.inverse().elems().any(|elem| !elem.is_finite()));
    /// ```
    #[must_use]
    #[inline]
    pub fn inverse(self) -> Self {
        self.adjugate() * (T::ONE / self.determinant())
    }

    /// Calculates the inverse of the matrix, returning `None` if the determinant is zero.
    #[must_use]
    #[inline]
    pub fn inverse_checked(self) -> Option<Self> {
        let det = self.determinant();
        if det == Zero::ZERO {
            log::trace!("{N}x{N} matrix has a zero determinant and no inverse");
            return None;
        }

        Some(self.adjugate() * (T::ONE / det))
    }

    /// Sets the matrix to its inverse. See [`Matrix::inverse()`].
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }
}
