// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions and trait impls for the optional `approx`, `mint` and `bytemuck` integrations.

#[cfg(any(feature = "approx", feature = "mint", feature = "bytemuck"))]
use crate::matrix::Matrix;

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const ROWS: usize, const COLS: usize> approx::AbsDiffEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const ROWS: usize, const COLS: usize> approx::RelativeEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const ROWS: usize, const COLS: usize> approx::UlpsEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize> bytemuck::Zeroable
    for Matrix<T, ROWS, COLS>
{
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> bytemuck::Pod
    for Matrix<T, ROWS, COLS>
{
}

macro_rules! impl_mint_conversion {
    ( row $mint_name:ident => ($rows:literal, $cols:literal) [ $( $field:ident ),* $(,)? ] ) => {
        #[cfg(feature = "mint")]
        impl<T> From<mint::$mint_name<T>> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(value: mint::$mint_name<T>) -> Self {
                Matrix::new([ $( value.$field.into(), )* ])
            }
        }

        #[cfg(feature = "mint")]
        impl<T> From<Matrix<T, $rows, $cols>> for mint::$mint_name<T> {
            #[inline]
            fn from(value: Matrix<T, $rows, $cols>) -> Self {
                let [ $( $field ),* ] = value.to_array();
                mint::$mint_name { $( $field: $field.into() ),* }
            }
        }

        #[cfg(feature = "mint")]
        impl<T> mint::IntoMint for Matrix<T, $rows, $cols> {
            type MintType = mint::$mint_name<T>;
        }
    };

    ( col $mint_name:ident => ($rows:literal, $cols:literal) [ $( $field:ident ),* $(,)? ] ) => {
        #[cfg(feature = "mint")]
        impl<T: Copy> From<mint::$mint_name<T>> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(value: mint::$mint_name<T>) -> Self {
                Matrix::<T, $cols, $rows>::new([ $( value.$field.into(), )* ]).transpose()
            }
        }

        #[cfg(feature = "mint")]
        impl<T: Copy> From<Matrix<T, $rows, $cols>> for mint::$mint_name<T> {
            #[inline]
            fn from(value: Matrix<T, $rows, $cols>) -> Self {
                let [ $( $field ),* ] = value.transpose().to_array();
                mint::$mint_name { $( $field: $field.into() ),* }
            }
        }
    };
}

macro_rules! impl_mint_conversions {
    (
        $(
            $major:ident $mint_name:ident => ($rows:literal, $cols:literal) [ $( $field:ident ),* $(,)? ]
        )*
    ) => {
        $(
            impl_mint_conversion!( $major $mint_name => ($rows, $cols) [ $( $field ),* ]);
        )*
    };
}

impl_mint_conversions! {
    row RowMatrix2 => (2, 2) [x, y]
    row RowMatrix3 => (3, 3) [x, y, z]
    row RowMatrix4 => (4, 4) [x, y, z, w]

    row RowMatrix2x3 => (2, 3) [x, y]
    row RowMatrix2x4 => (2, 4) [x, y]
    row RowMatrix3x2 => (3, 2) [x, y, z]
    row RowMatrix3x4 => (3, 4) [x, y, z]
    row RowMatrix4x2 => (4, 2) [x, y, z, w]
    row RowMatrix4x3 => (4, 3) [x, y, z, w]

    col ColumnMatrix2 => (2, 2) [x, y]
    col ColumnMatrix3 => (3, 3) [x, y, z]
    col ColumnMatrix4 => (4, 4) [x, y, z, w]

    col ColumnMatrix2x3 => (2, 3) [x, y, z]
    col ColumnMatrix2x4 => (2, 4) [x, y, z, w]
    col ColumnMatrix3x2 => (3, 2) [x, y]
    col ColumnMatrix3x4 => (3, 4) [x, y, z, w]
    col ColumnMatrix4x2 => (4, 2) [x, y]
    col ColumnMatrix4x3 => (4, 3) [x, y, z]
}
