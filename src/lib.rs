// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-size dense matrices from 2x2 through 4x4, with the vector type they act on and the
//! usual affine transform builders.
//!
//! Every shape is the same generic [`Matrix<T, ROWS, COLS>`], stored row-major. The square-only
//! operations (identity, determinant, inverse, products by the same type) are only available on
//! `Matrix<T, N, N>`, so shape errors are type errors.
//!
//! ```
//! use smallmat::{matrix::Matrix2x2, vector::Vector2};
//!
//! let a = Matrix2x2::new([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//! let b = Matrix2x2::new([
//!     [5.0, 6.0],
//!     [7.0, 8.0],
//! ]);
//!
//! assert_eq!(a * b, Matrix2x2::new([[19.0, 22.0], [43.0, 50.0]]));
//! assert_eq!(Matrix2x2::scaling(Vector2::new([5.0, 7.0])) * Vector2::new([2.0, 3.0]), Vector2::new([10.0, 21.0]));
//! ```
//!
//! [`Matrix<T, ROWS, COLS>`]: crate::matrix::Matrix

#![cfg_attr(not(any(test, feature = "std")), no_std)]

macro_rules! impl_coerce_to_fields {
    (
        $( $type:ident<{ $generic:ident, $const:expr }>  => $fields_type:ident ),+ $(,)?
    ) => {
        $(
            impl<$generic> core::ops::Deref for $type<$generic, $const> {
                type Target = crate::fields:: $fields_type<$generic>;
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<$type<f32, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f32, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::size_of::<$type<f64, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f64>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f64, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f64>>()
                    );

                    // Both sides are `#[repr(C)]` with `$const` fields of type `$generic`.
                    unsafe { &*(self as *const _ as *const crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> core::ops::DerefMut for $type<$generic, $const> {
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut _ as *mut crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> From<$type<$generic, $const>> for crate::fields:: $fields_type<$generic> {
                #[inline]
                fn from(value: $type<$generic, $const>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }

            impl<$generic> From<crate::fields:: $fields_type<$generic>> for $type<$generic, $const> {
                #[inline]
                fn from(value: crate::fields:: $fields_type<$generic>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }
        )+
    };
}

pub mod error;
pub mod fields;
pub mod matrix;
pub mod rotation;
pub mod transform;
pub mod utils;
pub mod vector;

pub use crate::{
    error::ShapeError,
    matrix::{DenseMatrix, Matrix, SquareMatrix},
    rotation::angle::Angle,
    vector::Vector,
};
