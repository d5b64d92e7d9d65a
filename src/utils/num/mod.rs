// SPDX-License-Identifier: MIT OR Apache-2.0

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait ClosedSub: Sized + Sub<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}
pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedDiv: Sized + Div<Output = Self> {}
pub trait ClosedNeg: Sized + Neg<Output = Self> {}

impl<T: Sized + Sub<Output = Self>> ClosedSub for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}
impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Div<Output = Self>> ClosedDiv for T {}
impl<T: Sized + Neg<Output = Self>> ClosedNeg for T {}

#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

/// The arithmetic every matrix entry needs: closed field operations, their compound forms and
/// the two identities.
pub trait Scalar:
    Copy
    + ClosedAdd
    + ClosedDiv
    + ClosedMul
    + ClosedSub
    + ClosedNeg
    + AddAssign
    + DivAssign
    + MulAssign
    + SubAssign
    + One
    + PartialEq
    + PartialOrd
    + Zero
{
}

impl<T> Scalar for T where
    T: Copy
        + ClosedAdd
        + ClosedDiv
        + ClosedMul
        + ClosedSub
        + ClosedNeg
        + AddAssign
        + DivAssign
        + MulAssign
        + SubAssign
        + One
        + PartialEq
        + PartialOrd
        + Zero
{
}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;
}

pub trait Trig: Copy {
    #[must_use]
    fn sin(self) -> Self;
    #[must_use]
    fn cos(self) -> Self;

    #[must_use]
    fn to_radians(self) -> Self;
    #[must_use]
    fn to_degrees(self) -> Self;

    #[must_use]
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

/// A floating point [`Scalar`]: `f32` and `f64`.
///
/// Transform builders and normalization need this, plain arithmetic only needs [`Scalar`].
pub trait FloatScalar: Scalar + Sqrt + Trig {}
impl<T: Scalar + Sqrt + Trig> FloatScalar for T {}

macro_rules! impl_float_traits {
    ( $($type:ty),* $(,)? ) => {
        $(
            impl Zero for $type {
                const ZERO: Self = 0.0;
            }

            impl One for $type {
                const ONE: Self = 1.0;
            }

            #[cfg(any(test, feature = "std"))]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$type>::sqrt(self)
                }
            }

            #[cfg(all(feature = "libm", not(any(test, feature = "std"))))]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    libm::Libm::<$type>::sqrt(self)
                }
            }

            #[cfg(any(test, feature = "std"))]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    <$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$type>::cos(self)
                }

                #[inline]
                fn to_radians(self) -> Self {
                    <$type>::to_radians(self)
                }

                #[inline]
                fn to_degrees(self) -> Self {
                    <$type>::to_degrees(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    <$type>::sin_cos(self)
                }
            }

            #[cfg(all(feature = "libm", not(any(test, feature = "std"))))]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    libm::Libm::<$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    libm::Libm::<$type>::cos(self)
                }

                #[inline]
                fn to_radians(self) -> Self {
                    <$type>::to_radians(self)
                }

                #[inline]
                fn to_degrees(self) -> Self {
                    <$type>::to_degrees(self)
                }
            }
        )*
    };
}

impl_float_traits! {
    f32, f64,
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}
