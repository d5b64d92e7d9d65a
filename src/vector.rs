// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-size vectors, the values matrices act on.

use crate::utils::{
    num::{ClosedAdd, ClosedMul, ClosedNeg, ClosedSub, FloatScalar, One, Sqrt, Zero},
    sum, zip_map,
};
#[cfg(feature = "serde")]
use core::marker::PhantomData;
use core::{
    array,
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice::{Iter, IterMut},
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{self, Deserialize, Deserializer, Error, SeqAccess},
    ser::{Serialize, Serializer},
};

#[repr(C)]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Vector<T = f64, const N: usize = 3> {
    data: [T; N],
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Vector ")?;
        let mut debug_list = fmtr.debug_list();
        debug_list.entries(self.data.iter());
        debug_list.finish()
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self {
            data: array::from_fn(|_| Default::default()),
        }
    }
}

pub type Vector2<T = f64> = Vector<T, 2>;
pub type Vector3<T = f64> = Vector<T, 3>;
pub type Vector4<T = f64> = Vector<T, 4>;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

impl_coerce_to_fields! {
    Vector<{T, 2}> => Xy,
    Vector<{T, 3}> => Xyz,
    Vector<{T, 4}> => Xyzw,
}

impl<T: One + Zero, const N: usize> Vector<T, N> {
    /// Returns a new vector facing towards the given dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::vector::Vector;
    /// let vector = Vector::<f64, 4>::unit_n::<2>();
    /// assert_eq!(vector.to_array(), [0.0, 0.0, 1.0, 0.0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn unit_n<const DIM: usize>() -> Self {
        const { assert!(DIM < N, "unit dimension out of bounds") };
        Self::from_fn(|i| if i == DIM { T::ONE } else { T::ZERO })
    }
}

impl<T, const N: usize> Vector<T, N> {
    pub const LENGTH: usize = N;

    /// Returns a new vector, initializing every element from the given `array`.
    ///
    /// # Example
    ///
    /// ```
    /// # use smallmat::vector::Vector;
    /// let vector: Vector<f32, 4> = Vector::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(vector.w, 4.0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(array: [T; N]) -> Self {
        Self { data: array }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(array::from_fn(f))
    }

    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }

    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(self, rhs: Vector<U, N>, f: F) -> Vector<Ret, N> {
        Vector {
            data: zip_map(self.data, rhs.data, f),
        }
    }

    /// The sum of the pairwise products of both vectors' elements.
    #[must_use]
    #[inline]
    pub fn dot<U>(self, rhs: Vector<U, N>) -> T::Output
    where
        T: Mul<U>,
        T::Output: Zero + ClosedAdd,
    {
        sum(self.into_iter().zip(rhs).map(|(x, y)| x * y))
    }

    #[must_use]
    #[inline]
    pub const fn get(&self, index: usize) -> Option<&T> {
        if index < N {
            Some(&self.data[index])
        } else {
            None
        }
    }

    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Create a new `Vector` with each element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmat::vector::Vector;
    /// let vector = Vector::<_, 4>::splat(21.0);
    /// assert_eq!(vector.to_array(), [21.0; 4]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }
}

impl<T: ClosedMul + Copy + Zero + ClosedAdd, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn len_squared(self) -> T {
        Self::dot(self, self)
    }
}

impl<T: ClosedMul + Copy + ClosedAdd + Zero + Sqrt, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn len(self) -> T {
        self.len_squared().sqrt()
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Scales the vector to unit length, or returns the zero vector if its length is zero.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Self {
        self.normalized_checked().unwrap_or(Zero::ZERO)
    }

    /// Scales the vector to unit length, returning `None` for a zero-length vector.
    #[must_use]
    #[inline]
    pub fn normalized_checked(self) -> Option<Self> {
        let len = self.len();
        if len == T::ZERO {
            None
        } else {
            Some(self / len)
        }
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }
}

impl<T: Copy + ClosedMul + ClosedSub + ClosedNeg> Vector3<T> {
    #[must_use]
    #[inline]
    pub fn cross(self, rhs: Self) -> Vector3<T> {
        let [x0, y0, z0] = self.data;
        let [x1, y1, z1] = rhs.data;

        let x = (y0 * z1) - (z0 * y1);
        let y = (x0 * z1) - (z0 * x1);
        let z = (x0 * y1) - (y0 * x1);

        Vector3::new([x, y.neg(), z])
    }
}

impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Self::new(Zero::ZERO);
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|elem| elem.neg())
    }
}

impl<T: Mul + Copy, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: MulAssign<U>, U: Copy, const N: usize> MulAssign<U> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: U) {
        for elem in &mut self.data {
            elem.mul_assign(rhs);
        }
    }
}

impl<T: Div<U>, U: Copy, const N: usize> Div<U> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn div(self, rhs: U) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: DivAssign<U>, U: Copy, const N: usize> DivAssign<U> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: U) {
        for elem in &mut self.data {
            elem.div_assign(rhs);
        }
    }
}

impl<T: Add<U>, U, const N: usize> Add<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: AddAssign<U>, U, const N: usize> AddAssign<Vector<U, N>> for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector<U, N>) {
        for (l, r) in self.data.iter_mut().zip(rhs) {
            l.add_assign(r);
        }
    }
}

impl<T: Sub<U>, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: SubAssign<U>, U, const N: usize> SubAssign<Vector<U, N>> for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<U, N>) {
        for (l, r) in self.data.iter_mut().zip(rhs) {
            l.sub_assign(r);
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ( $( $scalar:ty ),* ) => {
        $(
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;
                #[inline]
                fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        Index::index(&self.data, index)
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        IndexMut::index_mut(&mut self.data, index)
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }
}

impl<T, const N: usize> Borrow<[T; N]> for Vector<T, N> {
    #[inline]
    fn borrow(&self) -> &[T; N] {
        &self.data
    }
}

impl<T, const N: usize> BorrowMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.data)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

macro_rules! impl_mint_vector {
    ( $( $mint_type:ident => $len:literal { $( $field:ident ),+ } ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_type<T>> for Vector<T, $len> {
                #[inline]
                fn from(mint::$mint_type { $( $field ),+ }: mint::$mint_type<T>) -> Self {
                    Vector::new([ $( $field ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Vector<T, $len>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Vector<T, $len>) -> Self {
                    let [ $( $field ),+ ] = value.data;
                    mint::$mint_type { $( $field ),+ }
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Vector<T, $len> {
                type MintType = mint::$mint_type<T>;
            }
        )*
    };
}

impl_mint_vector! {
    Vector2 => 2 { x, y },
    Vector3 => 3 { x, y, z },
    Vector4 => 4 { x, y, z, w },
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const N: usize> approx::AbsDiffEq for Vector<T, N>
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
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const N: usize> approx::RelativeEq for Vector<T, N>
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
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de> + Copy + Zero, const N: usize> Deserialize<'de> for Vector<T, N> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor<T, const N: usize>(PhantomData<Vector<T, N>>);

        impl<'de, T: Deserialize<'de> + Copy + Zero, const N: usize> de::Visitor<'de>
            for Visitor<T, N>
        {
            type Value = Vector<T, N>;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an array of {N} elements")
            }

            #[inline]
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut data = [T::ZERO; N];

                let mut i = 0;
                while let Some(item) = seq.next_element::<T>()? {
                    match data.get_mut(i) {
                        Some(slot) => *slot = item,
                        None => return Err(A::Error::invalid_length(i + 1, &self)),
                    }
                    i += 1;
                }

                if i < N {
                    return Err(A::Error::invalid_length(i, &self));
                }

                Ok(Vector::new(data))
            }
        }

        deserializer.deserialize_seq(Visitor::<T, N>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_components() {
        let mut v = Vector4::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!((v.x, v.y, v.z, v.w), (1.0, 2.0, 3.0, 4.0));

        v.z = 9.0;
        assert_eq!(v.to_array(), [1.0, 2.0, 9.0, 4.0]);

        let v = Vector2f::new([5.0, 7.0]);
        assert_eq!((v.x, v.y), (5.0, 7.0));
    }

    #[test]
    fn test_cross() {
        let v1 = Vector::new([3.0, 4.0, 5.0]);
        let v2 = Vector::new([7.0, 8.0, 9.0]);
        let result = Vector::cross(v1, v2);

        assert_eq!(result, Vector::new([-4.0, 8.0, -4.0]));

        let x = Vector3::<f64>::unit_n::<0>();
        let y = Vector3::<f64>::unit_n::<1>();

        assert_eq!(Vector::cross(x, y), Vector3::unit_n::<2>());

        let v1 = Vector::new([13.0, 24.0, 19.0]);
        let v2 = Vector::new([244.0, 190.0, 80.0]);

        assert_eq!(Vector::cross(v1, v2), Vector::new([-1690.0, 3596.0, -3386.0]));
    }

    #[test]
    fn test_dot() {
        let v1 = Vector::new([1.0, 2.0, 3.0]);
        let v2 = Vector::new([7.0, 8.0, 9.0]);

        assert_eq!(Vector::dot(v1, v2), 50.0);

        let v = Vector::<f64, 4>::unit_n::<0>() * 60.0;
        assert_eq!(v.len(), 60.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new([1.0, 2.0, 3.0]);
        let b = Vector3::new([0.5, 0.5, 0.5]);

        assert_eq!(a + b, Vector3::new([1.5, 2.5, 3.5]));
        assert_eq!(a - b, Vector3::new([0.5, 1.5, 2.5]));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, Vector3::new([0.5, 1.0, 1.5]));
        assert_eq!(-a, Vector3::new([-1.0, -2.0, -3.0]));

        let mut c = a;
        c += b;
        c -= b;
        c *= 4.0;
        c /= 4.0;
        assert_eq!(c, a);
    }

    #[test]
    fn test_normalized() {
        let v = Vector3::new([3.0, 0.0, 4.0]);
        assert_eq!(v.normalized(), Vector3::new([0.6, 0.0, 0.8]));

        assert_eq!(Vector3::<f64>::ZERO.normalized_checked(), None);
        assert_eq!(Vector3::<f64>::ZERO.normalized(), Vector3::ZERO);

        let mut v = Vector2::new([0.0, -2.0]);
        v.normalize();
        assert_eq!(v, Vector2::new([0.0, -1.0]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let v = Vector3::new([1.0, 2.5, -3.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5,-3.0]");
        assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);

        assert!(serde_json::from_str::<Vector3>("[1.0, 2.0]").is_err());
        assert!(serde_json::from_str::<Vector3>("[1.0, 2.0, 3.0, 4.0]").is_err());
    }
}
