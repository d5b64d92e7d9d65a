// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, Zero};
use core::ops::Add;

pub mod num;

/// Analogous to the [`Iterator::sum()`] method, but which uses [`Zero`] and [`ClosedAdd`] instead of
/// the [`Sum`] trait.
///
/// [`Sum`]: core::iter::Sum
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}

/// Zips two arrays together and applies `f` to each pair of elements, returning a fixed size
/// array of the results.
///
/// # Examples
///
/// ```
/// # use smallmat::utils::zip_map;
/// let sums = zip_map([1.0, 2.0, 3.0], [10.0, 20.0, 30.0], |x, y| x + y);
/// assert_eq!(sums, [11.0, 22.0, 33.0]);
/// ```
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    F: FnMut(T, U) -> Res,
{
    let mut rhs = rhs.into_iter();
    lhs.map(|lhs| match rhs.next() {
        Some(rhs) => f(lhs, rhs),
        None => unreachable!("both arrays have length {N}"),
    })
}
