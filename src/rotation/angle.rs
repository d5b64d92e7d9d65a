// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::Trig;
use core::ops::Neg;

/// The angle handed to the rotation builders, in whichever unit it was written in.
///
/// Angles in different units compare through radians.
///
/// ```
/// # use smallmat::Angle;
/// assert_eq!(Angle::Degrees(0.0_f64), Angle::Radians(0.0));
/// assert_eq!(Angle::Radians(2.0_f64).in_radians(), 2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Angle<T> {
    Degrees(T),
    Radians(T),
}

impl<T: Trig> Angle<T> {
    #[must_use]
    #[inline]
    pub fn in_degrees(self) -> T {
        match self {
            Self::Degrees(degrees) => degrees,
            Self::Radians(radians) => radians.to_degrees(),
        }
    }

    #[must_use]
    #[inline]
    pub fn in_radians(self) -> T {
        match self {
            Self::Degrees(degrees) => degrees.to_radians(),
            Self::Radians(radians) => radians,
        }
    }

    /// The sine and cosine of the angle, in that order.
    #[must_use]
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.in_radians().sin_cos()
    }
}

/// Flips the direction of rotation, keeping the unit.
impl<T: Neg> Neg for Angle<T> {
    type Output = Angle<T::Output>;
    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Self::Degrees(degrees) => Angle::Degrees(-degrees),
            Self::Radians(radians) => Angle::Radians(-radians),
        }
    }
}

impl<T: PartialEq + Trig> PartialEq for Angle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Angle::Degrees(lhs), Angle::Degrees(rhs)) => lhs == rhs,
            (lhs, rhs) => lhs.in_radians() == rhs.in_radians(),
        }
    }
}

impl<T: Default> Default for Angle<T> {
    #[inline]
    fn default() -> Self {
        Self::Radians(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_unit_conversion() {
        assert_relative_eq!(Angle::Degrees(90.0_f64).in_radians(), FRAC_PI_2);
        assert_relative_eq!(Angle::Radians(PI).in_degrees(), 180.0_f64);
        assert_eq!(Angle::Radians(1.5_f64).in_radians(), 1.5);
        assert_eq!(Angle::Degrees(30.0_f64).in_degrees(), 30.0);

        let (sin, cos) = Angle::Degrees(90.0_f64).sin_cos();
        assert_relative_eq!(sin, 1.0);
        assert_relative_eq!(cos, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negation_and_equality() {
        assert_eq!(-Angle::Degrees(90.0_f64), Angle::Degrees(-90.0));
        assert_eq!(-Angle::Radians(1.0_f64), Angle::Radians(-1.0));
        assert_ne!(Angle::Degrees(10.0_f64), Angle::Degrees(20.0));
        assert_eq!(Angle::Degrees(0.0_f64), Angle::Radians(0.0));
        assert_ne!(Angle::Degrees(180.0_f64), Angle::Radians(180.0));
        assert_eq!(Angle::<f64>::default(), Angle::Radians(0.0));
    }
}
