//! Angle units and conversions between them.

use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

pub const PI: f32 = std::f32::consts::PI;
pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
pub const QUARTER_PI: f32 = std::f32::consts::FRAC_PI_4;
pub const FRAC_1_PI: f32 = std::f32::consts::FRAC_1_PI;
pub const FRAC_1_TWO_PI: f32 = 0.5 * std::f32::consts::FRAC_1_PI;

/// Multiply an angle in degrees by this to get radians.
pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;

/// Multiply an angle in radians by this to get degrees.
pub const RADIANS_TO_DEGREES: f32 = 180.0 * FRAC_1_PI;

/// Represents an angle in some unit.
pub trait Angle: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32 {
        self.as_degrees().0
    }

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32 {
        self.as_radians().0
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEGREES_TO_RADIANS
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RADIANS_TO_DEGREES
}

impl Angle for Degrees {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians(degrees_to_radians(self.0))
    }
}

impl Angle for Radians {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        Degrees(radians_to_degrees(self.0))
    }

    fn as_radians(self) -> Radians {
        self
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        angle.as_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        angle.as_radians()
    }
}

/// Arithmetic, comparison and approximate equality for an angle unit, where
/// the right hand side may be given in either unit.
macro_rules! impl_angle_unit {
    ($unit:ident, $other:ident, $as_unit:ident) => {
        impl Add for $unit {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Add<$other> for $unit {
            type Output = Self;
            fn add(self, rhs: $other) -> Self {
                Self(self.0 + rhs.$as_unit().0)
            }
        }

        impl Sub for $unit {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Sub<$other> for $unit {
            type Output = Self;
            fn sub(self, rhs: $other) -> Self {
                Self(self.0 - rhs.$as_unit().0)
            }
        }

        impl Mul<f32> for $unit {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $unit {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl PartialEq<$other> for $unit {
            fn eq(&self, rhs: &$other) -> bool {
                self.0 == rhs.$as_unit().0
            }
        }

        impl PartialOrd<$other> for $unit {
            fn partial_cmp(&self, rhs: &$other) -> Option<Ordering> {
                self.0.partial_cmp(&rhs.$as_unit().0)
            }
        }

        impl approx::AbsDiffEq for $unit {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                approx::AbsDiffEq::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl approx::RelativeEq for $unit {
            fn default_max_relative() -> f32 {
                <f32 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                approx::RelativeEq::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_unit!(Degrees, Radians, as_degrees);
impl_angle_unit!(Radians, Degrees, as_radians);
