//! Numeric capability traits the vector, quaternion and matrix types are generic over.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Computes the sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Copy,
    {
        (self.sin(), self.cos())
    }
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] (and their
/// [`f64`] counterparts), so a `NaN` operand is ignored in favor of the other one. Integer types
/// use [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

/// Floating-point element types.
///
/// This bundles everything the rotation and interpolation algorithms need, plus a way of turning
/// the `f64` tolerances and constants used by those algorithms into the element type.
pub trait Float: Number + Trig + Sqrt + MinMax + PartialOrd + fmt::Debug {
    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Returns whether `self` is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;

    /// Converts an `f64` constant into this type (rounding if necessary).
    fn from_f64(value: f64) -> Self;
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    $types::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    $types::max(self, other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    $types::sin(self)
                }

                fn cos(self) -> Self {
                    $types::cos(self)
                }

                fn tan(self) -> Self {
                    $types::tan(self)
                }

                fn asin(self) -> Self {
                    $types::asin(self)
                }

                fn acos(self) -> Self {
                    $types::acos(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $types::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    $types::sin_cos(self)
                }
            }

            impl Float for $types {
                fn abs(self) -> Self {
                    $types::abs(self)
                }

                fn is_finite(self) -> bool {
                    $types::is_finite(self)
                }

                fn from_f64(value: f64) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_ignores_nan() {
        assert_eq!(MinMax::min(f32::NAN, 1.0), 1.0);
        assert_eq!(MinMax::max(1.0, f64::NAN), 1.0);
        assert_eq!(MinMax::min(-3, 2), -3);
        assert_eq!(MinMax::max(-3, 2), 2);
    }

    #[test]
    fn from_f64_rounds() {
        assert_eq!(<f32 as Float>::from_f64(0.5), 0.5f32);
        assert_eq!(<f32 as Float>::from_f64(1e-6), 1e-6f32);
        assert_eq!(<f64 as Float>::from_f64(0.001), 0.001);
    }

    #[test]
    fn sin_cos() {
        let (s, c) = Trig::sin_cos(0.0f32);
        assert_eq!((s, c), (0.0, 1.0));
    }
}
