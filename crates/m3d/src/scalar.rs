//! The configured scalar type and single-value math.
//!
//! Every `*f` type alias in this crate ([`Vec3f`][crate::Vec3f], [`Quatf`][crate::Quatf],
//! [`Mat4f`][crate::Mat4f], ...) uses [`Scalar`] as its element type. [`Scalar`] is [`f32`] unless
//! the `f64` cargo feature is enabled, in which case it is [`f64`]. The choice applies to the whole
//! build; the generic types themselves work with either width.

use crate::{MinMax, Number};

/// The floating-point type used by the `*f` aliases.
#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

/// The floating-point type used by the `*f` aliases.
#[cfg(feature = "f64")]
pub type Scalar = f64;

/// Mathematical constants of the configured [`Scalar`] width.
#[cfg(not(feature = "f64"))]
pub use std::f32::consts;

/// Mathematical constants of the configured [`Scalar`] width.
#[cfg(feature = "f64")]
pub use std::f64::consts;

/// Multiply an angle in degrees with this to get radians.
pub const DEG_TO_RAD: Scalar = consts::PI / 180.0;

/// Multiply an angle in radians with this to get degrees.
pub const RAD_TO_DEG: Scalar = 180.0 / consts::PI;

/// Restricts `v` to the range `low..=high`.
///
/// Computed as `min(max(low, v), high)`. The bounds are not validated: if `low > high`, the result
/// is `high`.
///
/// # Examples
///
/// ```
/// # use m3d::*;
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
/// ```
#[inline]
pub fn clamp<T: MinMax>(v: T, low: T, high: T) -> T {
    low.max(v).min(high)
}

/// Linearly interpolates between `a` and `b`.
///
/// Computes `(1 - t) * a + t * b`. `t` is not clamped, so values outside of `0..=1` extrapolate.
///
/// # Examples
///
/// ```
/// # use m3d::*;
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
/// ```
#[inline]
pub fn lerp<T: Number>(a: T, b: T, t: T) -> T {
    (T::ONE - t) * a + t * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(7, 0, 3), 3);
    }

    #[test]
    fn clamp_inverted_range_prefers_high() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(-5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let (a, b): (Scalar, Scalar) = (0.1, 7.3);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(-3.0, 3.0, 0.5), 0.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 1.0, -1.0), -1.0);
        assert_eq!(lerp(0.0, 1.0, 3.0), 3.0);
    }

    #[test]
    fn angle_conversion() {
        assert!((180.0 * DEG_TO_RAD - consts::PI).abs() < 1e-6);
        assert!((consts::FRAC_PI_2 * RAD_TO_DEG - 90.0).abs() < 1e-4);
    }
}
