use std::{array, fmt};

use crate::{
    scalar::{self, Scalar},
    traits::{Float, Number, Sqrt},
    MinMax, One, Trig, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`Scalar`] elements.
pub type Vec2f = Vec2<Scalar>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`Scalar`] elements.
pub type Vec3f = Vec3<Scalar>;
/// A 4-dimensional vector.
///
/// 4-dimensional vectors are meant to carry homogeneous coordinates through a
/// [`Mat4`][crate::Mat4]. They support element-wise arithmetic and comparison, but none of the
/// geometric operations ([`length`], [`dot`], [`slerp`], ...) that 2- and 3-dimensional vectors
/// have.
///
/// [`length`]: Vector::length
/// [`dot`]: Vector::dot
/// [`slerp`]: Vector::slerp
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`Scalar`] elements.
pub type Vec4f = Vec4<Scalar>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are unit vectors pointing along an axis.
///
/// # Element Access
///
/// Elements can be accessed as fields `x`, `y`, `z` and `w`, via [`Index`]/[`IndexMut`] like an
/// array, or as an array via [`Vector::as_array`] and [`Vector::into_array`].
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` operate element-wise, either between two vectors of the same dimension,
/// or between a vector and a scalar (which is then applied to every element). Equality is exact;
/// use the [`approx`] traits for tolerance-based comparisons.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let v = Vector::from_fn(|i| i * 2);
    /// assert_eq!(v, vec4(0, 2, 4, 6));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub(crate) fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|l| match other.next() {
            Some(r) => (l, r),
            None => unreachable!("both vectors have `N` elements"),
        }))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

/// Geometric operations, only available for 2- and 3-dimensional vectors.
macro_rules! geometry {
    ($($n:literal),+) => {
        $(
            impl<T> Vector<T, $n> {
                /// Computes the dot product between `self` and `other`.
                pub fn dot(self, other: Self) -> T
                where
                    T: Number,
                {
                    self.0
                        .into_iter()
                        .zip(other.0)
                        .fold(T::ZERO, |acc, (a, b)| acc + a * b)
                }

                /// Returns the squared length of this vector.
                pub fn length2(&self) -> T
                where
                    T: Number,
                {
                    self.dot(*self)
                }

                /// Returns the (Euclidean) length of this vector.
                pub fn length(&self) -> T
                where
                    T: Number + Sqrt,
                {
                    self.length2().sqrt()
                }

                /// Divides this vector by its length, resulting in a unit vector.
                ///
                /// The zero vector has no direction: normalizing it divides by zero and yields
                /// `NaN` elements. Use [`Vector::try_normalize`] if that needs to be detected.
                pub fn normalize(self) -> Self
                where
                    T: Number + Sqrt,
                {
                    self / self.length()
                }

                /// Normalizes this vector, or returns [`None`] if its length is zero or not
                /// finite.
                pub fn try_normalize(self) -> Option<Self>
                where
                    T: Float,
                {
                    let length = self.length();
                    if length == T::ZERO || !length.is_finite() {
                        return None;
                    }
                    Some(self / length)
                }

                /// Returns the distance between the points `self` and `other`.
                pub fn distance(self, other: Self) -> T
                where
                    T: Number + Sqrt,
                {
                    (other - self).length()
                }

                /// Computes the smallest positive angle between `self` and `other`, in radians.
                ///
                /// Both vectors must have non-zero length, otherwise the result is `NaN`.
                pub fn angle_to(self, other: Self) -> T
                where
                    T: Number + Trig + Sqrt,
                {
                    (self.dot(other) / (self.length() * other.length())).acos()
                }

                /// Element-wise minimum between `self` and `other`.
                pub fn min(self, other: Self) -> Self
                where
                    T: MinMax + Copy,
                {
                    Self::from_fn(|i| self[i].min(other[i]))
                }

                /// Element-wise maximum between `self` and `other`.
                pub fn max(self, other: Self) -> Self
                where
                    T: MinMax + Copy,
                {
                    Self::from_fn(|i| self[i].max(other[i]))
                }

                /// Linearly interpolates each element between `self` and `other`.
                ///
                /// `t` is not clamped: `0` yields `self`, `1` yields `other`, other values
                /// interpolate or extrapolate.
                pub fn lerp(self, other: Self, t: T) -> Self
                where
                    T: Number,
                {
                    Self::from_fn(|i| scalar::lerp(self[i], other[i], t))
                }

                /// Reflects `self` off a surface with the given `normal`.
                ///
                /// `normal` does not need to be of unit length, but must not be zero.
                pub fn reflect(self, normal: Self) -> Self
                where
                    T: Number,
                {
                    let two = T::ONE + T::ONE;
                    self - normal * ((self * two).dot(normal) / normal.length2())
                }

                /// Spherically interpolates the direction of `self` towards `other`.
                ///
                /// Both vectors are expected to be of unit length. Their dot product is clamped to
                /// `[-1, 1]` before computing the angle between them, so rounding errors cannot
                /// push it out of the domain of `acos`.
                ///
                /// The result is undefined (`NaN`) when `other` points in the same or exactly the
                /// opposite direction as `self`, since there is no unique plane to rotate in.
                pub fn slerp(self, other: Self, t: T) -> Self
                where
                    T: Float,
                {
                    let dot = scalar::clamp(self.dot(other), -T::ONE, T::ONE);
                    let theta = dot.acos() * t;
                    let offset = (other - self * dot).normalize();
                    let (sin, cos) = theta.sin_cos();
                    self * cos + offset * sin
                }
            }
        )+
    };
}
geometry!(2, 3);

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let v = vec2(-1.0, 2.0).extend(1.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// This is how a point (`w = 1`) or direction (`w = 0`) is turned into homogeneous
    /// coordinates for a [`Mat4`][crate::Mat4].
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// let point = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(point, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts its
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the `w` element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::scalar::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Z.z, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v, [777, 1]);
        v[1] = 9;
        assert_eq!(v.y, 9);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", vec4(0, 0, 0, 1)), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", vec2(0.5, -1.0)), "(0.5, -1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).length2(), 35);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec3(1.0, 1.0, 1.0).distance(vec3(1.0, 4.0, 5.0)), 5.0);
        assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3f::Z);
    }

    #[test]
    fn normalize_zero() {
        let v = Vec3f::ZERO.normalize();
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
        assert_eq!(Vec3f::ZERO.try_normalize(), None);
        assert_eq!(vec2(Scalar::INFINITY, 0.0).try_normalize(), None);
        assert_eq!(vec2(0.0, -2.0).try_normalize(), Some(vec2(0.0, -1.0)));
    }

    #[test]
    fn min_max() {
        let a = vec3(-1.0, 2.0, Scalar::NAN);
        let b = vec3(3.0, Scalar::NEG_INFINITY, 0.0);
        assert_eq!(a.min(b), vec3(-1.0, Scalar::NEG_INFINITY, 0.0));
        assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
        assert_eq!(vec2(1, 5).max(vec2(2, 4)), vec2(2, 5));
    }

    #[test]
    fn angle() {
        assert_abs_diff_eq!(Vec3f::Y.angle_to(Vec3f::X), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3f::Y.angle_to(-Vec3f::Y), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(vec2(0.0, 2.0).angle_to(vec2(-3.0, 0.0)), FRAC_PI_2, epsilon = 1e-6);
        assert!(Vec2f::ZERO.angle_to(Vec2f::X).is_nan());
    }

    #[test]
    fn reflect() {
        assert_eq!(vec3(1.0, -1.0, 0.0).reflect(vec3(0.0, 1.0, 0.0)), vec3(1.0, 1.0, 0.0));
        // The normal's length is divided out.
        assert_eq!(vec2(1.0, -1.0).reflect(vec2(0.0, 5.0)), vec2(1.0, 1.0));
        assert_eq!(vec2(2.0, 0.0).reflect(vec2(-1.0, 0.0)), vec2(-2.0, 0.0));
    }

    #[test]
    fn lerp() {
        let a = vec3(0.25, -1.0, 3.0);
        let b = vec3(8.0, 2.5, -6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(vec2(0.0, 2.0).lerp(vec2(2.0, 4.0), 0.5), vec2(1.0, 3.0));
        assert_eq!(vec2(0.0, 0.0).lerp(vec2(1.0, 1.0), 2.0), vec2(2.0, 2.0));
    }

    #[test]
    fn slerp() {
        let half = Vec2f::X.slerp(Vec2f::Y, 0.5);
        assert_abs_diff_eq!(half, vec2(FRAC_1_SQRT_2, FRAC_1_SQRT_2), epsilon = 1e-6);
        assert_abs_diff_eq!(half.length(), 1.0, epsilon = 1e-6);

        assert_abs_diff_eq!(Vec3f::X.slerp(Vec3f::Z, 0.0), Vec3f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3f::X.slerp(Vec3f::Z, 1.0), Vec3f::Z, epsilon = 1e-6);

        // Same or opposite direction: there is no plane to rotate in.
        assert!(Vec3f::X.slerp(Vec3f::X, 0.5).x.is_nan());
        assert!(Vec2f::X.slerp(-Vec2f::X, 0.5).x.is_nan());
        assert!(Vec3f::Y.slerp(-Vec3f::Y, 0.25).y.is_nan());
    }

    #[test]
    fn extend_truncate() {
        let v = vec2(1, 2).extend(3).extend(4);
        assert_eq!(v, vec4(1, 2, 3, 4));
        assert_eq!(v.truncate().truncate(), vec2(1, 2));
    }
}
