mod ops;
mod view;

use std::fmt;

use crate::{
    scalar::{self, Scalar},
    vec3, vec4, Float, Number, One, Sqrt, Vec3, Vector, Zero,
};

pub use view::IJKW;

/// A quaternion with [`Scalar`] elements.
pub type Quatf = Quat<Scalar>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are used to represent rotations in 3D space. The
/// imaginary parts are accessible as the fields `i`, `j` and `k`, the real part as `w`.
///
/// # Unit length
///
/// Rotation-related operations ([`Quat::rotate_vector`], [`Quat::angle_to`], [`Quat::euler`],
/// [`Quat::slerp`]) require their inputs to be of unit length, but this is never checked or
/// enforced. Quaternions built with [`Quat::from_angle_axis`] from a unit axis are unit length;
/// quaternions obtained by arbitrary arithmetic or by accumulating many products should be passed
/// through [`Quat::normalize`] before being used as rotations.
///
/// # Composition
///
/// Multiplying two quaternions with `*` computes their Hamilton product. `a * b` is the rotation
/// that first applies `b` and then `a` when used with [`Quat::rotate_vector`]; the product is not
/// commutative unless both rotate about the same axis.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its imaginary parts `i`, `j`, `k` and its real part `w`.
    pub const fn from_components(i: T, j: T, k: T, w: T) -> Self {
        Self {
            vec: vec4(i, j, k, w),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the imaginary (vector) part `(i, j, k)` of this quaternion.
    pub fn imaginary(self) -> Vec3<T> {
        let [i, j, k, _] = self.vec.into_array();
        vec3(i, j, k)
    }

    /// Creates a rotation of `radians` around `axis`.
    ///
    /// `axis` has to be of unit length for the result to be a unit quaternion; it is not
    /// normalized by this function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// # use approx::assert_abs_diff_eq;
    /// let quarter = Quatf::from_angle_axis(90.0 * DEG_TO_RAD, Vec3f::Z);
    /// assert_abs_diff_eq!(quarter.rotate_vector(Vec3f::X), Vec3f::Y, epsilon = 1e-6);
    /// ```
    pub fn from_angle_axis(radians: T, axis: Vec3<T>) -> Self
    where
        T: Float,
    {
        let (sin, cos) = (radians / (T::ONE + T::ONE)).sin_cos();
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Creates the rotation that turns direction `a` into direction `b`.
    ///
    /// `a` and `b` must be unit vectors. If they point in exactly opposite directions (within a
    /// tolerance of `1e-6`), the rotation axis is not unique, and a half turn around `up` is
    /// returned. If they point in the same direction, the result is [`Quat::IDENTITY`].
    pub fn between_vectors(a: Vec3<T>, b: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Float,
    {
        let dot = a.dot(b);
        let tolerance = T::from_f64(1e-6);
        if (dot + T::ONE).abs() < tolerance {
            log::trace!("opposing directions (dot={dot:?}), rotating half a turn about {up:?}");
            return Self::from_angle_axis(T::from_f64(std::f64::consts::PI), up);
        }
        if (dot - T::ONE).abs() < tolerance {
            log::trace!("identical directions (dot={dot:?}), no rotation needed");
            return Self::IDENTITY;
        }

        Self::from_angle_axis(dot.acos(), a.cross(b).normalize())
    }

    /// Creates the rotation that turns the forward direction `(0, 0, 1)` into `dir`.
    ///
    /// See [`Quat::between_vectors`] for the role of `up`.
    pub fn facing(dir: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Float,
    {
        Self::between_vectors(Vec3::Z, dir, up)
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.w * other.w + self.i * other.i + self.j * other.j + self.k * other.k
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A zero quaternion yields `NaN` components.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Normalizes this quaternion, or returns [`None`] if its length is zero or not finite.
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

    /// Returns the conjugate of this quaternion, which negates its imaginary parts.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::from_components(-self.i, -self.j, -self.k, self.w)
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Computes `q * (v, 0) * conjugate(q)`. `self` has to be of unit length, otherwise the result
    /// is scaled as well. This is also available as `q * v`.
    pub fn rotate_vector(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let p = Self::from_components(v.x, v.y, v.z, T::ZERO);
        (self * p * self.conjugate()).imaginary()
    }

    /// Returns the angle in radians of the rotation from `self` to `other`.
    ///
    /// Both quaternions must be of unit length; the result is `NaN` if rounding pushes the real
    /// part of their difference past 1.
    pub fn angle_to(self, other: Self) -> T
    where
        T: Float,
    {
        (T::ONE + T::ONE) * (self.conjugate() * other).w.acos()
    }

    /// Converts this unit quaternion to Euler angles, in radians.
    ///
    /// The returned vector holds the rotation around the X axis in `x`, around the Y axis in `y`,
    /// and around the Z axis in `z`. The X and Z angles lie in `[-π, π]` and the Y angle in
    /// `[-π/2, π/2]`, so a rotation of 270° is reported as -90°.
    ///
    /// When the Y rotation approaches ±90° (*gimbal lock*), rounding errors can push the argument
    /// of the underlying `asin` slightly outside of `[-1, 1]`. It is clamped, so the Y angle
    /// saturates at ±π/2 instead of turning into `NaN`. The X and Z angles are not well defined
    /// in that configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// # use m3d::*;
    /// # use approx::assert_abs_diff_eq;
    /// let half = Quatf::from_angle_axis(180.0 * DEG_TO_RAD, Vec3f::Y);
    /// let quarter = Quatf::from_angle_axis(90.0 * DEG_TO_RAD, Vec3f::Y);
    /// let euler = (half * quarter).euler();
    /// assert_abs_diff_eq!(euler.y * RAD_TO_DEG, -90.0, epsilon = 0.1);
    /// ```
    pub fn euler(self) -> Vec3<T>
    where
        T: Float,
    {
        let (i, j, k, w) = (self.i, self.j, self.k, self.w);
        let two = T::ONE + T::ONE;
        let (i2, j2, k2) = (i * i, j * j, k * k);

        let x = (two * (w * i + j * k)).atan2(T::ONE - two * (i2 + j2));

        let sin_y = two * (w * j - k * i);
        let sin_y = if sin_y > T::ONE {
            log::trace!("clamping Euler asin argument {sin_y:?} to 1");
            T::ONE
        } else if sin_y < -T::ONE {
            log::trace!("clamping Euler asin argument {sin_y:?} to -1");
            -T::ONE
        } else {
            sin_y
        };
        let y = sin_y.asin();

        let z = (two * (w * k + i * j)).atan2(T::ONE - two * (j2 + k2));

        vec3(x, y, z)
    }

    /// Linearly interpolates each component between `self` and `other`.
    ///
    /// The result is not normalized.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        Self::from_vec(Vector::from_fn(|n| {
            scalar::lerp(self.vec[n], other.vec[n], t)
        }))
    }

    /// Spherically interpolates between the unit quaternions `self` and `other`.
    ///
    /// - If the inputs are equal (or negations of each other, which represent the same rotation),
    ///   `self` is returned.
    /// - If they are almost half a turn apart, the rotation axis is not well defined; the
    ///   component-wise average is returned instead.
    ///
    /// The interpolation does not flip `other` to take the shorter path.
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Float,
    {
        let cos_half_theta = self.dot(other);
        if cos_half_theta.abs() >= T::ONE {
            log::trace!("slerp inputs describe the same rotation (cos={cos_half_theta:?})");
            return self;
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (T::ONE - cos_half_theta * cos_half_theta).sqrt();
        if sin_half_theta.abs() < T::from_f64(0.001) {
            log::trace!("slerp inputs are half a turn apart, averaging");
            let half = T::ONE / (T::ONE + T::ONE);
            return self * half + other * half;
        }

        let a = self * ((T::ONE - t) * half_theta).sin();
        let b = other * (t * half_theta).sin();
        (a + b) / half_theta.sin()
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("i", &self.i)
            .field("j", &self.j)
            .field("k", &self.k)
            .field("w", &self.w)
            .finish()
    }
}

impl<T: Default> Default for Quat<T> {
    fn default() -> Self {
        Self {
            vec: Vector::default(),
        }
    }
}
