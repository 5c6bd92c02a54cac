use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Number, Quat, Vec3};

/// Hamilton product.
///
/// The result rotates by `rhs` first, then by `self`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Quat::from_components(
            a.w * b.i + a.i * b.w + a.j * b.k - a.k * b.j,
            a.w * b.j - a.i * b.k + a.j * b.w + a.k * b.i,
            a.w * b.k + a.i * b.j - a.j * b.i + a.k * b.w,
            a.w * b.w - a.i * b.i - a.j * b.j - a.k * b.k,
        )
    }
}

/// Rotates a vector (see [`Quat::rotate_vector`]).
impl<T: Number> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate_vector(rhs)
    }
}

/// Scales every component.
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_vec(self.vec * rhs)
    }
}

impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::from_vec(self.vec / rhs)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec + rhs.vec)
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.vec - rhs.vec)
    }
}

/// Negates every component.
///
/// The negated quaternion describes the same rotation.
impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vec(-self.vec)
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.vec.ulps_eq(&other.vec, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{Quat, Quatf};

    #[test]
    fn component_wise() {
        let a = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        let b = Quat::from_components(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quat::from_components(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quat::from_components(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a * 2.0, Quat::from_components(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Quat::from_components(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-b, Quat::from_components(-0.5, -0.5, -0.5, -0.5));
    }

    #[test]
    fn identity_is_neutral() {
        let q = Quat::from_components(0.1, -0.2, 0.3, 0.9);
        assert_eq!(Quat::<f64>::IDENTITY * q, q);
        assert_eq!(q * Quat::<f64>::IDENTITY, q);
    }

    #[test]
    fn conjugate_inverts_unit() {
        let q = Quatf::from_components(1.0, 1.0, 1.0, 1.0).normalize();
        assert_relative_eq!(q * q.conjugate(), Quatf::IDENTITY, epsilon = 1e-6);
        assert_ne!(q, q + Quat::from_components(0.0, 0.0, 0.0, 1e-6));
    }
}
