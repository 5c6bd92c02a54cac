//! A small linear algebra library for 2D and 3D graphics.
//!
//! Provides 2-, 3- and 4-dimensional [`Vector`]s, rotation [`Quat`]ernions, and 3x3 and 4x4
//! [`Matrix`] types with the projection and transform builders a renderer needs.
//!
//! # Element Types
//!
//! All types are generic over their element type. The `*f` aliases ([`Vec3f`], [`Quatf`],
//! [`Mat4f`], ...) use [`Scalar`], which is [`f32`] by default and [`f64`] when the `f64` cargo
//! feature is enabled.
//!
//! # Conventions
//!
//! - Vectors are column vectors, and are transformed by multiplying them from the left
//!   (`matrix * vector`).
//! - Matrices are stored row-major and indexed as `m[(row, col)]`.
//! - Projections follow the OpenGL clip-space convention: right-handed view space looking down
//!   the negative Z axis, normalized depth in `[-1, 1]`.
//! - Angles are in radians. [`DEG_TO_RAD`] and [`RAD_TO_DEG`] convert from and to degrees.
//!
//! # Degenerate Inputs
//!
//! Nothing in this crate returns errors or panics on numerically degenerate input. Normalizing a
//! zero vector, dividing by zero, or projecting with `near == far` produce infinities or `NaN`s,
//! which propagate through later operations. Use [`Vector::try_normalize`] and
//! [`Quat::try_normalize`] where such inputs need to be detected.
//!
//! Every type implements the [`approx`] comparison traits for tolerance-based equality, and
//! [`bytemuck::Pod`] (for `Pod` element types) so that it can be uploaded to the GPU as-is.

mod matrix;
mod quat;
pub mod scalar;
mod traits;
mod vector;

#[cfg(test)]
mod tests;

pub use matrix::*;
pub use quat::*;
pub use scalar::{clamp, lerp, Scalar, DEG_TO_RAD, RAD_TO_DEG};
pub use traits::*;
pub use vector::*;
