//! Property tests over seeded random inputs.

use approx::assert_abs_diff_eq;
use log::LevelFilter;

use crate::scalar::consts::PI;

use super::*;

/// Routes this crate's `trace!` output to the test harness.
pub(crate) fn init_logger() {
    env_logger::builder()
        .is_test(true)
        .filter(Some(env!("CARGO_PKG_NAME")), LevelFilter::Trace)
        .parse_default_env()
        .try_init()
        .ok();
}

const ITERATIONS: usize = 500;

fn uniform(rng: &mut fastrand::Rng, low: Scalar, high: Scalar) -> Scalar {
    low + (high - low) * rng.f64() as Scalar
}

fn random_vec3(rng: &mut fastrand::Rng, extent: Scalar) -> Vec3f {
    Vector::from_fn(|_| uniform(rng, -extent, extent))
}

fn random_axis(rng: &mut fastrand::Rng) -> Vec3f {
    loop {
        let v = random_vec3(rng, 1.0);
        if v.length2() > 0.01 {
            return v.normalize();
        }
    }
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quatf {
    Quatf::from_angle_axis(uniform(rng, -PI, PI), random_axis(rng))
}

#[test]
fn normalize_yields_unit_length() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0001);
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng, 100.0);
        if let Some(n) = v.try_normalize() {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        }
        let q = Quat::from_vec(v.extend(uniform(&mut rng, -100.0, 100.0)));
        if let Some(n) = q.try_normalize() {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        }
    }
    assert_eq!(Vec2f::ZERO.try_normalize(), None);
    assert_eq!(Vec3f::ZERO.try_normalize(), None);
}

#[test]
fn cross_is_perpendicular() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0002);
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng, 10.0);
        let b = random_vec3(&mut rng, 10.0);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-2);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-2);
        assert_eq!(b.cross(a), -c);
    }
}

#[test]
fn rotation_round_trip() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0003);
    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        let v = random_vec3(&mut rng, 10.0);

        let rotated = q * v;
        assert_abs_diff_eq!(rotated.length(), v.length(), epsilon = 1e-4);
        assert_abs_diff_eq!(q.conjugate() * rotated, v, epsilon = 1e-4);
    }
}

#[test]
fn matrix_agrees_with_quaternion() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0004);
    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        let v = random_vec3(&mut rng, 10.0);

        assert_abs_diff_eq!(Mat3f::from_quat(q) * v, q * v, epsilon = 1e-4);

        let m4 = Mat4f::identity().rotate(q);
        assert_eq!(Mat3f::from(m4), Mat3f::from_quat(q));
        assert_abs_diff_eq!(m4 * v.extend(1.0), (q * v).extend(1.0), epsilon = 1e-4);
    }
}

#[test]
fn composition_applies_right_operand_first() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0005);
    for _ in 0..ITERATIONS {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);
        let v = random_vec3(&mut rng, 10.0);

        assert_abs_diff_eq!((a * b) * v, a * (b * v), epsilon = 1e-4);
        assert_abs_diff_eq!(
            Mat3f::from_quat(a * b),
            Mat3f::from_quat(a) * Mat3f::from_quat(b),
            epsilon = 1e-5
        );
    }
}

#[test]
fn slerp_endpoints() {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(0x5eed_0006);
    for _ in 0..ITERATIONS {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);

        assert_abs_diff_eq!(a.slerp(b, 0.0), a, epsilon = 1e-4);
        assert_abs_diff_eq!(a.slerp(b, 1.0), b, epsilon = 1e-4);
        assert_abs_diff_eq!(a.slerp(b, uniform(&mut rng, 0.0, 1.0)).length(), 1.0, epsilon = 1e-4);

        let u = random_axis(&mut rng);
        let w = random_axis(&mut rng);
        if u.dot(w).abs() < 0.99 {
            assert_abs_diff_eq!(u.slerp(w, 0.0), u, epsilon = 1e-4);
            assert_abs_diff_eq!(u.slerp(w, 1.0), w, epsilon = 1e-3);
        }
    }
}

#[test]
fn euler_recovers_angles() {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(0x5eed_0007);
    for _ in 0..ITERATIONS {
        let angles = vec3(
            uniform(&mut rng, -3.0, 3.0),
            uniform(&mut rng, -1.2, 1.2),
            uniform(&mut rng, -3.0, 3.0),
        );
        let q = Quatf::from_angle_axis(angles.z, Vec3f::Z)
            * Quatf::from_angle_axis(angles.y, Vec3f::Y)
            * Quatf::from_angle_axis(angles.x, Vec3f::X);
        assert_abs_diff_eq!(q.euler(), angles, epsilon = 1e-3);
    }
}

#[test]
fn between_vectors_maps_a_to_b() {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(0x5eed_0008);
    for _ in 0..ITERATIONS {
        let a = random_axis(&mut rng);
        let b = random_axis(&mut rng);
        let q = Quatf::between_vectors(a, b, Vec3f::Y);
        assert_abs_diff_eq!(q * a, b, epsilon = 1e-3);
    }
}

#[test]
fn identity_multiplication() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0009);
    for _ in 0..ITERATIONS {
        let m = Mat4f::from_fn(|_, _| uniform(&mut rng, -10.0, 10.0));
        assert_eq!(Mat4f::identity() * m, m);
        assert_eq!(m * Mat4f::identity(), m);

        let v = random_vec3(&mut rng, 10.0);
        assert_eq!(Mat3f::identity() * v, v);

        let q = random_rotation(&mut rng);
        assert_eq!(Quatf::IDENTITY * q, q);
    }
}

#[test]
fn mat3_mat4_round_trip() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_000a);
    for _ in 0..ITERATIONS {
        let m = Mat3f::from_fn(|_, _| uniform(&mut rng, -10.0, 10.0));
        let embedded = Mat4f::from(m);
        assert_eq!(Mat3f::from(embedded), m);
        assert_eq!(embedded.row(3), Vec4f::W);
    }
}

#[test]
fn rigid_inverse() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_000b);
    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        let t = random_vec3(&mut rng, 50.0);
        let m = Mat4f::identity().rotate(q).translate(t);
        let inv = m.inverse_homogeneous();

        assert_abs_diff_eq!(inv * m, Mat4f::identity(), epsilon = 1e-4);

        let p = random_vec3(&mut rng, 50.0).extend(1.0);
        assert_abs_diff_eq!(inv * (m * p), p, epsilon = 1e-3);
    }
}

#[test]
fn projections_map_near_and_far() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_000c);
    for _ in 0..ITERATIONS {
        let near = uniform(&mut rng, 0.1, 10.0);
        let far = near + uniform(&mut rng, 1.0, 100.0);
        let fov = uniform(&mut rng, 30.0, 120.0) * DEG_TO_RAD;

        for proj in [
            Mat4f::perspective(uniform(&mut rng, 1.0, 2000.0), uniform(&mut rng, 1.0, 2000.0), fov, near, far),
            Mat4f::ortho_centered(uniform(&mut rng, 1.0, 10.0), uniform(&mut rng, 1.0, 10.0), near, far),
        ] {
            let n = proj * vec4(0.0, 0.0, -near, 1.0);
            let f = proj * vec4(0.0, 0.0, -far, 1.0);
            assert_abs_diff_eq!(n.z / n.w, -1.0, epsilon = 1e-3);
            assert_abs_diff_eq!(f.z / f.w, 1.0, epsilon = 1e-3);
        }
    }
}
