//! Algebraic properties of the vector and matrix types, over randomized inputs.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use gamesmith_math::{deg_to_rad, scalar::PI, Mat4, Vec3, Vec4};

const RUNS: usize = 200;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x6a6d_5f6d_6174_6873)
}

/// Uniform in [-range, range).
fn val(rng: &mut fastrand::Rng, range: f32) -> f32 {
    (rng.f32() * 2. - 1.) * range
}

fn vec3(rng: &mut fastrand::Rng) -> Vec3 {
    Vec3::new(val(rng, 10.), val(rng, 10.), val(rng, 10.))
}

fn vec4(rng: &mut fastrand::Rng) -> Vec4 {
    Vec4::new(val(rng, 10.), val(rng, 10.), val(rng, 10.), val(rng, 10.))
}

/// A well-conditioned transform: rotation, scale and translation.
fn transform(rng: &mut fastrand::Rng) -> Mat4 {
    let rot = Mat4::new_rotation(val(rng, PI), val(rng, PI), val(rng, PI));
    let scale = Mat4::new_scaler(0.5 + rng.f32() * 2.);
    let pos = Vec4::new_point(vec3(rng));
    Mat4::new_translation(pos) * rot * scale
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let u = vec3(&mut rng);
        if u.mag() > 1e-3 {
            assert_abs_diff_eq!(u.to_normalized().mag_sq(), 1., epsilon = 1e-5);
        }

        let v = vec4(&mut rng);
        if v.mag() > 1e-3 {
            assert_abs_diff_eq!(v.to_normalized().mag_sq(), 1., epsilon = 1e-5);
        }
    }
}

#[test]
fn cross_is_orthogonal_to_inputs() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let u = vec3(&mut rng);
        let v = vec3(&mut rng);
        let c = u.cross(v);
        // Scale the tolerance with the magnitude of the terms being summed.
        let tol = 1e-5 * (1. + c.mag() * u.mag().max(v.mag()));
        assert_abs_diff_eq!(c.dot(u), 0., epsilon = tol);
        assert_abs_diff_eq!(c.dot(v), 0., epsilon = tol);
    }
}

#[test]
fn inverse_round_trips_to_identity() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let m = transform(&mut rng);
        let inv = m.inverse();
        assert_abs_diff_eq!(inv * m, Mat4::IDENTITY, epsilon = 1e-4);
        assert_abs_diff_eq!(m * inv, Mat4::IDENTITY, epsilon = 1e-4);
        assert_eq!(m.try_inverse(), Ok(inv));
    }
}

#[test]
fn inverse_of_projection() {
    let m = Mat4::new_perspective_rh(deg_to_rad(60.), 16. / 9., 0.1, 100.);
    assert_abs_diff_eq!(m.inverse() * m, Mat4::IDENTITY, epsilon = 1e-4);
}

#[test]
fn rigid_inverse_agrees_with_general_inverse() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let rot = Mat4::new_rotation(val(&mut rng, PI), val(&mut rng, PI), val(&mut rng, PI));
        let m = Mat4::new_translation(Vec4::new_point(vec3(&mut rng))) * rot;
        assert_abs_diff_eq!(m.inverse_rigid(), m.inverse(), epsilon = 1e-4);
    }
}

#[test]
fn double_transpose_is_exact() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let m = Mat4::from_cols(vec4(&mut rng), vec4(&mut rng), vec4(&mut rng), vec4(&mut rng));
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn transform_composition_is_associative() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let a = transform(&mut rng);
        let b = transform(&mut rng);
        let v = vec4(&mut rng);
        assert_relative_eq!((a * b) * v, a * (b * v), epsilon = 1e-3, max_relative = 1e-4);
    }
}

#[test]
fn identity_leaves_vectors_unchanged() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let v = vec4(&mut rng);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(Mat4::default() * v, v);
    }
}

#[test]
fn determinant_of_product_is_product_of_determinants() {
    let mut rng = rng();
    for _ in 0..RUNS {
        let a = transform(&mut rng);
        let b = transform(&mut rng);
        let expected = a.determinant() * b.determinant();
        assert_relative_eq!((a * b).determinant(), expected, max_relative = 1e-3);
    }
}

#[test]
fn camera_pipeline() {
    let eye = Vec3::new(0., 0., 5.);
    let view = Mat4::new_look_at(eye, Vec3::ZERO, Vec3::new(0., 1., 0.));
    let proj = Mat4::new_perspective_rh(deg_to_rad(90.), 1., 0.1, 100.);

    assert_abs_diff_eq!(proj.x.x, 1., epsilon = 1e-5);
    assert_abs_diff_eq!(proj.y.y, 1., epsilon = 1e-5);

    // The target is straight ahead, so it lands in the middle of the screen.
    let clip = proj * view * Vec4::new_point(Vec3::ZERO);
    let ndc = clip / clip.w;
    assert_abs_diff_eq!(ndc.x, 0., epsilon = 1e-5);
    assert_abs_diff_eq!(ndc.y, 0., epsilon = 1e-5);
    assert!(ndc.z > -1. && ndc.z < 1.);

    // Upload is 16 column-major floats.
    let bytes = (proj * view).to_bytes();
    assert_eq!(&bytes[0..4], &(proj * view).x.x.to_le_bytes());
}

#[test]
fn rotate_z_quarter_turn() {
    let v = Mat4::new_rotation_z(PI / 2.) * Vec4::new(1., 0., 0., 0.);
    assert_abs_diff_eq!(v, Vec4::new(0., 1., 0., 0.), epsilon = 1e-5);
}

#[test]
fn translate_point() {
    let t = Mat4::new_translation(Vec4::new(5., 0., 0., 1.));
    assert_eq!(t * Vec4::new(0., 0., 0., 1.), Vec4::new(5., 0., 0., 1.));
}
