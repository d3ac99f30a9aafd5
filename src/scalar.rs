//! Scalar helpers.

pub use std::f32::consts::PI;

/// Convert degrees to radians.
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.
}

/// Convert radians to degrees.
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180. / PI
}

/// Linearly interpolate from `a` (at `t = 0`) to `b` (at `t = 1`). `t` isn't clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1. - t) + b * t
}
