//! Tolerance comparisons, via the `approx` traits. Compound values compare equal when every
//! component does.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{mat4::Mat4, vec3::Vec3, vec4::Vec4};

macro_rules! impl_approx {
    ($t:ty { $($f:ident),+ }) => {
        impl AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(self.$f.abs_diff_eq(&other.$f, epsilon))&&+
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(self.$f.relative_eq(&other.$f, epsilon, max_relative))&&+
            }
        }

        impl UlpsEq for $t {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                $(self.$f.ulps_eq(&other.$f, epsilon, max_ulps))&&+
            }
        }
    };
}

impl_approx!(Vec3 { x, y, z });
impl_approx!(Vec4 { x, y, z, w });
impl_approx!(Mat4 { x, y, z, p });

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{abs_diff_eq, relative_eq, ulps_eq};

    #[test]
    fn every_component_must_match() {
        let a = Vec4::new(1., 2., 3., 4.);
        assert!(abs_diff_eq!(a, a + Vec4::splat(1e-4), epsilon = 1e-3));
        assert!(!abs_diff_eq!(a, a + Vec4::new(0., 0., 0., 1e-2), epsilon = 1e-3));
        assert!(relative_eq!(Vec3::new(1000., 0., 0.), Vec3::new(1000.0001, 0., 0.), max_relative = 1e-6));
        assert!(ulps_eq!(Mat4::IDENTITY, Mat4::new_scaler(1.)));
        assert!(!ulps_eq!(Mat4::IDENTITY, Mat4::new_scaler(1.1)));
    }

    #[test]
    fn nan_is_never_close() {
        let nan = Vec3::new(f32::NAN, 0., 0.);
        assert!(!abs_diff_eq!(nan, nan, epsilon = 1.));
    }
}
