//! Component-wise operator impls shared by the vector types.

/// Implement component-wise `+ - * /` (and their assigning forms) against `Self`, scaling by
/// `f32` from either side, and negation.
macro_rules! impl_vec_ops {
    ($t:ident { $($f:ident),+ }) => {
        impl std::ops::Add<Self> for $t {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl std::ops::AddAssign<Self> for $t {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl std::ops::Sub<Self> for $t {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl std::ops::SubAssign<Self> for $t {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }

        /// Component-wise (Hadamard) product.
        impl std::ops::Mul<Self> for $t {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl std::ops::MulAssign<Self> for $t {
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$f *= rhs.$f;)+
            }
        }

        impl std::ops::Div<Self> for $t {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Self { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl std::ops::DivAssign<Self> for $t {
            fn div_assign(&mut self, rhs: Self) {
                $(self.$f /= rhs.$f;)+
            }
        }

        impl std::ops::Mul<f32> for $t {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self::Output {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl std::ops::Mul<$t> for f32 {
            type Output = $t;

            fn mul(self, rhs: $t) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::MulAssign<f32> for $t {
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$f *= rhs;)+
            }
        }

        // Scalar division multiplies by the reciprocal.
        impl std::ops::Div<f32> for $t {
            type Output = Self;

            fn div(self, rhs: f32) -> Self::Output {
                self * (1. / rhs)
            }
        }

        impl std::ops::DivAssign<f32> for $t {
            fn div_assign(&mut self, rhs: f32) {
                *self *= 1. / rhs;
            }
        }

        impl std::ops::Neg for $t {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { $($f: -self.$f),+ }
            }
        }
    };
}

pub(crate) use impl_vec_ops;
