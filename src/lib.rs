//! Matrices and vectors, as used in 3d graphics. Similar to the `cgmath` and `glam` crates,
//! but with a more transparent UI.
//!
//! Matrices are column-major, and transform column vectors: `proj * view * model * v`.
//! Everything is a plain `Copy` value of `f32`s; `Mat4::to_bytes` gives the 16-float layout
//! a uniform buffer expects.
//!
//! Bad indices and inverting a singular matrix are contract violations: they log and panic
//! in debug builds (or with the `strict-checks` feature), and are unchecked otherwise. The
//! `get`, `col`, `try_inverse` and `TryFrom` APIs return a [`MathError`] instead.

mod approx_impls;
pub mod contract;
mod error;
mod mat4;
mod ops;
pub mod scalar;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat4::{Mat4, MAT4_SIZE};
pub use scalar::{deg_to_rad, lerp, rad_to_deg};
pub use vec3::Vec3;
pub use vec4::Vec4;
