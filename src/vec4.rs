//! Len-4 vectors. Used as matrix columns, and as homogeneous points (`w = 1`) and
//! directions (`w = 0`).

use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::{contract, error::MathError, ops::impl_vec_ops, scalar, vec3::Vec3};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
/// A len-4 column vector
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vec_ops!(Vec4 { x, y, z, w });

impl Vec4 {
    pub const ZERO: Self = Self::splat(0.);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn splat(v: f32) -> Self {
        Self {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }

    /// Lift a len-3 vector, with an explicit `w`.
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w,
        }
    }

    /// A point: `w = 1`.
    pub const fn new_point(v: Vec3) -> Self {
        Self::from_vec3(v, 1.)
    }

    /// A direction: `w = 0`. Unaffected by translation.
    pub const fn new_dir(v: Vec3) -> Self {
        Self::from_vec3(v, 0.)
    }

    /// Drop `w`. No perspective divide.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Remove the nth element. Used in our cofactor calculations.
    pub(crate) fn truncate_n(&self, n: usize) -> Vec3 {
        match n {
            0 => Vec3::new(self.y, self.z, self.w),
            1 => Vec3::new(self.x, self.z, self.w),
            2 => Vec3::new(self.x, self.y, self.w),
            _ => Vec3::new(self.x, self.y, self.z),
        }
    }

    pub fn get(&self, i: usize) -> Result<f32, MathError> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::IndexOutOfRange { index: i, len: 4 }),
        }
    }

    pub fn mag(&self) -> f32 {
        self.mag_sq().sqrt()
    }

    pub fn mag_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn normalize(&mut self) {
        *self = self.to_normalized();
    }

    /// Normalizes over all four components, `w` included.
    pub fn to_normalized(&self) -> Self {
        *self * (1. / self.mag())
    }

    pub fn dot(&self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    pub fn lerp(&self, rhs: Self, t: f32) -> Self {
        Self {
            x: scalar::lerp(self.x, rhs.x, t),
            y: scalar::lerp(self.y, rhs.y, t),
            z: scalar::lerp(self.z, rhs.z, t),
            w: scalar::lerp(self.w, rhs.w, t),
        }
    }

    pub fn to_bytes(&self) -> [u8; 16] {
        let mut result = [0; 16];

        result[0..4].clone_from_slice(&self.x.to_le_bytes());
        result[4..8].clone_from_slice(&self.y.to_le_bytes());
        result[8..12].clone_from_slice(&self.z.to_le_bytes());
        result[12..16].clone_from_slice(&self.w.to_le_bytes());

        result
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[track_caller]
    fn index(&self, i: usize) -> &Self::Output {
        contract::check(i < 4, "Vec4 index < 4");
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => &self.w,
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        contract::check(i < 4, "Vec4 index < 4");
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => &mut self.w,
        }
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = MathError;

    fn try_from(v: &[f32]) -> Result<Self, Self::Error> {
        let arr: [f32; 4] = v.try_into().map_err(|_| MathError::SliceLength {
            expected: 4,
            found: v.len(),
        })?;
        Ok(arr.into())
    }
}
