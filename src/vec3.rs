//! Len-3 vectors.

use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::{contract, error::MathError, ops::impl_vec_ops, scalar};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
/// A len-3 column vector. Equality is exact; use the `approx` traits for tolerance.
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_vec_ops!(Vec3 { x, y, z });

impl Vec3 {
    pub const ZERO: Self = Self::splat(0.);
    pub const ONE: Self = Self::splat(1.);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Broadcast one value to every component.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn new_zero() -> Self {
        Self::ZERO
    }

    /// Checked component access.
    pub fn get(&self, i: usize) -> Result<f32, MathError> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::IndexOutOfRange { index: i, len: 3 }),
        }
    }

    pub fn mag(&self) -> f32 {
        self.mag_sq().sqrt()
    }

    /// Squared magnitude. Cheaper than `mag` when only comparing lengths.
    pub fn mag_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalize, modifying in place. A zero vector becomes NaN.
    pub fn normalize(&mut self) {
        *self = self.to_normalized();
    }

    /// Returns the normalised version of the vector. A zero vector gives NaN components.
    pub fn to_normalized(&self) -> Self {
        let mag_recip = 1. / self.mag();

        Self {
            x: self.x * mag_recip,
            y: self.y * mag_recip,
            z: self.z * mag_recip,
        }
    }

    /// Calculate the cross product. Right-handed.
    pub fn cross(&self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    pub fn dot(&self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn lerp(&self, rhs: Self, t: f32) -> Self {
        Self {
            x: scalar::lerp(self.x, rhs.x, t),
            y: scalar::lerp(self.y, rhs.y, t),
            z: scalar::lerp(self.z, rhs.z, t),
        }
    }

    pub fn to_bytes(&self) -> [u8; 12] {
        let mut result = [0; 12];

        result[0..4].clone_from_slice(&self.x.to_le_bytes());
        result[4..8].clone_from_slice(&self.y.to_le_bytes());
        result[8..12].clone_from_slice(&self.z.to_le_bytes());

        result
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[track_caller]
    fn index(&self, i: usize) -> &Self::Output {
        contract::check(i < 3, "Vec3 index < 3");
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        contract::check(i < 3, "Vec3 index < 3");
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = MathError;

    fn try_from(v: &[f32]) -> Result<Self, Self::Error> {
        let arr: [f32; 3] = v.try_into().map_err(|_| MathError::SliceLength {
            expected: 3,
            found: v.len(),
        })?;
        Ok(arr.into())
    }
}
