//! 4x4 matrices, and constructors for the transforms used in 3d graphics.
//!
//! Data and operations are column-major, with column vectors: `m * v` is
//! `m.x * v.x + m.y * v.y + m.z * v.z + m.p * v.w`, and `a * b` applies `b` first.

use std::{
    fmt,
    ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign},
};

use bytemuck::{Pod, Zeroable};

use crate::{contract, error::MathError, vec3::Vec3, vec4::Vec4};

pub const MAT4_SIZE: usize = 64;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
/// A 4x4 matrix, stored as four columns. `x`, `y` and `z` are the basis vectors; `p` is the
/// translation (position) column.
pub struct Mat4 {
    pub x: Vec4,
    pub y: Vec4,
    pub z: Vec4,
    pub p: Vec4,
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Determinant of the 3x3 matrix with columns `a`, `b`, `c`.
fn det3(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    a.dot(b.cross(c))
}

impl Mat4 {
    pub const IDENTITY: Self = Self::from_cols(
        Vec4::new(1., 0., 0., 0.),
        Vec4::new(0., 1., 0., 0.),
        Vec4::new(0., 0., 1., 0.),
        Vec4::new(0., 0., 0., 1.),
    );

    /// Create a matrix from 16 values. Each consecutive group of four is one column, so a
    /// `#[rustfmt::skip]` literal reads as the transpose of the logical matrix.
    #[rustfmt::skip]
    pub const fn new(d: [f32; 16]) -> Self {
        Self {
            x: Vec4::new(d[0], d[1], d[2], d[3]),
            y: Vec4::new(d[4], d[5], d[6], d[7]),
            z: Vec4::new(d[8], d[9], d[10], d[11]),
            p: Vec4::new(d[12], d[13], d[14], d[15]),
        }
    }

    pub const fn from_cols(x: Vec4, y: Vec4, z: Vec4, p: Vec4) -> Self {
        Self { x, y, z, p }
    }

    pub fn new_identity() -> Self {
        Self::IDENTITY
    }

    /// Returns cols: x, y, z, p
    pub fn to_cols(&self) -> [Vec4; 4] {
        [self.x, self.y, self.z, self.p]
    }

    /// Checked column access.
    pub fn col(&self, i: usize) -> Result<Vec4, MathError> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.p),
            _ => Err(MathError::IndexOutOfRange { index: i, len: 4 }),
        }
    }

    /// Row `i` of the logical matrix.
    #[track_caller]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.x[i], self.y[i], self.z[i], self.p[i])
    }

    pub fn rows(&self) -> [Vec4; 4] {
        [self.row(0), self.row(1), self.row(2), self.row(3)]
    }

    /// Determinant of the 3x3 left after removing column `col` and row `row`.
    fn minor(&self, col: usize, row: usize) -> f32 {
        let cols = self.to_cols();
        let [a, b, c] = match col {
            0 => [1, 2, 3],
            1 => [0, 2, 3],
            2 => [0, 1, 3],
            _ => [0, 1, 2],
        };

        det3(
            cols[a].truncate_n(row),
            cols[b].truncate_n(row),
            cols[c].truncate_n(row),
        )
    }

    /// Signed minor for the element at (`col`, `row`).
    fn cofactor(&self, col: usize, row: usize) -> f32 {
        let sign = if (col + row) & 1 == 1 { -1. } else { 1. };
        sign * self.minor(col, row)
    }

    /// Calculate the matrix's determinant, by cofactor expansion down the `x` column.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|row| self.x[row] * self.cofactor(0, row)).sum()
    }

    /// Transpose the matrix
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        let Self { x, y, z, p } = *self;
        Self::new([
            x.x, y.x, z.x, p.x,
            x.y, y.y, z.y, p.y,
            x.z, y.z, z.z, p.z,
            x.w, y.w, z.w, p.w,
        ])
    }

    /// The adjugate: transpose of the cofactor matrix.
    fn adjugate(&self) -> Self {
        // Element (col c, row r) of the adjugate is the cofactor at (col r, row c).
        let col = |c: usize| {
            Vec4::new(
                self.cofactor(0, c),
                self.cofactor(1, c),
                self.cofactor(2, c),
                self.cofactor(3, c),
            )
        };
        Self::from_cols(col(0), col(1), col(2), col(3))
    }

    /// The adjugate, and the determinant. Expanding down the x column reuses the adjugate's
    /// first row.
    fn adjugate_and_det(&self) -> (Self, f32) {
        let adjugate = self.adjugate();
        let det = self.x.dot(adjugate.row(0));
        (adjugate, det)
    }

    /// General inverse, via the adjugate. The determinant must be nonzero; a singular matrix
    /// fails a contract check, or yields Inf/NaN when checks are off. See `try_inverse` for
    /// the checked form.
    #[track_caller]
    pub fn inverse(&self) -> Self {
        let (adjugate, det) = self.adjugate_and_det();
        contract::check(det != 0., "determinant != 0");

        adjugate * (1. / det)
    }

    /// General inverse, or `MathError::Singular` if the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let (adjugate, det) = self.adjugate_and_det();
        if det == 0. {
            return Err(MathError::Singular);
        }

        Ok(adjugate * (1. / det))
    }

    /// Inverse of a rigid transform (rotation plus translation, no scale or shear): transpose
    /// the rotation block, and rotate the negated translation by it. Gives wrong results for
    /// anything that isn't rigid. The bottom row must be `(0, 0, 0, 1)`.
    #[track_caller]
    #[rustfmt::skip]
    pub fn inverse_rigid(&self) -> Self {
        contract::check(
            self.row(3) == Vec4::new(0., 0., 0., 1.),
            "rigid transform has an affine bottom row",
        );

        let (rx, ry, rz) = (self.x.xyz(), self.y.xyz(), self.z.xyz());
        let t = self.p.xyz();

        Self::new([
            rx.x, ry.x, rz.x, 0.,
            rx.y, ry.y, rz.y, 0.,
            rx.z, ry.z, rz.z, 0.,
            -rx.dot(t), -ry.dot(t), -rz.dot(t), 1.,
        ])
    }

    /// Rotation about the x axis, in radians. Positive angles turn +Y towards +Z.
    #[rustfmt::skip]
    pub fn new_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1., 0., 0., 0.,
            0., c, s, 0.,
            0., -s, c, 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Rotation about the y axis, in radians. Positive angles turn +Z towards +X.
    #[rustfmt::skip]
    pub fn new_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0., -s, 0.,
            0., 1., 0., 0.,
            s, 0., c, 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Rotation about the z axis, in radians. Positive angles turn +X towards +Y.
    #[rustfmt::skip]
    pub fn new_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0., 0.,
            -s, c, 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Rotation from Euler angles, in radians: yaw (about y) is applied first, then pitch
    /// (about x), then roll (about z). Equal to
    /// `new_rotation_z(roll) * new_rotation_x(pitch) * new_rotation_y(yaw)`.
    #[rustfmt::skip]
    pub fn new_rotation(pitch: f32, yaw: f32, roll: f32) -> Self {
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();
        let (sr, cr) = roll.sin_cos();

        Self::new([
            cr * cy - sr * sp * sy, sr * cy + cr * sp * sy, -cp * sy, 0.,
            -sr * cp, cr * cp, sp, 0.,
            cr * sy + sr * sp * cy, sr * sy - cr * sp * cy, cp * cy, 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Create a translation matrix: the identity basis, with `position` as the `p` column.
    pub fn new_translation(position: Vec4) -> Self {
        Self {
            p: position,
            ..Self::IDENTITY
        }
    }

    /// Uniform scale.
    #[rustfmt::skip]
    pub fn new_scaler(scale: f32) -> Self {
        Self::new([
            scale, 0., 0., 0.,
            0., scale, 0., 0.,
            0., 0., scale, 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Right-handed perspective projection, mapping depth to [-1, 1]. Field of view is in
    /// radians. Aspect is width / height.
    #[rustfmt::skip]
    pub fn new_perspective_rh(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = 1. / (fov_y / 2.).tan();
        let range_inv = 1. / (near - far);

        Self::new([
            f / aspect_ratio, 0., 0., 0.,
            0., f, 0., 0.,
            0., 0., (near + far) * range_inv, -1.,
            0., 0., 2. * far * near * range_inv, 0.,
        ])
    }

    /// Orthographic projection mapping the box to [-1, 1] on every axis. Right-handed: the
    /// camera looks down -Z, so `near` maps to -1 and `far` to 1.
    #[rustfmt::skip]
    pub fn new_orthographic(left: f32, top: f32, right: f32, bottom: f32, near: f32, far: f32) -> Self {
        let w_inv = 1. / (right - left);
        let h_inv = 1. / (top - bottom);
        let d_inv = 1. / (far - near);

        Self::new([
            2. * w_inv, 0., 0., 0.,
            0., 2. * h_inv, 0., 0.,
            0., 0., -2. * d_inv, 0.,
            -(right + left) * w_inv, -(top + bottom) * h_inv, -(far + near) * d_inv, 1.,
        ])
    }

    /// Right-handed view matrix: moves `eye` to the origin, looking down -Z at `target`,
    /// with `up` as a hint for +Y.
    #[rustfmt::skip]
    pub fn new_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let fwd = (target - eye).to_normalized();
        let right = fwd.cross(up).to_normalized();
        let up = right.cross(fwd);

        Self::new([
            right.x, up.x, -fwd.x, 0.,
            right.y, up.y, -fwd.y, 0.,
            right.z, up.z, -fwd.z, 0.,
            -right.dot(eye), -up.dot(eye), fwd.dot(eye), 1.,
        ])
    }

    /// Column-major floats: x, y, z, p.
    pub fn as_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }

    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        bytemuck::cast(*self)
    }

    /// 16 little-endian floats, column-major. Ready to write to a uniform buffer.
    pub fn to_bytes(&self) -> [u8; MAT4_SIZE] {
        let mut result = [0; MAT4_SIZE];

        for (i, col) in self.to_cols().iter().enumerate() {
            result[i * 16..(i + 1) * 16].clone_from_slice(&col.to_bytes());
        }

        result
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    #[track_caller]
    fn index(&self, i: usize) -> &Self::Output {
        contract::check(i < 4, "Mat4 column index < 4");
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => &self.p,
        }
    }
}

impl IndexMut<usize> for Mat4 {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        contract::check(i < 4, "Mat4 column index < 4");
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => &mut self.p,
        }
    }
}

impl Mul<Self> for Mat4 {
    type Output = Self;

    /// `(a * b) * v == a * (b * v)`.
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
            p: self * rhs.p,
        }
    }
}

impl MulAssign<Self> for Mat4 {
    /// Right-multiply: `self = self * rhs`.
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.p * rhs.w
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            p: self.p * rhs,
        }
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        self * (1. / rhs)
    }
}

impl DivAssign<f32> for Mat4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(d: [f32; 16]) -> Self {
        Self::new(d)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(m: Mat4) -> Self {
        m.as_array()
    }
}

/// Each inner array is a column.
impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(m: [[f32; 4]; 4]) -> Self {
        Self::from_cols(m[0].into(), m[1].into(), m[2].into(), m[3].into())
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(m: Mat4) -> Self {
        m.to_cols_array_2d()
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(d: &[f32]) -> Result<Self, Self::Error> {
        let arr: [f32; 16] = d.try_into().map_err(|_| MathError::SliceLength {
            expected: 16,
            found: d.len(),
        })?;
        Ok(Self::new(arr))
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in self.rows() {
            writeln!(f, "|{:.2} {:.2} {:.2} {:.2}|", r.x, r.y, r.z, r.w)?;
        }

        Ok(())
    }
}
