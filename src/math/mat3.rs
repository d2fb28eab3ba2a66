use std::ops::{Index, Mul};

use super::error::TransformError;
use super::vec3::Vec3H;

/// A 3x3 homogeneous transform matrix, column-major.
///
/// Every constructor leaves the last row at `(0, 0, 1)` and `multiply` keeps
/// it there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3([f32; 9]);

impl Mat3 {
    pub const IDENTITY: Self = Self([
    //  i              j              T
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
    ]);

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translate by `(dx, dy)`.
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self([
        //  i              j              T
            1.0, 0.0, 0.0, 0.0, 1.0, 0.0, dx, dy, 1.0,
        ])
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self([
        //  i            j            T
            c, s, 0.0,   -s, c, 0.0,  0.0, 0.0, 1.0,
        ])
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self([
        //  i             j             T
            sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub const fn from_cols_array(cols: [f32; 9]) -> Self {
        Self(cols)
    }

    /// The matrix product `self * rhs`: `rhs` is applied first.
    pub fn multiply(&self, rhs: &Mat3) -> Mat3 {
        let (a, b) = (&self.0, &rhs.0);
        let mut m = [0.0_f32; 9];

        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    m[i + 3 * j] += a[i + 3 * k] * b[k + 3 * j];
                }
            }
        }

        Mat3(m)
    }

    pub fn multiply_vector(&self, v: Vec3H) -> Vec3H {
        let m = &self.0;
        let mut v2 = [0.0_f32; 3];

        for i in 0..3 {
            for j in 0..3 {
                v2[j] += m[3 * i + j] * v[i];
            }
        }

        Vec3H::from(v2)
    }

    pub fn to_cols_array(&self) -> [f32; 9] {
        self.0
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Column `j`: 0 is the i basis vector, 1 the j basis vector, 2 the translation.
    pub fn column(&self, j: usize) -> Vec3H {
        Vec3H::new(self.0[3 * j], self.0[3 * j + 1], self.0[3 * j + 2])
    }

    /// Logical row `i`, read across the columns.
    pub fn row(&self, i: usize) -> [f32; 3] {
        [self.0[i], self.0[i + 3], self.0[i + 6]]
    }

    pub fn is_affine(&self) -> bool {
        self.row(2) == [0.0, 0.0, 1.0]
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Same layout as ours, ready to be handed to the render binding.
    pub fn to_bevy(&self) -> bevy::math::Mat3 {
        bevy::math::Mat3::from_cols_array(&self.0)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(cols: [f32; 9]) -> Self {
        Self(cols)
    }
}

impl TryFrom<&[f32]> for Mat3 {
    type Error = TransformError;

    fn try_from(data: &[f32]) -> Result<Self, Self::Error> {
        let cols: [f32; 9] = data.try_into().map_err(|_| TransformError::ShapeMismatch {
            shape: "mat3",
            expected: 9,
            actual: data.len(),
        })?;
        Ok(Self(cols))
    }
}

impl Index<usize> for Mat3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3H> for Mat3 {
    type Output = Vec3H;

    fn mul(self, rhs: Vec3H) -> Vec3H {
        self.multiply_vector(rhs)
    }
}
