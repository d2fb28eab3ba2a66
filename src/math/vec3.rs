use std::ops::Index;

use super::error::TransformError;

/// A 2D point (`w = 1`) or direction (`w = 0`) in homogeneous coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3H([f32; 3]);

impl Vec3H {
    pub const ZERO: Self = Self([0.0; 3]);

    pub const fn new(x: f32, y: f32, w: f32) -> Self {
        Self([x, y, w])
    }

    pub const fn point(x: f32, y: f32) -> Self {
        Self([x, y, 1.0])
    }

    pub const fn direction(x: f32, y: f32) -> Self {
        Self([x, y, 0.0])
    }

    pub fn x(self) -> f32 {
        self.0[0]
    }

    pub fn y(self) -> f32 {
        self.0[1]
    }

    pub fn w(self) -> f32 {
        self.0[2]
    }

    pub fn is_point(self) -> bool {
        self.0[2] == 1.0
    }

    pub fn is_direction(self) -> bool {
        self.0[2] == 0.0
    }

    pub fn to_array(self) -> [f32; 3] {
        self.0
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl From<[f32; 3]> for Vec3H {
    fn from(components: [f32; 3]) -> Self {
        Self(components)
    }
}

impl TryFrom<&[f32]> for Vec3H {
    type Error = TransformError;

    fn try_from(data: &[f32]) -> Result<Self, Self::Error> {
        let components: [f32; 3] = data.try_into().map_err(|_| TransformError::ShapeMismatch {
            shape: "vec3",
            expected: 3,
            actual: data.len(),
        })?;
        Ok(Self(components))
    }
}

impl Index<usize> for Vec3H {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}
