use bevy::log::debug;

use crate::check;
use crate::contract::{Catalog, ContractMode, Contracts, Value};

use super::error::{Result, TransformError};
use super::mat3::Mat3;
use super::vec3::Vec3H;

/// Validated transform operations.
///
/// Scalars must be finite and buffers must have the exact shape. With
/// contracts enabled, violations are also reported on the diagnostic channel
/// and returned as [`TransformError::Contract`]. Shape and finiteness are
/// enforced in every mode: a malformed input never reaches the arithmetic.
#[derive(Clone, Debug)]
pub struct Transforms {
    contracts: Contracts,
    catalog: Catalog,
}

impl Transforms {
    pub fn new(contracts: Contracts) -> Self {
        let catalog = Catalog::new(&contracts);
        debug!("Transform checks running in {:?} mode", contracts.mode());
        Self { contracts, catalog }
    }

    pub fn mode(&self) -> ContractMode {
        self.contracts.mode()
    }

    pub fn identity(&self) -> Mat3 {
        Mat3::identity()
    }

    pub fn translation(&self, dx: f32, dy: f32) -> Result<Mat3> {
        self.require_finite("translation", &[dx, dy])?;
        Ok(Mat3::translation(dx, dy))
    }

    pub fn rotation(&self, angle: f32) -> Result<Mat3> {
        self.require_finite("rotation", &[angle])?;
        Ok(Mat3::rotation(angle))
    }

    pub fn scale(&self, sx: f32, sy: f32) -> Result<Mat3> {
        self.require_finite("scale", &[sx, sy])?;
        Ok(Mat3::scale(sx, sy))
    }

    /// Multiply two untyped buffers as 3x3 matrices, `a * b`.
    pub fn multiply(&self, a: &[f32], b: &[f32]) -> Result<Mat3> {
        check!(self.contracts, self.catalog.is_mat3.check(&[a.into(), b.into()]))?;

        let a = Mat3::try_from(a)?;
        let b = Mat3::try_from(b)?;
        Ok(a.multiply(&b))
    }

    /// Apply an untyped 3x3 matrix buffer to an untyped homogeneous vector.
    pub fn multiply_vector(&self, m: &[f32], v: &[f32]) -> Result<Vec3H> {
        check!(
            self.contracts,
            self.catalog.is_mat3.check_one(m),
            self.catalog.is_vec3.check_one(v),
        )?;

        let m = Mat3::try_from(m)?;
        let v = Vec3H::try_from(v)?;
        Ok(m.multiply_vector(v))
    }

    /// `identity * T(translation) * R(angle) * S(scale)`: scale first, then
    /// rotate, then translate.
    pub fn compose(&self, translation: [f32; 2], angle: f32, scale: [f32; 2]) -> Result<Mat3> {
        let t = self.translation(translation[0], translation[1])?;
        let r = self.rotation(angle)?;
        let s = self.scale(scale[0], scale[1])?;
        Ok(self.identity().multiply(&t).multiply(&r).multiply(&s))
    }

    fn require_finite(&self, operation: &'static str, args: &[f32]) -> Result<()> {
        if self.contracts.is_enabled() {
            let values: Vec<Value<'_>> = args.iter().copied().map(Value::from).collect();
            check!(self.contracts, self.catalog.is_finite.check(&values))?;
        }

        match args.iter().position(|value| !value.is_finite()) {
            Some(index) => Err(TransformError::NonFinite {
                operation,
                index,
                value: args[index],
            }),
            None => Ok(()),
        }
    }
}

impl Default for Transforms {
    fn default() -> Self {
        Self::new(Contracts::default())
    }
}
