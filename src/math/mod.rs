//! 2D affine transforms in homogeneous coordinates.
//!
//! Matrices are 3x3, stored column-major as `[f32; 9]` so they can be handed
//! to a shader uniform unchanged:
//!
//! ```text
//!  i         j         T
//! [i0 i1 0,  j0 j1 0,  T0 T1 1]
//! ```
//!
//! Vectors are multiplied on the right, so `a.multiply(&b)` applied to `v`
//! applies `b` first and then `a`. To compose translation, rotation and scale
//! and then transform a point:
//!
//! ```
//! # use transform2d::math::{Mat3, Vec3H};
//! let matrix = Mat3::identity()
//!     .multiply(&Mat3::translation(3.0, 4.0))
//!     .multiply(&Mat3::rotation(0.0))
//!     .multiply(&Mat3::scale(2.0, 2.0));
//! let p = matrix.multiply_vector(Vec3H::point(1.0, 1.0));
//! assert_eq!(p, Vec3H::point(5.0, 6.0));
//! ```
//!
//! [`Mat3`] and [`Vec3H`] are infallible. [`Transforms`] is the validated
//! surface for untyped buffers and untrusted scalars.

pub use checked::Transforms;
pub use error::{Result, TransformError};
pub use mat3::Mat3;
pub use vec3::Vec3H;

mod checked;
mod error;
mod mat3;
mod vec3;
