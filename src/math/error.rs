use thiserror::Error;

use crate::contract::ContractError;

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// An untyped buffer did not have the length its shape requires.
    #[error("{shape} needs exactly {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("argument {index} of {operation} is not finite: {value}")]
    NonFinite {
        operation: &'static str,
        index: usize,
        value: f32,
    },

    #[error(transparent)]
    Contract(#[from] ContractError),
}
