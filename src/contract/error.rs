use thiserror::Error;

use super::diagnostic::Diagnostic;

/// Failure returned by [`Contracts::assert_all`](super::Contracts::assert_all).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContractError {
    #[error("contract check called with no conditions")]
    NoConditions,

    #[error("{} contract condition(s) violated: {}", .0.len(), summarize(.0))]
    Violated(Vec<Diagnostic>),
}

impl ContractError {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ContractError::NoConditions => &[],
            ContractError::Violated(diagnostics) => diagnostics,
        }
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
