//! Runtime contract checking.
//!
//! A [`Checker`] wraps a one-argument predicate into a validator over any
//! number of values, and [`Contracts::assert_all`] validates a list of
//! already computed conditions. Violations go to a [`DiagnosticSink`] and are
//! also returned as [`ContractError`], so callers decide whether to proceed.
//!
//! Whether any of this runs is decided by the [`ContractMode`] carried in the
//! [`Contracts`] value handed to each consumer. In `Disabled` mode checkers
//! are inert and assertions return `Ok(())` without inspecting anything.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use catalog::Catalog;
pub use checker::{Checker, Condition, Verdict};
pub use diagnostic::{Diagnostic, DiagnosticSink, LogSink, RecordingSink};
pub use error::ContractError;
pub use value::{HandleKind, HostHandle, Value, ValueKind};

mod catalog;
mod checker;
mod diagnostic;
mod error;
mod value;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractMode {
    Debug,
    Disabled,
}

impl Default for ContractMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ContractMode::Debug
        } else {
            ContractMode::Disabled
        }
    }
}

/// Contract configuration: the mode plus where violations are reported.
#[derive(Clone)]
pub struct Contracts {
    mode: ContractMode,
    sink: Arc<dyn DiagnosticSink>,
}

impl Contracts {
    pub fn new(mode: ContractMode) -> Self {
        Self::with_sink(mode, Arc::new(LogSink))
    }

    pub fn with_sink(mode: ContractMode, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { mode, sink }
    }

    pub fn disabled() -> Self {
        Self::new(ContractMode::Disabled)
    }

    pub fn mode(&self) -> ContractMode {
        self.mode
    }

    pub fn is_enabled(&self) -> bool {
        self.mode == ContractMode::Debug
    }

    /// Wrap a single-argument predicate into a variadic [`Checker`].
    ///
    /// The predicate should return a `bool`; any other result is reported as
    /// a usage error when the checker runs.
    pub fn make_checker<F, R>(&self, name: &'static str, predicate: F) -> Checker
    where
        F: Fn(&Value<'_>) -> R + Send + Sync + 'static,
        R: Into<Value<'static>>,
    {
        Checker::new(self, name, predicate)
    }

    /// Validate pre-computed conditions. Every condition is inspected and
    /// every violation reported, then the collected violations are returned.
    pub fn assert_all(&self, conditions: &[Condition<'_>]) -> Result<(), ContractError> {
        if !self.is_enabled() {
            return Ok(());
        }

        if conditions.is_empty() {
            self.report(&Diagnostic::NoConditions);
            return Err(ContractError::NoConditions);
        }

        let mut violations = Vec::new();
        for (index, condition) in conditions.iter().enumerate() {
            let diagnostic = match condition.value {
                Value::Boolean(true) => continue,
                Value::Boolean(false) => Diagnostic::ConditionFailed {
                    index,
                    argument: condition.argument,
                },
                other => Diagnostic::ConditionNotBoolean {
                    index,
                    kind: other.kind(),
                },
            };
            self.report(&diagnostic);
            violations.push(diagnostic);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractError::Violated(violations))
        }
    }

    pub(crate) fn report(&self, diagnostic: &Diagnostic) {
        if self.is_enabled() {
            self.sink.report(diagnostic);
        }
    }
}

impl Default for Contracts {
    fn default() -> Self {
        Self::new(ContractMode::default())
    }
}

impl fmt::Debug for Contracts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contracts").field("mode", &self.mode).finish()
    }
}
