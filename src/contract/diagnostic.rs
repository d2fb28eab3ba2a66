use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use bevy::log::error;

use super::value::ValueKind;

/// One contract violation, as delivered to a [`DiagnosticSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A checker was invoked without any argument.
    NoArguments { checker: &'static str },
    /// A predicate returned something other than a boolean.
    NonBooleanPredicate {
        checker: &'static str,
        index: usize,
        kind: ValueKind,
        value: String,
    },
    /// `assert_all` was invoked without any condition.
    NoConditions,
    ConditionNotBoolean { index: usize, kind: ValueKind },
    /// `argument` is the failing position inside the checker call, when known.
    ConditionFailed { index: usize, argument: Option<usize> },
}

impl Diagnostic {
    /// Usage errors mean the contract machinery itself was misused.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, Diagnostic::ConditionFailed { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoArguments { checker } => write!(
                f,
                "{checker} called with no arguments (must take 1 or more arguments)"
            ),
            Diagnostic::NonBooleanPredicate { checker, index, kind, value } => write!(
                f,
                "{checker}: predicate result for argument {index} is not boolean, it is {kind}, with value: {value}"
            ),
            Diagnostic::NoConditions => {
                f.write_str("check called with no conditions (must take 1 or more conditions)")
            }
            Diagnostic::ConditionNotBoolean { index, kind } => {
                write!(f, "check {index} is not boolean, it is {kind}")
            }
            Diagnostic::ConditionFailed { index, argument: None } => {
                write!(f, "check {index} is false")
            }
            Diagnostic::ConditionFailed { index, argument: Some(argument) } => {
                write!(f, "check {index} is false (argument {argument} failed)")
            }
        }
    }
}

/// Receives one message per contract violation.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Default sink: every violation becomes an `error!` log line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        error!("[CONTRACT] {}", diagnostic);
    }
}

/// Keeps every reported violation in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub(super) entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Poisoning is ignored; entries stay readable
    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}
