use std::fmt;
use std::sync::Arc;

use super::diagnostic::Diagnostic;
use super::value::Value;
use super::Contracts;

type Predicate = dyn for<'a, 'b> Fn(&'a Value<'b>) -> Value<'static> + Send + Sync;

fn erase<F>(predicate: F) -> Arc<Predicate>
where
    F: for<'a, 'b> Fn(&'a Value<'b>) -> Value<'static> + Send + Sync + 'static,
{
    Arc::new(predicate)
}

/// Outcome of running a [`Checker`] over its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every argument satisfied the predicate.
    Pass,
    /// The argument at this position failed the predicate.
    Fail(usize),
    /// The call itself was malformed. Not the same as `Fail`.
    Inconclusive,
    /// The checker is inert (contracts disabled).
    Skipped,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }

    pub fn is_fail(self) -> bool {
        matches!(self, Verdict::Fail(_))
    }
}

impl From<Verdict> for Value<'_> {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Pass => Value::Boolean(true),
            Verdict::Fail(_) => Value::Boolean(false),
            Verdict::Inconclusive => Value::Null,
            Verdict::Skipped => Value::Undefined,
        }
    }
}

/// One input to [`Contracts::assert_all`]: the value to test, and for a
/// failed [`Verdict`] the position of the argument that failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Condition<'a> {
    pub value: Value<'a>,
    pub argument: Option<usize>,
}

impl From<Verdict> for Condition<'_> {
    fn from(verdict: Verdict) -> Self {
        let argument = match verdict {
            Verdict::Fail(index) => Some(index),
            _ => None,
        };
        Self {
            value: verdict.into(),
            argument,
        }
    }
}

impl<'a> From<Value<'a>> for Condition<'a> {
    fn from(value: Value<'a>) -> Self {
        Self { value, argument: None }
    }
}

impl From<bool> for Condition<'_> {
    fn from(b: bool) -> Self {
        Value::Boolean(b).into()
    }
}

impl<'a> From<&'a str> for Condition<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s).into()
    }
}

/// A variadic validator wrapping a single-argument predicate.
///
/// Built with [`Contracts::make_checker`]. When contracts are disabled the
/// checker holds no predicate and every call returns [`Verdict::Skipped`].
#[derive(Clone)]
pub struct Checker {
    name: &'static str,
    predicate: Option<Arc<Predicate>>,
    contracts: Contracts,
}

impl Checker {
    pub(super) fn new<F, R>(contracts: &Contracts, name: &'static str, predicate: F) -> Self
    where
        F: Fn(&Value<'_>) -> R + Send + Sync + 'static,
        R: Into<Value<'static>>,
    {
        let predicate: Option<Arc<Predicate>> = if contracts.is_enabled() {
            Some(erase(move |value| predicate(value).into()))
        } else {
            None
        };
        Self {
            name,
            predicate,
            contracts: contracts.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_inert(&self) -> bool {
        self.predicate.is_none()
    }

    /// Apply the predicate to each argument in order.
    ///
    /// Stops at the first failing argument, and at the first non-boolean
    /// predicate result (logged as a usage error).
    pub fn check(&self, args: &[Value<'_>]) -> Verdict {
        let Some(predicate) = &self.predicate else {
            return Verdict::Skipped;
        };

        if args.is_empty() {
            self.contracts
                .report(&Diagnostic::NoArguments { checker: self.name });
            return Verdict::Inconclusive;
        }

        for (index, argument) in args.iter().enumerate() {
            match predicate(argument) {
                Value::Boolean(true) => {}
                Value::Boolean(false) => return Verdict::Fail(index),
                other => {
                    self.contracts.report(&Diagnostic::NonBooleanPredicate {
                        checker: self.name,
                        index,
                        kind: other.kind(),
                        value: other.to_string(),
                    });
                    return Verdict::Inconclusive;
                }
            }
        }

        Verdict::Pass
    }

    /// Shorthand for checking a single value.
    pub fn check_one<'v>(&self, value: impl Into<Value<'v>>) -> Verdict {
        self.check(&[value.into()])
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("name", &self.name)
            .field("inert", &self.is_inert())
            .finish()
    }
}
