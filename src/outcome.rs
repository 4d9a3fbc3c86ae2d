//! The result of checking a value against a type.
//!
//! [`Outcome`] is either `Success` or `Failure` carrying a non-empty list of
//! [`Reasons`]. Two chaining rules drive every composite check:
//!
//! - [`Outcome::and_also`] short-circuits: once a check has failed, later
//!   checks in the chain are never run and the first failure is kept.
//! - [`Outcome::or_else`] accumulates: when every alternative fails, the
//!   reasons of all of them are kept, in order.
//!
//! # Example
//!
//! ```rust
//! use stipulate::{Outcome, Reason, ValuePath};
//!
//! let not_string = || Outcome::failure(Reason::new(ValuePath::root(), "expected string"));
//! let not_integer = || Outcome::failure(Reason::new(ValuePath::root(), "expected integer"));
//!
//! let either = not_string().or_else(not_integer);
//! assert_eq!(either.messages(), vec!["expected string", "expected integer"]);
//!
//! let both = not_string().and_also(|| unreachable!("short-circuited"));
//! assert_eq!(both.messages(), vec!["expected string"]);
//! ```

use stillwater::prelude::*;

use crate::error::{Reason, Reasons};

/// Success, or failure with the reasons the value was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value satisfied the check.
    Success,
    /// The value was rejected.
    Failure(Reasons),
}

impl Outcome {
    /// Creates a successful outcome.
    #[inline]
    pub fn success() -> Self {
        Outcome::Success
    }

    /// Creates a failure carrying a single reason.
    #[inline]
    pub fn failure(reason: Reason) -> Self {
        Outcome::Failure(Reasons::single(reason))
    }

    /// Creates a failure from an existing reason list.
    #[inline]
    pub fn from_reasons(reasons: Reasons) -> Self {
        Outcome::Failure(reasons)
    }

    /// Returns true if the check succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Returns true if the check failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Runs `next` only if this outcome is a success.
    ///
    /// A failure is returned unchanged and `next` is never called.
    pub fn and_also<F>(self, next: F) -> Outcome
    where
        F: FnOnce() -> Outcome,
    {
        match self {
            Outcome::Success => next(),
            failure @ Outcome::Failure(_) => failure,
        }
    }

    /// Runs `alternative` only if this outcome is a failure.
    ///
    /// If the alternative also fails, the result carries this outcome's
    /// reasons followed by the alternative's.
    pub fn or_else<F>(self, alternative: F) -> Outcome
    where
        F: FnOnce() -> Outcome,
    {
        match self {
            Outcome::Success => Outcome::Success,
            Outcome::Failure(reasons) => match alternative() {
                Outcome::Success => Outcome::Success,
                Outcome::Failure(more) => Outcome::Failure(reasons.combine(more)),
            },
        }
    }

    /// Combines two already-computed outcomes, keeping the reasons of both.
    ///
    /// Unlike [`Outcome::and_also`] nothing is skipped; this is how
    /// independent checks (the bindings of a contract) report every failure.
    pub fn accumulate(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Success, other) => other,
            (failure @ Outcome::Failure(_), Outcome::Success) => failure,
            (Outcome::Failure(left), Outcome::Failure(right)) => {
                Outcome::Failure(left.combine(right))
            }
        }
    }

    /// Returns the reasons of a failure, or `None` on success.
    pub fn reasons(&self) -> Option<&Reasons> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(reasons) => Some(reasons),
        }
    }

    /// Returns the reason messages in order; empty on success.
    pub fn messages(&self) -> Vec<String> {
        self.reasons().map(Reasons::messages).unwrap_or_default()
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<(), Reasons> {
        match self {
            Outcome::Success => Ok(()),
            Outcome::Failure(reasons) => Err(reasons),
        }
    }

    /// Converts into a stillwater `Validation` for applicative combination.
    pub fn into_validation(self) -> Validation<(), Reasons> {
        match self {
            Outcome::Success => Validation::Success(()),
            Outcome::Failure(reasons) => Validation::Failure(reasons),
        }
    }
}

impl From<Validation<(), Reasons>> for Outcome {
    fn from(validation: Validation<(), Reasons>) -> Self {
        match validation {
            Validation::Success(()) => Outcome::Success,
            Validation::Failure(reasons) => Outcome::Failure(reasons),
        }
    }
}

impl From<Outcome> for Validation<(), Reasons> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_validation()
    }
}
