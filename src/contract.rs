//! Contracts: named variable-to-type bindings checked together.
//!
//! A [`Contract`] declares which type each named variable must satisfy. The
//! caller supplies the current values explicitly through a [`Bindings`]
//! source (an `IndexMap`, a `HashMap`, or a JSON object); the contract never
//! looks anything up on its own.
//!
//! Bindings are independent, so a contract reports the failures of every
//! binding, each under a path starting with the variable name.
//!
//! # Example
//!
//! ```rust
//! use stipulate::{Contract, Query, Type};
//! use serde_json::json;
//!
//! let contract = Contract::new()
//!     .bind("count", Type::integer_in(Some(0), None))
//!     .bind("name", Type::string() & Type::is_not(Query::Empty));
//!
//! let values = json!({"count": -1, "name": ""});
//! let outcome = contract.check(values.as_object().unwrap());
//!
//! let reasons = outcome.reasons().unwrap();
//! assert_eq!(reasons.len(), 2);
//! assert_eq!(reasons.first().path.to_string(), "count");
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::{Map, Value};

use crate::error::Reason;
use crate::outcome::Outcome;
use crate::path::ValuePath;
use crate::types::Type;

/// A source of current variable values.
pub trait Bindings {
    /// Returns the value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl Bindings for IndexMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Bindings for HashMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Bindings for Map<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// A set of named type declarations.
#[derive(Debug, Clone, Default)]
pub struct Contract {
    declarations: IndexMap<String, Type>,
}

impl Contract {
    /// Creates an empty contract.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `name` must satisfy `ty`. Re-binding a name replaces
    /// its type but keeps its original position.
    pub fn bind(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.declarations.insert(name.into(), ty);
        self
    }

    /// Returns the declared type for `name`.
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.declarations.get(name)
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Returns the `(name, type)` declarations in declaration order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.declarations.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Checks every declaration against `bindings`, accumulating the
    /// reasons of every failing declaration in declaration order.
    pub fn check<B>(&self, bindings: &B) -> Outcome
    where
        B: Bindings + ?Sized,
    {
        self.declarations
            .iter()
            .map(|(name, ty)| check_declaration(name, ty, bindings.lookup(name)))
            .fold(Outcome::success(), Outcome::accumulate)
    }

    /// Like [`Contract::check`], evaluating declarations on the rayon pool.
    /// The result is identical, reasons included.
    pub fn check_parallel<B>(&self, bindings: &B) -> Outcome
    where
        B: Bindings + Sync + ?Sized,
    {
        let declarations: Vec<(&String, &Type)> = self.declarations.iter().collect();
        let outcomes: Vec<Outcome> = declarations
            .par_iter()
            .map(|(name, ty)| check_declaration(name, ty, bindings.lookup(name)))
            .collect();

        outcomes
            .into_iter()
            .fold(Outcome::success(), Outcome::accumulate)
    }
}

fn check_declaration(name: &str, ty: &Type, value: Option<&Value>) -> Outcome {
    let path = ValuePath::from_member(name);

    #[cfg(feature = "tracing")]
    tracing::trace!(variable = name, bound = value.is_some(), "checking contract binding");

    match value {
        Some(value) => ty.check_at(value, &path),
        None => Outcome::failure(
            Reason::new(path, format!("variable '{}' is not bound", name))
                .with_code("unbound_variable"),
        ),
    }
}

/// Returns true if `value` satisfies `ty`; the boolean form used by test
/// assertions.
///
/// ```rust
/// use stipulate::{has_type, Type};
/// use serde_json::json;
///
/// assert!(has_type(&Type::integer(), &json!(5)));
/// assert!(!has_type(&Type::integer(), &json!(1.2)));
/// ```
pub fn has_type(ty: &Type, value: &Value) -> bool {
    ty.check(value).is_success()
}
