//! The type predicate algebra.
//!
//! A [`Type`] is an immutable tree of checks. Leaves test one property of a
//! value (its class, a bound, a regex, a query, a member, a literal); the
//! `Union` and `Intersection` composites combine children with OR and AND.
//! Calling [`Type::check`] walks the tree and returns one [`Outcome`].
//!
//! # Example
//!
//! ```rust
//! use stipulate::Type;
//! use serde_json::json;
//!
//! let scores = Type::array(Type::integer_in(Some(0), Some(100)));
//!
//! assert!(scores.check(&json!([10, 99, 0])).is_success());
//!
//! let outcome = scores.check(&json!([10, 101, -1]));
//! let reason = outcome.reasons().unwrap().first();
//! assert_eq!(reason.path.to_string(), "[1]");
//! assert_eq!(reason.code, "max_value");
//! ```

mod class;
mod combinators;
mod member;
mod numeric;
mod query;
mod string;

pub use class::Class;
pub use query::Query;
pub use string::Pattern;

use serde_json::Value;

use crate::error::{Reason, RegistryError};
use crate::outcome::Outcome;
use crate::path::ValuePath;

/// A composable runtime type predicate.
///
/// The variant set is closed; every variant is handled exhaustively by
/// [`Type::check_at`]. Trees own their children, are never mutated after
/// construction, and can be shared across threads for concurrent checking.
#[derive(Debug, Clone)]
pub enum Type {
    /// Accepts every value.
    Any,
    /// Rejects every value.
    Void,
    /// Accepts values of the given class.
    ClassOf(Class),
    /// Accepts values `v` with `bound <= v`.
    Minimum(Value),
    /// Accepts values `v` with `v <= bound`.
    Maximum(Value),
    /// Accepts strings matching the regex.
    Pattern(Pattern),
    /// Accepts values for which the query answers true.
    Is(Query),
    /// Accepts values for which the query answers false.
    IsNot(Query),
    /// Accepts values exposing `member` whose member value satisfies `expected`.
    Has {
        /// The member name.
        member: String,
        /// The type the member value must satisfy.
        expected: Box<Type>,
    },
    /// Accepts values equal to the literal.
    Equals(Value),
    /// Accepts arrays whose every element satisfies the element type.
    ArrayOf(Box<Type>),
    /// Accepts values satisfying at least one child.
    Union(Vec<Type>),
    /// Accepts values satisfying every child.
    Intersection(Vec<Type>),
}

impl Type {
    /// Checks `value` against this type.
    pub fn check(&self, value: &Value) -> Outcome {
        self.check_at(value, &ValuePath::root())
    }

    /// Checks `value`, recording reasons relative to `path`.
    pub fn check_at(&self, value: &Value, path: &ValuePath) -> Outcome {
        match self {
            Type::Any => Outcome::success(),
            Type::Void => Outcome::failure(
                Reason::new(path.clone(), "no value satisfies void").with_code("void"),
            ),
            Type::ClassOf(class) => check_class(*class, value, path),
            Type::Minimum(bound) => numeric::check_minimum(bound, value, path),
            Type::Maximum(bound) => numeric::check_maximum(bound, value, path),
            Type::Pattern(pattern) => pattern.check(value, path),
            Type::Is(query) => check_query(*query, true, value, path),
            Type::IsNot(query) => check_query(*query, false, value, path),
            Type::Has { member, expected } => check_member(member, expected, value, path),
            Type::Equals(literal) => check_equals(literal, value, path),
            Type::ArrayOf(element) => check_array(element, value, path),
            Type::Union(children) => combinators::check_union(children, value, path),
            Type::Intersection(children) => {
                combinators::check_intersection(children, value, path)
            }
        }
    }

    /// Accepts every value.
    pub fn any() -> Type {
        Type::Any
    }

    /// Rejects every value.
    pub fn void() -> Type {
        Type::Void
    }

    /// Accepts values of `class`.
    pub fn of_class(class: Class) -> Type {
        Type::ClassOf(class)
    }

    /// Accepts values at or above `bound`.
    pub fn minimum(bound: impl Into<Value>) -> Type {
        Type::Minimum(bound.into())
    }

    /// Accepts values at or below `bound`.
    pub fn maximum(bound: impl Into<Value>) -> Type {
        Type::Maximum(bound.into())
    }

    /// Accepts strings matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidPattern` if the regex does not compile.
    pub fn pattern(pattern: &str) -> Result<Type, RegistryError> {
        Ok(Type::Pattern(Pattern::new(pattern)?))
    }

    /// Accepts values for which `query` is true.
    pub fn is(query: Query) -> Type {
        Type::Is(query)
    }

    /// Accepts values for which `query` is false.
    pub fn is_not(query: Query) -> Type {
        Type::IsNot(query)
    }

    /// Accepts values exposing the member `name`.
    pub fn has(name: &str) -> Type {
        Type::has_typed(name, Type::Any)
    }

    /// Accepts values exposing the member `name` whose value satisfies `expected`.
    pub fn has_typed(name: &str, expected: Type) -> Type {
        Type::Has {
            member: member::normalize(name),
            expected: Box::new(expected),
        }
    }

    /// Accepts values equal to `literal`. Numbers compare by value, so
    /// `Type::value(1)` accepts `1.0`.
    pub fn value(literal: impl Into<Value>) -> Type {
        Type::Equals(literal.into())
    }

    /// Accepts arrays of `element`.
    pub fn array(element: Type) -> Type {
        Type::ArrayOf(Box::new(element))
    }

    /// Accepts any of the given literals.
    pub fn one_of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Type {
        Type::Union(values.into_iter().map(Type::value).collect())
    }

    /// Accepts values within the supplied bounds. With no bounds this is
    /// [`Type::any`].
    pub fn in_range(minimum: Option<Value>, maximum: Option<Value>) -> Type {
        let mut range = Type::any();
        if let Some(minimum) = minimum {
            range = range & Type::Minimum(minimum);
        }
        if let Some(maximum) = maximum {
            range = range & Type::Maximum(maximum);
        }
        range
    }

    /// Accepts any string.
    pub fn string() -> Type {
        Type::of_class(Class::String)
    }

    /// Accepts strings matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidPattern` if the regex does not compile.
    pub fn string_matching(pattern: &str) -> Result<Type, RegistryError> {
        Ok(Type::string() & Type::pattern(pattern)?)
    }

    /// Accepts any integer.
    pub fn integer() -> Type {
        Type::integer_in(None, None)
    }

    /// Accepts integers within the supplied bounds.
    pub fn integer_in(minimum: Option<i64>, maximum: Option<i64>) -> Type {
        Type::of_class(Class::Integer)
            & Type::in_range(minimum.map(Value::from), maximum.map(Value::from))
    }

    /// Accepts any number.
    pub fn numeric() -> Type {
        Type::numeric_in(None, None)
    }

    /// Accepts numbers within the supplied bounds.
    pub fn numeric_in(minimum: Option<f64>, maximum: Option<f64>) -> Type {
        Type::of_class(Class::Numeric)
            & Type::in_range(minimum.map(Value::from), maximum.map(Value::from))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Type>();
    assert_sync::<Type>();
};

fn check_class(class: Class, value: &Value, path: &ValuePath) -> Outcome {
    if class.matches(value) {
        Outcome::success()
    } else {
        Outcome::failure(
            Reason::new(path.clone(), format!("expected {}", class))
                .with_code("invalid_type")
                .with_expected(class.name())
                .with_got(Class::of(value).name()),
        )
    }
}

fn check_query(query: Query, wanted: bool, value: &Value, path: &ValuePath) -> Outcome {
    match query.evaluate(value) {
        Some(answer) if answer == wanted => Outcome::success(),
        Some(_) => {
            let message = if wanted {
                format!("expected {} to be {}", value, query)
            } else {
                format!("expected {} not to be {}", value, query)
            };
            Outcome::failure(
                Reason::new(path.clone(), message)
                    .with_code("query_failed")
                    .with_got(value.to_string()),
            )
        }
        None => Outcome::failure(
            Reason::new(
                path.clone(),
                format!("value of class {} does not respond to {}", Class::of(value), query),
            )
            .with_code("query_unsupported")
            .with_got(Class::of(value).name()),
        ),
    }
}

fn check_member(name: &str, expected: &Type, value: &Value, path: &ValuePath) -> Outcome {
    match member::lookup(value, name) {
        Some(found) => expected.check_at(&found, &path.push_member(name)),
        None => Outcome::failure(
            Reason::new(path.clone(), format!("expected member '{}'", name))
                .with_code("missing_member")
                .with_expected(format!("value with member '{}'", name))
                .with_got(Class::of(value).name()),
        ),
    }
}

fn check_equals(literal: &Value, value: &Value, path: &ValuePath) -> Outcome {
    if numeric::values_equal(value, literal) {
        Outcome::success()
    } else {
        Outcome::failure(
            Reason::new(path.clone(), format!("expected {}, got {}", literal, value))
                .with_code("value_mismatch")
                .with_expected(literal.to_string())
                .with_got(value.to_string()),
        )
    }
}

fn check_array(element: &Type, value: &Value, path: &ValuePath) -> Outcome {
    match value.as_array() {
        Some(items) => items
            .iter()
            .enumerate()
            .fold(Outcome::success(), |acc, (i, item)| {
                acc.and_also(|| element.check_at(item, &path.push_index(i)))
            }),
        None => Outcome::failure(
            Reason::new(path.clone(), "expected array")
                .with_code("invalid_type")
                .with_expected("array")
                .with_got(Class::of(value).name()),
        ),
    }
}
