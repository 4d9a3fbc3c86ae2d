//! Union and intersection of types.
//!
//! - **Intersection** folds its children with [`Outcome::and_also`]: the
//!   first rejecting child ends the check and later children never run.
//! - **Union** folds its children with [`Outcome::or_else`]: the first
//!   accepting child ends the check; if none accepts, every child's reasons
//!   are reported in declaration order.
//!
//! Both accept the value when they have no children.
//!
//! `&` and `|` build two-element nodes without flattening, so `a & b & c`
//! is `Intersection[Intersection[a, b], c]`. Evaluation cost is linear in
//! node count either way.
//!
//! # Example
//!
//! ```rust
//! use stipulate::{Query, Type};
//! use serde_json::json;
//!
//! let small_or_odd = Type::integer_in(Some(0), Some(10)) | Type::is(Query::Odd);
//!
//! assert!(small_or_odd.check(&json!(4)).is_success());
//! assert!(small_or_odd.check(&json!(13)).is_success());
//!
//! let outcome = small_or_odd.check(&json!(14));
//! assert_eq!(outcome.reasons().unwrap().len(), 2);
//! ```

use std::ops::{BitAnd, BitOr};

use serde_json::Value;

use crate::outcome::Outcome;
use crate::path::ValuePath;

use super::Type;

pub(crate) fn check_intersection(children: &[Type], value: &Value, path: &ValuePath) -> Outcome {
    children.iter().fold(Outcome::success(), |acc, child| {
        acc.and_also(|| child.check_at(value, path))
    })
}

pub(crate) fn check_union(children: &[Type], value: &Value, path: &ValuePath) -> Outcome {
    // Seeding with the first child rather than success keeps `or_else` from
    // short-circuiting before any branch runs.
    let mut children = children.iter();
    match children.next() {
        None => Outcome::success(),
        Some(first) => children.fold(first.check_at(value, path), |acc, child| {
            acc.or_else(|| child.check_at(value, path))
        }),
    }
}

impl Type {
    /// Builds `Intersection[left, right]`.
    pub fn intersect(left: Type, right: Type) -> Type {
        Type::Intersection(vec![left, right])
    }

    /// Builds `Union[left, right]`.
    pub fn union(left: Type, right: Type) -> Type {
        Type::Union(vec![left, right])
    }

    /// Builds an intersection over any number of children.
    pub fn all_of(children: impl IntoIterator<Item = Type>) -> Type {
        Type::Intersection(children.into_iter().collect())
    }

    /// Builds a union over any number of children.
    pub fn any_of(children: impl IntoIterator<Item = Type>) -> Type {
        Type::Union(children.into_iter().collect())
    }
}

impl BitAnd for Type {
    type Output = Type;

    fn bitand(self, rhs: Type) -> Type {
        Type::intersect(self, rhs)
    }
}

impl BitOr for Type {
    type Output = Type;

    fn bitor(self, rhs: Type) -> Type {
        Type::union(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Class;
    use serde_json::json;

    #[test]
    fn test_empty_combinators_accept() {
        assert!(Type::all_of(Vec::new()).check(&json!(1)).is_success());
        assert!(Type::any_of(Vec::new()).check(&json!(1)).is_success());
    }

    #[test]
    fn test_operators_nest() {
        let t = Type::any() & Type::void() & Type::any();
        match t {
            Type::Intersection(outer) => {
                assert_eq!(outer.len(), 2);
                assert!(matches!(outer[0], Type::Intersection(_)));
            }
            other => panic!("expected intersection, got {:?}", other),
        }
    }

    #[test]
    fn test_union_accumulates_every_branch() {
        let t = Type::of_class(Class::String) | Type::of_class(Class::Array) | Type::void();
        let outcome = t.check(&json!(1));

        assert_eq!(
            outcome.messages(),
            vec!["expected string", "expected array", "no value satisfies void"]
        );
    }

    #[test]
    fn test_intersection_keeps_first_failure() {
        let t = Type::of_class(Class::String) & Type::void();
        let outcome = t.check(&json!(1));
        assert_eq!(outcome.messages(), vec!["expected string"]);
    }
}
