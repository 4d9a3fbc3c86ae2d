//! Integration tests for union and intersection semantics.

use std::cell::Cell;

use serde_json::json;
use stipulate::{Class, Outcome, Query, Reason, Type, ValuePath};

fn reject(message: &str) -> Outcome {
    Outcome::failure(Reason::new(ValuePath::root(), message))
}

#[test]
fn test_and_also_never_runs_after_failure() {
    let marker = Cell::new(false);
    let outcome = reject("r").and_also(|| {
        marker.set(true);
        Outcome::success()
    });

    assert!(!marker.get());
    assert_eq!(outcome.messages(), vec!["r"]);
}

#[test]
fn test_or_else_collects_every_failure() {
    let outcome = reject("r1").or_else(|| reject("r2"));
    assert_eq!(outcome.messages(), vec!["r1", "r2"]);
}

#[test]
fn test_intersection_reports_first_failing_child_only() {
    let t = Type::of_class(Class::Integer) & Type::minimum(10) & Type::is(Query::Even);

    let outcome = t.check(&json!("abc"));
    let reasons = outcome.reasons().unwrap();
    assert_eq!(reasons.len(), 1);
    assert_eq!(reasons.first().code, "invalid_type");

    let outcome = t.check(&json!(3));
    assert_eq!(outcome.reasons().unwrap().first().code, "min_value");

    let outcome = t.check(&json!(11));
    assert_eq!(outcome.reasons().unwrap().first().code, "query_failed");

    assert!(t.check(&json!(12)).is_success());
}

#[test]
fn test_union_accepts_on_any_branch() {
    let t = Type::string() | Type::integer();

    assert!(t.check(&json!("abc")).is_success());
    assert!(t.check(&json!(5)).is_success());
}

#[test]
fn test_union_reports_branches_in_order() {
    let t = Type::string() | Type::integer();

    let outcome = t.check(&json!(1.5));
    assert_eq!(
        outcome.messages(),
        vec!["expected string", "expected integer"]
    );
}

#[test]
fn test_nested_union_of_intersections() {
    let small = Type::integer_in(Some(0), Some(10));
    let word = Type::string_matching("^[a-z]+$").unwrap();
    let t = Type::any_of([small, word]);

    assert!(t.check(&json!(3)).is_success());
    assert!(t.check(&json!("abc")).is_success());

    let outcome = t.check(&json!(42));
    let codes: Vec<_> = outcome
        .reasons()
        .unwrap()
        .iter()
        .map(|r| r.code.as_str())
        .collect();
    assert_eq!(codes, vec!["max_value", "invalid_type"]);
}

#[test]
fn test_empty_combinators_accept() {
    assert!(Type::all_of(Vec::<Type>::new()).check(&json!(1)).is_success());
    assert!(Type::any_of(Vec::<Type>::new()).check(&json!(1)).is_success());
}

#[test]
fn test_operators_build_binary_nodes() {
    let t = Type::any() & Type::void() & Type::any();
    match t {
        Type::Intersection(children) => {
            assert_eq!(children.len(), 2);
            assert!(matches!(children[0], Type::Intersection(_)));
        }
        other => panic!("expected intersection, got {:?}", other),
    }
}

#[test]
fn test_is_not_inverts_query() {
    let t = Type::is_not(Query::Zero);
    assert!(t.check(&json!(1)).is_success());
    assert!(t.check(&json!(0)).is_failure());

    let outcome = t.check(&json!("abc"));
    assert_eq!(outcome.reasons().unwrap().first().code, "query_unsupported");
}
