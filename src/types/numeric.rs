//! Ordering checks for `Minimum` and `Maximum`.
//!
//! Numbers compare numerically regardless of representation, so `5` and
//! `5.0` are equal and `-1 < 0.5`. Strings compare lexicographically. Any
//! other pairing has no ordering; the check then fails with code
//! `incomparable` rather than treating the value as in or out of range.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::error::Reason;
use crate::outcome::Outcome;
use crate::path::ValuePath;

use super::class::Class;

/// Orders `value` against `bound`, or `None` if the two are incomparable.
pub(crate) fn compare(value: &Value, bound: &Value) -> Option<Ordering> {
    match (value, bound) {
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    match (exact(a), exact(b)) {
        (Some(a), Some(b)) => Some(a.cmp(&b)),
        _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

fn exact(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Equality with numeric coercion: `1 == 1.0`, everything else by `==`.
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y) == Some(Ordering::Equal),
        _ => a == b,
    }
}

pub(crate) fn check_minimum(bound: &Value, value: &Value, path: &ValuePath) -> Outcome {
    match compare(value, bound) {
        Some(Ordering::Less) => Outcome::failure(
            Reason::new(
                path.clone(),
                format!("must be at least {}, got {}", bound, value),
            )
            .with_code("min_value")
            .with_expected(format!("at least {}", bound))
            .with_got(value.to_string()),
        ),
        Some(_) => Outcome::success(),
        None => incomparable(bound, value, path),
    }
}

pub(crate) fn check_maximum(bound: &Value, value: &Value, path: &ValuePath) -> Outcome {
    match compare(value, bound) {
        Some(Ordering::Greater) => Outcome::failure(
            Reason::new(
                path.clone(),
                format!("must be at most {}, got {}", bound, value),
            )
            .with_code("max_value")
            .with_expected(format!("at most {}", bound))
            .with_got(value.to_string()),
        ),
        Some(_) => Outcome::success(),
        None => incomparable(bound, value, path),
    }
}

fn incomparable(bound: &Value, value: &Value, path: &ValuePath) -> Outcome {
    Outcome::failure(
        Reason::new(
            path.clone(),
            format!(
                "cannot compare {} with {} bound {}",
                Class::of(value),
                Class::of(bound),
                bound
            ),
        )
        .with_code("incomparable")
        .with_expected(format!("value comparable with {}", bound))
        .with_got(value.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_number_representations() {
        assert_eq!(compare(&json!(5), &json!(5.0)), Some(Ordering::Equal));
        assert_eq!(compare(&json!(-1), &json!(0.5)), Some(Ordering::Less));
        assert_eq!(compare(&json!(u64::MAX), &json!(-1)), Some(Ordering::Greater));
    }

    #[test]
    fn test_strings_order_lexicographically() {
        assert_eq!(compare(&json!("abc"), &json!("abd")), Some(Ordering::Less));
    }

    #[test]
    fn test_incomparable_pairs() {
        assert_eq!(compare(&json!("5"), &json!(5)), None);
        assert_eq!(compare(&json!([1]), &json!(0)), None);
        assert_eq!(compare(&Value::Null, &json!(0)), None);
    }

    #[test]
    fn test_minimum_is_inclusive() {
        let path = ValuePath::root();
        assert!(check_minimum(&json!(5), &json!(5), &path).is_success());
        assert!(check_minimum(&json!(5), &json!(4), &path).is_failure());
    }

    #[test]
    fn test_maximum_reports_codes() {
        let path = ValuePath::root();
        let outcome = check_maximum(&json!(10), &json!(11), &path);
        assert_eq!(outcome.reasons().unwrap().first().code, "max_value");

        let outcome = check_maximum(&json!(10), &json!("eleven"), &path);
        let reason = outcome.reasons().unwrap().first();
        assert_eq!(reason.code, "incomparable");
        assert!(reason.message.contains("cannot compare string with integer"));
    }

    #[test]
    fn test_values_equal_coerces_numbers() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(!values_equal(&json!(1), &json!("1")));
        assert!(values_equal(&json!("abc"), &json!("abc")));
    }
}
