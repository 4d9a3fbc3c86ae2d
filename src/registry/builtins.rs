//! The built-in constructors installed by [`Registry::new`].
//!
//! Derived constructors build through the registry (`r.build("of_class",
//! ..)`) rather than constructing variants directly, so class membership is
//! defined once and every derived name composes with `&`.

use std::sync::Arc;

use crate::error::RegistryError;
use crate::types::Type;

use super::args::Args;
use super::kind::Kind;
use super::{Entry, Registry};

pub(super) fn install(registry: &Registry) {
    let kinds = [
        ("any", Kind::Any),
        ("void", Kind::Void),
        ("is", Kind::Is),
        ("is_not", Kind::IsNot),
        ("has", Kind::Has),
        ("of_class", Kind::OfClass),
        ("value", Kind::Value),
        ("array", Kind::Array),
    ];
    for (name, kind) in kinds {
        registry.install(name, Entry::Kind(kind));
    }

    registry.install("one_of", Entry::Factory(Arc::new(one_of)));
    registry.install("in_range", Entry::Factory(Arc::new(in_range)));
    registry.install("string", Entry::Factory(Arc::new(string)));
    registry.install("integer", Entry::Factory(Arc::new(integer)));
    registry.install("numeric", Entry::Factory(Arc::new(numeric)));
}

/// `one_of(*values)`: a union of `value` checks, one per literal.
fn one_of(registry: &Registry, args: &Args) -> Result<Type, RegistryError> {
    let alternatives = (0..args.positional().len())
        .map(|i| {
            let literal = args.value_at("one_of", i)?.clone();
            registry.build("value", &Args::new().arg(literal))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Type::any_of(alternatives))
}

/// `in_range(minimum:, maximum:)`: `any`, narrowed by whichever bounds were
/// supplied.
fn in_range(_registry: &Registry, args: &Args) -> Result<Type, RegistryError> {
    args.expect_named_only("in_range", &["minimum", "maximum"])?;
    Ok(Type::in_range(
        args.named_value("in_range", "minimum")?.cloned(),
        args.named_value("in_range", "maximum")?.cloned(),
    ))
}

/// `string(regex:)`: `of_class("String") & pattern`, or `& any` without a regex.
fn string(registry: &Registry, args: &Args) -> Result<Type, RegistryError> {
    args.expect_named_only("string", &["regex"])?;
    let refinement = match args.named_str("string", "regex")? {
        Some(regex) => Type::pattern(regex)?,
        None => Type::any(),
    };
    Ok(class(registry, "String")? & refinement)
}

/// `integer(minimum:, maximum:)`: `of_class("Integer") & in_range(..)`. The
/// caller's arguments go to `in_range` untouched, so it validates them.
fn integer(registry: &Registry, args: &Args) -> Result<Type, RegistryError> {
    Ok(class(registry, "Integer")? & registry.build("in_range", args)?)
}

/// `numeric(minimum:, maximum:)`: `of_class("Numeric") & in_range(..)`.
fn numeric(registry: &Registry, args: &Args) -> Result<Type, RegistryError> {
    Ok(class(registry, "Numeric")? & registry.build("in_range", args)?)
}

fn class(registry: &Registry, name: &str) -> Result<Type, RegistryError> {
    registry.build("of_class", &Args::new().arg(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_names_in_order() {
        let registry = Registry::new();
        assert_eq!(
            registry.names(),
            vec![
                "any", "void", "is", "is_not", "has", "of_class", "value", "array", "one_of",
                "in_range", "string", "integer", "numeric"
            ]
        );
    }

    #[test]
    fn test_in_range_without_bounds_reduces_to_any() {
        let registry = Registry::new();
        let t = registry.build("in_range", &Args::new()).unwrap();
        assert!(matches!(t, Type::Any));
    }

    #[test]
    fn test_integer_forwards_unknown_names_to_in_range() {
        let registry = Registry::new();
        let err = registry
            .build("integer", &Args::new().named("minimun", 0))
            .unwrap_err();
        assert!(err.to_string().contains("unknown named argument 'minimun'"));
    }

    #[test]
    fn test_integer_rejects_positional_bounds() {
        let registry = Registry::new();
        assert!(registry.build("integer", &Args::new().arg(0)).is_err());
    }

    #[test]
    fn test_string_with_invalid_regex_fails_at_build_time() {
        let registry = Registry::new();
        let err = registry
            .build("string", &Args::new().named("regex", "(["))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { .. }));
    }

    #[test]
    fn test_builtin_names_cannot_be_reregistered() {
        let registry = Registry::new();
        assert!(matches!(
            registry.register_kind("of_class", Kind::Any),
            Err(RegistryError::DuplicateName(_))
        ));

        let t = registry.build("numeric", &Args::new().named("maximum", 1.5)).unwrap();
        assert!(t.check(&json!(1)).is_success());
        assert!(t.check(&json!(1.6)).is_failure());
        assert!(t.check(&json!("1")).is_failure());
    }
}
