//! Type kinds a registry can instantiate directly.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::RegistryError;
use crate::types::{Class, Query, Type};

use super::args::Args;

/// An instantiable [`Type`] variant.
///
/// Registering a name with a kind makes the name a constructor that builds
/// that variant from positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Type::Any`, no arguments.
    Any,
    /// `Type::Void`, no arguments.
    Void,
    /// `Type::ClassOf`, one class name.
    OfClass,
    /// `Type::Minimum`, one bound.
    Minimum,
    /// `Type::Maximum`, one bound.
    Maximum,
    /// `Type::Pattern`, one regex source.
    Pattern,
    /// `Type::Is`, one query name.
    Is,
    /// `Type::IsNot`, one query name.
    IsNot,
    /// `Type::Has`, a member name and an optional member type.
    Has,
    /// `Type::Equals`, one literal.
    Value,
    /// `Type::ArrayOf`, one element type.
    Array,
    /// `Type::Union`, any number of types.
    Union,
    /// `Type::Intersection`, any number of types.
    Intersection,
}

impl Kind {
    /// Builds the variant from `args`. `ctor` names the constructor being
    /// invoked and is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidArguments` for wrong arity, argument
    /// shapes or named arguments the kind does not take, and the class/query/pattern errors for unparseable names.
    pub fn instantiate(&self, ctor: &str, args: &Args) -> Result<Type, RegistryError> {
        if *self != Kind::Has {
            args.expect_no_named(ctor)?;
        }

        match self {
            Kind::Any => {
                args.expect_positional(ctor, 0, 0)?;
                Ok(Type::any())
            }
            Kind::Void => {
                args.expect_positional(ctor, 0, 0)?;
                Ok(Type::void())
            }
            Kind::OfClass => {
                args.expect_positional(ctor, 1, 1)?;
                let class: Class = args.str_at(ctor, 0)?.parse()?;
                Ok(Type::of_class(class))
            }
            Kind::Minimum => {
                args.expect_positional(ctor, 1, 1)?;
                Ok(Type::minimum(args.value_at(ctor, 0)?.clone()))
            }
            Kind::Maximum => {
                args.expect_positional(ctor, 1, 1)?;
                Ok(Type::maximum(args.value_at(ctor, 0)?.clone()))
            }
            Kind::Pattern => {
                args.expect_positional(ctor, 1, 1)?;
                Type::pattern(args.str_at(ctor, 0)?)
            }
            Kind::Is => {
                args.expect_positional(ctor, 1, 1)?;
                let query: Query = args.str_at(ctor, 0)?.parse()?;
                Ok(Type::is(query))
            }
            Kind::IsNot => {
                args.expect_positional(ctor, 1, 1)?;
                let query: Query = args.str_at(ctor, 0)?.parse()?;
                Ok(Type::is_not(query))
            }
            Kind::Has => instantiate_has(ctor, args),
            Kind::Value => {
                args.expect_positional(ctor, 1, 1)?;
                Ok(Type::value(args.value_at(ctor, 0)?.clone()))
            }
            Kind::Array => {
                args.expect_positional(ctor, 1, 1)?;
                Ok(Type::array(args.type_at(ctor, 0)?.clone()))
            }
            Kind::Union => Ok(Type::any_of(collect_types(ctor, args)?)),
            Kind::Intersection => Ok(Type::all_of(collect_types(ctor, args)?)),
        }
    }

    /// Returns the kind name as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Any => "any",
            Kind::Void => "void",
            Kind::OfClass => "of_class",
            Kind::Minimum => "minimum",
            Kind::Maximum => "maximum",
            Kind::Pattern => "pattern",
            Kind::Is => "is",
            Kind::IsNot => "is_not",
            Kind::Has => "has",
            Kind::Value => "value",
            Kind::Array => "array",
            Kind::Union => "union",
            Kind::Intersection => "intersection",
        }
    }
}

/// `has(member, expected_type?)`, with `member:` / `expected_type:` also
/// accepted as named arguments. Each may be given one way, not both.
fn instantiate_has(ctor: &str, args: &Args) -> Result<Type, RegistryError> {
    args.expect_named_within(ctor, &["member", "expected_type"])?;
    args.expect_positional(ctor, 0, 2)?;

    let positional = args.positional();
    let member = match (args.named_str(ctor, "member")?, positional.first()) {
        (Some(_), Some(_)) => return Err(given_twice(ctor, "member")),
        (Some(member), None) => member,
        (None, _) => args.str_at(ctor, 0)?,
    };
    let expected = match (args.named_type(ctor, "expected_type")?, positional.get(1)) {
        (Some(_), Some(_)) => return Err(given_twice(ctor, "expected_type")),
        (Some(expected), None) => expected.clone(),
        (None, Some(_)) => args.type_at(ctor, 1)?.clone(),
        (None, None) => Type::any(),
    };

    Ok(Type::has_typed(member, expected))
}

fn given_twice(ctor: &str, name: &str) -> RegistryError {
    RegistryError::invalid_arguments(
        ctor,
        format!("'{}' given both positionally and by name", name),
    )
}

fn collect_types(ctor: &str, args: &Args) -> Result<Vec<Type>, RegistryError> {
    (0..args.positional().len())
        .map(|i| args.type_at(ctor, i).cloned())
        .collect()
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = RegistryError;

    /// Accepts `snake_case` and `CamelCase` spellings: `is_not`, `IsNot`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "any" => Ok(Kind::Any),
            "void" => Ok(Kind::Void),
            "ofclass" => Ok(Kind::OfClass),
            "minimum" => Ok(Kind::Minimum),
            "maximum" => Ok(Kind::Maximum),
            "pattern" => Ok(Kind::Pattern),
            "is" => Ok(Kind::Is),
            "isnot" => Ok(Kind::IsNot),
            "has" => Ok(Kind::Has),
            "value" => Ok(Kind::Value),
            "array" => Ok(Kind::Array),
            "union" => Ok(Kind::Union),
            "intersection" => Ok(Kind::Intersection),
            _ => Err(RegistryError::UnknownKind(s.to_string())),
        }
    }
}
