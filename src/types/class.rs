//! Runtime class tags for `of_class` checks.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde_json::Value;

use crate::error::RegistryError;

/// The runtime class of a value.
///
/// `Numeric` is the only tag that covers more than one concrete shape: it
/// accepts both integers and floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// A number without a fractional representation.
    Integer,
    /// A number stored as a float (`1.0` counts as a float).
    Float,
    /// Any number.
    Numeric,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl Class {
    /// Returns the most specific class of `value`.
    ///
    /// Never returns `Numeric`; numbers are reported as `Integer` or `Float`.
    pub fn of(value: &Value) -> Class {
        match value {
            Value::Null => Class::Null,
            Value::Bool(_) => Class::Bool,
            Value::Number(n) if n.is_f64() => Class::Float,
            Value::Number(_) => Class::Integer,
            Value::String(_) => Class::String,
            Value::Array(_) => Class::Array,
            Value::Object(_) => Class::Object,
        }
    }

    /// Returns true if `value` belongs to this class.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, Class::of(value)) {
            (Class::Numeric, Class::Integer | Class::Float) => true,
            (expected, actual) => *expected == actual,
        }
    }

    /// Returns the lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Class::Null => "null",
            Class::Bool => "bool",
            Class::Integer => "integer",
            Class::Float => "float",
            Class::Numeric => "numeric",
            Class::String => "string",
            Class::Array => "array",
            Class::Object => "object",
        }
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Class {
    type Err = RegistryError;

    /// Parses a class name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "null" | "nil" => Ok(Class::Null),
            "bool" | "boolean" => Ok(Class::Bool),
            "integer" | "int" => Ok(Class::Integer),
            "float" => Ok(Class::Float),
            "numeric" | "number" => Ok(Class::Numeric),
            "string" | "str" => Ok(Class::String),
            "array" | "list" => Ok(Class::Array),
            "object" | "hash" | "map" => Ok(Class::Object),
            _ => Err(RegistryError::UnknownClass(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_of_distinguishes_numbers() {
        assert_eq!(Class::of(&json!(5)), Class::Integer);
        assert_eq!(Class::of(&json!(-5)), Class::Integer);
        assert_eq!(Class::of(&json!(1.2)), Class::Float);
        assert_eq!(Class::of(&json!(1.0)), Class::Float);
    }

    #[test]
    fn test_numeric_covers_integer_and_float() {
        assert!(Class::Numeric.matches(&json!(5)));
        assert!(Class::Numeric.matches(&json!(1.2)));
        assert!(!Class::Numeric.matches(&json!("5")));
        assert!(!Class::Integer.matches(&json!(1.2)));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Integer".parse::<Class>().unwrap(), Class::Integer);
        assert_eq!("numeric".parse::<Class>().unwrap(), Class::Numeric);
        assert_eq!("Hash".parse::<Class>().unwrap(), Class::Object);
        assert!(matches!(
            "Widget".parse::<Class>(),
            Err(RegistryError::UnknownClass(name)) if name == "Widget"
        ));
    }
}
