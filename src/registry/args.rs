//! Arguments passed to registered constructors.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::RegistryError;
use crate::types::Type;

/// A single constructor argument: a literal value or a nested type.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A literal value (a bound, a member name, a regex source, ...).
    Value(Value),
    /// A nested type (an array element type, a `has` member type, ...).
    Type(Type),
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<Type> for Arg {
    fn from(ty: Type) -> Self {
        Arg::Type(ty)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Value(Value::from(s))
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Value(Value::from(s))
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Value(Value::from(n))
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Value(Value::from(n))
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Arg::Value(Value::from(n))
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Value(Value::from(n))
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Value(Value::from(b))
    }
}

/// Positional and named arguments for a constructor call.
///
/// Named arguments keep insertion order. A named argument whose value is
/// `null` counts as omitted, matching how optional bounds behave.
///
/// # Example
///
/// ```rust
/// use stipulate::{Args, Registry};
/// use serde_json::json;
///
/// let registry = Registry::new();
/// let small = registry
///     .build("integer", &Args::new().named("minimum", 0).named("maximum", 10))
///     .unwrap();
///
/// assert!(small.check(&json!(5)).is_success());
/// assert!(small.check(&json!(11)).is_failure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Args {
    positional: Vec<Arg>,
    named: IndexMap<String, Arg>,
}

impl Args {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.positional.push(arg.into());
        self
    }

    /// Sets a named argument, replacing any earlier value for `name`.
    pub fn named(mut self, name: impl Into<String>, arg: impl Into<Arg>) -> Self {
        self.named.insert(name.into(), arg.into());
        self
    }

    /// Returns the positional arguments.
    pub fn positional(&self) -> &[Arg] {
        &self.positional
    }

    /// Returns a named argument, treating `null` as omitted.
    pub fn get(&self, name: &str) -> Option<&Arg> {
        match self.named.get(name) {
            Some(Arg::Value(Value::Null)) | None => None,
            Some(arg) => Some(arg),
        }
    }

    /// Returns the names of the supplied named arguments.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    pub(crate) fn expect_positional(
        &self,
        ctor: &str,
        min: usize,
        max: usize,
    ) -> Result<(), RegistryError> {
        let n = self.positional.len();
        if n < min || n > max {
            let expected = if min == max {
                format!("{}", min)
            } else {
                format!("{} to {}", min, max)
            };
            return Err(RegistryError::invalid_arguments(
                ctor,
                format!("expected {} positional argument(s), got {}", expected, n),
            ));
        }
        Ok(())
    }

    /// Rejects any named argument outside `allowed`, `null` ones included.
    pub(crate) fn expect_named_within(
        &self,
        ctor: &str,
        allowed: &[&str],
    ) -> Result<(), RegistryError> {
        match self.names().find(|name| !allowed.contains(name)) {
            Some(unknown) => Err(RegistryError::invalid_arguments(
                ctor,
                format!("unknown named argument '{}'", unknown),
            )),
            None => Ok(()),
        }
    }

    pub(crate) fn expect_no_named(&self, ctor: &str) -> Result<(), RegistryError> {
        self.expect_named_within(ctor, &[])
    }

    pub(crate) fn expect_named_only(
        &self,
        ctor: &str,
        allowed: &[&str],
    ) -> Result<(), RegistryError> {
        self.expect_positional(ctor, 0, 0)?;
        self.expect_named_within(ctor, allowed)
    }

    pub(crate) fn value_at(&self, ctor: &str, index: usize) -> Result<&Value, RegistryError> {
        match self.positional.get(index) {
            Some(Arg::Value(value)) => Ok(value),
            Some(Arg::Type(_)) => Err(RegistryError::invalid_arguments(
                ctor,
                format!("argument {} must be a value, got a type", index + 1),
            )),
            None => Err(RegistryError::invalid_arguments(
                ctor,
                format!("missing argument {}", index + 1),
            )),
        }
    }

    pub(crate) fn str_at(&self, ctor: &str, index: usize) -> Result<&str, RegistryError> {
        self.value_at(ctor, index)?.as_str().ok_or_else(|| {
            RegistryError::invalid_arguments(ctor, format!("argument {} must be a string", index + 1))
        })
    }

    pub(crate) fn type_at(&self, ctor: &str, index: usize) -> Result<&Type, RegistryError> {
        match self.positional.get(index) {
            Some(Arg::Type(ty)) => Ok(ty),
            Some(Arg::Value(_)) => Err(RegistryError::invalid_arguments(
                ctor,
                format!("argument {} must be a type, got a value", index + 1),
            )),
            None => Err(RegistryError::invalid_arguments(
                ctor,
                format!("missing argument {}", index + 1),
            )),
        }
    }

    pub(crate) fn named_value(&self, ctor: &str, name: &str) -> Result<Option<&Value>, RegistryError> {
        match self.get(name) {
            None => Ok(None),
            Some(Arg::Value(value)) => Ok(Some(value)),
            Some(Arg::Type(_)) => Err(RegistryError::invalid_arguments(
                ctor,
                format!("'{}' must be a value, got a type", name),
            )),
        }
    }

    pub(crate) fn named_str(&self, ctor: &str, name: &str) -> Result<Option<&str>, RegistryError> {
        match self.named_value(ctor, name)? {
            None => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or_else(|| {
                RegistryError::invalid_arguments(ctor, format!("'{}' must be a string", name))
            }),
        }
    }

    pub(crate) fn named_type(&self, ctor: &str, name: &str) -> Result<Option<&Type>, RegistryError> {
        match self.get(name) {
            None => Ok(None),
            Some(Arg::Type(ty)) => Ok(Some(ty)),
            Some(Arg::Value(_)) => Err(RegistryError::invalid_arguments(
                ctor,
                format!("'{}' must be a type, got a value", name),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_named_counts_as_omitted() {
        let args = Args::new().named("minimum", Value::Null).named("maximum", 3);
        assert!(args.get("minimum").is_none());
        assert!(matches!(args.get("maximum"), Some(Arg::Value(v)) if *v == json!(3)));
    }

    #[test]
    fn test_arity_error_message() {
        let err = Args::new().expect_positional("value", 1, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid arguments for 'value': expected 1 positional argument(s), got 0"
        );
    }

    #[test]
    fn test_named_only_rejects_unknown_names() {
        let args = Args::new().named("minimum", 1).named("step", 2);
        let err = args.expect_named_only("in_range", &["minimum", "maximum"]).unwrap_err();
        assert!(err.to_string().contains("unknown named argument 'step'"));
    }

    #[test]
    fn test_no_named_rejects_even_null() {
        assert!(Args::new().arg(1).expect_no_named("value").is_ok());

        let err = Args::new()
            .arg(1)
            .named("bogus", Value::Null)
            .expect_no_named("value")
            .unwrap_err();
        assert!(err.to_string().contains("unknown named argument 'bogus'"));
    }

    #[test]
    fn test_shape_mismatches() {
        let args = Args::new().arg(Type::any()).arg("x");
        assert!(args.value_at("value", 0).is_err());
        assert!(args.type_at("array", 1).is_err());
        assert_eq!(args.str_at("is", 1).unwrap(), "x");
    }
}
