//! Regex pattern checks.

use std::fmt::{self, Display};

use regex::Regex;
use serde_json::Value;

use crate::error::{Reason, RegistryError};
use crate::outcome::Outcome;
use crate::path::ValuePath;

use super::class::Class;

/// A compiled regex used by `Type::Pattern`.
///
/// Matching is unanchored, like `=~`: `"^a"` accepts any string starting
/// with `a`, `"b"` accepts any string containing `b`.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidPattern` if the regex does not compile.
    pub fn new(pattern: &str) -> Result<Self, RegistryError> {
        let regex = Regex::new(pattern).map_err(|source| RegistryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Returns the pattern source text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn check(&self, value: &Value, path: &ValuePath) -> Outcome {
        let s = match value.as_str() {
            Some(s) => s,
            None => {
                return Outcome::failure(
                    Reason::new(path.clone(), "expected string")
                        .with_code("invalid_type")
                        .with_expected("string")
                        .with_got(Class::of(value).name()),
                )
            }
        };

        if self.regex.is_match(s) {
            Outcome::success()
        } else {
            Outcome::failure(
                Reason::new(path.clone(), format!("must match pattern /{}/", self.as_str()))
                    .with_code("pattern_mismatch")
                    .with_expected(format!("/{}/", self.as_str()))
                    .with_got(value.to_string()),
            )
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unanchored_match() {
        let pattern = Pattern::new("b").unwrap();
        assert!(pattern.check(&json!("abc"), &ValuePath::root()).is_success());
        assert!(pattern.check(&json!("xyz"), &ValuePath::root()).is_failure());
    }

    #[test]
    fn test_mismatch_reason() {
        let pattern = Pattern::new("^a").unwrap();
        let outcome = pattern.check(&json!("bcd"), &ValuePath::root());
        let reason = outcome.reasons().unwrap().first();

        assert_eq!(reason.code, "pattern_mismatch");
        assert_eq!(reason.message, "must match pattern /^a/");
    }

    #[test]
    fn test_non_string_is_a_type_failure() {
        let pattern = Pattern::new(".*").unwrap();
        let outcome = pattern.check(&json!(42), &ValuePath::root());
        assert_eq!(outcome.reasons().unwrap().first().code, "invalid_type");
    }

    #[test]
    fn test_invalid_regex() {
        let err = Pattern::new("(unclosed").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }
}
