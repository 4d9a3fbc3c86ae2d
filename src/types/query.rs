//! Named boolean queries for `is` / `is_not` checks.
//!
//! A query is a zero-argument question asked of a value ("is it odd?",
//! "is it empty?"). Not every value can answer every question: asking a
//! string whether it is odd has no answer, and [`Query::evaluate`] returns
//! `None` so the check can fail with a descriptive reason instead of
//! guessing.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde_json::Value;

use crate::error::RegistryError;

/// A named zero-argument boolean query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Integer is odd.
    Odd,
    /// Integer is even.
    Even,
    /// Number equals zero.
    Zero,
    /// Number is greater than zero.
    Positive,
    /// Number is less than zero.
    Negative,
    /// Number is finite.
    Finite,
    /// String, array or object has no entries.
    Empty,
    /// String is empty or whitespace, or the value is null.
    Blank,
    /// Value is null.
    Nil,
}

impl Query {
    /// Asks the query of `value`.
    ///
    /// Returns `None` when the value's shape does not support the query.
    pub fn evaluate(&self, value: &Value) -> Option<bool> {
        match self {
            Query::Odd => integer_of(value).map(|n| n % 2 != 0),
            Query::Even => integer_of(value).map(|n| n % 2 == 0),
            Query::Zero => value.as_f64().map(|n| n == 0.0),
            Query::Positive => value.as_f64().map(|n| n > 0.0),
            Query::Negative => value.as_f64().map(|n| n < 0.0),
            Query::Finite => value.as_f64().map(f64::is_finite),
            Query::Empty => match value {
                Value::String(s) => Some(s.is_empty()),
                Value::Array(items) => Some(items.is_empty()),
                Value::Object(map) => Some(map.is_empty()),
                _ => None,
            },
            Query::Blank => match value {
                Value::Null => Some(true),
                Value::String(s) => Some(s.trim().is_empty()),
                _ => None,
            },
            Query::Nil => Some(value.is_null()),
        }
    }

    /// Returns the query name as written in a contract.
    pub fn name(&self) -> &'static str {
        match self {
            Query::Odd => "odd",
            Query::Even => "even",
            Query::Zero => "zero",
            Query::Positive => "positive",
            Query::Negative => "negative",
            Query::Finite => "finite",
            Query::Empty => "empty",
            Query::Blank => "blank",
            Query::Nil => "nil",
        }
    }
}

fn integer_of(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        _ => None,
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Query {
    type Err = RegistryError;

    /// Parses a query name. A leading `:` and a trailing `?` are ignored, so
    /// `"odd"`, `"odd?"` and `":odd?"` are the same query.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim_start_matches(':').trim_end_matches('?');
        match name {
            "odd" => Ok(Query::Odd),
            "even" => Ok(Query::Even),
            "zero" => Ok(Query::Zero),
            "positive" => Ok(Query::Positive),
            "negative" => Ok(Query::Negative),
            "finite" => Ok(Query::Finite),
            "empty" => Ok(Query::Empty),
            "blank" => Ok(Query::Blank),
            "nil" | "null" => Ok(Query::Nil),
            _ => Err(RegistryError::UnknownQuery(s.to_string())),
        }
    }
}
