//! Explanations attached to a failed check.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::ValuePath;

/// Why one value (or one part of a value) was rejected.
///
/// `code` is stable and machine-readable (`min_value`, `missing_member`,
/// ...); `message` is for people. `expected` and `got` are filled in by the
/// checks that know them.
///
/// ```rust
/// use stipulate::{Reason, ValuePath};
///
/// let reason = Reason::new(ValuePath::from_member("size"), "must be at least 3")
///     .with_code("min_value")
///     .with_expected("at least 3")
///     .with_got("2");
///
/// assert_eq!(reason.to_string(), "size: must be at least 3 (expected: at least 3) (got: 2)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reason {
    pub path: ValuePath,
    pub message: String,
    pub expected: Option<String>,
    pub got: Option<String>,
    /// `"rejected"` unless a check sets something more specific.
    pub code: String,
}

impl Reason {
    pub fn new(path: ValuePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            expected: None,
            got: None,
            code: String::from("rejected"),
        }
    }

    pub fn with_code(self, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..self
        }
    }

    pub fn with_expected(self, expected: impl Into<String>) -> Self {
        Self {
            expected: Some(expected.into()),
            ..self
        }
    }

    pub fn with_got(self, got: impl Into<String>) -> Self {
        Self {
            got: Some(got.into()),
            ..self
        }
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;

        let details = [("expected", &self.expected), ("got", &self.got)];
        for (label, detail) in details {
            if let Some(detail) = detail {
                write!(f, " ({}: {})", label, detail)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Reason {}

/// The reasons carried by a failure: never empty, always in check order.
///
/// Combining keeps the left list first, so a union lists its branches'
/// reasons in declaration order.
///
/// ```rust
/// use stipulate::{Reason, Reasons, ValuePath};
/// use stillwater::prelude::*;
///
/// let left = Reasons::single(Reason::new(ValuePath::root(), "not a string"));
/// let right = Reasons::single(Reason::new(ValuePath::root(), "not an integer"));
///
/// let both = left.combine(right);
/// assert_eq!(both.messages(), vec!["not a string", "not an integer"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reasons(NonEmptyVec<Reason>);

impl Reasons {
    pub fn single(reason: Reason) -> Self {
        Self(NonEmptyVec::singleton(reason))
    }

    /// `None` for an empty vec.
    pub fn from_vec(reasons: Vec<Reason>) -> Option<Self> {
        NonEmptyVec::from_vec(reasons).map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reason> {
        self.0.iter()
    }

    pub fn first(&self) -> &Reason {
        self.0.head()
    }

    /// Reasons recorded at exactly `path`.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&Reason> {
        self.iter().filter(|r| r.path == *path).collect()
    }

    /// Reasons carrying `code`.
    pub fn with_code(&self, code: &str) -> Vec<&Reason> {
        self.iter().filter(|r| r.code == code).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.iter().map(|r| r.message.clone()).collect()
    }

    pub fn into_vec(self) -> Vec<Reason> {
        self.0.into_vec()
    }
}

impl Semigroup for Reasons {
    fn combine(self, other: Self) -> Self {
        Reasons(self.0.combine(other.0))
    }
}

/// Renders a header line followed by one `- reason` line per reason.
impl Display for Reasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected for {} reason(s)", self.len())?;
        for reason in self.iter() {
            write!(f, "\n- {}", reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for Reasons {}

impl IntoIterator for Reasons {
    type Item = Reason;
    type IntoIter = std::vec::IntoIter<Reason>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Reasons {
    type Item = &'a Reason;
    type IntoIter = Box<dyn Iterator<Item = &'a Reason> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Reason>();
    assert_send_sync::<Reasons>();
};
