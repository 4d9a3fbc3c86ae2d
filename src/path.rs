//! Where inside a checked value a rejection happened.
//!
//! Checks descend through members (`Has`, contract bindings) and array
//! elements (`ArrayOf`). Each descent appends a [`PathSegment`]; the
//! resulting [`ValuePath`] travels with every [`Reason`](crate::Reason).

use std::fmt::{self, Display};

/// One step of a descent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key, a built-in member such as `size`, or a contract variable.
    Member(String),
    /// An array element.
    Index(usize),
}

/// The route from the checked value down to a nested value.
///
/// The root renders as `(root)`; members join with `.` and indices use
/// brackets.
///
/// ```rust
/// use stipulate::ValuePath;
///
/// assert_eq!(ValuePath::root().to_string(), "(root)");
///
/// let path = ValuePath::from_member("orders").push_index(2).push_member("size");
/// assert_eq!(path.to_string(), "orders[2].size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValuePath(Vec<PathSegment>);

impl ValuePath {
    /// The checked value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// A one-step path into the member `name`.
    pub fn from_member(name: impl Into<String>) -> Self {
        Self::root().push_member(name)
    }

    /// This path extended into the member `name`.
    pub fn push_member(&self, name: impl Into<String>) -> Self {
        self.extended(PathSegment::Member(name.into()))
    }

    /// This path extended into element `index`.
    pub fn push_index(&self, index: usize) -> Self {
        self.extended(PathSegment::Index(index))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn extended(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }
}

impl Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((head, tail)) = self.0.split_first() else {
            return f.write_str("(root)");
        };

        match head {
            PathSegment::Member(name) => f.write_str(name)?,
            PathSegment::Index(index) => write!(f, "[{}]", index)?,
        }
        for segment in tail {
            match segment {
                PathSegment::Member(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        let root = ValuePath::root();
        assert!(root.segments().is_empty());
        assert_eq!(root.to_string(), "(root)");
    }

    #[test]
    fn test_index_first() {
        let path = ValuePath::root().push_index(3).push_member("size");
        assert_eq!(path.to_string(), "[3].size");
        assert_eq!(
            path.segments(),
            &[PathSegment::Index(3), PathSegment::Member("size".to_string())]
        );
    }

    #[test]
    fn test_extending_leaves_base_untouched() {
        let base = ValuePath::from_member("items");
        let first = base.push_index(0);

        assert_eq!(base.to_string(), "items");
        assert_eq!(first.to_string(), "items[0]");
        assert_eq!(base.push_index(1).push_index(0).to_string(), "items[1][0]");
    }
}
