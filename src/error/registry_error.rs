//! Configuration errors raised while registering or building constructors.

/// Errors that can occur while configuring a [`Registry`](crate::Registry)
/// or building a type from it.
///
/// These are programmer errors. They surface when a constructor is
/// registered or invoked, never later when a value is checked.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A constructor with this name is already registered.
    #[error("constructor '{0}' already registered")]
    DuplicateName(String),

    /// Both a kind and a factory were supplied for one registration.
    #[error("constructor '{0}' cannot specify both a kind and a factory")]
    Conflicting(String),

    /// Neither a kind nor a factory was supplied.
    #[error("constructor '{0}' is missing a kind or factory")]
    MissingConstructor(String),

    /// The named kind is not a type variant.
    #[error("'{0}' is not a known type kind")]
    UnknownKind(String),

    /// No constructor is registered under this name.
    #[error("no constructor named '{0}'")]
    UnknownConstructor(String),

    /// The class tag is not recognized.
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    /// The query name is not recognized.
    #[error("unknown query '{0}'")]
    UnknownQuery(String),

    /// A regex argument failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern text.
        pattern: String,
        /// The compile error.
        #[source]
        source: regex::Error,
    },

    /// Arguments did not fit the constructor.
    #[error("invalid arguments for '{name}': {message}")]
    InvalidArguments {
        /// The constructor being invoked.
        name: String,
        /// What was wrong.
        message: String,
    },

    /// Configuration text was not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Several configuration errors, reported together.
    #[error("{} registry errors: {}", .0.len(), format_all(.0))]
    Multiple(Vec<RegistryError>),
}

impl RegistryError {
    pub(crate) fn invalid_arguments(name: &str, message: impl Into<String>) -> Self {
        RegistryError::InvalidArguments {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

fn format_all(errors: &[RegistryError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RegistryError::Conflicting("odd".into()).to_string(),
            "constructor 'odd' cannot specify both a kind and a factory"
        );
        assert_eq!(
            RegistryError::invalid_arguments("has", "expected a member name").to_string(),
            "invalid arguments for 'has': expected a member name"
        );
    }

    #[test]
    fn test_multiple_joins_messages() {
        let error = RegistryError::Multiple(vec![
            RegistryError::UnknownKind("blob".into()),
            RegistryError::DuplicateName("any".into()),
        ]);

        let display = error.to_string();
        assert!(display.starts_with("2 registry errors"));
        assert!(display.contains("'blob' is not a known type kind"));
        assert!(display.contains("constructor 'any' already registered"));
    }
}
