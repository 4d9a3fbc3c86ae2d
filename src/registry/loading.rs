//! Alias configuration loaded from JSON.
//!
//! A configuration document names extra constructors in terms of existing
//! ones:
//!
//! ```json
//! {
//!   "aliases": {
//!     "count": "integer",
//!     "anything": "any",
//!     "choice": "union"
//!   }
//! }
//! ```
//!
//! A target is either a [`Kind`] name or an already registered constructor
//! (aliases may refer to aliases declared earlier in the same document).
//! Every bad entry is collected and reported together.

use serde_json::Value;

use crate::error::RegistryError;

use super::kind::Kind;
use super::Registry;

impl Registry {
    /// Registers the aliases declared in `config`.
    ///
    /// Returns the number of aliases registered. Valid entries are
    /// registered even when others fail.
    ///
    /// # Errors
    ///
    /// - `RegistryError::InvalidArguments` if `aliases` is missing or not an
    ///   object of strings
    /// - the entry's own error when exactly one entry fails
    /// - `RegistryError::Multiple` when several entries fail
    ///
    /// # Example
    ///
    /// ```rust
    /// use stipulate::{Args, Registry};
    /// use serde_json::json;
    ///
    /// let registry = Registry::new();
    /// registry
    ///     .load_aliases(&json!({"aliases": {"count": "integer"}}))
    ///     .unwrap();
    ///
    /// let count = registry.build("count", &Args::new().named("minimum", 0)).unwrap();
    /// assert!(count.check(&json!(3)).is_success());
    /// assert!(count.check(&json!(-3)).is_failure());
    /// ```
    pub fn load_aliases(&self, config: &Value) -> Result<usize, RegistryError> {
        let aliases = config
            .get("aliases")
            .and_then(Value::as_object)
            .ok_or_else(|| RegistryError::invalid_arguments("aliases", "expected an object"))?;

        let mut errors = Vec::new();
        let mut registered = 0;

        for (alias, target) in aliases {
            let result = match target.as_str() {
                Some(target) => self.register_alias(alias, target),
                None => Err(RegistryError::invalid_arguments(
                    alias,
                    "alias target must be a string",
                )),
            };
            match result {
                Ok(()) => registered += 1,
                Err(e) => errors.push(e),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(registered, failed = errors.len(), "loaded constructor aliases");

        match errors.len() {
            0 => Ok(registered),
            1 => Err(errors.remove(0)),
            _ => Err(RegistryError::Multiple(errors)),
        }
    }

    /// Parses `text` as JSON and builds a registry with the built-ins plus
    /// the declared aliases.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Parse` for malformed JSON, otherwise the
    /// errors of [`Registry::load_aliases`].
    pub fn from_config_str(text: &str) -> Result<Registry, RegistryError> {
        let config: Value = serde_json::from_str(text)?;
        let registry = Registry::new();
        registry.load_aliases(&config)?;
        Ok(registry)
    }

    fn register_alias(&self, alias: &str, target: &str) -> Result<(), RegistryError> {
        if self.contains(target) {
            let target = target.to_string();
            return self.register_factory(alias, move |registry, args| {
                registry.build(&target, args)
            });
        }
        let kind: Kind = target.parse()?;
        self.register_kind(alias, kind)
    }
}
