//! Constructor registry: the named DSL surface for building types.
//!
//! A [`Registry`] maps names such as `integer` or `one_of` to constructors.
//! A constructor is either a [`Kind`] (instantiate one type variant from
//! positional arguments) or a factory closure (compose any type, usually by
//! calling other registered names). Registration happens during setup;
//! afterwards the registry is only read.
//!
//! # Example
//!
//! ```rust
//! use stipulate::{Args, Registry};
//! use serde_json::json;
//!
//! let registry = Registry::new();
//!
//! // A derived constructor built from existing names.
//! registry
//!     .register_factory("small_odd", |r, _args| {
//!         Ok(r.build("integer", &Args::new().named("maximum", 9))?
//!             & r.build("is", &Args::new().arg("odd?"))?)
//!     })
//!     .unwrap();
//!
//! let small_odd = registry.build("small_odd", &Args::new()).unwrap();
//! assert!(small_odd.check(&json!(7)).is_success());
//! assert!(small_odd.check(&json!(8)).is_failure());
//! ```

mod args;
mod builtins;
mod kind;
mod loading;

pub use args::{Arg, Args};
pub use kind::Kind;

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::types::Type;

/// A constructor closure. It receives the registry so it can build other
/// registered names.
pub type Factory = Arc<dyn Fn(&Registry, &Args) -> Result<Type, RegistryError> + Send + Sync>;

/// A registration request: exactly one of a kind or a factory.
///
/// ```rust
/// use stipulate::{Constructor, Kind, Registry, RegistryError, Type};
///
/// let registry = Registry::empty();
///
/// let both = Constructor::new()
///     .with_kind(Kind::Any)
///     .with_factory(|_, _| Ok(Type::any()));
/// assert!(matches!(
///     registry.register("confused", both),
///     Err(RegistryError::Conflicting(_))
/// ));
///
/// assert!(matches!(
///     registry.register("empty", Constructor::new()),
///     Err(RegistryError::MissingConstructor(_))
/// ));
/// ```
#[derive(Clone, Default)]
pub struct Constructor {
    kind: Option<Kind>,
    factory: Option<Factory>,
}

impl Constructor {
    /// Creates an empty request; set a kind or a factory before registering.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request for a kind constructor.
    pub fn from_kind(kind: Kind) -> Self {
        Self::new().with_kind(kind)
    }

    /// A request for a factory constructor.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn(&Registry, &Args) -> Result<Type, RegistryError> + Send + Sync + 'static,
    {
        Self::new().with_factory(factory)
    }

    /// Sets the kind.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the factory.
    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&Registry, &Args) -> Result<Type, RegistryError> + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }

    fn into_entry(self, name: &str) -> Result<Entry, RegistryError> {
        match (self.kind, self.factory) {
            (Some(kind), None) => Ok(Entry::Kind(kind)),
            (None, Some(factory)) => Ok(Entry::Factory(factory)),
            (Some(_), Some(_)) => Err(RegistryError::Conflicting(name.to_string())),
            (None, None) => Err(RegistryError::MissingConstructor(name.to_string())),
        }
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("kind", &self.kind)
            .field("factory", &self.factory.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// A validated registry entry.
#[derive(Clone)]
enum Entry {
    Kind(Kind),
    Factory(Factory),
}

/// Type alias for the constructor table.
type ConstructorMap = Arc<RwLock<IndexMap<String, Entry>>>;

/// A thread-safe table of named type constructors.
///
/// `Registry::new()` comes with the built-in constructors:
/// `any`, `void`, `is`, `is_not`, `has`, `of_class`, `value`, `array`,
/// `one_of`, `in_range`, `string`, `integer` and `numeric`.
///
/// # Thread Safety
///
/// The table sits behind `Arc<RwLock<...>>`. Cloning a registry shares the
/// table. Register everything during setup, then build types from any
/// number of threads. The lock is released before a constructor runs, so
/// factories may call back into the registry.
pub struct Registry {
    constructors: ConstructorMap,
}

impl Registry {
    /// Creates a registry with the built-in constructors.
    pub fn new() -> Self {
        let registry = Self::empty();
        builtins::install(&registry);
        registry
    }

    /// Creates a registry with no constructors.
    pub fn empty() -> Self {
        Self {
            constructors: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Registers a constructor under `name`.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Conflicting` if both a kind and a factory are set
    /// - `RegistryError::MissingConstructor` if neither is set
    /// - `RegistryError::DuplicateName` if `name` is taken
    pub fn register(
        &self,
        name: impl Into<String>,
        constructor: Constructor,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let entry = constructor.into_entry(&name)?;
        let mut constructors = self.constructors.write();

        if constructors.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(constructor = %name, "registered type constructor");

        constructors.insert(name, entry);
        Ok(())
    }

    /// Registers `name` as a constructor for `kind`.
    pub fn register_kind(&self, name: impl Into<String>, kind: Kind) -> Result<(), RegistryError> {
        self.register(name, Constructor::from_kind(kind))
    }

    /// Registers `name` as a constructor for the kind called `kind_name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKind` if `kind_name` is not a type
    /// variant, before anything is registered.
    pub fn register_kind_named(
        &self,
        name: impl Into<String>,
        kind_name: &str,
    ) -> Result<(), RegistryError> {
        let kind: Kind = kind_name.parse()?;
        self.register_kind(name, kind)
    }

    /// Registers `name` as a factory constructor.
    pub fn register_factory<F>(&self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn(&Registry, &Args) -> Result<Type, RegistryError> + Send + Sync + 'static,
    {
        self.register(name, Constructor::from_factory(factory))
    }

    /// Builds a type by invoking the constructor registered as `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownConstructor` for unregistered names, or
    /// whatever error the constructor reports for its arguments.
    pub fn build(&self, name: &str, args: &Args) -> Result<Type, RegistryError> {
        let entry = self
            .constructors
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownConstructor(name.to_string()))?;

        match entry {
            Entry::Kind(kind) => kind.instantiate(name, args),
            Entry::Factory(factory) => factory(self, args),
        }
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.read().contains_key(name)
    }

    /// Returns the registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.constructors.read().keys().cloned().collect()
    }

    /// Inserts a built-in entry. Only used on a fresh table, so names never
    /// collide.
    fn install(&self, name: &str, entry: Entry) {
        self.constructors.write().insert(name.to_string(), entry);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            constructors: Arc::clone(&self.constructors),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("constructors", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_registry_has_no_names() {
        let registry = Registry::empty();
        assert!(registry.names().is_empty());
        assert!(matches!(
            registry.build("any", &Args::new()),
            Err(RegistryError::UnknownConstructor(_))
        ));
    }

    #[test]
    fn test_register_kind_named_rejects_unknown_kind() {
        let registry = Registry::empty();
        let err = registry.register_kind_named("thing", "Widget").unwrap_err();

        assert!(matches!(err, RegistryError::UnknownKind(ref k) if k == "Widget"));
        assert!(!registry.contains("thing"));
    }

    #[test]
    fn test_clones_share_the_table() {
        let registry = Registry::empty();
        let shared = registry.clone();
        registry.register_kind("anything", Kind::Any).unwrap();

        assert!(shared.contains("anything"));
        assert!(shared
            .build("anything", &Args::new())
            .unwrap()
            .check(&json!(null))
            .is_success());
    }

    #[test]
    fn test_factory_can_call_back_into_registry() {
        let registry = Registry::new();
        registry
            .register_factory("positive_integer", |r, _| {
                r.build("integer", &Args::new().named("minimum", 1))
            })
            .unwrap();

        let t = registry.build("positive_integer", &Args::new()).unwrap();
        assert!(t.check(&json!(1)).is_success());
        assert!(t.check(&json!(0)).is_failure());
    }
}
