//! # Stipulate
//!
//! Composable runtime type predicates that explain every rejection.
//!
//! ## Overview
//!
//! A [`Type`] is a small, immutable predicate tree over JSON-like values:
//! class membership, bounds, regexes, boolean queries, member checks,
//! literals and array element checks, combined with `&` (intersection) and
//! `|` (union). Checking a value yields an [`Outcome`]:
//!
//! - intersections stop at the first failing branch;
//! - unions try every branch and, when none accepts, report the reasons of
//!   all of them.
//!
//! Types can be built with the typed constructors on [`Type`] or by name
//! through a [`Registry`], which also accepts new named constructors.
//! A [`Contract`] checks a set of named bindings at once.
//!
//! ## Core Types
//!
//! - [`Type`]: the predicate algebra
//! - [`Outcome`]: success, or failure with [`Reasons`]
//! - [`Reason`]: one rejection with its [`ValuePath`], message and code
//! - [`Registry`]: the named constructor table
//! - [`Contract`]: named variable-to-type bindings
//!
//! ## Example
//!
//! ```rust
//! use stipulate::{Args, Query, Registry, Type};
//! use serde_json::json;
//!
//! // "an integer in [0, 10], or an odd number"
//! let t = Type::integer_in(Some(0), Some(10)) | Type::is(Query::Odd);
//! assert!(t.check(&json!(5)).is_success());
//! assert!(t.check(&json!(13)).is_success());
//! assert!(t.check(&json!(12)).is_failure());
//!
//! // The same through the registry.
//! let registry = Registry::new();
//! let small = registry
//!     .build("integer", &Args::new().named("minimum", 0).named("maximum", 10))
//!     .unwrap();
//! let odd = registry.build("is", &Args::new().arg("odd?")).unwrap();
//! let t = small | odd;
//!
//! let outcome = t.check(&json!("five"));
//! assert_eq!(outcome.reasons().unwrap().len(), 2);
//! ```

pub mod contract;
pub mod error;
pub mod outcome;
pub mod path;
pub mod registry;
pub mod types;

pub use contract::{has_type, Bindings, Contract};
pub use error::{Reason, Reasons, RegistryError};
pub use outcome::Outcome;
pub use path::{PathSegment, ValuePath};
pub use registry::{Arg, Args, Constructor, Factory, Kind, Registry};
pub use types::{Class, Pattern, Query, Type};
