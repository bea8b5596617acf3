#![forbid(unsafe_code)]
//! Collect the declared field names of a value's type and all of its superclasses.
//!
//! Rust has no runtime reflection, so each type carries a `'static`
//! [`ClassDescriptor`] listing its declared fields and linking to its superclass. The descriptor
//! is generated by `#[derive(Reflect)]`, or written by hand and registered in a [`TypeRegistry`]
//! for types you do not own.
//!
//! ```rust
//! use fieldwalk::{Reflect, collect_field_names};
//!
//! #[derive(Reflect)]
//! struct Base {
//!     a: u8,
//!     b: u8,
//! }
//!
//! #[derive(Reflect)]
//! struct Derived {
//!     #[reflect(base)]
//!     base: Base,
//!     c: u8,
//! }
//!
//! let value = Derived { base: Base { a: 1, b: 2 }, c: 3 };
//! let names = collect_field_names(Some(&value)).unwrap();
//! assert_eq!(names.len(), 3);
//! assert!(names.contains("a") && names.contains("b") && names.contains("c"));
//! ```
//!
//! ## Error Policy
//!
//! - Every fallible operation returns [`Result`]; nothing panics in production code. The collector
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - Errors are never swallowed and never accompanied by partial results: an absent object is
//!   [`CollectError::InvalidArgument`], a refusing [`AccessPolicy`] is
//!   [`CollectError::ReflectionDenied`].
//!
//! ## Logging
//!
//! Collection is instrumented with `tracing` spans at `debug` level. Install a subscriber in the
//! application to see them; the library never installs one.

// Lets `#[derive(Reflect)]` expand to `::fieldwalk::...` inside this crate too.
extern crate self as fieldwalk;

pub mod collector;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod registry;

pub use fieldwalk_core::{Ancestors, Class, ClassDescriptor, Reflect};
pub use fieldwalk_derive::Reflect;

pub use collector::{
    ClassFields, FieldCollector, FieldNames, collect_field_names, field_names, field_names_of,
};
pub use error::{CollectError, ErrorKind, Result};
pub use policy::{AccessPolicy, AllowAll, DenyList, Sealed};
pub use registry::TypeRegistry;
