//! Provide the schema vocabulary shared by the `fieldwalk` collector and its derive macro.
//!
//! Rust has no runtime reflection, so every type that wants its fields enumerated carries a
//! [`ClassDescriptor`]: a `'static` table of its declared field names plus a link to the
//! descriptor of its superclass. Descriptors are normally generated by `#[derive(Reflect)]`
//! and can also be written by hand for foreign types.
//!
//! ## Notes
//!
//! - This crate is intentionally small and dependency-free: **no IO**, no global state.
//! - Descriptors are immutable and `Copy`-friendly so they can live in `const` items.

pub mod class;
pub mod descriptor;

pub use class::{Class, Reflect};
pub use descriptor::{Ancestors, ClassDescriptor};
