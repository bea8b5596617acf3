//! Static and dynamic access to a type's [`ClassDescriptor`].
//!
//! [`Class`] is the compile-time side: it is implemented per type, normally by
//! `#[derive(Reflect)]`. [`Reflect`] is the object-safe side and is implemented for every
//! `Class` through a blanket impl, so a `&dyn Reflect` reports the descriptor of the value's
//! concrete (dynamic) type rather than the type it was borrowed as.

use core::any::Any;

use crate::descriptor::ClassDescriptor;

/// Provides the schema of a type at compile time.
///
/// This trait is typically derived using `#[derive(Reflect)]` on structs. Hand-written impls
/// should stamp the descriptor with [`ClassDescriptor::with_type`] so that
/// [`ClassDescriptor::same_class`] can tell `Self` apart from same-named types.
///
/// # Examples
///
/// ```rust
/// use fieldwalk_core::{Class, ClassDescriptor};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Class for Point {
///     const DESCRIPTOR: &'static ClassDescriptor =
///         &ClassDescriptor::root("Point", &["x", "y"]).with_type::<Self>();
/// }
///
/// assert_eq!(Point::descriptor().declared_fields(), &["x", "y"]);
/// assert_eq!(Point::descriptor().type_id(), Some(std::any::TypeId::of::<Point>()));
/// ```
pub trait Class: 'static {
    /// Descriptor of the fields declared directly on `Self`.
    const DESCRIPTOR: &'static ClassDescriptor;

    fn descriptor() -> &'static ClassDescriptor {
        Self::DESCRIPTOR
    }
}

/// Reports the descriptor of a value's dynamic type.
///
/// Implemented for every [`Class`] that is `Send + Sync`; there is no need to implement it by
/// hand.
pub trait Reflect: Any + Send + Sync {
    fn class(&self) -> &'static ClassDescriptor;
}

impl<T: Class + Send + Sync> Reflect for T {
    fn class(&self) -> &'static ClassDescriptor {
        T::DESCRIPTOR
    }
}
