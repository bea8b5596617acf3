//! Runtime type metadata for a single class in a hierarchy.
//!
//! A [`ClassDescriptor`] lists the fields declared directly on one type and points at the
//! descriptor of its superclass, if any. Walking the `parent` links from any descriptor yields
//! the superclass chain up to the root.
//!
//! ## See also
//! - [`crate::class::Class`] for the static accessor generated by the derive macro
//! - [`crate::class::Reflect`] for dynamic (trait-object) access

use core::any::TypeId;
use core::fmt;

/// Describe the declared fields of one class and link to its superclass.
///
/// ## Notes
/// - `fields` holds only the fields declared on this class, in declaration order. Inherited fields
///   live on the ancestor descriptors.
/// - Descriptors built in `const` items may be duplicated by the compiler, so their address says
///   nothing about identity. The derive macro stamps each descriptor with the Rust type it
///   describes ([`ClassDescriptor::with_type`]), and [`ClassDescriptor::same_class`] compares
///   that.
///
/// ## Examples
/// ```rust
/// use fieldwalk_core::ClassDescriptor;
///
/// const ANIMAL: ClassDescriptor = ClassDescriptor::root("Animal", &["name"]);
/// const DOG: ClassDescriptor = ClassDescriptor::new("Dog", &["breed"], Some(&ANIMAL));
///
/// assert_eq!(DOG.declared_fields(), &["breed"]);
/// assert_eq!(DOG.superclass().map(|c| c.name()), Some("Animal"));
/// ```
#[derive(Clone, Copy)]
pub struct ClassDescriptor {
    name: &'static str,
    fields: &'static [&'static str],
    parent: Option<&'static ClassDescriptor>,
    type_id: Option<fn() -> TypeId>,
}

impl ClassDescriptor {
    /// Create a descriptor with an optional superclass.
    pub const fn new(
        name: &'static str,
        fields: &'static [&'static str],
        parent: Option<&'static ClassDescriptor>,
    ) -> Self {
        Self {
            name,
            fields,
            parent,
            type_id: None,
        }
    }

    /// Create a descriptor for a class at the root of its hierarchy.
    pub const fn root(name: &'static str, fields: &'static [&'static str]) -> Self {
        Self::new(name, fields, None)
    }

    /// Tie this descriptor to the Rust type `T`.
    pub const fn with_type<T: ?Sized + 'static>(self) -> Self {
        Self {
            type_id: Some(TypeId::of::<T>),
            ..self
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fields declared directly on this class (not inherited ones).
    pub const fn declared_fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub const fn superclass(&self) -> Option<&'static ClassDescriptor> {
        self.parent
    }

    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether `field` is declared directly on this class.
    pub fn declares(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    /// The Rust type this descriptor was stamped with, if any.
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id.map(|type_id| type_id())
    }

    /// Whether `self` and `other` describe the same class.
    ///
    /// Descriptors stamped with a Rust type are the same class exactly when the types are equal,
    /// whatever their names and fields. Unstamped (hand-written) descriptors are only the same
    /// class as themselves.
    pub fn same_class(&self, other: &ClassDescriptor) -> bool {
        match (self.type_id(), other.type_id()) {
            (Some(left), Some(right)) => left == right,
            _ => core::ptr::eq(self, other),
        }
    }

    /// Iterate the superclass chain, starting with `self` and ending at the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: Some(self),
            seen: Vec::new(),
            cycled: false,
        }
    }

    /// Number of classes in the chain, counting `self`.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
}

// Prints the parent by name only so cyclic hand-written chains stay printable.
impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("parent", &self.parent.map(|p| p.name))
            .finish()
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator over a superclass chain, subclass first.
///
/// ## Notes
/// - Hierarchies produced by the derive macro are acyclic (a const cannot refer to itself), but
///   hand-written `static` descriptors can point at each other. The iterator remembers every
///   descriptor it yielded and stops on the first revisit; [`Ancestors::cycled`] then reports
///   `true`.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a ClassDescriptor>,
    seen: Vec<usize>,
    cycled: bool,
}

impl<'a> Ancestors<'a> {
    /// Whether iteration stopped because the chain revisited a descriptor.
    pub fn cycled(&self) -> bool {
        self.cycled
    }

    /// The descriptor that would have been yielded when a cycle was detected.
    pub fn peek(&self) -> Option<&'a ClassDescriptor> {
        self.next
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ClassDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cycled {
            return None;
        }
        let current = self.next?;
        let addr = current as *const ClassDescriptor as usize;
        if self.seen.contains(&addr) {
            self.cycled = true;
            return None;
        }
        self.seen.push(addr);
        self.next = current.parent;
        Some(current)
    }
}

impl core::iter::FusedIterator for Ancestors<'_> {}
