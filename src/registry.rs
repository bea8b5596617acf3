//! Descriptor lookup keyed by type identity.
//!
//! The derive macro covers types you own. For foreign types, or when all you hold is a
//! `&dyn Any`, register a descriptor here and collect through
//! [`FieldCollector::collect_any`](crate::FieldCollector::collect_any).
//!
//! A registry is a plain value with no global state. Build it once and share it (for example in
//! an `Arc`) if several threads need it; lookups never mutate it.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use fieldwalk_core::{Class, ClassDescriptor};

use crate::error::{CollectError, Result};

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: HashMap<TypeId, &'static ClassDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type that already carries its own descriptor.
    pub fn register<T: Class>(&mut self) -> &mut Self {
        self.register_as::<T>(T::DESCRIPTOR)
    }

    /// Register `descriptor` as the schema of `T`, replacing any earlier entry.
    ///
    /// ## Examples
    /// ```rust
    /// use std::net::SocketAddr;
    /// use fieldwalk::{ClassDescriptor, TypeRegistry};
    ///
    /// static SOCKET_ADDR: ClassDescriptor = ClassDescriptor::root("SocketAddr", &["ip", "port"]);
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register_as::<SocketAddr>(&SOCKET_ADDR);
    /// assert!(registry.contains::<SocketAddr>());
    /// ```
    pub fn register_as<T: 'static>(&mut self, descriptor: &'static ClassDescriptor) -> &mut Self {
        if let Some(previous) = self.entries.insert(TypeId::of::<T>(), descriptor) {
            tracing::debug!(
                previous = previous.name(),
                replacement = descriptor.name(),
                "replaced registered class descriptor"
            );
        }
        self
    }

    pub fn get(&self, type_id: TypeId) -> Option<&'static ClassDescriptor> {
        self.entries.get(&type_id).copied()
    }

    /// Look up the descriptor for the dynamic type of `value`.
    pub fn resolve(&self, value: &dyn Any) -> Result<&'static ClassDescriptor> {
        let type_id = value.type_id();
        self.get(type_id)
            .ok_or(CollectError::UnregisteredType { type_id })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
