//! Access policies deciding which classes may be introspected.
//!
//! A policy models the environment's stance on introspection (a sandbox that refuses it, or a
//! deployment that hides particular classes). The collector consults the policy for every class
//! in a chain *before* reading its fields; any refusal aborts the whole call with
//! [`CollectError::ReflectionDenied`](crate::CollectError::ReflectionDenied).

use std::collections::HashSet;

use fieldwalk_core::ClassDescriptor;

/// Decide whether a class may be introspected.
///
/// Closures of the shape `Fn(&ClassDescriptor) -> Result<(), String>` are policies too.
pub trait AccessPolicy: Send + Sync {
    /// Return `Err(reason)` to refuse introspection of `class`.
    fn check(&self, class: &ClassDescriptor) -> Result<(), String>;
}

impl<F> AccessPolicy for F
where
    F: Fn(&ClassDescriptor) -> Result<(), String> + Send + Sync,
{
    fn check(&self, class: &ClassDescriptor) -> Result<(), String> {
        self(class)
    }
}

/// Permit everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn check(&self, _class: &ClassDescriptor) -> Result<(), String> {
        Ok(())
    }
}

/// Refuse every class, as a fully sandboxed runtime would.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sealed;

impl AccessPolicy for Sealed {
    fn check(&self, _class: &ClassDescriptor) -> Result<(), String> {
        Err("introspection is disabled".to_string())
    }
}

/// Refuse the classes whose names are listed.
///
/// # Examples
///
/// ```rust
/// use fieldwalk::{AccessPolicy, ClassDescriptor, DenyList};
///
/// let policy = DenyList::new().deny("Credentials");
/// let hidden = ClassDescriptor::root("Credentials", &["token"]);
/// let open = ClassDescriptor::root("Profile", &["name"]);
///
/// assert!(policy.check(&hidden).is_err());
/// assert!(policy.check(&open).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    names: HashSet<String>,
}

impl DenyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class name to the list.
    pub fn deny(mut self, class: impl Into<String>) -> Self {
        self.names.insert(class.into());
        self
    }

    pub fn is_denied(&self, class: &str) -> bool {
        self.names.contains(class)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DenyList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AccessPolicy for DenyList {
    fn check(&self, class: &ClassDescriptor) -> Result<(), String> {
        if self.is_denied(class.name()) {
            Err("class is on the deny list".to_string())
        } else {
            Ok(())
        }
    }
}
