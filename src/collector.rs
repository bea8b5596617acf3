//! The field-name collector.
//!
//! Given an object, the collector takes the descriptor of its dynamic type and walks the
//! superclass chain to the root, adding every declared field name to a fresh set. Names declared
//! at more than one level (shadowing) are reported once: the result answers "which field names
//! exist", not "how many field slots exist".
//!
//! The walk is pure. It reads only `'static` descriptors, never field values, and allocates
//! nothing shared, so a collector can be used from any number of threads at once.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::any::Any;
use std::collections::HashSet;

use fieldwalk_core::{Class, ClassDescriptor, Reflect};

use crate::error::{CollectError, Result};
use crate::policy::{AccessPolicy, AllowAll};
use crate::registry::TypeRegistry;

/// The set of field names found in a hierarchy.
pub type FieldNames = HashSet<String>;

/// The fields declared on one level of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ClassFields {
    pub class: &'static str,
    pub fields: Vec<&'static str>,
}

impl ClassFields {
    fn of(class: &ClassDescriptor) -> Self {
        Self {
            class: class.name(),
            fields: class.declared_fields().to_vec(),
        }
    }

    /// Names declared on more than one level, sorted.
    pub fn shadowed(levels: &[ClassFields]) -> Vec<&'static str> {
        let mut seen: HashSet<&'static str> = HashSet::new();
        let mut shadowed: Vec<&'static str> = Vec::new();
        for level in levels {
            for &field in &level.fields {
                if !seen.insert(field) && !shadowed.contains(&field) {
                    shadowed.push(field);
                }
            }
        }
        shadowed.sort_unstable();
        shadowed
    }
}

/// Collects field names across a superclass chain, subject to an [`AccessPolicy`].
///
/// # Examples
///
/// ```rust
/// use fieldwalk::{FieldCollector, Reflect};
///
/// #[derive(Reflect)]
/// struct Animal {
///     name: String,
/// }
///
/// #[derive(Reflect)]
/// struct Dog {
///     #[reflect(base)]
///     animal: Animal,
///     breed: String,
/// }
///
/// let dog = Dog { animal: Animal { name: "Rex".into() }, breed: "collie".into() };
/// let names = FieldCollector::new().collect(&dog).unwrap();
///
/// let mut names: Vec<_> = names.into_iter().collect();
/// names.sort();
/// assert_eq!(names, vec!["breed", "name"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldCollector<P = AllowAll> {
    policy: P,
}

impl FieldCollector<AllowAll> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: AccessPolicy> FieldCollector<P> {
    /// Replace the access policy.
    pub fn with_policy<Q: AccessPolicy>(self, policy: Q) -> FieldCollector<Q> {
        FieldCollector { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Collect the field names of `obj`'s dynamic type and all its superclasses.
    pub fn collect(&self, obj: &dyn Reflect) -> Result<FieldNames> {
        self.collect_class(obj.class())
    }

    /// Like [`collect`](Self::collect), but an absent object is an
    /// [`InvalidArgument`](CollectError::InvalidArgument) error. Pass `None` as
    /// `collect_opt::<dyn Reflect>(None)` when there is no `T` to infer.
    pub fn collect_opt<T: Reflect + ?Sized>(&self, obj: Option<&T>) -> Result<FieldNames> {
        let obj = obj.ok_or_else(CollectError::absent_object)?;
        self.collect_class(obj.class())
    }

    /// Collect the field names of a statically known type.
    pub fn collect_static<T: Class>(&self) -> Result<FieldNames> {
        self.collect_class(T::DESCRIPTOR)
    }

    /// Collect the field names of the dynamic type of `obj`, resolved through `registry`.
    pub fn collect_any(&self, registry: &TypeRegistry, obj: &dyn Any) -> Result<FieldNames> {
        let class = registry.resolve(obj)?;
        self.collect_class(class)
    }

    /// Collect the field names of `class` and all its superclasses.
    #[tracing::instrument(level = "debug", skip_all, fields(class = class.name()))]
    pub fn collect_class(&self, class: &ClassDescriptor) -> Result<FieldNames> {
        let mut names = FieldNames::new();
        self.walk(class, |level| {
            names.extend(level.declared_fields().iter().map(|f| f.to_string()));
        })?;
        tracing::debug!(count = names.len(), "collected field names");
        Ok(names)
    }

    /// The per-level breakdown of `obj`'s hierarchy, subclass first.
    #[tracing::instrument(level = "debug", skip_all, fields(class = obj.class().name()))]
    pub fn trace(&self, obj: &dyn Reflect) -> Result<Vec<ClassFields>> {
        let mut levels = Vec::new();
        self.walk(obj.class(), |level| levels.push(ClassFields::of(level)))?;
        Ok(levels)
    }

    /// The per-level breakdown of `obj`'s hierarchy as JSON.
    #[cfg(feature = "json")]
    pub fn trace_json(&self, obj: &dyn Reflect) -> Result<serde_json::Value> {
        let levels = self.trace(obj)?;
        Ok(serde_json::to_value(levels)?)
    }

    /// Visit every class in the chain after the policy admits it. Nothing is handed to `visit`
    /// unless the whole chain is admitted and acyclic.
    fn walk(&self, class: &ClassDescriptor, mut visit: impl FnMut(&ClassDescriptor)) -> Result<()> {
        let mut chain = class.ancestors();
        let mut admitted: Vec<&ClassDescriptor> = Vec::new();
        for level in chain.by_ref() {
            if let Err(reason) = self.policy.check(level) {
                tracing::warn!(class = level.name(), %reason, "introspection refused");
                return Err(CollectError::ReflectionDenied {
                    class: level.name(),
                    reason,
                });
            }
            tracing::trace!(
                class = level.name(),
                declared = level.declared_fields().len(),
                "visiting class"
            );
            admitted.push(level);
        }
        if chain.cycled() {
            let revisited = chain.peek().map_or("<unknown>", ClassDescriptor::name);
            tracing::warn!(class = class.name(), revisited, "cyclic superclass chain");
            return Err(CollectError::CyclicHierarchy {
                class: class.name(),
                revisited,
            });
        }
        for level in admitted {
            visit(level);
        }
        Ok(())
    }
}

/// Collect the field names of `obj` with the default collector.
///
/// An absent object fails with [`InvalidArgument`](CollectError::InvalidArgument). A bare `None`
/// carries no type to infer `T` from, so name one: `collect_field_names::<dyn Reflect>(None)`.
///
/// # Examples
///
/// ```rust
/// use fieldwalk::{ErrorKind, Reflect, collect_field_names};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let names = collect_field_names(Some(&Point { x: 1, y: 2 })).unwrap();
/// assert_eq!(names.len(), 2);
///
/// let err = collect_field_names::<dyn Reflect>(None).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn collect_field_names<T: Reflect + ?Sized>(obj: Option<&T>) -> Result<FieldNames> {
    FieldCollector::new().collect_opt(obj)
}

/// Collect the field names of `obj` with the default collector.
pub fn field_names(obj: &dyn Reflect) -> Result<FieldNames> {
    FieldCollector::new().collect(obj)
}

/// Collect the field names of `T` with the default collector.
pub fn field_names_of<T: Class>() -> Result<FieldNames> {
    FieldCollector::new().collect_static::<T>()
}
