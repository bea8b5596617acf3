//! Prelude module for common imports.
//!
//! ```ignore
//! use fieldwalk::prelude::*;
//! ```

// Schema traits
pub use crate::{Class, ClassDescriptor, Reflect};
// Collector entry points
pub use crate::collector::{
    FieldCollector, FieldNames, collect_field_names, field_names, field_names_of,
};
pub use crate::error::{CollectError, ErrorKind};
pub use crate::policy::{AccessPolicy, AllowAll, DenyList, Sealed};
