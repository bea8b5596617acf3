//! Error taxonomy for field collection.
//!
//! Every error renders as `Kind: message`, with the kind spelled exactly as [`ErrorKind::as_str`]
//! returns it, so callers matching on text and callers matching on [`CollectError::kind`] agree.

use std::any::TypeId;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = CollectError> = std::result::Result<T, E>;

/// Canonical error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    ReflectionDenied,
    UnregisteredType,
    CyclicHierarchy,
    #[cfg(feature = "json")]
    Json,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::ReflectionDenied => "ReflectionDenied",
            ErrorKind::UnregisteredType => "UnregisteredType",
            ErrorKind::CyclicHierarchy => "CyclicHierarchy",
            #[cfg(feature = "json")]
            ErrorKind::Json => "Json",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while collecting field names.
///
/// None of these are retried internally and no partial result accompanies them.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The object reference was absent.
    #[error("InvalidArgument: {reason}")]
    InvalidArgument { reason: String },

    /// The access policy refused to expose a class in the chain.
    #[error("ReflectionDenied: introspection of `{class}` refused: {reason}")]
    ReflectionDenied { class: &'static str, reason: String },

    /// A `dyn Any` value whose type has no registered descriptor.
    #[error("UnregisteredType: no class descriptor registered for {type_id:?}")]
    UnregisteredType { type_id: TypeId },

    /// The superclass chain links back to a class already visited.
    #[error("CyclicHierarchy: superclass chain of `{class}` revisits `{revisited}`")]
    CyclicHierarchy {
        class: &'static str,
        revisited: &'static str,
    },

    #[cfg(feature = "json")]
    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CollectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CollectError::ReflectionDenied { .. } => ErrorKind::ReflectionDenied,
            CollectError::UnregisteredType { .. } => ErrorKind::UnregisteredType,
            CollectError::CyclicHierarchy { .. } => ErrorKind::CyclicHierarchy,
            #[cfg(feature = "json")]
            CollectError::Json(_) => ErrorKind::Json,
        }
    }

    pub(crate) fn absent_object() -> Self {
        CollectError::InvalidArgument {
            reason: "object reference is absent".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_with_kind() {
        let errors = [
            CollectError::absent_object(),
            CollectError::ReflectionDenied {
                class: "Vault",
                reason: "sealed".to_string(),
            },
            CollectError::UnregisteredType {
                type_id: TypeId::of::<u8>(),
            },
            CollectError::CyclicHierarchy {
                class: "A",
                revisited: "B",
            },
        ];
        for err in &errors {
            let rendered = err.to_string();
            let prefix = format!("{}: ", err.kind().as_str());
            assert!(
                rendered.starts_with(&prefix),
                "expected `{prefix}` prefix in {rendered:?}"
            );
        }
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_errors_use_their_kind_spelling() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CollectError::from(source);
        assert_eq!(err.kind().as_str(), "Json");
        assert!(err.to_string().starts_with("Json: "), "{err}");
    }

    #[test]
    fn kind_spelling_matches_variant_name() {
        let kinds = [
            (ErrorKind::InvalidArgument, "InvalidArgument"),
            (ErrorKind::ReflectionDenied, "ReflectionDenied"),
            (ErrorKind::UnregisteredType, "UnregisteredType"),
            (ErrorKind::CyclicHierarchy, "CyclicHierarchy"),
        ];
        for (kind, spelling) in kinds {
            assert_eq!(kind.as_str(), spelling);
            assert_eq!(format!("{kind:?}"), spelling);
        }
    }

    #[test]
    fn denied_message_names_class_and_reason() {
        let err = CollectError::ReflectionDenied {
            class: "Vault",
            reason: "sealed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ReflectionDenied: introspection of `Vault` refused: sealed"
        );
    }
}
