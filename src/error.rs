//! Error types for the form model core
//!
//! Structured errors using thiserror so callers can match on failure
//! categories instead of string contents.

use thiserror::Error;

use crate::fields::{FieldId, FieldType};

/// A raw type tag that does not resolve to a field definition.
///
/// With the closed [`FieldType`](crate::fields::FieldType) enum this can only
/// arise when parsing an externally supplied tag string, never when
/// dispatching on an already-typed instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field type '{tag}'")]
pub struct UnknownFieldType {
    pub tag: String,
}

/// A serialized form document that cannot be loaded.
///
/// The document is left unloaded; nothing partial is returned.
#[derive(Error, Debug)]
pub enum MalformedDocument {
    #[error("document is not a valid field array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field entry {index} has no type tag")]
    MissingTypeTag { index: usize },

    #[error(transparent)]
    UnknownFieldType(#[from] UnknownFieldType),

    #[error("duplicate field id '{id}'")]
    DuplicateId { id: FieldId },
}

/// Lookup miss for a field id inside a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no field with id '{id}' in document")]
pub struct FieldNotFound {
    pub id: FieldId,
}

/// Submission validation failure carrying the offending field ids in
/// document order. Recoverable: the caller re-prompts for corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed for {} field(s)", invalid_ids.len())]
pub struct ValidationFailed {
    pub invalid_ids: Vec<FieldId>,
}

/// Rejected properties-editor write-back.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttributeError {
    #[error("attribute update for '{expected}' field carries '{received}' attributes")]
    TypeMismatch {
        expected: FieldType,
        received: FieldType,
    },

    #[error("{attribute} must be between {min} and {max}, got {value}")]
    OutOfRange {
        attribute: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("number field minimum {min} exceeds maximum {max}")]
    InvertedBounds { min: f64, max: f64 },
}

/// Umbrella error for document-level operations that can fail in more than
/// one category.
#[derive(Error, Debug)]
pub enum FormError {
    #[error(transparent)]
    UnknownFieldType(#[from] UnknownFieldType),

    #[error(transparent)]
    Malformed(#[from] MalformedDocument),

    #[error(transparent)]
    FieldNotFound(#[from] FieldNotFound),

    #[error(transparent)]
    Validation(#[from] ValidationFailed),

    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_type_message() {
        let err = UnknownFieldType {
            tag: "slider".to_string(),
        };
        assert_eq!(err.to_string(), "unknown field type 'slider'");
    }

    #[test]
    fn test_validation_failed_counts_fields() {
        let err = ValidationFailed {
            invalid_ids: vec![FieldId::from("f1"), FieldId::from("f2")],
        };
        assert_eq!(err.to_string(), "validation failed for 2 field(s)");
    }
}
