//! Submission validation.
//!
//! Runs each field's validation rule against the supplied values and
//! aggregates the failures. Validation is stateless per field, so the
//! walk order only affects the order failures are reported in.

use std::collections::HashMap;

use tracing::debug;

use crate::document::FormDocument;
use crate::error::ValidationFailed;
use crate::fields::FieldId;

/// Aggregated result of validating one submission against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    invalid_ids: Vec<FieldId>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.invalid_ids.is_empty()
    }

    /// Failing field ids, in document order.
    pub fn invalid_ids(&self) -> &[FieldId] {
        &self.invalid_ids
    }

    /// Convert into a propagatable error, or `Ok` when everything passed.
    pub fn into_result(self) -> Result<(), ValidationFailed> {
        if self.invalid_ids.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailed {
                invalid_ids: self.invalid_ids,
            })
        }
    }
}

/// Validate every field of `document` against `values`.
///
/// A field with no entry in `values` is validated against the empty string,
/// so required fields fail and everything else passes.
pub fn validate_all(
    document: &FormDocument,
    values: &HashMap<FieldId, String>,
) -> ValidationOutcome {
    let mut invalid_ids = Vec::new();
    for field in document.iter() {
        let raw_value = values.get(&field.id).map(String::as_str).unwrap_or("");
        if !field.validate(raw_value) {
            invalid_ids.push(field.id.clone());
        }
    }

    if !invalid_ids.is_empty() {
        debug!(invalid = invalid_ids.len(), "submission failed validation");
    }
    ValidationOutcome { invalid_ids }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldAttributes, FieldId, FieldType};

    fn required_text(id: &str) -> crate::fields::FieldInstance {
        let mut field = FieldType::Text.construct(FieldId::from(id));
        if let FieldAttributes::Text(attrs) = &mut field.attributes {
            attrs.required = true;
        }
        field
    }

    #[test]
    fn test_required_field_fails_without_value_title_passes() {
        let mut doc = FormDocument::new();
        doc.push(required_text("f1"));
        doc.push(FieldType::Title.construct(FieldId::from("f2")));

        let outcome = validate_all(&doc, &HashMap::new());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.invalid_ids(), &[FieldId::from("f1")]);

        let values = HashMap::from([(FieldId::from("f1"), "hello".to_string())]);
        let outcome = validate_all(&doc, &values);
        assert!(outcome.is_valid());
        assert!(outcome.invalid_ids().is_empty());
    }

    #[test]
    fn test_failures_reported_in_document_order() {
        let mut doc = FormDocument::new();
        doc.push(required_text("b"));
        doc.push(required_text("a"));
        doc.push(required_text("c"));

        let values = HashMap::from([(FieldId::from("a"), "filled".to_string())]);
        let outcome = validate_all(&doc, &values);
        assert_eq!(
            outcome.invalid_ids(),
            &[FieldId::from("b"), FieldId::from("c")]
        );
    }

    #[test]
    fn test_into_result_carries_invalid_ids() {
        let mut doc = FormDocument::new();
        doc.push(required_text("f1"));

        let err = validate_all(&doc, &HashMap::new()).into_result().unwrap_err();
        assert_eq!(err.invalid_ids, vec![FieldId::from("f1")]);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let outcome = validate_all(&FormDocument::new(), &HashMap::new());
        assert!(outcome.is_valid());
    }
}
