//! Form document model.
//!
//! An ordered sequence of field instances representing one form. Order is
//! semantically meaningful: it drives rendering order and the column order
//! of tabular submission views.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FieldNotFound, FormError, MalformedDocument};
use crate::fields::{FieldId, FieldInstance, FieldType, PropertiesUpdate};

/// Ordered collection of field instances.
///
/// Field ids must be unique within the document. The builder path keeps the
/// invariant by minting fresh ids; it is checked again whenever a document
/// is loaded from its serialized form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDocument {
    fields: Vec<FieldInstance>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldInstance> {
        self.fields.iter()
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldInstance> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Position of a field within the sequence.
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    /// Insert preserving order. `index` is clamped to `[0, len]`. Id
    /// uniqueness is the caller's invariant on this path.
    pub fn insert_at(&mut self, index: usize, instance: FieldInstance) {
        let index = index.min(self.fields.len());
        self.fields.insert(index, instance);
    }

    /// Append at the end of the sequence.
    pub fn push(&mut self, instance: FieldInstance) {
        self.fields.push(instance);
    }

    /// Remove the field with the given id, returning it.
    pub fn remove_by_id(&mut self, id: &FieldId) -> Result<FieldInstance, FieldNotFound> {
        match self.position(id) {
            Some(index) => Ok(self.fields.remove(index)),
            None => Err(FieldNotFound { id: id.clone() }),
        }
    }

    /// Replace the field with the given id in place, returning the
    /// displaced instance.
    pub fn replace_by_id(
        &mut self,
        id: &FieldId,
        instance: FieldInstance,
    ) -> Result<FieldInstance, FieldNotFound> {
        match self.position(id) {
            Some(index) => Ok(std::mem::replace(&mut self.fields[index], instance)),
            None => Err(FieldNotFound { id: id.clone() }),
        }
    }

    /// Apply a properties-editor result to the field with the given id.
    pub fn apply_properties(
        &mut self,
        id: &FieldId,
        update: PropertiesUpdate,
    ) -> Result<(), FormError> {
        let index = self
            .position(id)
            .ok_or_else(|| FieldNotFound { id: id.clone() })?;
        self.fields[index].apply_properties(update)?;
        Ok(())
    }

    /// Lossless ordered JSON array encoding.
    pub fn serialize(&self) -> Result<String, MalformedDocument> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    /// Inverse of [`serialize`](Self::serialize).
    ///
    /// Fails on invalid JSON, on a type tag outside the closed set, and on
    /// duplicate field ids. The document is left unloaded on failure.
    pub fn deserialize(input: &str) -> Result<Self, MalformedDocument> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(input)?;

        // Surface a foreign tag as its own error category instead of a
        // generic serde "unknown variant" message.
        for (index, entry) in raw.iter().enumerate() {
            let tag = entry
                .get("type")
                .and_then(serde_json::Value::as_str)
                .ok_or(MalformedDocument::MissingTypeTag { index })?;
            FieldType::from_str(tag)?;
        }

        let fields: Vec<FieldInstance> = serde_json::from_value(serde_json::Value::Array(raw))?;

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.id.clone()) {
                return Err(MalformedDocument::DuplicateId {
                    id: field.id.clone(),
                });
            }
        }

        debug!(fields = fields.len(), "form document loaded");
        Ok(Self { fields })
    }
}

impl FromIterator<FieldInstance> for FormDocument {
    fn from_iter<T: IntoIterator<Item = FieldInstance>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldType;

    fn text_field(id: &str) -> FieldInstance {
        FieldType::Text.construct(FieldId::from(id))
    }

    #[test]
    fn test_insert_at_clamps_index() {
        let mut doc = FormDocument::new();
        doc.insert_at(99, text_field("f1"));
        doc.insert_at(0, text_field("f2"));
        doc.insert_at(1, text_field("f3"));

        let order: Vec<&str> = doc.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(order, ["f2", "f3", "f1"]);
    }

    #[test]
    fn test_remove_by_id_returns_the_field() {
        let mut doc: FormDocument = ["f1", "f2"].into_iter().map(text_field).collect();
        let removed = doc.remove_by_id(&FieldId::from("f1")).unwrap();
        assert_eq!(removed.id.as_str(), "f1");
        assert!(doc.get(&FieldId::from("f1")).is_none());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_remove_missing_id_is_surfaced() {
        let mut doc = FormDocument::new();
        let err = doc.remove_by_id(&FieldId::from("ghost")).unwrap_err();
        assert_eq!(err.id.as_str(), "ghost");
    }

    #[test]
    fn test_replace_by_id_keeps_position() {
        let mut doc: FormDocument = ["f1", "f2", "f3"].into_iter().map(text_field).collect();
        let mut replacement = text_field("f2");
        replacement.label = "Edited".to_string();

        doc.replace_by_id(&FieldId::from("f2"), replacement).unwrap();
        assert_eq!(doc.position(&FieldId::from("f2")), Some(1));
        assert_eq!(doc.get(&FieldId::from("f2")).unwrap().label, "Edited");
    }

    #[test]
    fn test_replace_missing_id_is_surfaced() {
        let mut doc = FormDocument::new();
        let err = doc
            .replace_by_id(&FieldId::from("ghost"), text_field("ghost"))
            .unwrap_err();
        assert_eq!(err.id.as_str(), "ghost");
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let mut doc = FormDocument::new();
        for tag in FieldType::ALL {
            doc.push(tag.construct(FieldId::generate()));
        }

        let encoded = doc.serialize().unwrap();
        let decoded = FormDocument::deserialize(&encoded).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_empty_document_round_trips() {
        let doc = FormDocument::new();
        let encoded = doc.serialize().unwrap();
        assert_eq!(encoded, "[]");
        assert_eq!(FormDocument::deserialize(&encoded).unwrap(), doc);
    }

    #[test]
    fn test_deserialize_rejects_unknown_tag() {
        let input = r#"[{"id":"f1","label":"x","type":"hologram","extra_attributes":{}}]"#;
        let err = FormDocument::deserialize(input).unwrap_err();
        assert!(matches!(err, MalformedDocument::UnknownFieldType(e) if e.tag == "hologram"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let field = text_field("f1");
        let encoded = serde_json::to_string(&vec![field.clone(), field]).unwrap();
        let err = FormDocument::deserialize(&encoded).unwrap_err();
        assert!(matches!(err, MalformedDocument::DuplicateId { id } if id.as_str() == "f1"));
    }

    #[test]
    fn test_deserialize_rejects_non_array() {
        assert!(FormDocument::deserialize("{\"not\":\"an array\"}").is_err());
        assert!(FormDocument::deserialize("not json at all").is_err());
    }

    #[test]
    fn test_deserialize_requires_type_tag() {
        let input = r#"[{"id":"f1","label":"x"}]"#;
        let err = FormDocument::deserialize(input).unwrap_err();
        assert!(matches!(err, MalformedDocument::MissingTypeTag { index: 0 }));
    }
}
