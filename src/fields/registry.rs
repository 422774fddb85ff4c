//! Field type registry.
//!
//! An explicitly constructed, immutable lookup table from type tag to
//! definition. Built once and injected wherever resolution is needed; there
//! is no module-level mutable state.

use std::collections::BTreeMap;

use crate::error::UnknownFieldType;
use crate::fields::{FieldId, FieldInstance, FieldType};

/// Type-level contract shared by all instances of one field type:
/// construction defaults plus the palette metadata the designer shows.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    field_type: FieldType,
    display_name: &'static str,
}

impl FieldDefinition {
    fn new(field_type: FieldType, display_name: &'static str) -> Self {
        Self {
            field_type,
            display_name,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Palette label shown in the designer sidebar.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn is_layout(&self) -> bool {
        self.field_type.is_layout()
    }

    pub fn default_height(&self) -> Option<f32> {
        self.field_type.default_height()
    }

    /// Produce a new instance with this type's defaults.
    pub fn construct(&self, id: FieldId) -> FieldInstance {
        self.field_type.construct(id)
    }

    /// The type's validation rule applied to a raw submitted value.
    pub fn validate(&self, instance: &FieldInstance, raw_value: &str) -> bool {
        debug_assert_eq!(instance.field_type(), self.field_type);
        instance.validate(raw_value)
    }
}

/// Immutable mapping from field type tag to definition, in palette order.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    entries: BTreeMap<FieldType, FieldDefinition>,
}

impl FieldRegistry {
    /// The standard registry covering the whole closed tag set.
    pub fn standard() -> Self {
        let entries = FieldType::ALL
            .into_iter()
            .map(|tag| {
                let display_name = match tag {
                    FieldType::Title => "Title Field",
                    FieldType::Paragraph => "Paragraph Field",
                    FieldType::Separator => "Separator Field",
                    FieldType::Spacer => "Spacer Field",
                    FieldType::Image => "Image Field",
                    FieldType::PageBreak => "Page Break",
                    FieldType::Text => "Text Field",
                    FieldType::TextArea => "TextArea Field",
                    FieldType::Number => "Number Field",
                    FieldType::Date => "Date Field",
                    FieldType::Select => "Select Field",
                    FieldType::Checkbox => "CheckBox Field",
                    FieldType::Table => "Table Field",
                };
                (tag, FieldDefinition::new(tag, display_name))
            })
            .collect();
        Self { entries }
    }

    /// Resolve a tag to its definition.
    ///
    /// Total over the standard registry; the error arm only fires for a
    /// registry deliberately built without some entry.
    pub fn resolve(&self, tag: FieldType) -> Result<&FieldDefinition, UnknownFieldType> {
        self.entries.get(&tag).ok_or_else(|| UnknownFieldType {
            tag: tag.as_str().to_string(),
        })
    }

    /// Parse a raw tag string and resolve it. This is the path that
    /// actually surfaces [`UnknownFieldType`] for tags outside the set.
    pub fn resolve_name(&self, raw: &str) -> Result<&FieldDefinition, UnknownFieldType> {
        let tag: FieldType = raw.parse()?;
        self.resolve(tag)
    }

    /// Construct an instance of `tag` with a caller-supplied id.
    pub fn construct(&self, tag: FieldType, id: FieldId) -> Result<FieldInstance, UnknownFieldType> {
        Ok(self.resolve(tag)?.construct(id))
    }

    /// Definitions in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_total_over_the_tag_set() {
        let registry = FieldRegistry::standard();
        for tag in FieldType::ALL {
            let definition = registry.resolve(tag).unwrap();
            assert_eq!(definition.field_type(), tag);

            let instance = definition.construct(FieldId::generate());
            assert_eq!(instance.field_type(), tag);
            assert!(definition.validate(&instance, ""));
        }
    }

    #[test]
    fn test_resolve_name_rejects_foreign_tags() {
        let registry = FieldRegistry::standard();
        assert!(registry.resolve_name("text").is_ok());
        let err = registry.resolve_name("rating").unwrap_err();
        assert_eq!(err.tag, "rating");
    }

    #[test]
    fn test_palette_order_starts_with_layout_elements() {
        let registry = FieldRegistry::standard();
        let order: Vec<FieldType> = registry.iter().map(|d| d.field_type()).collect();
        assert_eq!(order, FieldType::ALL.to_vec());
        assert!(order[0].is_layout());
    }

    #[test]
    fn test_registry_len_matches_closed_set() {
        assert_eq!(FieldRegistry::standard().len(), FieldType::ALL.len());
    }
}
