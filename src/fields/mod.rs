//! Field model: the closed type set, placed instances, and per-type
//! attribute schemas.
//!
//! Every field type is a variant of [`FieldType`], and its attribute schema
//! is a variant of [`FieldAttributes`]. Dispatch over types is an exhaustive
//! match, so adding a type means the compiler walks you through every place
//! that must learn about it.

pub mod input;
pub mod layout;
pub mod properties;
pub mod registry;
pub mod render;
pub mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::UnknownFieldType;

pub use input::{
    CheckboxAttributes, DateAttributes, NumberAttributes, SelectAttributes, TextAttributes,
    TextAreaAttributes,
};
pub use layout::{
    ImageAttributes, PageBreakAttributes, ParagraphAttributes, SeparatorAttributes,
    SpacerAttributes, TitleAttributes, TitleFontSize,
};
pub use properties::PropertiesUpdate;
pub use registry::{FieldDefinition, FieldRegistry};
pub use render::{FieldRenderer, InputContext};
pub use table::{CellValue, TableAttributes};

/// Unique identifier of one placed field within a form document.
///
/// Stable string identity: generated ids are v4 UUIDs, but any non-empty
/// string round-trips through serialization unchanged. Never reused within
/// a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(String);

impl FieldId {
    /// Mint a fresh process-unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FieldId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of field type tags.
///
/// Variant order is the designer palette order: layout elements first, then
/// value-carrying elements.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Title,
    Paragraph,
    Separator,
    Spacer,
    Image,
    PageBreak,
    Text,
    #[serde(rename = "textarea")]
    TextArea,
    Number,
    Date,
    Select,
    Checkbox,
    Table,
}

impl FieldType {
    /// All tags, in palette order.
    pub const ALL: [FieldType; 13] = [
        FieldType::Title,
        FieldType::Paragraph,
        FieldType::Separator,
        FieldType::Spacer,
        FieldType::Image,
        FieldType::PageBreak,
        FieldType::Text,
        FieldType::TextArea,
        FieldType::Number,
        FieldType::Date,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Table,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Title => "title",
            FieldType::Paragraph => "paragraph",
            FieldType::Separator => "separator",
            FieldType::Spacer => "spacer",
            FieldType::Image => "image",
            FieldType::PageBreak => "page_break",
            FieldType::Text => "text",
            FieldType::TextArea => "textarea",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Table => "table",
        }
    }

    /// Layout types never carry a submitted value.
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            FieldType::Title
                | FieldType::Paragraph
                | FieldType::Separator
                | FieldType::Spacer
                | FieldType::Image
                | FieldType::PageBreak
        )
    }

    /// Fixed vertical space reserved at design time, where layout matters.
    /// Paragraph height depends on rendered content and is left to the
    /// rendering layer.
    pub fn default_height(&self) -> Option<f32> {
        match self {
            FieldType::Title => Some(50.0),
            FieldType::Separator => Some(16.0),
            FieldType::Spacer => Some(20.0),
            FieldType::PageBreak => Some(64.0),
            _ => None,
        }
    }

    /// Label a freshly constructed instance starts with.
    pub fn default_label(&self) -> &'static str {
        match self {
            FieldType::Title => "Title field",
            FieldType::Paragraph => "Paragraph",
            FieldType::Separator => "Separator",
            FieldType::Spacer => "Spacer",
            FieldType::Image => "Image",
            FieldType::PageBreak => "Page break",
            FieldType::Text => "Text field",
            FieldType::TextArea => "Text area",
            FieldType::Number => "Number field",
            FieldType::Date => "Date field",
            FieldType::Select => "Select field",
            FieldType::Checkbox => "Checkbox field",
            FieldType::Table => "Table",
        }
    }

    /// Produce a new instance with this type's designer defaults.
    pub fn construct(self, id: FieldId) -> FieldInstance {
        let attributes = match self {
            FieldType::Title => FieldAttributes::Title(TitleAttributes::default()),
            FieldType::Paragraph => FieldAttributes::Paragraph(ParagraphAttributes::default()),
            FieldType::Separator => FieldAttributes::Separator(SeparatorAttributes::default()),
            FieldType::Spacer => FieldAttributes::Spacer(SpacerAttributes::default()),
            FieldType::Image => FieldAttributes::Image(ImageAttributes::default()),
            FieldType::PageBreak => FieldAttributes::PageBreak(PageBreakAttributes::default()),
            FieldType::Text => FieldAttributes::Text(TextAttributes::default()),
            FieldType::TextArea => FieldAttributes::TextArea(TextAreaAttributes::default()),
            FieldType::Number => FieldAttributes::Number(NumberAttributes::default()),
            FieldType::Date => FieldAttributes::Date(DateAttributes::default()),
            FieldType::Select => FieldAttributes::Select(SelectAttributes::default()),
            FieldType::Checkbox => FieldAttributes::Checkbox(CheckboxAttributes::default()),
            FieldType::Table => FieldAttributes::Table(TableAttributes::default()),
        };

        FieldInstance {
            id,
            label: self.default_label().to_string(),
            attributes,
            height: self.default_height(),
            width: None,
        }
    }
}

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(FieldType::Title),
            "paragraph" => Ok(FieldType::Paragraph),
            "separator" => Ok(FieldType::Separator),
            "spacer" => Ok(FieldType::Spacer),
            "image" => Ok(FieldType::Image),
            "page_break" => Ok(FieldType::PageBreak),
            "text" => Ok(FieldType::Text),
            "textarea" => Ok(FieldType::TextArea),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "select" => Ok(FieldType::Select),
            "checkbox" => Ok(FieldType::Checkbox),
            "table" => Ok(FieldType::Table),
            other => Err(UnknownFieldType {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type attribute payload. One variant per [`FieldType`], each carrying
/// its own schema.
///
/// Serialized adjacently tagged, so on the wire a field instance is the flat
/// record `{id, label, type, extra_attributes, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "extra_attributes", rename_all = "snake_case")]
pub enum FieldAttributes {
    Title(TitleAttributes),
    Paragraph(ParagraphAttributes),
    Separator(SeparatorAttributes),
    Spacer(SpacerAttributes),
    Image(ImageAttributes),
    PageBreak(PageBreakAttributes),
    Text(TextAttributes),
    #[serde(rename = "textarea")]
    TextArea(TextAreaAttributes),
    Number(NumberAttributes),
    Date(DateAttributes),
    Select(SelectAttributes),
    Checkbox(CheckboxAttributes),
    Table(TableAttributes),
}

impl FieldAttributes {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldAttributes::Title(_) => FieldType::Title,
            FieldAttributes::Paragraph(_) => FieldType::Paragraph,
            FieldAttributes::Separator(_) => FieldType::Separator,
            FieldAttributes::Spacer(_) => FieldType::Spacer,
            FieldAttributes::Image(_) => FieldType::Image,
            FieldAttributes::PageBreak(_) => FieldType::PageBreak,
            FieldAttributes::Text(_) => FieldType::Text,
            FieldAttributes::TextArea(_) => FieldType::TextArea,
            FieldAttributes::Number(_) => FieldType::Number,
            FieldAttributes::Date(_) => FieldType::Date,
            FieldAttributes::Select(_) => FieldType::Select,
            FieldAttributes::Checkbox(_) => FieldType::Checkbox,
            FieldAttributes::Table(_) => FieldType::Table,
        }
    }

    /// Whether a submitted value is mandatory for this field.
    pub fn is_required(&self) -> bool {
        match self {
            FieldAttributes::Text(a) => a.required,
            FieldAttributes::TextArea(a) => a.required,
            FieldAttributes::Number(a) => a.required,
            FieldAttributes::Date(a) => a.required,
            FieldAttributes::Select(a) => a.required,
            FieldAttributes::Checkbox(a) => a.required,
            FieldAttributes::Table(a) => a.required,
            _ => false,
        }
    }

    /// Validation rule for a raw submitted value.
    ///
    /// Checkbox and table fields treat the value as a completion flag and
    /// require the literal `"true"`. Layout types carry no value and always
    /// pass.
    pub fn accepts(&self, raw_value: &str) -> bool {
        match self {
            FieldAttributes::Text(a) => !a.required || !raw_value.is_empty(),
            FieldAttributes::TextArea(a) => !a.required || !raw_value.is_empty(),
            FieldAttributes::Number(a) => !a.required || !raw_value.is_empty(),
            FieldAttributes::Date(a) => !a.required || !raw_value.is_empty(),
            FieldAttributes::Select(a) => !a.required || !raw_value.is_empty(),
            FieldAttributes::Checkbox(a) => !a.required || raw_value == "true",
            FieldAttributes::Table(a) => !a.required || raw_value == "true",
            FieldAttributes::Title(_)
            | FieldAttributes::Paragraph(_)
            | FieldAttributes::Separator(_)
            | FieldAttributes::Spacer(_)
            | FieldAttributes::Image(_)
            | FieldAttributes::PageBreak(_) => true,
        }
    }
}

/// One placed field within a form document.
///
/// Owned exclusively by the containing document. Mutation from outside the
/// document happens by whole-instance replacement keyed on `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInstance {
    pub id: FieldId,
    pub label: String,
    #[serde(flatten)]
    pub attributes: FieldAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl FieldInstance {
    pub fn field_type(&self) -> FieldType {
        self.attributes.field_type()
    }

    /// Pure validation predicate for a raw submitted value.
    pub fn validate(&self, raw_value: &str) -> bool {
        self.attributes.accepts(raw_value)
    }
}
