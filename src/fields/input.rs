//! Attribute schemas for value-carrying field types.
//!
//! Every struct deserializes missing attributes to its designer default, so
//! a field saved without `required` is treated as not required.

use serde::{Deserialize, Serialize};

/// Single-line text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttributes {
    pub helper_text: String,
    pub placeholder: String,
    pub required: bool,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            helper_text: String::new(),
            placeholder: "Value here...".to_string(),
            required: false,
        }
    }
}

/// Multi-line text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAreaAttributes {
    pub helper_text: String,
    pub placeholder: String,
    pub required: bool,
    /// Visible rows hint for the rendering layer.
    pub rows: u32,
}

impl Default for TextAreaAttributes {
    fn default() -> Self {
        Self {
            helper_text: String::new(),
            placeholder: "Value here...".to_string(),
            required: false,
            rows: 3,
        }
    }
}

/// Numeric input. `min`/`max` are designer hints surfaced by the rendering
/// layer; submission validation only checks presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberAttributes {
    pub helper_text: String,
    pub placeholder: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Default for NumberAttributes {
    fn default() -> Self {
        Self {
            helper_text: String::new(),
            placeholder: "0".to_string(),
            required: false,
            min: None,
            max: None,
        }
    }
}

/// Date picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateAttributes {
    pub helper_text: String,
    pub required: bool,
}

impl Default for DateAttributes {
    fn default() -> Self {
        Self {
            helper_text: "Pick a date".to_string(),
            required: false,
        }
    }
}

/// Dropdown selection over a fixed option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectAttributes {
    pub helper_text: String,
    pub placeholder: String,
    pub required: bool,
    pub options: Vec<String>,
}

impl Default for SelectAttributes {
    fn default() -> Self {
        Self {
            helper_text: String::new(),
            placeholder: "Select an option".to_string(),
            required: false,
            options: Vec::new(),
        }
    }
}

/// Single checkbox. A required checkbox submits the literal `"true"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxAttributes {
    pub helper_text: String,
    pub required: bool,
}
