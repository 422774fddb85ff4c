//! Attribute schemas for layout-only field types.
//!
//! Layout fields structure the rendered form and never carry a submitted
//! value, so they have no validation rule beyond "always valid".

use serde::{Deserialize, Serialize};

/// Relative size of a rendered title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleFontSize {
    Small,
    Medium,
    Large,
}

/// Section heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleAttributes {
    pub font_size: TitleFontSize,
}

impl Default for TitleAttributes {
    fn default() -> Self {
        Self {
            font_size: TitleFontSize::Medium,
        }
    }
}

/// Free-standing block of explanatory text. The body lives here, not in the
/// instance label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphAttributes {
    pub text: String,
}

impl Default for ParagraphAttributes {
    fn default() -> Self {
        Self {
            text: "Paragraph text".to_string(),
        }
    }
}

/// Horizontal rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeparatorAttributes {}

/// Fixed vertical gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerAttributes {
    pub height_px: u32,
}

impl Default for SpacerAttributes {
    fn default() -> Self {
        Self { height_px: 20 }
    }
}

/// Embedded image. `url` stays empty until the designer uploads or links
/// one; resolution of the URL is a rendering concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display width as a percentage of the form width.
    pub width_pct: u32,
}

impl Default for ImageAttributes {
    fn default() -> Self {
        Self {
            url: None,
            width_pct: 100,
        }
    }
}

/// Page boundary for multi-page data entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageBreakAttributes {}
