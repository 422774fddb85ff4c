//! Properties-editor write-back.
//!
//! The properties editor hands back a whole replacement attribute set.
//! Numeric attribute bounds are enforced here, at edit time only; existing
//! documents that predate a bound are never rewritten retroactively.

use crate::error::AttributeError;
use crate::fields::{FieldAttributes, FieldInstance};

/// Table grid limits.
pub const TABLE_ROWS_MIN: u32 = 1;
pub const TABLE_ROWS_MAX: u32 = 500;
pub const TABLE_COLUMNS_MIN: u32 = 1;
pub const TABLE_COLUMNS_MAX: u32 = 10;

/// Textarea visible rows limits.
pub const TEXTAREA_ROWS_MIN: u32 = 1;
pub const TEXTAREA_ROWS_MAX: u32 = 40;

/// Spacer height limits in pixels.
pub const SPACER_HEIGHT_MIN: u32 = 4;
pub const SPACER_HEIGHT_MAX: u32 = 400;

/// Image width limits in percent of form width.
pub const IMAGE_WIDTH_MIN: u32 = 10;
pub const IMAGE_WIDTH_MAX: u32 = 100;

/// Result of one properties-editor session for a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertiesUpdate {
    pub label: String,
    pub attributes: FieldAttributes,
    pub height: Option<f32>,
    pub width: Option<f32>,
}

impl PropertiesUpdate {
    /// Start from the field's current state, for editors that change one
    /// attribute at a time.
    pub fn from_instance(instance: &FieldInstance) -> Self {
        Self {
            label: instance.label.clone(),
            attributes: instance.attributes.clone(),
            height: instance.height,
            width: instance.width,
        }
    }
}

fn check_range(
    attribute: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), AttributeError> {
    if value < min || value > max {
        return Err(AttributeError::OutOfRange {
            attribute,
            min: min as i64,
            max: max as i64,
            value: value as i64,
        });
    }
    Ok(())
}

fn check_bounds(attributes: &FieldAttributes) -> Result<(), AttributeError> {
    match attributes {
        FieldAttributes::Table(a) => {
            check_range("table rows", a.rows, TABLE_ROWS_MIN, TABLE_ROWS_MAX)?;
            check_range(
                "table columns",
                a.columns,
                TABLE_COLUMNS_MIN,
                TABLE_COLUMNS_MAX,
            )
        }
        FieldAttributes::TextArea(a) => {
            check_range("textarea rows", a.rows, TEXTAREA_ROWS_MIN, TEXTAREA_ROWS_MAX)
        }
        FieldAttributes::Spacer(a) => check_range(
            "spacer height",
            a.height_px,
            SPACER_HEIGHT_MIN,
            SPACER_HEIGHT_MAX,
        ),
        FieldAttributes::Image(a) => {
            check_range("image width", a.width_pct, IMAGE_WIDTH_MIN, IMAGE_WIDTH_MAX)
        }
        FieldAttributes::Number(a) => match (a.min, a.max) {
            (Some(min), Some(max)) if min > max => {
                Err(AttributeError::InvertedBounds { min, max })
            }
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

impl FieldInstance {
    /// Apply a properties-editor result to this instance.
    ///
    /// The update must carry the same attribute variant as the instance;
    /// a field never changes type after construction.
    pub fn apply_properties(&mut self, update: PropertiesUpdate) -> Result<(), AttributeError> {
        let expected = self.field_type();
        let received = update.attributes.field_type();
        if expected != received {
            return Err(AttributeError::TypeMismatch { expected, received });
        }

        check_bounds(&update.attributes)?;

        let mut attributes = update.attributes;
        if let FieldAttributes::Table(table) = &mut attributes {
            table.normalize();
        }

        self.label = update.label;
        self.attributes = attributes;
        self.height = update.height;
        self.width = update.width;
        Ok(())
    }
}
