//! Renderer capability contracts.
//!
//! The core owns no rendering technology. An external rendering collaborator
//! implements [`FieldRenderer`] against whatever output it produces, and the
//! properties editor's result flows back through
//! [`FieldInstance::apply_properties`](crate::fields::FieldInstance::apply_properties).

use crate::fields::FieldInstance;

/// Presentation state for a live form input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputContext<'a> {
    /// Current submitted value, if the visitor entered one.
    pub value: Option<&'a str>,
    /// Set after a failed submission so the renderer can flag the field.
    pub invalid: bool,
    /// Set when rendering a completed submission for review.
    pub read_only: bool,
}

impl<'a> InputContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    pub fn invalid(mut self) -> Self {
        self.invalid = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// The three rendering roles every field type supports.
pub trait FieldRenderer {
    type Output;

    /// Design-time preview shown on the builder canvas.
    fn designer_preview(&self, field: &FieldInstance) -> Self::Output;

    /// Live data-entry input shown to a form visitor.
    fn form_input(&self, field: &FieldInstance, ctx: InputContext<'_>) -> Self::Output;

    /// Attribute-editing surface for the selected field.
    fn properties_editor(&self, field: &FieldInstance) -> Self::Output;
}
