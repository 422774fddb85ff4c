//! Lifecycle error types.

use formforge::{MalformedDocument, UnknownFieldType, ValidationFailed};
use thiserror::Error;

use crate::state::FormId;
use crate::store::StoreError;

/// Failures surfaced by the form engine.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Form or submission absent, or owned by someone else. Deliberately
    /// one category so callers cannot probe for existence.
    #[error("not found")]
    NotFound,

    /// Builder-path structural edit attempted after publish.
    #[error("form {form_id} is published and no longer editable through the builder")]
    AlreadyPublished { form_id: FormId },

    /// Terminal submission: the visitor tag already completed this form.
    #[error("a completed submission already exists for this progress tag")]
    AlreadySubmitted,

    #[error(transparent)]
    UnknownFieldType(#[from] UnknownFieldType),

    #[error(transparent)]
    Document(#[from] MalformedDocument),

    /// Recoverable: carries the failing field ids for re-prompting.
    #[error(transparent)]
    Validation(#[from] ValidationFailed),

    #[error("storage failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for LifecycleError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => LifecycleError::NotFound,
            other => LifecycleError::Store(other),
        }
    }
}
