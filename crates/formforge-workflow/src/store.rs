//! Storage boundary.
//!
//! Abstract interface over the external persistence collaborator.
//! Implementations can target an in-memory map (tests, POC) or a real
//! backend. The core never retries a failed storage call; retry policy
//! belongs to the implementation.

use async_trait::async_trait;

use crate::state::{FormId, FormRecord, ProgressTag, ShareId, SubmissionRecord};

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record absent. The engine folds owner mismatches into this same
    /// category so callers cannot distinguish "missing" from "not yours".
    #[error("record not found")]
    NotFound,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any failure reported by the storage collaborator. Propagated as is.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Abstract form and submission persistence.
///
/// The visit and submission counters are incremented through dedicated
/// operations so implementations can make them atomic at the storage
/// boundary instead of read-modify-write in the caller.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Persist a freshly created draft. Fails if the id already exists.
    async fn create_form(&self, record: FormRecord) -> Result<(), StoreError>;

    async fn get_form(&self, form_id: FormId) -> Result<FormRecord, StoreError>;

    /// Public lookup path; only published forms are reachable here.
    async fn get_form_by_share_id(&self, share_id: ShareId) -> Result<FormRecord, StoreError>;

    /// Replace the serialized document content.
    async fn update_form_content(
        &self,
        form_id: FormId,
        content: String,
    ) -> Result<FormRecord, StoreError>;

    /// Mark the form published under `share_id`. Keeps the existing share
    /// id if the form is already published.
    async fn publish_form(
        &self,
        form_id: FormId,
        share_id: ShareId,
    ) -> Result<FormRecord, StoreError>;

    /// Atomically add one visit, returning the new count.
    async fn increment_visits(&self, form_id: FormId) -> Result<u64, StoreError>;

    /// Atomically add one submission, returning the new count.
    async fn increment_submissions(&self, form_id: FormId) -> Result<u64, StoreError>;

    /// Insert or replace a submission record keyed by its submission id.
    async fn upsert_submission(&self, record: SubmissionRecord) -> Result<(), StoreError>;

    /// Look up the submission associated with a visitor tag, if any.
    async fn find_submission_by_tag(
        &self,
        form_id: FormId,
        tag: &ProgressTag,
    ) -> Result<Option<SubmissionRecord>, StoreError>;

    /// All submissions for a form, oldest first.
    async fn list_submissions(&self, form_id: FormId) -> Result<Vec<SubmissionRecord>, StoreError>;
}
