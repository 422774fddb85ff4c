//! Form engine.
//!
//! Orchestrates the form lifecycle over an abstract store: create and edit
//! drafts, publish, serve the public submission path, and track submission
//! progress per visitor tag.
//!
//! Every operation is a single await chain with no internal locking;
//! conflicting writers to the same record must serialize externally.
//! Concurrent save-progress calls under one tag are last-write-wins.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use formforge::{validate_all, FieldId, FieldRegistry, FormDocument, FormStats};

use crate::error::LifecycleError;
use crate::state::{FormId, FormRecord, OwnerId, ProgressTag, ShareId, SubmissionRecord};
use crate::store::FormStore;

/// Engine policy knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Allow a further submit under an already-completed progress tag,
    /// overwriting the stored values. Off by default; completed
    /// submissions are terminal.
    pub allow_resubmission: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_resubmission: false,
        }
    }
}

/// A published form as served to visitors.
#[derive(Debug, Clone)]
pub struct SharedForm {
    pub form_id: FormId,
    pub name: String,
    pub description: String,
    pub document: FormDocument,
}

/// The form lifecycle engine.
pub struct FormEngine {
    store: Arc<dyn FormStore>,
    registry: FieldRegistry,
    config: EngineConfig,
}

impl FormEngine {
    pub fn new(store: Arc<dyn FormStore>, registry: FieldRegistry) -> Self {
        Self::with_config(store, registry, EngineConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn FormStore>,
        registry: FieldRegistry,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Create a new draft with an empty document.
    pub async fn create_form(
        &self,
        owner: OwnerId,
        name: &str,
        description: &str,
    ) -> Result<FormRecord, LifecycleError> {
        let record = FormRecord::new(owner, name, description);
        self.store.create_form(record.clone()).await?;
        info!(form_id = %record.form_id, "form created");
        Ok(record)
    }

    /// Load a form, folding an owner mismatch into `NotFound`.
    pub async fn get_form(
        &self,
        owner: OwnerId,
        form_id: FormId,
    ) -> Result<FormRecord, LifecycleError> {
        let record = self.store.get_form(form_id).await?;
        if record.owner != owner {
            warn!(%form_id, "form requested by non-owner");
            return Err(LifecycleError::NotFound);
        }
        Ok(record)
    }

    /// Builder-path save. Drafts only; published content is frozen against
    /// structural edits on this path.
    pub async fn save_draft(
        &self,
        owner: OwnerId,
        form_id: FormId,
        document: &FormDocument,
    ) -> Result<FormRecord, LifecycleError> {
        let record = self.get_form(owner, form_id).await?;
        if record.is_published() {
            return Err(LifecycleError::AlreadyPublished { form_id });
        }
        let content = document.serialize()?;
        let updated = self.store.update_form_content(form_id, content).await?;
        debug!(%form_id, fields = document.len(), "draft content saved");
        Ok(updated)
    }

    /// Explicit content update, distinct from publishing. Available in any
    /// state, including after publish.
    pub async fn update_content(
        &self,
        owner: OwnerId,
        form_id: FormId,
        document: &FormDocument,
    ) -> Result<FormRecord, LifecycleError> {
        self.get_form(owner, form_id).await?;
        let content = document.serialize()?;
        let updated = self.store.update_form_content(form_id, content).await?;
        info!(%form_id, fields = document.len(), "form content updated");
        Ok(updated)
    }

    /// Publish a draft, assigning its share id exactly once. Irreversible;
    /// calling again returns the record unchanged.
    pub async fn publish(
        &self,
        owner: OwnerId,
        form_id: FormId,
    ) -> Result<FormRecord, LifecycleError> {
        let record = self.get_form(owner, form_id).await?;
        if record.is_published() {
            debug!(%form_id, "publish called on already-published form");
            return Ok(record);
        }

        let share_id = ShareId::new();
        let published = self.store.publish_form(form_id, share_id).await?;
        info!(%form_id, %share_id, "form published");
        Ok(published)
    }

    /// Public submission entry point. Loads the frozen document and counts
    /// the visit. At-most-once-per-session visit counting is the calling
    /// session layer's contract; every call here increments.
    pub async fn open_shared_form(
        &self,
        share_id: ShareId,
    ) -> Result<SharedForm, LifecycleError> {
        let record = self.store.get_form_by_share_id(share_id).await?;
        if !record.is_published() {
            return Err(LifecycleError::NotFound);
        }

        let document = self.load_document(&record)?;
        let visits = self.store.increment_visits(record.form_id).await?;
        debug!(form_id = %record.form_id, visits, "shared form opened");

        Ok(SharedForm {
            form_id: record.form_id,
            name: record.name,
            description: record.description,
            document,
        })
    }

    /// Save partial values for a visitor tag. Repeated saves overwrite the
    /// previous partial values for the same tag.
    pub async fn save_progress(
        &self,
        share_id: ShareId,
        tag: ProgressTag,
        values: HashMap<FieldId, String>,
    ) -> Result<SubmissionRecord, LifecycleError> {
        let form = self.store.get_form_by_share_id(share_id).await?;

        let record = match self
            .store
            .find_submission_by_tag(form.form_id, &tag)
            .await?
        {
            Some(mut existing) => {
                if existing.is_completed() && !self.config.allow_resubmission {
                    return Err(LifecycleError::AlreadySubmitted);
                }
                existing.record_progress(values.into_iter().collect());
                existing
            }
            None => SubmissionRecord::new_in_progress(
                form.form_id,
                tag.clone(),
                values.into_iter().collect(),
                form.content.clone(),
            ),
        };

        self.store.upsert_submission(record.clone()).await?;
        debug!(form_id = %form.form_id, %tag, "submission progress saved");
        Ok(record)
    }

    /// Final submit. Validates against the frozen document; on success the
    /// submission is completed, snapshotted, and counted.
    pub async fn submit(
        &self,
        share_id: ShareId,
        tag: Option<ProgressTag>,
        values: HashMap<FieldId, String>,
    ) -> Result<SubmissionRecord, LifecycleError> {
        let form = self.store.get_form_by_share_id(share_id).await?;
        let document = self.load_document(&form)?;

        let existing = match &tag {
            Some(tag) => {
                let existing = self.store.find_submission_by_tag(form.form_id, tag).await?;
                if let Some(record) = &existing {
                    if record.is_completed() && !self.config.allow_resubmission {
                        return Err(LifecycleError::AlreadySubmitted);
                    }
                }
                existing
            }
            None => None,
        };

        validate_all(&document, &values).into_result()?;

        let values = values.into_iter().collect();
        let record = match existing {
            Some(mut record) => {
                record.complete(values, form.content.clone());
                record
            }
            None => SubmissionRecord::new_completed(
                form.form_id,
                tag,
                values,
                form.content.clone(),
            ),
        };

        self.store.upsert_submission(record.clone()).await?;
        let submissions = self.store.increment_submissions(form.form_id).await?;
        info!(form_id = %form.form_id, submissions, "submission completed");
        Ok(record)
    }

    /// All submissions for one of the owner's forms, oldest first.
    pub async fn list_submissions(
        &self,
        owner: OwnerId,
        form_id: FormId,
    ) -> Result<Vec<SubmissionRecord>, LifecycleError> {
        self.get_form(owner, form_id).await?;
        Ok(self.store.list_submissions(form_id).await?)
    }

    /// Derived statistics for one of the owner's forms.
    pub async fn stats(
        &self,
        owner: OwnerId,
        form_id: FormId,
    ) -> Result<FormStats, LifecycleError> {
        Ok(self.get_form(owner, form_id).await?.stats())
    }

    /// Deserialize a record's content and confirm every tag resolves in
    /// the registry.
    fn load_document(&self, record: &FormRecord) -> Result<FormDocument, LifecycleError> {
        let document = FormDocument::deserialize(&record.content)?;
        for field in document.iter() {
            self.registry.resolve(field.field_type())?;
        }
        Ok(document)
    }
}
