//! In-memory store implementation.
//!
//! Reference backend for tests and local development. All mutations happen
//! under one write lock, which makes the counter increments atomic at the
//! storage boundary.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::state::{FormId, FormRecord, ProgressTag, ShareId, SubmissionId, SubmissionRecord};
use crate::store::{FormStore, StoreError};

#[derive(Default)]
struct MemoryInner {
    forms: HashMap<FormId, FormRecord>,
    share_index: HashMap<ShareId, FormId>,
    submissions: HashMap<SubmissionId, SubmissionRecord>,
    tag_index: HashMap<(FormId, ProgressTag), SubmissionId>,
    insertion_order: Vec<SubmissionId>,
}

/// Map-backed [`FormStore`].
#[derive(Default)]
pub struct MemoryFormStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn create_form(&self, record: FormRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.forms.contains_key(&record.form_id) {
            return Err(StoreError::Storage(format!(
                "form {} already exists",
                record.form_id
            )));
        }
        inner.forms.insert(record.form_id, record);
        Ok(())
    }

    async fn get_form(&self, form_id: FormId) -> Result<FormRecord, StoreError> {
        let inner = self.inner.read().await;
        inner.forms.get(&form_id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_form_by_share_id(&self, share_id: ShareId) -> Result<FormRecord, StoreError> {
        let inner = self.inner.read().await;
        let form_id = inner.share_index.get(&share_id).ok_or(StoreError::NotFound)?;
        inner.forms.get(form_id).cloned().ok_or(StoreError::NotFound)
    }

    async fn update_form_content(
        &self,
        form_id: FormId,
        content: String,
    ) -> Result<FormRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner.forms.get_mut(&form_id).ok_or(StoreError::NotFound)?;
        record.set_content(content);
        Ok(record.clone())
    }

    async fn publish_form(
        &self,
        form_id: FormId,
        share_id: ShareId,
    ) -> Result<FormRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner.forms.get_mut(&form_id).ok_or(StoreError::NotFound)?;
        record.publish(share_id);
        let record = record.clone();
        if let Some(effective) = record.share_id {
            inner.share_index.insert(effective, form_id);
        }
        Ok(record)
    }

    async fn increment_visits(&self, form_id: FormId) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner.forms.get_mut(&form_id).ok_or(StoreError::NotFound)?;
        record.visits += 1;
        Ok(record.visits)
    }

    async fn increment_submissions(&self, form_id: FormId) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner.forms.get_mut(&form_id).ok_or(StoreError::NotFound)?;
        record.submissions += 1;
        Ok(record.submissions)
    }

    async fn upsert_submission(&self, record: SubmissionRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(tag) = &record.progress_tag {
            inner
                .tag_index
                .insert((record.form_id, tag.clone()), record.submission_id);
        }
        if !inner.submissions.contains_key(&record.submission_id) {
            inner.insertion_order.push(record.submission_id);
        }
        inner.submissions.insert(record.submission_id, record);
        Ok(())
    }

    async fn find_submission_by_tag(
        &self,
        form_id: FormId,
        tag: &ProgressTag,
    ) -> Result<Option<SubmissionRecord>, StoreError> {
        let inner = self.inner.read().await;
        let id = inner.tag_index.get(&(form_id, tag.clone()));
        Ok(id.and_then(|id| inner.submissions.get(id)).cloned())
    }

    async fn list_submissions(&self, form_id: FormId) -> Result<Vec<SubmissionRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .insertion_order
            .iter()
            .filter_map(|id| inner.submissions.get(id))
            .filter(|record| record.form_id == form_id)
            .cloned()
            .collect())
    }
}
