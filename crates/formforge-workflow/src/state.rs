//! Lifecycle state types.
//!
//! Records are plain mutators; the state machine rules (publish once,
//! completed submissions are terminal) are enforced by the engine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use formforge::{FieldId, FormStats};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a form record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owning user or project reference. Opaque to the core; ownership checks
/// compare it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(Uuid);

impl OwnerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public token used to reach a published form's submission entry point.
/// Generated exactly once at publish time and stable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareId(Uuid);

impl ShareId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ShareId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ShareId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a submission record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque visitor/session identifier associating partial submissions with
/// a resumable attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgressTag(String);

impl ProgressTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProgressTag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProgressTag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProgressTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One form as persisted: metadata, serialized document content, publish
/// state, and the visit/submission counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRecord {
    pub form_id: FormId,
    pub owner: OwnerId,
    pub name: String,
    pub description: String,
    /// Serialized form document (ordered JSON array of field instances).
    pub content: String,
    pub published: bool,
    /// Set once at publish time, stable thereafter.
    pub share_id: Option<ShareId>,
    pub visits: u64,
    pub submissions: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FormRecord {
    /// Create a draft with an empty document.
    pub fn new(owner: OwnerId, name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            form_id: FormId::new(),
            owner,
            name: name.into(),
            description: description.into(),
            content: "[]".to_string(),
            published: false,
            share_id: None,
            visits: 0,
            submissions: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Replace the serialized document content.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Mark published under `share_id`. A second call keeps the original
    /// share id; there is no unpublish.
    pub fn publish(&mut self, share_id: ShareId) {
        if self.published {
            return;
        }
        self.published = true;
        self.share_id = Some(share_id);
        self.updated_at = Utc::now();
    }

    pub fn stats(&self) -> FormStats {
        FormStats::from_counts(self.visits, self.submissions)
    }
}

/// Submission progress sub-state for one visitor tag.
///
/// `NotStarted` is represented by the absence of a record; a stored record
/// is either in progress or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionProgress {
    InProgress,
    Completed,
}

/// One submission attempt: the collected values keyed by field id plus a
/// snapshot of the document they were entered against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    pub form_id: FormId,
    /// Field id to string-encoded value, in field id order.
    pub values: BTreeMap<FieldId, String>,
    /// Serialized document at save/submit time, so review views render the
    /// form as the visitor saw it.
    pub form_snapshot: String,
    pub progress_tag: Option<ProgressTag>,
    pub progress: SubmissionProgress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// First save-progress for a visitor tag.
    pub fn new_in_progress(
        form_id: FormId,
        tag: ProgressTag,
        values: BTreeMap<FieldId, String>,
        form_snapshot: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            submission_id: SubmissionId::new(),
            form_id,
            values,
            form_snapshot,
            progress_tag: Some(tag),
            progress: SubmissionProgress::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    /// Direct final submit, with or without a progress tag.
    pub fn new_completed(
        form_id: FormId,
        tag: Option<ProgressTag>,
        values: BTreeMap<FieldId, String>,
        form_snapshot: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            submission_id: SubmissionId::new(),
            form_id,
            values,
            form_snapshot,
            progress_tag: tag,
            progress: SubmissionProgress::Completed,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.progress == SubmissionProgress::Completed
    }

    /// Overwrite partial values. Repeated saves under one tag are
    /// last-write-wins.
    pub fn record_progress(&mut self, values: BTreeMap<FieldId, String>) {
        self.values = values;
        self.progress = SubmissionProgress::InProgress;
        self.updated_at = Utc::now();
    }

    /// Finalize with the submitted values and the document they were
    /// validated against.
    pub fn complete(&mut self, values: BTreeMap<FieldId, String>, form_snapshot: String) {
        self.values = values;
        self.form_snapshot = form_snapshot;
        self.progress = SubmissionProgress::Completed;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_an_empty_draft() {
        let record = FormRecord::new(OwnerId::new(), "Survey", "Quarterly survey");
        assert!(!record.is_published());
        assert!(record.share_id.is_none());
        assert_eq!(record.content, "[]");
        assert_eq!(record.visits, 0);
        assert_eq!(record.submissions, 0);
    }

    #[test]
    fn test_publish_assigns_share_id_once() {
        let mut record = FormRecord::new(OwnerId::new(), "Survey", "");
        let first = ShareId::new();
        record.publish(first);
        assert!(record.is_published());
        assert_eq!(record.share_id, Some(first));

        record.publish(ShareId::new());
        assert_eq!(record.share_id, Some(first));
    }

    #[test]
    fn test_progress_overwrites_values() {
        let form_id = FormId::new();
        let mut record = SubmissionRecord::new_in_progress(
            form_id,
            ProgressTag::from("visitor-1"),
            BTreeMap::from([(FieldId::from("f1"), "a".to_string())]),
            "[]".to_string(),
        );
        assert!(!record.is_completed());

        record.record_progress(BTreeMap::from([(FieldId::from("f1"), "b".to_string())]));
        assert_eq!(record.values[&FieldId::from("f1")], "b");
    }

    #[test]
    fn test_complete_marks_terminal() {
        let mut record = SubmissionRecord::new_in_progress(
            FormId::new(),
            ProgressTag::from("visitor-1"),
            BTreeMap::new(),
            "[]".to_string(),
        );
        record.complete(BTreeMap::new(), "[]".to_string());
        assert!(record.is_completed());
    }

    #[test]
    fn test_share_id_round_trips_as_string() {
        let share = ShareId::new();
        let parsed: ShareId = share.to_string().parse().unwrap();
        assert_eq!(parsed, share);
    }
}
