//! Form lifecycle and submission workflow.
//!
//! Layers the draft/publish state machine, per-visitor submission
//! tracking, and the storage boundary on top of the `formforge` core.
//! Persistence is abstract: implement [`FormStore`] for a real backend, or
//! use [`MemoryFormStore`] for tests and local development.

pub mod engine;
pub mod error;
pub mod memory;
pub mod state;
pub mod store;

pub use engine::{EngineConfig, FormEngine, SharedForm};
pub use error::LifecycleError;
pub use memory::MemoryFormStore;
pub use state::{
    FormId, FormRecord, OwnerId, ProgressTag, ShareId, SubmissionId, SubmissionProgress,
    SubmissionRecord,
};
pub use store::{FormStore, StoreError};
