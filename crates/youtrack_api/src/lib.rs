//! Typed YouTrack API client crate used by the approval bridge.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod rate_limiter;

pub use client::{CustomFieldUpdate, YouTrackClient};
pub use config::YouTrackConfig;
pub use error::{Result, TrackerError};
pub use models::{
    IssueProjection, ProjectCustomField, ProjectRef, StateValue, UserRef, WorkDuration, WorkItem,
    WorkItemAuthor, WorkItemDraft, WorkTypeId, WorkTypeRef,
};
