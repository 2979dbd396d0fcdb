mod issue;
mod state;
mod user;
mod work_item;

pub use issue::{IssueProjection, ProjectRef};
pub use state::{CustomFieldRef, ProjectCustomField, StateValue};
pub use user::UserRef;
pub use work_item::{WorkDuration, WorkItem, WorkItemAuthor, WorkItemDraft, WorkTypeId, WorkTypeRef};
