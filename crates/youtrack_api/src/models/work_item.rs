//! Time-tracking work item models.

use serde::{Deserialize, Serialize};

use crate::models::UserRef;

/// A single logged unit of time against an issue, as returned by
/// `issues/{id}/timeTracking/workItems`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    pub author: Option<UserRef>,
    pub duration: Option<WorkDuration>,
    #[serde(rename = "type")]
    pub work_type: Option<WorkTypeRef>,
    pub date: Option<i64>,
    pub text: Option<String>,
}

impl WorkItem {
    /// Returns the author login when the projection carried one.
    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref().and_then(|author| author.login.as_deref())
    }

    /// Returns the logged duration in minutes, zero when absent.
    pub fn minutes(&self) -> u32 {
        self.duration.as_ref().map(|d| d.minutes).unwrap_or(0)
    }

    /// Returns the work-type display name when present.
    pub fn type_name(&self) -> Option<&str> {
        self.work_type.as_ref().and_then(|t| t.name.as_deref())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkDuration {
    pub minutes: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorkTypeRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Payload for creating a new work item.
#[derive(Debug, Serialize, Clone)]
pub struct WorkItemDraft {
    pub date: i64,
    pub duration: WorkDuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub author: WorkItemAuthor,
    #[serde(rename = "type")]
    pub work_type: WorkTypeId,
}

#[derive(Debug, Serialize, Clone)]
pub struct WorkItemAuthor {
    pub login: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct WorkTypeId {
    pub id: String,
}

impl WorkItemDraft {
    pub fn new(date: i64, minutes: u32, author_login: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            date,
            duration: WorkDuration { minutes },
            text: None,
            author: WorkItemAuthor {
                login: author_login.into(),
            },
            work_type: WorkTypeId { id: type_id.into() },
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_item_accessors_tolerate_missing_projections() {
        let item: WorkItem = serde_json::from_str(r#"{"id":"142-7"}"#).expect("decode");
        assert_eq!(item.author_login(), None);
        assert_eq!(item.minutes(), 0);
        assert_eq!(item.type_name(), None);
    }

    #[test]
    fn work_item_decodes_full_projection() {
        let payload = r#"{
            "id": "142-8",
            "author": {"login": "alice", "name": "Alice"},
            "duration": {"minutes": 180},
            "type": {"id": "86-2", "name": "Development"},
            "date": 1735689600000
        }"#;
        let item: WorkItem = serde_json::from_str(payload).expect("decode");
        assert_eq!(item.author_login(), Some("alice"));
        assert_eq!(item.minutes(), 180);
        assert_eq!(item.type_name(), Some("Development"));
    }

    #[test]
    fn draft_serializes_type_under_reserved_key() {
        let draft = WorkItemDraft::new(1_735_689_600_000, 45, "bob", "86-4").with_text("approved via chat");
        let value = serde_json::to_value(&draft).expect("encode");
        assert_eq!(value["type"]["id"], "86-4");
        assert_eq!(value["duration"]["minutes"], 45);
        assert_eq!(value["author"]["login"], "bob");
        assert_eq!(value["text"], "approved via chat");
    }
}
