//! Project custom-field and state-bundle models used for status transitions.

use serde::Deserialize;

/// A custom field attached to a project, as listed by
/// `admin/projects/{id}/customFields`.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectCustomField {
    pub id: String,
    pub field: Option<CustomFieldRef>,
    #[serde(rename = "$type")]
    pub field_type: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CustomFieldRef {
    pub name: Option<String>,
}

impl ProjectCustomField {
    /// True for the project's State field, the one whose bundle holds
    /// the workflow states.
    pub fn is_state_field(&self) -> bool {
        self.field
            .as_ref()
            .and_then(|field| field.name.as_deref())
            .map(|name| name == "State")
            .unwrap_or(false)
            && self.field_type.as_deref() == Some("StateProjectCustomField")
    }
}

/// One value of a project's state bundle.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StateValue {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
    pub ordinal: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::ProjectCustomField;

    #[test]
    fn state_field_requires_name_and_type() {
        let field: ProjectCustomField = serde_json::from_str(
            r#"{"id":"99-1","field":{"name":"State"},"$type":"StateProjectCustomField"}"#,
        )
        .expect("decode");
        assert!(field.is_state_field());

        let other: ProjectCustomField = serde_json::from_str(
            r#"{"id":"99-2","field":{"name":"Assignee"},"$type":"UserProjectCustomField"}"#,
        )
        .expect("decode");
        assert!(!other.is_state_field());
    }
}
