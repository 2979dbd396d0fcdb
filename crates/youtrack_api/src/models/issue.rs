use serde::Deserialize;

/// Narrow issue projection used to resolve the owning project.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IssueProjection {
    pub id_readable: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProjectRef {
    pub id: String,
}

impl IssueProjection {
    pub fn project_id(&self) -> Option<&str> {
        self.project.as_ref().map(|project| project.id.as_str())
    }
}
