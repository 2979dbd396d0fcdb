use crate::config::YouTrackConfig;
use crate::error::{Result, TrackerError};
use crate::models::{IssueProjection, ProjectCustomField, StateValue, WorkItem, WorkItemDraft};
use crate::rate_limiter::RateLimiter;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Async client for the subset of the YouTrack REST API the bridge
/// consumes: issue projections, time-tracking work items, comments,
/// commands and custom-field updates.
#[derive(Clone)]
pub struct YouTrackClient {
    http: HttpClient,
    config: YouTrackConfig,
    limiter: RateLimiter,
}

impl YouTrackClient {
    pub fn new(config: YouTrackConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        let limiter = RateLimiter::new(config.cooldown);
        Ok(Self {
            http,
            config,
            limiter,
        })
    }

    pub async fn get_with_query<T>(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.limiter.hit().await;
        debug!(path, "tracker GET");
        let mut request = self.http.get(self.url_for(path));
        if let Some(params) = query {
            request = request.query(params);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    pub async fn send_expect_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.limiter.hit().await;
        debug!(%method, path, "tracker request");
        let url = self.url_for(path);
        let mut request = self.http.request(method, url);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::ensure_success(response).await
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        let trimmed = path.trim_start_matches('/');
        base.push_str(trimmed);
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(TrackerError::from)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            Err(TrackerError::Authentication(format!(
                "Access denied ({}) - {}",
                status, body
            )))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(build_http_error(status, &body))
        }
    }

    async fn ensure_success(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            Err(TrackerError::Authentication(format!(
                "Access denied ({}) - {}",
                status, body
            )))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(build_http_error(status, &body))
        }
    }

    /// Fetches the projection needed to resolve an issue's project.
    pub async fn get_issue(&self, issue_id: &str) -> Result<IssueProjection> {
        let path = format!("issues/{}", issue_id);
        self.get_with_query(&path, Some(&[("fields", ISSUE_FIELDS)])).await
    }

    /// Lists every logged work item on the issue in tracker order.
    pub async fn work_items(&self, issue_id: &str) -> Result<Vec<WorkItem>> {
        let path = format!("issues/{}/timeTracking/workItems", issue_id);
        self.get_with_query(&path, Some(&[("fields", WORK_ITEM_FIELDS)])).await
    }

    /// Creates a new dated work item on the issue.
    pub async fn create_work_item(&self, issue_id: &str, draft: &WorkItemDraft) -> Result<()> {
        let path = format!("issues/{}/timeTracking/workItems", issue_id);
        self.send_expect_empty(Method::POST, &path, Some(draft)).await
    }

    /// Deletes a single work item by its tracker id.
    pub async fn delete_work_item(&self, issue_id: &str, work_item_id: &str) -> Result<()> {
        let path = format!("issues/{}/timeTracking/workItems/{}", issue_id, work_item_id);
        self.send_expect_empty(Method::DELETE, &path, None::<&Value>).await
    }

    /// Appends a comment to the issue.
    pub async fn add_comment(&self, issue_id: &str, text: &str) -> Result<()> {
        let path = format!("issues/{}/comments", issue_id);
        let payload = CommentCreateRequest { text };
        self.send_expect_empty(Method::POST, &path, Some(&payload)).await
    }

    /// Runs a command query (e.g. `Assignee alice`) against one issue.
    pub async fn run_command(&self, issue_id: &str, query: &str) -> Result<()> {
        let payload = CommandRequest {
            query,
            issues: vec![CommandIssueRef {
                id_readable: issue_id,
            }],
        };
        self.send_expect_empty(Method::POST, "commands", Some(&payload)).await
    }

    /// Applies custom-field updates directly to the issue.
    pub async fn set_custom_fields(&self, issue_id: &str, updates: &[CustomFieldUpdate]) -> Result<()> {
        let path = format!("issues/{}", issue_id);
        let payload = CustomFieldsRequest {
            custom_fields: updates,
        };
        self.send_expect_empty(Method::POST, &path, Some(&payload)).await
    }

    /// Lists the project's custom fields (used to locate the State field).
    pub async fn project_custom_fields(&self, project_id: &str) -> Result<Vec<ProjectCustomField>> {
        let path = format!("admin/projects/{}/customFields", project_id);
        self.get_with_query(&path, Some(&[("fields", PROJECT_FIELD_FIELDS)])).await
    }

    /// Lists the values of a project State field's bundle.
    pub async fn state_bundle_values(&self, project_id: &str, field_id: &str) -> Result<Vec<StateValue>> {
        let path = format!("admin/projects/{}/customFields/{}/bundle/values", project_id, field_id);
        self.get_with_query(&path, Some(&[("fields", STATE_VALUE_FIELDS)])).await
    }
}

fn build_http_client(config: &YouTrackConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    let auth_value = header_value(format!("Bearer {}", config.token))?;
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| TrackerError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| TrackerError::Other(err.to_string()))
}

fn build_http_error(status: StatusCode, body: &str) -> TrackerError {
    let code = extract_error_code(body);
    TrackerError::http(status, code, body.to_string())
}

fn extract_error_code(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("error")
            .and_then(|c| c.as_str())
            .map(|s| s.to_string())
    })
}

const ISSUE_FIELDS: &str = "idReadable,summary,project(id)";
const WORK_ITEM_FIELDS: &str = "id,author(login,name),duration(minutes),type(id,name),date,text";
const PROJECT_FIELD_FIELDS: &str = "id,field(name),$type";
const STATE_VALUE_FIELDS: &str = "id,name,isResolved,ordinal";

#[derive(Debug, Serialize)]
struct CommentCreateRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct CommandRequest<'a> {
    query: &'a str,
    issues: Vec<CommandIssueRef<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommandIssueRef<'a> {
    id_readable: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomFieldsRequest<'a> {
    custom_fields: &'a [CustomFieldUpdate],
}

/// One entry of an `issues/{id}` customFields update payload.
#[derive(Debug, Serialize, Clone)]
pub struct CustomFieldUpdate {
    pub name: String,
    #[serde(rename = "$type")]
    pub field_type: String,
    pub value: Value,
}

impl CustomFieldUpdate {
    /// Assignee update used as fallback when the Commands API rejects.
    pub fn assignee(login: &str) -> Self {
        Self {
            name: "Assignee".to_string(),
            field_type: "SingleUserIssueCustomField".to_string(),
            value: serde_json::json!({ "login": login }),
        }
    }

    /// State update targeting a state bundle value id.
    pub fn state(state_id: &str) -> Self {
        Self {
            name: "State".to_string(),
            field_type: "StateIssueCustomField".to_string(),
            value: serde_json::json!({ "id": state_id }),
        }
    }
}
