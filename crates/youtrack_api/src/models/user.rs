//! User reference models embedded in other entities.

use serde::Deserialize;

/// Minimal user projection carried by work items and comments.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub login: Option<String>,
    pub name: Option<String>,
}
