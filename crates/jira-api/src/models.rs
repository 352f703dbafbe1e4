//! Flat view models handed to the presentation layer, plus the raw
//! response shapes they are derived from. Everything here is transient:
//! built from one response, rendered once, discarded.

use serde::{Deserialize, Serialize};

// ==================== View models ====================

/// Current user, flattened from `/myself`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub key: String,
    pub name: String,
    pub email: String,
}

/// Issue detail, flattened from the nested `fields` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub key: String,
    pub issue_type: String,
    pub summary: String,
    pub status: String,
    pub project_name: String,
    pub project_key: String,
}

/// One row of a JQL search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    pub key: String,
    pub status: String,
    pub summary: String,
    pub project_key: String,
}

/// A logged unit of time spent on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worklog {
    pub id: String,
    pub time_spent: String,
    pub comment: String,
    /// Flattened from `author.displayName`.
    pub author: String,
    pub created: String,
}

// ==================== Raw responses ====================
// These never leave the facade.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MyselfResponse {
    pub key: String,
    pub display_name: String,
    pub email_address: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueResponse {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueFields {
    pub issuetype: Named,
    pub summary: String,
    pub status: Named,
    pub project: ProjectRef,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Named {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectRef {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub total: usize,
    #[serde(default)]
    pub issues: Vec<IssueResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WorklogsResponse {
    pub total: usize,
    #[serde(default)]
    pub worklogs: Vec<WorklogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WorklogEntry {
    pub id: String,
    pub time_spent: String,
    #[serde(default)]
    pub comment: String,
    pub author: Author,
    pub created: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Author {
    pub display_name: String,
}
