use crate::client::Transport;
use crate::error::{JiraError, Result};
use crate::models::{
    Issue, IssueResponse, IssueSummary, MyselfResponse, SearchResponse, User, Worklog,
    WorklogsResponse,
};

/// Statuses a user's issue search is limited to.
const OPEN_STATUSES: &str = r#""Open","In Progress","Under Review""#;

/// Identifies the issue whose worklogs are requested. The key wins when
/// both are given.
#[derive(Debug, Clone, Default)]
pub struct IssueSelector {
    pub key: Option<String>,
    pub id: Option<String>,
}

impl IssueSelector {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            id: None,
        }
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self {
            key: None,
            id: Some(id.into()),
        }
    }

    fn ident(&self) -> Result<&str> {
        self.key
            .as_deref()
            .or(self.id.as_deref())
            .ok_or(JiraError::MissingSelector)
    }
}

/// Normalizing facade over the raw REST responses.
///
/// One fixed endpoint per operation; every lower-layer failure comes
/// back as a [`JiraError`] whose `Display` is the human message. An
/// empty search or worklog list is a failure here, never an empty
/// success, because callers branch on it.
pub struct JiraApi<T: Transport> {
    client: T,
}

impl<T: Transport> JiraApi<T> {
    pub fn new(client: T) -> Self {
        Self { client }
    }

    /// GET `/myself`, flattened to [`User`].
    pub fn get_user(&self) -> Result<User> {
        let body = self.client.get("/myself")?;
        let user: MyselfResponse = serde_json::from_value(body)?;
        Ok(user.into())
    }

    /// GET `/issue/{key}`, flattened to [`Issue`].
    pub fn get_issue(&self, key: &str) -> Result<Issue> {
        let body = self.client.get(&format!("/issue/{}", key))?;
        let issue: IssueResponse = serde_json::from_value(body)?;
        Ok(issue.into())
    }

    /// Search the current user's open issues, optionally scoped to one
    /// project. Response order is preserved.
    pub fn get_issues(&self, project: Option<&str>) -> Result<Vec<IssueSummary>> {
        let mut jql = String::new();
        if let Some(project) = project {
            jql.push_str("project=");
            jql.push_str(project);
            jql.push_str(" AND ");
        }
        jql.push_str("assignee=currentUser() AND status in (");
        jql.push_str(OPEN_STATUSES);
        jql.push_str(") order by key ASC");

        let path = format!("/search?jql={}", urlencoding::encode(&jql));
        let body = self.client.get(&path)?;
        let search: SearchResponse = serde_json::from_value(body)?;

        if search.total == 0 {
            return Err(JiraError::NoIssues);
        }

        Ok(search.issues.into_iter().map(IssueSummary::from).collect())
    }

    /// GET `/issue/{id}/worklog` for the selected issue.
    pub fn get_issue_worklogs(&self, selector: &IssueSelector) -> Result<Vec<Worklog>> {
        let path = format!("/issue/{}/worklog", selector.ident()?);
        let body = self.client.get(&path)?;
        let response: WorklogsResponse = serde_json::from_value(body)?;

        if response.total == 0 {
            return Err(JiraError::NoWorklogs);
        }

        Ok(response.worklogs.into_iter().map(Worklog::from).collect())
    }
}
