//! Conversions from raw response shapes to the flat view models.

use crate::models::*;

impl From<MyselfResponse> for User {
    fn from(r: MyselfResponse) -> Self {
        Self {
            key: r.key,
            name: r.display_name,
            email: r.email_address,
        }
    }
}

impl From<IssueResponse> for Issue {
    fn from(r: IssueResponse) -> Self {
        Self {
            key: r.key,
            issue_type: r.fields.issuetype.name,
            summary: r.fields.summary,
            status: r.fields.status.name,
            project_name: r.fields.project.name,
            project_key: r.fields.project.key,
        }
    }
}

impl From<IssueResponse> for IssueSummary {
    fn from(r: IssueResponse) -> Self {
        Self {
            key: r.key,
            status: r.fields.status.name,
            summary: r.fields.summary,
            project_key: r.fields.project.key,
        }
    }
}

impl From<WorklogEntry> for Worklog {
    fn from(r: WorklogEntry) -> Self {
        Self {
            id: r.id,
            time_spent: r.time_spent,
            comment: r.comment,
            author: r.author.display_name,
            created: r.created,
        }
    }
}
