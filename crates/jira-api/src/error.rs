use thiserror::Error;

/// Errors surfaced by the client and API layers.
///
/// Only the `Display` text crosses the layer boundary; the presenter
/// logs `err.to_string()` and never inspects the original failure.
#[derive(Error, Debug)]
pub enum JiraError {
    #[error("Missing required config field: {0}")]
    MissingConfig(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("There are no issues for current user")]
    NoIssues,

    #[error("There are no worklogs for this issue")]
    NoWorklogs,

    #[error("An issue key or id is required")]
    MissingSelector,
}

pub type Result<T> = std::result::Result<T, JiraError>;
