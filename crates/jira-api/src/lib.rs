//! Thin client library for the Jira REST API.
//!
//! Three layers, composed linearly: [`JiraClient`] performs a single
//! authenticated GET and hands back raw JSON, [`JiraApi`] reshapes the
//! nested responses into flat view models, and the CLI crate renders
//! them. Nothing here retries, caches or paginates.

pub mod api;
pub mod client;
pub mod config;
mod convert;
pub mod error;
pub mod models;


pub use api::{IssueSelector, JiraApi};
pub use client::{JiraClient, Transport};
pub use config::{Config, PartialConfig};
pub use error::{JiraError, Result};
pub use models::{Issue, IssueSummary, User, Worklog};
