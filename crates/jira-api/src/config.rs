use serde::{Deserialize, Serialize};

use crate::error::{JiraError, Result};

/// Validated connection settings for one Jira instance.
///
/// All six fields are required. A `Config` is only obtainable by
/// validating a [`PartialConfig`], so a constructed client never has to
/// re-check for missing values.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub protocol: String,
    pub host: String,
    /// May be empty, in which case built URLs omit the port.
    pub port: String,
    pub api_version: String,
}

/// Unvalidated settings as they arrive from config files, environment
/// variables and CLI flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PartialConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub api_version: Option<String>,
}

impl TryFrom<PartialConfig> for Config {
    type Error = JiraError;

    fn try_from(partial: PartialConfig) -> Result<Self> {
        Ok(Self {
            username: require(partial.username, "username")?,
            password: require(partial.password, "password")?,
            protocol: require(partial.protocol, "protocol")?,
            host: require(partial.host, "host")?,
            port: require(partial.port, "port")?,
            api_version: require(partial.api_version, "api_version")?,
        })
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String> {
    value.ok_or(JiraError::MissingConfig(field))
}
