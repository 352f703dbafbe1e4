use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::config::Config;
use crate::error::{JiraError, Result};

/// Base path the versioned REST endpoints live under.
const DEFAULT_BASE_PATH: &str = "rest/api/";

/// Transport seam between the API facade and the HTTP layer.
///
/// The facade only ever issues authenticated GETs and works on raw
/// JSON; tests substitute a stub implementation.
pub trait Transport {
    fn get(&self, path: &str) -> Result<Value>;
}

/// HTTP client for a single Jira instance, using Basic Auth.
pub struct JiraClient {
    agent: Agent,
    config: Config,
    auth_header: String,
}

impl JiraClient {
    pub fn new(config: Config) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            // Non-2xx statuses are handled in check_response, not by the agent
            .http_status_as_error(false)
            .build()
            .into();

        let credentials = format!("{}:{}", config.username, config.password);
        let auth_header = format!("Basic {}", base64_encode(credentials.as_bytes()));

        Self {
            agent,
            config,
            auth_header,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compose `protocol://host[:port]/{base_path}{api_version}{path}`.
    ///
    /// The version defaults from the config, the base path to
    /// `rest/api/`; both may be overridden per call. An empty port is
    /// omitted.
    pub fn build_url(
        &self,
        path: &str,
        api_version: Option<&str>,
        base_path: Option<&str>,
    ) -> String {
        let version = api_version.unwrap_or(&self.config.api_version);
        let base_path = base_path.unwrap_or(DEFAULT_BASE_PATH);

        let mut url = format!("{}://{}", self.config.protocol, self.config.host);
        if !self.config.port.is_empty() {
            url.push(':');
            url.push_str(&self.config.port);
        }
        url.push('/');
        url.push_str(base_path);
        url.push_str(version);
        url.push_str(path);
        url
    }

    /// Fail on anything outside 2xx, pulling Jira's error payload into
    /// the message when the body carries one.
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        if status == 401 {
            Err(JiraError::Unauthorized)
        } else {
            Err(JiraError::Api {
                status,
                message: extract_error_message(&body, status),
            })
        }
    }
}

impl Transport for JiraClient {
    fn get(&self, path: &str) -> Result<Value> {
        let url = self.build_url(path, None, None);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()
            .map_err(JiraError::Http)?;

        let mut response = self.check_response(response)?;
        let body: Value = response.body_mut().read_json()?;
        Ok(body)
    }
}

/// Jira error bodies look like `{"errorMessages":[...], "errors":{...}}`.
fn extract_error_message(body: &str, status: u16) -> String {
    if body.is_empty() {
        return format!("HTTP {}", status);
    }

    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    let mut messages = Vec::new();

    if let Some(errors) = parsed.get("errorMessages").and_then(|e| e.as_array()) {
        for e in errors {
            if let Some(s) = e.as_str() {
                messages.push(s.to_string());
            }
        }
    }

    if let Some(errors) = parsed.get("errors").and_then(|e| e.as_object()) {
        for (field, msg) in errors {
            if let Some(s) = msg.as_str() {
                messages.push(format!("{}: {}", field, s));
            }
        }
    }

    if messages.is_empty() {
        body.to_string()
    } else {
        messages.join("; ")
    }
}

/// Minimal base64, enough for the Basic Auth header.
fn base64_encode(input: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let mut buf = [0u8; 3];
        buf[..chunk.len()].copy_from_slice(chunk);
        let n = u32::from(buf[0]) << 16 | u32::from(buf[1]) << 8 | u32::from(buf[2]);

        out.push(ALPHABET[(n >> 18 & 0x3f) as usize] as char);
        out.push(ALPHABET[(n >> 12 & 0x3f) as usize] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[(n >> 6 & 0x3f) as usize] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[(n & 0x3f) as usize] as char
        } else {
            '='
        });
    }

    out
}
