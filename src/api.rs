//! Blocking HTTP client for the Pokébase backend
//!
//! The backend is an opaque collaborator: a handful of GET/POST paths under a
//! configurable base URL. Failures collapse into two cases - a non-success
//! status or a transport error - and are surfaced to the console as one
//! generic message. No retries, no partial results.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend returned HTTP {0}")]
    Status(StatusCode),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /pokemon/{name}` - a single Pokémon's description, as text.
    pub fn pokemon(&self, name: &str) -> Result<String, ApiError> {
        self.get_text(&format!("{}/pokemon/{}", self.base_url, name))
    }

    /// `GET /pokemon/compare/{name1}/{name2}` - comparison text.
    pub fn compare(&self, first: &str, second: &str) -> Result<String, ApiError> {
        self.get_text(&format!(
            "{}/pokemon/compare/{}/{}",
            self.base_url, first, second
        ))
    }

    /// `POST /pokemon/strategy` - raw query string as a JSON body, JSON back.
    pub fn strategy(&self, query: &str) -> Result<Value, ApiError> {
        self.post_query(&format!("{}/pokemon/strategy", self.base_url), query)
    }

    /// `POST /pokemon/team-building` - same shape as `strategy`.
    pub fn team_building(&self, query: &str) -> Result<Value, ApiError> {
        self.post_query(&format!("{}/pokemon/team-building", self.base_url), query)
    }

    /// `GET /health` - backend reachability probe, used for a startup log line.
    pub fn health(&self) -> Result<(), ApiError> {
        let resp = self.http.get(format!("{}/health", self.base_url)).send()?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }

    fn get_text(&self, url: &str) -> Result<String, ApiError> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.text()?)
    }

    fn post_query(&self, url: &str, query: &str) -> Result<Value, ApiError> {
        log::debug!("POST {url}");
        // The body is the raw query text, JSON-encoded as a bare string
        let resp = self.http.post(url).json(&query).send()?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json()?)
    }
}

/// Render a JSON response the way the console shows it: bare strings as-is,
/// anything structured pretty-printed.
pub fn render_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
