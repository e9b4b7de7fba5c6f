//! Registry manager API abstraction.
//!
//! This module defines the interface the console uses to talk to a registry
//! manager instance, the wire types it exchanges, and its error type.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod http;

pub use http::HttpRegistryClient;

/// Common error type for API operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    Url(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Registry error body: `{"errors":[{"code": "...", "message": "..."}]}`
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    errors: Vec<RegistryErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RegistryErrorBody {
    #[allow(dead_code)]
    code: Option<String>,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text worth showing to the user, extracted from an error response body.
    ///
    /// Registry-style error documents yield their first message; any other
    /// non-empty body is returned trimmed.
    pub fn server_message(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            return parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .find(|m| !m.trim().is_empty());
        }
        Some(body.to_string())
    }
}

/// Summary counters from `/api/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistryStats {
    #[serde(default)]
    pub repository_count: u64,
    #[serde(default)]
    pub total_tags: u64,
    /// Preformatted by the server, e.g. "12.50 MB"
    #[serde(default)]
    pub total_size: String,
}

/// Entry of `/api/repositories`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub tag_count: u64,
}

/// Body of `/v2/<name>/tags/list`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagList {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Credentials for a single login attempt.
///
/// Consumed by the login call and never kept afterwards.
#[derive(Clone, Serialize)]
pub struct SessionRequest {
    pub username: String,
    pub password: String,
}

impl SessionRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for SessionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Operations the console needs from a registry manager.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    async fn stats(&self) -> ApiResult<RegistryStats>;
    async fn list_repositories(&self) -> ApiResult<Vec<RepositorySummary>>;
    async fn list_tags(&self, repository: &str) -> ApiResult<TagList>;

    /// Raw manifest body for `repository:tag`
    async fn manifest(&self, repository: &str, tag: &str) -> ApiResult<String>;

    async fn description(&self, repository: &str) -> ApiResult<String>;
    async fn update_description(&self, repository: &str, raw: &str) -> ApiResult<()>;

    async fn login(&self, request: SessionRequest) -> ApiResult<()>;
    async fn logout(&self) -> ApiResult<()>;
}
