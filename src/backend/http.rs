//! HTTP implementation of [`RegistryApi`] on top of `reqwest`.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::{ApiError, ApiResult, RegistryApi, RegistryStats, RepositorySummary, SessionRequest, TagList};
use crate::config::ServerConfig;
use crate::constants::{MANIFEST_V2_MEDIA_TYPE, USER_AGENT};

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Url(err.to_string())
    }
}

/// Registry manager client.
///
/// Keeps a cookie store so the session cookie set by `login` is sent on the
/// following requests.
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    http: Client,
    base_url: Url,
    api_base: String,
}

impl HttpRegistryClient {
    pub fn new(base_url: Url, api_base: impl Into<String>) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            api_base,
        })
    }

    pub fn from_config(config: &ServerConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        Self::new(base_url, config.api_base.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of an endpoint under the API base path
    fn api_url(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(&format!("{}{}", self.api_base, path))?)
    }

    fn registry_url(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    /// Turn non-2xx responses into [`ApiError::Status`] carrying the body
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{url} -> {status}");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let response = Self::check(self.request(Method::GET, url).send().await?).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RegistryApi for HttpRegistryClient {
    async fn stats(&self) -> ApiResult<RegistryStats> {
        self.get_json(self.api_url("/stats")?).await
    }

    async fn list_repositories(&self) -> ApiResult<Vec<RepositorySummary>> {
        // The server encodes an empty list as `null`
        let repositories: Option<Vec<RepositorySummary>> = self.get_json(self.api_url("/repositories")?).await?;
        Ok(repositories.unwrap_or_default())
    }

    async fn list_tags(&self, repository: &str) -> ApiResult<TagList> {
        self.get_json(self.registry_url(&format!("/v2/{repository}/tags/list"))?)
            .await
    }

    async fn manifest(&self, repository: &str, tag: &str) -> ApiResult<String> {
        let url = self.registry_url(&format!("/v2/{repository}/manifests/{tag}"))?;
        let response = self
            .request(Method::GET, url)
            .header(ACCEPT, MANIFEST_V2_MEDIA_TYPE)
            .send()
            .await?;
        Ok(Self::check(response).await?.text().await?)
    }

    async fn description(&self, repository: &str) -> ApiResult<String> {
        #[derive(Deserialize)]
        struct DescriptionResponse {
            #[serde(default)]
            description: String,
        }
        let response: DescriptionResponse = self
            .get_json(self.api_url(&format!("/repositories/{repository}/description"))?)
            .await?;
        Ok(response.description)
    }

    async fn update_description(&self, repository: &str, raw: &str) -> ApiResult<()> {
        let url = self.api_url(&format!("/repositories/{repository}/description"))?;
        let response = self
            .request(Method::PUT, url)
            .header(CONTENT_TYPE, "text/plain")
            .body(raw.to_string())
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn login(&self, request: SessionRequest) -> ApiResult<()> {
        let url = self.api_url("/login")?;
        let response = self.request(Method::POST, url).json(&request).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn logout(&self) -> ApiResult<()> {
        let url = self.api_url("/logout")?;
        let response = self.request(Method::POST, url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
