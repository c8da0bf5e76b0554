//! Medium API client
//!
//! Two-call publish protocol: resolve the caller's user id, then create the
//! post under that user. No retry or backoff; any unexpected status aborts
//! the run and is surfaced to the invoking scheduler through the exit code.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::error::MediumError;

const DEFAULT_BASE_URL: &str = "https://api.medium.com";

/// Identity lookups are small; publishes carry the whole document.
const ME_TIMEOUT: Duration = Duration::from_secs(30);
const PUBLISH_TIMEOUT: Duration = Duration::from_secs(60);

/// Body for the create-post call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content_format: String,
    pub content: String,
    pub tags: Vec<String>,
    pub publish_status: String,
    /// Serialized as JSON null when the site base URL was not resolved.
    pub canonical_url: Option<String>,
    pub license: String,
}

impl NewPost {
    /// A public markdown post carrying the digest's fixed tag set and license.
    pub fn digest(title: String, content: String, canonical_url: Option<String>) -> Self {
        Self {
            title,
            content_format: "markdown".to_string(),
            content,
            tags: ["ai", "machine-learning", "software", "strategy"]
                .map(String::from)
                .to_vec(),
            publish_status: "public".to_string(),
            canonical_url,
            license: "all-rights-reserved".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    #[serde(default)]
    data: Option<MeData>,
}

#[derive(Debug, Deserialize)]
struct MeData {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostResponse {
    #[serde(default)]
    data: Option<PostData>,
}

#[derive(Debug, Deserialize)]
struct PostData {
    #[serde(default)]
    url: Option<String>,
}

/// Publishing surface of the Medium API.
#[async_trait]
pub trait MediumApi {
    /// Resolve the authenticated user's id.
    async fn me(&self) -> Result<String, MediumError>;

    /// Create a post under the given user, returning its URL when the
    /// platform reports one.
    async fn create_post(
        &self,
        user_id: &str,
        post: &NewPost,
    ) -> Result<Option<String>, MediumError>;
}

/// reqwest-backed implementation of [`MediumApi`].
pub struct MediumClient {
    http: reqwest::Client,
    base_url: String,
}

impl MediumClient {
    pub fn new(token: &str) -> Result<Self, MediumError> {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a client against a specific API root (tests point this at a
    /// local server).
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, MediumError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MediumApi for MediumClient {
    async fn me(&self) -> Result<String, MediumError> {
        let response = self
            .http
            .get(format!("{}/v1/me", self.base_url))
            .timeout(ME_TIMEOUT)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let message = response.text().await.unwrap_or_default();
            return Err(MediumError::Api { status, message });
        }

        let body: MeResponse = response
            .json()
            .await
            .map_err(|e| MediumError::Deserialization(e.to_string()))?;
        body.data
            .and_then(|d| d.id)
            .filter(|id| !id.is_empty())
            .ok_or(MediumError::MissingUserId)
    }

    async fn create_post(
        &self,
        user_id: &str,
        post: &NewPost,
    ) -> Result<Option<String>, MediumError> {
        let response = self
            .http
            .post(format!("{}/v1/users/{}/posts", self.base_url, user_id))
            .timeout(PUBLISH_TIMEOUT)
            .json(post)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        if status != 200 && status != 201 {
            return Err(MediumError::Api {
                status,
                message: body,
            });
        }

        // The created-post envelope is informational only; a success body
        // that does not parse is still a success.
        let url = serde_json::from_str::<PostResponse>(&body)
            .ok()
            .and_then(|r| r.data)
            .and_then(|d| d.url);
        Ok(url)
    }
}
