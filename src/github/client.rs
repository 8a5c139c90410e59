// src/github/client.rs
// =============================================================================
// HTTP client for the two GitHub endpoints we use.
//
// Strategy:
// - Build one reqwest Client with the Accept, Authorization and User-Agent
//   headers baked in as defaults
// - Append the username to the base URL as a single encoded path segment
// - Map 404 to a "not found" error and every other non-2xx to Upstream
// - Read the body as text first so a bad payload is reported as a decode
//   error rather than a transport error
//
// No retries and no timeout beyond reqwest's default.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{AccountProfile, FetchError, GitHubApi, RepositorySummary};
use crate::config::Config;

// GitHub's stable v3 JSON media type
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

// Largest page size GitHub allows; we never ask for page 2
const REPOS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    http: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        if let Some(credential) = &config.credential {
            let mut value = HeaderValue::from_str(&format!("token {}", credential.expose()))
                .context("GitHub token contains characters not allowed in an HTTP header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    // Builds "{base}/seg1/seg2/..." with each segment percent-encoded,
    // so a username like "a/b" can't escape its path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Config::new rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        not_found: FetchError,
    ) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "response received");

        if status == StatusCode::NOT_FOUND {
            return Err(not_found);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%url, %body, "unsuccessful response body");
            return Err(FetchError::Upstream { status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<AccountProfile, FetchError> {
        let url = self.endpoint(&["users", username]);
        self.get_json(url, FetchError::UserNotFound).await
    }

    async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        let mut url = self.endpoint(&["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string());
        self.get_json(url, FetchError::RepositoriesNotFound).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `?` do with two different error types here?
//    - `send().await?` produces a reqwest::Error
//    - `serde_json::from_str(..)?` produces a serde_json::Error
//    - FetchError has `#[from]` for both, so `?` converts them automatically
//
// 2. What is DeserializeOwned?
//    - A serde trait bound meaning "can be decoded without borrowing the input"
//    - It lets get_json return AccountProfile or Vec<RepositorySummary>
// -----------------------------------------------------------------------------
