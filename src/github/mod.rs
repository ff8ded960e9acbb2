//! GitHub REST API client
//!
//! One upstream concern per method: listing (filtered and ranked), direct
//! single-repository lookup, and README retrieval with transport decoding.
//! The [`RepositoryHost`] trait is the seam the catalog is written
//! against, so service behavior can be exercised without a network.

pub mod types;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{debug, warn};

use crate::config::GithubConfig;
use crate::error::CatalogError;
use types::{RawRepository, ReadmePayload};

/// Versioned JSON media type expected by every endpoint
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Floor for the configured request timeout
const MIN_TIMEOUT_SECONDS: u64 = 1;

/// Abstraction over the repository-hosting service
///
/// Implemented by [`GithubClient`] for production and by in-memory fakes
/// in the catalog tests.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// List an owner's repositories: one page of up to `per_page` entries
    /// sorted by recency upstream, then filtered of forks and private
    /// repositories and ranked by stars (ties by last update).
    async fn list_repositories(
        &self,
        owner: &str,
        per_page: u32,
    ) -> Result<Vec<RawRepository>, CatalogError>;

    /// Fetch a single repository by name. `Ok(None)` when it does not
    /// exist.
    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<RawRepository>, CatalogError>;

    /// Fetch and decode a repository's README. `Ok(None)` when the
    /// repository has none — an expected state, not an error.
    async fn fetch_readme(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<String>, CatalogError>;
}

/// HTTP client for the GitHub REST API
pub struct GithubClient {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client from explicit configuration.
    pub fn new(config: GithubConfig) -> Result<Self, CatalogError> {
        let timeout_seconds = if config.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                config.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            MIN_TIMEOUT_SECONDS
        } else {
            config.timeout_seconds
        };

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.get(url).header("Accept", ACCEPT_HEADER);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder
    }
}

#[async_trait]
impl RepositoryHost for GithubClient {
    async fn list_repositories(
        &self,
        owner: &str,
        per_page: u32,
    ) -> Result<Vec<RawRepository>, CatalogError> {
        let url = format!(
            "{}/users/{owner}/repos?sort=updated&per_page={per_page}",
            self.api_base
        );
        debug!("Listing repositories: {url}");

        let response = self.request(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Upstream {
                status: response.status(),
                url,
            });
        }

        let repos: Vec<RawRepository> = response.json().await?;
        Ok(filter_and_rank(repos, per_page as usize))
    }

    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<RawRepository>, CatalogError> {
        let url = format!("{}/repos/{owner}/{name}", self.api_base);
        debug!("Fetching repository: {url}");

        let response = self.request(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CatalogError::Upstream {
                status: response.status(),
                url,
            });
        }

        Ok(Some(response.json().await?))
    }

    async fn fetch_readme(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<String>, CatalogError> {
        let url = format!("{}/repos/{owner}/{name}/readme", self.api_base);
        debug!("Fetching README: {url}");

        let response = self.request(&url).send().await?;
        // Any non-success here means "no README" (404 in practice); the
        // listing already established the repository exists.
        if !response.status().is_success() {
            debug!("No README for {owner}/{name}: HTTP {}", response.status());
            return Ok(None);
        }

        let payload: ReadmePayload = response.json().await?;
        decode_readme(name, &payload).map(Some)
    }
}

/// Drop forks and private repositories, rank what remains by descending
/// star count with ties broken by most recent update, and truncate to
/// `limit`. Filtering happens after the page was fetched, so fewer than
/// `limit` entries can come back even when more exist upstream.
pub fn filter_and_rank(repos: Vec<RawRepository>, limit: usize) -> Vec<RawRepository> {
    let mut repos: Vec<RawRepository> = repos
        .into_iter()
        .filter(|repo| !repo.fork && !repo.private)
        .collect();

    repos.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });

    repos.truncate(limit);
    repos
}

/// Decode a README payload: declared base64, with the whitespace GitHub
/// embeds in the content stripped first, then UTF-8.
fn decode_readme(repo: &str, payload: &ReadmePayload) -> Result<String, CatalogError> {
    if payload.encoding != "base64" {
        return Err(CatalogError::Decode {
            repo: repo.to_string(),
            reason: format!("unexpected encoding {:?}", payload.encoding),
        });
    }

    let compact: String = payload
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = BASE64.decode(compact).map_err(|err| CatalogError::Decode {
        repo: repo.to_string(),
        reason: err.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|err| CatalogError::Decode {
        repo: repo.to_string(),
        reason: err.to_string(),
    })
}
