//! Project catalog service
//!
//! The three read-only operations the rendering layer consumes:
//!
//! - [`ProjectCatalog::list_projects`] — the ranked catalog for an owner
//! - [`ProjectCatalog::get_project_by_slug`] — direct single-project lookup
//! - [`ProjectCatalog::list_slugs`] — slugs for page pre-enumeration
//!
//! Every operation is a single-pass request/response; nothing is cached
//! or persisted between calls. `Ok(None)` and `Ok(vec![])` are valid
//! non-error states (unknown project, empty catalog), distinct from
//! transport and upstream failures.

use futures::future;
use tracing::{debug, warn};

use crate::config::GithubConfig;
use crate::error::CatalogError;
use crate::github::types::RawRepository;
use crate::github::{GithubClient, RepositoryHost};
use crate::project::Project;

/// Listing page size when the caller has no preference
pub const DEFAULT_PROJECT_LIMIT: u32 = 10;

/// Larger page size for slug enumeration, to maximize page coverage
pub const SLUG_ENUMERATION_LIMIT: u32 = 50;

/// The catalog service
pub struct ProjectCatalog {
    host: Box<dyn RepositoryHost>,
}

impl ProjectCatalog {
    /// Catalog backed by the real GitHub API.
    pub fn new(config: GithubConfig) -> Result<Self, CatalogError> {
        Ok(Self::with_host(Box::new(GithubClient::new(config)?)))
    }

    /// Catalog backed by any [`RepositoryHost`] implementation.
    pub fn with_host(host: Box<dyn RepositoryHost>) -> Self {
        Self { host }
    }

    /// List an owner's projects, ranked by stars then recency.
    ///
    /// README fetches for the returned repositories run concurrently and
    /// are joined before returning; output order always follows the
    /// listing's rank, never completion order. A failed README fetch or
    /// decode degrades that one project to `readme = None` — it never
    /// fails the batch.
    pub async fn list_projects(
        &self,
        owner: &str,
        limit: u32,
    ) -> Result<Vec<Project>, CatalogError> {
        if owner.is_empty() {
            warn!("No repository owner provided; returning an empty catalog");
            return Ok(Vec::new());
        }

        let repos = self.host.list_repositories(owner, limit).await?;
        debug!("Listing returned {} repositories for {owner}", repos.len());

        let tasks = repos
            .into_iter()
            .map(|repo| self.build_project(owner, repo));

        Ok(future::join_all(tasks).await)
    }

    /// Look up one project by slug, resolving the slug directly as the
    /// repository name. Unknown, forked, or private repositories are
    /// `Ok(None)`. Repository names the slug transform rewrites are not
    /// reachable this way — the transform is one-directional.
    pub async fn get_project_by_slug(
        &self,
        owner: &str,
        slug: &str,
    ) -> Result<Option<Project>, CatalogError> {
        if owner.is_empty() || slug.is_empty() {
            return Ok(None);
        }

        let Some(repo) = self.host.get_repository(owner, slug).await? else {
            return Ok(None);
        };

        if repo.fork || repo.private {
            debug!("Repository {owner}/{slug} is a fork or private; hiding it");
            return Ok(None);
        }

        let readme = self.host.fetch_readme(owner, &repo.name).await?;
        Ok(Some(Project::from_repository(repo, readme)))
    }

    /// Every project's slug, for the rendering layer to pre-enumerate
    /// pages.
    pub async fn list_slugs(&self, owner: &str) -> Result<Vec<String>, CatalogError> {
        let projects = self.list_projects(owner, SLUG_ENUMERATION_LIMIT).await?;
        Ok(projects.into_iter().map(|project| project.slug).collect())
    }

    async fn build_project(&self, owner: &str, repo: RawRepository) -> Project {
        let readme = match self.host.fetch_readme(owner, &repo.name).await {
            Ok(readme) => readme,
            Err(err) => {
                warn!("Skipping README for {owner}/{}: {err}", repo.name);
                None
            }
        };

        Project::from_repository(repo, readme)
    }
}
