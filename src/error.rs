//! Catalog error types
//!
//! The catalog distinguishes hard failures (listing unavailable, network
//! down, corrupt README payload) from expected non-results (no README,
//! unknown slug). The latter are `Ok(None)` at the call sites, never
//! variants here.

use thiserror::Error;

/// Errors surfaced by catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Non-success HTTP status from a required upstream call
    #[error("GitHub API returned HTTP {status} for {url}")]
    Upstream {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Network-level failure (DNS, timeout, connection reset) or a
    /// response body that could not be read/deserialized in flight
    #[error("request to GitHub failed")]
    Transport(#[from] reqwest::Error),

    /// README payload whose transport encoding could not be decoded.
    /// Scoped to a single repository: batch listing degrades that entry
    /// instead of failing, direct lookup propagates it.
    #[error("failed to decode README for {repo}: {reason}")]
    Decode { repo: String, reason: String },
}

impl CatalogError {
    /// Status code of the upstream failure, when there is one.
    pub fn upstream_status(&self) -> Option<reqwest::StatusCode> {
        match self {
            CatalogError::Upstream { status, .. } => Some(*status),
            CatalogError::Transport(err) => err.status(),
            CatalogError::Decode { .. } => None,
        }
    }
}
