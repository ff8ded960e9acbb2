//! GitHub client configuration
//!
//! The catalog never reads the environment on a request path. Credentials
//! and endpoints are resolved once, at process start, by whoever builds
//! the [`GithubConfig`] — either by hand or via [`GithubConfig::from_env`].

use serde::{Deserialize, Serialize};

/// Public GitHub REST API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Environment variable holding the optional access token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

fn default_api_base() -> String {
    GITHUB_API_BASE.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "gitfolio-core".to_string()
}

/// Configuration for [`GithubClient`](crate::GithubClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API base URL (override for tests or GitHub Enterprise)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Optional bearer token; absent means unauthenticated, rate-limited
    /// access
    #[serde(default)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User-Agent header (GitHub rejects anonymous agents)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl GithubConfig {
    /// Default configuration with the token taken from `GITHUB_TOKEN`,
    /// if set. Intended to run once at process start.
    pub fn from_env() -> Self {
        Self {
            token: std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()),
            ..Self::default()
        }
    }

    /// Attach a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
