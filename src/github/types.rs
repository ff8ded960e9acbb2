//! GitHub API boundary types
//!
//! Payloads are validated and coerced here, at the fetch boundary, so
//! nothing downstream touches untyped JSON. Optional fields default;
//! unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_branch() -> String {
    "main".to_string()
}

/// One entry of the repository listing, as GitHub returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRepository {
    /// Stable upstream identifier
    pub id: u64,

    /// Repository name (unmodified)
    pub name: String,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Visibility flag
    #[serde(default)]
    pub private: bool,

    /// Fork flag
    #[serde(default)]
    pub fork: bool,

    /// Star count
    #[serde(default)]
    pub stargazers_count: u32,

    /// Primary language, when GitHub detected one
    #[serde(default)]
    pub language: Option<String>,

    /// Repository topics, in GitHub's order
    #[serde(default)]
    pub topics: Vec<String>,

    /// Homepage URL; GitHub sends `""` for unset, which the priority
    /// chains treat as absent
    #[serde(default)]
    pub homepage: Option<String>,

    /// Canonical browser URL
    pub html_url: String,

    /// Creation instant
    pub created_at: DateTime<Utc>,

    /// Last-update instant
    pub updated_at: DateTime<Utc>,

    /// Default branch
    #[serde(default = "default_branch")]
    pub default_branch: String,
}

/// Response of the per-repository README endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmePayload {
    /// Transport-encoded file content
    pub content: String,

    /// Declared transport encoding; GitHub always sends `"base64"`
    pub encoding: String,
}
