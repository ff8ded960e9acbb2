//! gitfolio-core - Project-catalog aggregation for a GitHub-backed portfolio
//!
//! This crate turns raw GitHub REST API responses into a stable,
//! render-ready project model for a static-generation portfolio site.
//!
//! # Overview
//!
//! The pipeline:
//! - Fetch an owner's repository listing, drop forks and private entries,
//!   rank by stars then recency
//! - Fetch each repository's README and decode its transport encoding
//! - Split optional YAML front matter and render the Markdown body to HTML
//! - Merge repository metadata, front-matter overrides, and rendered
//!   README into one canonical [`Project`] record
//!
//! # Architecture
//!
//! ```text
//! GitHub REST API
//!     │
//!     ├── /users/{owner}/repos      ← listing (ranked, filtered)
//!     ├── /repos/{owner}/{name}     ← direct slug lookup
//!     └── /repos/{owner}/{name}/readme
//!            │
//!            ▼
//!     ProjectCatalog
//!            │
//!            ▼
//!     Vec<Project> / Option<Project>  → rendering layer
//! ```
//!
//! Rendering, theming, and static-site export are external collaborators;
//! this crate only makes the catalog cleanly available. It holds no state
//! across calls and performs no caching — revalidation belongs to the
//! build system consuming it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod github;
pub mod project;
pub mod readme;

pub use catalog::{ProjectCatalog, DEFAULT_PROJECT_LIMIT, SLUG_ENUMERATION_LIMIT};
pub use config::GithubConfig;
pub use error::CatalogError;
pub use github::{GithubClient, RepositoryHost};
pub use github::types::RawRepository;
pub use project::Project;
pub use readme::FrontMatter;
