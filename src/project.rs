//! The canonical, render-ready project model
//!
//! [`Project::from_repository`] is the normalizer: it merges repository
//! metadata, optional front-matter overrides, and the rendered README
//! into one record. It is pure — same inputs, same Project — which is
//! what keeps the whole pipeline testable without a network.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::types::RawRepository;
use crate::readme::{render_markdown, split_front_matter, FrontMatter};

/// Description used when neither front matter nor the repository has one
pub const PLACEHOLDER_DESCRIPTION: &str = "No description available";

/// Character limit for the card-sized description
const SHORT_DESCRIPTION_LIMIT: usize = 150;

/// Marker appended when the description was cut
const ELLIPSIS: &str = "...";

/// A normalized project, constructed fresh on every catalog query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier from the upstream repository
    pub id: u64,

    /// Original repository name, unmodified
    pub name: String,

    /// URL-safe identifier, a pure function of `name`
    pub slug: String,

    /// Front-matter title, else the humanized repository name
    pub title: String,

    /// Front-matter description, else repository description, else a
    /// fixed placeholder
    pub description: String,

    /// `description` cut to 150 characters with a trailing `...` when it
    /// was longer; char-based, not word-boundary aware
    pub short_description: String,

    /// Canonical repository URL
    pub github_url: String,

    /// Front-matter live URL, else repository homepage, else absent
    pub live_url: Option<String>,

    /// Star count
    pub stars: u32,

    /// Primary language
    pub language: Option<String>,

    /// Repository topics
    pub topics: Vec<String>,

    /// Creation instant
    pub created_at: DateTime<Utc>,

    /// Last-update instant
    pub updated_at: DateTime<Utc>,

    /// Fully rendered README HTML, or `None` when the repository has no
    /// README — never raw or partially rendered Markdown
    pub readme: Option<String>,

    /// Raw extracted front matter, retained for downstream consumers
    pub front_matter: FrontMatter,
}

impl Project {
    /// Normalize a raw repository plus its optional README text into a
    /// render-ready record.
    pub fn from_repository(repo: RawRepository, readme_text: Option<String>) -> Self {
        let (front_matter, readme) = match readme_text.as_deref() {
            Some(text) => {
                let (front_matter, body) = split_front_matter(text);
                (front_matter, Some(render_markdown(body)))
            }
            None => (FrontMatter::default(), None),
        };

        let slug = slugify(&repo.name);

        let title = first_filled(&[front_matter.title.as_deref()])
            .map(str::to_string)
            .unwrap_or_else(|| humanize(&repo.name));

        let description = first_filled(&[
            front_matter.description.as_deref(),
            repo.description.as_deref(),
        ])
        .unwrap_or(PLACEHOLDER_DESCRIPTION)
        .to_string();

        let live_url = first_filled(&[
            front_matter.live_url.as_deref(),
            repo.homepage.as_deref(),
        ])
        .map(str::to_string);

        Self {
            id: repo.id,
            name: repo.name,
            slug,
            title,
            short_description: short_description(&description),
            description,
            github_url: repo.html_url,
            live_url,
            stars: repo.stargazers_count,
            language: repo.language,
            topics: repo.topics,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            readme,
            front_matter,
        }
    }
}

/// Derive the URL-safe slug: lowercase, non-alphanumeric runs collapsed
/// to a single hyphen, no leading or trailing hyphens. Idempotent.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut prev_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen && !slug.is_empty() {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Humanize a repository name: hyphens become spaces, each word's first
/// letter is uppercased, the rest left as typed.
pub fn humanize(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Cut a description to the card limit, marking the cut with `...`.
/// Counts chars, not words; mid-word cuts are accepted.
fn short_description(description: &str) -> String {
    if description.chars().count() <= SHORT_DESCRIPTION_LIMIT {
        return description.to_string();
    }

    let truncated: String = description.chars().take(SHORT_DESCRIPTION_LIMIT).collect();
    format!("{truncated}{ELLIPSIS}")
}

/// First candidate that is present and non-empty. GitHub sends `""` for
/// unset homepage fields, so empty counts as absent in every priority
/// chain.
fn first_filled<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn repo(name: &str) -> RawRepository {
        RawRepository {
            id: 7,
            name: name.to_string(),
            description: Some("From the repo".to_string()),
            private: false,
            fork: false,
            stargazers_count: 3,
            language: Some("Rust".to_string()),
            topics: vec!["cli".to_string()],
            homepage: None,
            html_url: format!("https://github.com/octocat/{name}"),
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            default_branch: "main".to_string(),
        }
    }

    #[test]
    fn slug_lowercases_and_collapses_runs() {
        assert_eq!(slugify("My.Cool_Project"), "my-cool-project");
        assert_eq!(slugify("hello--world"), "hello-world");
        assert_eq!(slugify("Trailing!!!"), "trailing");
    }

    #[test]
    fn slug_is_idempotent() {
        for name in ["My.Cool_Project", "already-safe", "Repo 2024", "a"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn slug_safe_names_pass_through() {
        assert_eq!(slugify("already-safe-123"), "already-safe-123");
    }

    #[test]
    fn humanize_capitalizes_each_word() {
        assert_eq!(humanize("y-z"), "Y Z");
        assert_eq!(humanize("my-cool-project"), "My Cool Project");
        assert_eq!(humanize("plain"), "Plain");
    }

    #[test]
    fn short_description_cuts_at_150_chars() {
        let long = "x".repeat(200);
        let short = short_description(&long);

        assert_eq!(short.chars().count(), 153);
        assert!(short.ends_with("..."));
        assert!(long.starts_with(short.trim_end_matches("...")));
    }

    #[test]
    fn short_description_leaves_short_text_alone() {
        assert_eq!(short_description("brief"), "brief");
    }

    #[test]
    fn first_filled_skips_empty_strings() {
        assert_eq!(first_filled(&[Some(""), None, Some("hit")]), Some("hit"));
        assert_eq!(first_filled(&[None, Some("")]), None);
    }

    #[test]
    fn missing_readme_degrades_gracefully() {
        let project = Project::from_repository(repo("no-readme"), None);

        assert_eq!(project.readme, None);
        assert!(project.front_matter.is_empty());
    }

    #[test]
    fn front_matter_title_wins_over_humanized_name() {
        let text = "---\ntitle: X\n---\nbody".to_string();
        let project = Project::from_repository(repo("y-z"), Some(text));

        assert_eq!(project.title, "X");
    }

    #[test]
    fn humanized_name_is_the_title_fallback() {
        let project = Project::from_repository(repo("y-z"), Some("body only".to_string()));
        assert_eq!(project.title, "Y Z");
    }

    #[test]
    fn description_priority_is_front_matter_then_repo_then_placeholder() {
        let with_fm = "---\ndescription: From front matter\n---\nbody".to_string();
        let project = Project::from_repository(repo("a"), Some(with_fm));
        assert_eq!(project.description, "From front matter");

        let project = Project::from_repository(repo("a"), None);
        assert_eq!(project.description, "From the repo");

        let mut bare = repo("a");
        bare.description = None;
        let project = Project::from_repository(bare, None);
        assert_eq!(project.description, PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn live_url_priority_treats_empty_homepage_as_absent() {
        let mut raw = repo("a");
        raw.homepage = Some(String::new());
        let project = Project::from_repository(raw, None);
        assert_eq!(project.live_url, None);

        let mut raw = repo("a");
        raw.homepage = Some("https://home.example".to_string());
        let project = Project::from_repository(raw, None);
        assert_eq!(project.live_url.as_deref(), Some("https://home.example"));

        let text = "---\nlive_url: https://fm.example\n---\n".to_string();
        let mut raw = repo("a");
        raw.homepage = Some("https://home.example".to_string());
        let project = Project::from_repository(raw, Some(text));
        assert_eq!(project.live_url.as_deref(), Some("https://fm.example"));
    }

    #[test]
    fn readme_is_fully_rendered_html() {
        let project =
            Project::from_repository(repo("a"), Some("# Hello\n\n*world*".to_string()));

        let html = project.readme.unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<em>world</em>"));
        assert!(!html.contains('#'));
    }

    #[test]
    fn malformed_front_matter_still_renders_the_whole_text() {
        let text = "---\ntitle: [broken\n---\n# Body".to_string();
        let project = Project::from_repository(repo("a"), Some(text));

        assert!(project.front_matter.is_empty());
        // The unparseable block stays part of the rendered body
        assert!(project.readme.is_some());
        assert_eq!(project.title, "A");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let project = Project::from_repository(repo("a-b"), None);
        let json = serde_json::to_value(&project).unwrap();

        assert!(json.get("shortDescription").is_some());
        assert!(json.get("githubUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("frontMatter").is_some());
    }
}
