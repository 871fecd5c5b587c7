use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use url::Url;

pub type RepoId = u64;

// GitHub API response structures
/// One public repository as listed by `/users/{handle}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: RepoId,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default, deserialize_with = "non_blank")]
    pub homepage: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    /// Size in kilobytes.
    pub size: u64,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Option<BTreeSet<String>>,
}

impl RepositorySummary {
    /// The homepage, if it is a web address a visitor can safely open.
    pub fn preview_url(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .filter(|homepage| is_web_url(homepage))
    }
}

fn is_web_url(raw: &str) -> bool {
    Url::parse(raw.trim())
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

// The API reports "no homepage" as an empty string as often as null.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Which account to list and how many repositories to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryQuery {
    pub handle: String,
    pub limit: u32,
}

impl RepositoryQuery {
    pub fn new(handle: impl Into<String>, limit: u32) -> Self {
        Self {
            handle: handle.into(),
            limit,
        }
    }
}
