use crate::language::{accent_for, language_label, Accent};
use crate::types::{RepoId, RepositorySummary};
use chrono::{DateTime, Locale, Utc};
use serde::Serialize;

const OVERLAY_DESCRIPTION_FALLBACK: &str = "There is no detailed description for this project yet, \
     but the source code shows what it is about.";

/// `"1.5 MB"` above 1024 KB, `"512 KB"` up to and including it.
pub fn format_size(size_kb: u64) -> String {
    if size_kb > 1024 {
        format!("{:.1} MB", size_kb as f64 / 1024.0)
    } else {
        format!("{} KB", size_kb)
    }
}

/// Day, full month name and year, e.g. `5 March 2024`. The order is the
/// same for every locale; only the month name is localized.
pub fn format_long_date(at: &DateTime<Utc>, locale: Locale) -> String {
    at.format_localized("%-d %B %Y", locale).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum CallToAction {
    /// Live preview and source link side by side.
    PreviewAndSource {
        preview_url: String,
        source_url: String,
    },
    /// One full-width source link.
    SourceOnly { source_url: String },
}

impl CallToAction {
    pub fn for_repository(repo: &RepositorySummary) -> Self {
        match repo.preview_url() {
            Some(homepage) => CallToAction::PreviewAndSource {
                preview_url: homepage.to_string(),
                source_url: repo.html_url.clone(),
            },
            None => CallToAction::SourceOnly {
                source_url: repo.html_url.clone(),
            },
        }
    }
}

/// Everything the expanded overlay displays, derived from one summary.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryDetail {
    pub id: RepoId,
    pub name: String,
    pub summary: String,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
    pub size: String,
    pub created_on: String,
    pub updated_on: String,
    pub topics: Vec<String>,
    pub accent: Accent,
    pub gradient: String,
    pub actions: CallToAction,
}

impl RepositoryDetail {
    pub fn derive(repo: &RepositorySummary, locale: Locale) -> Self {
        let accent = accent_for(repo.language.as_deref());
        Self {
            id: repo.id,
            name: repo.name.clone(),
            summary: repo
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| OVERLAY_DESCRIPTION_FALLBACK.to_string()),
            language: language_label(repo.language.as_deref()).to_string(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            size: format_size(repo.size),
            created_on: format_long_date(&repo.created_at, locale),
            updated_on: format_long_date(&repo.updated_at, locale),
            topics: repo.topics.iter().flatten().cloned().collect(),
            accent,
            gradient: accent.css_gradient(),
            actions: CallToAction::for_repository(repo),
        }
    }
}
