use crate::language::{accent_for, language_label, Accent};
use crate::types::{RepoId, RepositorySummary};
use serde::Serialize;
use std::sync::Arc;

pub const DESCRIPTION_FALLBACK: &str = "A mysterious project... click for the details.";

#[derive(Debug, Clone)]
enum GridState {
    Loading,
    /// Settled. An empty list is the degenerate "nothing to show" case.
    Populated(Arc<[RepositorySummary]>),
}

/// List and selection state for one mounted projects grid.
///
/// The selection is only ever an id. The selected repository is looked up
/// in the current list every time it is asked for, so replacing the list
/// can leave a selection that no longer resolves to anything.
#[derive(Debug, Clone)]
pub struct ProjectGrid {
    state: GridState,
    selected: Option<RepoId>,
}

impl Default for ProjectGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectGrid {
    pub fn new() -> Self {
        Self {
            state: GridState::Loading,
            selected: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GridState::Loading)
    }

    /// Install a fetch result, replacing any previous list as a whole.
    pub fn settle(&mut self, repositories: Vec<RepositorySummary>) {
        self.state = GridState::Populated(repositories.into());
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        match &self.state {
            GridState::Loading => &[],
            GridState::Populated(list) => &list[..],
        }
    }

    pub fn select_repository(&mut self, id: RepoId) {
        if self.selected != Some(id) {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<RepoId> {
        self.selected
    }

    pub fn selected_repository(&self) -> Option<&RepositorySummary> {
        let id = self.selected?;
        self.repositories().iter().find(|repo| repo.id == id)
    }

    pub fn view(&self) -> GridView {
        let repositories = match &self.state {
            GridState::Loading => None,
            GridState::Populated(list) => Some(Arc::clone(list)),
        };
        GridView {
            repositories,
            selected: self.selected,
        }
    }
}

/// Snapshot handed to a renderer.
#[derive(Debug, Clone)]
pub struct GridView {
    repositories: Option<Arc<[RepositorySummary]>>,
    selected: Option<RepoId>,
}

impl GridView {
    pub fn loading() -> Self {
        Self {
            repositories: None,
            selected: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.repositories.is_none()
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        self.repositories.as_deref().unwrap_or(&[])
    }

    pub fn selected_id(&self) -> Option<RepoId> {
        self.selected
    }

    pub fn selected_repository(&self) -> Option<&RepositorySummary> {
        let id = self.selected?;
        self.repositories().iter().find(|repo| repo.id == id)
    }

    pub fn cards(&self) -> Vec<RepositoryCard> {
        self.repositories()
            .iter()
            .map(RepositoryCard::from_summary)
            .collect()
    }
}

/// What a grid card shows.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryCard {
    pub id: RepoId,
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    pub html_url: String,
    pub accent: Accent,
    pub gradient: String,
}

impl RepositoryCard {
    pub fn from_summary(repo: &RepositorySummary) -> Self {
        let accent = accent_for(repo.language.as_deref());
        Self {
            id: repo.id,
            name: repo.name.clone(),
            description: repo
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string()),
            language: language_label(repo.language.as_deref()).to_string(),
            stars: repo.stargazers_count,
            html_url: repo.html_url.clone(),
            accent,
            gradient: accent.css_gradient(),
        }
    }
}
