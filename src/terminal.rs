//! Plain-terminal rendering of the grid and the detail view.

use crate::detail::{CallToAction, RepositoryDetail};
use crate::grid::{GridView, RepositoryCard};
use colored::*;
use std::fmt::Write;

pub fn render_grid(view: &GridView) -> String {
    if view.is_loading() {
        return format!("{}\n", "LOADING".purple().bold());
    }

    let cards = view.cards();
    if cards.is_empty() {
        return format!("{}\n", "No repositories to show.".dimmed());
    }

    let mut out = String::new();
    for card in &cards {
        render_card(&mut out, card);
    }
    out
}

fn render_card(out: &mut String, card: &RepositoryCard) {
    let swatch = "●".color(card.accent.from.terminal_color());
    let _ = writeln!(
        out,
        "{} {} {}",
        swatch,
        card.name.bold(),
        format!("★ {}", card.stars).yellow()
    );
    let _ = writeln!(out, "  {}", card.description);
    let _ = writeln!(
        out,
        "  {}  {}\n",
        card.language.dimmed(),
        format!("#{}", card.id).dimmed()
    );
}

pub fn render_detail(detail: &RepositoryDetail) -> String {
    let mut out = String::new();
    let accent = detail.accent.from.terminal_color();

    let _ = writeln!(out, "{}", detail.name.bold().color(accent));
    let _ = writeln!(out, "{}", "=".repeat(50).dimmed());
    let _ = writeln!(
        out,
        "{}  ·  {} (updated)",
        detail.language,
        detail.updated_on
    );
    let _ = writeln!(out, "\n{}\n", detail.summary);
    if !detail.topics.is_empty() {
        let _ = writeln!(out, "Topics: {}\n", detail.topics.join(", ").cyan());
    }

    let _ = writeln!(out, "{:<10} {}", "Stars", detail.stars);
    let _ = writeln!(out, "{:<10} {}", "Forks", detail.forks);
    let _ = writeln!(out, "{:<10} {}", "Size", detail.size);
    let _ = writeln!(out, "{:<10} {}\n", "Created", detail.created_on);

    match &detail.actions {
        CallToAction::PreviewAndSource {
            preview_url,
            source_url,
        } => {
            let _ = writeln!(out, "{} {}", "Live preview:".green(), preview_url);
            let _ = writeln!(out, "{} {}", "Source:      ".green(), source_url);
        }
        CallToAction::SourceOnly { source_url } => {
            let _ = writeln!(out, "{} {}", "Project page:".green(), source_url);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ProjectGrid;

    #[test]
    fn test_loading_and_empty_states() {
        colored::control::set_override(false);
        assert_eq!(render_grid(&GridView::loading()), "LOADING\n");

        let mut grid = ProjectGrid::new();
        grid.settle(Vec::new());
        assert_eq!(render_grid(&grid.view()), "No repositories to show.\n");
    }
}
