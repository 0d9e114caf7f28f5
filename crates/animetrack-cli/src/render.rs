use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use watchlist_core::{EntryEditor, WatchListStats};
use watchlist_models::{Candidate, Session, WatchListEntry, WatchStatus};

fn status_color(status: WatchStatus) -> Color {
    match status {
        WatchStatus::Watching => Color::Blue,
        WatchStatus::Completed => Color::Green,
        WatchStatus::OnHold => Color::Yellow,
        WatchStatus::Dropped => Color::Red,
        WatchStatus::PlanToWatch => Color::Magenta,
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn progress_text(entry: &WatchListEntry) -> String {
    // Unstarted plans show no progress bar in the list
    if entry.status == WatchStatus::PlanToWatch {
        return "-".to_string();
    }
    format!(
        "{}/{} ({:.0}%)",
        entry.progress,
        entry.total_episodes,
        entry.progress_ratio() * 100.0
    )
}

fn stars(rating: Option<u8>) -> String {
    match rating {
        Some(r) => format!("★ {}/10", r),
        None => "-".to_string(),
    }
}

pub fn entries_table(entries: &[WatchListEntry]) -> Table {
    let mut table = new_table(vec!["ID", "Title", "Status", "Genre", "Year", "Progress", "Rating"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.id),
            Cell::new(&entry.title),
            Cell::new(entry.status.label()).fg(status_color(entry.status)),
            Cell::new(&entry.genre),
            Cell::new(entry.year),
            Cell::new(progress_text(entry)),
            Cell::new(stars(entry.rating)),
        ]);
    }
    table
}

pub fn candidates_table(candidates: &[Candidate]) -> Table {
    let mut table = new_table(vec!["Title", "Genre", "Year", "Episodes", "Score"]);
    for candidate in candidates {
        table.add_row(vec![
            Cell::new(&candidate.title),
            Cell::new(&candidate.genre),
            Cell::new(candidate.year),
            Cell::new(candidate.total_episodes),
            Cell::new(candidate.score.map_or("N/A".to_string(), |s| format!("{:.1}", s))),
        ]);
    }
    table
}

pub fn stats_table(stats: &WatchListStats) -> Table {
    let mut table = new_table(vec!["Stat", "Value"]);
    table.add_row(vec![Cell::new("Total Anime"), Cell::new(stats.total)]);
    table.add_row(vec![Cell::new("Episodes Watched"), Cell::new(stats.episodes_watched)]);
    table.add_row(vec![
        Cell::new("Mean Score"),
        Cell::new(stats.mean_rating.map_or("N/A".to_string(), |m| format!("{:.1}", m))),
    ]);
    for status in WatchStatus::ALL {
        table.add_row(vec![
            Cell::new(status.label()).fg(status_color(status)),
            Cell::new(stats.count(status)),
        ]);
    }
    table
}

pub fn session_card(session: &Session) -> String {
    let role = if session.is_admin { " [Admin]" } else { "" };
    format!(
        "{} ({}){}\nMember since {}",
        session.username,
        session.email,
        role,
        session.join_date.format("%Y-%m-%d")
    )
}

pub fn editor_card(editor: &EntryEditor) -> String {
    let entry = editor.entry();
    let mut lines = vec![
        format!(
            "{}\n{} • {} • {}",
            entry.title,
            entry.genre,
            entry.year,
            entry.studio.as_deref().unwrap_or("Studio Unknown")
        ),
        format!(
            "Status: {}   Progress: {}/{}   Rating: {}",
            editor.status().label(),
            editor.progress(),
            editor.total_episodes(),
            stars(editor.rating())
        ),
    ];
    if let Some(description) = &entry.description {
        lines.push(description.clone());
    }
    if !editor.review().is_empty() {
        lines.push(format!("Your review: {}", editor.review()));
    }
    if editor.is_dirty() {
        lines.push("(unsaved changes)".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::seed_entries;

    #[test]
    fn test_entries_table_lists_every_title() {
        let rendered = entries_table(&seed_entries()).to_string();
        for entry in seed_entries() {
            assert!(rendered.contains(&entry.title));
        }
        assert!(rendered.contains("Plan to Watch"));
    }

    #[test]
    fn test_progress_text_hidden_for_plans() {
        let entries = seed_entries();
        assert_eq!(progress_text(&entries[2]), "-");
        assert_eq!(progress_text(&entries[0]), "87/87 (100%)");
    }

    #[test]
    fn test_editor_card_marks_unsaved_changes() {
        let mut editor = EntryEditor::open(seed_entries().remove(1));
        assert!(!editor_card(&editor).contains("unsaved"));
        editor.increment_progress();
        let card = editor_card(&editor);
        assert!(card.contains("Progress: 9/11"));
        assert!(card.contains("(unsaved changes)"));
    }
}
