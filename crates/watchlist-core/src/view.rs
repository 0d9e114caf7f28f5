use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use watchlist_models::{SortKey, StatusFilter, WatchListEntry};
use crate::editor::EntryEditor;
use crate::store::WatchListRepository;

/// Visible subset of `entries`: text filter, then status filter, then a
/// stable sort. Pure; call it again whenever the inputs change.
pub fn derive_view(
    entries: &[WatchListEntry],
    query: &str,
    status_filter: StatusFilter,
    sort_key: SortKey,
) -> Vec<WatchListEntry> {
    let needle = query.to_lowercase();

    let mut visible: Vec<WatchListEntry> = entries
        .iter()
        .filter(|entry| needle.is_empty() || entry.title.to_lowercase().contains(&needle))
        .filter(|entry| status_filter.matches(entry.status))
        .cloned()
        .collect();

    // sort_by is stable, so ties keep their filtered order
    visible.sort_by(|a, b| compare_entries(a, b, sort_key));
    visible
}

fn compare_entries(a: &WatchListEntry, b: &WatchListEntry, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Rating => b.rating_or_zero().cmp(&a.rating_or_zero()),
        SortKey::Year => b.year.cmp(&a.year),
        SortKey::Progress => b.progress_ratio().total_cmp(&a.progress_ratio()),
    }
}

/// Collation-style title order. Base letters compare first, ignoring accents
/// and case; then an unaccented spelling sorts before an accented one; on a
/// remaining tie the lowercase spelling sorts first.
fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| case_folded(a).cmp(case_folded(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn case_folded(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

/// Query, status filter and sort key currently applied to the list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListViewController {
    query: String,
    status_filter: StatusFilter,
    sort_key: SortKey,
}

impl ListViewController {
    pub fn new(status_filter: StatusFilter, sort_key: SortKey) -> Self {
        Self {
            query: String::new(),
            status_filter,
            sort_key,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        self.status_filter = status_filter;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// Visible entries for the repository's current contents
    pub fn visible<R: WatchListRepository + ?Sized>(&self, repo: &R) -> Vec<WatchListEntry> {
        derive_view(&repo.list(), &self.query, self.status_filter, self.sort_key)
    }

    /// Open the detail editor on entry `id` (click-to-open)
    pub fn open<R: WatchListRepository + ?Sized>(&self, repo: &R, id: &str) -> Option<EntryEditor> {
        repo.get(id).map(EntryEditor::open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_entries;
    use crate::store::InMemoryWatchList;
    use watchlist_models::WatchStatus;

    fn titles(entries: &[WatchListEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    fn with(title: &str, status: WatchStatus, progress: u32, total: u32) -> WatchListEntry {
        let mut entry = seed_entries().remove(0);
        entry.id = title.to_string();
        entry.title = title.to_string();
        entry.status = status;
        entry.progress = progress;
        entry.total_episodes = total;
        entry
    }

    #[test]
    fn test_sort_by_title() {
        let entries = vec![
            with("One Piece", WatchStatus::OnHold, 0, 1),
            with("Attack on Titan", WatchStatus::Completed, 0, 1),
            with("Your Name", WatchStatus::Completed, 0, 1),
        ];
        let visible = derive_view(&entries, "", StatusFilter::All, SortKey::Title);
        assert_eq!(titles(&visible), vec!["Attack on Titan", "One Piece", "Your Name"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let entries = vec![
            with("banana Fish", WatchStatus::Watching, 0, 1),
            with("Akira", WatchStatus::Watching, 0, 1),
            with("Cowboy Bebop", WatchStatus::Watching, 0, 1),
        ];
        let visible = derive_view(&entries, "", StatusFilter::All, SortKey::Title);
        assert_eq!(titles(&visible), vec!["Akira", "banana Fish", "Cowboy Bebop"]);
    }

    #[test]
    fn test_title_sort_ignores_accents() {
        let entries = vec![
            with("Pokemon Zeta", WatchStatus::Watching, 0, 1),
            with("Pokémon", WatchStatus::Watching, 0, 1),
            with("Fate/Zero", WatchStatus::Watching, 0, 1),
            with("Érased", WatchStatus::Watching, 0, 1),
        ];
        let visible = derive_view(&entries, "", StatusFilter::All, SortKey::Title);
        assert_eq!(titles(&visible), vec!["Érased", "Fate/Zero", "Pokémon", "Pokemon Zeta"]);
    }

    #[test]
    fn test_title_sort_puts_unaccented_spelling_first() {
        let entries = vec![
            with("Pokémon", WatchStatus::Watching, 0, 1),
            with("Pokemon", WatchStatus::Watching, 0, 1),
        ];
        let visible = derive_view(&entries, "", StatusFilter::All, SortKey::Title);
        assert_eq!(titles(&visible), vec!["Pokemon", "Pokémon"]);
    }

    #[test]
    fn test_filter_by_status_preserves_order() {
        let entries = vec![
            with("C", WatchStatus::Completed, 0, 1),
            with("W", WatchStatus::Watching, 0, 1),
            with("A", WatchStatus::Completed, 0, 1),
            with("D", WatchStatus::Dropped, 0, 1),
            with("B", WatchStatus::Completed, 0, 1),
        ];
        let filtered: Vec<WatchListEntry> = entries
            .iter()
            .filter(|e| StatusFilter::Only(WatchStatus::Completed).matches(e.status))
            .cloned()
            .collect();
        assert_eq!(titles(&filtered), vec!["C", "A", "B"]);

        // Progress ratios are all equal, so the stable sort keeps insertion order
        let visible = derive_view(
            &entries,
            "",
            StatusFilter::Only(WatchStatus::Completed),
            SortKey::Progress,
        );
        assert_eq!(titles(&visible), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_by_progress_ratio() {
        let entries = vec![
            with("Half", WatchStatus::OnHold, 450, 1000),
            with("Most", WatchStatus::Watching, 8, 11),
        ];
        let visible = derive_view(&entries, "", StatusFilter::All, SortKey::Progress);
        assert_eq!(titles(&visible), vec!["Most", "Half"]);
    }

    #[test]
    fn test_sort_by_rating_treats_missing_as_zero() {
        let visible = derive_view(&seed_entries(), "", StatusFilter::All, SortKey::Rating);
        assert_eq!(
            titles(&visible),
            vec!["Your Name", "Attack on Titan", "One Piece", "Demon Slayer", "Jujutsu Kaisen"]
        );
    }

    #[test]
    fn test_sort_by_year_descending() {
        let visible = derive_view(&seed_entries(), "", StatusFilter::All, SortKey::Year);
        let years: Vec<u32> = visible.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2020, 2019, 2016, 2013, 1999]);
    }

    #[test]
    fn test_text_query_is_case_insensitive() {
        let visible = derive_view(&seed_entries(), "TITAN", StatusFilter::All, SortKey::Title);
        assert_eq!(titles(&visible), vec!["Attack on Titan"]);

        let none = derive_view(&seed_entries(), "zzz", StatusFilter::All, SortKey::Title);
        assert!(none.is_empty());
    }

    #[test]
    fn test_text_then_status_filter() {
        let visible = derive_view(
            &seed_entries(),
            "a",
            StatusFilter::Only(WatchStatus::Completed),
            SortKey::Title,
        );
        assert_eq!(titles(&visible), vec!["Attack on Titan", "Your Name"]);
    }

    #[test]
    fn test_controller_is_pure_over_snapshot() {
        let store = InMemoryWatchList::with_entries(seed_entries());
        let mut controller = ListViewController::default();
        controller.set_sort_key(SortKey::Rating);
        controller.set_status_filter(StatusFilter::Only(WatchStatus::Completed));

        let first = controller.visible(&store);
        let second = controller.visible(&store);
        assert_eq!(first, second);
        assert_eq!(titles(&first), vec!["Your Name", "Attack on Titan"]);
    }

    #[test]
    fn test_open_returns_editor_for_known_id() {
        let store = InMemoryWatchList::with_entries(seed_entries());
        let controller = ListViewController::default();
        let editor = controller.open(&store, "2").unwrap();
        assert_eq!(editor.entry().title, "Demon Slayer");
        assert!(controller.open(&store, "nope").is_none());
    }
}
