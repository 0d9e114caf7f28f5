use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use watchlist_models::{EntryDraft, EntryUpdate, WatchListEntry};

/// Storage seam for the personal list
///
/// Absent ids are silent no-ops for `update` and `remove`; the returned
/// `bool` only says whether anything matched.
pub trait WatchListRepository {
    /// Current entries in insertion order
    fn list(&self) -> Arc<Vec<WatchListEntry>>;

    /// Insert `draft`, assigning a fresh id unless it carries an unused one
    fn add(&mut self, draft: EntryDraft) -> WatchListEntry;

    fn update(&mut self, id: &str, update: &EntryUpdate) -> bool;

    fn remove(&mut self, id: &str) -> bool;

    fn get(&self, id: &str) -> Option<WatchListEntry> {
        self.list().iter().find(|entry| entry.id == id).cloned()
    }
}

/// In-memory list; nothing outlives the process
///
/// Every mutation builds a new collection and swaps it in, so a snapshot
/// returned by [`WatchListRepository::list`] never changes underneath its
/// holder.
#[derive(Debug, Default, Clone)]
pub struct InMemoryWatchList {
    entries: Arc<Vec<WatchListEntry>>,
    revision: u64,
}

impl InMemoryWatchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<WatchListEntry>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let entries: Vec<WatchListEntry> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .collect();
        Self {
            entries: Arc::new(entries),
            revision: 0,
        }
    }

    /// Number of mutations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    fn replace(&mut self, entries: Vec<WatchListEntry>) {
        self.entries = Arc::new(entries);
        self.revision += 1;
    }
}

impl WatchListRepository for InMemoryWatchList {
    fn list(&self) -> Arc<Vec<WatchListEntry>> {
        Arc::clone(&self.entries)
    }

    fn add(&mut self, draft: EntryDraft) -> WatchListEntry {
        let id = match draft.id.clone() {
            Some(id) if !id.is_empty() && !self.contains_id(&id) => id,
            Some(taken) => {
                debug!(operation = "add", id = %taken, "Draft id already in use, assigning a new one");
                self.fresh_id()
            }
            None => self.fresh_id(),
        };

        let entry = draft.into_entry(id);
        let mut next = self.entries.as_ref().clone();
        next.push(entry.clone());
        self.replace(next);

        debug!(operation = "add", id = %entry.id, title = %entry.title, "Added entry");
        entry
    }

    fn update(&mut self, id: &str, update: &EntryUpdate) -> bool {
        if !self.contains_id(id) {
            debug!(operation = "update", id, "No entry with this id, ignoring");
            return false;
        }

        let next = self
            .entries
            .iter()
            .map(|entry| {
                if entry.id == id {
                    entry.apply_update(update)
                } else {
                    entry.clone()
                }
            })
            .collect();
        self.replace(next);

        debug!(operation = "update", id, "Updated entry");
        true
    }

    fn remove(&mut self, id: &str) -> bool {
        if !self.contains_id(id) {
            debug!(operation = "remove", id, "No entry with this id, ignoring");
            return false;
        }

        let next = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.replace(next);

        debug!(operation = "remove", id, "Removed entry");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_entries;
    use watchlist_models::WatchStatus;

    fn draft(title: &str) -> EntryDraft {
        EntryDraft {
            id: None,
            title: title.to_string(),
            genre: "Action".to_string(),
            year: 2022,
            image: "/placeholder.svg".to_string(),
            description: None,
            studio: None,
            total_episodes: 12,
            status: WatchStatus::PlanToWatch,
            progress: 0,
            rating: None,
            score: None,
            popularity: None,
            aired: None,
            duration: None,
        }
    }

    #[test]
    fn test_add_assigns_unique_ids_and_keeps_order() {
        let mut store = InMemoryWatchList::new();
        let first = store.add(draft("Chainsaw Man"));
        let second = store.add(draft("Chainsaw Man"));

        assert_ne!(first.id, second.id);
        let titles: Vec<String> = store.list().iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, vec!["Chainsaw Man", "Chainsaw Man"]);
    }

    #[test]
    fn test_add_keeps_unused_draft_id_and_replaces_taken_one() {
        let mut store = InMemoryWatchList::with_entries(seed_entries());
        let mut with_id = draft("Spy x Family");
        with_id.id = Some("custom".to_string());
        assert_eq!(store.add(with_id).id, "custom");

        let mut clashing = draft("Frieren");
        clashing.id = Some("1".to_string());
        let added = store.add(clashing);
        assert_ne!(added.id, "1");

        let ids: std::collections::HashSet<String> = store.list().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_update_changes_only_matching_entry() {
        let mut store = InMemoryWatchList::with_entries(seed_entries());
        let before = store.list();
        assert_eq!(before.len(), 5);

        assert!(store.update("2", &EntryUpdate::rating(7)));
        let after = store.list();

        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == "2" {
                let mut expected = old.clone();
                expected.rating = Some(7);
                assert_eq!(new, &expected);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut store = InMemoryWatchList::with_entries(seed_entries());
        let before = store.list();
        assert!(!store.update("missing", &EntryUpdate::rating(3)));
        assert_eq!(store.list(), before);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_remove() {
        let mut store = InMemoryWatchList::with_entries(seed_entries());
        assert!(store.remove("3"));
        assert!(!store.remove("3"));
        assert_eq!(store.len(), 4);
        assert!(store.get("3").is_none());
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let mut store = InMemoryWatchList::with_entries(seed_entries());
        let snapshot = store.list();
        store.update("1", &EntryUpdate::status(WatchStatus::Dropped));
        store.remove("5");

        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot[0].status, WatchStatus::Completed);
        assert!(!Arc::ptr_eq(&snapshot, &store.list()));
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_with_entries_drops_duplicate_ids() {
        let mut entries = seed_entries();
        entries.push(entries[0].clone());
        let store = InMemoryWatchList::with_entries(entries);
        assert_eq!(store.len(), 5);
    }
}
