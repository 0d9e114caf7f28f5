use tracing::info;
use watchlist_catalog::{CatalogSource, SearchCoordinator, SearchOutcome};
use watchlist_models::{Candidate, WatchListEntry, WatchStatus};
use crate::error::{Error, Result};
use crate::store::WatchListRepository;

/// Look up candidates, mapping catalog failures into [`Error::Catalog`]
pub async fn search_catalog<S: CatalogSource>(
    coordinator: &SearchCoordinator<S>,
    query: &str,
) -> Result<SearchOutcome> {
    coordinator
        .search(query)
        .await
        .map_err(|e| Error::Catalog(Box::new(e)))
}

/// Insert `candidate` into the list with `default_status`.
///
/// A `Completed` default marks every episode watched; the rating starts unset.
pub fn add_candidate<R: WatchListRepository + ?Sized>(
    repo: &mut R,
    candidate: &Candidate,
    default_status: WatchStatus,
) -> WatchListEntry {
    let entry = repo.add(candidate.to_draft(default_status));
    info!(
        operation = "add_candidate",
        catalog_id = %candidate.id,
        id = %entry.id,
        status = %entry.status,
        "{} has been added to your list.",
        entry.title
    );
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_entries;
    use crate::store::InMemoryWatchList;
    use watchlist_catalog::MockCatalog;

    #[tokio::test(start_paused = true)]
    async fn test_search_then_add_completed() {
        let coordinator = SearchCoordinator::new(MockCatalog::default());
        let mut store = InMemoryWatchList::with_entries(seed_entries());

        let outcome = search_catalog(&coordinator, "Frieren").await.unwrap();
        let candidate = &outcome.candidates()[0];
        let entry = add_candidate(&mut store, candidate, WatchStatus::Completed);

        assert_eq!(store.len(), 6);
        assert_ne!(entry.id, candidate.id);
        assert_eq!(entry.progress, 28);
        assert_eq!(entry.rating, None);
        assert_eq!(store.list().last().unwrap().title, "Frieren: Beyond Journey's End");
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_plan_to_watch_starts_at_zero() {
        let coordinator = SearchCoordinator::new(MockCatalog::default());
        let mut store = InMemoryWatchList::new();

        let outcome = search_catalog(&coordinator, "chainsaw").await.unwrap();
        let entry = add_candidate(&mut store, &outcome.candidates()[0], WatchStatus::PlanToWatch);
        assert_eq!(entry.progress, 0);
        assert_eq!(entry.status, WatchStatus::PlanToWatch);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_candidate_can_be_added_twice() {
        let coordinator = SearchCoordinator::new(MockCatalog::default());
        let mut store = InMemoryWatchList::new();

        let outcome = search_catalog(&coordinator, "Spy").await.unwrap();
        let candidate = &outcome.candidates()[0];
        let first = add_candidate(&mut store, candidate, WatchStatus::Watching);
        let second = add_candidate(&mut store, candidate, WatchStatus::Watching);
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }
}
