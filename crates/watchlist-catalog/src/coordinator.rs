use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use watchlist_models::Candidate;
use crate::traits::CatalogSource;

/// Result of one search through the [`SearchCoordinator`]
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank query, nothing was looked up
    Skipped,
    /// A newer search started before this one resolved; its results are dropped
    Stale,
    Completed(Vec<Candidate>),
}

impl SearchOutcome {
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            SearchOutcome::Completed(results) => results,
            SearchOutcome::Skipped | SearchOutcome::Stale => &[],
        }
    }
}

/// Last-write-wins wrapper around a [`CatalogSource`]
///
/// Every search takes a ticket from a shared counter. In-flight lookups are
/// never cancelled; when one resolves and a later ticket has been issued in
/// the meantime, its results are reported as [`SearchOutcome::Stale`].
pub struct SearchCoordinator<S> {
    source: Arc<S>,
    latest_ticket: Arc<AtomicU64>,
}

impl<S> Clone for SearchCoordinator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            latest_ticket: Arc::clone(&self.latest_ticket),
        }
    }
}

impl<S: CatalogSource> SearchCoordinator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            latest_ticket: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn search(&self, query: &str) -> Result<SearchOutcome, S::Error> {
        if query.trim().is_empty() {
            return Ok(SearchOutcome::Skipped);
        }

        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(operation = "search_start", ticket, query = %query, "Starting catalog search");

        let results = self.source.search(query).await?;

        let latest = self.latest_ticket.load(Ordering::SeqCst);
        if latest != ticket {
            info!(
                operation = "search_stale",
                ticket,
                latest,
                "Dropping results of superseded search"
            );
            return Ok(SearchOutcome::Stale);
        }

        Ok(SearchOutcome::Completed(results))
    }
}
