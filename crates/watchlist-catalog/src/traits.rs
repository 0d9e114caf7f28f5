use async_trait::async_trait;
use watchlist_models::Candidate;

/// External title lookup used to find candidates for the personal list
#[async_trait]
pub trait CatalogSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn source_name(&self) -> &str;

    /// Titles containing `query` (case-insensitive). A blank query performs
    /// no lookup and yields no candidates.
    async fn search(&self, query: &str) -> Result<Vec<Candidate>, Self::Error>;
}
