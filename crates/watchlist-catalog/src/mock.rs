use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use watchlist_config::CatalogConfig;
use watchlist_models::Candidate;
use crate::error::CatalogError;
use crate::traits::CatalogSource;

/// Fixed candidate set served by [`MockCatalog`]
pub fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "search-1".to_string(),
            title: "Frieren: Beyond Journey's End".to_string(),
            genre: "Fantasy".to_string(),
            year: 2023,
            total_episodes: 28,
            score: Some(9.2),
            image: "/frieren-anime-poster.png".to_string(),
            description: Some(
                "An elf mage embarks on a journey to understand humans and mortality.".to_string(),
            ),
        },
        Candidate {
            id: "search-2".to_string(),
            title: "Chainsaw Man".to_string(),
            genre: "Action".to_string(),
            year: 2022,
            total_episodes: 12,
            score: Some(8.8),
            image: "/chainsaw-man-poster.png".to_string(),
            description: Some(
                "A young man becomes a devil hunter to pay off his father's debt.".to_string(),
            ),
        },
        Candidate {
            id: "search-3".to_string(),
            title: "Spy x Family".to_string(),
            genre: "Comedy".to_string(),
            year: 2022,
            total_episodes: 25,
            score: Some(9.0),
            image: "/spy-family-poster.png".to_string(),
            description: Some(
                "A spy must create a fake family to complete his mission.".to_string(),
            ),
        },
    ]
}

/// In-process catalog that answers after a fixed simulated latency
pub struct MockCatalog {
    candidates: Vec<Candidate>,
    latency: Duration,
}

impl MockCatalog {
    pub fn new(candidates: Vec<Candidate>, latency: Duration) -> Self {
        Self { candidates, latency }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(default_candidates(), config.search_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    type Error = CatalogError;

    fn source_name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &str) -> Result<Vec<Candidate>, CatalogError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        tokio::time::sleep(self.latency).await;

        let results: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|candidate| candidate.matches(query))
            .cloned()
            .collect();

        debug!(
            operation = "catalog_search",
            source = self.source_name(),
            query = %query,
            results = results.len(),
            "Catalog search finished"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_search_single_match() {
        let catalog = MockCatalog::default();
        let results = catalog.search("Frieren").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Frieren: Beyond Journey's End");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_no_match_after_delay() {
        let catalog = MockCatalog::default();
        let started = tokio::time::Instant::now();
        let results = catalog.search("zzz").await.unwrap();
        assert!(results.is_empty());
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_skips_lookup() {
        let catalog = MockCatalog::default();
        let started = tokio::time::Instant::now();
        let results = catalog.search("   ").await.unwrap();
        assert!(results.is_empty());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_case_insensitive_substring() {
        let catalog = MockCatalog::new(default_candidates(), Duration::from_millis(5));
        let results = catalog.search("MAN").await.unwrap();
        let titles: Vec<&str> = results.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Chainsaw Man"]);

        let results = catalog.search("spy X").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "search-3");
    }
}
