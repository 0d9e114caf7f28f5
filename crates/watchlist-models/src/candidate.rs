use serde::{Deserialize, Serialize};
use crate::entry::EntryDraft;
use crate::status::WatchStatus;

/// A catalog search result that is not in the personal list yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: String, // Catalog-side id, replaced when the entry is stored
    pub title: String,
    pub genre: String,
    pub year: u32,
    pub total_episodes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Candidate {
    /// Case-insensitive substring match on the title
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Turn the candidate into an insertable draft.
    ///
    /// A `Completed` default starts with every episode watched; any other
    /// status starts at zero. The rating is always left unset.
    pub fn to_draft(&self, default_status: WatchStatus) -> EntryDraft {
        let progress = if default_status == WatchStatus::Completed {
            self.total_episodes
        } else {
            0
        };

        EntryDraft {
            id: None,
            title: self.title.clone(),
            genre: self.genre.clone(),
            year: self.year,
            image: self.image.clone(),
            description: self.description.clone(),
            studio: None,
            total_episodes: self.total_episodes,
            status: default_status,
            progress,
            rating: None,
            score: self.score,
            popularity: None,
            aired: None,
            duration: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frieren() -> Candidate {
        Candidate {
            id: "search-1".to_string(),
            title: "Frieren: Beyond Journey's End".to_string(),
            genre: "Fantasy".to_string(),
            year: 2023,
            total_episodes: 28,
            score: Some(9.2),
            image: "/frieren-anime-poster.png".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_matches_ignores_case() {
        assert!(frieren().matches("FRIEREN"));
        assert!(frieren().matches("journey"));
        assert!(!frieren().matches("chainsaw"));
    }

    #[test]
    fn test_to_draft_completed_fills_progress() {
        let draft = frieren().to_draft(WatchStatus::Completed);
        assert_eq!(draft.progress, 28);
        assert_eq!(draft.rating, None);
        assert_eq!(draft.id, None);
    }

    #[test]
    fn test_to_draft_other_status_starts_at_zero() {
        for status in [WatchStatus::Watching, WatchStatus::PlanToWatch, WatchStatus::Dropped] {
            let draft = frieren().to_draft(status);
            assert_eq!(draft.progress, 0);
            assert_eq!(draft.status, status);
        }
    }
}
