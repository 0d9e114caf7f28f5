use serde::{Deserialize, Serialize};
use crate::status::WatchStatus;

/// Highest value on the rating scale (ratings are whole stars 0-10)
pub const MAX_RATING: u8 = 10;

/// One title tracked in a user's personal list
///
/// Descriptive fields (`title`, `genre`, `year`, ...) are fixed once the entry
/// is created. Only `status`, `progress`, `rating` and `review` change, and
/// only through [`WatchListEntry::apply_update`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchListEntry {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub year: u32,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    pub total_episodes: u32,
    pub status: WatchStatus,
    pub progress: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,

    // Display-only metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aired: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl WatchListEntry {
    /// Fraction of episodes watched, in `[0.0, 1.0]`
    pub fn progress_ratio(&self) -> f64 {
        if self.total_episodes == 0 {
            return 0.0;
        }
        self.progress as f64 / self.total_episodes as f64
    }

    /// Rating with "unrated" read as 0, as used for sorting
    pub fn rating_or_zero(&self) -> u8 {
        self.rating.unwrap_or(0)
    }

    /// Clamp a progress value into `[0, total_episodes]`
    pub fn clamp_progress(&self, progress: u32) -> u32 {
        progress.min(self.total_episodes)
    }

    /// Return a copy with the partial fields of `update` merged in.
    ///
    /// Progress and rating are clamped to their valid ranges; every other
    /// field is carried over untouched.
    pub fn apply_update(&self, update: &EntryUpdate) -> WatchListEntry {
        let mut next = self.clone();
        if let Some(status) = update.status {
            next.status = status;
        }
        if let Some(progress) = update.progress {
            next.progress = self.clamp_progress(progress);
        }
        if let Some(rating) = update.rating {
            next.rating = Some(rating.min(MAX_RATING));
        }
        // A blank review clears it
        if let Some(review) = &update.review {
            next.review = (!review.trim().is_empty()).then(|| review.clone());
        }
        next
    }
}

/// An entry that has not been inserted into a list yet
///
/// `id` is normally `None`; the store assigns one on insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub genre: String,
    pub year: u32,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub studio: Option<String>,
    pub total_episodes: u32,
    pub status: WatchStatus,
    pub progress: u32,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub aired: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl EntryDraft {
    /// Build the stored entry under `id`, clamping progress and rating.
    pub fn into_entry(self, id: String) -> WatchListEntry {
        WatchListEntry {
            id,
            progress: self.progress.min(self.total_episodes),
            rating: self.rating.map(|r| r.min(MAX_RATING)),
            title: self.title,
            genre: self.genre,
            year: self.year,
            image: self.image,
            description: self.description,
            studio: self.studio,
            total_episodes: self.total_episodes,
            status: self.status,
            review: None,
            score: self.score,
            popularity: self.popularity,
            aired: self.aired,
            duration: self.duration,
        }
    }
}

/// Partial fields merged into an existing entry by `update(id, ...)`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl EntryUpdate {
    pub fn rating(rating: u8) -> Self {
        Self {
            rating: Some(rating),
            ..Self::default()
        }
    }

    pub fn status(status: WatchStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.progress.is_none()
            && self.rating.is_none()
            && self.review.is_none()
    }
}
