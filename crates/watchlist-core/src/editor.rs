use tracing::info;
use watchlist_models::{EntryUpdate, WatchListEntry, WatchStatus, MAX_RATING};
use crate::store::WatchListRepository;

/// Status after a progress change made with the +/- controls.
///
/// Reaching the last episode while `Watching` completes the entry; stepping
/// back below the total from `Completed` reopens it as `Watching`. Every
/// other combination keeps `old_status`.
pub fn derive_status(
    old_status: WatchStatus,
    old_progress: u32,
    new_progress: u32,
    total: u32,
) -> WatchStatus {
    if new_progress > old_progress && new_progress == total && old_status == WatchStatus::Watching {
        return WatchStatus::Completed;
    }
    if new_progress < old_progress && new_progress < total && old_status == WatchStatus::Completed {
        return WatchStatus::Watching;
    }
    old_status
}

/// Read a typed progress value the way a numeric text field does: leading
/// integer digits count, anything unparsable is 0, negatives floor at 0.
pub fn parse_progress_input(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(d);
    }

    if negative || !seen_digit {
        0
    } else {
        value
    }
}

/// Confirmation produced by [`EntryEditor::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub id: String,
    pub title: String,
    /// False when the entry disappeared from the list while the editor was open
    pub applied: bool,
}

impl SaveReceipt {
    pub fn message(&self) -> String {
        if self.applied {
            format!("{} has been updated successfully.", self.title)
        } else {
            format!("{} is no longer in your list.", self.title)
        }
    }
}

/// Uncommitted edits to a single entry
///
/// Opened on a snapshot of the entry. Nothing reaches the list until
/// [`EntryEditor::save`]; [`EntryEditor::cancel`] drops the edits.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryEditor {
    entry: WatchListEntry,
    status: WatchStatus,
    progress: u32,
    rating: Option<u8>,
    review: String,
}

impl EntryEditor {
    pub fn open(entry: WatchListEntry) -> Self {
        Self {
            status: entry.status,
            progress: entry.progress,
            rating: entry.rating,
            review: entry.review.clone().unwrap_or_default(),
            entry,
        }
    }

    /// The snapshot the editor was opened on
    pub fn entry(&self) -> &WatchListEntry {
        &self.entry
    }

    pub fn status(&self) -> WatchStatus {
        self.status
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn total_episodes(&self) -> u32 {
        self.entry.total_episodes
    }

    pub fn increment_progress(&mut self) {
        let total = self.total_episodes();
        if self.progress >= total {
            return;
        }
        let next = self.progress + 1;
        self.status = derive_status(self.status, self.progress, next, total);
        self.progress = next;
    }

    pub fn decrement_progress(&mut self) {
        if self.progress == 0 {
            return;
        }
        let next = self.progress - 1;
        self.status = derive_status(self.status, self.progress, next, self.total_episodes());
        self.progress = next;
    }

    /// Direct numeric entry; clamped, and never changes the status
    pub fn set_progress_input(&mut self, input: &str) {
        self.set_progress(parse_progress_input(input));
    }

    pub fn set_progress(&mut self, progress: u32) {
        self.progress = progress.min(self.total_episodes());
    }

    pub fn set_status(&mut self, status: WatchStatus) {
        self.status = status;
    }

    /// Star clicked in the 1-10 row
    pub fn set_rating(&mut self, star: u8) {
        self.rating = Some(star.clamp(1, MAX_RATING));
    }

    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = review.into();
    }

    pub fn is_dirty(&self) -> bool {
        self.status != self.entry.status
            || self.progress != self.entry.progress
            || self.rating != self.entry.rating
            || self.review != self.entry.review.clone().unwrap_or_default()
    }

    /// Fields committed on save
    pub fn to_update(&self) -> EntryUpdate {
        EntryUpdate {
            status: Some(self.status),
            progress: Some(self.progress),
            rating: self.rating,
            review: self.review_update(),
        }
    }

    /// `None` leaves an unreviewed entry unreviewed; an empty string clears
    /// a review the user blanked out
    fn review_update(&self) -> Option<String> {
        if !self.review.trim().is_empty() {
            Some(self.review.clone())
        } else if self.entry.review.is_some() {
            Some(String::new())
        } else {
            None
        }
    }

    /// Commit the edits in one `update` call and close the editor
    pub fn save<R: WatchListRepository + ?Sized>(self, repo: &mut R) -> SaveReceipt {
        let applied = repo.update(&self.entry.id, &self.to_update());
        info!(
            operation = "entry_save",
            id = %self.entry.id,
            status = %self.status,
            progress = self.progress,
            applied,
            "Saved entry edits"
        );
        SaveReceipt {
            id: self.entry.id,
            title: self.entry.title,
            applied,
        }
    }

    /// Close without touching the list
    pub fn cancel(self) {}
}
