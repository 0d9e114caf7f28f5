use serde::Serialize;
use std::collections::BTreeMap;
use watchlist_models::{WatchListEntry, WatchStatus};

/// Summary numbers shown on the profile page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchListStats {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub episodes_watched: u64,
    /// Mean over rated entries only; `None` when nothing is rated
    pub mean_rating: Option<f64>,
}

impl WatchListStats {
    pub fn from_entries(entries: &[WatchListEntry]) -> Self {
        let mut by_status: BTreeMap<String, usize> = WatchStatus::ALL
            .iter()
            .map(|status| (status.to_string(), 0))
            .collect();
        for entry in entries {
            *by_status.entry(entry.status.to_string()).or_default() += 1;
        }

        let episodes_watched = entries.iter().map(|entry| u64::from(entry.progress)).sum();

        let ratings: Vec<u8> = entries.iter().filter_map(|entry| entry.rating).collect();
        let mean_rating = if ratings.is_empty() {
            None
        } else {
            let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
            Some(f64::from(sum) / ratings.len() as f64)
        };

        Self {
            total: entries.len(),
            by_status,
            episodes_watched,
            mean_rating,
        }
    }

    pub fn count(&self, status: WatchStatus) -> usize {
        self.by_status.get(status.as_str()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_entries;

    #[test]
    fn test_stats_for_seed_list() {
        let stats = WatchListStats::from_entries(&seed_entries());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.count(WatchStatus::Completed), 2);
        assert_eq!(stats.count(WatchStatus::Watching), 1);
        assert_eq!(stats.count(WatchStatus::Dropped), 0);
        assert_eq!(stats.episodes_watched, 87 + 8 + 1 + 450);
        // 9, 10, 8 rated; two entries unrated
        assert_eq!(stats.mean_rating, Some(9.0));
    }

    #[test]
    fn test_stats_for_empty_list() {
        let stats = WatchListStats::from_entries(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.episodes_watched, 0);
        assert_eq!(stats.mean_rating, None);
        assert_eq!(stats.by_status.len(), 5);
    }
}
