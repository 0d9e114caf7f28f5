use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::status::WatchStatus;

/// Ordering applied to the visible list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Title, ascending
    #[default]
    Title,
    /// Rating, descending (unrated counts as 0)
    Rating,
    /// Release year, descending
    Year,
    /// Watched fraction, descending
    Progress,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Title, SortKey::Rating, SortKey::Year, SortKey::Progress];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Rating => "rating",
            SortKey::Year => "year",
            SortKey::Progress => "progress",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "rating" => Ok(SortKey::Rating),
            "year" => Ok(SortKey::Year),
            "progress" => Ok(SortKey::Progress),
            _ => Err(format!("Invalid sort key: {}. Use 'title', 'rating', 'year', or 'progress'", s)),
        }
    }
}

/// Status restriction applied before sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(WatchStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: WatchStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<WatchStatus>()
            .map(StatusFilter::Only)
            .map_err(|e| e.to_string())
    }
}

// Stored as the plain string ("all", "watching", ...) in config files
impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "on-hold".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(WatchStatus::OnHold))
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_serde_as_string() {
        let json = serde_json::to_string(&StatusFilter::Only(WatchStatus::Completed)).unwrap();
        assert_eq!(json, "\"completed\"");
        let parsed: StatusFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, StatusFilter::All);
    }

    #[test]
    fn test_sort_key_parse_and_default() {
        assert_eq!(SortKey::default(), SortKey::Title);
        assert_eq!("Progress".parse::<SortKey>(), Ok(SortKey::Progress));
        assert!("popularity".parse::<SortKey>().is_err());
    }
}
