use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Watch state of a single entry in the personal list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    /// Currently watching
    Watching,
    /// Finished watching
    Completed,
    /// Paused for now
    OnHold,
    /// Stopped watching
    Dropped,
    /// Not started yet
    PlanToWatch,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 5] = [
        WatchStatus::Watching,
        WatchStatus::Completed,
        WatchStatus::OnHold,
        WatchStatus::Dropped,
        WatchStatus::PlanToWatch,
    ];

    /// Wire name, as stored and as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "watching",
            WatchStatus::Completed => "completed",
            WatchStatus::OnHold => "on-hold",
            WatchStatus::Dropped => "dropped",
            WatchStatus::PlanToWatch => "plan-to-watch",
        }
    }

    /// Human-readable label used by renderers
    pub fn label(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Completed",
            WatchStatus::OnHold => "On Hold",
            WatchStatus::Dropped => "Dropped",
            WatchStatus::PlanToWatch => "Plan to Watch",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid status: {}. Use one of watching, completed, on-hold, dropped, plan-to-watch",
            self.0
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for WatchStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "watching" => Ok(WatchStatus::Watching),
            "completed" => Ok(WatchStatus::Completed),
            "on-hold" => Ok(WatchStatus::OnHold),
            "dropped" => Ok(WatchStatus::Dropped),
            "plan-to-watch" => Ok(WatchStatus::PlanToWatch),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&WatchStatus::PlanToWatch).unwrap();
        assert_eq!(json, "\"plan-to-watch\"");
        let parsed: WatchStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(parsed, WatchStatus::OnHold);
    }

    #[test]
    fn test_status_from_str_is_lenient() {
        assert_eq!("Completed".parse::<WatchStatus>(), Ok(WatchStatus::Completed));
        assert_eq!("plan_to_watch".parse::<WatchStatus>(), Ok(WatchStatus::PlanToWatch));
        assert!("finished".parse::<WatchStatus>().is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(WatchStatus::OnHold.label(), "On Hold");
        assert_eq!(WatchStatus::PlanToWatch.to_string(), "plan-to-watch");
    }
}
