use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use watchlist_models::{SortKey, StatusFilter, WatchStatus};

/// Slot key the session record is stored under
pub const DEFAULT_SESSION_KEY: &str = "anime-tracker-user";

/// Upper bound accepted for the simulated catalog latency
const MAX_SEARCH_LATENCY_MS: u64 = 60_000;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Simulated lookup latency in milliseconds
    #[serde(default = "default_search_latency_ms")]
    pub search_latency_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListConfig {
    #[serde(default)]
    pub default_sort: SortKey,
    #[serde(default)]
    pub default_status_filter: StatusFilter,
    /// Status given to titles added from the catalog
    #[serde(default = "default_add_status")]
    pub default_add_status: WatchStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Force JSON on or off; unset means JSON whenever stdout is not a terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_search_latency_ms() -> u64 {
    1000
}

fn default_add_status() -> WatchStatus {
    WatchStatus::PlanToWatch
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_latency_ms: default_search_latency_ms(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            default_status_filter: StatusFilter::default(),
            default_add_status: default_add_status(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Whether log lines are emitted as JSON, checked at the time of the call
    pub fn json_output(&self) -> bool {
        use std::io::IsTerminal;
        self.json.unwrap_or_else(|| !std::io::stdout().is_terminal())
    }
}

impl CatalogConfig {
    pub fn search_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_latency_ms)
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load `path`, or fall back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.session.storage_key.trim().is_empty() {
            return Err(anyhow::anyhow!("session.storage_key cannot be empty"));
        }

        if self.catalog.search_latency_ms > MAX_SEARCH_LATENCY_MS {
            return Err(anyhow::anyhow!(
                "catalog.search_latency_ms must be at most {} (got {})",
                MAX_SEARCH_LATENCY_MS,
                self.catalog.search_latency_ms
            ));
        }

        Ok(())
    }
}
