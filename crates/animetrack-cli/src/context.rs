use color_eyre::eyre::{eyre, Result};
use watchlist_catalog::{MockCatalog, SearchCoordinator};
use watchlist_config::{Config, PathManager};
use watchlist_core::{seed_entries, Dashboard, FileSlot, InMemoryWatchList, ListViewController, SessionManager};

/// Paths and configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        Self::with_paths(PathManager::default())
    }

    pub fn with_paths(paths: PathManager) -> Result<Self> {
        let config = Config::load_or_default(&paths.config_file()).map_err(|e| eyre!("{:#}", e))?;
        Ok(Self { paths, config })
    }

    pub fn session(&self) -> Result<SessionManager<FileSlot>> {
        let slot = FileSlot::open(self.paths.session_file()).map_err(|e| eyre!("{:#}", e))?;
        Ok(SessionManager::init(slot, self.config.session.storage_key.clone())?)
    }

    /// Dashboard over a freshly seeded in-memory list, reseeded on logout
    pub fn dashboard(&self) -> Result<Dashboard<FileSlot>> {
        let view = ListViewController::new(
            self.config.list.default_status_filter,
            self.config.list.default_sort,
        );
        Ok(Dashboard::new(
            self.session()?,
            || InMemoryWatchList::with_entries(seed_entries()),
            view,
        ))
    }

    pub fn catalog(&self) -> SearchCoordinator<MockCatalog> {
        SearchCoordinator::new(MockCatalog::from_config(&self.config.catalog))
    }
}
