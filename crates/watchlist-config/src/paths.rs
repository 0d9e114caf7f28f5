use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path from `ANIMETRACK_BASE_PATH`, if set
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("ANIMETRACK_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("animetrack");

        Ok(Self::from_base(base_dir))
    }

    /// Config files at `base`, data and logs in subdirectories
    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Durable key-value slot holding the session record
    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join("session.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("animetrack.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }

        // Platform config dir (e.g. ~/.config/animetrack on Linux), else the working directory
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".animetrack")))
    }
}
