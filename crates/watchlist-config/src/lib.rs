pub mod config;
pub mod kv_store;
pub mod paths;

pub use config::{CatalogConfig, Config, ListConfig, LoggingConfig, SessionConfig, DEFAULT_SESSION_KEY};
pub use kv_store::KeyValueStore;
pub use paths::{PathManager, base_path_override};
