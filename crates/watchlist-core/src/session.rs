use chrono::Utc;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};
use watchlist_config::KeyValueStore;
use watchlist_models::Session;
use crate::error::{Error, Result};

/// Durable key-value slot the session record lives in
pub trait SessionSlot {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&mut self, key: &str, value: String) -> anyhow::Result<()>;
    fn clear(&mut self, key: &str) -> anyhow::Result<()>;
}

/// Slot backed by a TOML key-value file on disk
pub struct FileSlot {
    store: KeyValueStore,
}

impl FileSlot {
    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        Ok(Self {
            store: KeyValueStore::open(path)?,
        })
    }
}

impl SessionSlot for FileSlot {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.store.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.store.set(key.to_string(), value)
    }

    fn clear(&mut self, key: &str) -> anyhow::Result<()> {
        self.store.remove(key)
    }
}

/// Process-local slot, used in tests and for throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    values: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl SessionSlot for MemorySlot {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self, key: &str) -> anyhow::Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

struct MockAccount {
    email: &'static str,
    password: &'static str,
    id: &'static str,
    username: &'static str,
    avatar: &'static str,
    is_admin: bool,
}

// Mock credentials; there is no real account backend
const MOCK_ACCOUNTS: [MockAccount; 2] = [
    MockAccount {
        email: "admin@example.com",
        password: "admin",
        id: "1",
        username: "admin",
        avatar: "/anime-admin-avatar.jpg",
        is_admin: true,
    },
    MockAccount {
        email: "user@example.com",
        password: "user",
        id: "2",
        username: "otaku_fan",
        avatar: "/anime-fan-avatar.png",
        is_admin: false,
    },
];

const NEW_USER_AVATAR: &str = "/new-anime-user-avatar.jpg";

/// Current authenticated identity plus the slot it is persisted in
///
/// Created with [`SessionManager::init`], which restores a previously saved
/// session if the slot holds one. Pass it explicitly to whatever needs the
/// identity; there is no global instance.
pub struct SessionManager<S: SessionSlot> {
    slot: S,
    key: String,
    current: Option<Session>,
}

impl<S: SessionSlot> SessionManager<S> {
    /// Load the session stored under `key`, or start logged out.
    ///
    /// A record that no longer parses is dropped from the slot.
    pub fn init(mut slot: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let stored = slot.read(&key).map_err(Error::Storage)?;

        let current = match stored {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    info!(operation = "session_restore", user_id = %session.id, "Restored saved session");
                    Some(session)
                }
                Err(e) => {
                    warn!(
                        operation = "session_restore",
                        error = %e,
                        "Saved session is unreadable, discarding it"
                    );
                    slot.clear(&key).map_err(Error::Storage)?;
                    None
                }
            },
            None => None,
        };

        Ok(Self { slot, key, current })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Returns `Ok(false)` for unknown credentials; the caller reports it.
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool> {
        let account = MOCK_ACCOUNTS
            .iter()
            .find(|account| account.email == email && account.password == password);

        let Some(account) = account else {
            info!(operation = "login", "Rejected login with unknown credentials");
            return Ok(false);
        };

        let session = Session {
            id: account.id.to_string(),
            username: account.username.to_string(),
            email: account.email.to_string(),
            avatar: Some(account.avatar.to_string()),
            join_date: Utc::now(),
            is_admin: account.is_admin,
        };
        self.persist(session)?;
        Ok(true)
    }

    /// Mock registration; always succeeds with a fresh non-admin identity.
    pub fn register(&mut self, username: &str, email: &str, _password: &str) -> Result<bool> {
        let now = Utc::now();
        let session = Session {
            id: now.timestamp_millis().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            avatar: Some(NEW_USER_AVATAR.to_string()),
            join_date: now,
            is_admin: false,
        };
        self.persist(session)?;
        Ok(true)
    }

    /// Clear the identity and delete the stored record
    pub fn logout(&mut self) -> Result<()> {
        if let Some(session) = self.current.take() {
            info!(operation = "logout", user_id = %session.id, "Logged out");
        }
        self.slot.clear(&self.key).map_err(Error::Storage)
    }

    fn persist(&mut self, session: Session) -> Result<()> {
        let raw = serde_json::to_string(&session)?;
        self.slot.write(&self.key, raw).map_err(Error::Storage)?;
        info!(
            operation = "login",
            user_id = %session.id,
            is_admin = session.is_admin,
            "Session started"
        );
        self.current = Some(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEY: &str = "anime-tracker-user";

    #[test]
    fn test_init_without_record_is_logged_out() {
        let manager = SessionManager::init(MemorySlot::new(), KEY).unwrap();
        assert!(!manager.is_authenticated());
        assert!(manager.current().is_none());
    }

    #[test]
    fn test_login_admin() {
        let mut manager = SessionManager::init(MemorySlot::new(), KEY).unwrap();
        assert!(manager.login("admin@example.com", "admin").unwrap());

        let session = manager.current().unwrap();
        assert_eq!(session.id, "1");
        assert_eq!(session.username, "admin");
        assert!(session.is_admin);
        assert!(manager.slot().read(KEY).unwrap().is_some());
    }

    #[test]
    fn test_login_regular_user() {
        let mut manager = SessionManager::init(MemorySlot::new(), KEY).unwrap();
        assert!(manager.login("user@example.com", "user").unwrap());
        let session = manager.current().unwrap();
        assert_eq!(session.username, "otaku_fan");
        assert!(!session.is_admin);
    }

    #[test]
    fn test_login_unknown_credentials_returns_false() {
        let mut manager = SessionManager::init(MemorySlot::new(), KEY).unwrap();
        assert!(!manager.login("admin@example.com", "wrong").unwrap());
        assert!(!manager.login("nobody@example.com", "admin").unwrap());
        assert!(!manager.is_authenticated());
        assert!(manager.slot().read(KEY).unwrap().is_none());
    }

    #[test]
    fn test_register_always_succeeds() {
        let mut manager = SessionManager::init(MemorySlot::new(), KEY).unwrap();
        assert!(manager.register("newbie", "newbie@example.com", "pw").unwrap());

        let session = manager.current().unwrap();
        assert_eq!(session.username, "newbie");
        assert_eq!(session.email, "newbie@example.com");
        assert!(!session.is_admin);
        assert!(session.id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_logout_clears_slot() {
        let mut manager = SessionManager::init(MemorySlot::new(), KEY).unwrap();
        manager.login("user@example.com", "user").unwrap();
        manager.logout().unwrap();

        assert!(!manager.is_authenticated());
        assert!(manager.slot().read(KEY).unwrap().is_none());
    }

    #[test]
    fn test_session_survives_restart_in_file_slot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");

        {
            let slot = FileSlot::open(path.clone()).unwrap();
            let mut manager = SessionManager::init(slot, KEY).unwrap();
            manager.login("admin@example.com", "admin").unwrap();
        }

        let slot = FileSlot::open(path.clone()).unwrap();
        let mut manager = SessionManager::init(slot, KEY).unwrap();
        assert_eq!(manager.current().map(|s| s.username.as_str()), Some("admin"));

        manager.logout().unwrap();
        let slot = FileSlot::open(path).unwrap();
        let manager = SessionManager::init(slot, KEY).unwrap();
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn test_corrupt_record_is_discarded() {
        let slot = MemorySlot::with_value(KEY, "{not json");
        let manager = SessionManager::init(slot, KEY).unwrap();
        assert!(!manager.is_authenticated());
        assert!(manager.slot().read(KEY).unwrap().is_none());
    }

    #[test]
    fn test_custom_key_is_respected() {
        let mut manager = SessionManager::init(MemorySlot::new(), "other-key").unwrap();
        manager.login("user@example.com", "user").unwrap();
        assert!(manager.slot().read("other-key").unwrap().is_some());
        assert!(manager.slot().read(KEY).unwrap().is_none());
    }
}
