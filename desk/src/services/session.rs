//! # Session Storage
//!
//! Persistent key-value storage for the login session, the desktop
//! counterpart of browser local storage. Two keys are used:
//!
//! - `authToken`: opaque token string (only when the backend issued one)
//! - `currentUser`: the logged-in user as JSON
//!
//! [`FileStorage`] keeps every key in one pretty-printed JSON object file;
//! [`MemoryStorage`] backs tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use shared::UserInfo;

use crate::core::error::Result;

/// Storage key for the auth token
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key for the serialized current user
pub const CURRENT_USER_KEY: &str = "currentUser";

/// String key-value store
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// JSON object file on disk.
///
/// Entries are cached in memory and written through on every change.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = Self::load(&path)?;
        tracing::debug!(path = %path.display(), keys = entries.len(), "Session storage opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Like [`FileStorage::open`], but an unreadable file is logged and
    /// replaced by empty storage (overwritten on the next write).
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable session file");
                Self {
                    path,
                    entries: Mutex::new(BTreeMap::new()),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Volatile storage
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// An authenticated user plus the token the backend issued, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserInfo,
    pub auth_token: Option<String>,
}

impl Session {
    pub fn new(user: UserInfo, auth_token: Option<String>) -> Self {
        Self { user, auth_token }
    }
}

/// Reads and writes a [`Session`] through a [`SessionStorage`]
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Load the stored session.
    ///
    /// `currentUser` is required; an unreadable user entry is discarded and
    /// treated as logged out.
    pub fn restore(&self) -> Result<Option<Session>> {
        let Some(raw_user) = self.storage.get(CURRENT_USER_KEY)? else {
            return Ok(None);
        };

        let user: UserInfo = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored user");
                self.clear()?;
                return Ok(None);
            }
        };

        let auth_token = self.storage.get(AUTH_TOKEN_KEY)?;
        Ok(Some(Session { user, auth_token }))
    }

    /// Persist `session`, replacing whatever was stored.
    pub fn persist(&self, session: &Session) -> Result<()> {
        match &session.auth_token {
            Some(token) => self.storage.set(AUTH_TOKEN_KEY, token)?,
            None => self.storage.remove(AUTH_TOKEN_KEY)?,
        }
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(CURRENT_USER_KEY, &user)
    }

    /// Remove both session keys.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(AUTH_TOKEN_KEY)?;
        self.storage.remove(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_session() -> Session {
        Session::new(
            UserInfo {
                full_name: Some("Maria Lopez".to_string()),
                ..UserInfo::new("maria")
            },
            Some("demo-token-1700000000000".to_string()),
        )
    }

    #[test]
    fn test_memory_round_trip_and_clear() {
        let store = SessionStore::new(Box::new(MemoryStorage::new()));
        assert_eq!(store.restore().unwrap(), None);

        store.persist(&sample_session()).unwrap();
        assert_eq!(store.restore().unwrap(), Some(sample_session()));

        store.clear().unwrap();
        assert_eq!(store.restore().unwrap(), None);
    }

    #[test]
    fn test_session_without_token() {
        let store = SessionStore::new(Box::new(MemoryStorage::new()));
        store.persist(&sample_session()).unwrap();

        let remote = Session::new(UserInfo::new("admin"), None);
        store.persist(&remote).unwrap();

        let restored = store.restore().unwrap().unwrap();
        assert_eq!(restored.user.username, "admin");
        assert_eq!(restored.auth_token, None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = SessionStore::new(Box::new(FileStorage::open(&path).unwrap()));
        store.persist(&sample_session()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["authToken"], "demo-token-1700000000000");
        assert!(json["currentUser"].as_str().unwrap().contains("\"fullName\":\"Maria Lopez\""));

        let reopened = SessionStore::new(Box::new(FileStorage::open(&path).unwrap()));
        assert_eq!(reopened.restore().unwrap(), Some(sample_session()));

        reopened.clear().unwrap();
        let after_clear = SessionStore::new(Box::new(FileStorage::open(&path).unwrap()));
        assert_eq!(after_clear.restore().unwrap(), None);
    }

    #[test]
    fn test_file_storage_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(FileStorage::open(&path).is_err());

        let storage = FileStorage::open_or_reset(&path);
        assert_eq!(storage.get(CURRENT_USER_KEY).unwrap(), None);
        storage.set(CURRENT_USER_KEY, "{}").unwrap();
        assert!(FileStorage::open(&path).is_ok());
    }

    #[test]
    fn test_unreadable_user_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(CURRENT_USER_KEY, "{broken").unwrap();
        storage.set(AUTH_TOKEN_KEY, "t").unwrap();

        let store = SessionStore::new(Box::new(storage));
        assert_eq!(store.restore().unwrap(), None);
        assert_eq!(store.restore().unwrap(), None);
    }
}
