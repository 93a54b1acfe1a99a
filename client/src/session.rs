//! Session persistence.
//!
//! DESIGN
//! ======
//! The controller never touches global storage; it is handed a
//! [`SessionStore`] with a three-operation interface. The file-backed store
//! keeps the browser key-value layout: a flat JSON object whose `token` entry
//! is the bearer token and whose `user` entry is the user record serialized to
//! a JSON string.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use models::{Session, User};

use crate::error::StoreError;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Holds at most one session; `set` replaces whatever was there.
pub trait SessionStore: Send + Sync {
    /// The stored session, or `None` when either half is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self) -> Result<Option<Session>, StoreError>;

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { slot: Mutex::new(Some(session)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn set(&self, session: &Session) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// =============================================================================
// FILE
// =============================================================================

/// JSON key-value file. A missing or empty file is an empty store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<Session>, StoreError> {
        let entries = self.read_entries()?;
        let (Some(token), Some(raw_user)) = (entries.get(TOKEN_KEY), entries.get(USER_KEY)) else {
            return Ok(None);
        };
        if token.is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<User>(raw_user) {
            Ok(user) => Ok(Some(Session { token: token.clone(), user })),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "stored user is unreadable; ignoring session");
                Ok(None)
            }
        }
    }

    fn set(&self, session: &Session) -> Result<(), StoreError> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(TOKEN_KEY.to_owned(), session.token.clone());
        entries.insert(USER_KEY.to_owned(), serde_json::to_string(&session.user)?);
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
        self.write_entries(&entries)
    }
}
