//! Session probe and storage seams
//!
//! The page only needs two things from the session: whether a token is
//! present, and a way to wipe everything on logout.

use crate::constants::SESSION_TOKEN_KEY;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Answers whether a session token is currently present
pub trait SessionProbe: Send + Sync {
    fn is_user_login(&self) -> bool;
}

/// Key/value session storage
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Any storage doubles as a probe: logged in means a non-empty token
pub fn token_present(storage: &dyn Storage) -> bool {
    matches!(storage.get(SESSION_TOKEN_KEY), Ok(Some(token)) if !token.is_empty())
}

/// In-process storage for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.entries_mut().insert(SESSION_TOKEN_KEY.into(), token.into());
        storage
    }

    fn entries_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.entries_mut().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries_mut().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries_mut().insert(key.into(), value.into());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
impl SessionProbe for MemoryStorage {
    fn is_user_login(&self) -> bool {
        token_present(self)
    }
}
