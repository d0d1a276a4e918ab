//! Bearer token persistence
//!
//! A store holds at most one opaque token. Reads of a missing or expired
//! token return `None`, never an error.

use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Storage contract for the session's bearer token
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` if absent or expired
    fn get(&self) -> Option<String>;

    /// Persist a token with the given lifetime in days
    fn set(&self, token: &str, ttl_days: i64) -> Result<()>;

    /// Remove the token. Never fails; removal problems are logged and ignored.
    fn clear(&self);
}

impl<S: TokenStore + ?Sized> TokenStore for std::sync::Arc<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str, ttl_days: i64) -> Result<()> {
        (**self).set(token, ttl_days)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl StoredToken {
    fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// File-backed store used by the CLI, one JSON file under the config dir
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `$FOLIO_TOKEN_PATH` or `~/.config/folio/token.json`
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(custom) = std::env::var("FOLIO_TOKEN_PATH") {
            return Ok(PathBuf::from(custom));
        }
        let home = std::env::var("HOME")
            .map_err(|_| Error::Config("HOME environment variable not set".to_string()))?;
        Ok(PathBuf::from(home).join(".config").join("folio").join("token.json"))
    }

    fn read(&self) -> Option<StoredToken> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let stored = self.read()?;
        if stored.is_expired() {
            self.clear();
            return None;
        }
        Some(stored.token)
    }

    fn set(&self, token: &str, ttl_days: i64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredToken {
            token: token.to_string(),
            expires_at: Utc::now() + Duration::days(ttl_days),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!("failed to remove token file: {}", e);
            }
        }
    }
}

/// In-memory store for tests and embedding
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<StoredToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still guards a valid Option; recover it so `clear`
    // keeps its never-fails contract after a panic elsewhere.
    fn lock(&self) -> MutexGuard<'_, Option<StoredToken>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        let mut inner = self.lock();
        match inner.as_ref() {
            Some(stored) if stored.is_expired() => {
                *inner = None;
                None
            }
            Some(stored) => Some(stored.token.clone()),
            None => None,
        }
    }

    fn set(&self, token: &str, ttl_days: i64) -> Result<()> {
        *self.lock() = Some(StoredToken {
            token: token.to_string(),
            expires_at: Utc::now() + Duration::days(ttl_days),
        });
        Ok(())
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}
