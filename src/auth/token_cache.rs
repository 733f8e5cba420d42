use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Persisted session credential with its expiry timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    /// Unix timestamp after which the token is discarded locally
    expires_at: i64,
}

impl StoredToken {
    fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

/// Storage for the opaque bearer token identifying the current session
///
/// The token is opaque to the client; this layer only persists it with a
/// time-to-live and hands it back while it is still live. Clearing never
/// fails from the caller's point of view.
pub trait TokenCache: Send + Sync {
    /// Persist a token that expires `ttl_days` from now
    fn store(&self, token: &str, ttl_days: i64) -> io::Result<()>;

    /// The current token, or `None` when absent or expired
    fn get(&self) -> Option<String>;

    /// Remove any persisted token
    fn clear(&self);
}

/// Token cache backed by a JSON file
///
/// Plays the role the session cookie played in the original web client.
pub struct FileTokenCache {
    path: PathBuf,
}

impl FileTokenCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenCache for FileTokenCache {
    fn store(&self, token: &str, ttl_days: i64) -> io::Result<()> {
        let stored = StoredToken {
            token: token.to_string(),
            expires_at: Utc::now().timestamp() + ttl_days * 24 * 60 * 60,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string(&stored)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, body)
    }

    fn get(&self) -> Option<String> {
        let body = fs::read_to_string(&self.path).ok()?;
        let stored: StoredToken = serde_json::from_str(&body).ok()?;
        if stored.is_expired() {
            tracing::debug!("Persisted session token has expired, discarding");
            self.clear();
            return None;
        }
        Some(stored.token)
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove session token file: {}", e);
            }
        }
    }
}

/// In-memory token cache for tests and embedders that manage persistence
/// themselves
#[derive(Default)]
pub struct MemoryTokenCache {
    slot: Mutex<Option<StoredToken>>,
}

impl MemoryTokenCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenCache for MemoryTokenCache {
    fn store(&self, token: &str, ttl_days: i64) -> io::Result<()> {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some(StoredToken {
            token: token.to_string(),
            expires_at: Utc::now().timestamp() + ttl_days * 24 * 60 * 60,
        });
        Ok(())
    }

    fn get(&self) -> Option<String> {
        let mut slot = self.slot.lock().unwrap();
        match &*slot {
            Some(stored) if stored.is_expired() => {
                *slot = None;
                None
            }
            Some(stored) => Some(stored.token.clone()),
            None => None,
        }
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
