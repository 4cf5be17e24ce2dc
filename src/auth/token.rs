//! # Token Storage
//!
//! The bearer credential and the stores that hold it.
//!
//! A token is only handed out while it is live: once `expires_at` has passed
//! every store behaves as if nothing was ever saved. Login writes it, logout
//! clears it, controllers only read it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Lifetime of a credential obtained from `/login`.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Default TTL applied by the login flow.
pub fn default_ttl() -> Duration {
    Duration::days(TOKEN_TTL_DAYS)
}

/// Opaque bearer credential.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("Token file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Token file encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A token together with its expiry instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: Token,
    pub expires_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn new(token: Token, ttl: Duration) -> Self {
        Self {
            token,
            expires_at: Utc::now() + ttl,
        }
    }

    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Holder of the bearer credential.
///
/// Controllers only call [`TokenStore::get_token`]; the login flow is the only
/// writer.
pub trait TokenStore: Send + Sync {
    /// The live token, or `None` when absent or expired.
    fn get_token(&self) -> Option<Token>;

    /// Saves `token` for `ttl`, replacing any previous one.
    fn set_token(&self, token: Token, ttl: Duration) -> Result<(), TokenStoreError>;

    /// Forgets the token (logout).
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<StoredToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token` for the default TTL.
    pub fn with_token(token: Token) -> Self {
        Self {
            slot: RwLock::new(Some(StoredToken::new(token, default_ttl()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<Token> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        live_token(slot.as_ref())
    }

    fn set_token(&self, token: Token, ttl: Duration) -> Result<(), TokenStoreError> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(StoredToken::new(token, ttl));
        debug!(ttl_days = ttl.num_days(), "Token stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        debug!("Token cleared");
        Ok(())
    }
}

/// Token store persisted as a small JSON file, so a login survives restarts.
///
/// The file is read once, on first use, and served from memory afterwards;
/// `set_token` and `clear` update both. Writes go to a temporary file in the
/// same directory that is then renamed over the target, so a reader never
/// observes a truncated file.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    /// `None` until the file has been read.
    cached: RwLock<Option<Option<StoredToken>>>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<StoredToken>, TokenStoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, stored: &StoredToken) -> Result<(), TokenStoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut file, stored)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get_token(&self) -> Option<Token> {
        if let Some(stored) = &*self.cached.read().unwrap_or_else(PoisonError::into_inner) {
            return live_token(stored.as_ref());
        }

        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        let stored = cached.get_or_insert_with(|| match self.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable token file, treating as signed out");
                None
            }
        });
        live_token(stored.as_ref())
    }

    fn set_token(&self, token: Token, ttl: Duration) -> Result<(), TokenStoreError> {
        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        let stored = StoredToken::new(token, ttl);
        self.persist(&stored)?;
        info!(path = %self.path.display(), expires_at = %stored.expires_at, "Token persisted");
        *cached = Some(Some(stored));
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        match std::fs::remove_file(&self.path) {
            Ok(()) => info!(path = %self.path.display(), "Token file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        *cached = Some(None);
        Ok(())
    }
}

fn live_token(stored: Option<&StoredToken>) -> Option<Token> {
    stored
        .filter(|stored| stored.is_live_at(Utc::now()))
        .map(|stored| stored.token.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_memory_store_round_trip_and_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.get_token().is_none());

        store.set_token(Token::new("abc.def.ghi"), default_ttl()).unwrap();
        assert_eq!(store.get_token(), Some(Token::new("abc.def.ghi")));

        store.clear().unwrap();
        assert!(store.get_token().is_none());
    }

    #[test]
    fn test_expired_token_reads_as_absent() {
        let store = MemoryTokenStore::new();
        store.set_token(Token::new("stale"), Duration::zero()).unwrap();
        assert!(store.get_token().is_none());
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = Token::new("secret");
        assert_eq!(format!("{:?}", token), "Token(***)");
        assert_eq!(token.bearer_header(), "Bearer secret");
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token.json");

        FileTokenStore::new(&path)
            .set_token(Token::new("abc.def.ghi"), default_ttl())
            .unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get_token(), Some(Token::new("abc.def.ghi")));

        reopened.clear().unwrap();
        assert!(reopened.get_token().is_none());
        assert!(!path.exists());
        // Clearing twice is fine.
        reopened.clear().unwrap();
    }

    #[test]
    fn test_file_store_ignores_expired_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        let store = FileTokenStore::new(&path);

        store.set_token(Token::new("old"), Duration::days(-1)).unwrap();
        assert!(store.get_token().is_none());

        std::fs::write(&path, b"not json").unwrap();
        assert!(FileTokenStore::new(&path).get_token().is_none());
    }

    #[test]
    fn test_file_store_serves_reads_from_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        let store = FileTokenStore::new(&path);
        store.set_token(Token::new("abc.def.ghi"), default_ttl()).unwrap();

        std::fs::remove_file(&path).unwrap();

        assert_eq!(store.get_token(), Some(Token::new("abc.def.ghi")));
        assert!(FileTokenStore::new(&path).get_token().is_none());
    }

    #[test]
    fn test_file_store_never_exposes_a_partial_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        let writer = Arc::new(FileTokenStore::new(&path));
        writer.set_token(Token::new("abc.def.ghi"), default_ttl()).unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let saver = {
            let writer = writer.clone();
            let stop = stop.clone();
            std::thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    writer.set_token(Token::new("abc.def.ghi"), default_ttl()).unwrap();
                }
            })
        };

        // A fresh store reads the file each time, like a second process would.
        let signed_out = (0..2_000)
            .filter(|_| FileTokenStore::new(&path).get_token().is_none())
            .count();

        stop.store(true, Ordering::Relaxed);
        saver.join().unwrap();
        assert_eq!(signed_out, 0);
        assert_eq!(writer.get_token(), Some(Token::new("abc.def.ghi")));
    }
}
