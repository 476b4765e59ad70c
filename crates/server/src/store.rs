use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use shared_types::AppError;

// ── Trait ────────────────────────────────────────────────────────────

/// Storage for short code → source URL mappings with per-entry expiry.
///
/// Expired entries behave exactly like absent ones.
pub trait LinkStore: Send + Sync {
    /// Look up the source URL for a live short code.
    fn get(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Store a new mapping that expires after `ttl`.
    ///
    /// Fails with `Conflict` if `code` is already live, and with `StoreFull`
    /// if the store already holds its maximum number of live links.
    fn insert_new(&self, code: &str, full_url: &str, ttl: Duration) -> Result<(), AppError>;

    /// Number of live links.
    fn live_count(&self) -> Result<usize, AppError>;

    /// Drop expired entries. Returns how many were removed.
    fn purge_expired(&self) -> Result<usize, AppError>;
}

// ── In-memory implementation ────────────────────────────────────────

/// Expiry horizon used when `now + ttl` does not fit in an `Instant`.
const CENTURY: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

struct Entry {
    full_url: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Process-local link store. Contents do not survive a restart.
pub struct MemoryLinkStore {
    entries: Mutex<HashMap<String, Entry>>,
    capacity: usize,
}

impl MemoryLinkStore {
    /// Create a store holding at most `capacity` live links.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::internal("Link store lock poisoned"))
    }

    fn get_at(&self, code: &str, now: Instant) -> Result<Option<String>, AppError> {
        let mut entries = self.lock()?;
        match entries.get(code) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.full_url.clone())),
            Some(_) => {
                entries.remove(code);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn insert_new_at(
        &self,
        code: &str,
        full_url: &str,
        ttl: Duration,
        now: Instant,
    ) -> Result<(), AppError> {
        let mut entries = self.lock()?;

        if entries.get(code).is_some_and(|e| e.is_live(now)) {
            return Err(AppError::conflict("Short link already exists"));
        }

        if entries.len() >= self.capacity {
            entries.retain(|_, e| e.is_live(now));
            if entries.len() >= self.capacity {
                return Err(AppError::store_full("Link store is full"));
            }
        }

        let expires_at = now
            .checked_add(ttl)
            .or_else(|| now.checked_add(CENTURY))
            .unwrap_or(now);
        entries.insert(
            code.to_string(),
            Entry {
                full_url: full_url.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    fn live_count_at(&self, now: Instant) -> Result<usize, AppError> {
        Ok(self.lock()?.values().filter(|e| e.is_live(now)).count())
    }

    fn purge_expired_at(&self, now: Instant) -> Result<usize, AppError> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|_, e| e.is_live(now));
        Ok(before - entries.len())
    }
}

impl LinkStore for MemoryLinkStore {
    fn get(&self, code: &str) -> Result<Option<String>, AppError> {
        self.get_at(code, Instant::now())
    }

    fn insert_new(&self, code: &str, full_url: &str, ttl: Duration) -> Result<(), AppError> {
        self.insert_new_at(code, full_url, ttl, Instant::now())
    }

    fn live_count(&self) -> Result<usize, AppError> {
        self.live_count_at(Instant::now())
    }

    fn purge_expired(&self) -> Result<usize, AppError> {
        self.purge_expired_at(Instant::now())
    }
}
