//! In-memory caching for supplementary player data, plus file helpers.
//!
//! `ExpiringCache` keeps an LRU-bounded set of values stamped with the time
//! they were stored. Reads within the TTL are served from memory; a miss runs
//! the caller's fetch on a detached task, and concurrent callers for the same
//! key share that one in-flight fetch. A failed fetch falls back to the last
//! stored value even when it has expired, and to `V::default()` when nothing
//! was ever stored. Entries are only invalidated by TTL.

use log::{debug, warn};
use lru::LruCache;
use std::{
    collections::HashMap,
    fs,
    future::Future,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};
use tokio::sync::watch;

use crate::core::clock::{Clock, SystemClock};
use crate::fpl::types::{HistoryEntry, PlayerSummary};
use crate::fpl::FplClient;
use crate::{PlayerId, Result};


/// Summary data goes stale after five minutes.
pub const SUMMARY_TTL: Duration = Duration::from_secs(5 * 60);
/// Historical series go stale after ten minutes.
pub const HISTORY_TTL: Duration = Duration::from_secs(10 * 60);

/// Path: ~/.cache/fpl-planner
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-planner")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

#[derive(Debug, Clone)]
struct Stored<V> {
    value: V,
    stored_at: u64,
}

/// Outcome slot of one in-flight fetch: `None` while running, then
/// `Some(Some(v))` on success or `Some(None)` on failure.
type InFlight<V> = watch::Receiver<Option<Option<V>>>;

struct Shared<K, V> {
    entries: Mutex<LruCache<K, Stored<V>>>,
    in_flight: Mutex<HashMap<K, InFlight<V>>>,
    ttl: Duration,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl<K: Hash + Eq, V: Clone> Shared<K, V> {
    fn put(&self, key: K, value: V) {
        let stored = Stored {
            value,
            stored_at: self.clock.now_millis(),
        };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, stored);
    }

    fn get_stale(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).map(|s| s.value.clone())
    }
}

pub struct ExpiringCache<K, V> {
    shared: Arc<Shared<K, V>>,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Hash + Eq + Clone + std::fmt::Debug + Send + 'static,
    V: Clone + Default + Send + Sync + 'static,
{
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            shared: Arc::new(Shared {
                entries: Mutex::new(LruCache::new(cap)),
                in_flight: Mutex::new(HashMap::new()),
                ttl,
                capacity: cap.get(),
                clock,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.shared.ttl
    }

    /// Value stored within the TTL, if any.
    pub fn get_fresh(&self, key: &K) -> Option<V> {
        let shared = &self.shared;
        let now = shared.clock.now_millis();
        let mut entries = shared.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|s| now.saturating_sub(s.stored_at) < shared.ttl.as_millis() as u64)
            .map(|s| s.value.clone())
    }

    /// Last stored value regardless of age.
    pub fn get_stale(&self, key: &K) -> Option<V> {
        self.shared.get_stale(key)
    }

    pub fn put(&self, key: K, value: V) {
        self.shared.put(key, value);
    }

    /// Fresh value, or the result of `fetch` shared with any concurrent
    /// caller for the same key. Never fails: see the module docs.
    ///
    /// The fetch runs on its own task, so it still completes and fills the
    /// cache if every caller waiting on it is dropped. Must be called from
    /// within a tokio runtime.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        if let Some(v) = self.get_fresh(&key) {
            return v;
        }

        let mut rx = {
            let mut in_flight = self
                .shared
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let running = in_flight.get(&key).cloned();
            match running {
                Some(rx) => rx,
                None => {
                    let (tx, rx) = watch::channel(None);
                    in_flight.insert(key.clone(), rx.clone());
                    self.spawn_fetch(key.clone(), fetch(), tx);
                    rx
                }
            }
        };

        let fetched = match rx.wait_for(Option::is_some).await {
            Ok(outcome) => (*outcome).clone().flatten(),
            Err(_) => None,
        };

        match fetched {
            Some(v) => v,
            None => self.get_stale(&key).unwrap_or_default(),
        }
    }

    fn spawn_fetch<Fut>(&self, key: K, fut: Fut, tx: watch::Sender<Option<Option<V>>>)
    where
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            debug!("Fetching {:?}", key);
            let outcome = match fut.await {
                Ok(v) => {
                    shared.put(key.clone(), v.clone());
                    Some(v)
                }
                Err(e) => {
                    warn!("Fetch for {:?} failed: {}", key, e);
                    None
                }
            };
            // Only this task inserts or removes the entry for `key` while it runs.
            shared
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&key);
            let _ = tx.send(Some(outcome));
        });
    }

    /// Number of fetches still running.
    pub fn in_flight(&self) -> usize {
        self.shared
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn clear(&self) {
        self.shared
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// (entries, capacity)
    pub fn stats(&self) -> (usize, usize) {
        let entries = self
            .shared
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        (entries.len(), self.shared.capacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Summary,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerRequestKey {
    pub player: PlayerId,
    pub kind: RequestKind,
}

/// Per-player API caches: summaries (5 min) and history (10 min).
pub struct PlayerDataCache {
    summaries: ExpiringCache<PlayerRequestKey, PlayerSummary>,
    history: ExpiringCache<PlayerRequestKey, Vec<HistoryEntry>>,
}

impl PlayerDataCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            summaries: ExpiringCache::with_clock(500, SUMMARY_TTL, clock.clone()),
            history: ExpiringCache::with_clock(500, HISTORY_TTL, clock),
        }
    }

    /// Fixtures and history for a player; `{history: [], fixtures: []}` when
    /// the fetch fails and nothing was cached before.
    pub async fn summary(&self, client: &FplClient, player: PlayerId) -> PlayerSummary {
        let key = PlayerRequestKey {
            player,
            kind: RequestKind::Summary,
        };
        let client = client.clone();
        self.summaries
            .get_or_fetch(key, move || async move { client.element_summary(player).await })
            .await
    }

    /// Per-gameweek history for a player.
    pub async fn history(&self, client: &FplClient, player: PlayerId) -> Vec<HistoryEntry> {
        let key = PlayerRequestKey {
            player,
            kind: RequestKind::History,
        };
        let client = client.clone();
        self.history
            .get_or_fetch(key, move || async move {
                Ok(client.element_summary(player).await?.history)
            })
            .await
    }

    pub fn clear(&self) {
        self.summaries.clear();
        self.history.clear();
    }
}

impl Default for PlayerDataCache {
    fn default() -> Self {
        Self::new()
    }
}
