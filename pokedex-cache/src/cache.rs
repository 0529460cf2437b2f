//! In-memory TTL cache with a background reaper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, trace};

/// One cached response body.
///
/// Immutable once created; re-inserting the same key replaces the entry
/// wholesale.
#[derive(Clone)]
struct CacheEntry {
    value: Bytes,
    created_at: Instant,
}

impl CacheEntry {
    fn age(&self, now: Instant) -> Duration {
        now.duration_since(self.created_at)
    }
}

/// In-memory key-value cache whose entries expire after a fixed TTL.
///
/// Keys are outbound request URLs, stored verbatim; values are opaque
/// bytes. A background reaper task wakes once per TTL interval and deletes
/// every entry older than the TTL. [`get`](Self::get) itself never checks
/// age: an entry that has expired but not yet been reaped is still a hit,
/// so a hit can be up to one TTL plus one reap interval old.
///
/// The map is the only shared state and is guarded by a single mutex, held
/// only for the duration of each individual access and never across I/O.
///
/// Must be constructed inside a Tokio runtime (the reaper is a spawned
/// task). Dropping the cache stops the reaper via channel close;
/// [`shutdown`](Self::shutdown) does the same deterministically and waits
/// for the task to finish.
pub struct ExpiringCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    ttl: Duration,
    shutdown_tx: watch::Sender<bool>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl ExpiringCache {
    /// Creates an empty cache and starts its reaper task.
    pub fn new(ttl: Duration) -> Self {
        let entries = Arc::new(Mutex::new(HashMap::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = tokio::spawn(reap_loop(Arc::clone(&entries), ttl, shutdown_rx));

        Self {
            entries,
            ttl,
            shutdown_tx,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    /// Inserts or overwrites the entry for `key`, timestamped now.
    ///
    /// Visible to `get` from any task as soon as this returns. Cannot fail.
    pub fn add(&self, key: &str, value: Bytes) {
        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
        };
        self.entries.lock().insert(key.to_owned(), entry);
    }

    /// Returns the value stored under `key` if the key is present at the
    /// moment of the call, regardless of its age.
    ///
    /// Expiry is the reaper's job alone; a `get` racing a reap pass may
    /// see either the stale value or a miss.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.lock().get(key).map(|entry| entry.value.clone())
    }

    /// The TTL shared by all entries, fixed at construction.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries currently in the map, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Stops the reaper task and waits for it to finish.
    ///
    /// Entries already in the map stay readable but are no longer evicted.
    /// Calling this more than once is a no-op.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
        let handle = self.reaper.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

/// Reaper loop: one pass per TTL interval until shutdown.
///
/// Holds only the map `Arc`, so an `ExpiringCache` being dropped closes
/// the watch channel and ends the loop.
async fn reap_loop(
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    ttl: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(ttl);
    // An interval's first tick completes immediately; consume it so the
    // first reap lands one full interval after construction.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => reap(&entries, ttl),
            changed = shutdown_rx.changed() => {
                // Explicit shutdown, or every sender dropped.
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    trace!("cache reaper stopped");
}

/// Deletes every entry whose age exceeds the TTL.
fn reap(entries: &Mutex<HashMap<String, CacheEntry>>, ttl: Duration) {
    let now = Instant::now();
    let mut map = entries.lock();
    let before = map.len();
    map.retain(|_, entry| entry.age(now) <= ttl);
    let evicted = before - map.len();
    if evicted > 0 {
        debug!(evicted, remaining = map.len(), "reaped expired cache entries");
    }
}
