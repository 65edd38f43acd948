//! Bounded-age snapshot cache with single-flight refresh.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use log::debug;
use tokio::sync::Mutex;

use crate::snapshot::clock::Clock;
use crate::valuation::ValuationRecord;

/// One cached batch. Replaced wholesale on refresh, never patched.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub records: Vec<ValuationRecord>,
    pub computed_at: DateTime<Utc>,
}

/// Keyed snapshot cache.
///
/// Fresh entries are read concurrently without coordination; a stale or
/// missing entry is recomputed under a per-key lock so concurrent callers
/// inside the same refresh window trigger at most one compute, with the
/// rest awaiting its result. In practice a single process-wide key exists
/// because the watchlist is static, but the cache does not rely on that.
pub struct SnapshotCache {
    entries: DashMap<String, Snapshot>,
    flights: DashMap<String, Arc<Mutex<()>>>,
    max_age: Duration,
    clock: Arc<dyn Clock>,
}

impl SnapshotCache {
    /// Create a cache whose entries stay fresh for `max_age`.
    ///
    /// `max_age` is a policy knob: shorter windows trade upstream load for
    /// freshness. It should match the UI's polling period.
    pub fn new(max_age: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            flights: DashMap::new(),
            max_age,
            clock,
        }
    }

    /// Serve a fresh snapshot, or run `compute` (at most once per key per
    /// refresh window) to produce one.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> Vec<ValuationRecord>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<ValuationRecord>> + Send,
    {
        if let Some(snapshot) = self.fresh(key) {
            return snapshot.records;
        }

        let flight = self
            .flights
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = flight.lock().await;

        // Another caller may have refreshed while we waited for the lock.
        if let Some(snapshot) = self.fresh(key) {
            return snapshot.records;
        }

        debug!("Snapshot for '{}' stale or missing, recomputing", key);
        let records = compute().await;
        self.entries.insert(
            key.to_string(),
            Snapshot {
                records: records.clone(),
                computed_at: self.clock.now(),
            },
        );
        records
    }

    /// Current entry for `key`, if within `max_age`.
    fn fresh(&self, key: &str) -> Option<Snapshot> {
        let entry = self.entries.get(key)?;
        let age = self.clock.now() - entry.computed_at;
        if age <= self.max_age {
            Some(entry.clone())
        } else {
            None
        }
    }

    /// Timestamp of the cached entry, fresh or not.
    pub fn computed_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.get(key).map(|e| e.computed_at)
    }
}
