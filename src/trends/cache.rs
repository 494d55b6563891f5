use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::types::{TrendKey, TrendRecord};

/// Time source for cache freshness checks.
///
/// Injected so tests can step time deterministically instead of sleeping
/// through a real TTL window.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Snapshot of cache occupancy, as reported by the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<TrendKey>,
}

/// TTL-aware store for synthesized trend records.
///
/// Freshness is decided against the `now` the caller passes in, so the cache
/// itself never reads the wall clock. A hit is only returned while
/// `now - inserted_at < ttl`; stale entries are evicted lazily on the lookup
/// that finds them expired, never swept proactively.
pub trait TrendCache {
    fn get(&mut self, key: &TrendKey, now: DateTime<Utc>) -> Option<TrendRecord>;
    fn put(&mut self, key: TrendKey, record: TrendRecord, now: DateTime<Utc>);
    fn clear(&mut self);
    fn stats(&self) -> CacheStats;
}

#[derive(Debug, Clone)]
struct Entry {
    record: TrendRecord,
    inserted_at: DateTime<Utc>,
}

/// In-memory map-backed cache with a fixed TTL (one hour by default).
#[derive(Debug)]
pub struct InMemoryTrendCache {
    ttl: Duration,
    entries: BTreeMap<TrendKey, Entry>,
}

impl InMemoryTrendCache {
    pub const DEFAULT_TTL_SECS: i64 = 3600;

    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(Self::DEFAULT_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: BTreeMap::new(),
        }
    }
}

impl Default for InMemoryTrendCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendCache for InMemoryTrendCache {
    fn get(&mut self, key: &TrendKey, now: DateTime<Utc>) -> Option<TrendRecord> {
        match self.entries.get(key) {
            Some(entry) if now - entry.inserted_at < self.ttl => Some(entry.record.clone()),
            Some(_) => {
                // Lazy eviction: drop the stale entry on the lookup that saw it.
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&mut self, key: TrendKey, record: TrendRecord, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            Entry {
                record,
                inserted_at: now,
            },
        );
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            keys: self.entries.keys().cloned().collect(),
        }
    }
}
