//! Cached repository star count
//!
//! The count is fetched from a remote source at most once per [`CACHE_TTL_SECS`].
//! Fetching itself is supplied by the caller, so this module never touches the
//! network.

use super::SettingsStore;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, warn};

pub const STARS_KEY: &str = "github_stars_cache";

/// Cache lifetime: one hour
pub const CACHE_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarCache {
    pub stars: u64,
    pub timestamp: DateTime<Utc>,
}

impl StarCache {
    /// Fresh while less than [`CACHE_TTL_SECS`] old at `now`
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp) < Duration::seconds(CACHE_TTL_SECS)
    }
}

fn load_cache(store: &dyn SettingsStore) -> Option<StarCache> {
    let value = store.get(STARS_KEY)?;
    serde_json::from_value(value)
        .map_err(|e| warn!("Ignoring malformed star cache: {}", e))
        .ok()
}

/// Cached count if it is still fresh at `now`
pub fn cached_stars(store: &dyn SettingsStore, now: DateTime<Utc>) -> Option<u64> {
    load_cache(store)
        .filter(|cache| cache.is_fresh(now))
        .map(|cache| cache.stars)
}

/// Star count, fetching only when the cache is missing or stale.
///
/// A successful fetch is cached with `now` as its timestamp. When the fetch fails,
/// the stale cached count is returned, or 0 if there is none.
pub fn resolve_stars<E, F>(store: &mut dyn SettingsStore, now: DateTime<Utc>, fetch: F) -> u64
where
    E: Display,
    F: FnOnce() -> Result<u64, E>,
{
    let cached = load_cache(store);
    if let Some(cache) = cached.filter(|cache| cache.is_fresh(now)) {
        debug!("Using cached star count {}", cache.stars);
        return cache.stars;
    }

    match fetch() {
        Ok(stars) => {
            let cache = StarCache {
                stars,
                timestamp: now,
            };
            match serde_json::to_value(cache) {
                Ok(value) => {
                    if let Err(e) = store.set(STARS_KEY, value) {
                        warn!("Failed to cache star count: {}", e);
                    }
                }
                Err(e) => warn!("Failed to encode star count: {}", e),
            }
            stars
        }
        Err(e) => {
            warn!("Failed to fetch star count: {}", e);
            cached.map_or(0, |cache| cache.stars)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;
    use std::cell::Cell;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).expect("valid timestamp")
    }

    #[test]
    fn test_fresh_within_an_hour() {
        let cache = StarCache {
            stars: 12,
            timestamp: at(0),
        };
        assert!(cache.is_fresh(at(0)));
        assert!(cache.is_fresh(at(CACHE_TTL_SECS - 1)));
        assert!(!cache.is_fresh(at(CACHE_TTL_SECS)));
    }

    #[test]
    fn test_no_fetch_while_fresh() {
        let mut store = MemoryStore::new();
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            Ok::<u64, String>(5)
        };

        assert_eq!(resolve_stars(&mut store, at(0), fetch), 5);
        assert_eq!(resolve_stars(&mut store, at(60), fetch), 5);
        assert_eq!(calls.get(), 1);
        assert_eq!(cached_stars(&store, at(60)), Some(5));
    }

    #[test]
    fn test_refetch_when_stale() {
        let mut store = MemoryStore::new();
        resolve_stars(&mut store, at(0), || Ok::<u64, String>(5));

        let stars = resolve_stars(&mut store, at(CACHE_TTL_SECS + 1), || {
            Ok::<u64, String>(9)
        });
        assert_eq!(stars, 9);
        assert_eq!(cached_stars(&store, at(CACHE_TTL_SECS + 1)), Some(9));
    }

    #[test]
    fn test_failed_fetch_falls_back() {
        let mut store = MemoryStore::new();
        assert_eq!(
            resolve_stars(&mut store, at(0), || Err::<u64, _>("offline")),
            0
        );

        resolve_stars(&mut store, at(0), || Ok::<u64, String>(7));
        let stale = at(2 * CACHE_TTL_SECS);
        assert_eq!(resolve_stars(&mut store, stale, || Err::<u64, _>("offline")), 7);
        assert_eq!(cached_stars(&store, stale), None);
    }
}
