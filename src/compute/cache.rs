// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bounded drive cache
//!
//! Holds at most one [`DriveInfo`] per drive uuid and never more than its
//! capacity. Which entry is evicted when the cache is full is left to the
//! cache's admission policy, so callers must treat any entry as evictable.

use mini_moka::sync::{Cache, ConcurrentCacheExt};
use std::fmt;
use tracing::debug;

use crate::domain::DriveInfo;

/// Default number of drives kept by [`DriveCache::default`]
pub const DEFAULT_DRIVE_CACHE_CAPACITY: usize = 256;

/// Keyed, bounded cache of drive details
#[derive(Clone)]
pub struct DriveCache {
    capacity: usize,
    drives: Cache<String, DriveInfo>,
}

impl DriveCache {
    /// Create a cache; a capacity of zero is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            drives: Cache::new(capacity as u64),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached drives once pending evictions have been applied
    pub fn len(&self) -> usize {
        self.drives.sync();
        self.drives.entry_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, uuid: &str) -> bool {
        self.drives.contains_key(&uuid.to_owned())
    }

    /// Cached detail for `uuid`
    pub fn get(&self, uuid: &str) -> Option<DriveInfo> {
        self.drives.get(&uuid.to_owned())
    }

    /// Insert or replace the entry for `uuid`
    pub fn insert(&self, uuid: impl Into<String>, drive: DriveInfo) {
        let uuid = uuid.into();
        debug!("Caching drive {}", uuid);
        self.drives.insert(uuid, drive);
    }

    pub fn remove(&self, uuid: &str) -> Option<DriveInfo> {
        let removed = self.drives.get(&uuid.to_owned());
        self.drives.invalidate(&uuid.to_owned());
        removed
    }

    pub fn clear(&self) {
        let uuids: Vec<String> = self.drives.iter().map(|entry| entry.key().clone()).collect();
        for uuid in &uuids {
            self.drives.invalidate(uuid);
        }
    }
}

impl Default for DriveCache {
    fn default() -> Self {
        Self::new(DEFAULT_DRIVE_CACHE_CAPACITY)
    }
}

impl fmt::Debug for DriveCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriveCache")
            .field("capacity", &self.capacity)
            .field("len", &self.drives.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(name: &str) -> DriveInfo {
        DriveInfo::builder().name(name).build()
    }

    #[test]
    fn test_one_entry_per_key() {
        let cache = DriveCache::new(4);
        cache.insert("d1", drive("first"));
        cache.insert("d1", drive("second"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("d1").and_then(|d| d.name), Some("second".to_string()));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let cache = DriveCache::new(2);
        for i in 0..10 {
            cache.insert(format!("d{}", i), drive("filler"));
        }

        assert!(cache.len() <= 2);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_replacing_does_not_grow() {
        let cache = DriveCache::new(2);
        cache.insert("d1", drive("one"));
        cache.insert("d2", drive("two"));
        cache.insert("d1", drive("one again"));
        cache.insert("d2", drive("two again"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("d1").and_then(|d| d.name), Some("one again".to_string()));
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let cache = DriveCache::new(0);
        cache.insert("d1", drive("one"));
        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = DriveCache::default();
        cache.insert("d1", drive("one"));
        cache.insert("d2", drive("two"));

        assert!(cache.remove("d1").is_some());
        assert!(cache.remove("d1").is_none());
        assert!(!cache.contains("d1"));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = std::sync::Arc::new(DriveCache::new(8));
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for i in 0..16 {
                        cache.insert(format!("d{}", (worker + i) % 6), drive("shared"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 6);
    }
}
