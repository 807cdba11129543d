//! # Eligibility Cache
//!
//! Memoizes the [`Eligibility`] of the most recent tile layout.
//!
//! The cache is an explicit object owned by its caller; nothing is held in
//! global state. A lookup compares the requested layout with the cached one
//! and recomputes on mismatch, so a stale entry can never be returned.
//!
//! ## Example
//!
//! ```rust
//! use opengrid_layout::{EligibilityCache, TileGrid};
//!
//! let tiles = TileGrid::filled(3, 3).unwrap();
//! let mut cache = EligibilityCache::new();
//! let screws = cache.get(&tiles).screws().count();
//! assert_eq!(screws, 4);
//! cache.get(&tiles);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use tracing::trace;

use crate::eligibility::Eligibility;
use crate::grid::TileGrid;

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, 0.0 when unused.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    tiles: TileGrid,
    eligibility: Eligibility,
}

/// Single-entry cache of eligibility keyed by tile layout.
#[derive(Debug, Clone, Default)]
pub struct EligibilityCache {
    entry: Option<CacheEntry>,
    stats: CacheStats,
}

impl EligibilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Eligibility for `tiles`, recomputed if the layout changed.
    pub fn get(&mut self, tiles: &TileGrid) -> &Eligibility {
        let hit = self.entry.as_ref().is_some_and(|e| e.tiles == *tiles);
        if hit {
            self.stats.hits += 1;
        } else {
            trace!(rows = tiles.rows(), cols = tiles.cols(), "recomputing eligibility");
            self.stats.misses += 1;
            self.entry = None;
        }
        let entry = self.entry.get_or_insert_with(|| CacheEntry {
            tiles: tiles.clone(),
            eligibility: Eligibility::compute(tiles),
        });
        &entry.eligibility
    }

    /// Drops the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// True if an entry is held.
    pub fn is_warm(&self) -> bool {
        self.entry.is_some()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
